//! # API crate — client for the user registration API
//!
//! Everything the panels know about the backend lives here. The backend itself
//! is an external service exposing four JSON endpoints:
//!
//! | Endpoint | Body | Answer |
//! |----------|------|--------|
//! | `GET /api/list[?q=..][&sort=..]` | — | `[{id, name, email}]` |
//! | `POST /api/register` | `{name, email}` | `{message}` |
//! | `PUT /api/update/<id>` | `{name, email}` | `{message}` |
//! | `DELETE /api/delete/<id>` | — | `{message}` |
//!
//! A 2xx status means the operation succeeded; anything else is a failure whose
//! message is still meant for the user.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | `UserRecord`, `UserPayload`, `ApiMessage` |
//! | [`query`] | `ListQuery` filter/sort and the `SortKey` vocabulary |
//! | [`request`] | Transport-neutral `ApiRequest` / `ApiResponse` |
//! | [`transport`] | The async `Transport` seam |
//! | [`http`] | `HttpTransport` over `reqwest` (native and wasm) |
//! | [`memory`] | `MemoryTransport`, an in-memory backend for tests and demos |
//! | [`client`] | `UserApi`, the typed client the panels call |
//! | [`config`] | `ClientConfig` loaded from `userdesk.toml` |
//! | [`error`] | `ApiError` |

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod memory;
pub mod models;
pub mod query;
pub mod request;
pub mod transport;

pub use client::{MutationOutcome, UserApi};
pub use config::{ClientConfig, QueryPreset};
pub use error::ApiError;
pub use http::HttpTransport;
pub use memory::MemoryTransport;
pub use models::{ApiMessage, UserPayload, UserRecord};
pub use query::{ListQuery, SortKey};
pub use request::{ApiRequest, ApiResponse, Method};
pub use transport::Transport;
