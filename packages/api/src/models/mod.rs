//! Data models exchanged with the user API.

mod user;

pub use user::{ApiMessage, UserPayload, UserRecord};
