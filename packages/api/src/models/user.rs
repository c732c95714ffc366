//! # User models for the registration API
//!
//! Three shapes cross the wire:
//!
//! ## [`UserRecord`]
//!
//! One row of the `users` table as returned by `GET /api/list`. The server owns
//! the record; the client keeps it only long enough to render a table row or
//! prefill the edit form.
//!
//! ## [`UserPayload`]
//!
//! The `{name, email}` body sent with `POST /api/register` and
//! `PUT /api/update/<id>`. [`UserPayload::new`] trims both fields the same way
//! the form does before submitting.
//!
//! ## [`ApiMessage`]
//!
//! The `{message}` envelope every mutation answers with, on success and on
//! failure alike. The server also sends a `status` of `"success"` or `"error"`,
//! kept here for logging; the HTTP status remains the source of truth.

use serde::{Deserialize, Serialize};

/// A user record owned by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl UserRecord {
    /// The payload that would write this record back unchanged.
    pub fn to_payload(&self) -> UserPayload {
        UserPayload {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Request body for create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
}

impl UserPayload {
    /// Build a payload from raw input, trimming surrounding whitespace.
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
        }
    }

    /// Both fields are required by the server.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }
}

/// Response envelope for mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ApiMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: Some("success".to_string()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: Some("error".to_string()),
        }
    }
}
