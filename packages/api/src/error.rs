//! Error types for the user API client.

use thiserror::Error;

/// Errors that can occur while talking to the user API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Base URL or request path could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Request never produced a response (network down, CORS, DNS)
    #[error("Request failed: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("HTTP {status}")]
    Status { status: u16 },

    /// Response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Result type for user API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
