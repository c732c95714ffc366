//! Transport-neutral request and response values.
//!
//! Panels never build URLs themselves. They describe what they want as an
//! [`ApiRequest`] and a [`crate::Transport`] turns it into an [`ApiResponse`].

use std::fmt;

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::models::UserPayload;
use crate::query::ListQuery;

/// HTTP verbs used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single call against the user API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API origin, always starting with `/api/`.
    pub path: String,
    /// Unencoded query pairs; the transport encodes them.
    pub query: Vec<(String, String)>,
    pub body: Option<UserPayload>,
}

impl ApiRequest {
    /// `GET /api/list` with optional filter and sort.
    pub fn list(query: &ListQuery) -> Self {
        Self {
            method: Method::Get,
            path: "/api/list".to_string(),
            query: query.pairs(),
            body: None,
        }
    }

    /// `POST /api/register`
    pub fn register(payload: UserPayload) -> Self {
        Self {
            method: Method::Post,
            path: "/api/register".to_string(),
            query: Vec::new(),
            body: Some(payload),
        }
    }

    /// `PUT /api/update/<id>`
    pub fn update(id: i64, payload: UserPayload) -> Self {
        Self {
            method: Method::Put,
            path: format!("/api/update/{id}"),
            query: Vec::new(),
            body: Some(payload),
        }
    }

    /// `DELETE /api/delete/<id>`
    pub fn delete(id: i64) -> Self {
        Self {
            method: Method::Delete,
            path: format!("/api/delete/{id}"),
            query: Vec::new(),
            body: None,
        }
    }

    /// Human-readable target such as `GET /api/list?q=太郎`.
    pub fn target(&self) -> String {
        if self.query.is_empty() {
            return format!("{} {}", self.method, self.path);
        }
        let qs = self
            .query
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{} {}?{}", self.method, self.path, qs)
    }

    /// Value of a query parameter, if present.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response: status code plus the undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Serialize `value` as the JSON body.
    pub fn json<T: serde::Serialize>(status: u16, value: &T) -> Result<Self> {
        Ok(Self::new(status, serde_json::to_string(value)?))
    }

    /// 2xx, same rule as `Response.ok` in the browser.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
