//! Typed client for the user API.

use crate::error::{ApiError, Result};
use crate::models::{ApiMessage, UserPayload, UserRecord};
use crate::query::ListQuery;
use crate::request::ApiRequest;
use crate::transport::Transport;

/// Result of a create, update or delete that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    /// 2xx status
    pub ok: bool,
    pub status: u16,
    /// Server-supplied message, or `HTTP <status>` when the body had none.
    pub message: String,
}

/// User API client over any [`Transport`].
#[derive(Debug, Clone)]
pub struct UserApi<T> {
    transport: T,
}

impl<T: Transport> UserApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch records. A non-success status becomes [`ApiError::Status`].
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<UserRecord>> {
        let request = ApiRequest::list(query);
        let response = self.transport.send(&request).await?;
        if !response.is_success() {
            tracing::warn!("{} answered {}", request.target(), response.status);
            return Err(ApiError::Status {
                status: response.status,
            });
        }
        let users: Vec<UserRecord> = response.decode()?;
        tracing::debug!("{} returned {} records", request.target(), users.len());
        Ok(users)
    }

    pub async fn register(&self, payload: UserPayload) -> Result<MutationOutcome> {
        self.mutate(ApiRequest::register(payload)).await
    }

    pub async fn update(&self, id: i64, payload: UserPayload) -> Result<MutationOutcome> {
        self.mutate(ApiRequest::update(id, payload)).await
    }

    pub async fn delete(&self, id: i64) -> Result<MutationOutcome> {
        self.mutate(ApiRequest::delete(id)).await
    }

    async fn mutate(&self, request: ApiRequest) -> Result<MutationOutcome> {
        let response = self.transport.send(&request).await?;
        let ok = response.is_success();
        let message = match response.decode::<ApiMessage>() {
            Ok(body) => body.message,
            Err(e) => {
                tracing::warn!("{}: unreadable response body: {}", request.target(), e);
                format!("HTTP {}", response.status)
            }
        };
        if ok {
            tracing::info!("{} -> {}", request.target(), response.status);
        } else {
            tracing::warn!("{} -> {}: {}", request.target(), response.status, message);
        }
        Ok(MutationOutcome {
            ok,
            status: response.status,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryTransport;
    use crate::request::Method;

    fn taro() -> UserRecord {
        UserRecord {
            id: 1,
            name: "太郎".to_string(),
            email: "a@x.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_returns_records() {
        let api = UserApi::new(MemoryTransport::with_users([taro()]));
        let users = api.list(&ListQuery::all()).await.unwrap();
        assert_eq!(users, vec![taro()]);
    }

    #[tokio::test]
    async fn test_list_maps_error_status() {
        let transport = MemoryTransport::new();
        transport.fail_next_with_status(404);
        let api = UserApi::new(transport);
        assert_eq!(
            api.list(&ListQuery::all()).await.unwrap_err(),
            ApiError::Status { status: 404 }
        );
    }

    #[tokio::test]
    async fn test_register_sends_payload() {
        let api = UserApi::new(MemoryTransport::new());
        let outcome = api.register(UserPayload::new("B", "b@x.com")).await.unwrap();
        assert!(outcome.ok);
        assert_eq!(outcome.status, 200);

        let sent = api.transport().last_request().unwrap();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.path, "/api/register");
        assert_eq!(sent.body, Some(UserPayload::new("B", "b@x.com")));
    }

    #[tokio::test]
    async fn test_failed_mutation_keeps_server_message() {
        let api = UserApi::new(MemoryTransport::with_users([taro()]));
        let outcome = api.update(5, UserPayload::new("x", "y@x.com")).await.unwrap();
        assert!(!outcome.ok);
        assert_eq!(outcome.status, 404);
        assert_eq!(outcome.message, "該当ユーザーが見つかりません。");
    }

    #[tokio::test]
    async fn test_offline_mutation_is_an_error() {
        let transport = MemoryTransport::new();
        transport.fail_next_offline("network down");
        let api = UserApi::new(transport);
        assert!(matches!(
            api.delete(1).await,
            Err(ApiError::Transport(_))
        ));
    }
}
