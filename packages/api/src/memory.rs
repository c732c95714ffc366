use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{ApiError, Result};
use crate::models::{ApiMessage, UserPayload, UserRecord};
use crate::query::SortKey;
use crate::request::{ApiRequest, ApiResponse, Method};
use crate::transport::Transport;

/// Scripted failure returned instead of consulting the table.
#[derive(Clone, Debug, PartialEq)]
enum Fault {
    Status(u16),
    Offline(String),
}

#[derive(Debug, Default)]
struct State {
    users: Vec<UserRecord>,
    next_id: i64,
    requests: Vec<ApiRequest>,
    faults: VecDeque<Fault>,
}

/// In-memory stand-in for the user API, for tests and offline demos.
///
/// Answers exactly like the real backend: validation failures are 400,
/// duplicate emails 409, unknown ids 404, and the list honours `q` and `sort`.
/// Every request is recorded so callers can assert on what was sent.
#[derive(Clone, Debug, Default)]
pub struct MemoryTransport {
    state: Arc<Mutex<State>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the table. Ids are kept; new ids continue after the largest.
    pub fn with_users(users: impl IntoIterator<Item = UserRecord>) -> Self {
        let transport = Self::new();
        {
            let mut state = transport.lock();
            state.users = users.into_iter().collect();
            state.next_id = state.users.iter().map(|u| u.id).max().unwrap_or(0);
        }
        transport
    }

    /// Make the next request answer `status` with an error message.
    pub fn fail_next_with_status(&self, status: u16) {
        self.lock().faults.push_back(Fault::Status(status));
    }

    /// Make the next request fail before reaching the server.
    pub fn fail_next_offline(&self, reason: &str) {
        self.lock().faults.push_back(Fault::Offline(reason.to_string()));
    }

    /// Requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.lock().requests.clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.lock().requests.last().cloned()
    }

    /// Current table contents in insertion order.
    pub fn users(&self) -> Vec<UserRecord> {
        self.lock().users.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A panicking test thread must not hide the table from the others.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Transport for MemoryTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let mut state = self.lock();
        state.requests.push(request.clone());

        match state.faults.pop_front() {
            Some(Fault::Offline(reason)) => return Err(ApiError::Transport(reason)),
            Some(Fault::Status(status)) => {
                return ApiResponse::json(status, &ApiMessage::error(format!("HTTP {status}")))
            }
            None => {}
        }

        route(&mut state, request)
    }
}

fn route(state: &mut State, request: &ApiRequest) -> Result<ApiResponse> {
    let segments: Vec<&str> = request.path.trim_start_matches('/').split('/').collect();
    match (request.method, segments.as_slice()) {
        (Method::Get, ["api", "list"]) => list(state, request),
        (Method::Post, ["api", "register"]) => register(state, request.body.as_ref()),
        (Method::Put, ["api", "update", id]) => match id.parse() {
            Ok(id) => update(state, id, request.body.as_ref()),
            Err(_) => not_found(),
        },
        (Method::Delete, ["api", "delete", id]) => match id.parse() {
            Ok(id) => delete(state, id),
            Err(_) => not_found(),
        },
        _ => not_found(),
    }
}

fn list(state: &State, request: &ApiRequest) -> Result<ApiResponse> {
    // Like the backend's SQL LIKE: ASCII letters match regardless of case.
    let q = request
        .query_param("q")
        .map(|q| q.trim().to_ascii_lowercase())
        .unwrap_or_default();
    let sort = request
        .query_param("sort")
        .and_then(SortKey::parse)
        .unwrap_or_default();

    let mut users: Vec<UserRecord> = state
        .users
        .iter()
        .filter(|u| {
            q.is_empty()
                || u.name.to_ascii_lowercase().contains(&q)
                || u.email.to_ascii_lowercase().contains(&q)
        })
        .cloned()
        .collect();
    match sort {
        SortKey::IdAsc => users.sort_by_key(|u| u.id),
        SortKey::IdDesc => users.sort_by_key(|u| std::cmp::Reverse(u.id)),
        SortKey::NameAsc => users.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::NameDesc => users.sort_by(|a, b| b.name.cmp(&a.name)),
        SortKey::EmailAsc => users.sort_by(|a, b| a.email.cmp(&b.email)),
        SortKey::EmailDesc => users.sort_by(|a, b| b.email.cmp(&a.email)),
    }
    ApiResponse::json(200, &users)
}

fn required(body: Option<&UserPayload>) -> Option<&UserPayload> {
    body.filter(|p| p.is_complete())
}

fn register(state: &mut State, body: Option<&UserPayload>) -> Result<ApiResponse> {
    let Some(payload) = required(body) else {
        return ApiResponse::json(400, &ApiMessage::error("名前とメールは必須です。"));
    };
    if state.users.iter().any(|u| u.email == payload.email) {
        return ApiResponse::json(409, &ApiMessage::error("このアドレスはすでに登録済みです。"));
    }
    state.next_id += 1;
    state.users.push(UserRecord {
        id: state.next_id,
        name: payload.name.clone(),
        email: payload.email.clone(),
    });
    ApiResponse::json(
        200,
        &ApiMessage::success(format!("{} さんを登録しました！", payload.name)),
    )
}

fn update(state: &mut State, id: i64, body: Option<&UserPayload>) -> Result<ApiResponse> {
    let Some(payload) = required(body) else {
        return ApiResponse::json(400, &ApiMessage::error("名前とメールは必須です。"));
    };
    if state
        .users
        .iter()
        .any(|u| u.id != id && u.email == payload.email)
    {
        return ApiResponse::json(409, &ApiMessage::error("このアドレスはすでに登録済みです。"));
    }
    let Some(user) = state.users.iter_mut().find(|u| u.id == id) else {
        return not_found();
    };
    user.name = payload.name.clone();
    user.email = payload.email.clone();
    ApiResponse::json(200, &ApiMessage::success("更新しました。"))
}

fn delete(state: &mut State, id: i64) -> Result<ApiResponse> {
    let before = state.users.len();
    state.users.retain(|u| u.id != id);
    if state.users.len() == before {
        return not_found();
    }
    ApiResponse::json(200, &ApiMessage::success("削除しました。"))
}

fn not_found() -> Result<ApiResponse> {
    ApiResponse::json(404, &ApiMessage::error("該当ユーザーが見つかりません。"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ListQuery;

    fn user(id: i64, name: &str, email: &str) -> UserRecord {
        UserRecord {
            id,
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    async fn list_ids(transport: &MemoryTransport, query: &ListQuery) -> Vec<i64> {
        let res = transport.send(&ApiRequest::list(query)).await.unwrap();
        res.decode::<Vec<UserRecord>>()
            .unwrap()
            .into_iter()
            .map(|u| u.id)
            .collect()
    }

    #[tokio::test]
    async fn test_register_assigns_ids() {
        let transport = MemoryTransport::new();

        let res = transport
            .send(&ApiRequest::register(UserPayload::new("B", "b@x.com")))
            .await
            .unwrap();
        assert_eq!(res.status, 200);
        assert_eq!(res.decode::<ApiMessage>().unwrap().message, "B さんを登録しました！");

        transport
            .send(&ApiRequest::register(UserPayload::new("C", "c@x.com")))
            .await
            .unwrap();
        assert_eq!(list_ids(&transport, &ListQuery::all()).await, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_register_validation_and_duplicates() {
        let transport = MemoryTransport::with_users([user(1, "太郎", "a@x.com")]);

        let missing = transport
            .send(&ApiRequest::register(UserPayload::new("", "z@x.com")))
            .await
            .unwrap();
        assert_eq!(missing.status, 400);

        let duplicate = transport
            .send(&ApiRequest::register(UserPayload::new("別人", "a@x.com")))
            .await
            .unwrap();
        assert_eq!(duplicate.status, 409);
        assert_eq!(transport.users().len(), 1);
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_id() {
        let transport = MemoryTransport::with_users([user(1, "太郎", "a@x.com")]);

        let res = transport
            .send(&ApiRequest::update(1, UserPayload::new("次郎", "j@x.com")))
            .await
            .unwrap();
        assert_eq!(res.status, 200);
        assert_eq!(transport.users()[0].name, "次郎");

        let res = transport
            .send(&ApiRequest::update(42, UserPayload::new("x", "y")))
            .await
            .unwrap();
        assert_eq!(res.status, 404);

        assert_eq!(transport.send(&ApiRequest::delete(1)).await.unwrap().status, 200);
        assert_eq!(transport.send(&ApiRequest::delete(1)).await.unwrap().status, 404);
        assert!(transport.users().is_empty());
    }

    #[tokio::test]
    async fn test_update_rejects_email_of_another_user() {
        let transport = MemoryTransport::with_users([user(1, "A", "a@x.com"), user(2, "B", "b@x.com")]);

        let res = transport
            .send(&ApiRequest::update(2, UserPayload::new("B", "a@x.com")))
            .await
            .unwrap();
        assert_eq!(res.status, 409);
        assert_eq!(
            res.decode::<ApiMessage>().unwrap().message,
            "このアドレスはすでに登録済みです。"
        );
        assert_eq!(transport.users()[1].email, "b@x.com");

        // Keeping one's own address is not a conflict.
        let res = transport
            .send(&ApiRequest::update(2, UserPayload::new("Bee", "b@x.com")))
            .await
            .unwrap();
        assert_eq!(res.status, 200);
        assert_eq!(transport.users()[1].name, "Bee");
    }

    #[tokio::test]
    async fn test_list_filter_and_sort() {
        let transport = MemoryTransport::with_users([
            user(1, "太郎", "z@x.com"),
            user(2, "花子", "a@x.com"),
            user(3, "太郎丸", "m@x.com"),
            user(4, "Alice", "alice@x.com"),
        ]);

        assert_eq!(list_ids(&transport, &ListQuery::search("太郎")).await, vec![3, 1]);
        assert_eq!(list_ids(&transport, &ListQuery::search("a@")).await, vec![2]);
        assert_eq!(list_ids(&transport, &ListQuery::search("ALICE")).await, vec![4]);
        assert_eq!(list_ids(&transport, &ListQuery::search("alice")).await, vec![4]);
        assert_eq!(
            list_ids(&transport, &ListQuery::sorted(SortKey::EmailAsc)).await,
            vec![2, 4, 3, 1]
        );
        assert_eq!(
            list_ids(&transport, &ListQuery::sorted(SortKey::IdAsc)).await,
            vec![1, 2, 3, 4]
        );
    }

    #[tokio::test]
    async fn test_scripted_faults() {
        let transport = MemoryTransport::new();
        transport.fail_next_with_status(500);
        transport.fail_next_offline("connection refused");

        let res = transport.send(&ApiRequest::list(&ListQuery::all())).await.unwrap();
        assert_eq!(res.status, 500);

        let err = transport.send(&ApiRequest::list(&ListQuery::all())).await.unwrap_err();
        assert_eq!(err, ApiError::Transport("connection refused".to_string()));

        let res = transport.send(&ApiRequest::list(&ListQuery::all())).await.unwrap();
        assert_eq!(res.status, 200);
        assert_eq!(transport.requests().len(), 3);
    }
}
