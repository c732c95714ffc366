//! [`Transport`] over HTTP using `reqwest`.
//!
//! Works natively and in the browser: on `wasm32` reqwest drives the page's
//! `fetch`, so the same code path serves the web and the tests.

use reqwest::header::ACCEPT;
use reqwest::{Client, Url};

use crate::error::{ApiError, Result};
use crate::request::{ApiRequest, ApiResponse, Method};
use crate::transport::Transport;

/// HTTP transport bound to one API origin.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base: Url,
}

impl HttpTransport {
    /// Create a transport for `base_url`, e.g. `http://127.0.0.1:8000`.
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    /// Absolute URL for a request, with the query pairs encoded.
    pub fn url_for(&self, request: &ApiRequest) -> Result<Url> {
        let mut url = self
            .base
            .join(&request.path)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", request.path)))?;
        if !request.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in &request.query {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let url = self.url_for(request)?;
        tracing::debug!("{} {}", request.method, url);

        let mut builder = self
            .client
            .request(to_reqwest(request.method), url)
            .header(ACCEPT, "application/json");
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(ApiResponse { status, body })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::models::UserPayload;
    use crate::query::ListQuery;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(matches!(
            HttpTransport::new("not a url"),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_url_encodes_query() {
        let transport = HttpTransport::new("http://127.0.0.1:8000").unwrap();
        let url = transport
            .url_for(&ApiRequest::list(&ListQuery::search("太郎")))
            .unwrap();
        assert_eq!(url.path(), "/api/list");
        assert_eq!(
            url.query_pairs().next().map(|(k, v)| (k.into_owned(), v.into_owned())),
            Some(("q".to_string(), "太郎".to_string()))
        );

        let plain = transport.url_for(&ApiRequest::delete(4)).unwrap();
        assert_eq!(plain.as_str(), "http://127.0.0.1:8000/api/delete/4");
    }

    #[tokio::test]
    async fn test_register_posts_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/register"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"name": "B", "email": "b@x.com"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "success", "message": "B さんを登録しました！"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(&server.uri()).unwrap();
        let res = transport
            .send(&ApiRequest::register(UserPayload::new("B", "b@x.com")))
            .await
            .unwrap();
        assert_eq!(res.status, 200);
        assert!(res.body.contains("登録しました"));
    }

    #[tokio::test]
    async fn test_list_with_sort_param() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/list"))
            .and(query_param("sort", "email_asc"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(&server.uri()).unwrap();
        let res = transport
            .send(&ApiRequest::list(&ListQuery::sorted(crate::SortKey::EmailAsc)))
            .await
            .unwrap();
        assert_eq!(res.status, 200);
        assert_eq!(res.body, "[]");
    }

    #[tokio::test]
    async fn test_error_status_is_not_a_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/delete/9"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({"status": "error", "message": "該当ユーザーが見つかりません。"})),
            )
            .mount(&server)
            .await;

        let transport = HttpTransport::new(&server.uri()).unwrap();
        let res = transport.send(&ApiRequest::delete(9)).await.unwrap();
        assert_eq!(res.status, 404);
        assert!(!res.is_success());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Port 9 (discard) is not listening in test environments.
        let transport = HttpTransport::new("http://127.0.0.1:9").unwrap();
        let err = transport
            .send(&ApiRequest::list(&ListQuery::all()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
