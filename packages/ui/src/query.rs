//! Query Panel flow: run one canned list query into a fresh table.

use api::{ApiError, ListQuery, Transport, UserApi};

use crate::table::{table_rows, TableRow};

/// Table contents after a query, plus the alert to raise, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOutcome {
    pub rows: Vec<TableRow>,
    pub alert: Option<String>,
}

pub struct QueryRunner<T> {
    api: UserApi<T>,
}

impl<T: Transport> QueryRunner<T> {
    pub fn new(api: UserApi<T>) -> Self {
        Self { api }
    }

    /// Fetch `query`. On any failure the table stays empty and an alert is set.
    pub async fn render(&self, query: &ListQuery) -> QueryOutcome {
        match self.api.list(query).await {
            Ok(users) => QueryOutcome {
                rows: table_rows(&users),
                alert: None,
            },
            Err(ApiError::Status { status }) => QueryOutcome {
                rows: Vec::new(),
                alert: Some(format!("エラー: HTTP {status}")),
            },
            Err(e) => {
                tracing::warn!("query failed: {}", e);
                QueryOutcome {
                    rows: Vec::new(),
                    alert: Some(format!("通信エラー: {e}")),
                }
            }
        }
    }
}
