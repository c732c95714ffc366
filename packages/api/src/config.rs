//! # Client configuration — `userdesk.toml`
//!
//! Settings the panels need that are not part of the API itself: where the API
//! lives, how chatty logging is, and which canned queries the Query Panel
//! offers.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://127.0.0.1:8000"   # omit on web to use the page origin
//!
//! [logging]
//! level = "info"
//!
//! [[queries]]
//! label = "全件"
//!
//! [[queries]]
//! label = "名前: 太郎"
//! q = "太郎"
//!
//! [[queries]]
//! label = "メール順"
//! sort = "email_asc"
//! ```
//!
//! Every section is `#[serde(default)]`, so a missing or empty file is the
//! default configuration. Leaving out `[[queries]]` keeps the three presets
//! above.

use serde::{Deserialize, Serialize};

use crate::query::{ListQuery, SortKey};

/// Fallback origin for native builds without a configured URL.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Top-level configuration stored in `userdesk.toml`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default = "default_queries")]
    pub queries: Vec<QueryPreset>,
}

/// Where the API is reached.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `trace`, `debug`, `info`, `warn` or `error`.
    #[serde(default = "default_level")]
    pub level: String,
}

/// A canned list query bound to one Query Panel button.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryPreset {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortKey>,
}

impl QueryPreset {
    pub fn new(label: &str, query: ListQuery) -> Self {
        Self {
            label: label.to_string(),
            q: query.q,
            sort: query.sort,
        }
    }

    pub fn query(&self) -> ListQuery {
        ListQuery {
            q: self.q.clone(),
            sort: self.sort,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_queries() -> Vec<QueryPreset> {
    vec![
        QueryPreset::new("全件", ListQuery::all()),
        QueryPreset::new("名前: 太郎", ListQuery::search("太郎")),
        QueryPreset::new("メール順", ListQuery::sorted(SortKey::EmailAsc)),
    ]
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
            queries: default_queries(),
        }
    }
}

impl ClientConfig {
    /// Builder method to pin the API origin.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.api.base_url = Some(url.to_string());
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "userdesk.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Configured URL, else the page origin, else [`DEFAULT_BASE_URL`].
    pub fn resolve_base_url(&self, origin: Option<&str>) -> String {
        self.api
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .or(origin)
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.queries.len(), 3);
        assert_eq!(config.queries[1].query(), ListQuery::search("太郎"));
        assert_eq!(config.queries[2].query(), ListQuery::sorted(SortKey::EmailAsc));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_custom_presets_replace_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "http://api.local:9000"

            [[queries]]
            label = "名前降順"
            sort = "name_desc"
            "#,
        )
        .unwrap();
        assert_eq!(config.queries.len(), 1);
        assert_eq!(config.queries[0].sort, Some(SortKey::NameDesc));
        assert_eq!(config.resolve_base_url(Some("http://page")), "http://api.local:9000");
    }

    #[test]
    fn test_unknown_sort_is_rejected() {
        let parsed = ClientConfig::from_toml(
            r#"
            [[queries]]
            label = "x"
            sort = "age_asc"
            "#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_base_url_fallbacks() {
        let config = ClientConfig::default();
        assert_eq!(config.resolve_base_url(Some("http://localhost:5173")), "http://localhost:5173");
        assert_eq!(config.resolve_base_url(None), DEFAULT_BASE_URL);

        let blank = ClientConfig::default().with_base_url("  ");
        assert_eq!(blank.resolve_base_url(None), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:8000");
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }
}
