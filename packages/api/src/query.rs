//! Query parameters for `GET /api/list`.

use serde::{Deserialize, Serialize};

/// Sort orders the list endpoint understands (`sort=<field>_<dir>`).
///
/// The server falls back to [`SortKey::IdDesc`] for anything it does not know,
/// so the client never sends a value outside this set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    IdAsc,
    #[default]
    IdDesc,
    NameAsc,
    NameDesc,
    EmailAsc,
    EmailDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::IdAsc,
        SortKey::IdDesc,
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::EmailAsc,
        SortKey::EmailDesc,
    ];

    /// Wire value, e.g. `"email_asc"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::IdAsc => "id_asc",
            SortKey::IdDesc => "id_desc",
            SortKey::NameAsc => "name_asc",
            SortKey::NameDesc => "name_desc",
            SortKey::EmailAsc => "email_asc",
            SortKey::EmailDesc => "email_desc",
        }
    }

    /// Parse a wire value. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

/// Filter and ordering for a list request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Substring matched against name or email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortKey>,
}

impl ListQuery {
    /// Unfiltered list in server order.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn search(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            sort: None,
        }
    }

    pub fn sorted(sort: SortKey) -> Self {
        Self {
            q: None,
            sort: Some(sort),
        }
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Query string pairs in the order they are sent. A blank `q` is dropped.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(q) = self.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            pairs.push(("q".to_string(), q.to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort".to_string(), sort.as_str().to_string()));
        }
        pairs
    }
}
