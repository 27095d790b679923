use serde::{Deserialize, Serialize};

/// A stored bookmark, joined with the name of its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: i64,
    pub url: String,
    pub description: String,
    pub category_id: Option<i64>,
    /// `None` when the reference is null or points at a missing category.
    pub category_name: Option<String>,
    /// Local time, `YYYY-MM-DD HH:MM:SS`.
    pub created_at: String,
}

/// A submission that passed validation and is ready to persist.
///
/// Only [`validate_submission`](crate::services::validator::validate_submission)
/// constructs these;
/// nothing downstream re-parses the raw form strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedLink {
    url: String,
    description: String,
    category_id: Option<i64>,
}

impl ValidatedLink {
    pub(crate) fn new(url: String, description: String, category_id: Option<i64>) -> Self {
        Self {
            url,
            description,
            category_id,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category_id(&self) -> Option<i64> {
        self.category_id
    }
}
