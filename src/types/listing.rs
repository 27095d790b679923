use serde::{Deserialize, Serialize};

use super::link::Link;

/// A category decorated with its display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBadge {
    pub id: i64,
    pub name: String,
    pub color: String,
}

/// A listed link with the color of its category, if it has a live one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkView {
    #[serde(flatten)]
    pub link: Link,
    pub color: Option<String>,
}

/// Validation failure echoed back to the listing view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorNotice {
    pub code: String,
    pub message: String,
}

/// Everything the rendering layer needs to draw the listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPage {
    pub links: Vec<LinkView>,
    pub categories: Vec<CategoryBadge>,
    pub current_sort: String,
    pub current_category: String,
    pub error: Option<ErrorNotice>,
}
