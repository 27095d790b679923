use serde::{Deserialize, Serialize};

/// A named grouping seeded at schema initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}
