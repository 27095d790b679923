//! Category Presentation Mapper — assigns badge colors by category position.

use std::collections::HashMap;

use crate::types::category::Category;
use crate::types::listing::CategoryBadge;

/// Used only if a palette is somehow empty; validated configs never are.
const FALLBACK_COLOR: &str = "#6e7781";

/// Ordered list of display colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new(colors: Vec<String>) -> Self {
        Self { colors }
    }

    /// Color for the category at `position` (0-based, identity order).
    /// Positions past the end clamp to the last color.
    pub fn color_for(&self, position: usize) -> &str {
        self.colors
            .get(position)
            .or_else(|| self.colors.last())
            .map(String::as_str)
            .unwrap_or(FALLBACK_COLOR)
    }

    /// Decorates categories, which must already be sorted by identity.
    pub fn badges(&self, categories: &[Category]) -> Vec<CategoryBadge> {
        categories
            .iter()
            .enumerate()
            .map(|(position, category)| CategoryBadge {
                id: category.id,
                name: category.name.clone(),
                color: self.color_for(position).to_string(),
            })
            .collect()
    }

    /// Category identity to color, for decorating individual links.
    pub fn color_map(&self, categories: &[Category]) -> HashMap<i64, String> {
        self.badges(categories)
            .into_iter()
            .map(|badge| (badge.id, badge.color))
            .collect()
    }
}
