//! Query Builder — turns the listing's `sort` and `category` parameters into
//! a fixed SQL shape plus bound parameters.
//!
//! User input only ever selects one of the closed set of clause fragments
//! below or becomes a bound integer parameter; it is never spliced into SQL.

/// Parses a string made only of ASCII decimal digits into an identity.
///
/// Signs, whitespace and empty strings are rejected, as are digit strings
/// that overflow `i64`.
pub fn parse_identity(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Whitelisted listing orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    Newest,
    #[default]
    Oldest,
    Az,
    Za,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [SortOrder::Newest, SortOrder::Oldest, SortOrder::Az, SortOrder::Za];

    /// Maps a request key to an order; anything unrecognized is the default.
    pub fn from_key(key: &str) -> Self {
        match key {
            "newest" => SortOrder::Newest,
            "oldest" => SortOrder::Oldest,
            "az" => SortOrder::Az,
            "za" => SortOrder::Za,
            _ => SortOrder::default(),
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::Az => "az",
            SortOrder::Za => "za",
        }
    }

    /// The `ORDER BY` body. Identity breaks ties between equal timestamps or URLs.
    pub fn order_clause(&self) -> &'static str {
        match self {
            SortOrder::Newest => "l.created_at DESC, l.id DESC",
            SortOrder::Oldest => "l.created_at ASC, l.id ASC",
            SortOrder::Az => "l.url ASC, l.id ASC",
            SortOrder::Za => "l.url DESC, l.id DESC",
        }
    }
}

/// Which links the listing includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(i64),
}

impl CategoryFilter {
    /// `all`, a missing value, or anything that is not purely digits means no filter.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.and_then(parse_identity) {
            Some(id) => CategoryFilter::Category(id),
            None => CategoryFilter::All,
        }
    }

    /// Normalized form for echoing back to the page or a redirect.
    pub fn as_param(&self) -> String {
        match self {
            CategoryFilter::All => "all".to_string(),
            CategoryFilter::Category(id) => id.to_string(),
        }
    }

    /// The `WHERE` clause, with the identity left as placeholder `?1`.
    pub fn where_clause(&self) -> Option<&'static str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Category(_) => Some("WHERE l.category_id = ?1"),
        }
    }

    /// Values bound to the placeholders of [`CategoryFilter::where_clause`].
    pub fn params(&self) -> Vec<i64> {
        match self {
            CategoryFilter::All => Vec::new(),
            CategoryFilter::Category(id) => vec![*id],
        }
    }
}

/// A fully resolved listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListingQuery {
    pub sort: SortOrder,
    pub filter: CategoryFilter,
}

const LISTING_SELECT: &str = "SELECT l.id, l.url, l.description, l.category_id, c.name, l.created_at \
     FROM links l LEFT JOIN categories c ON c.id = l.category_id";

impl ListingQuery {
    /// Full statement text. Only fixed fragments are composed here.
    pub fn sql(&self) -> String {
        match self.filter.where_clause() {
            Some(where_clause) => format!(
                "{} {} ORDER BY {}",
                LISTING_SELECT,
                where_clause,
                self.sort.order_clause()
            ),
            None => format!("{} ORDER BY {}", LISTING_SELECT, self.sort.order_clause()),
        }
    }

    pub fn params(&self) -> Vec<i64> {
        self.filter.params()
    }
}

/// Resolves raw `sort` and `category` request values into a [`ListingQuery`].
///
/// Never fails: unknown sort keys fall back to [`SortOrder::default`] and
/// malformed category filters to [`CategoryFilter::All`].
pub fn build_listing(sort_key: Option<&str>, category_filter: Option<&str>) -> ListingQuery {
    ListingQuery {
        sort: sort_key.map(SortOrder::from_key).unwrap_or_default(),
        filter: CategoryFilter::from_param(category_filter),
    }
}
