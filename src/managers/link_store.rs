//! Link Store for Linkboard.
//!
//! Implements `LinkStoreTrait` — insert, delete and list operations for links
//! and categories, backed by SQLite via `rusqlite`.

use chrono::Local;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use tracing::debug;

use crate::services::query_builder::ListingQuery;
use crate::types::category::Category;
use crate::types::errors::StoreError;
use crate::types::link::{Link, ValidatedLink};

/// Format of `links.created_at`, shared with stores written by older releases.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Trait defining link store operations.
pub trait LinkStoreTrait {
    fn insert_link(&self, link: &ValidatedLink) -> Result<i64, StoreError>;
    /// Deleting an identity that does not exist is not an error.
    fn delete_link(&self, id: i64) -> Result<(), StoreError>;
    fn list_categories(&self) -> Result<Vec<Category>, StoreError>;
    fn list_links(&self, query: &ListingQuery) -> Result<Vec<Link>, StoreError>;
    /// Lowest-identity category, `None` if there are no categories.
    fn default_category_id(&self) -> Result<Option<i64>, StoreError>;
    fn count_links(&self) -> Result<i64, StoreError>;
}

/// Link store backed by a SQLite connection.
pub struct LinkStore<'a> {
    conn: &'a Connection,
}

impl<'a> LinkStore<'a> {
    /// Creates a new `LinkStore` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn now() -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }

    /// Reads a listing row (see `ListingQuery::sql` for column order).
    fn row_to_link(row: &rusqlite::Row) -> rusqlite::Result<Link> {
        Ok(Link {
            id: row.get(0)?,
            url: row.get(1)?,
            description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            category_id: row.get(3)?,
            category_name: row.get(4)?,
            created_at: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
        })
    }
}

impl<'a> LinkStoreTrait for LinkStore<'a> {
    /// Persists a validated link stamped with the current time. Returns its identity.
    fn insert_link(&self, link: &ValidatedLink) -> Result<i64, StoreError> {
        self.conn.execute(
            "INSERT INTO links (url, description, category_id, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![link.url(), link.description(), link.category_id(), Self::now()],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, category_id = ?link.category_id(), "Inserted link");
        Ok(id)
    }

    fn delete_link(&self, id: i64) -> Result<(), StoreError> {
        let affected = self
            .conn
            .execute("DELETE FROM links WHERE id = ?1", params![id])?;
        debug!(id, affected, "Deleted link");
        Ok(())
    }

    fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM categories ORDER BY id ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok(Category {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    /// Lists links with their category names. Links whose reference is null
    /// or dangling are included with no category name.
    fn list_links(&self, query: &ListingQuery) -> Result<Vec<Link>, StoreError> {
        let mut stmt = self.conn.prepare(&query.sql())?;
        let rows = stmt.query_map(params_from_iter(query.params()), Self::row_to_link)?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        debug!(count = results.len(), sort = query.sort.as_key(), "Listed links");
        Ok(results)
    }

    fn default_category_id(&self) -> Result<Option<i64>, StoreError> {
        let id = self
            .conn
            .query_row("SELECT MIN(id) FROM categories", [], |row| row.get::<_, Option<i64>>(0))
            .optional()?
            .flatten();
        Ok(id)
    }

    fn count_links(&self) -> Result<i64, StoreError> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM links", [], |row| row.get(0))?)
    }
}
