//! Schema management for the Linkboard SQLite store.
//!
//! Stores created by earlier releases have no version table, so every step
//! inspects the live schema (`sqlite_master`, `pragma_table_info`) instead of
//! tracking applied versions. Each step runs at most once per store.

use rusqlite::{params, Connection};
use tracing::info;

/// What [`ensure_schema`] changed. All-false/zero means the store was current.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemaReport {
    pub created_links: bool,
    pub created_categories: bool,
    pub added_category_column: bool,
    pub seeded_categories: usize,
}

impl SchemaReport {
    /// True when no structural change and no seeding happened.
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}

/// Returns whether a table with the given name exists.
pub fn table_exists(conn: &Connection, table: &str) -> Result<bool, rusqlite::Error> {
    conn.query_row(
        "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type = 'table' AND name = ?1",
        params![table],
        |row| row.get(0),
    )
}

/// Returns whether `table` has a column named `column`.
pub fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool, rusqlite::Error> {
    conn.query_row(
        "SELECT COUNT(*) > 0 FROM pragma_table_info(?1) WHERE name = ?2",
        params![table, column],
        |row| row.get(0),
    )
}

/// Brings the store up to date and seeds categories into a freshly created
/// category table, assigning identities 1, 2, ... in `seed_categories` order.
///
/// All steps run in one transaction. Not safe against two processes racing
/// on the very first run.
///
/// # Errors
/// Returns `rusqlite::Error` if any SQL statement fails; nothing is committed then.
pub fn ensure_schema(conn: &Connection, seed_categories: &[String]) -> Result<SchemaReport, rusqlite::Error> {
    let tx = conn.unchecked_transaction()?;
    let mut report = SchemaReport::default();

    if !table_exists(&tx, "categories")? {
        create_categories(&tx)?;
        report.created_categories = true;
        report.seeded_categories = seed(&tx, seed_categories)?;
        info!(seeded = report.seeded_categories, "Created categories table");
    }

    if !table_exists(&tx, "links")? {
        create_links(&tx)?;
        report.created_links = true;
        info!("Created links table");
    } else if !column_exists(&tx, "links", "category_id")? {
        add_category_column(&tx)?;
        report.added_category_column = true;
        info!("Migrated links table: added category_id column");
    }

    tx.commit()?;
    Ok(report)
}

fn create_categories(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "CREATE TABLE categories (
             id INTEGER PRIMARY KEY AUTOINCREMENT,
             name TEXT NOT NULL UNIQUE
         );",
    )
}

fn create_links(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "CREATE TABLE links (
             id INTEGER PRIMARY KEY AUTOINCREMENT,
             url TEXT NOT NULL,
             description TEXT,
             category_id INTEGER REFERENCES categories(id),
             created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
         );",
    )
}

/// Existing rows keep a NULL reference.
fn add_category_column(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch("ALTER TABLE links ADD COLUMN category_id INTEGER REFERENCES categories(id);")
}

fn seed(conn: &Connection, names: &[String]) -> Result<usize, rusqlite::Error> {
    let mut stmt = conn.prepare("INSERT INTO categories (name) VALUES (?1)")?;
    for name in names {
        stmt.execute(params![name])?;
    }
    Ok(names.len())
}
