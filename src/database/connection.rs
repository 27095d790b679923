//! SQLite connection management for Linkboard.
//!
//! Provides the [`Database`] struct that wraps a `rusqlite::Connection`.
//! Opening a database does not touch the schema; call
//! [`Database::ensure_schema`] once at startup for that.

use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

use super::migrations::{self, SchemaReport};

/// How long a connection waits on a locked store before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Core database wrapper providing SQLite connection management.
///
/// A `Database` is opened per operation and dropped when the operation
/// finishes, which closes the connection on both success and error paths.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) a SQLite database at the given file path.
    ///
    /// # Errors
    /// Returns `rusqlite::Error` if the connection cannot be established.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(Self { conn })
    }

    /// Opens an in-memory SQLite database.
    ///
    /// Useful for testing; the database is discarded when the `Database` is dropped.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Creates or migrates the link and category tables, seeding categories
    /// when their table is created. Idempotent.
    pub fn ensure_schema(&self, seed_categories: &[String]) -> Result<SchemaReport, rusqlite::Error> {
        migrations::ensure_schema(&self.conn, seed_categories)
    }

    /// Returns a reference to the underlying `rusqlite::Connection`.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
