//! Linkboard database layer.
//!
//! Provides SQLite connection management and the schema manager.
//!
//! # Usage
//!
//! ```no_run
//! use linkboard::database::Database;
//!
//! let seeds = vec!["General".to_string(), "Work".to_string()];
//!
//! // Once at startup
//! let db = Database::open("links.db").expect("failed to open database");
//! db.ensure_schema(&seeds).expect("failed to prepare schema");
//!
//! // Per operation
//! let db = Database::open("links.db").expect("failed to open database");
//! let conn = db.connection();
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
pub use migrations::SchemaReport;
