//! App Core for Linkboard.
//!
//! Holds the immutable configuration and runs each operation against its own
//! freshly opened connection, so no state is cached between requests.

use std::sync::Arc;

use tracing::{info, warn};

use crate::database::connection::Database;
use crate::managers::link_store::{LinkStore, LinkStoreTrait};
use crate::services::palette::Palette;
use crate::services::query_builder::ListingQuery;
use crate::services::validator::validate_submission;
use crate::types::config::AppConfig;
use crate::types::errors::{ConfigError, StoreError, SubmitError, ValidationError};
use crate::types::listing::{ErrorNotice, LinkView, ListingPage};

/// Errors from bringing the application up.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Schema initialization failed: {0}")]
    Schema(#[from] rusqlite::Error),
}

/// Central application struct. Cheap to clone; clones share the configuration.
#[derive(Debug, Clone)]
pub struct App {
    config: Arc<AppConfig>,
    palette: Arc<Palette>,
}

impl App {
    /// Validates the configuration and brings the store schema up to date.
    ///
    /// Call once at process start, before serving concurrent traffic.
    pub fn new(config: AppConfig) -> Result<Self, StartupError> {
        config.validate()?;

        let db = Database::open(&config.database_path)?;
        let report = db.ensure_schema(&config.seed_categories)?;
        if report.is_noop() {
            info!(path = %config.database_path.display(), "Schema up to date");
        } else {
            info!(path = %config.database_path.display(), ?report, "Schema initialized");
        }

        let palette = Palette::new(config.palette.clone());
        Ok(Self {
            config: Arc::new(config),
            palette: Arc::new(palette),
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn open(&self) -> Result<Database, StoreError> {
        Ok(Database::open(&self.config.database_path)?)
    }

    /// Validates and stores a submission. Returns the new link identity.
    pub fn submit_link(&self, raw_url: &str, raw_description: &str, raw_category: &str) -> Result<i64, SubmitError> {
        let db = self.open()?;
        let store = LinkStore::new(db.connection());

        let link = validate_submission(&store, raw_url, raw_description, raw_category).map_err(|e| {
            if let SubmitError::Invalid(reason) = &e {
                warn!(code = reason.code(), "Rejected link submission");
            }
            e
        })?;
        Ok(store.insert_link(&link)?)
    }

    /// Removes a link; unknown identities are ignored.
    pub fn delete_link(&self, id: i64) -> Result<(), StoreError> {
        let db = self.open()?;
        LinkStore::new(db.connection()).delete_link(id)
    }

    /// Reads categories and the filtered, sorted links, and decorates both with colors.
    pub fn listing(&self, query: &ListingQuery, error: Option<ValidationError>) -> Result<ListingPage, StoreError> {
        let db = self.open()?;
        let store = LinkStore::new(db.connection());

        let categories = store.list_categories()?;
        let colors = self.palette.color_map(&categories);
        let links = store
            .list_links(query)?
            .into_iter()
            .map(|link| {
                let color = link
                    .category_id
                    .and_then(|id| colors.get(&id).cloned());
                LinkView { link, color }
            })
            .collect();

        Ok(ListingPage {
            links,
            categories: self.palette.badges(&categories),
            current_sort: query.sort.as_key().to_string(),
            current_category: query.filter.as_param(),
            error: error.map(|e| ErrorNotice {
                code: e.code().to_string(),
                message: e.message(),
            }),
        })
    }
}
