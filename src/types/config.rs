use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

use super::errors::ConfigError;

/// Immutable application configuration.
///
/// Built once at startup and shared read-only; the Schema Manager takes the
/// seed list from here and the Presentation Mapper takes the palette.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// SQLite store file.
    pub database_path: PathBuf,
    /// Category names seeded, in order, when the category table is created.
    pub seed_categories: Vec<String>,
    /// Display colors by category position; positions past the end reuse the last one.
    pub palette: Vec<String>,
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(Self::DATABASE_FILE),
            seed_categories: Self::default_seed_categories(),
            palette: Self::default_palette(),
            host: "0.0.0.0".to_string(),
            port: 9993,
        }
    }
}

impl AppConfig {
    pub const DATABASE_FILE: &'static str = "links.db";

    /// Returns the categories every fresh store starts with.
    pub fn default_seed_categories() -> Vec<String> {
        ["General", "Work", "Reference", "News", "Fun"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Returns the default badge palette.
    pub fn default_palette() -> Vec<String> {
        ["#0969da", "#2ea44f", "#bf8700", "#cf222e"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Loads configuration from environment variables on top of the defaults.
    ///
    /// | Env Var              | Default     |
    /// |----------------------|-------------|
    /// | `LINKBOARD_HOST`     | `0.0.0.0`   |
    /// | `LINKBOARD_PORT`     | `9993`      |
    /// | `LINKBOARD_DATA_DIR` | current dir |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("LINKBOARD_HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }

        if let Some(port) = lookup("LINKBOARD_PORT") {
            config.port = port.trim().parse().map_err(|_| {
                ConfigError::InvalidValue(format!("LINKBOARD_PORT must be a valid port: {}", port))
            })?;
        }

        if let Some(dir) = lookup("LINKBOARD_DATA_DIR").filter(|d| !d.trim().is_empty()) {
            config.database_path = PathBuf::from(dir.trim()).join(Self::DATABASE_FILE);
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants the rest of the crate relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::Empty("palette".to_string()));
        }
        if self.seed_categories.is_empty() {
            return Err(ConfigError::Empty("seed_categories".to_string()));
        }

        let mut seen = HashSet::new();
        for name in &self.seed_categories {
            if name.trim().is_empty() {
                return Err(ConfigError::Empty("seed category name".to_string()));
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::Duplicate(format!("seed category '{}'", name)));
            }
        }
        Ok(())
    }

    /// `host:port` for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
