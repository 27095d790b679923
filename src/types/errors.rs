use thiserror::Error;

// === ValidationError ===

/// Reasons a link submission is rejected before it reaches the store.
///
/// These are user-correctable and never fatal: the request handler turns them
/// into an `error` redirect parameter via [`ValidationError::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The submitted URL was empty (or whitespace only).
    #[error("URL must not be empty")]
    EmptyUrl,
    /// The URL did not parse as an absolute URL with a scheme and a host.
    #[error("URL is not a valid absolute URL")]
    InvalidUrlFormat,
    /// The URL parsed but its scheme is neither `http` nor `https`.
    #[error("URL scheme must be http or https")]
    DisallowedScheme,
}

impl ValidationError {
    /// Every variant, in declaration order.
    pub const ALL: [ValidationError; 3] = [
        ValidationError::EmptyUrl,
        ValidationError::InvalidUrlFormat,
        ValidationError::DisallowedScheme,
    ];

    /// Stable machine code carried in redirect URLs.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::EmptyUrl => "empty_url",
            ValidationError::InvalidUrlFormat => "invalid_url",
            ValidationError::DisallowedScheme => "disallowed_scheme",
        }
    }

    /// Inverse of [`ValidationError::code`]. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.code() == code)
    }

    /// Human-readable message for the listing view.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

// === StoreError ===

/// Failures of the persistent store. Fatal for the current request.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying SQLite operation failed.
    #[error("Link store database error: {0}")]
    Database(#[from] rusqlite::Error),
}

// === SubmitError ===

/// Errors on the submission path: validation can also read the store
/// (default category lookup), so both kinds surface here.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<rusqlite::Error> for SubmitError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Store(StoreError::Database(value))
    }
}

// === ConfigError ===

/// Errors raised while loading or validating [`AppConfig`](super::config::AppConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A list that must have at least one entry was empty.
    #[error("Config value must not be empty: {0}")]
    Empty(String),
    /// A value that must be unique appears more than once.
    #[error("Duplicate config value: {0}")]
    Duplicate(String),
    /// A value could not be parsed.
    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}
