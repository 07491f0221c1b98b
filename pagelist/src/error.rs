/// Errors surfaced while building a page.
///
/// The builder never rejects a page number or page size; the only failure is
/// the underlying source failing to answer a count or range read.
#[derive(Debug)]
pub enum DataError {
    SourceUnavailable(Box<dyn std::error::Error + Send + Sync>),
}

impl DataError {
    /// Construct a `SourceUnavailable` variant from any error type.
    ///
    /// Used by backend crates (e.g. `pagelist-sqlx`) to wrap driver-specific
    /// errors.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        DataError::SourceUnavailable(Box::new(err))
    }
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::SourceUnavailable(err) => write!(f, "Source unavailable: {err}"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::SourceUnavailable(err) => Some(err.as_ref()),
        }
    }
}

/// Error type for loading [`PagingConfig`](crate::PagingConfig).
#[derive(Debug)]
pub enum ConfigError {
    /// An I/O or YAML parsing error occurred while loading the config.
    Load(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Load(msg) => write!(f, "Config load error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
