use thiserror::Error;

/// Unified error type for rancher-catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// No candidate tag could be selected; fatal to the run
    #[error("no valid tags found")]
    NoValidTags,

    #[error("Template error: {0}")]
    Template(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in rancher-catalog
pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        CatalogError::Config(msg.into())
    }

    /// Create a template error with context
    pub fn template(msg: impl Into<String>) -> Self {
        CatalogError::Template(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        CatalogError::Remote(msg.into())
    }
}

impl From<minijinja::Error> for CatalogError {
    fn from(err: minijinja::Error) -> Self {
        CatalogError::Template(err.to_string())
    }
}
