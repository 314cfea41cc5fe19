use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for release-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Pattern error: {0}")]
    Pattern(String),

    #[error("Staging failed: {0}")]
    Staging(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error on {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        BumpError::Version(msg.into())
    }

    /// Create a pattern error with context
    pub fn pattern(msg: impl Into<String>) -> Self {
        BumpError::Pattern(msg.into())
    }

    /// Create a staging error with context
    pub fn staging(msg: impl Into<String>) -> Self {
        BumpError::Staging(msg.into())
    }

    /// Attach a file path to an I/O error
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BumpError::File {
            path: path.into(),
            source,
        }
    }
}
