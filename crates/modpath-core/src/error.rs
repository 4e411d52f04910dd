use std::path::PathBuf;
use thiserror::Error;

/// Core error type for modpath operations.
///
/// Only settings loading and option normalization can fail. Resolution
/// itself reports misses through [`crate::resolver::Resolution::Unresolved`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read config at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid alias pattern `{pattern}`: {source}")]
    InvalidAlias {
        pattern: String,
        #[source]
        source: regex_lite::Error,
    },

    #[error("Invalid root glob `{pattern}`: {source}")]
    InvalidRootGlob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("{0}")]
    Other(String),
}

impl Error {
    #[must_use]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
