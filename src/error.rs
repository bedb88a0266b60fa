//! Error types for embedgen
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for embedgen operations
pub type EmbedResult<T> = Result<T, EmbedError>;

/// Main error type for embedgen operations
#[derive(Error, Debug)]
pub enum EmbedError {
    /// Source file missing, unreadable, or failed partway through
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Destination could not be created or written
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is malformed or holds an unusable value
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// API description is not JSON or does not have the expected shape
    #[error("invalid API description {path}: {message}")]
    InvalidApi { path: PathBuf, message: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EmbedError {
    /// Build a read error for `path`
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EmbedError::Read {
            path: path.into(),
            source,
        }
    }

    /// Build a write error for `path`
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EmbedError::Write {
            path: path.into(),
            source,
        }
    }

    /// True for failures of the underlying file I/O (read or write)
    pub fn is_io(&self) -> bool {
        matches!(self, EmbedError::Read { .. } | EmbedError::Write { .. })
    }
}
