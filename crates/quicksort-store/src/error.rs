//! Error types for quicksort-store

use std::path::PathBuf;

/// Result type for quicksort-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading, writing, or resolving config files
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    #[error("Invalid configuration at {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: quicksort_config::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(path: impl Into<PathBuf>, source: quicksort_config::Error) -> Self {
        Self::Config {
            path: path.into(),
            source,
        }
    }
}
