//! # Cache Errors

use std::path::PathBuf;
use thiserror::Error;

/// Key-value store failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// I/O error during read/write.
    #[error("Store I/O error: {message}")]
    Io {
        /// Underlying error text
        message: String,
    },

    /// Stored data could not be parsed.
    #[error("Store corruption: {message}")]
    Corruption {
        /// What was wrong
        message: String,
    },

    /// Another process holds the store lock.
    #[error("Store at {} is locked{}", path.display(), pid.map(|p| format!(" by process {}", p)).unwrap_or_default())]
    Locked {
        /// Lock file path
        path: PathBuf,
        /// Holder, when readable
        pid: Option<u32>,
    },
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io {
            message: err.to_string(),
        }
    }
}

/// Location cache write failure. Reads never fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CacheError {
    /// Underlying store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Value could not be encoded.
    #[error("Failed to encode cache entry: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for CacheError {
    fn from(err: serde_json::Error) -> Self {
        CacheError::Encode(err.to_string())
    }
}
