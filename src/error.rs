//! Error types for the history store and its persistence backends.

use thiserror::Error;

use crate::models::RecordId;

/// Failures raised by a [`KeyValueStore`](crate::storage::KeyValueStore) backend.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage quota exceeded for key '{key}': {needed} bytes needed, limit {limit} bytes")]
    QuotaExceeded { key: String, needed: usize, limit: usize },

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Failures surfaced by the strict (`try_*`) store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(RecordId),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Corrupt data in slot '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid theme name: {0:?} (expected \"light\" or \"dark\")")]
    InvalidTheme(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
