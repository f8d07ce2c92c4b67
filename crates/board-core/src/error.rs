//! Board Errors
//!
//! Missing ids are never errors (those operations are no-ops); only the
//! backing store can fail.

/// Failures reported by a key-value store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read '{key}': {reason}")]
    Read { key: String, reason: String },

    #[error("failed to write '{key}': {reason}")]
    Write { key: String, reason: String },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Failures surfaced by board mutations
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type BoardResult<T> = Result<T, BoardError>;
