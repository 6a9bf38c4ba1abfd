//! Persistence store error types.

use thiserror::Error;

/// Errors that can occur during persistence store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but does not hold a key-value object.
    #[error("corruption detected: {0}")]
    Corrupt(String),

    /// The entries could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for persistence store operations.
pub type StoreResult<T> = Result<T, StoreError>;
