//! Store error types.

use thiserror::Error;

/// Errors that can occur when using a key/value store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to read or write the underlying storage.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend rejected the operation.
    #[error("Store operation failed: {0}")]
    Backend(String),
}
