//! Error types for storage and state access.
//!
//! Missing or corrupt records are not errors (they heal to defaults), so
//! these only surface real backend failures and caller mistakes.

use thiserror::Error;

/// Failure reported by a key-value backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// No storage is available (no window, storage disabled by the browser).
    #[error("Local storage is not available")]
    Unavailable,

    /// The backend rejected a read or write (quota exceeded, security error).
    #[error("Storage {op} failed for key '{key}': {message}")]
    Backend {
        op: &'static str,
        key: String,
        message: String,
    },
}

/// Main error type for portfolio state operations.
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Key-value backend failure.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A record could not be serialized for writing.
    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Card index outside the fixed-size collection.
    #[error("Card index {index} out of range (collection has {len} cards)")]
    CardIndexOutOfRange { index: usize, len: usize },
}

/// Result type alias for portfolio operations.
pub type Result<T> = std::result::Result<T, PortfolioError>;
