//! Persistence layer errors, wrapping IO and serde_json errors.

use thiserror::Error;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for StoreError
pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// Whether this is an IO-level failure
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
