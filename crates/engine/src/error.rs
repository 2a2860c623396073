//! Engine errors: the domain taxonomy plus persistence failures.

use teller_core::CoreError;
use teller_store::StoreError;
use thiserror::Error;

/// Errors returned by ledger operations.
///
/// Domain rejections pass through [`CoreError`] unchanged; `Store` is the
/// additive persistence kind surfaced when a save or load fails.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Domain(#[from] CoreError),

    #[error("Persistence error: {0}")]
    Store(#[from] StoreError),
}

/// Result type alias with LedgerError
pub type LedgerResult<T> = Result<T, LedgerError>;

impl LedgerError {
    /// The domain rejection, if this is one
    pub fn as_domain(&self) -> Option<&CoreError> {
        match self {
            LedgerError::Domain(err) => Some(err),
            LedgerError::Store(_) => None,
        }
    }

    /// Whether this is a specific domain rejection
    pub fn is_domain(&self, check: impl FnOnce(&CoreError) -> bool) -> bool {
        self.as_domain().is_some_and(check)
    }
}
