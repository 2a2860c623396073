//! # Error Module
//!
//! Domain error taxonomy for the ledger, using thiserror.
//! Validation always fully precedes mutation, so any of these errors
//! leaves account state unchanged.

use rust_decimal::Decimal;
use thiserror::Error;

/// Core domain errors.
///
/// Authentication failure is deliberately undifferentiated: `NotFound`
/// never reveals whether the card number or the PIN was wrong.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    // === Field validation ===
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("{field} must be exactly {expected} digits")]
    InvalidLength { field: &'static str, expected: usize },

    // === Lookup ===
    #[error("Incorrect card number or PIN")]
    NotFound,

    #[error("Account with this card number already exists")]
    DuplicateAccount,

    // === Amount validation ===
    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Amount {amount} exceeds the {limit} per-transaction limit")]
    LimitExceeded { amount: Decimal, limit: Decimal },

    // === PIN change ===
    #[error("Current PIN is incorrect")]
    PinMismatch,

    #[error("New PINs do not match")]
    PinConfirmationMismatch,

    #[error("New PIN must be different from current PIN")]
    PinReuse,
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Whether this is an insufficient-funds rejection
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, CoreError::InsufficientFunds { .. })
    }

    /// Whether this is a per-transaction ceiling rejection
    pub fn is_limit_exceeded(&self) -> bool {
        matches!(self, CoreError::LimitExceeded { .. })
    }

    /// Whether this is a field-level validation error
    pub fn is_field_error(&self) -> bool {
        matches!(
            self,
            CoreError::MissingField { .. } | CoreError::InvalidLength { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = CoreError::InsufficientFunds {
            requested: dec!(1000),
            available: dec!(500),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: requested 1000, available 500"
        );

        let err = CoreError::InvalidLength {
            field: "card number",
            expected: 16,
        };
        assert_eq!(err.to_string(), "card number must be exactly 16 digits");
    }

    #[test]
    fn test_not_found_reveals_nothing() {
        // Same message no matter which credential was wrong
        assert_eq!(CoreError::NotFound.to_string(), "Incorrect card number or PIN");
    }

    #[test]
    fn test_error_checks() {
        let err = CoreError::InsufficientFunds {
            requested: dec!(100),
            available: dec!(50),
        };
        assert!(err.is_insufficient_funds());
        assert!(!err.is_limit_exceeded());

        let err = CoreError::MissingField { field: "pin" };
        assert!(err.is_field_error());
    }
}
