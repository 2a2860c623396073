//! # Card Module
//!
//! Card-number generation and the field checks shared by authentication
//! and account opening.

use crate::error::{CoreError, CoreResult};
use rand::Rng;

/// Card numbers are 16 digits
pub const CARD_NUMBER_LEN: usize = 16;
/// PINs are 4 digits
pub const PIN_LEN: usize = 4;

/// Generate a random 16-digit card number.
///
/// Uniqueness is not guaranteed here; the duplicate check at account
/// opening is the only uniqueness enforcement.
pub fn generate_card_number() -> String {
    let mut rng = rand::thread_rng();
    (0..CARD_NUMBER_LEN)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

/// Whether `s` consists only of ASCII digits (and is non-empty)
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Reject empty input with a `MissingField` naming the field.
pub fn require(field: &'static str, value: &str) -> CoreResult<()> {
    if value.is_empty() {
        return Err(CoreError::MissingField { field });
    }
    Ok(())
}

/// Length check only; login validates shape, digit content is only
/// enforced when credentials are stored.
pub fn require_len(field: &'static str, value: &str, expected: usize) -> CoreResult<()> {
    if value.len() != expected {
        return Err(CoreError::InvalidLength { field, expected });
    }
    Ok(())
}

/// Strict check for stored credentials: exact length and digits only.
pub fn require_digits(field: &'static str, value: &str, expected: usize) -> CoreResult<()> {
    if value.len() != expected || !is_numeric(value) {
        return Err(CoreError::InvalidLength { field, expected });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_card_number_shape() {
        for _ in 0..50 {
            let card = generate_card_number();
            assert_eq!(card.len(), CARD_NUMBER_LEN);
            assert!(is_numeric(&card));
        }
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("1234"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("12a4"));
        assert!(!is_numeric("12 4"));
    }

    #[test]
    fn test_require() {
        assert!(require("pin", "1234").is_ok());
        assert_eq!(
            require("pin", ""),
            Err(CoreError::MissingField { field: "pin" })
        );
    }

    #[test]
    fn test_require_len() {
        assert!(require_len("PIN", "1234", 4).is_ok());
        assert_eq!(
            require_len("PIN", "123", 4),
            Err(CoreError::InvalidLength {
                field: "PIN",
                expected: 4
            })
        );
    }

    #[test]
    fn test_require_digits() {
        assert!(require_digits("PIN", "0042", 4).is_ok());
        assert!(require_digits("PIN", "12x4", 4).is_err());
        assert!(require_digits("PIN", "12345", 4).is_err());
    }
}
