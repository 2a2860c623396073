//! Authenticated session handle.
//!
//! Operations take an explicit `&Session` instead of the engine holding a
//! single current-user slot, so multiple sessions can coexist without any
//! shared mutable state.

use std::fmt;

/// Proof of a successful authentication, identifying one account.
///
/// A session does not pin the account's state; every operation re-resolves
/// the account by card number at call time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    card_number: String,
    holder_name: String,
}

impl Session {
    pub(crate) fn new(card_number: &str, holder_name: &str) -> Self {
        Self {
            card_number: card_number.to_string(),
            holder_name: holder_name.to_string(),
        }
    }

    /// Card number of the authenticated account
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    /// Cardholder display name
    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // PIN never appears here; only the last four card digits are shown
        let masked = if self.card_number.len() >= 4 {
            &self.card_number[self.card_number.len() - 4..]
        } else {
            self.card_number.as_str()
        };
        write!(f, "{} (card ****{})", self.holder_name, masked)
    }
}
