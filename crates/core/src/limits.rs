//! # Limits Module
//!
//! The recognized tunables of the ledger. Defaults match the deployed
//! product values; tests construct custom limits where a boundary is
//! easier to reach with smaller numbers.

use crate::card;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Business limits enforced by the ledger engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Minimum opening deposit for a new account
    pub min_opening_deposit: Decimal,
    /// Maximum amount for a single deposit
    pub deposit_ceiling: Decimal,
    /// Maximum amount for a single free-amount withdrawal.
    /// Fast cash is not subject to this ceiling.
    pub withdrawal_ceiling: Decimal,
    /// Number of transactions retained per account
    pub history_cap: usize,
    /// Required card number length
    pub card_number_len: usize,
    /// Required PIN length
    pub pin_len: usize,
    /// The fixed fast-cash preset menu
    pub fast_cash_menu: Vec<Decimal>,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_opening_deposit: Decimal::new(100_00, 2),
            deposit_ceiling: Decimal::new(10_000_00, 2),
            withdrawal_ceiling: Decimal::new(2_000_00, 2),
            history_cap: 10,
            card_number_len: card::CARD_NUMBER_LEN,
            pin_len: card::PIN_LEN,
            fast_cash_menu: [20, 50, 100, 200, 500, 1000]
                .into_iter()
                .map(Decimal::from)
                .collect(),
        }
    }
}

impl Limits {
    /// Whether `amount` is one of the fast-cash presets
    pub fn is_fast_cash_preset(&self, amount: Decimal) -> bool {
        self.fast_cash_menu.contains(&amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_values() {
        let limits = Limits::default();
        assert_eq!(limits.min_opening_deposit, dec!(100.00));
        assert_eq!(limits.deposit_ceiling, dec!(10000.00));
        assert_eq!(limits.withdrawal_ceiling, dec!(2000.00));
        assert_eq!(limits.history_cap, 10);
        assert_eq!(limits.card_number_len, 16);
        assert_eq!(limits.pin_len, 4);
    }

    #[test]
    fn test_fast_cash_menu() {
        let limits = Limits::default();
        for preset in [20, 50, 100, 200, 500, 1000] {
            assert!(limits.is_fast_cash_preset(Decimal::from(preset)));
        }
        assert!(!limits.is_fast_cash_preset(dec!(25)));
        assert!(!limits.is_fast_cash_preset(dec!(2000)));
    }
}
