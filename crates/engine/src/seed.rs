//! Demo seed data, created on first run when the store is empty.
//!
//! Balances and backdated histories match the long-standing demo fixtures;
//! the synthetic history deliberately does not sum to the opening balance.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use teller_core::{Account, Transaction, TransactionKind};

/// Demo card number for John Doe (PIN 1234)
pub const DEMO_CARD_JOHN: &str = "1234567812345678";
/// Demo card number for Jane Smith (PIN 9876)
pub const DEMO_CARD_JANE: &str = "9876543210987654";

/// The two demo accounts seeded into an empty store.
pub fn demo_accounts() -> Vec<Account> {
    let now = Utc::now();

    let john = Account {
        card_number: DEMO_CARD_JOHN.to_string(),
        pin: "1234".to_string(),
        holder_name: "John Doe".to_string(),
        balance: Decimal::new(5_000_00, 2),
        // Newest first
        transactions: vec![
            Transaction::backdated(
                TransactionKind::Withdrawal,
                Decimal::from(-200),
                now - Duration::hours(12),
            ),
            Transaction::backdated(
                TransactionKind::Deposit,
                Decimal::from(1000),
                now - Duration::hours(24),
            ),
        ],
        created_at: now - Duration::days(30),
    };

    let jane = Account {
        card_number: DEMO_CARD_JANE.to_string(),
        pin: "9876".to_string(),
        holder_name: "Jane Smith".to_string(),
        balance: Decimal::new(2_500_00, 2),
        transactions: vec![Transaction::backdated(
            TransactionKind::Deposit,
            Decimal::from(500),
            now - Duration::hours(48),
        )],
        created_at: now - Duration::days(30),
    };

    vec![john, jane]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_demo_accounts() {
        let accounts = demo_accounts();
        assert_eq!(accounts.len(), 2);

        let john = &accounts[0];
        assert_eq!(john.card_number, DEMO_CARD_JOHN);
        assert_eq!(john.balance, dec!(5000.00));
        assert_eq!(john.transactions.len(), 2);
        // Newest first: the withdrawal is more recent than the deposit
        assert!(john.transactions[0].timestamp > john.transactions[1].timestamp);

        let jane = &accounts[1];
        assert_eq!(jane.balance, dec!(2500.00));
        assert_eq!(jane.transactions.len(), 1);
    }
}
