//! # Transaction Module
//!
//! A [`Transaction`] is one immutable record of a committed balance change.
//! The amount is signed: positive for credits, negative for debits, and
//! always equals the balance delta the operation applied.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Kind of balance-changing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Cash or check deposit
    Deposit,
    /// Free-amount withdrawal
    Withdrawal,
    /// Withdrawal via the fixed preset menu
    FastCashWithdrawal,
    /// The opening deposit recorded at account creation
    InitialDeposit,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
            TransactionKind::FastCashWithdrawal => "Fast Cash Withdrawal",
            TransactionKind::InitialDeposit => "Initial Deposit",
        }
    }

    /// Whether this kind credits the account (positive amount)
    pub fn is_credit(&self) -> bool {
        matches!(
            self,
            TransactionKind::Deposit | TransactionKind::InitialDeposit
        )
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One committed balance change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction id
    pub id: Uuid,
    /// What kind of operation produced this entry
    pub kind: TransactionKind,
    /// Signed balance delta (credit positive, debit negative)
    pub amount: Decimal,
    /// Commit time
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Create a transaction with an already-signed amount, stamped now.
    pub fn new(kind: TransactionKind, amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            timestamp: Utc::now(),
        }
    }

    /// Deposit of `amount` (recorded as +amount)
    pub fn deposit(amount: Decimal) -> Self {
        Self::new(TransactionKind::Deposit, amount)
    }

    /// Withdrawal of `amount` (recorded as -amount)
    pub fn withdrawal(amount: Decimal) -> Self {
        Self::new(TransactionKind::Withdrawal, -amount)
    }

    /// Fast-cash withdrawal of `amount` (recorded as -amount)
    pub fn fast_cash(amount: Decimal) -> Self {
        Self::new(TransactionKind::FastCashWithdrawal, -amount)
    }

    /// Opening deposit of `amount` (recorded as +amount)
    pub fn initial_deposit(amount: Decimal) -> Self {
        Self::new(TransactionKind::InitialDeposit, amount)
    }

    /// Same as [`Transaction::new`] but with an explicit timestamp.
    /// Used for synthetic seed history.
    pub fn backdated(kind: TransactionKind, amount: Decimal, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            timestamp,
        }
    }

    /// Whether this entry increased the balance
    pub fn is_credit(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_credit() { "+" } else { "-" };
        write!(
            f,
            "{} {}${:.2} at {}",
            self.kind,
            sign,
            self.amount.abs(),
            self.timestamp.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
