//! # Account Module
//!
//! An [`Account`] is a cardholder's ledger record: identity, PIN, balance,
//! and a bounded newest-first transaction history.
//!
//! [`Account::apply`] is the single commit point for balance changes: it
//! applies the signed amount and records the entry in one step, so the
//! recorded amount always equals the balance delta. History truncation
//! never touches the balance.

use crate::transaction::Transaction;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cardholder's ledger record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// 16-digit card number, unique, immutable after creation
    pub card_number: String,
    /// 4-digit PIN, mutable only via the PIN-change operation
    pub pin: String,
    /// Display name, immutable
    pub holder_name: String,
    /// Current balance, never negative after a committed operation
    pub balance: Decimal,
    /// Retained history, newest first, capped by the engine's history limit
    pub transactions: Vec<Transaction>,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Open a new account with its initial-deposit transaction.
    pub fn open(holder_name: &str, card_number: &str, pin: &str, initial_deposit: Decimal) -> Self {
        Self {
            card_number: card_number.to_string(),
            pin: pin.to_string(),
            holder_name: holder_name.to_string(),
            balance: initial_deposit,
            transactions: vec![Transaction::initial_deposit(initial_deposit)],
            created_at: Utc::now(),
        }
    }

    /// Whether the given credentials exactly match this account
    pub fn matches(&self, card_number: &str, pin: &str) -> bool {
        self.card_number == card_number && self.pin == pin
    }

    /// Commit a balance change: apply the signed amount and record the
    /// transaction, keeping only the `cap` most recent entries.
    ///
    /// Every mutating operation routes through here; nothing else may
    /// touch `balance` or prepend to `transactions`.
    pub fn apply(&mut self, tx: Transaction, cap: usize) {
        self.balance += tx.amount;
        self.transactions.insert(0, tx);
        self.transactions.truncate(cap);
    }

    /// Retained history, newest first
    pub fn statement(&self) -> &[Transaction] {
        &self.transactions
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account {} ({}, balance: {})",
            self.card_number, self.holder_name, self.balance
        )
    }
}
