//! # Teller Core
//!
//! Core domain types for the Teller account ledger:
//!
//! - [`Account`] - a cardholder's ledger record (card number, PIN, balance,
//!   bounded transaction history)
//! - [`Transaction`] / [`TransactionKind`] - one immutable record of a
//!   balance change, signed by direction (credit positive, debit negative)
//! - [`Limits`] - the recognized tunables (ceilings, minimums, history cap,
//!   fast-cash menu)
//! - [`CoreError`] - the validation error taxonomy shared by all operations
//!
//! Money is always [`rust_decimal::Decimal`], never floating point.

pub mod account;
pub mod card;
pub mod error;
pub mod limits;
pub mod transaction;

pub use account::Account;
pub use error::{CoreError, CoreResult};
pub use limits::Limits;
pub use transaction::{Transaction, TransactionKind};
