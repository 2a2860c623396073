//! # Teller Engine
//!
//! The account ledger engine: authenticates cardholders, opens accounts,
//! applies deposits, withdrawals and fast-cash withdrawals, changes PINs,
//! and answers balance and statement queries.
//!
//! The engine owns the in-memory account set and enforces every business
//! rule. Durable persistence is delegated to an injected [`teller_store::Store`];
//! the whole set is saved after each committed mutation.
//!
//! Execution is synchronous and single-threaded: each operation validates,
//! mutates, records history, persists and returns before the next one is
//! accepted. A rejected operation leaves state unchanged.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use teller_engine::LedgerEngine;
//! use teller_store::JsonFileStore;
//!
//! let mut engine = LedgerEngine::new(JsonFileStore::new("data/accounts.json"))?;
//! let session = engine.authenticate("1234567812345678", "1234")?;
//! let balance = engine.deposit(&session, dec!(250.00))?;
//! ```

pub mod engine;
pub mod error;
pub mod seed;
pub mod session;

pub use engine::LedgerEngine;
pub use error::{LedgerError, LedgerResult};
pub use session::Session;
