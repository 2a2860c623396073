//! # Teller Store
//!
//! Durable-persistence capability consumed by the ledger engine.
//!
//! The contract is deliberately small: load the whole account set, or
//! overwrite it. Last write wins; no ordering or transactional guarantees
//! beyond that.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use teller_store::{JsonFileStore, Store};
//!
//! let store = JsonFileStore::new("data/accounts.json");
//! let accounts = store.load()?;
//! store.save(&accounts)?;
//! ```

pub mod error;
pub mod json;
pub mod memory;

pub use error::{StoreError, StoreResult};
pub use json::JsonFileStore;
pub use memory::MemoryStore;

use teller_core::Account;

/// Whole-set load/save capability.
///
/// `save` overwrites the entire persisted set and is treated as atomic by
/// the engine; `load` returns the previously saved set, or an empty vec
/// when nothing has been saved yet.
pub trait Store {
    fn load(&self) -> StoreResult<Vec<Account>>;
    fn save(&self, accounts: &[Account]) -> StoreResult<()>;
}
