//! In-memory store for tests and demos.

use crate::error::StoreResult;
use crate::Store;
use std::sync::Mutex;
use teller_core::Account;

/// Store backed by process memory. Contents are lost on drop.
#[derive(Default)]
pub struct MemoryStore {
    accounts: Mutex<Vec<Account>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Mutex::new(accounts),
        }
    }
}

impl Store for MemoryStore {
    fn load(&self) -> StoreResult<Vec<Account>> {
        Ok(self.accounts.lock().unwrap().clone())
    }

    fn save(&self, accounts: &[Account]) -> StoreResult<()> {
        *self.accounts.lock().unwrap() = accounts.to_vec();
        Ok(())
    }
}
