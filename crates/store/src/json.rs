//! JSON file store - the whole account set in one file.
//!
//! Every save rewrites the file in full. The domain has a single writer,
//! so there is no partial-write or merge handling.

use crate::error::StoreResult;
use crate::Store;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use teller_core::Account;

/// File-backed store serializing the account set as pretty-printed JSON.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over `path`. The file is created on first save.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store for JsonFileStore {
    fn load(&self) -> StoreResult<Vec<Account>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let accounts = serde_json::from_str(&content)?;
        Ok(accounts)
    }

    fn save(&self, accounts: &[Account]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, accounts)?;
        writer.flush()?;
        tracing::debug!(path = %self.path.display(), count = accounts.len(), "account set saved");
        Ok(())
    }
}
