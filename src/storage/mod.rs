//! Persistence adapter: snapshots stored as JSON documents in a key-value store.

pub mod document;
pub mod file_store;
pub mod memory_store;
pub mod sample;
pub mod transfer;

use std::{collections::HashSet, sync::Arc};

use tracing::{debug, warn};

use crate::{
    domain::Snapshot,
    errors::{BudgetError, Result},
};

pub use file_store::FileKeyValueStore;
pub use memory_store::MemoryKeyValueStore;
pub use transfer::ExportFile;

/// Key the snapshot document is stored under unless configured otherwise.
pub const DEFAULT_STORE_KEY: &str = "budget-data";

/// Minimal string key-value storage, the shape of browser local storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Loads and saves the whole snapshot under a single key.
pub struct SnapshotStore {
    backend: Box<dyn KeyValueStore>,
    key: String,
}

impl SnapshotStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self::with_key(backend, DEFAULT_STORE_KEY)
    }

    pub fn with_key(backend: impl KeyValueStore + 'static, key: impl Into<String>) -> Self {
        Self {
            backend: Box::new(backend),
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the stored snapshot. `Ok(None)` means nothing has been saved yet.
    pub fn try_load(&self) -> Result<Option<Snapshot>> {
        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(None);
        };
        let snapshot = document::parse_snapshot(&raw)
            .map_err(|err| BudgetError::MalformedPersistedData(err.to_string()))?;
        Ok(Some(snapshot))
    }

    /// Reads the stored snapshot, falling back to an empty one when nothing is
    /// stored or the stored document cannot be used.
    pub fn load(&self) -> Snapshot {
        match self.try_load() {
            Ok(Some(snapshot)) => {
                for warning in snapshot_warnings(&snapshot) {
                    warn!(key = %self.key, "{warning}");
                }
                debug!(
                    key = %self.key,
                    accounts = snapshot.accounts.len(),
                    categories = snapshot.categories.len(),
                    transactions = snapshot.transactions.len(),
                    "loaded snapshot"
                );
                snapshot
            }
            Ok(None) => {
                debug!(key = %self.key, "no stored snapshot; starting empty");
                Snapshot::default()
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "discarding unreadable snapshot");
                Snapshot::default()
            }
        }
    }

    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let json = document::to_json(snapshot)?;
        self.backend.set(&self.key, &json)?;
        debug!(key = %self.key, bytes = json.len(), "saved snapshot");
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        self.backend.remove(&self.key)
    }
}

/// Describes references that do not resolve. They are tolerated everywhere,
/// so these are only worth logging.
pub fn snapshot_warnings(snapshot: &Snapshot) -> Vec<String> {
    let account_ids: HashSet<_> = snapshot.accounts.iter().map(|a| &a.id).collect();
    let category_ids: HashSet<_> = snapshot.categories.iter().map(|c| &c.id).collect();
    let mut warnings = Vec::new();

    for txn in &snapshot.transactions {
        if !account_ids.contains(&txn.account_id) {
            warnings.push(format!(
                "transaction {} references unknown account {}",
                txn.id, txn.account_id
            ));
        }
        if !category_ids.contains(&txn.category_id) {
            warnings.push(format!(
                "transaction {} references missing category {}",
                txn.id, txn.category_id
            ));
        }
    }
    warnings
}
