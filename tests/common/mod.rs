#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use pocket_budget::{
    core::FixedClock,
    domain::SequentialGenerator,
    storage::{FileKeyValueStore, MemoryKeyValueStore, SnapshotStore},
    BudgetManager,
};
use rust_decimal::Decimal;
use tempfile::TempDir;

pub fn dec(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 10, 15, 14, 30, 0).unwrap()
}

/// Manager over an in-memory store, with deterministic ids and time.
pub fn memory_manager() -> (BudgetManager, Arc<MemoryKeyValueStore>) {
    let backend = Arc::new(MemoryKeyValueStore::new());
    let manager = manager_over(SnapshotStore::new(Arc::clone(&backend)));
    (manager, backend)
}

/// Manager over a file store in a fresh temp directory. Keep the guard alive
/// for the duration of the test.
pub fn file_manager() -> (BudgetManager, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let backend = FileKeyValueStore::new(temp.path().join("data")).expect("file store");
    (manager_over(SnapshotStore::new(backend)), temp)
}

pub fn manager_over(store: SnapshotStore) -> BudgetManager {
    BudgetManager::new(
        store,
        Box::new(SequentialGenerator::default()),
        Box::new(FixedClock(fixed_now())),
        20,
    )
}
