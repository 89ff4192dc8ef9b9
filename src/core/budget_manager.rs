use std::{collections::VecDeque, path::Path};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::{
    clock::{Clock, SystemClock},
    services::{AccountService, CategoryService, SummaryService, TransactionService},
};
use crate::{
    config::Config,
    domain::{
        CategoryId, DashboardSummary, IdGenerator, NewTransaction, Snapshot, UuidGenerator,
        YearMonth,
    },
    errors::{BudgetError, Result},
    storage::{sample, transfer, ExportFile, SnapshotStore},
};

const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Owns the current snapshot and persists every change write-through.
///
/// Each mutation runs the matching pure service, keeps the previous snapshot
/// for [`undo`](Self::undo), and saves the new snapshot immediately. A failed
/// save is returned to the caller but the in-memory state still advances;
/// nothing is retried.
pub struct BudgetManager {
    snapshot: Snapshot,
    history: VecDeque<Snapshot>,
    history_limit: usize,
    store: SnapshotStore,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl BudgetManager {
    pub fn new(
        store: SnapshotStore,
        ids: Box<dyn IdGenerator>,
        clock: Box<dyn Clock>,
        history_limit: usize,
    ) -> Self {
        let snapshot = store.load();
        Self {
            snapshot,
            history: VecDeque::new(),
            history_limit,
            store,
            ids,
            clock,
        }
    }

    /// Opens `store` with random ids and the system clock.
    pub fn open(store: SnapshotStore) -> Self {
        Self::new(
            store,
            Box::new(UuidGenerator),
            Box::new(SystemClock),
            DEFAULT_HISTORY_LIMIT,
        )
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let store = config.open_store()?;
        Ok(Self::new(
            store,
            Box::new(UuidGenerator),
            Box::new(SystemClock),
            config.history_limit,
        ))
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn add_account(&mut self, name: &str, opening_balance: Decimal) -> Result<()> {
        let next = AccountService::add(&self.snapshot, self.ids.as_mut(), name, opening_balance);
        self.commit(next, "add account")
    }

    pub fn add_category(&mut self, name: &str) -> Result<()> {
        let next = CategoryService::add(&self.snapshot, self.ids.as_mut(), name);
        self.commit(next, "add category")
    }

    pub fn adjust_category_budget(&mut self, category_id: &CategoryId, delta: Decimal) -> Result<()> {
        let next = CategoryService::adjust_budget(&self.snapshot, category_id, delta);
        self.commit(next, "adjust category budget")
    }

    pub fn add_transaction(&mut self, input: NewTransaction) -> Result<()> {
        let next = TransactionService::add(
            &self.snapshot,
            self.ids.as_mut(),
            self.clock.as_ref(),
            input,
        );
        self.commit(next, "add transaction")
    }

    /// Replaces the snapshot with an uploaded document. Invalid documents
    /// leave the current snapshot untouched.
    pub fn import_json(&mut self, text: &str) -> Result<()> {
        let imported = transfer::import_snapshot(text)?;
        self.commit(imported, "import")
    }

    pub fn import_file(&mut self, path: &Path) -> Result<()> {
        let imported = transfer::import_from_path(path)?;
        self.commit(imported, "import file")
    }

    pub fn load_sample(&mut self) -> Result<()> {
        let snapshot = sample::sample_snapshot()?;
        info!("loading sample data");
        self.commit(snapshot, "load sample data")
    }

    pub fn export(&self, date: NaiveDate) -> Result<ExportFile> {
        transfer::export_snapshot(&self.snapshot, date)
    }

    pub fn export_today(&self) -> Result<ExportFile> {
        self.export(self.clock.today())
    }

    /// Dashboard figures for the clock's current month.
    pub fn dashboard(&self) -> DashboardSummary {
        SummaryService::dashboard(&self.snapshot, YearMonth::of(&self.clock.now()))
    }

    /// Restores the snapshot as it was before the last change.
    pub fn undo(&mut self) -> Result<()> {
        let previous = self.history.pop_back().ok_or(BudgetError::NothingToUndo)?;
        self.snapshot = previous;
        debug!(remaining = self.history.len(), "undid last change");
        self.persist("undo")
    }

    fn commit(&mut self, next: Snapshot, action: &str) -> Result<()> {
        if next == self.snapshot {
            debug!(action, "no change");
            return Ok(());
        }
        let previous = std::mem::replace(&mut self.snapshot, next);
        if self.history_limit > 0 {
            if self.history.len() == self.history_limit {
                self.history.pop_front();
            }
            self.history.push_back(previous);
        }
        self.persist(action)
    }

    fn persist(&self, action: &str) -> Result<()> {
        self.store.save(&self.snapshot).map_err(|err| {
            warn!(action, error = %err, "failed to save snapshot");
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::domain::SequentialGenerator;
    use crate::storage::{KeyValueStore, MemoryKeyValueStore};
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    fn manager_with(backend: Arc<MemoryKeyValueStore>, history_limit: usize) -> BudgetManager {
        BudgetManager::new(
            SnapshotStore::new(backend),
            Box::new(SequentialGenerator::default()),
            Box::new(FixedClock(Utc.with_ymd_and_hms(2024, 4, 2, 9, 0, 0).unwrap())),
            history_limit,
        )
    }

    #[test]
    fn mutations_are_saved_immediately() {
        let backend = Arc::new(MemoryKeyValueStore::new());
        let mut manager = manager_with(Arc::clone(&backend), 10);
        manager.add_account("Checking", Decimal::new(100, 0)).unwrap();

        let reopened = SnapshotStore::new(Arc::clone(&backend)).load();
        assert_eq!(&reopened, manager.snapshot());
    }

    #[test]
    fn no_op_mutations_do_not_touch_storage_or_history() {
        let backend = Arc::new(MemoryKeyValueStore::new());
        let mut manager = manager_with(Arc::clone(&backend), 10);
        manager.add_account("  ", Decimal::ONE).unwrap();
        assert!(!manager.can_undo());
        assert_eq!(backend.get(crate::storage::DEFAULT_STORE_KEY).unwrap(), None);
    }

    #[test]
    fn undo_walks_back_one_change_at_a_time() {
        let backend = Arc::new(MemoryKeyValueStore::new());
        let mut manager = manager_with(backend, 10);
        manager.add_category("Groceries").unwrap();
        let category = manager.snapshot().categories[0].id.clone();
        manager
            .adjust_category_budget(&category, Decimal::new(50, 0))
            .unwrap();

        manager.undo().unwrap();
        assert_eq!(manager.snapshot().categories[0].budgeted, Decimal::ZERO);
        manager.undo().unwrap();
        assert!(manager.snapshot().is_empty());
        assert!(matches!(manager.undo(), Err(BudgetError::NothingToUndo)));
    }

    #[test]
    fn history_is_bounded() {
        let backend = Arc::new(MemoryKeyValueStore::new());
        let mut manager = manager_with(backend, 2);
        for name in ["A", "B", "C"] {
            manager.add_category(name).unwrap();
        }
        manager.undo().unwrap();
        manager.undo().unwrap();
        assert_eq!(manager.snapshot().categories.len(), 1);
        assert!(!manager.can_undo());
    }

    #[test]
    fn dashboard_reports_the_clock_month() {
        let backend = Arc::new(MemoryKeyValueStore::new());
        let mut manager = manager_with(backend, 0);
        manager.add_account("Checking", Decimal::new(300, 0)).unwrap();
        manager.add_category("Food").unwrap();
        let account = manager.snapshot().accounts[0].id.clone();
        let category = manager.snapshot().categories[0].id.clone();
        manager
            .add_transaction(NewTransaction::new(account, category, Decimal::new(-45, 0)))
            .unwrap();

        let dashboard = manager.dashboard();
        assert_eq!(dashboard.current_month.to_string(), "2024-04");
        assert_eq!(dashboard.current_month_spend, Decimal::new(45, 0));
        assert_eq!(dashboard.total_balance, Decimal::new(255, 0));
        assert_eq!(dashboard.spending_change_percent, 0.0);
    }

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(BudgetError::Storage("read-only store".into()))
        }

        fn remove(&self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_save_is_returned_but_state_advances() {
        let mut manager = BudgetManager::new(
            SnapshotStore::new(ReadOnlyStore),
            Box::new(SequentialGenerator::default()),
            Box::new(FixedClock(Utc.with_ymd_and_hms(2024, 4, 2, 9, 0, 0).unwrap())),
            10,
        );
        let err = manager.add_account("Checking", Decimal::new(100, 0)).unwrap_err();
        assert!(matches!(err, BudgetError::Storage(_)));
        assert_eq!(manager.snapshot().accounts.len(), 1);
        assert_eq!(manager.snapshot().accounts[0].name, "Checking");
        assert!(manager.can_undo());
    }

    #[test]
    fn from_config_honors_directory_key_and_history_limit() {
        let temp = tempfile::tempdir().unwrap();
        let config = Config {
            store_key: "household".into(),
            data_dir: Some(temp.path().join("data")),
            history_limit: 1,
            ..Config::default()
        };
        let mut manager = BudgetManager::from_config(&config).unwrap();
        manager.add_category("Rent").unwrap();
        manager.add_category("Food").unwrap();

        let document = temp.path().join("data").join("household.json");
        assert!(document.exists());

        manager.undo().unwrap();
        assert!(!manager.can_undo());
        assert!(matches!(manager.undo(), Err(BudgetError::NothingToUndo)));
        assert_eq!(manager.snapshot().categories.len(), 1);

        let reopened = BudgetManager::from_config(&config).unwrap();
        assert_eq!(reopened.snapshot(), manager.snapshot());
    }

    #[test]
    fn open_loads_the_stored_snapshot_and_issues_uuid_ids() {
        let backend = Arc::new(MemoryKeyValueStore::new());
        let mut first = BudgetManager::open(SnapshotStore::new(Arc::clone(&backend)));
        first.add_account("Checking", Decimal::ONE).unwrap();

        let second = BudgetManager::open(SnapshotStore::new(backend));
        let account = &second.snapshot().accounts[0];
        assert_eq!(account.name, "Checking");
        assert!(uuid::Uuid::parse_str(account.id.as_str()).is_ok());
    }

    #[test]
    fn export_today_uses_the_clock_date() {
        let backend = Arc::new(MemoryKeyValueStore::new());
        let manager = manager_with(backend, 0);
        let export = manager.export_today().unwrap();
        assert_eq!(export.file_name, "budget-data-2024-04-02.json");
    }
}
