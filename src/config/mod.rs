//! Persistent settings for where and how the budget is stored.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    errors::{BudgetError, Result},
    storage::{file_store::write_atomic, FileKeyValueStore, SnapshotStore, DEFAULT_STORE_KEY},
    utils::paths::{self, ensure_dir},
};

const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";
const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Key the snapshot document is stored under.
    pub store_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
    /// Number of snapshots kept for undo.
    pub history_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_key: DEFAULT_STORE_KEY.into(),
            data_dir: None,
            export_dir: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl Config {
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| paths::data_dir_in(&paths::app_data_dir()))
    }

    pub fn resolved_export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| paths::export_dir_in(&paths::app_data_dir()))
    }

    /// Opens the file-backed snapshot store this configuration points at.
    pub fn open_store(&self) -> Result<SnapshotStore> {
        let backend = FileKeyValueStore::new(self.resolved_data_dir())?;
        Ok(SnapshotStore::with_key(backend, self.store_key.clone()))
    }
}

/// Loads and saves [`Config`] as JSON under `<base>/config/config.json`.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        let config_dir = base.join(CONFIG_DIR);
        ensure_dir(&config_dir)?;
        Ok(Self {
            path: config_dir.join(CONFIG_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file; using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| BudgetError::Config(err.to_string()))
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| BudgetError::Config(err.to_string()))?;
        write_atomic(&self.path, &json)
    }
}
