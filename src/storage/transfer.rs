//! Whole-snapshot import and export.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use tracing::{info, warn};

use super::{document, file_store::write_atomic, snapshot_warnings};
use crate::{
    domain::Snapshot,
    errors::{BudgetError, Result},
};

pub const EXPORT_FILE_PREFIX: &str = "budget-data";

/// An export ready to be offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub contents: String,
}

impl ExportFile {
    /// Writes the export into `dir`, returning the full path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.file_name);
        write_atomic(&path, &self.contents)?;
        info!(path = %path.display(), "exported snapshot");
        Ok(path)
    }
}

/// `budget-data-YYYY-MM-DD.json`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{}-{}.json", EXPORT_FILE_PREFIX, date.format("%Y-%m-%d"))
}

pub fn export_snapshot(snapshot: &Snapshot, date: NaiveDate) -> Result<ExportFile> {
    Ok(ExportFile {
        file_name: export_file_name(date),
        contents: document::to_json(snapshot)?,
    })
}

/// Parses an uploaded document. The caller replaces its whole snapshot with
/// the result; nothing is merged.
pub fn import_snapshot(text: &str) -> Result<Snapshot> {
    let snapshot = document::parse_snapshot(text)
        .map_err(|err| BudgetError::InvalidImportFile(err.to_string()))?;
    for warning in snapshot_warnings(&snapshot) {
        warn!("imported {warning}");
    }
    info!(
        accounts = snapshot.accounts.len(),
        categories = snapshot.categories.len(),
        transactions = snapshot.transactions.len(),
        "parsed import document"
    );
    Ok(snapshot)
}

pub fn import_from_path(path: &Path) -> Result<Snapshot> {
    let text = fs::read_to_string(path)?;
    import_snapshot(&text)
}
