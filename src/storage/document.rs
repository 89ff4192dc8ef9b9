use thiserror::Error;

use crate::{
    domain::{SchemaError, Snapshot},
    errors::{BudgetError, Result},
};

/// Why a JSON document could not be turned into a snapshot.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Parses and validates a snapshot document.
///
/// Shape errors (missing collections, wrong field types) and id contract
/// violations are both rejected; unknown extra keys are ignored.
pub fn parse_snapshot(text: &str) -> std::result::Result<Snapshot, DocumentError> {
    let snapshot: Snapshot = serde_json::from_str(text)?;
    snapshot.validate()?;
    Ok(snapshot)
}

/// Serializes a snapshot as JSON indented with two spaces.
pub fn to_json(snapshot: &Snapshot) -> Result<String> {
    serde_json::to_string_pretty(snapshot).map_err(|err| BudgetError::Storage(err.to_string()))
}
