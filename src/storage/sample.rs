//! Bundled demo data in the persisted document shape.

use crate::{
    domain::Snapshot,
    errors::{BudgetError, Result},
};

use super::document;

const SAMPLE_DATA: &str = include_str!("../../assets/sample_data.json");

/// Raw bundled document, as it would be downloaded or imported.
pub fn sample_document() -> &'static str {
    SAMPLE_DATA
}

pub fn sample_snapshot() -> Result<Snapshot> {
    document::parse_snapshot(SAMPLE_DATA)
        .map_err(|err| BudgetError::MalformedPersistedData(format!("bundled sample data: {err}")))
}
