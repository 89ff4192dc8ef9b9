use thiserror::Error;

/// Error type shared by the store, persistence, and controller layers.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("Malformed persisted data: {0}")]
    MalformedPersistedData(String),
    #[error("Invalid JSON file: {0}")]
    InvalidImportFile(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Nothing to undo")]
    NothingToUndo,
}

pub type Result<T> = std::result::Result<T, BudgetError>;

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        BudgetError::Storage(err.to_string())
    }
}
