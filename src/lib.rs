#![doc(test(attr(deny(warnings))))]

//! Pocket Budget keeps a personal budget as an immutable snapshot of accounts,
//! categories, and transactions, derives dashboard figures from it, and
//! persists it as a JSON document in a key-value store.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

pub use crate::core::BudgetManager;
pub use domain::Snapshot;
pub use errors::{BudgetError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Pocket Budget tracing initialized.");
    });
}
