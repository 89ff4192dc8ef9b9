//! Pure operations over a [`Snapshot`](crate::domain::Snapshot).
//!
//! Mutating services take the current snapshot by reference and return the
//! next one; the aggregation service only reads.

pub mod account_service;
pub mod category_service;
pub mod summary_service;
pub mod transaction_service;

pub use account_service::AccountService;
pub use category_service::CategoryService;
pub use summary_service::SummaryService;
pub use transaction_service::TransactionService;

#[cfg(test)]
mod tests;
