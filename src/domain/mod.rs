//! Budget domain models and persistence-friendly types.

pub mod account;
pub mod category;
pub mod common;
pub mod ids;
pub mod period;
pub mod snapshot;
pub mod summary;
pub mod transaction;

pub use account::Account;
pub use category::Category;
pub use common::{Identifiable, NamedEntity};
pub use ids::{
    unique_id, AccountId, CategoryId, IdGenerator, SequentialGenerator, TransactionId,
    UuidGenerator,
};
pub use period::{YearMonth, YearMonthError};
pub use snapshot::{amount_limit, within_amount_limit, SchemaError, Snapshot};
pub use summary::{
    BudgetHealth, CategoryBudgetStatus, CategorySpend, DashboardSummary, MonthlySpendPoint,
    TransactionRow,
};
pub use transaction::{NewTransaction, Transaction};
