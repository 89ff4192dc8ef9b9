pub mod budget_manager;
pub mod clock;
pub mod services;

pub use budget_manager::BudgetManager;
pub use clock::{Clock, FixedClock, SystemClock};
