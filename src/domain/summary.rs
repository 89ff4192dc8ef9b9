//! View-model types produced by the aggregation services.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    category::Category,
    ids::{CategoryId, TransactionId},
    period::YearMonth,
};

/// Absolute expense total for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpend {
    pub category_id: CategoryId,
    pub name: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetHealth {
    Good,
    Over,
}

impl BudgetHealth {
    pub fn from_available(available: Decimal) -> Self {
        if available >= Decimal::ZERO {
            BudgetHealth::Good
        } else {
            BudgetHealth::Over
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetHealth::Good => "good",
            BudgetHealth::Over => "over",
        }
    }
}

/// A category together with its signed spending and what is left of its budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBudgetStatus {
    pub category: Category,
    pub spending: Decimal,
    pub available: Decimal,
    pub status: BudgetHealth,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySpendPoint {
    pub month: YearMonth,
    pub amount: Decimal,
}

/// Headline figures for the dashboard view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_balance: Decimal,
    pub total_budgeted: Decimal,
    pub available_to_budget: Decimal,
    pub total_activity: Decimal,
    pub current_month: YearMonth,
    pub current_month_spend: Decimal,
    pub previous_month_spend: Decimal,
    pub spending_change_percent: f64,
}

/// A transaction joined with the names of what it references. Names are
/// `None` when the reference does not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRow {
    pub id: TransactionId,
    pub date: DateTime<Utc>,
    pub account_name: Option<String>,
    pub category_name: Option<String>,
    pub amount: Decimal,
    pub memo: Option<String>,
}
