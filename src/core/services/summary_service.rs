use std::collections::HashMap;

use rust_decimal::{prelude::ToPrimitive, Decimal};

use crate::domain::{
    Account, AccountId, BudgetHealth, Category, CategoryBudgetStatus, CategoryId, CategorySpend,
    DashboardSummary, MonthlySpendPoint, NamedEntity, Snapshot, TransactionRow, YearMonth,
};

/// Derived figures over a snapshot. Every function is pure and returns zero or
/// an empty collection for an empty snapshot; dangling references are skipped.
pub struct SummaryService;

impl SummaryService {
    /// Longest series [`monthly_spend_series`](Self::monthly_spend_series)
    /// produces: one hundred years of months.
    pub const MAX_SERIES_MONTHS: usize = 1200;

    /// Signed sum of the category's transactions: income recorded against a
    /// category lowers its reported spending.
    pub fn spending_in_category(snapshot: &Snapshot, category_id: &CategoryId) -> Decimal {
        saturating_sum(
            snapshot
                .transactions
                .iter()
                .filter(|txn| &txn.category_id == category_id)
                .map(|txn| txn.amount),
        )
    }

    pub fn available_in_category(snapshot: &Snapshot, category: &Category) -> Decimal {
        category
            .budgeted
            .saturating_add(Self::spending_in_category(snapshot, &category.id))
    }

    pub fn total_balance(snapshot: &Snapshot) -> Decimal {
        saturating_sum(snapshot.accounts.iter().map(|account| account.balance))
    }

    pub fn total_budgeted(snapshot: &Snapshot) -> Decimal {
        saturating_sum(snapshot.categories.iter().map(|c| c.budgeted))
    }

    pub fn total_activity(snapshot: &Snapshot) -> Decimal {
        saturating_sum(snapshot.transactions.iter().map(|txn| txn.amount))
    }

    pub fn available_to_budget(snapshot: &Snapshot) -> Decimal {
        Self::total_balance(snapshot).saturating_sub(Self::total_budgeted(snapshot))
    }

    pub fn account_activity(snapshot: &Snapshot, account_id: &AccountId) -> Decimal {
        saturating_sum(
            snapshot
                .transactions
                .iter()
                .filter(|txn| &txn.account_id == account_id)
                .map(|txn| txn.amount),
        )
    }

    /// Balance the account must have been opened with for its current balance
    /// to reconcile with the transaction log.
    pub fn implied_opening_balance(snapshot: &Snapshot, account: &Account) -> Decimal {
        account
            .balance
            .saturating_sub(Self::account_activity(snapshot, &account.id))
    }

    /// Total expenses (as a positive number) dated within `month`.
    pub fn monthly_spend(snapshot: &Snapshot, month: YearMonth) -> Decimal {
        saturating_sum(
            snapshot
                .transactions
                .iter()
                .filter(|txn| txn.is_expense() && month.contains(&txn.date))
                .map(|txn| txn.amount.abs()),
        )
    }

    /// Percentage change from `previous` to `current`; 0 when there is no
    /// positive baseline to compare against.
    pub fn spending_change_percent(current: Decimal, previous: Decimal) -> f64 {
        if previous <= Decimal::ZERO {
            return 0.0;
        }
        current
            .checked_sub(previous)
            .and_then(|delta| delta.checked_div(previous))
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .and_then(|percent| percent.to_f64())
            .unwrap_or(0.0)
    }

    /// Expense totals per category, largest first. Categories without
    /// expenses are left out.
    pub fn category_spend_breakdown(snapshot: &Snapshot) -> Vec<CategorySpend> {
        let mut totals: HashMap<&CategoryId, Decimal> = HashMap::new();
        for txn in snapshot.transactions.iter().filter(|txn| txn.is_expense()) {
            let total = totals.entry(&txn.category_id).or_default();
            *total = total.saturating_add(txn.amount.abs());
        }

        let mut breakdown: Vec<CategorySpend> = snapshot
            .categories
            .iter()
            .filter_map(|category| {
                let amount = totals.get(&category.id).copied().unwrap_or_default();
                (!amount.is_zero()).then(|| CategorySpend {
                    category_id: category.id.clone(),
                    name: category.name.clone(),
                    amount,
                })
            })
            .collect();
        breakdown.sort_by(|a, b| b.amount.cmp(&a.amount));
        breakdown
    }

    pub fn budget_status(snapshot: &Snapshot) -> Vec<CategoryBudgetStatus> {
        snapshot
            .categories
            .iter()
            .map(|category| {
                let spending = Self::spending_in_category(snapshot, &category.id);
                let available = category.budgeted.saturating_add(spending);
                CategoryBudgetStatus {
                    category: category.clone(),
                    spending,
                    available,
                    status: BudgetHealth::from_available(available),
                }
            })
            .collect()
    }

    /// `months` consecutive monthly spend totals ending with `end`, oldest first.
    /// `months` is capped at [`MAX_SERIES_MONTHS`](Self::MAX_SERIES_MONTHS).
    pub fn monthly_spend_series(
        snapshot: &Snapshot,
        end: YearMonth,
        months: usize,
    ) -> Vec<MonthlySpendPoint> {
        let months = months.min(Self::MAX_SERIES_MONTHS);
        if months == 0 {
            return Vec::new();
        }
        let mut start = end;
        for _ in 1..months {
            start = start.previous();
        }

        let mut series = Vec::with_capacity(months);
        let mut month = start;
        for _ in 0..months {
            series.push(MonthlySpendPoint {
                month,
                amount: Self::monthly_spend(snapshot, month),
            });
            month = month.next();
        }
        series
    }

    pub fn dashboard(snapshot: &Snapshot, current_month: YearMonth) -> DashboardSummary {
        let current_month_spend = Self::monthly_spend(snapshot, current_month);
        let previous_month_spend = Self::monthly_spend(snapshot, current_month.previous());
        DashboardSummary {
            total_balance: Self::total_balance(snapshot),
            total_budgeted: Self::total_budgeted(snapshot),
            available_to_budget: Self::available_to_budget(snapshot),
            total_activity: Self::total_activity(snapshot),
            current_month,
            current_month_spend,
            previous_month_spend,
            spending_change_percent: Self::spending_change_percent(
                current_month_spend,
                previous_month_spend,
            ),
        }
    }

    /// Newest transactions first, with account and category names resolved.
    pub fn recent_transactions(snapshot: &Snapshot, limit: usize) -> Vec<TransactionRow> {
        snapshot
            .transactions
            .iter()
            .rev()
            .take(limit)
            .map(|txn| TransactionRow {
                id: txn.id.clone(),
                date: txn.date,
                account_name: snapshot.account(&txn.account_id).map(owned_name),
                category_name: snapshot.category(&txn.category_id).map(owned_name),
                amount: txn.amount,
                memo: txn.memo.clone(),
            })
            .collect()
    }
}

/// Sums without panicking. Validated snapshots never reach the bounds, but
/// snapshots built in code are not validated.
fn saturating_sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, Decimal::saturating_add)
}

fn owned_name<T: NamedEntity>(entity: &T) -> String {
    entity.name().to_owned()
}
