
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::domain::{Account, Category, Snapshot, Transaction};

pub(super) fn dec(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

pub(super) fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub(super) fn txn(
    id: &str,
    account: &str,
    category: &str,
    cents: i64,
    date: DateTime<Utc>,
) -> Transaction {
    Transaction {
        id: id.into(),
        account_id: account.into(),
        category_id: category.into(),
        amount: dec(cents),
        memo: None,
        date,
    }
}

/// Two accounts, three categories and a handful of transactions across
/// February and March 2024.
pub(super) fn household() -> Snapshot {
    Snapshot {
        accounts: vec![
            Account::new("checking", "Checking", dec(150_000)),
            Account::new("savings", "Savings", dec(500_000)),
        ],
        categories: vec![
            Category::new("groceries", "Groceries").with_budgeted(dec(40_000)),
            Category::new("rent", "Rent").with_budgeted(dec(120_000)),
            Category::new("fun", "Fun").with_budgeted(dec(5_000)),
        ],
        transactions: vec![
            txn("t1", "checking", "groceries", -4_000, at(2024, 2, 3)),
            txn("t2", "checking", "rent", -120_000, at(2024, 2, 5)),
            txn("t3", "checking", "groceries", -6_000, at(2024, 3, 2)),
            txn("t4", "checking", "fun", -7_500, at(2024, 3, 9)),
            txn("t5", "savings", "groceries", 1_000, at(2024, 3, 10)),
        ],
    }
}
