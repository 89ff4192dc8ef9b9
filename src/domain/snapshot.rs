use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    account::Account,
    category::Category,
    common::Identifiable,
    ids::{AccountId, CategoryId, TransactionId},
    transaction::Transaction,
};

/// Largest magnitude (10^15) an amount, balance or budget may hold. Sums over
/// millions of such values stay well inside `Decimal`'s range.
pub fn amount_limit() -> Decimal {
    Decimal::new(1_000_000_000_000_000, 0)
}

pub fn within_amount_limit(amount: Decimal) -> bool {
    amount.abs() <= amount_limit()
}

/// The complete budget state at a point in time.
///
/// Transactions are kept in insertion order, which is also chronological
/// order. Snapshots are values: mutators build new ones instead of editing an
/// existing snapshot in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snapshot {
    pub accounts: Vec<Account>,
    pub categories: Vec<Category>,
    pub transactions: Vec<Transaction>,
}

/// Structural problems a deserialized document can have beyond its JSON shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("{collection} entry has an empty id")]
    EmptyId { collection: &'static str },
    #[error("{collection} id `{id}` is used more than once")]
    DuplicateId {
        collection: &'static str,
        id: String,
    },
    #[error("{collection} `{id}` holds {amount}, beyond the supported magnitude")]
    AmountOutOfRange {
        collection: &'static str,
        id: String,
        amount: Decimal,
    },
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty() && self.categories.is_empty() && self.transactions.is_empty()
    }

    pub fn account(&self, id: &AccountId) -> Option<&Account> {
        self.accounts.iter().find(|account| &account.id == id)
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| &category.id == id)
    }

    pub fn transaction(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| &txn.id == id)
    }

    /// Checks the id contract (ids are non-empty and unique per collection)
    /// and that every monetary value is within [`amount_limit`].
    pub fn validate(&self) -> Result<(), SchemaError> {
        check_ids("account", &self.accounts)?;
        check_ids("category", &self.categories)?;
        check_ids("transaction", &self.transactions)?;
        check_amounts("account", self.accounts.iter().map(|a| (&a.id, a.balance)))?;
        check_amounts(
            "category",
            self.categories.iter().map(|c| (&c.id, c.budgeted)),
        )?;
        check_amounts(
            "transaction",
            self.transactions.iter().map(|t| (&t.id, t.amount)),
        )?;
        Ok(())
    }
}

fn check_amounts<'a, I, Id>(collection: &'static str, amounts: I) -> Result<(), SchemaError>
where
    I: IntoIterator<Item = (&'a Id, Decimal)>,
    Id: std::fmt::Display + 'a,
{
    match amounts
        .into_iter()
        .find(|(_, amount)| !within_amount_limit(*amount))
    {
        Some((id, amount)) => Err(SchemaError::AmountOutOfRange {
            collection,
            id: id.to_string(),
            amount,
        }),
        None => Ok(()),
    }
}

fn check_ids<T: Identifiable>(collection: &'static str, items: &[T]) -> Result<(), SchemaError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        let id = item.id();
        if id.to_string().trim().is_empty() {
            return Err(SchemaError::EmptyId { collection });
        }
        if !seen.insert(id) {
            return Err(SchemaError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
