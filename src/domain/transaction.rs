use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    common::Identifiable,
    ids::{AccountId, CategoryId, TransactionId},
};

/// A recorded movement of money. Negative amounts are expenses, positive
/// amounts income. Transactions are never edited once recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub account_id: AccountId,
    pub category_id: CategoryId,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    /// Stored in UTC. Offsets on imported timestamps are not kept, and the
    /// date is written back with a `Z` suffix.
    pub date: DateTime<Utc>,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}

impl Identifiable for Transaction {
    type Id = TransactionId;

    fn id(&self) -> &TransactionId {
        &self.id
    }
}

/// User input for a transaction that has not been recorded yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub account_id: AccountId,
    pub category_id: CategoryId,
    pub amount: Decimal,
    pub memo: Option<String>,
}

impl NewTransaction {
    pub fn new(
        account_id: impl Into<AccountId>,
        category_id: impl Into<CategoryId>,
        amount: Decimal,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            category_id: category_id.into(),
            amount,
            memo: None,
        }
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }
}
