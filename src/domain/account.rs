use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    common::{Identifiable, NamedEntity},
    ids::AccountId,
};

/// A place money lives in. The balance moves with every transaction posted
/// against it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub balance: Decimal,
}

impl Account {
    pub fn new(id: impl Into<AccountId>, name: impl Into<String>, balance: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            balance,
        }
    }
}

impl Identifiable for Account {
    type Id = AccountId;

    fn id(&self) -> &AccountId {
        &self.id
    }
}

impl NamedEntity for Account {
    fn name(&self) -> &str {
        &self.name
    }
}
