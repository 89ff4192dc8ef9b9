use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    common::{Identifiable, NamedEntity},
    ids::CategoryId,
};

/// Groups spending for budgeting. `budgeted` accumulates quick-add deltas and
/// is never recomputed from history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub budgeted: Decimal,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            budgeted: Decimal::ZERO,
        }
    }

    pub fn with_budgeted(mut self, budgeted: Decimal) -> Self {
        self.budgeted = budgeted;
        self
    }
}

impl Identifiable for Category {
    type Id = CategoryId;

    fn id(&self) -> &CategoryId {
        &self.id
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}
