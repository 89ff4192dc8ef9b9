use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::domain::{
    common::normalize_name, unique_id, within_amount_limit, Category, CategoryId, IdGenerator,
    Snapshot,
};

pub struct CategoryService;

impl CategoryService {
    /// Appends a category with nothing budgeted. Blank names are ignored.
    pub fn add(snapshot: &Snapshot, ids: &mut dyn IdGenerator, name: &str) -> Snapshot {
        let Some(name) = normalize_name(name) else {
            debug!("ignoring category with blank name");
            return snapshot.clone();
        };
        let id = unique_id(ids, |candidate| {
            snapshot.categories.iter().any(|c| c.id.as_str() == candidate)
        });
        debug!(%id, %name, "adding category");

        let mut next = snapshot.clone();
        next.categories.push(Category::new(id, name));
        next
    }

    /// Quick-add: shifts a category's budgeted total by `delta`. A total that
    /// would leave the amount limit is not applied.
    pub fn adjust_budget(snapshot: &Snapshot, category_id: &CategoryId, delta: Decimal) -> Snapshot {
        let mut next = snapshot.clone();
        let Some(category) = next.categories.iter_mut().find(|c| &c.id == category_id) else {
            debug!(%category_id, "budget adjustment for unknown category ignored");
            return snapshot.clone();
        };
        match category
            .budgeted
            .checked_add(delta)
            .filter(|budgeted| within_amount_limit(*budgeted))
        {
            Some(budgeted) => {
                category.budgeted = budgeted;
                debug!(%category_id, %delta, %budgeted, "adjusted budget");
                next
            }
            None => {
                warn!(%category_id, %delta, "budget adjustment out of range ignored");
                snapshot.clone()
            }
        }
    }
}
