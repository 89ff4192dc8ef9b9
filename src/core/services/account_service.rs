use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::domain::{
    common::normalize_name, unique_id, within_amount_limit, Account, IdGenerator, Snapshot,
};

pub struct AccountService;

impl AccountService {
    /// Appends an account opened with `opening_balance`.
    ///
    /// Blank names and opening balances beyond the amount limit leave the
    /// snapshot unchanged.
    pub fn add(
        snapshot: &Snapshot,
        ids: &mut dyn IdGenerator,
        name: &str,
        opening_balance: Decimal,
    ) -> Snapshot {
        let Some(name) = normalize_name(name) else {
            debug!("ignoring account with blank name");
            return snapshot.clone();
        };
        if !within_amount_limit(opening_balance) {
            warn!(%opening_balance, "opening balance out of range; account not added");
            return snapshot.clone();
        }
        let id = unique_id(ids, |candidate| {
            snapshot.accounts.iter().any(|a| a.id.as_str() == candidate)
        });
        debug!(%id, %name, %opening_balance, "adding account");

        let mut next = snapshot.clone();
        next.accounts.push(Account::new(id, name, opening_balance));
        next
    }
}
