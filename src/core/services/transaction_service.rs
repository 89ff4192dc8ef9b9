use tracing::{debug, warn};

use crate::core::clock::Clock;
use crate::domain::{
    common::normalize_name, unique_id, within_amount_limit, IdGenerator, NewTransaction, Snapshot,
    Transaction,
};

pub struct TransactionService;

impl TransactionService {
    /// Records a transaction stamped with `clock.now()` and posts its amount to
    /// the referenced account in the returned snapshot.
    ///
    /// An unknown account does not reject the transaction: it is still
    /// recorded, and no balance moves. An amount, or a resulting balance,
    /// beyond the amount limit is refused and the snapshot comes back
    /// unchanged.
    pub fn add(
        snapshot: &Snapshot,
        ids: &mut dyn IdGenerator,
        clock: &dyn Clock,
        input: NewTransaction,
    ) -> Snapshot {
        if !within_amount_limit(input.amount) {
            warn!(amount = %input.amount, "transaction amount out of range; not recorded");
            return snapshot.clone();
        }
        let id = unique_id(ids, |candidate| {
            snapshot.transactions.iter().any(|t| t.id.as_str() == candidate)
        });
        let transaction = Transaction {
            id: id.into(),
            account_id: input.account_id,
            category_id: input.category_id,
            amount: input.amount,
            memo: input.memo.as_deref().and_then(normalize_name),
            date: clock.now(),
        };

        let mut next = snapshot.clone();
        match next
            .accounts
            .iter_mut()
            .find(|account| account.id == transaction.account_id)
        {
            Some(account) => match account
                .balance
                .checked_add(transaction.amount)
                .filter(|balance| within_amount_limit(*balance))
            {
                Some(balance) => account.balance = balance,
                None => {
                    warn!(
                        account = %account.id,
                        amount = %transaction.amount,
                        "posting would push balance out of range; not recorded"
                    );
                    return snapshot.clone();
                }
            },
            None => warn!(
                transaction = %transaction.id,
                account = %transaction.account_id,
                "transaction references unknown account; balance not updated"
            ),
        }
        debug!(
            id = %transaction.id,
            amount = %transaction.amount,
            "recorded transaction"
        );
        next.transactions.push(transaction);
        next
    }
}
