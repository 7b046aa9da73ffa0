use std::collections::HashSet;

use log::debug;

use crate::core::error::{LedgerError, LedgerResult};
use crate::core::notification::{Notification, Notifier};
use crate::core::transaction::{Candidate, Transaction, TransactionId};

/// The only owner of the transaction list. Everything else sees
/// borrowed snapshots and hands back candidates.
pub struct Ledger {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
    notifier: Option<Box<dyn Notifier>>
}

impl Ledger {
    const FIRST_ID: TransactionId = 1;

    pub fn new() -> Ledger {
        return Ledger { transactions: Vec::new(), next_id: Self::FIRST_ID, notifier: None };
    }

    /// Starts from existing records, keeping their ids and order.
    /// New ids continue above the largest seeded one.
    pub fn from_transactions(transactions: Vec<Transaction>) -> LedgerResult<Ledger> {
        let mut seen = HashSet::new();
        for transaction in &transactions {
            if !seen.insert(transaction.id) {
                return Err(LedgerError::DuplicateId(transaction.id));
            }
        }

        let next_id = match transactions.iter().map(|t| t.id).max() {
            Some(last) => last.checked_add(1).ok_or(LedgerError::IdSpaceExhausted(last))?,
            None => Self::FIRST_ID
        };

        return Ok(Ledger { transactions, next_id, notifier: None });
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Ledger {
        self.notifier = Some(Box::new(notifier));
        self
    }

    pub fn snapshot(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Fails, leaving the list untouched, once the id after the
    /// one being handed out would not fit in a `TransactionId`.
    pub fn add(&mut self, candidate: Candidate) -> LedgerResult<&Transaction> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(LedgerError::IdSpaceExhausted(id))?;

        self.transactions.push(candidate.with_id(id));
        debug!("added transaction {}", id);
        self.emit(Notification::Added(id));

        let last = self.transactions.len() - 1;
        return Ok(&self.transactions[last]);
    }

    /// Replaces every field of the record sharing `transaction.id`.
    /// Returns false, leaving the list untouched, when there is none.
    pub fn update(&mut self, transaction: Transaction) -> bool {
        let id = transaction.id;
        let found = match self.transactions.iter_mut().find(|t| t.id == id) {
            Some(existing) => {
                *existing = transaction;
                true
            },
            None => {
                debug!("no transaction {} to update", id);
                false
            }
        };
        self.emit(Notification::Updated(id));
        return found;
    }

    pub fn remove(&mut self, id: TransactionId) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);

        let removed = self.transactions.len() != before;
        if !removed {
            debug!("no transaction {} to remove", id);
        }
        self.emit(Notification::Deleted(id));
        return removed;
    }

    fn emit(&self, notification: Notification) {
        if let Some(notifier) = &self.notifier {
            notifier.notify(notification);
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    use chrono::NaiveDate;
    use rstest::{fixture, rstest};

    use crate::core::{Candidate, Ledger, LedgerError, Notification, Transaction, TransactionType};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 10, day).unwrap()
    }

    #[fixture]
    fn base() -> Vec<Transaction> {
        vec![
            Transaction::new(1, date(1), 200.0, TransactionType::Income, "Nike"),
            Transaction::new(2, date(2), 150.0, TransactionType::Expense, "Adidas")
        ]
    }

    #[fixture]
    fn ledger(base: Vec<Transaction>) -> Ledger {
        Ledger::from_transactions(base).unwrap()
    }

    #[fixture]
    fn puma() -> Candidate {
        Candidate::new(date(3), 50.0, TransactionType::Expense, "Puma")
    }

    #[rstest]
    fn add_to_base(mut ledger: Ledger, puma: Candidate) {
        let added = ledger.add(puma.clone()).unwrap().clone();

        assert_eq!(ledger.len(), 3);
        assert!(added.id != 1 && added.id != 2);
        assert_eq!(added.to_candidate(), puma);
        assert_eq!(ledger.snapshot()[2], added);
    }

    #[rstest]
    fn update_in_base(mut ledger: Ledger, base: Vec<Transaction>) {
        let replacement = Transaction::new(2, date(2), 999.0, TransactionType::Expense, "Reebok");
        assert!(ledger.update(replacement.clone()));

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get(2), Some(&replacement));
        assert_eq!(ledger.get(1), Some(&base[0]));
    }

    #[rstest]
    fn update_replaces_every_field(mut ledger: Ledger) {
        let replacement = Transaction::new(1, date(9), -3.5, TransactionType::Expense, "Groceries");
        ledger.update(replacement.clone());
        assert_eq!(ledger.snapshot()[0], replacement);
    }

    #[rstest]
    fn remove_from_base(mut ledger: Ledger, base: Vec<Transaction>) {
        assert!(ledger.remove(1));
        assert_eq!(ledger.snapshot(), &base[1..]);

        assert!(!ledger.remove(1));
        assert_eq!(ledger.snapshot(), &base[1..]);
    }

    #[rstest]
    fn missing_id_is_noop(mut ledger: Ledger, base: Vec<Transaction>) {
        let stray = Transaction::new(7, date(7), 1.0, TransactionType::Income, "Puma");

        assert!(!ledger.update(stray));
        assert_eq!(ledger.snapshot(), base.as_slice());

        assert!(!ledger.remove(7));
        assert_eq!(ledger.snapshot(), base.as_slice());
    }

    #[rstest]
    fn ids_never_reused_after_delete(mut ledger: Ledger, puma: Candidate) {
        ledger.remove(1);
        let added = ledger.add(puma).unwrap().id;

        assert_eq!(added, 3);
        let ids: HashSet<_> = ledger.snapshot().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), ledger.len());
    }

    #[rstest]
    fn ids_unique_over_many_adds(puma: Candidate) {
        let mut ledger = Ledger::new();
        let mut issued = HashSet::new();

        for round in 0..50 {
            let id = ledger.add(puma.clone()).unwrap().id;
            assert!(issued.insert(id));
            if round % 3 == 0 {
                ledger.remove(id);
            }
        }
        assert_eq!(issued.len(), 50);
    }

    #[rstest]
    fn add_increases_count_by_one(mut ledger: Ledger, puma: Candidate) {
        for expected in 3..6 {
            ledger.add(puma.clone()).unwrap();
            assert_eq!(ledger.len(), expected);
        }
    }

    #[test]
    fn empty_ledger_starts_at_one() {
        let mut ledger = Ledger::default();
        assert!(ledger.is_empty());
        let id = ledger.add(Candidate::new(date(1), 1.0, TransactionType::Income, "Nike")).unwrap().id;
        assert_eq!(id, 1);
    }

    #[rstest]
    fn insertion_order_kept(base: Vec<Transaction>) {
        let reversed: Vec<_> = base.iter().rev().cloned().collect();
        let mut ledger = Ledger::from_transactions(reversed.clone()).unwrap();
        assert_eq!(ledger.snapshot(), reversed.as_slice());

        let id = ledger.add(Candidate::new(date(5), 5.0, TransactionType::Income, "Nike")).unwrap().id;
        assert_eq!(id, 3);
        assert_eq!(ledger.snapshot().last().unwrap().id, 3);
    }

    #[rstest]
    fn duplicate_seed_rejected(base: Vec<Transaction>) {
        let mut seed = base.clone();
        seed.push(base[0].clone());

        let res = Ledger::from_transactions(seed);
        assert!(matches!(res, Err(LedgerError::DuplicateId(1))));
    }

    #[test]
    fn seed_at_largest_id_rejected() {
        let seed = vec![Transaction::new(u64::MAX, date(1), 1.0, TransactionType::Income, "Nike")];

        let res = Ledger::from_transactions(seed);
        assert!(matches!(res, Err(LedgerError::IdSpaceExhausted(u64::MAX))));
    }

    #[rstest]
    fn add_stops_when_ids_run_out(puma: Candidate) {
        let seed = vec![Transaction::new(u64::MAX - 2, date(1), 1.0, TransactionType::Income, "Nike")];
        let mut ledger = Ledger::from_transactions(seed).unwrap();

        assert_eq!(ledger.add(puma.clone()).unwrap().id, u64::MAX - 1);
        let before = ledger.snapshot().to_vec();

        let res = ledger.add(puma);
        assert_eq!(res.map(|t| t.id), Err(LedgerError::IdSpaceExhausted(u64::MAX)));
        assert_eq!(ledger.snapshot(), before.as_slice());
    }

    #[rstest]
    fn notifications_follow_mutations(base: Vec<Transaction>, puma: Candidate) {
        let seen = Rc::new(RefCell::new(vec![]));
        let sink = Rc::clone(&seen);
        let mut ledger = Ledger::from_transactions(base.clone()).unwrap()
            .with_notifier(move |n: Notification| sink.borrow_mut().push(n));

        let id = ledger.add(puma).unwrap().id;
        ledger.update(base[0].clone());
        ledger.remove(2);

        assert_eq!(*seen.borrow(), vec![
            Notification::Added(id),
            Notification::Updated(1),
            Notification::Deleted(2)
        ]);
    }

    #[rstest]
    fn state_same_with_or_without_sink(base: Vec<Transaction>, puma: Candidate) {
        let mut silent = Ledger::from_transactions(base.clone()).unwrap();
        let mut noisy = Ledger::from_transactions(base).unwrap().with_notifier(|_: Notification| ());

        for ledger in [&mut silent, &mut noisy] {
            ledger.add(puma.clone()).unwrap();
            ledger.remove(1);
            ledger.update(Transaction::new(3, date(4), 4.0, TransactionType::Income, "Nike"));
        }
        assert_eq!(silent.snapshot(), noisy.snapshot());
    }
}
