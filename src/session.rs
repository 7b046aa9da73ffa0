use log::{debug, info};

use crate::core::{Ledger, LedgerResult, Transaction, TransactionId, SUGGESTED_CATEGORIES};
use crate::display::Intent;
use crate::form::{Submission, TransactionForm};

/// What happened when a display intent was handled.
#[derive(Clone, PartialEq, Debug)]
pub enum Opened {
    /// A form to fill in and submit back through [`Session::submit`].
    Form(TransactionForm),
    /// The intent was applied straight to the ledger.
    Deleted { removed: bool },
    /// Edit was requested for a row that no longer exists.
    Nothing
}

/// One page worth of state: the ledger, the categories the form
/// suggests, and the record whose edit dialog is open, if any.
pub struct Session {
    ledger: Ledger,
    categories: Vec<String>,
    editing: Option<Transaction>
}

impl Session {
    pub fn new(ledger: Ledger) -> Session {
        let categories = SUGGESTED_CATEGORIES.iter().map(|c| c.to_string()).collect();
        Self::with_categories(ledger, categories)
    }

    pub fn with_categories(ledger: Ledger, categories: Vec<String>) -> Session {
        Session { ledger, categories, editing: None }
    }

    pub fn snapshot(&self) -> &[Transaction] {
        self.ledger.snapshot()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn editing(&self) -> Option<&Transaction> {
        self.editing.as_ref()
    }

    pub fn open(&mut self, intent: Intent) -> Opened {
        match intent {
            Intent::Add => {
                let form = match self.categories.first() {
                    Some(category) => TransactionForm::with_default_category(category),
                    None => TransactionForm::new()
                };
                Opened::Form(form)
            },
            Intent::Edit(id) => self.begin_edit(id),
            Intent::Delete(id) => Opened::Deleted { removed: self.delete(id) }
        }
    }

    fn begin_edit(&mut self, id: TransactionId) -> Opened {
        match self.ledger.get(id) {
            Some(transaction) => {
                let form = TransactionForm::editing(transaction);
                self.editing = Some(transaction.clone());
                debug!("editing transaction {}", id);
                Opened::Form(form)
            },
            None => {
                info!("transaction {} is gone, nothing to edit", id);
                Opened::Nothing
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Routes a submitted form: drafts without an id are added,
    /// drafts with one replace the matching record.
    pub fn submit(&mut self, submission: Submission) -> LedgerResult<TransactionId> {
        match submission {
            Submission::Add(candidate) => Ok(self.ledger.add(candidate)?.id),
            Submission::Update(transaction) => {
                let id = transaction.id;
                self.ledger.update(transaction);
                self.editing = None;
                Ok(id)
            }
        }
    }

    pub fn delete(&mut self, id: TransactionId) -> bool {
        if self.editing.as_ref().is_some_and(|t| t.id == id) {
            self.editing = None;
        }
        self.ledger.remove(id)
    }
}
