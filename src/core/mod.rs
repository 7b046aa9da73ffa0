pub mod error;
pub mod transaction;
pub mod notification;
pub mod ledger;

pub use error::{LedgerError, LedgerResult, ParseTypeError};
pub use transaction::{Amount, Candidate, Transaction, TransactionId, TransactionType, SUGGESTED_CATEGORIES};
pub use notification::{Notification, Notifier};
pub use ledger::Ledger;
