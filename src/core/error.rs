use thiserror::Error;

use crate::core::TransactionId;

#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    /// Occurs when seeding a ledger with two transactions
    /// that share the same id.
    #[error("duplicate transaction id: {0}")]
    DuplicateId(TransactionId),
    /// Occurs when no id above the given one is left to hand out.
    #[error("no transaction ids left after {0}")]
    IdSpaceExhausted(TransactionId)
}

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Occurs when text names neither an income nor an expense.
#[derive(Debug, Error, PartialEq)]
#[error("unknown transaction type: {0}")]
pub struct ParseTypeError(pub String);
