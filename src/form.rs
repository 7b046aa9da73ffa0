use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

use crate::core::{Amount, Candidate, ParseTypeError, Transaction, TransactionId, TransactionType,
    SUGGESTED_CATEGORIES};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    Date,
    Amount,
    Type,
    Category
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let disp = match self {
            Self::Date => "date",
            Self::Amount => "amount",
            Self::Type => "type",
            Self::Category => "category"
        };
        write!(f, "{}", disp)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    /// The date picker only yields calendar dates.
    #[error("not a date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
    /// The amount input only yields finite numbers.
    #[error("not a number: {0}")]
    InvalidAmount(String),
    #[error(transparent)]
    InvalidType(#[from] ParseTypeError),
    /// A field that was never filled in cannot become part of a transaction.
    #[error("missing {0}")]
    Missing(Field)
}

/// What a submitted form asks the ledger to do.
#[derive(Clone, PartialEq, Debug)]
pub enum Submission {
    Add(Candidate),
    Update(Transaction)
}

/// Draft of one transaction while it is being entered or edited.
/// Holds a copy; nothing here writes to the ledger.
#[derive(Clone, PartialEq, Debug)]
pub struct TransactionForm {
    id: Option<TransactionId>,
    date: Option<NaiveDate>,
    amount: Option<Amount>,
    kind: TransactionType,
    category: String
}

impl TransactionForm {
    pub fn new() -> TransactionForm {
        Self::with_default_category(SUGGESTED_CATEGORIES[0])
    }

    pub fn with_default_category(category: &str) -> TransactionForm {
        TransactionForm {
            id: None,
            date: None,
            amount: None,
            kind: TransactionType::default(),
            category: category.to_owned()
        }
    }

    pub fn editing(transaction: &Transaction) -> TransactionForm {
        TransactionForm {
            id: Some(transaction.id),
            date: Some(transaction.date),
            amount: Some(transaction.amount),
            kind: transaction.kind,
            category: transaction.category.clone()
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() { "Save Transaction" } else { "Add Transaction" }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn amount(&self) -> Option<Amount> {
        self.amount
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
    }

    pub fn set_amount(&mut self, amount: Amount) {
        self.amount = Some(amount);
    }

    pub fn set_type(&mut self, kind: TransactionType) {
        self.kind = kind;
    }

    pub fn set_category(&mut self, category: &str) {
        self.category = category.to_owned();
    }

    /// Takes raw text for one field, accepting only what the matching
    /// input widget could produce. On error the draft is left as it was.
    pub fn set_field(&mut self, field: Field, raw: &str) -> Result<(), FormError> {
        let raw = raw.trim();
        match field {
            Field::Date => {
                let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
                    .map_err(|_| FormError::InvalidDate(raw.to_owned()))?;
                self.set_date(date);
            },
            Field::Amount => {
                let amount = Amount::from_str(raw)
                    .ok()
                    .filter(|a| a.is_finite())
                    .ok_or_else(|| FormError::InvalidAmount(raw.to_owned()))?;
                self.set_amount(amount);
            },
            Field::Type => self.set_type(raw.parse::<TransactionType>()?),
            Field::Category => self.set_category(raw)
        }
        return Ok(());
    }

    pub fn to_submission(&self) -> Result<Submission, FormError> {
        let date = self.date.ok_or(FormError::Missing(Field::Date))?;
        let amount = self.amount.ok_or(FormError::Missing(Field::Amount))?;
        let candidate = Candidate::new(date, amount, self.kind, &self.category);

        let submission = match self.id {
            Some(id) => Submission::Update(candidate.with_id(id)),
            None => Submission::Add(candidate)
        };
        return Ok(submission);
    }

    /// Hands the finished draft to `on_submit` and returns what it returned.
    pub fn submit<F, R>(self, on_submit: F) -> Result<R, FormError>
    where
        F: FnOnce(Submission) -> R
    {
        let submission = self.to_submission()?;
        Ok(on_submit(submission))
    }
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self::new()
    }
}
