use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Serialize, Deserialize};

use crate::core::error::ParseTypeError;

pub type Amount = f64;
pub type TransactionId = u64;

/// Categories offered by the form when nothing else is configured.
/// The store accepts any category string.
pub const SUGGESTED_CATEGORIES: [&str; 4] = ["Nike", "Adidas", "Puma", "Reebok"];

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum TransactionType {
    #[default]
    Income,
    Expense
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let disp = match self {
            Self::Income => "Income",
            Self::Expense => "Expense"
        };
        write!(f, "{}", disp)
    }
}

impl FromStr for TransactionType {
    type Err = ParseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(ParseTypeError(s.to_owned()))
        }
    }
}

/// Transaction fields as entered by a user, before the ledger
/// gives them an identity.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Candidate {
    pub date: NaiveDate,
    pub amount: Amount,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String
}

impl Candidate {
    pub fn new(date: NaiveDate, amount: Amount, kind: TransactionType, category: &str) -> Candidate {
        Candidate { date, amount, kind, category: category.to_owned() }
    }

    pub fn with_id(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            date: self.date,
            amount: self.amount,
            kind: self.kind,
            category: self.category
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub date: NaiveDate,
    pub amount: Amount,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String
}

impl Transaction {
    pub fn new(id: TransactionId, date: NaiveDate, amount: Amount, kind: TransactionType, category: &str) -> Transaction {
        Candidate::new(date, amount, kind, category).with_id(id)
    }

    /// Drops the identity, leaving the editable fields.
    pub fn to_candidate(&self) -> Candidate {
        Candidate {
            date: self.date,
            amount: self.amount,
            kind: self.kind,
            category: self.category.clone()
        }
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} {} {} {}", self.id, self.date, self.amount, self.kind, self.category)
    }
}
