use std::{fs, path::Path};

use anyhow::{self, Context};
use chrono::NaiveDate;
use serde::{Serialize, Deserialize};

use crate::core::{Ledger, Notification, Transaction, TransactionType, SUGGESTED_CATEGORIES};
use crate::session::Session;

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Categories offered by the form, the first being the default.
    pub categories: Vec<String>,
    /// Whether status messages are shown after each change.
    pub notifications: bool,
    /// Transactions present when the editor starts.
    pub seed: Vec<Transaction>
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            categories: SUGGESTED_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            notifications: true,
            seed: placeholder_transactions()
        }
    }
}

fn placeholder_transactions() -> Vec<Transaction> {
    let date = |day| NaiveDate::from_ymd_opt(2023, 10, day).unwrap_or_default();
    vec![
        Transaction::new(1, date(1), 200.0, TransactionType::Income, "Nike"),
        Transaction::new(2, date(2), 150.0, TransactionType::Expense, "Adidas")
    ]
}

impl AppConfig {
    pub fn read(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file_content = fs::read_to_string(filepath)
            .with_context(|| "failed to read config file")?;
        let config = toml::from_str(&file_content)
            .with_context(|| "failed to parse config file")?;
        return Ok(config);
    }

    /// Seeds a ledger and wraps it in a session. `notifier` receives
    /// status messages unless they are switched off.
    pub fn into_session(self, notifier: Option<Box<dyn Fn(Notification)>>) -> anyhow::Result<Session> {
        let mut ledger = Ledger::from_transactions(self.seed)
            .with_context(|| "invalid seed transactions")?;
        if let (true, Some(notifier)) = (self.notifications, notifier) {
            ledger = ledger.with_notifier(notifier);
        }
        return Ok(Session::with_categories(ledger, self.categories));
    }
}
