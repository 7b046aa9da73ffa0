mod core;
pub mod form;
pub mod display;
pub mod session;
pub mod config;

pub use crate::core::{Ledger, Transaction, Candidate, TransactionType, Notification, Notifier};
pub use crate::core::{ledger, transaction, notification, error};
pub use crate::session::Session;
pub use crate::config::AppConfig;
