use crate::core::TransactionId;

/// Status events emitted by the ledger after each mutation.
/// They carry nothing a caller should act on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Notification {
    Added(TransactionId),
    Updated(TransactionId),
    Deleted(TransactionId)
}

impl Notification {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Added(_) => "Transaction added successfully",
            Self::Updated(_) => "Transaction updated successfully",
            Self::Deleted(_) => "Transaction deleted successfully"
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<F> Notifier for F
where
    F: Fn(Notification)
{
    fn notify(&self, notification: Notification) {
        self(notification)
    }
}
