use comfy_table::{Cell, Color, Table};

use crate::core::{Transaction, TransactionId, TransactionType};

/// Actions a user can take from the transaction list: the page-level
/// "add" button and the per-row edit and delete buttons.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Intent {
    Add,
    Edit(TransactionId),
    Delete(TransactionId)
}

fn type_label(kind: TransactionType) -> Cell {
    let color = match kind {
        TransactionType::Income => Color::Green,
        TransactionType::Expense => Color::Red
    };
    Cell::new(kind).fg(color)
}

/// Colors follow the same switch as the rest of the terminal output.
pub fn render_table(snapshot: &[Transaction]) -> String {
    render_table_styled(snapshot, colored::control::SHOULD_COLORIZE.should_colorize())
}

pub fn render_table_styled(snapshot: &[Transaction], styled: bool) -> String {
    let mut table = Table::new();
    if styled {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    table.set_header(vec!["Id", "Date", "Amount", "Type", "Category"]);

    for transaction in snapshot {
        table.add_row(vec![
            Cell::new(transaction.id),
            Cell::new(transaction.date),
            Cell::new(transaction.amount),
            type_label(transaction.kind),
            Cell::new(&transaction.category)
        ]);
    }
    table.to_string()
}

pub fn render_json(snapshot: &[Transaction]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshot)
}

pub fn render_categories(categories: &[String]) -> String {
    categories.iter()
        .enumerate()
        .map(|(i, c)| if i == 0 { format!("{} (default)", c) } else { c.clone() })
        .collect::<Vec<_>>()
        .join("\n")
}
