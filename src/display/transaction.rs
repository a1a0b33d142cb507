//! Transaction display formatting
//!
//! Provides utilities for formatting transactions for terminal display
//! as a register of rows and as a detail view.

use crate::models::{Transaction, TransactionType};
use crate::services::TransactionWithCategory;

/// Format a single transaction for display (register row)
pub fn format_transaction_row(row: &TransactionWithCategory, currency: &str) -> String {
    let txn = &row.transaction;
    let sign = match txn.kind {
        TransactionType::Income => "+",
        TransactionType::Expense => "-",
    };
    let icon = row.icon.as_deref().unwrap_or(" ");

    format!(
        "{:<8} {} {} {:20} {:>14}  {}",
        txn.id.to_string(),
        txn.date.format("%Y-%m-%d"),
        icon,
        truncate(&txn.category, 20),
        format!("{}{}", sign, txn.amount.format_with_symbol(currency)),
        txn.description
    )
    .trim_end()
    .to_string()
}

/// Format a list of transactions as a register
pub fn format_transaction_register(rows: &[TransactionWithCategory], currency: &str) -> String {
    if rows.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8} {:10} {:22} {:>14}  {}\n",
        "ID", "Date", "Category", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for row in rows {
        output.push_str(&format_transaction_row(row, currency));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(currency)
    ));
    output.push_str(&format!("Category:    {}\n", txn.category));

    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    output
}

/// Pad or shorten to exactly `max_len` characters
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
