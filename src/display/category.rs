//! Category display formatting
//!
//! Formats categories for terminal output, grouped by transaction type.

use crate::models::{Category, TransactionType};

/// Format categories as a list grouped under Income and Expense headers
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'money-flow init' to create default categories."
            .to_string();
    }

    let mut output = String::new();

    for kind in TransactionType::all() {
        let in_kind: Vec<_> = categories.iter().filter(|c| c.kind == *kind).collect();
        if in_kind.is_empty() {
            continue;
        }

        if !output.is_empty() {
            output.push('\n');
        }

        let header = match kind {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        };
        output.push_str(&format!("{}\n", header));

        for (i, category) in in_kind.iter().enumerate() {
            let prefix = if i == in_kind.len() - 1 { "└── " } else { "├── " };
            output.push_str(&format!(
                "  {}{} {:<24} {:<8} {}\n",
                prefix,
                category.icon,
                category.name,
                category.id.to_string(),
                category.color
            ));
        }
    }

    output
}

/// Format category details
pub fn format_category_details(category: &Category) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category: {} {}\n", category.icon, category.name));
    output.push_str(&format!("  ID:    {}\n", category.id));
    output.push_str(&format!("  Type:  {}\n", category.kind));
    output.push_str(&format!("  Color: {}\n", category.color));

    output
}
