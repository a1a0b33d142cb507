//! Transaction CLI commands
//!
//! Implements CLI commands for recording, listing and deleting transactions.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::error::{MoneyFlowError, MoneyFlowResult};
use crate::models::{Month, TransactionId, TransactionType};
use crate::services::{CreateTransactionInput, TransactionFilter, TransactionService};
use crate::storage::Storage;

use super::parse_money;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Transaction type: income or expense
        kind: String,
        /// Amount (e.g., "50" or "49.99")
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Filter by type (income or expense)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Filter by month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID (e.g., "txn-3" or "3")
        id: String,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID (e.g., "txn-3" or "3")
        id: String,
    },
}

fn parse_transaction_id(id: &str) -> MoneyFlowResult<TransactionId> {
    id.parse()
        .map_err(|_| MoneyFlowError::Validation(format!("Invalid transaction ID: '{}'", id)))
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> MoneyFlowResult<()> {
    let service = TransactionService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            date,
            description,
        } => {
            let amount = parse_money(&amount)?;
            let date = date.unwrap_or_else(|| {
                chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
            });

            let txn = service.create(CreateTransactionInput {
                kind: Some(kind),
                category: Some(category),
                amount: Some(amount),
                description,
                date: Some(date),
            })?;

            println!("Added transaction: {}", txn.id);
            print!("{}", format_transaction_details(&txn, currency));
        }

        TransactionCommands::List { kind, month, limit } => {
            let mut filter =
                TransactionFilter::new().limit(limit.unwrap_or(settings.transaction_list_limit));

            if let Some(kind) = kind {
                let kind = kind
                    .parse::<TransactionType>()
                    .map_err(|e| MoneyFlowError::Validation(e.to_string()))?;
                filter = filter.kind(kind);
            }

            if let Some(month) = month {
                let month = month
                    .parse::<Month>()
                    .map_err(|e| MoneyFlowError::Validation(e.to_string()))?;
                filter = filter.month(month);
            }

            let rows = service.list(filter)?;
            print!("{}", format_transaction_register(&rows, currency));
        }

        TransactionCommands::Show { id } => {
            let id = parse_transaction_id(&id)?;
            let txn = service
                .get(id)?
                .ok_or_else(|| MoneyFlowError::transaction_not_found(id.to_string()))?;
            print!("{}", format_transaction_details(&txn, currency));
        }

        TransactionCommands::Delete { id } => {
            let id = parse_transaction_id(&id)?;
            service.delete(id)?;
            println!("Deleted transaction: {}", id);
        }
    }

    Ok(())
}
