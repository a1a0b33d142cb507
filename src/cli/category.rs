//! Category CLI commands
//!
//! Implements CLI commands for category management.

use clap::Subcommand;

use crate::display::category::{format_category_details, format_category_list};
use crate::error::{MoneyFlowError, MoneyFlowResult};
use crate::models::TransactionType;
use crate::services::{CategoryService, CreateCategoryInput, TransactionService};
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories
    List {
        /// Only show one type (income or expense)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },

    /// Add a new category
    Add {
        /// Category name
        name: String,
        /// Category type (income or expense)
        #[arg(short = 't', long = "type")]
        kind: String,
        /// Icon shown next to the name
        #[arg(short, long)]
        icon: Option<String>,
        /// Hex color (e.g., "#22c55e")
        #[arg(short, long)]
        color: Option<String>,
    },

    /// Delete a category (transactions keep its name)
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> MoneyFlowResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List { kind } => {
            let kind = kind
                .map(|k| {
                    k.parse::<TransactionType>()
                        .map_err(|e| MoneyFlowError::Validation(e.to_string()))
                })
                .transpose()?;

            let categories = service.list(kind)?;
            print!("{}", format_category_list(&categories));
        }

        CategoryCommands::Add {
            name,
            kind,
            icon,
            color,
        } => {
            let category = service.create(CreateCategoryInput {
                name: Some(name),
                kind: Some(kind),
                icon,
                color,
            })?;

            println!("Created category: {}", category.name);
            print!("{}", format_category_details(&category));
        }

        CategoryCommands::Delete { category } => {
            let cat = service
                .find(&category)?
                .ok_or_else(|| MoneyFlowError::category_not_found(&category))?;

            service.delete(cat.id)?;
            println!("Deleted category: {}", cat.name);

            let orphaned = TransactionService::new(storage).count_for_category(&cat.name)?;
            if orphaned > 0 {
                println!(
                    "Note: {} transaction(s) still reference '{}' and will show without an icon.",
                    orphaned, cat.name
                );
            }
        }
    }

    Ok(())
}
