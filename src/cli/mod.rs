//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod dashboard;
pub mod goal;
pub mod transaction;

pub use category::{handle_category_command, CategoryCommands};
pub use dashboard::{handle_dashboard_command, DashboardArgs};
pub use goal::{handle_goal_command, GoalCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::error::{MoneyFlowError, MoneyFlowResult};
use crate::models::Money;

/// Parse a money argument such as "50", "49.99" or "$1,200"
pub(crate) fn parse_money(input: &str) -> MoneyFlowResult<Money> {
    Money::parse(input).map_err(|e| {
        MoneyFlowError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '50' or '49.99'. Error: {}",
            input, e
        ))
    })
}
