//! Goal CLI commands
//!
//! Implements CLI commands for savings goals.

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::goal::{format_goal_details, format_goal_list};
use crate::error::{MoneyFlowError, MoneyFlowResult};
use crate::models::{Goal, GoalProgress};
use crate::services::{CreateGoalInput, GoalService, GoalUpdate};
use crate::storage::Storage;

use super::parse_money;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// List goals with progress
    List,

    /// Show goal details
    Show {
        /// Goal name or ID
        goal: String,
    },

    /// Add a new goal
    Add {
        /// Goal name
        name: String,
        /// Target amount
        target: String,
        /// Amount already saved
        #[arg(long)]
        current: Option<String>,
        /// Deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: Option<String>,
        /// Hex color for the progress bar
        #[arg(short, long)]
        color: Option<String>,
    },

    /// Update a goal; omitted options are left unchanged
    Update {
        /// Goal name or ID
        goal: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New target amount
        #[arg(long)]
        target: Option<String>,
        /// New saved amount
        #[arg(long)]
        current: Option<String>,
        /// New deadline (YYYY-MM-DD), or "" to clear it
        #[arg(short, long)]
        deadline: Option<String>,
        /// New color
        #[arg(short, long)]
        color: Option<String>,
    },

    /// Delete a goal
    Delete {
        /// Goal name or ID
        goal: String,
    },
}

/// Handle a goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> MoneyFlowResult<()> {
    let service = GoalService::new(storage);
    let currency = settings.currency_symbol.as_str();
    let find = |goal: &str| -> MoneyFlowResult<Goal> {
        service
            .find(goal)?
            .ok_or_else(|| MoneyFlowError::goal_not_found(goal))
    };

    match cmd {
        GoalCommands::List => {
            let goals = service.list_with_progress()?;
            print!(
                "{}",
                format_goal_list(&goals, currency, Local::now().date_naive())
            );
        }

        GoalCommands::Show { goal } => {
            let goal = find(&goal)?;
            print!("{}", format_goal_details(&GoalProgress::from(goal), currency));
        }

        GoalCommands::Add {
            name,
            target,
            current,
            deadline,
            color,
        } => {
            let goal = service.create(CreateGoalInput {
                name: Some(name),
                target_amount: Some(parse_money(&target)?),
                current_amount: current.as_deref().map(parse_money).transpose()?,
                deadline,
                color,
            })?;

            println!("Created goal: {} ({})", goal.name, goal.id);
            print!("{}", format_goal_details(&GoalProgress::from(goal), currency));
        }

        GoalCommands::Update {
            goal,
            name,
            target,
            current,
            deadline,
            color,
        } => {
            let existing = find(&goal)?;

            let update = GoalUpdate {
                name,
                target_amount: target.as_deref().map(parse_money).transpose()?,
                current_amount: current.as_deref().map(parse_money).transpose()?,
                deadline,
                color,
            };

            if update.is_empty() {
                println!("No changes specified.");
                return Ok(());
            }

            let updated = service.update(existing.id, update)?;
            println!("Updated goal: {}", updated.name);
            print!("{}", format_goal_details(&GoalProgress::from(updated), currency));
        }

        GoalCommands::Delete { goal } => {
            let existing = find(&goal)?;
            service.delete(existing.id)?;
            println!("Deleted goal: {}", existing.name);
        }
    }

    Ok(())
}
