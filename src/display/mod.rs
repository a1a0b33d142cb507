//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including registers, grouped lists, and progress bars.

pub mod category;
pub mod goal;
pub mod transaction;

pub use category::{format_category_details, format_category_list};
pub use goal::{format_goal_details, format_goal_list, format_goal_row, progress_bar};
pub use transaction::{
    format_transaction_details, format_transaction_register, format_transaction_row,
};
