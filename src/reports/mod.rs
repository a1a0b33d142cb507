//! Reports module for Money Flow
//!
//! Provides the dashboard report that combines monthly totals, trends,
//! the expense breakdown and goal progress.

pub mod dashboard;

pub use dashboard::DashboardReport;
