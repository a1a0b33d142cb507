//! Service layer for Money Flow
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, derived values, and the dashboard aggregations.

pub mod aggregation;
pub mod category;
pub mod goal;
pub mod transaction;

pub use aggregation::{AggregationService, CategoryTotal, MonthlyTotals, TrendPoint};
pub use category::{CategoryService, CreateCategoryInput};
pub use goal::{CreateGoalInput, GoalService, GoalUpdate};
pub use transaction::{
    CreateTransactionInput, TransactionFilter, TransactionService, TransactionWithCategory,
};
