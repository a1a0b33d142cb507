//! Core data models for Money Flow
//!
//! This module contains the data structures of the tracker: transactions,
//! categories, savings goals, and the money/month value types they use.

pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod month;
pub mod transaction;

pub use category::{Category, DefaultCategory, FALLBACK_COLOR, FALLBACK_ICON};
pub use goal::{Goal, GoalProgress};
pub use ids::{CategoryId, GoalId, TransactionId};
pub use money::Money;
pub use month::{Month, MAX_TREND_MONTHS};
pub use transaction::{Transaction, TransactionType};
