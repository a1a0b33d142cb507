//! Savings goal model
//!
//! A goal has a target amount and a current amount that the user updates
//! directly. Progress is derived, never stored.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::FALLBACK_COLOR;
use super::ids::GoalId;
use super::money::Money;

/// A savings target with progress tracking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier, assigned by the store
    pub id: GoalId,

    /// Goal name
    pub name: String,

    /// Amount to reach, always positive
    pub target_amount: Money,

    /// Amount saved so far, never negative
    #[serde(default)]
    pub current_amount: Money,

    /// Optional date the goal should be reached by
    #[serde(default)]
    pub deadline: Option<NaiveDate>,

    /// Hex color for progress bars
    #[serde(default = "default_color")]
    pub color: String,

    /// When the goal was created
    pub created_at: DateTime<Utc>,
}

fn default_color() -> String {
    FALLBACK_COLOR.to_string()
}

impl Goal {
    /// Create a new, not yet stored goal
    pub fn new(name: impl Into<String>, target_amount: Money) -> Self {
        Self {
            id: GoalId::new(0),
            name: name.into(),
            target_amount,
            current_amount: Money::zero(),
            deadline: None,
            color: default_color(),
            created_at: Utc::now(),
        }
    }

    /// Progress toward the target as a percentage, clamped to [0, 100]
    pub fn progress(&self) -> f64 {
        if !self.target_amount.is_positive() {
            return 0.0;
        }
        let percent =
            self.current_amount.cents() as f64 * 100.0 / self.target_amount.cents() as f64;
        percent.clamp(0.0, 100.0)
    }

    /// Amount still needed to reach the target (zero once reached)
    pub fn remaining(&self) -> Money {
        let remaining = self.target_amount - self.current_amount;
        if remaining.is_negative() {
            Money::zero()
        } else {
            remaining
        }
    }

    /// Check if the target has been reached
    pub fn is_complete(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Days left until the deadline, negative once it has passed
    pub fn days_until_deadline(&self, today: NaiveDate) -> Option<i64> {
        self.deadline.map(|deadline| (deadline - today).num_days())
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }

        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target_amount));
        }

        if self.current_amount.is_negative() {
            return Err(GoalValidationError::NegativeCurrent(self.current_amount));
        }

        if self.target_amount > Money::MAX_AMOUNT {
            return Err(GoalValidationError::AmountTooLarge(self.target_amount));
        }

        if self.current_amount > Money::MAX_AMOUNT {
            return Err(GoalValidationError::AmountTooLarge(self.current_amount));
        }

        Ok(())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} of {})",
            self.name, self.current_amount, self.target_amount
        )
    }
}

/// A goal together with its derived progress, as shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    #[serde(flatten)]
    pub goal: Goal,

    /// Percentage complete, clamped to [0, 100]
    pub progress: f64,

    /// Amount still needed
    pub remaining: Money,
}

impl From<Goal> for GoalProgress {
    fn from(goal: Goal) -> Self {
        Self {
            progress: goal.progress(),
            remaining: goal.remaining(),
            goal,
        }
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget(Money),
    NegativeCurrent(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget(amount) => {
                write!(f, "Goal target must be positive, got {}", amount)
            }
            Self::NegativeCurrent(amount) => {
                write!(f, "Goal current amount cannot be negative, got {}", amount)
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "Goal amount {} exceeds the maximum of {}",
                amount,
                Money::MAX_AMOUNT
            ),
        }
    }
}

impl std::error::Error for GoalValidationError {}
