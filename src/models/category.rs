//! Category model
//!
//! Categories carry display metadata (icon and color) for transactions.
//! Transactions point at a category by name, so a category can disappear
//! without touching the transactions that used it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::transaction::TransactionType;

/// Icon used when a transaction's category has no metadata
pub const FALLBACK_ICON: &str = "💰";

/// Color used when a category or goal has none of its own
pub const FALLBACK_COLOR: &str = "#6366f1";

/// Maximum length of a category name
pub const MAX_NAME_LEN: usize = 50;

/// Whether two category names refer to the same category
///
/// Surrounding whitespace is ignored and case is folded for all of
/// Unicode, so "Épicerie" and " épicerie" are the same name.
pub fn same_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// A labeled grouping of transactions with display metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier, assigned by the store
    pub id: CategoryId,

    /// Category name, unique (case-insensitive)
    pub name: String,

    /// Which kind of transaction this category is meant for
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Emoji or short glyph shown next to the name
    #[serde(default = "default_icon")]
    pub icon: String,

    /// Hex color for charts
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_icon() -> String {
    FALLBACK_ICON.to_string()
}

fn default_color() -> String {
    FALLBACK_COLOR.to_string()
}

impl Category {
    /// Create a new, not yet stored category with fallback metadata
    pub fn new(name: impl Into<String>, kind: TransactionType) -> Self {
        Self {
            id: CategoryId::new(0),
            name: name.into(),
            kind,
            icon: default_icon(),
            color: default_color(),
        }
    }

    /// Set icon and color
    pub fn with_style(mut self, icon: impl Into<String>, color: impl Into<String>) -> Self {
        self.icon = icon.into();
        self.color = color.into();
        self
    }

    /// Case-insensitive name comparison
    pub fn matches_name(&self, name: &str) -> bool {
        same_name(&self.name, name)
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(CategoryValidationError::NameTooLong(self.name.chars().count()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.name)
    }
}

/// The categories seeded into a fresh database
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultCategory {
    pub name: &'static str,
    pub kind: TransactionType,
    pub icon: &'static str,
    pub color: &'static str,
}

impl DefaultCategory {
    /// Get all default categories in seed order
    pub fn all() -> &'static [Self] {
        use TransactionType::{Expense, Income};

        const DEFAULTS: &[DefaultCategory] = &[
            DefaultCategory { name: "Salary", kind: Income, icon: "💼", color: "#10b981" },
            DefaultCategory { name: "Freelance", kind: Income, icon: "💻", color: "#6366f1" },
            DefaultCategory { name: "Investments", kind: Income, icon: "📈", color: "#f59e0b" },
            DefaultCategory { name: "Gifts", kind: Income, icon: "🎁", color: "#ec4899" },
            DefaultCategory { name: "Other Income", kind: Income, icon: "💰", color: "#8b5cf6" },
            DefaultCategory { name: "Food & Dining", kind: Expense, icon: "🍔", color: "#ef4444" },
            DefaultCategory { name: "Transportation", kind: Expense, icon: "🚗", color: "#f97316" },
            DefaultCategory { name: "Shopping", kind: Expense, icon: "🛒", color: "#a855f7" },
            DefaultCategory { name: "Bills & Utilities", kind: Expense, icon: "📄", color: "#64748b" },
            DefaultCategory { name: "Entertainment", kind: Expense, icon: "🎮", color: "#06b6d4" },
            DefaultCategory { name: "Health", kind: Expense, icon: "🏥", color: "#22c55e" },
            DefaultCategory { name: "Education", kind: Expense, icon: "📚", color: "#3b82f6" },
            DefaultCategory { name: "Other Expense", kind: Expense, icon: "📦", color: "#78716c" },
        ];

        DEFAULTS
    }

    /// Create a Category from this default
    pub fn to_category(&self) -> Category {
        Category::new(self.name, self.kind).with_style(self.icon, self.color)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
