//! On-disk database layout
//!
//! The whole tracker lives in one JSON document. Every mutation rewrites
//! the document wholesale; there is no journal.

use serde::{Deserialize, Serialize};

use crate::models::{Category, CategoryId, Goal, GoalId, Transaction, TransactionId};

/// Current schema version written to new databases
pub const SCHEMA_VERSION: u32 = 1;

/// Highest id handed out so far, per entity kind
///
/// Ids are never reused, even after the newest row is deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdCounters {
    #[serde(default)]
    pub transactions: u64,
    #[serde(default)]
    pub categories: u64,
    #[serde(default)]
    pub goals: u64,
}

/// Serializable database snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub last_ids: IdCounters,

    #[serde(default)]
    pub transactions: Vec<Transaction>,

    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub goals: Vec<Goal>,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl Default for Database {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            last_ids: IdCounters::default(),
            transactions: Vec::new(),
            categories: Vec::new(),
            goals: Vec::new(),
        }
    }
}

impl Database {
    /// Allocate the next transaction id
    pub fn next_transaction_id(&mut self) -> TransactionId {
        let max = self.transactions.iter().map(|t| t.id.value()).max().unwrap_or(0);
        self.last_ids.transactions = self.last_ids.transactions.max(max) + 1;
        TransactionId::new(self.last_ids.transactions)
    }

    /// Allocate the next category id
    pub fn next_category_id(&mut self) -> CategoryId {
        let max = self.categories.iter().map(|c| c.id.value()).max().unwrap_or(0);
        self.last_ids.categories = self.last_ids.categories.max(max) + 1;
        CategoryId::new(self.last_ids.categories)
    }

    /// Allocate the next goal id
    pub fn next_goal_id(&mut self) -> GoalId {
        let max = self.goals.iter().map(|g| g.id.value()).max().unwrap_or(0);
        self.last_ids.goals = self.last_ids.goals.max(max) + 1;
        GoalId::new(self.last_ids.goals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};
    use chrono::NaiveDate;

    #[test]
    fn test_ids_are_sequential() {
        let mut db = Database::default();
        assert_eq!(db.next_transaction_id(), TransactionId::new(1));
        assert_eq!(db.next_transaction_id(), TransactionId::new(2));
        assert_eq!(db.next_goal_id(), GoalId::new(1));
        assert_eq!(db.next_category_id(), CategoryId::new(1));
    }

    #[test]
    fn test_ids_skip_past_existing_rows() {
        let mut db = Database::default();
        let mut txn = Transaction::new(
            TransactionType::Income,
            "Salary",
            Money::from_units(10),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        txn.id = TransactionId::new(41);
        db.transactions.push(txn);

        assert_eq!(db.next_transaction_id(), TransactionId::new(42));
    }

    #[test]
    fn test_empty_document_loads_with_defaults() {
        let db: Database = serde_json::from_str("{}").unwrap();
        assert_eq!(db, Database::default());
    }
}
