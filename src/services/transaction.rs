//! Transaction service
//!
//! Provides business logic for transaction management: validating new
//! records, filtered listings joined with category metadata, and deletion.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{MoneyFlowError, MoneyFlowResult};
use crate::models::category::same_name;
use crate::models::{Category, Money, Month, Transaction, TransactionId, TransactionType};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Filter by type
    pub kind: Option<TransactionType>,
    /// Filter by calendar month
    pub month: Option<Month>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by type
    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Filter by month
    pub fn month(mut self, month: Month) -> Self {
        self.month = Some(month);
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |kind| txn.kind == kind)
            && self.month.map_or(true, |month| month.contains(txn.date))
    }
}

/// Input for creating a new transaction
///
/// Every field is optional so that a request with gaps can be answered
/// with a validation error instead of a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTransactionInput {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub category: Option<String>,
    pub amount: Option<Money>,
    pub description: Option<String>,
    pub date: Option<String>,
}

/// A transaction joined with its category's display metadata
///
/// `icon` and `color` are absent when no category has the transaction's
/// category name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionWithCategory {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub icon: Option<String>,
    pub color: Option<String>,
}

/// Join transactions with category metadata by (case-insensitive) name
pub fn with_categories(
    transactions: Vec<Transaction>,
    categories: &[Category],
) -> Vec<TransactionWithCategory> {
    transactions
        .into_iter()
        .map(|transaction| {
            let category = categories
                .iter()
                .find(|c| c.matches_name(&transaction.category));
            TransactionWithCategory {
                icon: category.map(|c| c.icon.clone()),
                color: category.map(|c| c.color.clone()),
                transaction,
            }
        })
        .collect()
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> MoneyFlowResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        MoneyFlowError::Validation(format!("Invalid date '{}' (expected YYYY-MM-DD)", s.trim()))
    })
}

/// Treat absent and blank strings alike
fn required(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> MoneyFlowResult<Transaction> {
        let (Some(kind), Some(category), Some(amount), Some(date)) = (
            required(&input.kind),
            required(&input.category),
            input.amount,
            required(&input.date),
        ) else {
            return Err(MoneyFlowError::missing_fields());
        };

        let kind = kind
            .parse::<TransactionType>()
            .map_err(|e| MoneyFlowError::Validation(e.to_string()))?;
        let date = parse_date(date)?;

        let txn = Transaction::new(kind, category, amount, date)
            .with_description(input.description.unwrap_or_default().trim());

        txn.validate()
            .map_err(|e| MoneyFlowError::Validation(e.to_string()))?;

        let txn = self.storage.transactions().insert(txn)?;

        tracing::info!(
            id = %txn.id,
            kind = %txn.kind,
            category = %txn.category,
            amount = %txn.amount,
            "Transaction added"
        );

        Ok(txn)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> MoneyFlowResult<Option<Transaction>> {
        self.storage.transactions().get(id)
    }

    /// List transactions with filters, newest first
    pub fn list(&self, filter: TransactionFilter) -> MoneyFlowResult<Vec<TransactionWithCategory>> {
        let mut transactions = self.storage.transactions().query(|t| filter.matches(t))?;

        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        let categories = self.storage.categories().get_all()?;
        Ok(with_categories(transactions, &categories))
    }

    /// Delete a transaction
    pub fn delete(&self, id: TransactionId) -> MoneyFlowResult<()> {
        if !self.storage.transactions().delete(id)? {
            return Err(MoneyFlowError::transaction_not_found(id.to_string()));
        }

        tracing::info!(%id, "Transaction deleted");
        Ok(())
    }

    /// Count transactions that reference a category name
    pub fn count_for_category(&self, name: &str) -> MoneyFlowResult<usize> {
        Ok(self
            .storage
            .transactions()
            .query(|t| same_name(&t.category, name))?
            .len())
    }
}
