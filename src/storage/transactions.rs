//! Transaction repository
//!
//! Queries and mutations over the transactions in the database. Listings
//! come back newest first: date descending, then id descending.

use std::cmp::Ordering;

use crate::error::MoneyFlowError;
use crate::models::{Transaction, TransactionId};

use super::Storage;

/// Repository view over stored transactions
pub struct TransactionRepository<'a> {
    storage: &'a Storage,
}

/// Newest-first ordering used by every transaction listing
pub fn newest_first(a: &Transaction, b: &Transaction) -> Ordering {
    b.date.cmp(&a.date).then(b.id.cmp(&a.id))
}

impl<'a> TransactionRepository<'a> {
    pub(super) fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, MoneyFlowError> {
        self.storage
            .read(|db| db.transactions.iter().find(|t| t.id == id).cloned())
    }

    /// Get all transactions, newest first
    pub fn get_all(&self) -> Result<Vec<Transaction>, MoneyFlowError> {
        self.query(|_| true)
    }

    /// Get transactions matching a predicate, newest first
    pub fn query(
        &self,
        predicate: impl Fn(&Transaction) -> bool,
    ) -> Result<Vec<Transaction>, MoneyFlowError> {
        let mut transactions = self.storage.read(|db| {
            db.transactions
                .iter()
                .filter(|t| predicate(t))
                .cloned()
                .collect::<Vec<_>>()
        })?;
        transactions.sort_by(newest_first);
        Ok(transactions)
    }

    /// Store a new transaction and return it with its assigned id
    pub fn insert(&self, mut txn: Transaction) -> Result<Transaction, MoneyFlowError> {
        self.storage.write(|db| {
            txn.id = db.next_transaction_id();
            db.transactions.push(txn.clone());
            Ok(txn)
        })
    }

    /// Delete a transaction, returning whether it existed
    pub fn delete(&self, id: TransactionId) -> Result<bool, MoneyFlowError> {
        let exists = self.storage.read(|db| db.transactions.iter().any(|t| t.id == id))?;
        if !exists {
            return Ok(false);
        }

        self.storage.write(|db| {
            let before = db.transactions.len();
            db.transactions.retain(|t| t.id != id);
            Ok(db.transactions.len() != before)
        })
    }
}
