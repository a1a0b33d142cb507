//! Storage layer for Money Flow
//!
//! Holds the whole database in memory and persists it as a single JSON
//! file. Every mutation is applied to a copy of the snapshot, written to
//! disk atomically, and only then made visible, so a failed write leaves
//! both memory and disk as they were.

pub mod categories;
pub mod database;
pub mod file_io;
pub mod goals;
pub mod init;
pub mod transactions;

pub use categories::CategoryRepository;
pub use database::Database;
pub use file_io::{load_database, save_database};
pub use goals::GoalRepository;
pub use init::initialize_storage;
pub use transactions::TransactionRepository;

use std::path::PathBuf;
use std::sync::RwLock;

use crate::config::paths::MoneyFlowPaths;
use crate::error::MoneyFlowError;

/// Handle to the persisted database, passed explicitly to services
pub struct Storage {
    path: PathBuf,
    data: RwLock<Database>,
}

impl Storage {
    /// Create a storage handle for the database file under `paths`
    ///
    /// Nothing is read until [`Storage::load`] is called.
    pub fn new(paths: &MoneyFlowPaths) -> Result<Self, MoneyFlowError> {
        paths.ensure_directories()?;

        Ok(Self {
            path: paths.database_file(),
            data: RwLock::new(Database::default()),
        })
    }

    /// Initialize the database file if needed, then load it
    pub fn open(paths: &MoneyFlowPaths) -> Result<Self, MoneyFlowError> {
        initialize_storage(paths)?;
        let storage = Self::new(paths)?;
        storage.load()?;
        Ok(storage)
    }

    /// Path of the database file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the database from disk, replacing the in-memory snapshot
    pub fn load(&self) -> Result<(), MoneyFlowError> {
        let loaded = load_database(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| MoneyFlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        tracing::debug!(
            path = %self.path.display(),
            transactions = loaded.transactions.len(),
            categories = loaded.categories.len(),
            goals = loaded.goals.len(),
            "Loaded database"
        );

        *data = loaded;
        Ok(())
    }

    /// Run a read-only query against the current snapshot
    pub fn read<T>(&self, query: impl FnOnce(&Database) -> T) -> Result<T, MoneyFlowError> {
        let data = self
            .data
            .read()
            .map_err(|e| MoneyFlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(query(&data))
    }

    /// Apply a mutation and persist the result
    ///
    /// The mutation runs on a copy. If it fails, or the file cannot be
    /// written, the in-memory snapshot is left untouched.
    pub fn write<T>(
        &self,
        mutation: impl FnOnce(&mut Database) -> Result<T, MoneyFlowError>,
    ) -> Result<T, MoneyFlowError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| MoneyFlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let mut updated = data.clone();
        let result = mutation(&mut updated)?;

        save_database(&self.path, &updated)?;
        *data = updated;

        Ok(result)
    }

    /// Transaction queries and mutations
    pub fn transactions(&self) -> TransactionRepository<'_> {
        TransactionRepository::new(self)
    }

    /// Category queries and mutations
    pub fn categories(&self) -> CategoryRepository<'_> {
        CategoryRepository::new(self)
    }

    /// Goal queries and mutations
    pub fn goals(&self) -> GoalRepository<'_> {
        GoalRepository::new(self)
    }
}
