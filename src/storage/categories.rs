//! Category repository
//!
//! Categories are looked up by name from transactions, so name lookups
//! are case-insensitive and names are kept unique.

use crate::error::MoneyFlowError;
use crate::models::{Category, CategoryId, TransactionType};

use super::Storage;

/// Repository view over stored categories
pub struct CategoryRepository<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryRepository<'a> {
    pub(super) fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> Result<Option<Category>, MoneyFlowError> {
        self.storage
            .read(|db| db.categories.iter().find(|c| c.id == id).cloned())
    }

    /// Get a category by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Category>, MoneyFlowError> {
        self.storage
            .read(|db| db.categories.iter().find(|c| c.matches_name(name)).cloned())
    }

    /// Get all categories in id order
    pub fn get_all(&self) -> Result<Vec<Category>, MoneyFlowError> {
        let mut categories = self.storage.read(|db| db.categories.clone())?;
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    /// Get categories of one type in id order
    pub fn get_by_type(&self, kind: TransactionType) -> Result<Vec<Category>, MoneyFlowError> {
        let mut categories = self.get_all()?;
        categories.retain(|c| c.kind == kind);
        Ok(categories)
    }

    /// Store a new category and return it with its assigned id
    ///
    /// Fails with `Duplicate` if another category already has the name.
    pub fn insert(&self, mut category: Category) -> Result<Category, MoneyFlowError> {
        self.storage.write(|db| {
            if db.categories.iter().any(|c| c.matches_name(&category.name)) {
                return Err(MoneyFlowError::Duplicate {
                    entity_type: "Category",
                    identifier: category.name.clone(),
                });
            }

            category.id = db.next_category_id();
            db.categories.push(category.clone());
            Ok(category)
        })
    }

    /// Delete a category, returning it if it existed
    ///
    /// Transactions that reference the category by name are left alone.
    pub fn delete(&self, id: CategoryId) -> Result<Option<Category>, MoneyFlowError> {
        let Some(existing) = self.get(id)? else {
            return Ok(None);
        };

        self.storage.write(|db| {
            db.categories.retain(|c| c.id != id);
            Ok(Some(existing))
        })
    }
}
