//! Category service
//!
//! Provides business logic for category management. Categories are
//! referenced from transactions by name, so deleting one leaves those
//! transactions in place with no display metadata.

use serde::Deserialize;

use crate::error::{MoneyFlowError, MoneyFlowResult};
use crate::models::{Category, CategoryId, TransactionType};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new category
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCategoryInput {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

/// Treat absent and blank strings alike
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// List categories, optionally of one type, in id order
    pub fn list(&self, kind: Option<TransactionType>) -> MoneyFlowResult<Vec<Category>> {
        match kind {
            Some(kind) => self.storage.categories().get_by_type(kind),
            None => self.storage.categories().get_all(),
        }
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> MoneyFlowResult<Option<Category>> {
        self.storage.categories().get(id)
    }

    /// Get a category by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> MoneyFlowResult<Option<Category>> {
        self.storage.categories().get_by_name(name)
    }

    /// Find a category by name or ID string
    pub fn find(&self, identifier: &str) -> MoneyFlowResult<Option<Category>> {
        // Try by name first
        if let Some(category) = self.get_by_name(identifier)? {
            return Ok(Some(category));
        }

        // Try parsing as ID
        if let Ok(id) = identifier.trim().parse::<CategoryId>() {
            return self.get(id);
        }

        Ok(None)
    }

    /// Create a new category
    pub fn create(&self, input: CreateCategoryInput) -> MoneyFlowResult<Category> {
        let (Some(name), Some(kind)) = (non_blank(input.name), non_blank(input.kind)) else {
            return Err(MoneyFlowError::missing_fields());
        };

        let kind = kind
            .parse::<TransactionType>()
            .map_err(|e| MoneyFlowError::Validation(e.to_string()))?;

        let mut category = Category::new(name, kind);
        if let Some(icon) = non_blank(input.icon) {
            category.icon = icon;
        }
        if let Some(color) = non_blank(input.color) {
            category.color = color;
        }

        category
            .validate()
            .map_err(|e| MoneyFlowError::Validation(e.to_string()))?;

        let category = self.storage.categories().insert(category)?;

        tracing::info!(id = %category.id, name = %category.name, kind = %category.kind, "Category created");

        Ok(category)
    }

    /// Delete a category
    ///
    /// Transactions filed under the category keep its name.
    pub fn delete(&self, id: CategoryId) -> MoneyFlowResult<Category> {
        let category = self
            .storage
            .categories()
            .delete(id)?
            .ok_or_else(|| MoneyFlowError::category_not_found(id.to_string()))?;

        tracing::info!(%id, name = %category.name, "Category deleted");

        Ok(category)
    }
}
