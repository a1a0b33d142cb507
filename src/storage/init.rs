//! Storage initialization
//!
//! Handles first-run setup and default data creation

use crate::config::paths::MoneyFlowPaths;
use crate::error::MoneyFlowError;
use crate::models::DefaultCategory;

use super::database::Database;
use super::file_io::save_database;

/// Initialize storage for a fresh installation
///
/// Creates the database file with the default categories. An existing
/// database is never touched.
pub fn initialize_storage(paths: &MoneyFlowPaths) -> Result<(), MoneyFlowError> {
    paths.ensure_directories()?;

    if needs_initialization(paths) {
        let db = seeded_database();
        save_database(&paths.database_file(), &db)?;
        tracing::info!(
            path = %paths.database_file().display(),
            categories = db.categories.len(),
            "Created database with default categories"
        );
    }

    Ok(())
}

/// A database containing only the default categories
pub fn seeded_database() -> Database {
    let mut db = Database::default();

    for default in DefaultCategory::all() {
        let mut category = default.to_category();
        category.id = db.next_category_id();
        db.categories.push(category);
    }

    db
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &MoneyFlowPaths) -> bool {
    !paths.database_file().exists()
}
