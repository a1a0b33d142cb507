//! Reading and writing the database file
//!
//! The whole database is one JSON document. Saving serializes it in memory
//! first, writes a sibling temp file, syncs it and renames it over the
//! database, so a crash leaves either the old file or the new one.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::MoneyFlowError;

use super::database::Database;

fn storage_error(action: &str, path: &Path, e: impl std::fmt::Display) -> MoneyFlowError {
    MoneyFlowError::Storage(format!("Failed to {} {}: {}", action, path.display(), e))
}

/// Temp file used while saving `path`
///
/// Hidden, next to the database so the rename stays on one filesystem, and
/// tagged with the process id so two processes never share one.
fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "money_flow.json".to_string());
    path.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}

/// Load the database, or an empty one if the file does not exist yet
pub fn load_database(path: &Path) -> Result<Database, MoneyFlowError> {
    if !path.exists() {
        return Ok(Database::default());
    }

    let contents = fs::read_to_string(path).map_err(|e| storage_error("read", path, e))?;
    serde_json::from_str(&contents).map_err(|e| {
        MoneyFlowError::Storage(format!("Database file {} is corrupt: {}", path.display(), e))
    })
}

/// Replace the database file with `db`
pub fn save_database(path: &Path, db: &Database) -> Result<(), MoneyFlowError> {
    let bytes = serde_json::to_vec_pretty(db)
        .map_err(|e| MoneyFlowError::Storage(format!("Failed to serialize database: {}", e)))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_error("create directory", parent, e))?;
    }

    let temp_path = temp_path_for(path);
    let written = File::create(&temp_path)
        .and_then(|mut file| {
            file.write_all(&bytes)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&temp_path, path));

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(storage_error("save", path, e));
    }

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Saved database");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Goal, Money};
    use tempfile::TempDir;

    fn sample_database() -> Database {
        let mut db = Database::default();
        let mut goal = Goal::new("Bike", Money::from_units(500));
        goal.id = db.next_goal_id();
        db.goals.push(goal);
        db
    }

    #[test]
    fn test_missing_file_loads_empty_database() {
        let temp_dir = TempDir::new().unwrap();
        let db = load_database(&temp_dir.path().join("money_flow.json")).unwrap();
        assert_eq!(db, Database::default());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("money_flow.json");

        save_database(&path, &sample_database()).unwrap();
        assert_eq!(load_database(&path).unwrap(), sample_database());

        save_database(&path, &Database::default()).unwrap();
        assert_eq!(load_database(&path).unwrap(), Database::default());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("money_flow.json");

        save_database(&path, &sample_database()).unwrap();

        let entries: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("money_flow.json")]);
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_save_creates_data_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("money_flow.json");

        save_database(&path, &Database::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_is_a_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("money_flow.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_database(&path).unwrap_err();
        assert!(matches!(err, MoneyFlowError::Storage(_)));
        assert!(err.to_string().contains("is corrupt"));
    }

    #[test]
    fn test_failed_save_keeps_previous_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("money_flow.json");
        save_database(&path, &sample_database()).unwrap();

        // A directory squatting on the temp path makes the write fail
        fs::create_dir(temp_path_for(&path)).unwrap();
        assert!(save_database(&path, &Database::default()).is_err());

        assert_eq!(load_database(&path).unwrap(), sample_database());
    }
}
