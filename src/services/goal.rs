//! Goal service
//!
//! Provides business logic for savings goals: creation, partial updates
//! of progress and targets, and listings with derived progress.

use serde::Deserialize;

use crate::error::{MoneyFlowError, MoneyFlowResult};
use crate::models::{Goal, GoalId, GoalProgress, Money};
use crate::storage::Storage;

use super::transaction::parse_date;

/// Service for goal management
pub struct GoalService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new goal
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateGoalInput {
    pub name: Option<String>,
    pub target_amount: Option<Money>,
    pub current_amount: Option<Money>,
    pub deadline: Option<String>,
    pub color: Option<String>,
}

/// Partial update of a goal; absent fields keep their current values
///
/// An empty `deadline` clears the deadline.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoalUpdate {
    pub name: Option<String>,
    pub target_amount: Option<Money>,
    pub current_amount: Option<Money>,
    pub deadline: Option<String>,
    pub color: Option<String>,
}

impl GoalUpdate {
    /// Whether the update changes nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.target_amount.is_none()
            && self.current_amount.is_none()
            && self.deadline.is_none()
            && self.color.is_none()
    }
}

fn validate(goal: &Goal) -> MoneyFlowResult<()> {
    goal.validate()
        .map_err(|e| MoneyFlowError::Validation(e.to_string()))
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// List goals, most recently created first
    pub fn list(&self) -> MoneyFlowResult<Vec<Goal>> {
        self.storage.goals().get_all()
    }

    /// List goals with their derived progress
    pub fn list_with_progress(&self) -> MoneyFlowResult<Vec<GoalProgress>> {
        Ok(self.list()?.into_iter().map(GoalProgress::from).collect())
    }

    /// Get a goal by ID
    pub fn get(&self, id: GoalId) -> MoneyFlowResult<Option<Goal>> {
        self.storage.goals().get(id)
    }

    /// Find a goal by name (case-insensitive) or ID string
    pub fn find(&self, identifier: &str) -> MoneyFlowResult<Option<Goal>> {
        let identifier = identifier.trim();
        let goals = self.list()?;

        if let Some(goal) = goals.iter().find(|g| g.name.eq_ignore_ascii_case(identifier)) {
            return Ok(Some(goal.clone()));
        }

        Ok(identifier
            .parse::<GoalId>()
            .ok()
            .and_then(|id| goals.into_iter().find(|g| g.id == id)))
    }

    /// Create a new goal
    pub fn create(&self, input: CreateGoalInput) -> MoneyFlowResult<Goal> {
        let name = input
            .name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        let (Some(name), Some(target)) = (name, input.target_amount) else {
            return Err(MoneyFlowError::missing_fields());
        };

        let mut goal = Goal::new(name, target);
        goal.current_amount = input.current_amount.unwrap_or_default();

        if let Some(deadline) = input.deadline.as_deref().filter(|s| !s.trim().is_empty()) {
            goal.deadline = Some(parse_date(deadline)?);
        }

        if let Some(color) = input.color.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            goal.color = color.to_string();
        }

        validate(&goal)?;

        let goal = self.storage.goals().insert(goal)?;

        tracing::info!(id = %goal.id, name = %goal.name, target = %goal.target_amount, "Goal created");

        Ok(goal)
    }

    /// Apply a partial update to a goal
    pub fn update(&self, id: GoalId, update: GoalUpdate) -> MoneyFlowResult<Goal> {
        let mut goal = self
            .get(id)?
            .ok_or_else(|| MoneyFlowError::goal_not_found(id.to_string()))?;

        if let Some(name) = update.name {
            goal.name = name.trim().to_string();
        }

        if let Some(target) = update.target_amount {
            goal.target_amount = target;
        }

        if let Some(current) = update.current_amount {
            goal.current_amount = current;
        }

        if let Some(deadline) = update.deadline {
            goal.deadline = if deadline.trim().is_empty() {
                None
            } else {
                Some(parse_date(&deadline)?)
            };
        }

        if let Some(color) = update.color.map(|c| c.trim().to_string()) {
            if !color.is_empty() {
                goal.color = color;
            }
        }

        validate(&goal)?;

        if !self.storage.goals().update(goal.clone())? {
            return Err(MoneyFlowError::goal_not_found(id.to_string()));
        }

        tracing::info!(
            %id,
            current = %goal.current_amount,
            target = %goal.target_amount,
            "Goal updated"
        );

        Ok(goal)
    }

    /// Delete a goal
    pub fn delete(&self, id: GoalId) -> MoneyFlowResult<()> {
        if !self.storage.goals().delete(id)? {
            return Err(MoneyFlowError::goal_not_found(id.to_string()));
        }

        tracing::info!(%id, "Goal deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::MoneyFlowPaths;
    use crate::models::FALLBACK_COLOR;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoneyFlowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(&paths).unwrap();
        (temp_dir, storage)
    }

    fn input(name: &str, target: i64) -> CreateGoalInput {
        CreateGoalInput {
            name: Some(name.into()),
            target_amount: Some(Money::from_units(target)),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_goal_defaults() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let goal = service.create(input("Emergency fund", 1000)).unwrap();
        assert_eq!(goal.id, GoalId::new(1));
        assert_eq!(goal.current_amount, Money::zero());
        assert_eq!(goal.deadline, None);
        assert_eq!(goal.color, FALLBACK_COLOR);
    }

    #[test]
    fn test_create_with_all_fields() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let goal = service
            .create(CreateGoalInput {
                name: Some("Vacation".into()),
                target_amount: Some(Money::from_units(2000)),
                current_amount: Some(Money::from_units(500)),
                deadline: Some("2025-06-30".into()),
                color: Some("#10b981".into()),
            })
            .unwrap();

        assert_eq!(goal.deadline, NaiveDate::from_ymd_opt(2025, 6, 30));
        assert_eq!(goal.color, "#10b981");
        assert_eq!(goal.progress(), 25.0);
    }

    #[test]
    fn test_create_validation() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let err = service.create(CreateGoalInput::default()).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Missing required fields");

        let err = service.create(input("Car", 0)).unwrap_err();
        assert!(err.to_string().contains("must be positive"));

        let mut negative = input("Car", 100);
        negative.current_amount = Some(Money::from_units(-1));
        assert!(service.create(negative).unwrap_err().is_validation());

        let mut bad_date = input("Car", 100);
        bad_date.deadline = Some("next year".into());
        assert!(service.create(bad_date).unwrap_err().is_validation());

        assert!(storage.goals().get_all().unwrap().is_empty());
    }

    #[test]
    fn test_partial_update_keeps_other_fields() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let mut request = input("Laptop", 1500);
        request.deadline = Some("2025-01-01".into());
        let goal = service.create(request).unwrap();

        let updated = service
            .update(
                goal.id,
                GoalUpdate {
                    current_amount: Some(Money::from_units(600)),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Laptop");
        assert_eq!(updated.target_amount, Money::from_units(1500));
        assert_eq!(updated.current_amount, Money::from_units(600));
        assert_eq!(updated.deadline, goal.deadline);
        assert_eq!(service.get(goal.id).unwrap().unwrap(), updated);
    }

    #[test]
    fn test_update_clears_deadline() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let mut request = input("Laptop", 1500);
        request.deadline = Some("2025-01-01".into());
        let goal = service.create(request).unwrap();

        let updated = service
            .update(
                goal.id,
                GoalUpdate {
                    deadline: Some(String::new()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.deadline, None);
    }

    #[test]
    fn test_update_validation_leaves_goal_unchanged() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let goal = service.create(input("Laptop", 1500)).unwrap();
        let err = service
            .update(
                goal.id,
                GoalUpdate {
                    target_amount: Some(Money::zero()),
                    ..Default::default()
                },
            )
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(service.get(goal.id).unwrap().unwrap(), goal);
    }

    #[test]
    fn test_update_and_delete_unknown() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let missing = GoalId::new(42);
        assert!(service
            .update(missing, GoalUpdate::default())
            .unwrap_err()
            .is_not_found());
        assert!(service.delete(missing).unwrap_err().is_not_found());
    }

    #[test]
    fn test_find_by_name_or_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let goal = service.create(input("Emergency Fund", 1000)).unwrap();
        assert_eq!(service.find("emergency fund").unwrap(), Some(goal.clone()));
        assert_eq!(service.find("goal-1").unwrap(), Some(goal.clone()));
        assert_eq!(service.find("1").unwrap(), Some(goal));
        assert!(service.find("goal-2").unwrap().is_none());
    }

    #[test]
    fn test_list_with_progress() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let mut overfunded = input("Done", 100);
        overfunded.current_amount = Some(Money::from_units(250));
        service.create(overfunded).unwrap();
        service.create(input("Fresh", 100)).unwrap();

        let goals = service.list_with_progress().unwrap();
        assert_eq!(goals.len(), 2);
        assert_eq!(goals[0].goal.name, "Fresh");
        assert_eq!(goals[0].progress, 0.0);
        assert_eq!(goals[1].progress, 100.0);
        assert_eq!(goals[1].remaining, Money::zero());
    }
}
