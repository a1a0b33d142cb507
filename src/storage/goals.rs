//! Goal repository

use crate::error::MoneyFlowError;
use crate::models::{Goal, GoalId};

use super::Storage;

/// Repository view over stored goals
pub struct GoalRepository<'a> {
    storage: &'a Storage,
}

impl<'a> GoalRepository<'a> {
    pub(super) fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Get a goal by ID
    pub fn get(&self, id: GoalId) -> Result<Option<Goal>, MoneyFlowError> {
        self.storage
            .read(|db| db.goals.iter().find(|g| g.id == id).cloned())
    }

    /// Get all goals, most recently created first
    pub fn get_all(&self) -> Result<Vec<Goal>, MoneyFlowError> {
        let mut goals = self.storage.read(|db| db.goals.clone())?;
        goals.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(goals)
    }

    /// Store a new goal and return it with its assigned id
    pub fn insert(&self, mut goal: Goal) -> Result<Goal, MoneyFlowError> {
        self.storage.write(|db| {
            goal.id = db.next_goal_id();
            db.goals.push(goal.clone());
            Ok(goal)
        })
    }

    /// Replace a stored goal, returning false if no goal has its id
    pub fn update(&self, goal: Goal) -> Result<bool, MoneyFlowError> {
        self.storage.write(|db| match db.goals.iter_mut().find(|g| g.id == goal.id) {
            Some(existing) => {
                *existing = goal;
                Ok(true)
            }
            None => Ok(false),
        })
    }

    /// Delete a goal, returning whether it existed
    pub fn delete(&self, id: GoalId) -> Result<bool, MoneyFlowError> {
        if self.get(id)?.is_none() {
            return Ok(false);
        }

        self.storage.write(|db| {
            db.goals.retain(|g| g.id != id);
            Ok(true)
        })
    }
}
