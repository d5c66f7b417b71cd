use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{PlannerError, Result};
use crate::models::UserConstraints;
use crate::state::persistence::{load_profiles, save_profiles};

/// Which way a user voted on a meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    Up,
    Down,
}

/// Stored constraints and meal votes for every known user.
#[derive(Debug, Default)]
pub struct ProfileStore {
    profiles: BTreeMap<String, UserConstraints>,
}

impl ProfileStore {
    pub fn new(profiles: BTreeMap<String, UserConstraints>) -> Self {
        Self { profiles }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(load_profiles(path)?))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save_profiles(path, &self.profiles)
    }

    pub fn get(&self, user_id: &str) -> Result<&UserConstraints> {
        self.profiles
            .get(user_id)
            .ok_or_else(|| PlannerError::UserNotFound(user_id.to_string()))
    }

    /// Insert or replace a user's constraints, keeping their existing votes.
    pub fn upsert(&mut self, user_id: &str, mut constraints: UserConstraints) {
        if let Some(existing) = self.profiles.get(user_id) {
            if constraints.downvoted_meal_ids.is_empty() {
                constraints.downvoted_meal_ids = existing.downvoted_meal_ids.clone();
            }
            if constraints.preferred_meal_ids.is_empty() {
                constraints.preferred_meal_ids = existing.preferred_meal_ids.clone();
            }
        }
        self.profiles.insert(user_id.to_string(), constraints);
    }

    /// Record a vote. A meal is never both preferred and down-voted.
    pub fn vote(&mut self, user_id: &str, meal_id: u32, vote: Vote) -> Result<()> {
        let profile = self
            .profiles
            .get_mut(user_id)
            .ok_or_else(|| PlannerError::UserNotFound(user_id.to_string()))?;

        let (add_to, remove_from) = match vote {
            Vote::Up => (
                &mut profile.preferred_meal_ids,
                &mut profile.downvoted_meal_ids,
            ),
            Vote::Down => (
                &mut profile.downvoted_meal_ids,
                &mut profile.preferred_meal_ids,
            ),
        };
        remove_from.retain(|&id| id != meal_id);
        if !add_to.contains(&meal_id) {
            add_to.push(meal_id);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
