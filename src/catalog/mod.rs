mod cache;
mod parser;

pub use cache::{clear_cache, load_cached};
pub use parser::{load_catalog, parse_catalog, split_line, REQUIRED_COLUMNS};

use std::collections::{BTreeSet, HashMap};

use crate::models::{Meal, MealTime};

/// Read-only collection of meals loaded from a catalog source.
#[derive(Debug, Clone, Default)]
pub struct MealCatalog {
    meals: Vec<Meal>,
    index: HashMap<u32, usize>,
}

impl MealCatalog {
    /// Build a catalog; later duplicates of an id are dropped.
    pub fn new(meals: Vec<Meal>) -> Self {
        let mut catalog = Self::default();
        for meal in meals {
            catalog.push(meal);
        }
        catalog
    }

    /// Append a meal, returning false if its id is already present.
    pub(crate) fn push(&mut self, meal: Meal) -> bool {
        if self.index.contains_key(&meal.id) {
            return false;
        }
        self.index.insert(meal.id, self.meals.len());
        self.meals.push(meal);
        true
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn get(&self, id: u32) -> Option<&Meal> {
        self.index.get(&id).map(|&i| &self.meals[i])
    }

    /// Meals eligible for a slot.
    pub fn for_slot(&self, slot: MealTime) -> Vec<&Meal> {
        self.meals.iter().filter(|m| m.is_eligible_for(slot)).collect()
    }

    /// Distinct lowercase diet tags present in the catalog.
    pub fn diets(&self) -> BTreeSet<String> {
        self.meals.iter().map(|m| m.diet.to_lowercase()).collect()
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
