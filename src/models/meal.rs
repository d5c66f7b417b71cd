use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::names::parse_named;

/// Category of a meal. A catalog meal may belong to several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealTime {
    Breakfast,
    Lunch,
    Dinner,
    Dessert,
}

impl MealTime {
    /// The slots filled for every planned day, in selection order.
    pub const DAILY_SLOTS: [MealTime; 3] = [MealTime::Breakfast, MealTime::Lunch, MealTime::Dinner];

    const NAMES: [(&'static str, MealTime); 4] = [
        ("breakfast", MealTime::Breakfast),
        ("lunch", MealTime::Lunch),
        ("dinner", MealTime::Dinner),
        ("dessert", MealTime::Dessert),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealTime::Breakfast => "breakfast",
            MealTime::Lunch => "lunch",
            MealTime::Dinner => "dinner",
            MealTime::Dessert => "dessert",
        }
    }

    /// Parse a comma-separated category list such as `"breakfast, lunch"`.
    ///
    /// Unrecognized entries are ignored; whole-word matching only.
    pub fn parse_list(text: &str) -> BTreeSet<MealTime> {
        text.split(',')
            .filter_map(|part| part.parse().ok())
            .collect()
    }
}

impl fmt::Display for MealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealTime {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        parse_named("meal time", s, &Self::NAMES)
    }
}

/// A candidate meal from the catalog.
///
/// `serving` and `occurrences` are per-request state: catalog copies keep the
/// defaults and only request-scoped clones are mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub id: u32,
    pub name: String,
    pub meal_times: BTreeSet<MealTime>,
    pub diet: String,
    pub ingredients: String,
    pub website: String,

    /// Calories for a single serving.
    pub calories: f64,

    #[serde(default = "default_serving")]
    pub serving: f64,

    #[serde(default)]
    pub occurrences: u32,
}

fn default_serving() -> f64 {
    1.0
}

impl Meal {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        meal_times: BTreeSet<MealTime>,
        diet: impl Into<String>,
        ingredients: impl Into<String>,
        website: impl Into<String>,
        calories: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            meal_times,
            diet: diet.into(),
            ingredients: ingredients.into(),
            website: website.into(),
            calories,
            serving: default_serving(),
            occurrences: 0,
        }
    }

    /// Calories at the current serving size.
    #[inline]
    pub fn total_calories(&self) -> f64 {
        self.calories * self.serving
    }

    /// Whether the meal may fill the given slot.
    #[inline]
    pub fn is_eligible_for(&self, slot: MealTime) -> bool {
        self.meal_times.contains(&slot)
    }

    /// Case-insensitive substring match against the diet tag.
    pub fn diet_matches(&self, tag: &str) -> bool {
        self.diet.to_lowercase().contains(&tag.to_lowercase())
    }

    /// Case-insensitive substring match against the ingredient text.
    pub fn contains_ingredient(&self, term: &str) -> bool {
        self.ingredients.to_lowercase().contains(&term.to_lowercase())
    }

    /// Comma-joined category list, as written in the catalog.
    pub fn meal_time_label(&self) -> String {
        self.meal_times
            .iter()
            .map(MealTime::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl PartialEq for Meal {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Meal {}

impl std::hash::Hash for Meal {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
