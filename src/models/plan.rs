use serde::{Deserialize, Serialize};

use crate::models::date::CalendarDate;
use crate::models::meal::{Meal, MealTime};

/// One planned day.
///
/// Each meal is a snapshot taken at selection time: `serving` is the size
/// chosen for this day and `occurrences` counts selections up to and
/// including this one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Day {
    pub date: CalendarDate,
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
}

impl Day {
    /// Meal for a daily slot; `None` for categories that are never planned.
    pub fn meal(&self, slot: MealTime) -> Option<&Meal> {
        match slot {
            MealTime::Breakfast => Some(&self.breakfast),
            MealTime::Lunch => Some(&self.lunch),
            MealTime::Dinner => Some(&self.dinner),
            MealTime::Dessert => None,
        }
    }

    /// Meals in slot order.
    pub fn meals(&self) -> [(MealTime, &Meal); 3] {
        [
            (MealTime::Breakfast, &self.breakfast),
            (MealTime::Lunch, &self.lunch),
            (MealTime::Dinner, &self.dinner),
        ]
    }

    /// Calories across all three meals at their planned servings.
    pub fn total_calories(&self) -> f64 {
        self.meals().iter().map(|(_, m)| m.total_calories()).sum()
    }
}

/// A complete multi-day plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planner {
    pub user_id: String,
    pub start_date: CalendarDate,
    pub weeks: u32,

    /// Goal-adjusted daily calorie target the plan was sized for.
    pub daily_calories: f64,

    pub meals: Vec<Day>,
}

impl Planner {
    pub fn days(&self) -> &[Day] {
        &self.meals
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
