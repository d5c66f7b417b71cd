pub mod calories;
pub mod constants;
pub mod controller;
pub mod filters;
pub mod selection;

pub use calories::{adjust_for_goal, adjusted_calories, base_calories, basal_metabolic_rate};
pub use constants::*;
pub use controller::{daily_calorie_target, generate_planner, planner_rng};
pub use filters::{
    adjust_servings, apply_slot_filters, apply_user_filters, best_serving, filter_by_calorie_band,
    filter_by_diet, filter_by_excluded_ingredients, filter_by_meal_time, filter_downvoted,
};
pub use selection::{choose_meal, select_day, select_days, MealPool, SelectionConfig};
