pub mod constraints;
pub mod date;
pub mod meal;
pub mod names;
pub mod plan;

pub use constraints::{ActivityLevel, Height, Sex, UserConstraints, Weight, WeightGoal};
pub use date::CalendarDate;
pub use meal::{Meal, MealTime};
pub use plan::{Day, Planner};
