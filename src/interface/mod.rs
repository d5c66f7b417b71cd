pub mod export;
pub mod prompts;
pub mod render;

pub use export::{write_planner_csv, write_planner_json};
pub use prompts::{collect_user_constraints, prompt_yes_no};
pub use render::{display_calories, display_meal_list, display_planner};
