use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::MealTime;

/// Meal Planner: builds multi-day meal plans from calorie targets and preferences.
#[derive(Parser, Debug)]
#[command(name = "meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the meal catalog (comma-delimited text).
    #[arg(short, long, global = true, default_value = "meals.csv")]
    pub catalog: PathBuf,

    /// Path to the user profile JSON file.
    #[arg(short, long, global = true, default_value = "profiles.json")]
    pub profiles: PathBuf,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a meal plan for a stored user.
    Plan {
        /// User id in the profile store.
        #[arg(short, long)]
        user: String,

        /// Seed for reproducible plans.
        #[arg(long)]
        seed: Option<u64>,

        /// Maximum times a meal may appear in one plan.
        #[arg(long)]
        occurrence_cap: Option<u32>,

        /// Calorie band width applied before serving fitting.
        #[arg(long)]
        calorie_range: Option<u32>,

        /// Accept the first draw even for meals at the occurrence cap.
        #[arg(long)]
        allow_repeats: bool,

        /// Write the plan as JSON to this path.
        #[arg(long)]
        json: Option<PathBuf>,

        /// Write the plan as CSV to this path.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Create or update a user's constraints interactively.
    Profile {
        #[arg(short, long)]
        user: String,
    },

    /// Up-vote or down-vote a meal for a user.
    Vote {
        #[arg(short, long)]
        user: String,

        /// Catalog meal id.
        #[arg(short, long)]
        meal: u32,

        /// Prefer this meal.
        #[arg(long, conflicts_with = "down", required_unless_present = "down")]
        up: bool,

        /// Never plan this meal.
        #[arg(long)]
        down: bool,
    },

    /// Show maintenance and goal-adjusted calories for a user.
    Calories {
        #[arg(short, long)]
        user: String,
    },

    /// List catalog meals.
    Meals {
        /// Only meals eligible for this slot.
        #[arg(long)]
        slot: Option<MealTime>,
    },
}
