use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::catalog::MealCatalog;
use crate::error::{PlannerError, Result};
use crate::models::{Planner, UserConstraints};
use crate::planner::calories::{adjusted_calories, base_calories};
use crate::planner::selection::{select_days, MealPool, SelectionConfig};

/// Seeded generator for reproducible plans, or an entropy-seeded one.
pub fn planner_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Daily calorie target for a user: maintenance adjusted for their goal.
pub fn daily_calorie_target(constraints: &UserConstraints) -> f64 {
    let base = base_calories(constraints);
    adjusted_calories(constraints, base)
}

/// Build a full plan for one user.
///
/// Any failure, including a slot with no eligible meals, comes back as
/// `PlannerError::PlanGeneration` wrapping the cause. The catalog is only
/// read; selection state lives in a per-call pool.
pub fn generate_planner<R: Rng>(
    user_id: &str,
    constraints: &UserConstraints,
    catalog: &MealCatalog,
    config: &SelectionConfig,
    rng: &mut R,
) -> Result<Planner> {
    build_planner(user_id, constraints, catalog, config, rng).map_err(|e| {
        warn!(user = user_id, error = %e, "Meal plan generation failed");
        PlannerError::PlanGeneration(Box::new(e))
    })
}

fn build_planner<R: Rng>(
    user_id: &str,
    constraints: &UserConstraints,
    catalog: &MealCatalog,
    config: &SelectionConfig,
    rng: &mut R,
) -> Result<Planner> {
    constraints.validate()?;

    let base = base_calories(constraints);
    let daily_calories = adjusted_calories(constraints, base);

    let mut pool = MealPool::for_user(catalog.meals(), constraints);
    info!(
        user = user_id,
        base = base.round(),
        target = daily_calories.round(),
        goal = %constraints.weight_goal,
        eligible = pool.meals().len(),
        "Generating meal plan"
    );

    let days = select_days(
        &mut pool,
        rng,
        constraints.date,
        constraints.plan_days(),
        daily_calories,
        config,
    )?;

    info!(user = user_id, days = days.len(), "Meal plan generated");

    Ok(Planner {
        user_id: user_id.to_string(),
        start_date: constraints.date,
        weeks: constraints.weeks,
        daily_calories,
        meals: days,
    })
}
