use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::models::{CalendarDate, Day, Meal, MealTime, UserConstraints};
use crate::planner::constants::*;
use crate::planner::filters::{apply_slot_filters, apply_user_filters};

/// Runtime knobs for meal selection.
#[derive(Debug, Clone)]
pub struct SelectionConfig {
    /// Calorie band width applied before serving fitting.
    pub calorie_range: u32,
    pub occurrence_cap: u32,
    /// When false, the first draw is always accepted.
    pub enforce_occurrence_cap: bool,
    pub max_attempts: usize,
    /// Chance of drawing from all candidates rather than preferred meals.
    pub candidate_probability: f64,
    pub serving_tolerance: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            calorie_range: SLOT_CALORIE_RANGE,
            occurrence_cap: OCCURRENCE_CAP,
            enforce_occurrence_cap: true,
            max_attempts: MAX_SELECTION_ATTEMPTS,
            candidate_probability: CANDIDATE_POOL_PROBABILITY,
            serving_tolerance: SERVING_TOLERANCE,
        }
    }
}

/// Request-scoped working copy of the catalog.
///
/// Holds meals that passed the user-level filters and owns their occurrence
/// counts, so the shared catalog is never mutated.
#[derive(Debug, Clone)]
pub struct MealPool {
    meals: Vec<Meal>,
    preferred: HashSet<u32>,
}

impl MealPool {
    /// Clone catalog meals and apply diet, ingredient and down-vote filters.
    pub fn for_user(catalog: &[Meal], constraints: &UserConstraints) -> Self {
        let meals = catalog
            .iter()
            .cloned()
            .map(|mut m| {
                m.serving = 1.0;
                m.occurrences = 0;
                m
            })
            .collect();
        Self {
            meals: apply_user_filters(meals, constraints),
            preferred: constraints.preferred_meal_ids.iter().copied().collect(),
        }
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn preferred_meals(&self) -> Vec<Meal> {
        self.meals
            .iter()
            .filter(|m| self.preferred.contains(&m.id))
            .cloned()
            .collect()
    }

    pub fn occurrences(&self, id: u32) -> u32 {
        self.meals
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.occurrences)
            .unwrap_or(0)
    }

    /// Count one more selection of `id`, returning the new total.
    pub fn record_selection(&mut self, id: u32) -> u32 {
        match self.meals.iter_mut().find(|m| m.id == id) {
            Some(meal) => {
                meal.occurrences += 1;
                meal.occurrences
            }
            None => 0,
        }
    }

    /// Candidates and preferred candidates fitted to a slot target.
    pub fn slot_candidates(
        &self,
        slot: MealTime,
        target: f64,
        config: &SelectionConfig,
    ) -> (Vec<Meal>, Vec<Meal>) {
        let fit = |meals: Vec<Meal>| {
            apply_slot_filters(meals, slot, target, config.calorie_range, config.serving_tolerance)
        };
        (fit(self.meals.clone()), fit(self.preferred_meals()))
    }
}

/// Draw one meal.
///
/// Each attempt draws from `candidates` with probability
/// `candidate_probability` (always, if `preferred` is empty), otherwise from
/// `preferred`. With the cap enforced, a draw at or over the cap is rejected
/// and redrawn; the last draw wins once attempts run out.
pub fn choose_meal<'a, R: Rng>(
    rng: &mut R,
    candidates: &'a [Meal],
    preferred: &'a [Meal],
    config: &SelectionConfig,
) -> Option<&'a Meal> {
    if candidates.is_empty() {
        return None;
    }

    let probability = config.candidate_probability.clamp(0.0, 1.0);
    let mut choice = None;

    for attempt in 0..config.max_attempts.max(1) {
        let source = if preferred.is_empty() || rng.gen_bool(probability) {
            candidates
        } else {
            preferred
        };
        let meal = source.choose(rng)?;
        choice = Some(meal);

        if !config.enforce_occurrence_cap || meal.occurrences < config.occurrence_cap {
            break;
        }
        debug!(
            attempt,
            meal = %meal.name,
            occurrences = meal.occurrences,
            "Meal at occurrence cap, redrawing"
        );
    }

    choice
}

/// Select one slot and record the selection in the pool.
fn select_slot<R: Rng>(
    pool: &mut MealPool,
    rng: &mut R,
    date: CalendarDate,
    slot: MealTime,
    target: f64,
    config: &SelectionConfig,
) -> Result<Meal> {
    let (candidates, preferred) = pool.slot_candidates(slot, target, config);

    let mut meal = choose_meal(rng, &candidates, &preferred, config)
        .cloned()
        .ok_or_else(|| PlannerError::NoMealsAvailable {
            slot: slot.to_string(),
            date: date.to_string(),
        })?;

    meal.occurrences = pool.record_selection(meal.id);
    debug!(
        %date,
        %slot,
        target = target.round(),
        candidates = candidates.len(),
        preferred = preferred.len(),
        meal = %meal.name,
        serving = meal.serving,
        "Selected meal"
    );
    Ok(meal)
}

/// Plan one day. Later slot targets depend on what earlier slots delivered.
pub fn select_day<R: Rng>(
    pool: &mut MealPool,
    rng: &mut R,
    date: CalendarDate,
    total_calories: f64,
    config: &SelectionConfig,
) -> Result<Day> {
    let breakfast_target = total_calories / 3.0;
    let breakfast = select_slot(pool, rng, date, MealTime::Breakfast, breakfast_target, config)?;

    let lunch_target = (total_calories - breakfast.total_calories()) / 2.0;
    let lunch = select_slot(pool, rng, date, MealTime::Lunch, lunch_target, config)?;

    let dinner_target = total_calories - breakfast.total_calories() - lunch.total_calories();
    let dinner = select_slot(pool, rng, date, MealTime::Dinner, dinner_target, config)?;

    Ok(Day {
        date,
        breakfast,
        lunch,
        dinner,
    })
}

/// Plan `days` consecutive days starting at `start`.
pub fn select_days<R: Rng>(
    pool: &mut MealPool,
    rng: &mut R,
    start: CalendarDate,
    days: usize,
    total_calories: f64,
    config: &SelectionConfig,
) -> Result<Vec<Day>> {
    let mut date = start;
    let mut planned = Vec::with_capacity(days);

    for i in 0..days {
        if i > 0 {
            date.advance();
        }
        planned.push(select_day(pool, rng, date, total_calories, config)?);
    }

    Ok(planned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn meal(id: u32, occurrences: u32) -> Meal {
        let mut m = Meal::new(id, format!("Meal {}", id), MealTime::parse_list("lunch"), "none", "", "", 500.0);
        m.occurrences = occurrences;
        m
    }

    #[test]
    fn test_choose_meal_empty_candidates() {
        let mut rng = StdRng::seed_from_u64(1);
        let preferred = vec![meal(1, 0)];
        assert!(choose_meal(&mut rng, &[], &preferred, &SelectionConfig::default()).is_none());
    }

    #[test]
    fn test_choose_meal_only_candidates_without_preferred() {
        let mut rng = StdRng::seed_from_u64(7);
        let candidates = vec![meal(1, 0), meal(2, 0)];
        for _ in 0..50 {
            let chosen = choose_meal(&mut rng, &candidates, &[], &SelectionConfig::default()).unwrap();
            assert!(chosen.id == 1 || chosen.id == 2);
        }
    }

    #[test]
    fn test_choose_meal_probability_extremes() {
        let mut rng = StdRng::seed_from_u64(3);
        let candidates = vec![meal(1, 0)];
        let preferred = vec![meal(2, 0)];

        let always_preferred = SelectionConfig {
            candidate_probability: 0.0,
            ..Default::default()
        };
        for _ in 0..20 {
            let chosen = choose_meal(&mut rng, &candidates, &preferred, &always_preferred).unwrap();
            assert_eq!(chosen.id, 2);
        }

        let always_candidates = SelectionConfig {
            candidate_probability: 1.0,
            ..Default::default()
        };
        for _ in 0..20 {
            let chosen = choose_meal(&mut rng, &candidates, &preferred, &always_candidates).unwrap();
            assert_eq!(chosen.id, 1);
        }
    }

    #[test]
    fn test_choose_meal_mixes_pools() {
        let mut rng = StdRng::seed_from_u64(11);
        let candidates = vec![meal(1, 0)];
        let preferred = vec![meal(2, 0)];
        let config = SelectionConfig::default();

        let preferred_hits = (0..1000)
            .filter(|_| choose_meal(&mut rng, &candidates, &preferred, &config).unwrap().id == 2)
            .count();
        // Expect roughly 40%.
        assert!((300..500).contains(&preferred_hits), "got {}", preferred_hits);
    }

    #[test]
    fn test_occurrence_cap_redraws() {
        let candidates = vec![meal(1, OCCURRENCE_CAP), meal(2, 0)];
        let config = SelectionConfig {
            max_attempts: 200,
            ..Default::default()
        };
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let chosen = choose_meal(&mut rng, &candidates, &[], &config).unwrap();
            assert_eq!(chosen.id, 2, "seed {}", seed);
        }
    }

    #[test]
    fn test_occurrence_cap_accepts_last_draw_when_exhausted() {
        let mut rng = StdRng::seed_from_u64(5);
        let candidates = vec![meal(1, OCCURRENCE_CAP + 3)];
        let chosen = choose_meal(&mut rng, &candidates, &[], &SelectionConfig::default()).unwrap();
        assert_eq!(chosen.id, 1);
    }

    #[test]
    fn test_cap_bypass_accepts_first_draw() {
        let candidates = vec![meal(1, OCCURRENCE_CAP), meal(2, 0)];
        let config = SelectionConfig {
            enforce_occurrence_cap: false,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(9);
        let capped_hits = (0..200)
            .filter(|_| choose_meal(&mut rng, &candidates, &[], &config).unwrap().id == 1)
            .count();
        assert!(capped_hits > 0);
    }

    #[test]
    fn test_record_selection() {
        let constraints_json = r#"{
            "age": 30, "sex": "F",
            "height": {"unit": "cm", "value": 165},
            "weight": {"unit": "kg", "value": 60},
            "activityLevel": "active", "weightGoal": "maintain",
            "preferredMealIds": [2],
            "weeks": 1,
            "date": {"day": "1", "month": "1", "year": "2025"}
        }"#;
        let constraints: UserConstraints = serde_json::from_str(constraints_json).unwrap();
        let catalog = vec![meal(1, 9), meal(2, 0)];
        let mut pool = MealPool::for_user(&catalog, &constraints);

        // Catalog counts are not carried into the pool.
        assert_eq!(pool.occurrences(1), 0);
        assert_eq!(pool.record_selection(1), 1);
        assert_eq!(pool.record_selection(1), 2);
        assert_eq!(pool.occurrences(1), 2);
        assert_eq!(catalog[0].occurrences, 9);

        let preferred = pool.preferred_meals();
        assert_eq!(preferred.len(), 1);
        assert_eq!(preferred[0].id, 2);
    }
}
