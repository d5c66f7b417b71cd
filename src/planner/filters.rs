//! Candidate filters. Each takes a meal list and returns the narrowed list;
//! applying any one of them twice gives the same result as applying it once.

use std::collections::HashSet;

use crate::models::{Meal, MealTime, UserConstraints};
use crate::planner::constants::serving_sizes;

/// Keep meals whose base calories fall in the band containing `target`.
///
/// The band is `[floor(target / range) * range, that + range - 1]`.
pub fn filter_by_calorie_band(meals: Vec<Meal>, target: f64, range: u32) -> Vec<Meal> {
    if range == 0 {
        return meals;
    }
    let range = range as f64;
    let lower = (target / range).floor() * range;
    let upper = lower + range - 1.0;
    meals
        .into_iter()
        .filter(|m| m.calories >= lower && m.calories <= upper)
        .collect()
}

/// Keep meals whose diet tag contains any of `restrictions`.
///
/// An empty restriction list keeps everything.
pub fn filter_by_diet(meals: Vec<Meal>, restrictions: &[String]) -> Vec<Meal> {
    if restrictions.is_empty() {
        return meals;
    }
    meals
        .into_iter()
        .filter(|m| restrictions.iter().any(|r| m.diet_matches(r)))
        .collect()
}

/// Drop meals whose ingredients mention any excluded term.
pub fn filter_by_excluded_ingredients(meals: Vec<Meal>, excluded: &[String]) -> Vec<Meal> {
    if excluded.is_empty() {
        return meals;
    }
    meals
        .into_iter()
        .filter(|m| !excluded.iter().any(|term| m.contains_ingredient(term)))
        .collect()
}

/// Drop meals the user has down-voted.
pub fn filter_downvoted(meals: Vec<Meal>, downvoted: &[u32]) -> Vec<Meal> {
    if downvoted.is_empty() {
        return meals;
    }
    let downvoted: HashSet<u32> = downvoted.iter().copied().collect();
    meals
        .into_iter()
        .filter(|m| !downvoted.contains(&m.id))
        .collect()
}

/// Keep meals eligible for `slot`.
pub fn filter_by_meal_time(meals: Vec<Meal>, slot: MealTime) -> Vec<Meal> {
    meals.into_iter().filter(|m| m.is_eligible_for(slot)).collect()
}

/// Serving size whose total is closest to `target`, if that total lands
/// within `tolerance` (a fraction of `target`).
///
/// Ties go to the smaller serving.
pub fn best_serving(calories: f64, target: f64, tolerance: f64) -> Option<f64> {
    if !(target > 0.0 && calories > 0.0) {
        return None;
    }

    let mut best: Option<(f64, f64)> = None;
    for serving in serving_sizes() {
        let distance = (calories * serving - target).abs();
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((serving, distance));
        }
    }

    best.filter(|(_, distance)| *distance <= tolerance * target)
        .map(|(serving, _)| serving)
}

/// Fit every meal to `target` by serving size, dropping meals that cannot be
/// brought within tolerance.
pub fn adjust_servings(meals: Vec<Meal>, target: f64, tolerance: f64) -> Vec<Meal> {
    meals
        .into_iter()
        .filter_map(|mut meal| {
            let serving = best_serving(meal.calories, target, tolerance)?;
            meal.serving = serving;
            Some(meal)
        })
        .collect()
}

/// The user-level filters, in order: diet, excluded ingredients, down-votes.
pub fn apply_user_filters(meals: Vec<Meal>, constraints: &UserConstraints) -> Vec<Meal> {
    let meals = filter_by_diet(meals, &constraints.dietary_restrictions);
    let meals = filter_by_excluded_ingredients(meals, &constraints.excluded_ingredients);
    filter_downvoted(meals, &constraints.downvoted_meal_ids)
}

/// The slot-level filters, in order: meal time, calorie band, serving fit.
pub fn apply_slot_filters(
    meals: Vec<Meal>,
    slot: MealTime,
    target: f64,
    calorie_range: u32,
    tolerance: f64,
) -> Vec<Meal> {
    let meals = filter_by_meal_time(meals, slot);
    let meals = filter_by_calorie_band(meals, target, calorie_range);
    adjust_servings(meals, target, tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::constants::SERVING_TOLERANCE;

    fn meal(id: u32, times: &str, diet: &str, ingredients: &str, calories: f64) -> Meal {
        Meal::new(
            id,
            format!("Meal {}", id),
            MealTime::parse_list(times),
            diet,
            ingredients,
            "",
            calories,
        )
    }

    fn sample_meals() -> Vec<Meal> {
        vec![
            meal(1, "breakfast, lunch", "vegan", "oats, almond", 350.0),
            meal(2, "lunch", "vegetarian", "cheese, bread", 520.0),
            meal(3, "dinner", "none", "chicken, rice, peanut sauce", 640.0),
            meal(4, "dessert", "Vegan", "cocoa, sugar", 250.0),
        ]
    }

    fn ids(meals: &[Meal]) -> Vec<u32> {
        meals.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_calorie_band() {
        let kept = filter_by_calorie_band(sample_meals(), 560.0, 100);
        assert_eq!(ids(&kept), vec![2]);

        let kept = filter_by_calorie_band(sample_meals(), 300.0, 100);
        assert_eq!(ids(&kept), vec![1]);

        // A very wide band keeps everything.
        let kept = filter_by_calorie_band(sample_meals(), 700.0, 10_000);
        assert_eq!(kept.len(), 4);
    }

    #[test]
    fn test_diet_filter() {
        let kept = filter_by_diet(sample_meals(), &["VEGAN".to_string()]);
        assert_eq!(ids(&kept), vec![1, 4]);

        let kept = filter_by_diet(sample_meals(), &["vegan".to_string(), "vegetarian".to_string()]);
        assert_eq!(ids(&kept), vec![1, 2, 4]);

        assert_eq!(filter_by_diet(sample_meals(), &[]).len(), 4);
    }

    #[test]
    fn test_excluded_ingredients() {
        let kept = filter_by_excluded_ingredients(sample_meals(), &["Peanut".to_string()]);
        assert_eq!(ids(&kept), vec![1, 2, 4]);
        assert_eq!(filter_by_excluded_ingredients(sample_meals(), &[]).len(), 4);
    }

    #[test]
    fn test_downvoted() {
        let kept = filter_downvoted(sample_meals(), &[2, 4, 99]);
        assert_eq!(ids(&kept), vec![1, 3]);
    }

    #[test]
    fn test_meal_time_multi_category() {
        let breakfast = filter_by_meal_time(sample_meals(), MealTime::Breakfast);
        let lunch = filter_by_meal_time(sample_meals(), MealTime::Lunch);
        let dinner = filter_by_meal_time(sample_meals(), MealTime::Dinner);
        assert_eq!(ids(&breakfast), vec![1]);
        assert_eq!(ids(&lunch), vec![1, 2]);
        assert_eq!(ids(&dinner), vec![3]);
    }

    #[test]
    fn test_best_serving_exact() {
        assert_eq!(best_serving(100.0, 500.0, SERVING_TOLERANCE), Some(5.0));
        assert_eq!(best_serving(300.0, 450.0, SERVING_TOLERANCE), Some(1.5));
    }

    #[test]
    fn test_best_serving_tolerance() {
        // Largest serving of a tiny meal still falls short.
        assert_eq!(best_serving(10.0, 500.0, SERVING_TOLERANCE), None);
        // Smallest serving of a huge meal overshoots.
        assert_eq!(best_serving(2000.0, 500.0, SERVING_TOLERANCE), None);
        // 0.5 * 1150 = 575, 15% over.
        assert_eq!(best_serving(1150.0, 500.0, SERVING_TOLERANCE), Some(0.5));
        assert_eq!(best_serving(100.0, 0.0, SERVING_TOLERANCE), None);
    }

    #[test]
    fn test_adjust_servings_sets_serving() {
        let adjusted = adjust_servings(sample_meals(), 700.0, SERVING_TOLERANCE);
        assert_eq!(adjusted.len(), 4);
        for m in &adjusted {
            assert!((m.total_calories() - 700.0).abs() <= 0.2 * 700.0);
        }
        let meal3 = adjusted.iter().find(|m| m.id == 3).unwrap();
        assert_eq!(meal3.serving, 1.0);
    }

    #[test]
    fn test_filters_idempotent() {
        let restrictions = vec!["vegan".to_string()];
        let once = filter_by_diet(sample_meals(), &restrictions);
        let twice = filter_by_diet(once.clone(), &restrictions);
        assert_eq!(ids(&once), ids(&twice));

        let once = adjust_servings(sample_meals(), 900.0, SERVING_TOLERANCE);
        let twice = adjust_servings(once.clone(), 900.0, SERVING_TOLERANCE);
        assert_eq!(ids(&once), ids(&twice));
        for (a, b) in once.iter().zip(&twice) {
            assert_eq!(a.serving, b.serving);
        }

        let once = filter_by_meal_time(sample_meals(), MealTime::Lunch);
        let twice = filter_by_meal_time(once.clone(), MealTime::Lunch);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn test_slot_filters_compose() {
        let kept = apply_slot_filters(sample_meals(), MealTime::Lunch, 1040.0, 10_000, SERVING_TOLERANCE);
        assert_eq!(ids(&kept), vec![1, 2]);
        let meal2 = kept.iter().find(|m| m.id == 2).unwrap();
        assert_eq!(meal2.serving, 2.0);
    }
}
