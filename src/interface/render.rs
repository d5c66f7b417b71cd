use crate::models::{Meal, Planner, UserConstraints};

/// Display a plan, one block per day.
pub fn display_planner(planner: &Planner) {
    if planner.is_empty() {
        println!("No meal plan generated.");
        return;
    }

    println!();
    println!(
        "=== Meal Plan for {} ({} week(s) from {}) ===",
        planner.user_id, planner.weeks, planner.start_date
    );
    println!("Daily target: {:.0} cal", planner.daily_calories);

    let max_name_len = planner
        .days()
        .iter()
        .flat_map(|d| d.meals())
        .map(|(_, m)| m.name.len())
        .max()
        .unwrap_or(10);

    for day in planner.days() {
        println!();
        println!("{}  ({:.0} cal)", day.date, day.total_calories());
        for (slot, meal) in day.meals() {
            println!(
                "  {:<9} {:<width$} x{:<4} {:>5.0} cal",
                slot.as_str(),
                meal.name,
                meal.serving,
                meal.total_calories(),
                width = max_name_len
            );
        }
    }

    let total: f64 = planner.days().iter().map(|d| d.total_calories()).sum();
    println!();
    println!("--- Summary ---");
    println!("Days: {}", planner.len());
    println!("Average calories/day: {:.0}", total / planner.len() as f64);
    println!();
}

/// Display a simple list of meals.
pub fn display_meal_list(meals: &[&Meal], title: &str) {
    if meals.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} meals) ===", title, meals.len());
    println!();

    for meal in meals {
        println!(
            "  [{:>4}] {} - {} cal, {} ({})",
            meal.id,
            meal.name,
            meal.calories,
            meal.meal_time_label(),
            meal.diet
        );
    }

    println!();
}

/// Display maintenance and goal-adjusted calories.
pub fn display_calories(user_id: &str, constraints: &UserConstraints, base: f64, adjusted: f64) {
    println!("Calories for {}:", user_id);
    println!("  Maintenance: {:.0} cal/day", base);
    println!(
        "  Target ({}): {:.0} cal/day",
        constraints.weight_goal, adjusted
    );
}
