use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::Planner;

/// Write the plan as pretty-printed JSON.
pub fn write_planner_json(planner: &Planner, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(planner)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write the plan as CSV, one row per day and slot.
pub fn write_planner_csv(planner: &Planner, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "date",
        "slot",
        "meal_id",
        "meal_name",
        "serving",
        "calories",
        "occurrences",
        "website",
    ])?;

    for day in planner.days() {
        for (slot, meal) in day.meals() {
            wtr.write_record([
                day.date.to_string(),
                slot.to_string(),
                meal.id.to_string(),
                meal.name.clone(),
                format!("{:.1}", meal.serving),
                format!("{:.0}", meal.total_calories()),
                meal.occurrences.to_string(),
                meal.website.clone(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
