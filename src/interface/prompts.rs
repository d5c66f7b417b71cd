use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::constraints::ALLOWED_WEEKS;
use crate::models::{
    ActivityLevel, CalendarDate, Height, Sex, UserConstraints, Weight, WeightGoal,
};

fn prompt_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("'{}' is not a number", input)))?;
    if value <= 0.0 {
        return Err(PlannerError::InvalidInput(format!("{} must be positive", prompt)));
    }
    Ok(value)
}

/// Prompt for age in years.
pub fn prompt_age() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Age (years)")
        .default("30".to_string())
        .interact_text()?;

    match input.trim().parse() {
        Ok(age) if age > 0 => Ok(age),
        _ => Err(PlannerError::InvalidInput(format!("invalid age '{}'", input))),
    }
}

pub fn prompt_sex() -> Result<Sex> {
    let selection = Select::new()
        .with_prompt("Sex")
        .items(&["M", "F"])
        .default(0)
        .interact()?;
    Ok(if selection == 0 { Sex::Male } else { Sex::Female })
}

pub fn prompt_height() -> Result<Height> {
    let units = ["cm", "m", "inch", "ft-in"];
    let unit = Select::new()
        .with_prompt("Height unit")
        .items(&units)
        .default(0)
        .interact()?;

    Ok(match unit {
        0 => Height::Centimeters(prompt_number("Height (cm)", "175")?),
        1 => Height::Meters(prompt_number("Height (m)", "1.75")?),
        2 => Height::Inches(prompt_number("Height (inches)", "69")?),
        _ => {
            let feet = prompt_number("Height (feet)", "5")?;
            let inches: String = Input::new()
                .with_prompt("Height (additional inches)")
                .default("9".to_string())
                .interact_text()?;
            let inches: f64 = inches
                .trim()
                .parse()
                .map_err(|_| PlannerError::InvalidInput(format!("'{}' is not a number", inches)))?;
            Height::FeetInches(feet, inches)
        }
    })
}

pub fn prompt_weight() -> Result<Weight> {
    let unit = Select::new()
        .with_prompt("Weight unit")
        .items(&["kg", "lb"])
        .default(0)
        .interact()?;

    Ok(match unit {
        0 => Weight::Kilograms(prompt_number("Weight (kg)", "70")?),
        _ => Weight::Pounds(prompt_number("Weight (lb)", "155")?),
    })
}

pub fn prompt_activity_level() -> Result<ActivityLevel> {
    let options: Vec<&str> = ActivityLevel::names()
        .into_iter()
        .filter(|name| *name != "not-active")
        .collect();
    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(2)
        .interact()?;
    options[selection].parse()
}

pub fn prompt_weight_goal() -> Result<WeightGoal> {
    let options = WeightGoal::names();
    let selection = Select::new()
        .with_prompt("Weight goal")
        .items(&options)
        .default(2)
        .interact()?;
    options[selection].parse()
}

/// Prompt for diet tags, fuzzy-matching against the tags the catalog knows.
pub fn prompt_dietary_restrictions(known_diets: &[String]) -> Result<Vec<String>> {
    let mut restrictions = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Enter a diet (e.g. vegan), or press Enter to finish")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim().to_lowercase();
        if input.is_empty() {
            break;
        }

        if known_diets.iter().any(|d| *d == input) {
            println!("Added: {}", input);
            restrictions.push(input);
            continue;
        }

        let mut candidates: Vec<(&String, f64)> = known_diets
            .iter()
            .map(|d| (d, jaro_winkler(d, &input)))
            .filter(|(_, score)| *score > 0.7)
            .collect();
        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        match candidates.first() {
            Some((diet, _)) => {
                let confirm = Confirm::new()
                    .with_prompt(format!("Did you mean '{}'?", diet))
                    .default(true)
                    .interact()?;
                if confirm {
                    println!("Added: {}", diet);
                    restrictions.push(diet.to_string());
                }
            }
            None => println!("No meals are tagged '{}'", input),
        }
    }

    Ok(restrictions)
}

/// Prompt for a comma-separated list of ingredients to avoid.
pub fn prompt_excluded_ingredients() -> Result<Vec<String>> {
    let input: String = Input::new()
        .with_prompt("Ingredients to avoid (comma-separated, blank for none)")
        .allow_empty(true)
        .interact_text()?;

    Ok(input
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect())
}

pub fn prompt_weeks() -> Result<u32> {
    let options: Vec<String> = ALLOWED_WEEKS.iter().map(|w| format!("{} week(s)", w)).collect();
    let selection = Select::new()
        .with_prompt("Plan length")
        .items(&options)
        .default(0)
        .interact()?;
    Ok(ALLOWED_WEEKS[selection])
}

pub fn prompt_start_date() -> Result<CalendarDate> {
    let input: String = Input::new()
        .with_prompt("Start date (YYYY-MM-DD)")
        .interact_text()?;
    input.parse()
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full set of constraints. Meal votes start empty.
pub fn collect_user_constraints(known_diets: &[String]) -> Result<UserConstraints> {
    let constraints = UserConstraints {
        age: prompt_age()?,
        sex: prompt_sex()?,
        height: prompt_height()?,
        weight: prompt_weight()?,
        activity_level: prompt_activity_level()?,
        weight_goal: prompt_weight_goal()?,
        dietary_restrictions: prompt_dietary_restrictions(known_diets)?,
        excluded_ingredients: prompt_excluded_ingredients()?,
        downvoted_meal_ids: Vec::new(),
        preferred_meal_ids: Vec::new(),
        weeks: prompt_weeks()?,
        date: prompt_start_date()?,
    };
    constraints.validate()?;
    Ok(constraints)
}
