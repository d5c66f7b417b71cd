use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::catalog::MealCatalog;
use crate::error::{PlannerError, Result};
use crate::models::{Meal, MealTime};

/// Header columns every catalog must carry (case-insensitive, any order).
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "id",
    "meal name",
    "meal time",
    "diet",
    "ingredients",
    "website",
    "calories",
];

/// Split one line on commas outside double quotes.
///
/// Each `"` toggles quoting and is dropped; there is no escape sequence for a
/// literal quote. Fields are trimmed.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

/// Column positions resolved from the header row.
struct Columns {
    id: usize,
    name: usize,
    meal_time: usize,
    diet: usize,
    ingredients: usize,
    website: usize,
    calories: usize,
}

impl Columns {
    fn from_header(header: &str) -> Result<Self> {
        let positions: HashMap<String, usize> = split_line(header)
            .into_iter()
            .enumerate()
            .map(|(i, name)| (name.to_lowercase(), i))
            .collect();

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|c| !positions.contains_key(**c))
            .map(|c| c.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(PlannerError::MissingColumns(missing));
        }

        let at = |name: &str| positions[name];
        Ok(Self {
            id: at("id"),
            name: at("meal name"),
            meal_time: at("meal time"),
            diet: at("diet"),
            ingredients: at("ingredients"),
            website: at("website"),
            calories: at("calories"),
        })
    }

    fn width(&self) -> usize {
        [
            self.id,
            self.name,
            self.meal_time,
            self.diet,
            self.ingredients,
            self.website,
            self.calories,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
            + 1
    }

    /// Build a meal from a split row, or explain why the row is unusable.
    fn parse_row(&self, fields: &[String]) -> std::result::Result<Meal, String> {
        if fields.len() < self.width() {
            return Err(format!(
                "expected at least {} fields, found {}",
                self.width(),
                fields.len()
            ));
        }

        let id: u32 = fields[self.id]
            .parse()
            .map_err(|_| format!("invalid id '{}'", fields[self.id]))?;

        let calories: f64 = fields[self.calories]
            .parse()
            .map_err(|_| format!("invalid calories '{}'", fields[self.calories]))?;
        if !(calories.is_finite() && calories > 0.0) {
            return Err(format!("calories must be positive, got {}", calories));
        }

        let name = &fields[self.name];
        if name.is_empty() {
            return Err("empty meal name".to_string());
        }

        let meal_times = MealTime::parse_list(&fields[self.meal_time]);
        if meal_times.is_empty() {
            return Err(format!("no known meal time in '{}'", fields[self.meal_time]));
        }

        Ok(Meal::new(
            id,
            name.as_str(),
            meal_times,
            fields[self.diet].as_str(),
            fields[self.ingredients].as_str(),
            fields[self.website].as_str(),
            calories,
        ))
    }
}

/// Parse catalog text into meals.
///
/// Bad rows are skipped with a warning; only a missing header or missing data
/// fails the load.
pub fn parse_catalog(content: &str) -> Result<MealCatalog> {
    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(PlannerError::CatalogLoad(
            "catalog needs a header row and at least one meal".to_string(),
        ));
    }

    let columns = Columns::from_header(lines[0].1)?;
    let mut catalog = MealCatalog::default();

    for &(line_no, line) in &lines[1..] {
        let fields = split_line(line);
        match columns.parse_row(&fields) {
            Ok(meal) => {
                let id = meal.id;
                if !catalog.push(meal) {
                    warn!(line = line_no + 1, id, "Skipping catalog row: duplicate id");
                }
            }
            Err(reason) => warn!(line = line_no + 1, %reason, "Skipping catalog row"),
        }
    }

    Ok(catalog)
}

/// Load and parse a catalog file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<MealCatalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        PlannerError::CatalogLoad(format!("cannot read {}: {}", path.display(), e))
    })?;
    let catalog = parse_catalog(&content)?;
    info!(path = %path.display(), meals = catalog.len(), "Loaded meal catalog");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "ID,Meal Name,Meal Time,Diet,Ingredients,Website,Calories";

    #[test]
    fn test_split_line_quotes() {
        let fields = split_line(r#"1, "Eggs, Toast" ,breakfast,none,"eggs, bread",x, 300"#);
        assert_eq!(
            fields,
            vec!["1", "Eggs, Toast", "breakfast", "none", "eggs, bread", "x", "300"]
        );
    }

    #[test]
    fn test_split_line_no_escaped_quotes() {
        // A doubled quote closes and reopens; nothing is kept.
        let fields = split_line(r#"a""b,c"#);
        assert_eq!(fields, vec!["ab", "c"]);
    }

    #[test]
    fn test_parse_catalog() {
        let text = format!(
            "{}\n1,Pancakes,\"breakfast, dessert\",vegetarian,\"flour, milk, eggs\",https://a,450\n\n2,Salad,lunch,vegan,lettuce,https://b,200\n",
            HEADER
        );
        let catalog = parse_catalog(&text).unwrap();
        assert_eq!(catalog.len(), 2);

        let pancakes = catalog.get(1).unwrap();
        assert_eq!(pancakes.name, "Pancakes");
        assert!(pancakes.is_eligible_for(MealTime::Breakfast));
        assert!(pancakes.is_eligible_for(MealTime::Dessert));
        assert_eq!(pancakes.ingredients, "flour, milk, eggs");
        assert_eq!(pancakes.serving, 1.0);
    }

    #[test]
    fn test_header_any_order_case_insensitive() {
        let text = "calories,WEBSITE,ingredients,diet,meal time,Meal Name,id\n500,w,rice,none,dinner,Rice Bowl,9";
        let catalog = parse_catalog(text).unwrap();
        let meal = catalog.get(9).unwrap();
        assert_eq!(meal.name, "Rice Bowl");
        assert_eq!(meal.calories, 500.0);
    }

    #[test]
    fn test_missing_columns() {
        let text = "ID,Meal Name,Diet,Ingredients,Calories\n1,A,none,x,100";
        match parse_catalog(text) {
            Err(PlannerError::MissingColumns(missing)) => {
                assert_eq!(missing, vec!["meal time".to_string(), "website".to_string()]);
            }
            other => panic!("expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn test_short_file_is_load_error() {
        assert!(matches!(parse_catalog(HEADER), Err(PlannerError::CatalogLoad(_))));
        assert!(matches!(parse_catalog(""), Err(PlannerError::CatalogLoad(_))));
    }

    #[test]
    fn test_malformed_rows_skipped() {
        let text = format!(
            "{}\nx,Bad Id,lunch,none,a,w,100\n2,Bad Cal,lunch,none,a,w,lots\n3,Short,lunch\n4,No Slot,snack,none,a,w,100\n5,Good,lunch,none,a,w,100\n5,Dup,lunch,none,a,w,100",
            HEADER
        );
        let catalog = parse_catalog(&text).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(5).unwrap().name, "Good");
    }
}
