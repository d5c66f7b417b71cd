use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};

/// Minimum Jaro-Winkler score for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Find the closest known name to `input`, if any is similar enough.
pub fn closest_name<'a>(input: &str, known: &[&'a str]) -> Option<&'a str> {
    let input = input.to_lowercase();
    known
        .iter()
        .map(|name| (*name, jaro_winkler(&input, name)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(name, _)| name)
}

/// Build the error for an unrecognized name, suggesting the closest match.
pub fn unknown_name(kind: &str, input: &str, known: &[&str]) -> PlannerError {
    match closest_name(input, known) {
        Some(suggestion) => PlannerError::InvalidInput(format!(
            "unknown {} '{}' (did you mean '{}'?)",
            kind, input, suggestion
        )),
        None => PlannerError::InvalidInput(format!(
            "unknown {} '{}' (expected one of: {})",
            kind,
            input,
            known.join(", ")
        )),
    }
}

/// Look up `input` case-insensitively among `(name, value)` pairs.
pub fn parse_named<T: Copy>(kind: &str, input: &str, table: &[(&str, T)]) -> Result<T> {
    let needle = input.trim().to_lowercase();
    table
        .iter()
        .find(|(name, _)| *name == needle)
        .map(|(_, value)| *value)
        .ok_or_else(|| {
            let known: Vec<&str> = table.iter().map(|(name, _)| *name).collect();
            unknown_name(kind, input, &known)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_name_finds_typo() {
        let known = ["sedentary", "active", "very-active"];
        assert_eq!(closest_name("sedentery", &known), Some("sedentary"));
        assert_eq!(closest_name("zzz", &known), None);
    }

    #[test]
    fn test_unknown_name_message_has_suggestion() {
        let err = unknown_name("goal", "maintian", &["maintain", "weight-gain"]);
        assert!(err.to_string().contains("did you mean 'maintain'"));
    }

    #[test]
    fn test_parse_named_case_insensitive() {
        let table = [("one", 1), ("two", 2)];
        assert_eq!(parse_named("number", " TWO ", &table).unwrap(), 2);
        assert!(parse_named("number", "three", &table).is_err());
    }
}
