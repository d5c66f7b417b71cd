use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// A plain calendar date with no timezone.
///
/// Serialized as `{"day": "01", "month": "01", "year": "2025"}` to match the
/// decimal-string form the rest of the system exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCalendarDate", into = "RawCalendarDate")]
pub struct CalendarDate {
    // Field order gives chronological Ord.
    year: i32,
    month: u32,
    day: u32,
}

#[derive(Serialize, Deserialize)]
struct RawCalendarDate {
    day: String,
    month: String,
    year: String,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(PlannerError::InvalidInput(format!(
                "month {} out of range",
                month
            )));
        }
        if day == 0 || day > days_in_month(month, year) {
            return Err(PlannerError::InvalidInput(format!(
                "day {} out of range for {:02}/{}",
                day, month, year
            )));
        }
        Ok(Self { year, month, day })
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The following calendar day, rolling over months and years.
    pub fn next_day(&self) -> Self {
        let mut next = *self;
        next.advance();
        next
    }

    /// Move this date forward by one day.
    pub fn advance(&mut self) {
        self.day += 1;
        if self.day > days_in_month(self.month, self.year) {
            self.day = 1;
            self.month += 1;
            if self.month == 13 {
                self.month = 1;
                self.year += 1;
            }
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.month, self.day, self.year)
    }
}

/// Parses `YYYY-MM-DD`.
impl FromStr for CalendarDate {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || PlannerError::InvalidInput(format!("invalid date '{}', expected YYYY-MM-DD", s));
        let mut parts = s.trim().splitn(3, '-');
        let year = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
        let month = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
        let day = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
        Self::new(year, month, day)
    }
}

impl TryFrom<RawCalendarDate> for CalendarDate {
    type Error = PlannerError;

    fn try_from(raw: RawCalendarDate) -> Result<Self> {
        let field = |name: &str, value: &str| {
            PlannerError::InvalidInput(format!("date {} '{}' is not a number", name, value))
        };
        let day = raw.day.trim().parse().map_err(|_| field("day", &raw.day))?;
        let month = raw.month.trim().parse().map_err(|_| field("month", &raw.month))?;
        let year = raw.year.trim().parse().map_err(|_| field("year", &raw.year))?;
        Self::new(year, month, day)
    }
}

impl From<CalendarDate> for RawCalendarDate {
    fn from(date: CalendarDate) -> Self {
        Self {
            day: format!("{:02}", date.day),
            month: format!("{:02}", date.month),
            year: date.year.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2025));
    }

    #[test]
    fn test_february_rollover() {
        let date = CalendarDate::new(2024, 2, 28).unwrap();
        assert_eq!(date.next_day().to_string(), "02/29/2024");
        assert_eq!(date.next_day().next_day().to_string(), "03/01/2024");

        let date = CalendarDate::new(2025, 2, 28).unwrap();
        assert_eq!(date.next_day().to_string(), "03/01/2025");
    }

    #[test]
    fn test_year_rollover() {
        let date = CalendarDate::new(2024, 12, 31).unwrap();
        let next = date.next_day();
        assert_eq!((next.year(), next.month(), next.day()), (2025, 1, 1));
    }

    #[test]
    fn test_rejects_invalid_dates() {
        assert!(CalendarDate::new(2025, 2, 29).is_err());
        assert!(CalendarDate::new(2025, 13, 1).is_err());
        assert!(CalendarDate::new(2025, 4, 31).is_err());
        assert!("2025/01/01".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn test_string_fields_serde() {
        let json = r#"{"day": "1", "month": "01", "year": "2025"}"#;
        let date: CalendarDate = serde_json::from_str(json).unwrap();
        assert_eq!(date, "2025-01-01".parse().unwrap());

        let out = serde_json::to_value(date).unwrap();
        assert_eq!(out["day"], "01");
        assert_eq!(out["year"], "2025");

        let bad = r#"{"day": "30", "month": "02", "year": "2024"}"#;
        assert!(serde_json::from_str::<CalendarDate>(bad).is_err());
    }
}
