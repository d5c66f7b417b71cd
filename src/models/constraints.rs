use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::date::CalendarDate;
use crate::models::names::parse_named;

const CM_PER_INCH: f64 = 2.54;
const KG_PER_LB: f64 = 0.453_592_37;

/// Plan lengths a user may request, in weeks.
pub const ALLOWED_WEEKS: [u32; 3] = [1, 2, 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl FromStr for Sex {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        parse_named(
            "sex",
            s,
            &[
                ("m", Sex::Male),
                ("male", Sex::Male),
                ("f", Sex::Female),
                ("female", Sex::Female),
            ],
        )
    }
}

/// Height with its unit. `ft-in` carries a `[feet, inches]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value")]
pub enum Height {
    #[serde(rename = "cm")]
    Centimeters(f64),
    #[serde(rename = "m")]
    Meters(f64),
    #[serde(rename = "inch")]
    Inches(f64),
    #[serde(rename = "ft-in")]
    FeetInches(f64, f64),
}

impl Height {
    pub fn to_centimeters(&self) -> f64 {
        match *self {
            Height::Centimeters(cm) => cm,
            Height::Meters(m) => m * 100.0,
            Height::Inches(inches) => inches * CM_PER_INCH,
            Height::FeetInches(feet, inches) => (feet * 12.0 + inches) * CM_PER_INCH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value")]
pub enum Weight {
    #[serde(rename = "kg")]
    Kilograms(f64),
    #[serde(rename = "lb")]
    Pounds(f64),
}

impl Weight {
    pub fn to_kilograms(&self) -> f64 {
        match *self {
            Weight::Kilograms(kg) => kg,
            Weight::Pounds(lb) => lb * KG_PER_LB,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    #[serde(alias = "not-active")]
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    Active,
    VeryActive,
}

impl ActivityLevel {
    const NAMES: [(&'static str, ActivityLevel); 6] = [
        ("sedentary", ActivityLevel::Sedentary),
        ("not-active", ActivityLevel::Sedentary),
        ("lightly-active", ActivityLevel::LightlyActive),
        ("moderately-active", ActivityLevel::ModeratelyActive),
        ("active", ActivityLevel::Active),
        ("very-active", ActivityLevel::VeryActive),
    ];

    /// Multiplier applied to BMR to get daily expenditure.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::NAMES.iter().map(|(name, _)| *name).collect()
    }
}

impl FromStr for ActivityLevel {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        parse_named("activity level", s, &Self::NAMES)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightGoal {
    ExtremeLoss,
    WeightLoss,
    Maintain,
    WeightGain,
    ExtremeGain,
}

impl WeightGoal {
    const NAMES: [(&'static str, WeightGoal); 5] = [
        ("extreme-loss", WeightGoal::ExtremeLoss),
        ("weight-loss", WeightGoal::WeightLoss),
        ("maintain", WeightGoal::Maintain),
        ("weight-gain", WeightGoal::WeightGain),
        ("extreme-gain", WeightGoal::ExtremeGain),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeightGoal::ExtremeLoss => "extreme-loss",
            WeightGoal::WeightLoss => "weight-loss",
            WeightGoal::Maintain => "maintain",
            WeightGoal::WeightGain => "weight-gain",
            WeightGoal::ExtremeGain => "extreme-gain",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::NAMES.iter().map(|(name, _)| *name).collect()
    }
}

impl fmt::Display for WeightGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightGoal {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        parse_named("weight goal", s, &Self::NAMES)
    }
}

/// Everything the planner needs to know about a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConstraints {
    pub age: u32,
    pub sex: Sex,
    pub height: Height,
    pub weight: Weight,
    pub activity_level: ActivityLevel,
    pub weight_goal: WeightGoal,

    /// Diet tags a meal must match (any of). Empty means no diet filter.
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,

    /// Ingredient terms that exclude a meal.
    #[serde(default)]
    pub excluded_ingredients: Vec<String>,

    #[serde(default)]
    pub downvoted_meal_ids: Vec<u32>,

    #[serde(default)]
    pub preferred_meal_ids: Vec<u32>,

    pub weeks: u32,
    pub date: CalendarDate,
}

impl UserConstraints {
    /// Reject values the calorie math or planner cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.age == 0 {
            return Err(PlannerError::InvalidInput("age must be positive".to_string()));
        }
        let height_cm = self.height.to_centimeters();
        if !(height_cm.is_finite() && height_cm > 0.0) {
            return Err(PlannerError::InvalidInput("height must be positive".to_string()));
        }
        let weight_kg = self.weight.to_kilograms();
        if !(weight_kg.is_finite() && weight_kg > 0.0) {
            return Err(PlannerError::InvalidInput("weight must be positive".to_string()));
        }
        if !ALLOWED_WEEKS.contains(&self.weeks) {
            return Err(PlannerError::InvalidInput(format!(
                "plan length must be 1, 2 or 4 weeks, got {}",
                self.weeks
            )));
        }
        Ok(())
    }

    /// Number of days to plan.
    pub fn plan_days(&self) -> usize {
        self.weeks as usize * 7
    }
}
