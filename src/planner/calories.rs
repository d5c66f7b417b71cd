use crate::models::{Sex, UserConstraints, WeightGoal};
use crate::planner::constants::*;

/// Basal metabolic rate (Mifflin-St Jeor).
pub fn basal_metabolic_rate(weight_kg: f64, height_cm: f64, age: u32, sex: Sex) -> f64 {
    let offset = match sex {
        Sex::Male => BMR_MALE_OFFSET,
        Sex::Female => BMR_FEMALE_OFFSET,
    };
    BMR_WEIGHT_COEF * weight_kg + BMR_HEIGHT_COEF * height_cm - BMR_AGE_COEF * age as f64 + offset
}

/// Daily maintenance calories: BMR scaled by activity level.
pub fn base_calories(constraints: &UserConstraints) -> f64 {
    let bmr = basal_metabolic_rate(
        constraints.weight.to_kilograms(),
        constraints.height.to_centimeters(),
        constraints.age,
        constraints.sex,
    );
    bmr * constraints.activity_level.multiplier()
}

/// Apply the weight-goal adjustment to a maintenance figure.
///
/// | goal         | <1600 | [1600,2000)                  | [2000,2500) | [2500,3000) | ≥3000 |
/// |--------------|-------|------------------------------|-------------|-------------|-------|
/// | extreme-loss | −50   | 1550 if <1800, else −250     | −300        | −400        | −500  |
/// | weight-loss  | −25   | 1575 if <1700, else −125     | −150        | −200        | −250  |
/// | maintain     | 0     | 0                            | 0           | 0           | 0     |
/// | weight-gain  | +50   | +125                         | +150        | +150        | +150  |
/// | extreme-gain | +100  | +250                         | +300        | +300        | +300  |
pub fn adjust_for_goal(goal: WeightGoal, base: f64) -> f64 {
    match goal {
        WeightGoal::Maintain => base,
        WeightGoal::ExtremeLoss => {
            if base < 1600.0 {
                base - 50.0
            } else if base < 2000.0 {
                if base < 1800.0 { 1550.0 } else { base - 250.0 }
            } else if base < 2500.0 {
                base - 300.0
            } else if base < 3000.0 {
                base - 400.0
            } else {
                base - 500.0
            }
        }
        WeightGoal::WeightLoss => {
            if base < 1600.0 {
                base - 25.0
            } else if base < 2000.0 {
                if base < 1700.0 { 1575.0 } else { base - 125.0 }
            } else if base < 2500.0 {
                base - 150.0
            } else if base < 3000.0 {
                base - 200.0
            } else {
                base - 250.0
            }
        }
        WeightGoal::WeightGain => {
            if base < 1600.0 {
                base + 50.0
            } else if base < 2000.0 {
                base + 125.0
            } else {
                base + 150.0
            }
        }
        WeightGoal::ExtremeGain => {
            if base < 1600.0 {
                base + 100.0
            } else if base < 2000.0 {
                base + 250.0
            } else {
                base + 300.0
            }
        }
    }
}

/// Goal-adjusted daily calories for a user.
pub fn adjusted_calories(constraints: &UserConstraints, base: f64) -> f64 {
    adjust_for_goal(constraints.weight_goal, base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmr_male_female() {
        // 10*80 + 6.25*180 - 5*30 = 1775, then the sex offset
        assert!((basal_metabolic_rate(80.0, 180.0, 30, Sex::Male) - 1780.0).abs() < 1e-9);
        assert!((basal_metabolic_rate(80.0, 180.0, 30, Sex::Female) - 1614.0).abs() < 1e-9);
    }

    #[test]
    fn test_extreme_loss_clamp_band() {
        assert_eq!(adjust_for_goal(WeightGoal::ExtremeLoss, 1600.0), 1550.0);
        assert_eq!(adjust_for_goal(WeightGoal::ExtremeLoss, 1750.0), 1550.0);
        assert_eq!(adjust_for_goal(WeightGoal::ExtremeLoss, 1800.0), 1550.0);
        assert_eq!(adjust_for_goal(WeightGoal::ExtremeLoss, 1900.0), 1650.0);
        assert_eq!(adjust_for_goal(WeightGoal::ExtremeLoss, 1599.0), 1549.0);
    }

    #[test]
    fn test_weight_loss_clamp_band() {
        assert_eq!(adjust_for_goal(WeightGoal::WeightLoss, 1650.0), 1575.0);
        assert_eq!(adjust_for_goal(WeightGoal::WeightLoss, 1700.0), 1575.0);
        assert_eq!(adjust_for_goal(WeightGoal::WeightLoss, 1999.0), 1874.0);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(adjust_for_goal(WeightGoal::ExtremeLoss, 2000.0), 1700.0);
        assert_eq!(adjust_for_goal(WeightGoal::ExtremeLoss, 2500.0), 2100.0);
        assert_eq!(adjust_for_goal(WeightGoal::ExtremeLoss, 3000.0), 2500.0);
        assert_eq!(adjust_for_goal(WeightGoal::WeightLoss, 2500.0), 2300.0);
        assert_eq!(adjust_for_goal(WeightGoal::WeightLoss, 3000.0), 2750.0);
        assert_eq!(adjust_for_goal(WeightGoal::WeightGain, 1599.0), 1649.0);
        assert_eq!(adjust_for_goal(WeightGoal::WeightGain, 1600.0), 1725.0);
        assert_eq!(adjust_for_goal(WeightGoal::WeightGain, 2000.0), 2150.0);
        assert_eq!(adjust_for_goal(WeightGoal::ExtremeGain, 1500.0), 1600.0);
        assert_eq!(adjust_for_goal(WeightGoal::ExtremeGain, 1999.0), 2249.0);
        assert_eq!(adjust_for_goal(WeightGoal::ExtremeGain, 3500.0), 3800.0);
    }
}
