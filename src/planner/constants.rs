/// Maximum times one meal may be chosen within a single plan.
pub const OCCURRENCE_CAP: u32 = 4;

/// Draws attempted per slot before the last draw is accepted regardless of
/// the occurrence cap.
pub const MAX_SELECTION_ATTEMPTS: usize = 10;

/// Probability of drawing from the full candidate pool instead of the
/// preferred pool.
pub const CANDIDATE_POOL_PROBABILITY: f64 = 0.6;

/// Serving sizes searched when fitting a meal to a calorie target.
pub const SERVING_STEP: f64 = 0.5;
pub const SERVING_MIN: f64 = 0.5;
pub const SERVING_MAX: f64 = 10.0;

/// Allowed relative miss between a fitted meal and its target (±20%).
pub const SERVING_TOLERANCE: f64 = 0.2;

/// Width of a calorie band for the band filter.
pub const DEFAULT_CALORIE_RANGE: u32 = 100;

/// Band width used by slot selection. Wide enough that the band filter keeps
/// everything and serving fitting alone decides.
pub const SLOT_CALORIE_RANGE: u32 = 10_000;

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_WEIGHT_COEF: f64 = 10.0;
pub const BMR_HEIGHT_COEF: f64 = 6.25;
pub const BMR_AGE_COEF: f64 = 5.0;
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

/// Every serving size from `SERVING_MIN` to `SERVING_MAX` inclusive.
pub fn serving_sizes() -> impl Iterator<Item = f64> {
    let steps = ((SERVING_MAX - SERVING_MIN) / SERVING_STEP).round() as usize;
    (0..=steps).map(|i| SERVING_MIN + i as f64 * SERVING_STEP)
}
