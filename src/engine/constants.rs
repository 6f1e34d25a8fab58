use crate::models::MacroPercentages;

/// Energy density of protein (kcal per gram).
pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;

/// Energy density of carbohydrate (kcal per gram).
pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;

/// Energy density of fat (kcal per gram).
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

/// The three macro percentages must not sum past this.
pub const PERCENT_BUDGET: f64 = 100.0;

/// The add-food calorie field is only overwritten when it differs from the
/// computed total by more than this many kcal.
pub const AUTOFILL_TOLERANCE_KCAL: f64 = 10.0;

/// Calorie goal used by the registration form when the field is empty or 0.
pub const DEFAULT_CALORIE_GOAL: f64 = 2000.0;

/// Default 30/40/30 protein/carbs/fat split.
pub const DEFAULT_SPLIT: MacroPercentages = MacroPercentages {
    protein: 30.0,
    carbs: 40.0,
    fat: 30.0,
};

// ─────────────────────────────────────────────────────────────────────────────
// Default daily goals for a new profile
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_PROTEIN_GOAL_G: f64 = 150.0;
pub const DEFAULT_CARBS_GOAL_G: f64 = 200.0;
pub const DEFAULT_FAT_GOAL_G: f64 = 65.0;
pub const DEFAULT_FIBER_GOAL_G: f64 = 30.0;
pub const DEFAULT_WATER_GOAL_ML: f64 = 2500.0;

// ─────────────────────────────────────────────────────────────────────────────
// Dashboard progress thresholds (percent of goal)
// ─────────────────────────────────────────────────────────────────────────────

/// Calorie ring turns to a warning above this.
pub const CALORIE_WARNING_PCT: f64 = 90.0;

/// Water level below this is low.
pub const WATER_LOW_PCT: f64 = 30.0;

/// Water level below this (and at or above the low mark) is moderate.
pub const WATER_MODERATE_PCT: f64 = 60.0;

/// Progress bars never draw past this.
pub const PROGRESS_CAP_PCT: f64 = 100.0;
