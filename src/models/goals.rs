use serde::{Deserialize, Serialize};

use crate::engine::constants::{
    DEFAULT_CALORIE_GOAL, DEFAULT_CARBS_GOAL_G, DEFAULT_FAT_GOAL_G, DEFAULT_FIBER_GOAL_G,
    DEFAULT_PROTEIN_GOAL_G, DEFAULT_WATER_GOAL_ML,
};
use crate::models::MacroGrams;

/// Daily nutrition goals stored in the goals file.
///
/// Missing fields fall back to the defaults of a freshly registered profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionGoals {
    pub calorie_goal: f64,
    pub protein_goal: f64,
    pub carbs_goal: f64,
    pub fat_goal: f64,
    pub fiber_goal: f64,
    pub water_goal_ml: f64,
}

impl Default for NutritionGoals {
    fn default() -> Self {
        Self {
            calorie_goal: DEFAULT_CALORIE_GOAL,
            protein_goal: DEFAULT_PROTEIN_GOAL_G,
            carbs_goal: DEFAULT_CARBS_GOAL_G,
            fat_goal: DEFAULT_FAT_GOAL_G,
            fiber_goal: DEFAULT_FIBER_GOAL_G,
            water_goal_ml: DEFAULT_WATER_GOAL_ML,
        }
    }
}

impl NutritionGoals {
    /// Macro goals as grams.
    pub fn macro_grams(&self) -> MacroGrams {
        MacroGrams::new(self.protein_goal, self.carbs_goal, self.fat_goal)
    }

    /// Replace the calorie and macro goals, keeping fiber and water.
    pub fn with_macros(&self, calorie_goal: f64, grams: MacroGrams) -> Self {
        Self {
            calorie_goal,
            protein_goal: grams.protein,
            carbs_goal: grams.carbs,
            fat_goal: grams.fat,
            ..self.clone()
        }
    }
}
