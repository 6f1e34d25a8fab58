pub mod analysis;
pub mod goals;
pub mod macros;

pub use analysis::{AnalysisResponse, FoodAnalysis};
pub use goals::NutritionGoals;
pub use macros::{Macro, MacroCalories, MacroGrams, MacroPercentages};
