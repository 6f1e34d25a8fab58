use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::engine::{grams_to_calories, parse_nutrient_value};
use crate::error::{MacroError, Result};
use crate::models::{MacroCalories, MacroGrams};

/// Reply from the image-analysis endpoint.
#[derive(Debug, Clone)]
pub enum AnalysisResponse {
    Success(FoodAnalysis),
    Failure { error: String },
}

impl AnalysisResponse {
    /// Parse a raw JSON reply. An object carrying `error` is a failure.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(MacroError::InvalidInput(
                "analysis reply must be a JSON object".to_string(),
            ));
        }

        if let Some(error) = value.get("error") {
            let error = match error {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Ok(AnalysisResponse::Failure { error });
        }

        Ok(AnalysisResponse::Success(serde_json::from_value(value)?))
    }

    /// Turn a failure reply into an error.
    pub fn into_result(self) -> Result<FoodAnalysis> {
        match self {
            AnalysisResponse::Success(analysis) => Ok(analysis),
            AnalysisResponse::Failure { error } => {
                warn!(%error, "image analysis returned an error");
                Err(MacroError::AnalysisFailed(error))
            }
        }
    }
}

/// Nutrition estimate for a photographed food.
///
/// Numeric fields are kept raw because the model sometimes answers with
/// strings or ranges; accessors run them through the parse boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodAnalysis {
    pub food_description: Option<String>,
    pub food_name: Option<String>,

    #[serde(default)]
    pub calories: Value,
    #[serde(default)]
    pub protein: Value,
    #[serde(default)]
    pub carbs: Value,
    #[serde(default)]
    pub fat: Value,

    pub fiber: Option<Value>,
    pub sugar: Option<Value>,
    pub sodium: Option<Value>,

    pub serving_size: Option<String>,
    pub quantity: Option<Value>,
    pub unit: Option<String>,

    pub image_url: Option<String>,
    pub analysis_id: Option<String>,
}

impl FoodAnalysis {
    /// Reported calories, truncated to a whole number.
    pub fn calories(&self) -> f64 {
        parse_nutrient_value(&self.calories).trunc()
    }

    pub fn grams(&self) -> MacroGrams {
        MacroGrams::new(
            parse_nutrient_value(&self.protein),
            parse_nutrient_value(&self.carbs),
            parse_nutrient_value(&self.fat),
        )
    }

    /// Calories implied by the reported macros.
    pub fn derived_calories(&self) -> MacroCalories {
        grams_to_calories(&self.grams())
    }

    /// Reported calories minus the macro-derived total.
    pub fn calorie_discrepancy(&self) -> f64 {
        self.calories() - self.derived_calories().total()
    }

    pub fn fiber(&self) -> Option<f64> {
        self.fiber.as_ref().map(parse_nutrient_value)
    }

    pub fn sugar(&self) -> Option<f64> {
        self.sugar.as_ref().map(parse_nutrient_value)
    }

    pub fn sodium(&self) -> Option<f64> {
        self.sodium.as_ref().map(parse_nutrient_value)
    }

    pub fn display_name(&self) -> &str {
        non_empty(&self.food_description)
            .or_else(|| non_empty(&self.food_name))
            .unwrap_or("Food Analysis")
    }

    pub fn serving_label(&self) -> String {
        if let Some(serving) = non_empty(&self.serving_size) {
            return serving.to_string();
        }

        match (&self.quantity, non_empty(&self.unit)) {
            (Some(quantity), Some(unit)) => format!("{} {}", parse_nutrient_value(quantity), unit),
            _ => "1 serving".to_string(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
