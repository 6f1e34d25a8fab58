pub mod budget;
pub mod constants;
pub mod conversions;
pub mod parse;

pub use budget::{apply_percentage_edit, enforce_percentage_budget, BudgetAdjustment};
pub use constants::*;
pub use conversions::{
    calories_to_percentages, grams_to_calories, percentages_of_goal, percentages_to_grams,
    sanitize,
};
pub use parse::{
    format_grams, format_kcal, format_percent, parse_calorie_goal, parse_field,
    parse_nutrient_value, parse_optional_field,
};
