use crate::engine::constants::PERCENT_BUDGET;
use crate::models::{Macro, MacroCalories, MacroGrams, MacroPercentages};

/// Normalize a raw numeric input: non-finite and negative values become 0.
#[inline]
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Convert macro grams into calories per macro (4/4/9 kcal per gram).
pub fn grams_to_calories(grams: &MacroGrams) -> MacroCalories {
    MacroCalories {
        protein: sanitize(grams.protein) * Macro::Protein.kcal_per_gram(),
        carbs: sanitize(grams.carbs) * Macro::Carbs.kcal_per_gram(),
        fat: sanitize(grams.fat) * Macro::Fat.kcal_per_gram(),
    }
}

/// Share of the macro calorie total contributed by each macro.
///
/// All zeros when there are no calories. Each share is rounded on its own, so
/// the three may sum to anything from 99 to 101.
pub fn calories_to_percentages(cals: &MacroCalories) -> MacroPercentages {
    percentages_of(cals, cals.total())
}

/// Share of a calorie goal contributed by each macro.
///
/// Used by the profile goals form, which measures gram goals against the
/// calorie goal rather than against their own total. All zeros for a zero goal.
pub fn percentages_of_goal(cals: &MacroCalories, calorie_goal: f64) -> MacroPercentages {
    percentages_of(cals, sanitize(calorie_goal))
}

fn percentages_of(cals: &MacroCalories, denominator: f64) -> MacroPercentages {
    if denominator <= 0.0 {
        return MacroPercentages::default();
    }

    let share = |kcal: f64| ((kcal / denominator) * PERCENT_BUDGET).round();
    MacroPercentages {
        protein: share(cals.protein),
        carbs: share(cals.carbs),
        fat: share(cals.fat),
    }
}

/// Gram targets for a calorie total split by percentages, rounded to whole grams.
pub fn percentages_to_grams(total_calories: f64, pct: &MacroPercentages) -> MacroGrams {
    let total = sanitize(total_calories);
    let grams = |m: Macro| ((total * (sanitize(pct.get(m)) / PERCENT_BUDGET)) / m.kcal_per_gram()).round();

    MacroGrams {
        protein: grams(Macro::Protein),
        carbs: grams(Macro::Carbs),
        fat: grams(Macro::Fat),
    }
}
