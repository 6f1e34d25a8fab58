use crate::engine::{format_grams, format_kcal, format_percent, AUTOFILL_TOLERANCE_KCAL};
use crate::models::{FoodAnalysis, Macro, MacroGrams, NutritionGoals};
use crate::progress::{
    calorie_progress, macro_progress, water_progress, CalorieStatus, WaterLevel,
};
use crate::session::{Field, FormMode, Reconciliation};

/// Lines describing a form after an edit. Rewritten fields are marked with `*`.
pub fn form_lines(mode: FormMode, result: &Reconciliation) -> Vec<String> {
    let snap = &result.snapshot;
    let mark = |field: Field| if result.changed.contains(&field) { "*" } else { " " };

    let calories = snap.calories.map(format_kcal).unwrap_or_else(|| "-".to_string());
    let mut lines = vec![format!("{} {:<10} {:>6}", mark(Field::Calories), "calories", calories)];

    for m in Macro::ALL {
        let mut line = format!(
            "{} {:<10} {:>5} g  ({:>4} kcal)",
            mark(Field::Grams(m)),
            m.name(),
            format_grams(snap.grams.get(m)),
            format_kcal(result.breakdown.get(m)),
        );
        if mode != FormMode::Registration {
            line.push_str(&format!(
                " {} {:>4}",
                mark(Field::Percent(m)),
                format_percent(snap.percentages.get(m))
            ));
        }
        lines.push(line);
    }

    lines.push(format!("  {:<10} {:>6}", "from macros", format_kcal(result.total_kcal())));

    if let Some(budget) = result.budget.filter(|b| !b.is_resolved()) {
        lines.push(format!(
            "  percentages exceed 100% by {:.0} and nothing is left to reduce",
            budget.unresolved_excess
        ));
    }

    lines
}

/// Display a form after an edit.
pub fn display_reconciliation(mode: FormMode, result: &Reconciliation) {
    println!();
    println!("=== {} form ===", mode);
    for line in form_lines(mode, result) {
        println!("{}", line);
    }
    println!();
}

/// Display dashboard progress toward goals.
pub fn display_progress(goals: &NutritionGoals, calories: f64, grams: &MacroGrams, water_ml: f64) {
    let cal = calorie_progress(calories, goals.calorie_goal);
    let water = water_progress(water_ml, goals.water_goal_ml);
    let bars = macro_progress(grams, &goals.macro_grams());

    println!();
    println!("=== Today ===");
    println!();

    let status = match cal.status {
        CalorieStatus::OnTrack => "on track",
        CalorieStatus::Warning => "close to goal",
        CalorieStatus::Exceeded => "over goal",
    };
    println!(
        "Calories: {} / {} kcal ({:.0}%, {})",
        format_kcal(calories),
        format_kcal(goals.calorie_goal),
        cal.percent,
        status
    );
    if cal.extra > 0.0 {
        println!("  Extra: {} kcal", format_kcal(cal.extra));
    } else {
        println!("  Remaining: {} kcal", format_kcal(cal.remaining));
    }

    for m in Macro::ALL {
        println!(
            "{:<8} {:>4} / {:>4} g  [{:<20}] {:.0}%",
            m.name(),
            format_grams(grams.get(m)),
            format_grams(goals.macro_grams().get(m)),
            "#".repeat((bars.get(m) / 5.0) as usize),
            bars.get(m)
        );
    }

    let level = match water.level {
        WaterLevel::Low => "low",
        WaterLevel::Moderate => "moderate",
        WaterLevel::Good => "good",
    };
    println!(
        "Water: {:.0} / {:.0} ml ({:.0}%, {})",
        water_ml, goals.water_goal_ml, water.percent, level
    );
    println!();
}

/// Display an image-analysis result with macro-derived calories alongside.
pub fn display_analysis(analysis: &FoodAnalysis) {
    let derived = analysis.derived_calories();

    println!();
    println!("=== {} ===", analysis.display_name());
    println!("Serving: {}", analysis.serving_label());
    println!("Reported calories: {} kcal", format_kcal(analysis.calories()));

    let grams = analysis.grams();
    for m in Macro::ALL {
        println!(
            "  {:<8} {:>5} g ({} kcal)",
            m.name(),
            format_grams(grams.get(m)),
            format_kcal(derived.get(m))
        );
    }
    println!("From macros: {} kcal", format_kcal(derived.total()));

    let discrepancy = analysis.calorie_discrepancy();
    if discrepancy.abs() > AUTOFILL_TOLERANCE_KCAL {
        println!(
            "Note: reported calories differ from the macro total by {:+.0} kcal",
            discrepancy
        );
    }

    for (name, value) in [
        ("Fiber", analysis.fiber()),
        ("Sugar", analysis.sugar()),
    ] {
        if let Some(v) = value {
            println!("{}: {:.1} g", name, v);
        }
    }
    if let Some(sodium) = analysis.sodium() {
        println!("Sodium: {:.0} mg", sodium);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{reconcile, Edit, FormSnapshot};

    #[test]
    fn test_form_lines_mark_changed_fields() {
        let snap = FormSnapshot {
            grams: MacroGrams::new(25.0, 30.0, 10.0),
            ..Default::default()
        };
        let result = reconcile(FormMode::AddFood, &snap, Edit::Grams(Macro::Protein, 25.0));
        let lines = form_lines(FormMode::AddFood, &result);

        assert!(lines[0].starts_with('*'));
        assert!(lines[0].contains("310"));
        assert!(lines[1].starts_with(' '));
        assert!(lines[1].contains("32%"));
    }

    #[test]
    fn test_registration_has_no_percent_column() {
        let result = reconcile(FormMode::Registration, &FormSnapshot::default(), Edit::Refresh);
        let lines = form_lines(FormMode::Registration, &result);
        assert!(lines.iter().all(|l| !l.contains('%')));
    }
}
