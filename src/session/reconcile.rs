use tracing::debug;

use crate::engine::{
    apply_percentage_edit, calories_to_percentages, grams_to_calories, percentages_of_goal,
    percentages_to_grams, BudgetAdjustment, AUTOFILL_TOLERANCE_KCAL, DEFAULT_CALORIE_GOAL,
    DEFAULT_SPLIT,
};
use crate::models::MacroCalories;
use crate::session::form::{Edit, Field, FormMode, FormSnapshot};

/// Result of reconciling one edit.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    /// Every field after propagation.
    pub snapshot: FormSnapshot,

    /// Calories per macro implied by the grams, for the calculator panel.
    pub breakdown: MacroCalories,

    /// Present when a percentage edit went through budget enforcement.
    pub budget: Option<BudgetAdjustment>,

    /// Fields the UI must rewrite. Never contains the edited field.
    pub changed: Vec<Field>,
}

impl Reconciliation {
    pub fn total_kcal(&self) -> f64 {
        self.breakdown.total()
    }
}

/// Propagate one edit through a form.
///
/// Pure: the same mode, snapshot and edit always give the same result. Only
/// fields other than the edited one are derived, so a propagated value never
/// feeds back into the field that caused it.
pub fn reconcile(mode: FormMode, current: &FormSnapshot, edit: Edit) -> Reconciliation {
    let mut next = current.with_edit(edit);
    let mut budget = None;

    match (mode, edit) {
        (FormMode::AddFood, Edit::Refresh | Edit::Grams(..)) => fill_from_grams(&mut next),

        (FormMode::ProfileGoals, Edit::Percent(m, _)) => {
            let value = next.percentages.get(m);
            let (percentages, adjustment) = apply_percentage_edit(&next.percentages, m, value);
            next.percentages = percentages;
            next.grams = percentages_to_grams(next.calories.unwrap_or(0.0), &next.percentages);
            budget = Some(adjustment);
        }
        (FormMode::ProfileGoals, Edit::Refresh | Edit::Grams(..)) => {
            let cals = grams_to_calories(&next.grams);
            next.percentages = percentages_of_goal(&cals, next.calories.unwrap_or(0.0));
        }
        (FormMode::ProfileGoals, Edit::Calories(goal)) => {
            next.grams = percentages_to_grams(goal.unwrap_or(0.0), &next.percentages);
        }

        (FormMode::Registration, Edit::Refresh) => {
            if next.calories.is_none() {
                next.calories = Some(DEFAULT_CALORIE_GOAL);
                apply_default_split(&mut next);
            }
        }
        (FormMode::Registration, Edit::Calories(_)) => {
            apply_default_split(&mut next);
            autofill_if_empty(&mut next);
        }
        (FormMode::Registration, Edit::Grams(..)) => autofill_if_empty(&mut next),

        (mode, edit) => debug!(%mode, ?edit, "edit has no derived fields on this form"),
    }

    let changed = next.changed_since(current, edit.field());
    Reconciliation {
        snapshot: next,
        breakdown: grams_to_calories(&next.grams),
        budget,
        changed,
    }
}

/// Grams are authoritative: derive percentages and, within tolerance, the calorie field.
fn fill_from_grams(form: &mut FormSnapshot) {
    let cals = grams_to_calories(&form.grams);
    let total = cals.total();

    let overwrite = match form.calories {
        None => true,
        Some(entered) => (entered - total).abs() > AUTOFILL_TOLERANCE_KCAL,
    };
    if overwrite {
        form.calories = Some(total.round());
    }

    form.percentages = calories_to_percentages(&cals);
}

/// Split the calorie goal 30/40/30. A blank or zero goal splits the default goal.
fn apply_default_split(form: &mut FormSnapshot) {
    let base = form
        .calories
        .map(f64::trunc)
        .filter(|goal| *goal > 0.0)
        .unwrap_or(DEFAULT_CALORIE_GOAL);
    form.grams = percentages_to_grams(base, &DEFAULT_SPLIT);
}

fn autofill_if_empty(form: &mut FormSnapshot) {
    if form.calories.is_none() {
        form.calories = Some(grams_to_calories(&form.grams).total().round());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Macro, MacroGrams, MacroPercentages};

    #[test]
    fn test_add_food_fills_empty_calories() {
        let snap = FormSnapshot {
            grams: MacroGrams::new(25.0, 30.0, 0.0),
            ..Default::default()
        };
        let result = reconcile(FormMode::AddFood, &snap, Edit::Grams(Macro::Fat, 10.0));

        assert_eq!(result.snapshot.calories, Some(310.0));
        assert_eq!(result.snapshot.percentages, MacroPercentages::new(32.0, 39.0, 29.0));
        assert_eq!(result.total_kcal(), 310.0);
        assert!(!result.changed.contains(&Field::Grams(Macro::Fat)));
        assert!(result.changed.contains(&Field::Calories));
    }

    #[test]
    fn test_add_food_keeps_override_within_tolerance() {
        let snap = FormSnapshot {
            calories: Some(305.0),
            grams: MacroGrams::new(25.0, 30.0, 0.0),
            ..Default::default()
        };
        let result = reconcile(FormMode::AddFood, &snap, Edit::Grams(Macro::Fat, 10.0));
        assert_eq!(result.snapshot.calories, Some(305.0));
        assert!(!result.changed.contains(&Field::Calories));
    }

    #[test]
    fn test_add_food_overwrites_beyond_tolerance() {
        let snap = FormSnapshot {
            calories: Some(500.0),
            grams: MacroGrams::new(25.0, 30.0, 0.0),
            ..Default::default()
        };
        let result = reconcile(FormMode::AddFood, &snap, Edit::Grams(Macro::Fat, 10.0));
        assert_eq!(result.snapshot.calories, Some(310.0));
    }

    #[test]
    fn test_add_food_calorie_edit_is_manual_override() {
        let snap = FormSnapshot {
            calories: Some(310.0),
            grams: MacroGrams::new(25.0, 30.0, 10.0),
            percentages: MacroPercentages::new(32.0, 39.0, 29.0),
        };
        let result = reconcile(FormMode::AddFood, &snap, Edit::Calories(Some(400.0)));
        assert_eq!(result.snapshot.calories, Some(400.0));
        assert_eq!(result.snapshot.grams, snap.grams);
        assert!(result.changed.is_empty());
    }

    #[test]
    fn test_profile_percent_edit_enforces_budget_and_sets_grams() {
        let snap = FormSnapshot {
            calories: Some(2000.0),
            grams: MacroGrams::new(250.0, 200.0, 67.0),
            percentages: MacroPercentages::new(50.0, 40.0, 30.0),
        };
        let result = reconcile(FormMode::ProfileGoals, &snap, Edit::Percent(Macro::Protein, 60.0));

        assert_eq!(result.snapshot.percentages, MacroPercentages::new(60.0, 23.0, 17.0));
        // 2000 * 0.6 / 4, 2000 * 0.23 / 4, 2000 * 0.17 / 9
        assert_eq!(result.snapshot.grams, MacroGrams::new(300.0, 115.0, 38.0));
        assert!(result.budget.is_some());
        assert!(!result.changed.contains(&Field::Percent(Macro::Protein)));
    }

    #[test]
    fn test_profile_percent_edit_rejects_bad_values() {
        let snap = FormSnapshot {
            calories: Some(2000.0),
            grams: MacroGrams::new(150.0, 200.0, 67.0),
            percentages: MacroPercentages::new(30.0, 40.0, 30.0),
        };

        for bad in [-10.0, f64::NAN, f64::NEG_INFINITY, f64::INFINITY] {
            let result = reconcile(FormMode::ProfileGoals, &snap, Edit::Percent(Macro::Protein, bad));
            let pct = result.snapshot.percentages;

            assert_eq!(pct, MacroPercentages::new(0.0, 40.0, 30.0));
            assert_eq!(result.snapshot.grams, MacroGrams::new(0.0, 200.0, 67.0));
        }
    }

    #[test]
    fn test_profile_gram_edit_updates_percentages_only() {
        let snap = FormSnapshot {
            calories: Some(2000.0),
            grams: MacroGrams::new(150.0, 200.0, 67.0),
            percentages: MacroPercentages::new(30.0, 40.0, 30.0),
        };
        let result = reconcile(FormMode::ProfileGoals, &snap, Edit::Grams(Macro::Protein, 200.0));

        assert_eq!(result.snapshot.grams.protein, 200.0);
        assert_eq!(result.snapshot.percentages.protein, 40.0);
        assert_eq!(result.snapshot.calories, Some(2000.0));
        assert_eq!(result.changed, vec![Field::Percent(Macro::Protein)]);
    }

    #[test]
    fn test_profile_calorie_edit_rescales_grams() {
        let snap = FormSnapshot {
            calories: Some(2000.0),
            grams: MacroGrams::new(150.0, 200.0, 67.0),
            percentages: MacroPercentages::new(30.0, 40.0, 30.0),
        };
        let result = reconcile(FormMode::ProfileGoals, &snap, Edit::Calories(Some(2400.0)));
        assert_eq!(result.snapshot.grams, MacroGrams::new(180.0, 240.0, 80.0));
        assert_eq!(result.snapshot.percentages, snap.percentages);
    }

    #[test]
    fn test_registration_refresh_populates_default() {
        let result = reconcile(FormMode::Registration, &FormSnapshot::default(), Edit::Refresh);
        assert_eq!(result.snapshot.calories, Some(2000.0));
        assert_eq!(result.snapshot.grams, MacroGrams::new(150.0, 200.0, 67.0));
    }

    #[test]
    fn test_registration_zero_goal_uses_default_split() {
        let snap = FormSnapshot {
            calories: Some(1800.0),
            ..Default::default()
        };
        let result = reconcile(FormMode::Registration, &snap, Edit::Calories(Some(0.0)));
        assert_eq!(result.snapshot.calories, Some(0.0));
        assert_eq!(result.snapshot.grams, MacroGrams::new(150.0, 200.0, 67.0));
    }

    #[test]
    fn test_registration_cleared_goal_autofills_total() {
        let snap = FormSnapshot {
            calories: Some(1800.0),
            ..Default::default()
        };
        let result = reconcile(FormMode::Registration, &snap, Edit::Calories(None));
        // 150*4 + 200*4 + 67*9
        assert_eq!(result.snapshot.calories, Some(2003.0));
    }

    #[test]
    fn test_unsupported_edit_only_stores_value() {
        let snap = FormSnapshot {
            calories: Some(310.0),
            grams: MacroGrams::new(25.0, 30.0, 10.0),
            percentages: MacroPercentages::new(32.0, 39.0, 29.0),
        };
        let result = reconcile(FormMode::AddFood, &snap, Edit::Percent(Macro::Fat, 50.0));
        assert_eq!(result.snapshot.percentages.fat, 50.0);
        assert_eq!(result.snapshot.grams, snap.grams);
        assert!(result.changed.is_empty());
    }
}
