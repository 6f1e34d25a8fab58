use tracing::debug;

use crate::engine::{grams_to_calories, parse_calorie_goal, parse_field, parse_optional_field};
use crate::models::NutritionGoals;
use crate::session::form::{Edit, Field, FormMode, FormSnapshot};
use crate::session::reconcile::{reconcile, Reconciliation};

/// Owns the field values of one form and routes each edit through [`reconcile`].
pub struct FormController {
    mode: FormMode,
    state: FormSnapshot,
    last_edited: Option<Field>,
}

impl FormController {
    /// A blank form.
    pub fn new(mode: FormMode) -> Self {
        Self::with_snapshot(mode, FormSnapshot::default())
    }

    pub fn with_snapshot(mode: FormMode, state: FormSnapshot) -> Self {
        Self {
            mode,
            state,
            last_edited: None,
        }
    }

    /// A form prefilled with stored goals (calorie goal and gram goals).
    pub fn from_goals(mode: FormMode, goals: &NutritionGoals) -> Self {
        Self::with_snapshot(
            mode,
            FormSnapshot {
                calories: Some(goals.calorie_goal),
                grams: goals.macro_grams(),
                ..Default::default()
            },
        )
    }

    pub fn snapshot(&self) -> &FormSnapshot {
        &self.state
    }

    /// The field the user touched most recently.
    pub fn last_edited(&self) -> Option<Field> {
        self.last_edited
    }

    /// Populate derived fields for a freshly shown form.
    pub fn initialize(&mut self) -> Reconciliation {
        self.apply(Edit::Refresh)
    }

    /// Route one edit through the form.
    ///
    /// Re-entering the value already in the last edited field changes nothing:
    /// derived fields were written by that edit and are not derived again.
    pub fn apply(&mut self, edit: Edit) -> Reconciliation {
        if let Some(field) = edit.field().filter(|f| self.last_edited == Some(*f)) {
            if self.state.with_edit(edit).value(field) == self.state.value(field) {
                debug!(mode = %self.mode, %field, "repeated edit, nothing to derive");
                return Reconciliation {
                    snapshot: self.state,
                    breakdown: grams_to_calories(&self.state.grams),
                    budget: None,
                    changed: Vec::new(),
                };
            }
        }

        let result = reconcile(self.mode, &self.state, edit);
        debug!(
            mode = %self.mode,
            ?edit,
            changed = result.changed.len(),
            total_kcal = result.total_kcal(),
            "reconciled"
        );

        self.state = result.snapshot;
        if let Some(field) = edit.field() {
            self.last_edited = Some(field);
        }
        result
    }

    /// Apply raw text typed into a field.
    pub fn apply_raw(&mut self, field: Field, raw: &str) -> Reconciliation {
        let edit = match field {
            Field::Calories if self.mode == FormMode::Registration => {
                Edit::Calories(parse_calorie_goal(raw))
            }
            Field::Calories => Edit::Calories(parse_optional_field(raw)),
            Field::Grams(m) => Edit::Grams(m, parse_field(raw)),
            Field::Percent(m) => Edit::Percent(m, parse_field(raw)),
        };
        self.apply(edit)
    }

    /// Goals to submit from the current form, keeping fiber and water from `base`.
    ///
    /// Gram goals are stored as whole grams.
    pub fn to_goals(&self, base: &NutritionGoals) -> NutritionGoals {
        let mut grams = self.state.grams;
        grams.protein = grams.protein.round();
        grams.carbs = grams.carbs.round();
        grams.fat = grams.fat.round();

        let calorie_goal = self.state.calories.unwrap_or(base.calorie_goal).round();
        base.with_macros(calorie_goal, grams)
    }
}
