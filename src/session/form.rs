use std::fmt;

use crate::engine::sanitize;
use crate::models::{Macro, MacroGrams, MacroPercentages};

/// Which form is being edited, and so which field is the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormMode {
    /// Food logging: grams drive calories and percentages.
    AddFood,
    /// Profile goals: percentages and grams drive each other through the calorie goal.
    ProfileGoals,
    /// Registration: the calorie goal drives grams through the default split.
    Registration,
}

impl FormMode {
    pub fn name(self) -> &'static str {
        match self {
            FormMode::AddFood => "add-food",
            FormMode::ProfileGoals => "profile",
            FormMode::Registration => "registration",
        }
    }

    /// Fields the user can type into on this form.
    pub fn editable_fields(self) -> Vec<Field> {
        let mut fields = vec![Field::Calories];
        fields.extend(Macro::ALL.map(Field::Grams));
        if self == FormMode::ProfileGoals {
            fields.extend(Macro::ALL.map(Field::Percent));
        }
        fields
    }
}

impl fmt::Display for FormMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One input on a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Calories,
    Grams(Macro),
    Percent(Macro),
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Calories,
        Field::Grams(Macro::Protein),
        Field::Grams(Macro::Carbs),
        Field::Grams(Macro::Fat),
        Field::Percent(Macro::Protein),
        Field::Percent(Macro::Carbs),
        Field::Percent(Macro::Fat),
    ];

    /// Short name as typed in an interactive session (e.g. `protein%`).
    pub fn label(self) -> String {
        match self {
            Field::Calories => "calories".to_string(),
            Field::Grams(m) => m.name().to_string(),
            Field::Percent(m) => format!("{}%", m.name()),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// A single user edit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edit {
    /// Initial population when the form is first shown.
    Refresh,
    /// Calorie field changed; `None` means it was cleared.
    Calories(Option<f64>),
    Grams(Macro, f64),
    Percent(Macro, f64),
}

impl Edit {
    /// The field this edit writes, if any.
    pub fn field(&self) -> Option<Field> {
        match *self {
            Edit::Refresh => None,
            Edit::Calories(_) => Some(Field::Calories),
            Edit::Grams(m, _) => Some(Field::Grams(m)),
            Edit::Percent(m, _) => Some(Field::Percent(m)),
        }
    }
}

/// Current values of every numeric field on a form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FormSnapshot {
    /// Calorie total or goal. `None` when the field is blank.
    pub calories: Option<f64>,
    pub grams: MacroGrams,
    pub percentages: MacroPercentages,
}

impl FormSnapshot {
    pub fn value(&self, field: Field) -> Option<f64> {
        match field {
            Field::Calories => self.calories,
            Field::Grams(m) => Some(self.grams.get(m)),
            Field::Percent(m) => Some(self.percentages.get(m)),
        }
    }

    /// Copy with the edited field set, normalized at the boundary.
    pub fn with_edit(&self, edit: Edit) -> Self {
        let mut next = *self;
        match edit {
            Edit::Refresh => {}
            Edit::Calories(value) => next.calories = value.map(sanitize),
            Edit::Grams(m, value) => next.grams.set(m, sanitize(value)),
            Edit::Percent(m, value) => next.percentages.set(m, sanitize(value)),
        }
        next
    }

    /// Fields whose value differs from `other`, skipping `skip`.
    pub fn changed_since(&self, other: &FormSnapshot, skip: Option<Field>) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| Some(*f) != skip)
            .filter(|f| self.value(*f) != other.value(*f))
            .collect()
    }
}
