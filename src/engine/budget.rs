use tracing::warn;

use crate::engine::constants::PERCENT_BUDGET;
use crate::engine::conversions::sanitize;
use crate::models::{Macro, MacroPercentages};

/// Outcome of keeping three macro percentages within 100%.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetAdjustment {
    /// Adjusted value of the first of the other two fields.
    pub other1: f64,

    /// Adjusted value of the second of the other two fields.
    pub other2: f64,

    /// Excess left over 100% because both other fields were already 0.
    pub unresolved_excess: f64,
}

impl BudgetAdjustment {
    pub fn is_resolved(&self) -> bool {
        self.unresolved_excess <= 0.0
    }
}

/// Absorb any excess over 100% into the two fields that were not edited.
///
/// Each of the others gives up a share of the excess proportional to its own
/// value, then is rounded and floored at 0. The edited field is never reduced.
/// When both others are already 0 nothing can move and the excess is reported
/// back unresolved. Negative or non-finite inputs count as 0.
pub fn enforce_percentage_budget(
    changed: Macro,
    new_value: f64,
    other1: f64,
    other2: f64,
) -> BudgetAdjustment {
    let (new_value, other1, other2) = (sanitize(new_value), sanitize(other1), sanitize(other2));
    let excess = (new_value + other1 + other2) - PERCENT_BUDGET;
    if excess <= 0.0 {
        return BudgetAdjustment {
            other1,
            other2,
            unresolved_excess: 0.0,
        };
    }

    let other_total = other1 + other2;
    if other_total <= 0.0 {
        warn!(
            field = %changed,
            value = new_value,
            excess,
            "percentage budget exceeded with nothing left to reduce"
        );
        return BudgetAdjustment {
            other1,
            other2,
            unresolved_excess: excess,
        };
    }

    let reduce = |value: f64| (value - excess * (value / other_total)).round().max(0.0);
    BudgetAdjustment {
        other1: reduce(other1),
        other2: reduce(other2),
        unresolved_excess: 0.0,
    }
}

/// Apply a percentage edit to a full set of percentages, enforcing the budget.
pub fn apply_percentage_edit(
    current: &MacroPercentages,
    changed: Macro,
    new_value: f64,
) -> (MacroPercentages, BudgetAdjustment) {
    let new_value = sanitize(new_value);
    let (first, second) = changed.others();
    let adjustment =
        enforce_percentage_budget(changed, new_value, current.get(first), current.get(second));

    let mut next = *current;
    next.set(changed, new_value);
    next.set(first, adjustment.other1);
    next.set(second, adjustment.other2);
    (next, adjustment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proportional_reduction() {
        // 60 + 40 + 30 = 130, excess 30 split 40:30
        let adj = enforce_percentage_budget(Macro::Protein, 60.0, 40.0, 30.0);
        assert_eq!(adj.other1, 23.0);
        assert_eq!(adj.other2, 17.0);
        assert!(adj.is_resolved());
    }

    #[test]
    fn test_bad_edit_values_count_as_zero() {
        let current = MacroPercentages::new(30.0, 40.0, 30.0);
        for bad in [-10.0, f64::NAN, f64::INFINITY] {
            let (next, adj) = apply_percentage_edit(&current, Macro::Protein, bad);
            assert_eq!(next, MacroPercentages::new(0.0, 40.0, 30.0));
            assert!(adj.is_resolved());
        }
    }

    #[test]
    fn test_within_budget_unchanged() {
        let adj = enforce_percentage_budget(Macro::Carbs, 40.0, 30.5, 29.5);
        assert_eq!(adj.other1, 30.5);
        assert_eq!(adj.other2, 29.5);
    }

    #[test]
    fn test_both_others_zero_unresolved() {
        let adj = enforce_percentage_budget(Macro::Fat, 120.0, 0.0, 0.0);
        assert_eq!(adj.other1, 0.0);
        assert_eq!(adj.other2, 0.0);
        assert_eq!(adj.unresolved_excess, 20.0);
        assert!(!adj.is_resolved());
    }

    #[test]
    fn test_floor_at_zero() {
        // excess 95 against 5 + 0: the 5 would go to -90
        let adj = enforce_percentage_budget(Macro::Protein, 190.0, 5.0, 0.0);
        assert_eq!(adj.other1, 0.0);
        assert_eq!(adj.other2, 0.0);
    }

    #[test]
    fn test_apply_percentage_edit_places_values() {
        let current = MacroPercentages::new(30.0, 40.0, 30.0);
        let (next, _) = apply_percentage_edit(&current, Macro::Fat, 50.0);
        assert_eq!(next.fat, 50.0);
        // excess 20 split 30:40 between protein and carbs
        assert_eq!(next.protein, 21.0);
        assert_eq!(next.carbs, 29.0);
    }
}
