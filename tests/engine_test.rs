use assert_float_eq::assert_float_absolute_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use macro_balance_rs::engine::{
    apply_percentage_edit, calories_to_percentages, enforce_percentage_budget, grams_to_calories,
    parse_field, percentages_to_grams, DEFAULT_SPLIT,
};
use macro_balance_rs::{Macro, MacroGrams, MacroPercentages};

fn random_grams(rng: &mut StdRng) -> MacroGrams {
    MacroGrams::new(
        rng.gen_range(0.0..300.0),
        rng.gen_range(0.0..500.0),
        rng.gen_range(0.0..150.0),
    )
}

#[test]
fn test_food_example() {
    let cals = grams_to_calories(&MacroGrams::new(25.0, 30.0, 10.0));
    assert_eq!(cals.protein, 100.0);
    assert_eq!(cals.carbs, 120.0);
    assert_eq!(cals.fat, 90.0);
    assert_eq!(cals.total(), 310.0);
    assert_eq!(calories_to_percentages(&cals), MacroPercentages::new(32.0, 39.0, 29.0));
}

#[test]
fn test_default_split_of_2000() {
    let grams = percentages_to_grams(2000.0, &DEFAULT_SPLIT);
    assert_eq!(grams, MacroGrams::new(150.0, 200.0, 67.0));
}

#[test]
fn test_zero_total_gives_zero_percentages() {
    let cals = grams_to_calories(&MacroGrams::default());
    assert_eq!(calories_to_percentages(&cals), MacroPercentages::default());
}

#[test]
fn test_percentages_sum_near_100() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..2000 {
        let grams = random_grams(&mut rng);
        let cals = grams_to_calories(&grams);
        if cals.total() <= 0.0 {
            continue;
        }

        let sum = calories_to_percentages(&cals).sum();
        assert!((99.0..=101.0).contains(&sum), "{:?} sums to {}", grams, sum);
    }
}

#[test]
fn test_grams_survive_percent_roundtrip() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..2000 {
        let grams = MacroGrams::new(
            rng.gen_range(0..300) as f64,
            rng.gen_range(0..500) as f64,
            rng.gen_range(0..150) as f64,
        );
        let cals = grams_to_calories(&grams);
        let total = cals.total();
        let back = percentages_to_grams(total, &calories_to_percentages(&cals));

        for m in Macro::ALL {
            // Each percentage is rounded to a whole number, which costs up to
            // half a percent of the total in that macro's grams.
            let tolerance = total * 0.005 / m.kcal_per_gram() + 1.0;
            assert_float_absolute_eq!(back.get(m), grams.get(m), tolerance);
        }
    }
}

#[test]
fn test_budget_example() {
    let adj = enforce_percentage_budget(Macro::Protein, 60.0, 40.0, 30.0);
    assert_eq!((adj.other1, adj.other2), (23.0, 17.0));
    assert!(adj.is_resolved());
}

#[test]
fn test_budget_properties() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..2000 {
        let current = MacroPercentages::new(
            rng.gen_range(0..=100) as f64,
            rng.gen_range(0..=100) as f64,
            rng.gen_range(0..=100) as f64,
        );
        let changed = Macro::ALL[rng.gen_range(0..3)];
        let new_value = rng.gen_range(0..=100) as f64;
        let (first, second) = changed.others();

        let (next, adj) = apply_percentage_edit(&current, changed, new_value);

        assert_eq!(next.get(changed), new_value);
        for m in [first, second] {
            assert!(next.get(m) >= 0.0);
            assert!(next.get(m) <= current.get(m));
        }

        if current.get(first) + current.get(second) > 0.0 {
            assert!(adj.is_resolved());
            assert!(next.sum() <= 101.0, "{:?} -> {:?}", current, next);
        } else {
            assert_eq!(adj.unresolved_excess, (new_value - 100.0).max(0.0));
        }
    }
}

#[test]
fn test_budget_leaves_sums_under_100_alone() {
    let (next, adj) = apply_percentage_edit(&DEFAULT_SPLIT, Macro::Fat, 20.0);
    assert_eq!(next, MacroPercentages::new(30.0, 40.0, 20.0));
    assert_eq!(adj.unresolved_excess, 0.0);
}

#[test]
fn test_budget_with_others_empty_reports_excess() {
    let current = MacroPercentages::new(0.0, 0.0, 0.0);
    let (next, adj) = apply_percentage_edit(&current, Macro::Carbs, 120.0);
    assert_eq!(next.carbs, 120.0);
    assert_float_absolute_eq!(adj.unresolved_excess, 20.0, 1e-9);
}

#[test]
fn test_parse_boundary() {
    assert_eq!(parse_field("25g"), 25.0);
    assert_eq!(parse_field(" 12.5 "), 12.5);
    assert_eq!(parse_field("-4"), 0.0);
    assert_eq!(parse_field("abc"), 0.0);
    assert_eq!(parse_field(""), 0.0);
}

#[test]
fn test_zero_goal_gives_zero_grams() {
    assert_eq!(percentages_to_grams(0.0, &DEFAULT_SPLIT), MacroGrams::default());
    assert_eq!(percentages_to_grams(-500.0, &DEFAULT_SPLIT), MacroGrams::default());
}
