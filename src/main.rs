use std::fs;
use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use macro_balance_rs::cli::{Cli, Command};
use macro_balance_rs::engine::{
    format_grams, format_kcal, parse_field, parse_optional_field, percentages_to_grams,
};
use macro_balance_rs::error::Result;
use macro_balance_rs::interface::{
    display_analysis, display_progress, display_reconciliation, prompt_edit, prompt_yes_no,
};
use macro_balance_rs::models::{AnalysisResponse, Macro, MacroGrams, MacroPercentages, NutritionGoals};
use macro_balance_rs::session::{Edit, FormController, FormMode, FormSnapshot, reconcile};
use macro_balance_rs::state::{
    load_goals_or_default, read_food_rows, reconcile_rows, save_goals, write_reconciled_csv,
};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so command output stays clean. `RUST_LOG` overrides the default level.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("macro_balance_rs={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Food {
            protein,
            carbs,
            fat,
            calories,
        } => cmd_food(&protein, &carbs, &fat, calories.as_deref()),
        Command::Split {
            calories,
            protein_pct,
            carbs_pct,
            fat_pct,
        } => cmd_split(&calories, &protein_pct, &carbs_pct, &fat_pct),
        Command::Session { form } => cmd_session(&cli.file, form.into()),
        Command::Progress {
            calories,
            protein,
            carbs,
            fat,
            water,
        } => cmd_progress(&cli.file, calories, MacroGrams::new(protein, carbs, fat), water),
        Command::Analysis { path } => cmd_analysis(&path),
        Command::Batch { input, output } => cmd_batch(&input, &output),
        Command::ResetGoals => cmd_reset_goals(&cli.file),
    }
}

/// One pass of the add-food form.
fn cmd_food(protein: &str, carbs: &str, fat: &str, calories: Option<&str>) -> Result<()> {
    let snapshot = FormSnapshot {
        calories: calories.and_then(parse_optional_field),
        grams: MacroGrams::new(parse_field(protein), parse_field(carbs), parse_field(fat)),
        ..Default::default()
    };

    let result = reconcile(FormMode::AddFood, &snapshot, Edit::Refresh);
    display_reconciliation(FormMode::AddFood, &result);
    Ok(())
}

/// Gram targets for a calorie total.
fn cmd_split(calories: &str, protein_pct: &str, carbs_pct: &str, fat_pct: &str) -> Result<()> {
    let total = parse_field(calories);
    let pct = MacroPercentages::new(
        parse_field(protein_pct),
        parse_field(carbs_pct),
        parse_field(fat_pct),
    );

    if (pct.sum() - 100.0).abs() > 1.0 {
        println!("Note: percentages sum to {:.0}%, not 100%.", pct.sum());
    }

    let grams = percentages_to_grams(total, &pct);
    println!("Split of {} kcal:", format_kcal(total));
    for m in Macro::ALL {
        println!("  {:<8} {:>3.0}% = {:>4} g", m.name(), pct.get(m), format_grams(grams.get(m)));
    }
    Ok(())
}

/// Interactive form session.
fn cmd_session(goals_path: &Path, mode: FormMode) -> Result<()> {
    let goals = load_goals_or_default(goals_path)?;

    let mut form = match mode {
        FormMode::ProfileGoals => FormController::from_goals(mode, &goals),
        _ => FormController::new(mode),
    };

    let result = form.initialize();
    display_reconciliation(mode, &result);

    println!("Fields: {}", field_names(mode));

    while let Some((field, raw)) = prompt_edit(mode)? {
        let result = form.apply_raw(field, &raw);
        display_reconciliation(mode, &result);
    }

    if mode == FormMode::AddFood {
        return Ok(());
    }

    let updated = form.to_goals(&goals);
    if updated != goals && prompt_yes_no("Save these goals?", true)? {
        save_goals(goals_path, &updated)?;
        println!("Goals saved to {}.", goals_path.display());
    }
    Ok(())
}

fn field_names(mode: FormMode) -> String {
    mode.editable_fields()
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

fn cmd_progress(goals_path: &Path, calories: f64, grams: MacroGrams, water_ml: f64) -> Result<()> {
    let goals = load_goals_or_default(goals_path)?;
    display_progress(&goals, calories, &grams, water_ml);
    Ok(())
}

fn cmd_analysis(path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)?;
    let analysis = AnalysisResponse::from_json(&content)?.into_result()?;
    display_analysis(&analysis);
    Ok(())
}

fn cmd_batch(input: &Path, output: &Path) -> Result<()> {
    let rows = read_food_rows(input)?;
    if rows.is_empty() {
        println!("No rows in {}.", input.display());
        return Ok(());
    }

    let reconciled = reconcile_rows(&rows);
    write_reconciled_csv(&reconciled, output)?;

    let total: f64 = reconciled
        .iter()
        .filter_map(|r| r.result.snapshot.calories)
        .sum();
    println!("Reconciled {} foods ({} kcal).", reconciled.len(), format_kcal(total));
    println!("Wrote {}.", output.display());
    Ok(())
}

fn cmd_reset_goals(goals_path: &Path) -> Result<()> {
    save_goals(goals_path, &NutritionGoals::default())?;
    println!("Reset goals in {} to defaults.", goals_path.display());
    Ok(())
}
