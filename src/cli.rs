use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::session::FormMode;

/// Keep calories, macro grams and macro percentages consistent.
#[derive(Parser, Debug)]
#[command(name = "macro_balance")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the nutrition goals JSON file.
    #[arg(short, long, env = "MACRO_BALANCE_GOALS", default_value = "goals.json")]
    pub file: PathBuf,

    /// Log engine decisions to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Which form an interactive session edits.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    /// Log a food: grams drive calories and percentages.
    AddFood,
    /// Edit stored goals: percentages and grams drive each other.
    Profile,
    /// New profile: the calorie goal drives a 30/40/30 split.
    Registration,
}

impl From<FormKind> for FormMode {
    fn from(kind: FormKind) -> Self {
        match kind {
            FormKind::AddFood => FormMode::AddFood,
            FormKind::Profile => FormMode::ProfileGoals,
            FormKind::Registration => FormMode::Registration,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute calories and percentages for a food from its macro grams.
    Food {
        #[arg(long, default_value = "")]
        protein: String,

        #[arg(long, default_value = "")]
        carbs: String,

        #[arg(long, default_value = "")]
        fat: String,

        /// Calories already entered; kept if within 10 kcal of the macro total.
        #[arg(long)]
        calories: Option<String>,
    },

    /// Split a calorie total into gram targets.
    Split {
        #[arg(long)]
        calories: String,

        #[arg(long, default_value = "30")]
        protein_pct: String,

        #[arg(long, default_value = "40")]
        carbs_pct: String,

        #[arg(long, default_value = "30")]
        fat_pct: String,
    },

    /// Edit a form field by field and watch the other fields follow.
    Session {
        #[arg(long, value_enum, default_value_t = FormKind::AddFood)]
        form: FormKind,
    },

    /// Show progress toward the stored goals.
    Progress {
        #[arg(long, default_value_t = 0.0)]
        calories: f64,

        #[arg(long, default_value_t = 0.0)]
        protein: f64,

        #[arg(long, default_value_t = 0.0)]
        carbs: f64,

        #[arg(long, default_value_t = 0.0)]
        fat: f64,

        /// Water consumed in ml.
        #[arg(long, default_value_t = 0.0)]
        water: f64,
    },

    /// Read an image-analysis JSON reply and check its numbers.
    Analysis {
        /// Path to the JSON reply.
        path: PathBuf,
    },

    /// Reconcile every row of a food CSV and write the results.
    Batch {
        #[arg(long)]
        input: PathBuf,

        #[arg(long, default_value = "reconciled.csv")]
        output: PathBuf,
    },

    /// Overwrite the goals file with the defaults.
    ResetGoals,
}
