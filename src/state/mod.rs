mod export;
mod persistence;

pub use export::{read_food_rows, reconcile_rows, write_reconciled_csv, FoodRow, ReconciledRow};
pub use persistence::{load_goals, load_goals_or_default, save_goals};
