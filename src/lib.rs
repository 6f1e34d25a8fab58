pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod progress;
pub mod session;
pub mod state;

pub use error::{MacroError, Result};
pub use models::{Macro, MacroCalories, MacroGrams, MacroPercentages};
