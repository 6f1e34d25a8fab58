use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::models::NutritionGoals;

/// Load goals from a JSON file.
pub fn load_goals<P: AsRef<Path>>(path: P) -> Result<NutritionGoals> {
    let content = fs::read_to_string(path)?;
    let goals: NutritionGoals = serde_json::from_str(&content)?;
    Ok(goals)
}

/// Load goals, falling back to the defaults when the file does not exist yet.
pub fn load_goals_or_default<P: AsRef<Path>>(path: P) -> Result<NutritionGoals> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "goals file missing, using defaults");
        return Ok(NutritionGoals::default());
    }
    load_goals(path)
}

/// Save goals to a JSON file.
pub fn save_goals<P: AsRef<Path>>(path: P, goals: &NutritionGoals) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(goals)?;
    fs::write(path, json)?;
    info!(path = %path.display(), calorie_goal = goals.calorie_goal, "saved goals");
    Ok(())
}
