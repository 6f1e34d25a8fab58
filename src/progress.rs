//! Progress toward daily goals as shown on the dashboard.

use crate::engine::constants::{
    CALORIE_WARNING_PCT, PROGRESS_CAP_PCT, WATER_LOW_PCT, WATER_MODERATE_PCT,
};
use crate::engine::sanitize;
use crate::models::{Macro, MacroGrams};

/// Calorie ring state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalorieStatus {
    OnTrack,
    Warning,
    Exceeded,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalorieProgress {
    /// Consumed as a percent of goal, not capped.
    pub percent: f64,

    /// Percent used to draw the ring, capped at 100.
    pub display_percent: f64,

    /// kcal left before the goal (0 once over).
    pub remaining: f64,

    /// kcal over the goal (0 while under).
    pub extra: f64,

    pub status: CalorieStatus,
}

/// Water level band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterLevel {
    Low,
    Moderate,
    Good,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterProgress {
    /// Percent of goal, capped at 100.
    pub percent: f64,
    pub level: WaterLevel,
}

/// Per-macro progress bar widths, each capped at 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroProgress {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroProgress {
    pub fn get(&self, m: Macro) -> f64 {
        match m {
            Macro::Protein => self.protein,
            Macro::Carbs => self.carbs,
            Macro::Fat => self.fat,
        }
    }
}

/// Rounded percent of goal. A zero goal counts as no progress.
fn percent_of(consumed: f64, goal: f64) -> f64 {
    let goal = sanitize(goal);
    if goal == 0.0 {
        return 0.0;
    }
    ((sanitize(consumed) / goal) * 100.0).round()
}

pub fn calorie_progress(consumed: f64, goal: f64) -> CalorieProgress {
    let consumed = sanitize(consumed);
    let goal = sanitize(goal);
    let percent = percent_of(consumed, goal);

    let status = if percent > PROGRESS_CAP_PCT {
        CalorieStatus::Exceeded
    } else if percent > CALORIE_WARNING_PCT {
        CalorieStatus::Warning
    } else {
        CalorieStatus::OnTrack
    };

    CalorieProgress {
        percent,
        display_percent: percent.min(PROGRESS_CAP_PCT),
        remaining: (goal - consumed).max(0.0),
        extra: (consumed - goal).max(0.0),
        status,
    }
}

pub fn water_progress(consumed_ml: f64, goal_ml: f64) -> WaterProgress {
    let percent = percent_of(consumed_ml, goal_ml).min(PROGRESS_CAP_PCT);
    let level = if percent < WATER_LOW_PCT {
        WaterLevel::Low
    } else if percent < WATER_MODERATE_PCT {
        WaterLevel::Moderate
    } else {
        WaterLevel::Good
    };
    WaterProgress { percent, level }
}

pub fn macro_progress(consumed: &MacroGrams, goals: &MacroGrams) -> MacroProgress {
    let bar = |m: Macro| percent_of(consumed.get(m), goals.get(m)).min(PROGRESS_CAP_PCT);
    MacroProgress {
        protein: bar(Macro::Protein),
        carbs: bar(Macro::Carbs),
        fat: bar(Macro::Fat),
    }
}
