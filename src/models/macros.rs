use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::constants::{CARBS_KCAL_PER_GRAM, FAT_KCAL_PER_GRAM, PROTEIN_KCAL_PER_GRAM};

/// One of the three tracked macronutrients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Macro {
    Protein,
    Carbs,
    Fat,
}

impl Macro {
    pub const ALL: [Macro; 3] = [Macro::Protein, Macro::Carbs, Macro::Fat];

    /// Energy density in kcal per gram.
    #[inline]
    pub fn kcal_per_gram(self) -> f64 {
        match self {
            Macro::Protein => PROTEIN_KCAL_PER_GRAM,
            Macro::Carbs => CARBS_KCAL_PER_GRAM,
            Macro::Fat => FAT_KCAL_PER_GRAM,
        }
    }

    /// The two macros that are not `self`, in protein/carbs/fat order.
    pub fn others(self) -> (Macro, Macro) {
        match self {
            Macro::Protein => (Macro::Carbs, Macro::Fat),
            Macro::Carbs => (Macro::Protein, Macro::Fat),
            Macro::Fat => (Macro::Protein, Macro::Carbs),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Macro::Protein => "protein",
            Macro::Carbs => "carbs",
            Macro::Fat => "fat",
        }
    }
}

impl fmt::Display for Macro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Macro amounts in grams.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MacroGrams {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroGrams {
    pub fn new(protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            protein,
            carbs,
            fat,
        }
    }

    pub fn get(&self, m: Macro) -> f64 {
        match m {
            Macro::Protein => self.protein,
            Macro::Carbs => self.carbs,
            Macro::Fat => self.fat,
        }
    }

    pub fn set(&mut self, m: Macro, value: f64) {
        match m {
            Macro::Protein => self.protein = value,
            Macro::Carbs => self.carbs = value,
            Macro::Fat => self.fat = value,
        }
    }
}

/// Calories contributed by each macro. Always derived from [`MacroGrams`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MacroCalories {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroCalories {
    pub fn get(&self, m: Macro) -> f64 {
        match m {
            Macro::Protein => self.protein,
            Macro::Carbs => self.carbs,
            Macro::Fat => self.fat,
        }
    }

    /// Weighted total in kcal.
    #[inline]
    pub fn total(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }
}

/// Share of calories per macro, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MacroPercentages {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroPercentages {
    pub fn new(protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            protein,
            carbs,
            fat,
        }
    }

    pub fn get(&self, m: Macro) -> f64 {
        match m {
            Macro::Protein => self.protein,
            Macro::Carbs => self.carbs,
            Macro::Fat => self.fat,
        }
    }

    pub fn set(&mut self, m: Macro, value: f64) {
        match m {
            Macro::Protein => self.protein = value,
            Macro::Carbs => self.carbs = value,
            Macro::Fat => self.fat = value,
        }
    }

    #[inline]
    pub fn sum(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_others_excludes_self() {
        for m in Macro::ALL {
            let (a, b) = m.others();
            assert_ne!(a, m);
            assert_ne!(b, m);
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_kcal_per_gram() {
        assert_eq!(Macro::Protein.kcal_per_gram(), 4.0);
        assert_eq!(Macro::Carbs.kcal_per_gram(), 4.0);
        assert_eq!(Macro::Fat.kcal_per_gram(), 9.0);
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut grams = MacroGrams::default();
        grams.set(Macro::Fat, 12.0);
        assert_eq!(grams.get(Macro::Fat), 12.0);

        let mut pct = MacroPercentages::default();
        pct.set(Macro::Carbs, 40.0);
        assert_eq!(pct.get(Macro::Carbs), 40.0);
    }
}
