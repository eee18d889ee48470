//! Nutri-Score threshold profiles
//!
//! A profile is the full set of tables for one food category. Only the 2022
//! "main foods" profile ships; beverages, fats/oils/nuts/seeds and cheese
//! variants would be further instances of [`NutrientProfile`].

use std::sync::LazyLock;

use serde::Serialize;

use super::thresholds::{FruitVegBands, ThresholdTable};

// ============================================================================
// Main foods (2022)
// ============================================================================

/// kJ per 100 g
const ENERGY_THRESHOLDS: [f64; 10] = [
    335.0, 670.0, 1005.0, 1340.0, 1675.0, 2010.0, 2345.0, 2680.0, 3015.0, 3350.0,
];
/// g per 100 g
const SATURATES_THRESHOLDS: [f64; 10] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// g per 100 g
const SUGARS_THRESHOLDS: [f64; 15] = [
    3.4, 6.8, 10.0, 14.0, 17.0, 20.0, 24.0, 27.0, 31.0, 34.0, 37.0, 41.0, 44.0, 48.0, 51.0,
];
const SALT_START: f64 = 0.12;
const SALT_STEP: f64 = 0.225;
const SALT_STEPS: usize = 20;
/// g per 100 g
const PROTEIN_THRESHOLDS: [f64; 7] = [2.4, 4.8, 7.2, 9.6, 12.0, 14.4, 16.8];
/// g per 100 g
const FIBRE_THRESHOLDS: [f64; 5] = [3.0, 4.1, 5.2, 6.3, 7.4];
/// percent, inclusive lower bounds
const FRUIT_VEG_BANDS: [f64; 5] = [40.0, 60.0, 80.0, 90.0, 100.0];

/// A-points at or above which protein stops counting (non-cheese)
const PROTEIN_EXCLUSION_THRESHOLD: i32 = 11;

/// The 2022 main foods profile
pub static MAIN_FOODS: LazyLock<NutrientProfile> = LazyLock::new(NutrientProfile::main_foods);

/// Threshold tables for one Nutri-Score food category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientProfile {
    pub name: &'static str,
    pub energy: ThresholdTable,
    pub saturated_fat: ThresholdTable,
    pub sugars: ThresholdTable,
    pub salt: ThresholdTable,
    pub protein: ThresholdTable,
    pub fiber: ThresholdTable,
    pub fruit_veg: FruitVegBands,
    pub protein_exclusion_threshold: i32,
}

impl NutrientProfile {
    fn main_foods() -> Self {
        Self {
            name: "main_foods_2022",
            energy: ThresholdTable::new(ENERGY_THRESHOLDS),
            saturated_fat: ThresholdTable::new(SATURATES_THRESHOLDS),
            sugars: ThresholdTable::new(SUGARS_THRESHOLDS),
            salt: ThresholdTable::arithmetic(SALT_START, SALT_STEP, SALT_STEPS),
            protein: ThresholdTable::new(PROTEIN_THRESHOLDS),
            fiber: ThresholdTable::new(FIBRE_THRESHOLDS),
            fruit_veg: FruitVegBands::new(FRUIT_VEG_BANDS),
            protein_exclusion_threshold: PROTEIN_EXCLUSION_THRESHOLD,
        }
    }

    /// Highest possible A-points
    pub fn max_unfavorable(&self) -> i32 {
        self.energy.max_points()
            + self.saturated_fat.max_points()
            + self.sugars.max_points()
            + self.salt.max_points()
    }

    /// Highest possible C-points
    pub fn max_favorable(&self) -> i32 {
        self.protein.max_points() + self.fiber.max_points() + self.fruit_veg.max_points()
    }
}
