//! Canonical per-100g nutrient vector
//!
//! The units the scoring tables are expressed in.

use serde::{Deserialize, Serialize};

/// Nutrients per 100 g (or 100 ml)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanonicalNutrients {
    pub energy_kj: f64,
    pub saturated_fat_g: f64,
    pub sugars_g: f64,
    /// Sodium in grams, reported as salt per label convention
    pub salt_g: f64,
    pub protein_g: f64,
    pub fiber_g: f64,
    pub fruit_veg_percent: f64,
    #[serde(default)]
    pub is_cheese: bool,
}

impl CanonicalNutrients {
    /// True when every quantity is a finite number
    pub fn is_finite(&self) -> bool {
        [
            self.energy_kj,
            self.saturated_fat_g,
            self.sugars_g,
            self.salt_g,
            self.protein_g,
            self.fiber_g,
            self.fruit_veg_percent,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}
