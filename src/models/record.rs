//! Raw per-serving nutrition record
//!
//! The label data a caller hands to the normalizer.

use serde::{Deserialize, Serialize};

/// A labelled serving size, e.g. `30 g` or `2 tbsp (30g)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServingSize {
    pub amount: f64,
    #[serde(default = "default_serving_unit")]
    pub unit: String,
}

fn default_serving_unit() -> String {
    "g".to_string()
}

impl ServingSize {
    pub fn new(amount: f64, unit: impl Into<String>) -> Self {
        Self {
            amount,
            unit: unit.into(),
        }
    }

    /// Serving measured in grams
    pub fn grams(amount: f64) -> Self {
        Self::new(amount, "g")
    }
}

/// Per-serving nutrition facts as printed on a label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNutrientRecord {
    pub serving: ServingSize,
    pub calories: f64,      // kcal
    pub saturated_fat: f64, // grams
    pub total_sugars: f64,  // grams
    pub sodium: f64,        // milligrams
    pub protein: f64,       // grams
    pub dietary_fiber: f64, // grams
    /// Fruit/vegetable/legume/nut content, 0-100. Absent on most labels.
    #[serde(default)]
    pub fruit_veg_percent: f64,
    #[serde(default)]
    pub is_cheese: bool,
}

impl RawNutrientRecord {
    /// Build a record from label values; missing optional facts become 0 / false
    #[allow(clippy::too_many_arguments)]
    pub fn from_label(
        serving: ServingSize,
        calories: f64,
        saturated_fat: f64,
        total_sugars: f64,
        sodium: f64,
        protein: f64,
        dietary_fiber: f64,
        fruit_veg_percent: Option<f64>,
        is_cheese: Option<bool>,
    ) -> Self {
        Self {
            serving,
            calories,
            saturated_fat,
            total_sugars,
            sodium,
            protein,
            dietary_fiber,
            fruit_veg_percent: fruit_veg_percent.unwrap_or(0.0),
            is_cheese: is_cheese.unwrap_or(false),
        }
    }

    /// Same facts with a different serving size
    pub fn with_serving(&self, serving: ServingSize) -> Self {
        Self {
            serving,
            ..self.clone()
        }
    }
}
