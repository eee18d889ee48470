//! Serving units and conversion constants
//!
//! Recognizes the mass and volume units found on nutrition labels.

use serde::{Deserialize, Serialize};

/// Basis a resolved serving is expressed in. Grams and millilitres are
/// scored identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseUnitType {
    Weight,
    Volume,
}

impl BaseUnitType {
    pub fn canonical_unit(&self) -> &'static str {
        match self {
            BaseUnitType::Weight => "g",
            BaseUnitType::Volume => "ml",
        }
    }
}

/// Category of a unit string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCategory {
    Weight,
    Volume,
    /// each, piece, item...
    Count,
    /// scoop, slice, bar... only usable with a gram/ml annotation
    Custom,
}

/// A unit string split into its base unit and optional annotation
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedUnit {
    /// "tbsp" from "tbsp (15g)"
    pub base_unit: String,
    /// 15.0 from "(15g)"
    pub gram_weight: Option<f64>,
    /// 240.0 from "(240ml)"
    pub ml_amount: Option<f64>,
    pub category: UnitCategory,
}

// ============================================================================
// Conversion constants
// ============================================================================

pub const G_PER_MG: f64 = 0.001;
pub const G_PER_KG: f64 = 1000.0;
pub const G_PER_OZ: f64 = 28.3495;
pub const G_PER_LB: f64 = 453.592;

pub const ML_PER_TSP: f64 = 4.92892;
pub const ML_PER_TBSP: f64 = 14.7868;
pub const ML_PER_FL_OZ: f64 = 29.5735;
pub const ML_PER_CUP: f64 = 236.588;
pub const ML_PER_LITER: f64 = 1000.0;

const WEIGHT_UNITS: &[(&[&str], f64)] = &[
    (&["g", "gram", "grams", "gramme", "grammes"], 1.0),
    (&["mg", "milligram", "milligrams"], G_PER_MG),
    (&["kg", "kilogram", "kilograms"], G_PER_KG),
    (&["oz", "ounce", "ounces"], G_PER_OZ),
    (&["lb", "lbs", "pound", "pounds"], G_PER_LB),
];

const VOLUME_UNITS: &[(&[&str], f64)] = &[
    (&["ml", "milliliter", "milliliters", "millilitre", "millilitres"], 1.0),
    (&["l", "liter", "liters", "litre", "litres"], ML_PER_LITER),
    (&["tsp", "teaspoon", "teaspoons"], ML_PER_TSP),
    (&["tbsp", "tablespoon", "tablespoons"], ML_PER_TBSP),
    (&["fl oz", "floz", "fluid ounce", "fluid ounces"], ML_PER_FL_OZ),
    (&["cup", "cups"], ML_PER_CUP),
];

const COUNT_UNITS: &[&str] = &["each", "piece", "pieces", "item", "items", "count", "unit", "units"];

fn lookup(table: &[(&[&str], f64)], unit: &str) -> Option<f64> {
    let key = unit.trim().to_lowercase();
    table
        .iter()
        .find(|(aliases, _)| aliases.contains(&key.as_str()))
        .map(|(_, factor)| *factor)
}

/// Grams per one `unit`, for mass units
pub fn grams_per_unit(unit: &str) -> Option<f64> {
    lookup(WEIGHT_UNITS, unit)
}

/// Millilitres per one `unit`, for volume units
pub fn ml_per_unit(unit: &str) -> Option<f64> {
    lookup(VOLUME_UNITS, unit)
}

pub fn categorize_unit(unit: &str) -> UnitCategory {
    if grams_per_unit(unit).is_some() {
        UnitCategory::Weight
    } else if ml_per_unit(unit).is_some() {
        UnitCategory::Volume
    } else if COUNT_UNITS.contains(&unit.trim().to_lowercase().as_str()) {
        UnitCategory::Count
    } else {
        UnitCategory::Custom
    }
}
