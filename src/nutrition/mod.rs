//! Nutrition normalization module
//!
//! Serving unit handling and per-100g conversion.

pub mod converter;
pub mod normalizer;
pub mod units;

pub use converter::{parse_unit, resolve_serving, ConversionError};
pub use normalizer::{normalize, per_100g_factor, KJ_PER_KCAL, MG_PER_G, REFERENCE_AMOUNT};
pub use units::{
    categorize_unit, grams_per_unit, ml_per_unit, BaseUnitType, ParsedUnit, UnitCategory,
};
