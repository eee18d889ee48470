//! Data models
//!
//! Value types flowing through normalization and scoring.

mod breakdown;
mod canonical;
mod grade;
mod record;

pub use breakdown::{ComponentPoints, ScoreBreakdown};
pub use canonical::CanonicalNutrients;
pub use grade::{DisplayColors, Grade, DARK_TEXT, FALLBACK_COLOR, LIGHT_TEXT};
pub use record::{RawNutrientRecord, ServingSize};
