//! Nutri-Score scoring module
//!
//! Threshold tables, point counting and grade mapping.

pub mod letter;
pub mod profile;
pub mod scorer;
pub mod thresholds;

pub use letter::{display_colors, grade_bands, grade_for_score, GradeBand, GRADE_UPPER_BOUNDS};
pub use profile::{NutrientProfile, MAIN_FOODS};
pub use scorer::{component_points, score, score_with_profile};
pub use thresholds::{FruitVegBands, ThresholdTable};
