//! Nutri-Score Library
//!
//! Normalizes per-serving nutrition facts to a per-100g basis and grades them
//! with the 2022 "main foods" Nutri-Score.

pub mod build_info;
pub mod config;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod scoring;
pub mod tools;

pub use models::{CanonicalNutrients, Grade, RawNutrientRecord, ScoreBreakdown, ServingSize};
pub use nutrition::normalize;
pub use scoring::score;
