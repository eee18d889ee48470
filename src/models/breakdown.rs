//! Score breakdown returned by the scorer

use serde::Serialize;

use super::Grade;

/// Points earned by each nutrient component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ComponentPoints {
    pub energy: i32,
    pub saturated_fat: i32,
    pub sugars: i32,
    pub salt: i32,
    pub protein: i32,
    pub fiber: i32,
    pub fruit_veg: i32,
}

impl ComponentPoints {
    /// A-points: energy + saturated fat + sugars + salt
    pub fn unfavorable(&self) -> i32 {
        self.energy + self.saturated_fat + self.sugars + self.salt
    }
}

/// Full result of scoring one food
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub points: ComponentPoints,
    /// A-points
    pub unfavorable_total: i32,
    /// C-points actually subtracted
    pub favorable_total: i32,
    pub protein_excluded: bool,
    /// Final Nutritional Score, A - C. Unclamped.
    pub score: i32,
    pub grade: Grade,
    pub color: &'static str,
    pub text_color: &'static str,
}
