//! Final score to letter grade mapping

use serde::Serialize;

use crate::models::{DisplayColors, Grade};

/// Inclusive upper score bounds, checked in ascending order. Scores above the
/// last bound are E.
pub const GRADE_UPPER_BOUNDS: [(i32, Grade); 4] =
    [(0, Grade::A), (2, Grade::B), (10, Grade::C), (18, Grade::D)];

/// Letter grade for a Final Nutritional Score
pub fn grade_for_score(score: i32) -> Grade {
    GRADE_UPPER_BOUNDS
        .iter()
        .find(|(upper, _)| score <= *upper)
        .map_or(Grade::E, |(_, grade)| *grade)
}

/// Colors for a letter string; unknown letters get the gray fallback
pub fn display_colors(letter: &str) -> DisplayColors {
    Grade::from_letter(letter)
        .map(|g| g.display_colors())
        .unwrap_or(DisplayColors::FALLBACK)
}

/// One band of the grading scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeBand {
    pub grade: Grade,
    /// Lowest score in the band; `None` is unbounded
    pub min_score: Option<i32>,
    /// Highest score in the band; `None` is unbounded
    pub max_score: Option<i32>,
    pub color: &'static str,
    pub text_color: &'static str,
}

/// The full A-E scale, best first
pub fn grade_bands() -> Vec<GradeBand> {
    let mut bands = Vec::with_capacity(Grade::ALL.len());
    let mut min_score = None;

    for (upper, grade) in GRADE_UPPER_BOUNDS {
        bands.push(GradeBand {
            grade,
            min_score,
            max_score: Some(upper),
            color: grade.color(),
            text_color: grade.text_color(),
        });
        min_score = Some(upper + 1);
    }

    bands.push(GradeBand {
        grade: Grade::E,
        min_score,
        max_score: None,
        color: Grade::E.color(),
        text_color: Grade::E.text_color(),
    });

    bands
}
