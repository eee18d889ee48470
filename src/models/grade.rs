//! Nutri-Score letter grade and its display colors

use serde::{Deserialize, Serialize};

/// Background color for anything that is not a known grade
pub const FALLBACK_COLOR: &str = "#AAAAAA";
/// Text color on light backgrounds (B, C)
pub const DARK_TEXT: &str = "#333333";
/// Text color on dark backgrounds
pub const LIGHT_TEXT: &str = "#ffffff";

/// Letter grade, A best to E worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::E];

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
        }
    }

    /// Parse a letter, case-insensitive. Anything else is `None`.
    pub fn from_letter(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "A" => Some(Grade::A),
            "B" => Some(Grade::B),
            "C" => Some(Grade::C),
            "D" => Some(Grade::D),
            "E" => Some(Grade::E),
            _ => None,
        }
    }

    /// Badge background color
    pub fn color(&self) -> &'static str {
        match self {
            Grade::A => "#038141", // dark green
            Grade::B => "#85bb2f", // light green
            Grade::C => "#fecb02", // yellow
            Grade::D => "#ee8100", // orange
            Grade::E => "#e63e11", // red
        }
    }

    /// Text color that contrasts with `color()`
    pub fn text_color(&self) -> &'static str {
        match self {
            Grade::B | Grade::C => DARK_TEXT,
            Grade::A | Grade::D | Grade::E => LIGHT_TEXT,
        }
    }

    pub fn display_colors(&self) -> DisplayColors {
        DisplayColors {
            color: self.color(),
            text_color: self.text_color(),
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge color pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayColors {
    pub color: &'static str,
    pub text_color: &'static str,
}

impl DisplayColors {
    pub const FALLBACK: DisplayColors = DisplayColors {
        color: FALLBACK_COLOR,
        text_color: LIGHT_TEXT,
    };
}
