//! Nutri-Score Status Tool
//!
//! Runtime status and usage instructions for the service.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::config::ServiceConfig;
use crate::scoring::MAIN_FOODS;

/// Usage guide for AI assistants
pub const NUTRISCORE_INSTRUCTIONS: &str = r#"
# Nutri-Score Calculator Instructions

Grades a food A (best) to E (worst) with the 2022 "main foods" Nutri-Score,
from the nutrition facts printed on its label.

## Which tool?

| You have | Call |
|----------|------|
| Label facts for one serving | `calculate_nutri_score` |
| Label facts, want per-100g values only | `normalize_nutrients` |
| Values already per 100g (kJ, g, g salt) | `score_nutrients` |
| Several foods to compare | `score_foods` |
| The grade bands and colors | `grade_scale` |

## Label facts

| Field | Unit |
|-------|------|
| serving_size + serving_unit | g, ml, oz, lb, kg, cup, tbsp, tsp, fl oz, or e.g. `bar (45g)` |
| calories | kcal |
| saturated_fat | g |
| total_sugars | g |
| sodium | **mg** |
| protein | g |
| dietary_fiber | g |
| fruit_veg_percent | 0-100, optional (defaults to 0) |
| is_cheese | optional (defaults to false) |

Count units (`each`, `piece`) need a weight: `piece (12g)`.

## How the score works

1. Everything is scaled to 100 g. kcal x 4.184 = kJ. Sodium mg / 1000 is used
   as grams of salt.
2. A-points: energy (0-10) + saturated fat (0-10) + sugars (0-15) + salt (0-20).
3. C-points: protein (0-7) + fiber (0-5) + fruit/veg (0-5).
4. If A >= 11 and the food is not cheese, protein does not count.
5. Score = A - C. Lower is better.

| Score | Grade |
|-------|-------|
| <= 0 | A |
| 1-2 | B |
| 3-10 | C |
| 11-18 | D |
| >= 19 | E |

## Notes

- Pass `is_cheese: true` for cheeses, otherwise high-fat cheeses lose their
  protein credit.
- Negative values and percentages over 100 are rejected unless the server runs
  with NUTRISCORE_STRICT_INPUT=false.
"#;

/// Runtime status of the service
#[derive(Debug, Clone, Serialize)]
pub struct NutriScoreStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    pub profile: &'static str,
    pub config: ServiceConfig,

    pub started_at: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Collects runtime information for the status tool
pub struct StatusTracker {
    start_time: Instant,
    started_at: DateTime<Utc>,
    config: ServiceConfig,
}

impl StatusTracker {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: Utc::now(),
            config,
        }
    }

    pub fn get_status(&self) -> NutriScoreStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        NutriScoreStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            profile: MAIN_FOODS.name,
            config: self.config,
            started_at: self.started_at,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
