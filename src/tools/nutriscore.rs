//! Nutri-Score MCP Tools
//!
//! Validates caller input, then runs the normalizer and scorer.

use serde::{Deserialize, Serialize};

use crate::config::ServiceConfig;
use crate::models::{CanonicalNutrients, Grade, RawNutrientRecord, ScoreBreakdown, ServingSize};
use crate::nutrition::{normalize, resolve_serving};
use crate::scoring::{grade_bands, score, GradeBand, MAIN_FOODS};

/// Response for normalize_nutrients
#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    /// Serving as given
    pub serving: ServingSize,
    /// Serving in g or ml
    pub resolved_serving: ServingSize,
    pub per_100g: CanonicalNutrients,
}

/// Response for calculate_nutri_score
#[derive(Debug, Serialize)]
pub struct NutriScoreResponse {
    pub resolved_serving: ServingSize,
    pub per_100g: CanonicalNutrients,
    pub result: ScoreBreakdown,
}

/// One named food in a batch
#[derive(Debug, Clone, Deserialize)]
pub struct FoodEntry {
    pub name: String,
    pub category: Option<String>,
    pub note: Option<String>,
    pub source: Option<String>,
    pub record: RawNutrientRecord,
}

/// A scored food in a batch response
#[derive(Debug, Serialize)]
pub struct ScoredFood {
    pub name: String,
    pub category: Option<String>,
    pub note: Option<String>,
    pub source: Option<String>,
    pub per_100g: CanonicalNutrients,
    pub result: ScoreBreakdown,
}

/// A batch entry that failed validation
#[derive(Debug, Serialize)]
pub struct SkippedFood {
    pub index: usize,
    pub name: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct GradeCount {
    pub grade: Grade,
    pub count: usize,
}

/// Response for score_foods
#[derive(Debug, Serialize)]
pub struct ScoreFoodsResponse {
    /// Best (lowest score) first
    pub items: Vec<ScoredFood>,
    pub scored: usize,
    pub skipped: Vec<SkippedFood>,
    pub grade_counts: Vec<GradeCount>,
}

/// Response for grade_scale
#[derive(Debug, Serialize)]
pub struct GradeScaleResponse {
    pub profile: &'static str,
    pub bands: Vec<GradeBand>,
}

/// Check named values: finite always, non-negative and percent <= 100 when strict
fn check_values(
    config: &ServiceConfig,
    values: &[(&str, f64)],
    percent: (&str, f64),
) -> Result<(), String> {
    for &(field, value) in values.iter().chain(std::iter::once(&percent)) {
        if !value.is_finite() {
            return Err(format!("{} must be a finite number", field));
        }
        if config.strict_input && value < 0.0 {
            return Err(format!("{} cannot be negative", field));
        }
    }

    let (field, value) = percent;
    if config.strict_input && value > 100.0 {
        return Err(format!("{} must be between 0 and 100", field));
    }

    Ok(())
}

/// Check a raw record before it reaches the core.
///
/// The core never rejects input; this is where nonsense is stopped.
pub fn validate_record(config: &ServiceConfig, record: &RawNutrientRecord) -> Result<(), String> {
    check_values(
        config,
        &[
            ("calories", record.calories),
            ("saturated_fat", record.saturated_fat),
            ("total_sugars", record.total_sugars),
            ("sodium", record.sodium),
            ("protein", record.protein),
            ("dietary_fiber", record.dietary_fiber),
        ],
        ("fruit_veg_percent", record.fruit_veg_percent),
    )
}

/// Resolve the serving unit and validate; returns a record in g/ml
fn prepare_record(config: &ServiceConfig, record: &RawNutrientRecord) -> Result<RawNutrientRecord, String> {
    validate_record(config, record)?;
    let resolved = resolve_serving(&record.serving).map_err(|e| e.to_string())?;
    Ok(record.with_serving(resolved))
}

/// Convert a per-serving record to per-100g values
pub fn normalize_nutrients(config: &ServiceConfig, record: &RawNutrientRecord) -> Result<NormalizeResponse, String> {
    let prepared = prepare_record(config, record)?;

    Ok(NormalizeResponse {
        serving: record.serving.clone(),
        per_100g: normalize(&prepared),
        resolved_serving: prepared.serving,
    })
}

/// Score values that are already per 100g
pub fn score_nutrients(config: &ServiceConfig, nutrients: &CanonicalNutrients) -> Result<ScoreBreakdown, String> {
    check_values(
        config,
        &[
            ("energy_kj", nutrients.energy_kj),
            ("saturated_fat_g", nutrients.saturated_fat_g),
            ("sugars_g", nutrients.sugars_g),
            ("salt_g", nutrients.salt_g),
            ("protein_g", nutrients.protein_g),
            ("fiber_g", nutrients.fiber_g),
        ],
        ("fruit_veg_percent", nutrients.fruit_veg_percent),
    )?;

    Ok(score(nutrients))
}

/// Normalize and score a per-serving record
pub fn calculate_nutri_score(config: &ServiceConfig, record: &RawNutrientRecord) -> Result<NutriScoreResponse, String> {
    let prepared = prepare_record(config, record)?;
    let per_100g = normalize(&prepared);
    let result = score(&per_100g);

    Ok(NutriScoreResponse {
        resolved_serving: prepared.serving,
        per_100g,
        result,
    })
}

/// Score a list of foods, best first. Invalid entries are skipped, not fatal.
pub fn score_foods(config: &ServiceConfig, foods: Vec<FoodEntry>) -> Result<ScoreFoodsResponse, String> {
    if foods.is_empty() {
        return Err("foods cannot be empty".to_string());
    }
    if foods.len() > config.max_batch {
        return Err(format!(
            "too many foods: {} (max {})",
            foods.len(),
            config.max_batch
        ));
    }

    tracing::debug!(count = foods.len(), "scoring food batch");

    let mut items = Vec::with_capacity(foods.len());
    let mut skipped = Vec::new();

    for (index, food) in foods.into_iter().enumerate() {
        let name = food.name.trim().to_string();
        if name.is_empty() {
            skipped.push(SkippedFood {
                index,
                name,
                error: "Food name cannot be empty".to_string(),
            });
            continue;
        }

        match prepare_record(config, &food.record) {
            Ok(prepared) => {
                let per_100g = normalize(&prepared);
                items.push(ScoredFood {
                    name,
                    category: food.category,
                    note: food.note,
                    source: food.source,
                    per_100g,
                    result: score(&per_100g),
                });
            }
            Err(error) => {
                tracing::warn!("Skipping food '{}': {}", name, error);
                skipped.push(SkippedFood { index, name, error });
            }
        }
    }

    items.sort_by(|a, b| {
        a.result
            .score
            .cmp(&b.result.score)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });

    let grade_counts = Grade::ALL
        .iter()
        .map(|&grade| GradeCount {
            grade,
            count: items.iter().filter(|i| i.result.grade == grade).count(),
        })
        .collect();

    Ok(ScoreFoodsResponse {
        scored: items.len(),
        items,
        skipped,
        grade_counts,
    })
}

/// The A-E scale used by the active profile
pub fn grade_scale() -> GradeScaleResponse {
    GradeScaleResponse {
        profile: MAIN_FOODS.name,
        bands: grade_bands(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(serving: ServingSize, calories: f64, sodium: f64) -> RawNutrientRecord {
        RawNutrientRecord::from_label(serving, calories, 1.0, 5.0, sodium, 3.0, 2.0, None, None)
    }

    fn food(name: &str, record: RawNutrientRecord) -> FoodEntry {
        FoodEntry {
            name: name.to_string(),
            category: Some("snack".to_string()),
            note: None,
            source: None,
            record,
        }
    }

    #[test]
    fn test_validate_rejects_negative_when_strict() {
        let config = ServiceConfig::default();
        let record = label(ServingSize::grams(30.0), -1.0, 150.0);
        let err = validate_record(&config, &record).unwrap_err();
        assert_eq!(err, "calories cannot be negative");
    }

    #[test]
    fn test_validate_allows_negative_when_lenient() {
        let config = ServiceConfig {
            strict_input: false,
            ..ServiceConfig::default()
        };
        let record = label(ServingSize::grams(30.0), -1.0, 150.0);
        assert!(validate_record(&config, &record).is_ok());
    }

    #[test]
    fn test_validate_rejects_nan_always() {
        let config = ServiceConfig {
            strict_input: false,
            ..ServiceConfig::default()
        };
        let record = label(ServingSize::grams(30.0), 100.0, f64::NAN);
        assert_eq!(
            validate_record(&config, &record).unwrap_err(),
            "sodium must be a finite number"
        );
    }

    #[test]
    fn test_validate_fruit_veg_range() {
        let config = ServiceConfig::default();
        let mut record = label(ServingSize::grams(30.0), 100.0, 100.0);
        record.fruit_veg_percent = 120.0;
        assert!(validate_record(&config, &record).is_err());
    }

    #[test]
    fn test_normalize_nutrients_resolves_ounces() {
        let config = ServiceConfig::default();
        let record = label(ServingSize::new(1.0, "oz"), 150.0, 150.0);
        let resp = normalize_nutrients(&config, &record).unwrap();
        assert_eq!(resp.serving.unit, "oz");
        assert_eq!(resp.resolved_serving.unit, "g");
        assert!((resp.resolved_serving.amount - 28.3495).abs() < 1e-9);
        assert!((resp.per_100g.protein_g - 300.0 / 28.3495).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_nutrients_rejects_zero_serving() {
        let config = ServiceConfig::default();
        let record = label(ServingSize::grams(0.0), 150.0, 150.0);
        let err = normalize_nutrients(&config, &record).unwrap_err();
        assert!(err.contains("positive"), "{}", err);
    }

    #[test]
    fn test_calculate_nutri_score_cereal_bar() {
        let config = ServiceConfig::default();
        let record = label(ServingSize::grams(30.0), 150.0, 150.0);
        let resp = calculate_nutri_score(&config, &record).unwrap();
        assert_eq!(resp.result.unfavorable_total, 15);
        assert!(resp.result.protein_excluded);
        assert_eq!(resp.result.score, 11);
        assert_eq!(resp.result.grade, Grade::D);
    }

    #[test]
    fn test_score_nutrients_reports_canonical_field() {
        let config = ServiceConfig::default();
        let n = CanonicalNutrients {
            salt_g: -0.5,
            ..Default::default()
        };
        assert_eq!(score_nutrients(&config, &n).unwrap_err(), "salt_g cannot be negative");
    }

    #[test]
    fn test_score_nutrients_rejects_infinite() {
        let config = ServiceConfig::default();
        let n = CanonicalNutrients {
            energy_kj: f64::INFINITY,
            ..Default::default()
        };
        assert!(score_nutrients(&config, &n).is_err());
    }

    #[test]
    fn test_score_foods_sorts_and_skips() {
        let config = ServiceConfig::default();
        let foods = vec![
            food("Cereal bar", label(ServingSize::grams(30.0), 150.0, 150.0)),
            food("Rice cake", label(ServingSize::grams(100.0), 40.0, 10.0)),
            food("Broken", label(ServingSize::new(1.0, "each"), 40.0, 10.0)),
            food("  ", label(ServingSize::grams(10.0), 40.0, 10.0)),
        ];
        let resp = score_foods(&config, foods).unwrap();

        assert_eq!(resp.scored, 2);
        assert_eq!(resp.items[0].name, "Rice cake");
        assert_eq!(resp.items[1].name, "Cereal bar");
        assert!(resp.items[0].result.score <= resp.items[1].result.score);

        assert_eq!(resp.skipped.len(), 2);
        assert_eq!(resp.skipped[0].index, 2);
        assert_eq!(resp.skipped[1].index, 3);

        let total: usize = resp.grade_counts.iter().map(|g| g.count).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn test_score_foods_batch_limit() {
        let config = ServiceConfig {
            max_batch: 1,
            ..ServiceConfig::default()
        };
        let foods = vec![
            food("One", label(ServingSize::grams(30.0), 150.0, 150.0)),
            food("Two", label(ServingSize::grams(30.0), 150.0, 150.0)),
        ];
        assert!(score_foods(&config, foods).is_err());
        assert!(score_foods(&config, Vec::new()).is_err());
    }

    #[test]
    fn test_grade_scale() {
        let scale = grade_scale();
        assert_eq!(scale.profile, "main_foods_2022");
        assert_eq!(scale.bands.len(), 5);
    }

    #[test]
    fn test_annotated_serving_must_resolve_positive() {
        let lenient = ServiceConfig {
            strict_input: false,
            ..ServiceConfig::default()
        };
        for config in [ServiceConfig::default(), lenient] {
            for unit in ["bar (0g)", "piece (-10g)", "piece (nang)", "bottle (0ml)"] {
                let record = label(ServingSize::new(1.0, unit), 150.0, 150.0);
                let err = calculate_nutri_score(&config, &record).unwrap_err();
                assert!(err.contains("positive"), "{}: {}", unit, err);
                assert!(normalize_nutrients(&config, &record).is_err(), "{}", unit);
            }
        }
    }

    #[test]
    fn test_score_foods_skips_zero_weight_annotation() {
        let config = ServiceConfig::default();
        let foods = vec![
            food("Granola bar", label(ServingSize::new(1.0, "bar (30g)"), 150.0, 150.0)),
            food("Empty bar", label(ServingSize::new(1.0, "bar (0g)"), 150.0, 150.0)),
        ];
        let resp = score_foods(&config, foods).unwrap();
        assert_eq!(resp.scored, 1);
        assert_eq!(resp.items[0].name, "Granola bar");
        assert_eq!(resp.skipped.len(), 1);
        assert_eq!(resp.skipped[0].name, "Empty bar");
    }

    #[test]
    fn test_fluid_ounce_ml_annotation_scales_per_unit() {
        let config = ServiceConfig::default();
        let record = label(ServingSize::new(2.0, "fl oz (30ml)"), 150.0, 150.0);
        let resp = calculate_nutri_score(&config, &record).unwrap();
        assert_eq!(resp.resolved_serving, ServingSize::new(60.0, "ml"));
        assert!((resp.per_100g.energy_kj - 150.0 * 4.184 * 100.0 / 60.0).abs() < 1e-9);
    }
}
