//! Nutri-Score computation
//!
//! A-points from energy, saturated fat, sugars and salt; C-points from
//! protein, fiber and fruit/veg content; FNS = A - C.

use super::letter::grade_for_score;
use super::profile::{NutrientProfile, MAIN_FOODS};
use crate::models::{CanonicalNutrients, ComponentPoints, ScoreBreakdown};

/// Score per-100g nutrients against the 2022 main foods profile
pub fn score(nutrients: &CanonicalNutrients) -> ScoreBreakdown {
    score_with_profile(&MAIN_FOODS, nutrients)
}

/// Points for each component, before the protein rule is applied
pub fn component_points(profile: &NutrientProfile, n: &CanonicalNutrients) -> ComponentPoints {
    ComponentPoints {
        energy: profile.energy.points(n.energy_kj),
        saturated_fat: profile.saturated_fat.points(n.saturated_fat_g),
        sugars: profile.sugars.points(n.sugars_g),
        salt: profile.salt.points(n.salt_g),
        protein: profile.protein.points(n.protein_g),
        fiber: profile.fiber.points(n.fiber_g),
        fruit_veg: profile.fruit_veg.points(n.fruit_veg_percent),
    }
}

/// Score against `profile`, which supplies every threshold table and the protein-exclusion cutoff
pub fn score_with_profile(profile: &NutrientProfile, nutrients: &CanonicalNutrients) -> ScoreBreakdown {
    let points = component_points(profile, nutrients);
    let unfavorable_total = points.unfavorable();

    // Cheese keeps its protein points whatever A is
    let protein_excluded =
        unfavorable_total >= profile.protein_exclusion_threshold && !nutrients.is_cheese;

    let favorable_total = if protein_excluded {
        tracing::debug!(
            unfavorable_total,
            protein_points = points.protein,
            "protein excluded from C-points"
        );
        points.fiber + points.fruit_veg
    } else {
        points.protein + points.fiber + points.fruit_veg
    };

    let score = unfavorable_total - favorable_total;
    let grade = grade_for_score(score);

    ScoreBreakdown {
        points,
        unfavorable_total,
        favorable_total,
        protein_excluded,
        score,
        grade,
        color: grade.color(),
        text_color: grade.text_color(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Grade;

    /// Energy points 10, nothing else
    fn ten_a_points() -> CanonicalNutrients {
        CanonicalNutrients {
            energy_kj: 3400.0,
            protein_g: 10.0, // 4 points
            fiber_g: 3.5,    // 1 point
            ..Default::default()
        }
    }

    #[test]
    fn test_all_zero_is_grade_a() {
        let result = score(&CanonicalNutrients::default());
        assert_eq!(result.points, ComponentPoints::default());
        assert_eq!(result.score, 0);
        assert_eq!(result.grade, Grade::A);
        assert!(!result.protein_excluded);
    }

    #[test]
    fn test_component_points() {
        let n = CanonicalNutrients {
            energy_kj: 1500.0,
            saturated_fat_g: 4.5,
            sugars_g: 22.0,
            salt_g: 1.0,
            protein_g: 5.0,
            fiber_g: 4.5,
            fruit_veg_percent: 65.0,
            is_cheese: false,
        };
        let p = component_points(&MAIN_FOODS, &n);
        assert_eq!(p.energy, 4);
        assert_eq!(p.saturated_fat, 4);
        assert_eq!(p.sugars, 6);
        // 0.12, 0.345, 0.57, 0.795 exceeded
        assert_eq!(p.salt, 4);
        assert_eq!(p.protein, 2);
        assert_eq!(p.fiber, 2);
        assert_eq!(p.fruit_veg, 2);
    }

    #[test]
    fn test_protein_counted_at_a_ten() {
        let result = score(&ten_a_points());
        assert_eq!(result.unfavorable_total, 10);
        assert!(!result.protein_excluded);
        assert_eq!(result.favorable_total, 5);
        assert_eq!(result.score, 5);
        assert_eq!(result.grade, Grade::C);
    }

    #[test]
    fn test_protein_excluded_at_a_eleven() {
        let n = CanonicalNutrients {
            saturated_fat_g: 1.5,
            ..ten_a_points()
        };
        let result = score(&n);
        assert_eq!(result.unfavorable_total, 11);
        assert!(result.protein_excluded);
        assert_eq!(result.points.protein, 4);
        assert_eq!(result.favorable_total, 1);
        assert_eq!(result.score, 10);
    }

    #[test]
    fn test_cheese_keeps_protein_at_a_eleven() {
        let n = CanonicalNutrients {
            saturated_fat_g: 1.5,
            is_cheese: true,
            ..ten_a_points()
        };
        let result = score(&n);
        assert_eq!(result.unfavorable_total, 11);
        assert!(!result.protein_excluded);
        assert_eq!(result.favorable_total, 5);
        assert_eq!(result.score, 6);
    }

    #[test]
    fn test_negative_score_is_not_clamped() {
        let n = CanonicalNutrients {
            protein_g: 20.0,
            fiber_g: 8.0,
            fruit_veg_percent: 100.0,
            ..Default::default()
        };
        let result = score(&n);
        assert_eq!(result.favorable_total, 17);
        assert_eq!(result.score, -17);
        assert_eq!(result.grade, Grade::A);
        assert_eq!(result.color, "#038141");
    }

    #[test]
    fn test_maximum_score_is_grade_e() {
        let n = CanonicalNutrients {
            energy_kj: 4000.0,
            saturated_fat_g: 20.0,
            sugars_g: 60.0,
            salt_g: 10.0,
            ..Default::default()
        };
        let result = score(&n);
        assert_eq!(result.unfavorable_total, 55);
        assert_eq!(result.score, 55);
        assert_eq!(result.grade, Grade::E);
        assert_eq!(result.text_color, "#ffffff");
    }

    #[test]
    fn test_nan_inputs_earn_no_points() {
        let n = CanonicalNutrients {
            energy_kj: f64::NAN,
            saturated_fat_g: f64::NAN,
            sugars_g: f64::NAN,
            salt_g: f64::NAN,
            protein_g: f64::NAN,
            fiber_g: f64::NAN,
            fruit_veg_percent: f64::NAN,
            is_cheese: false,
        };
        let result = score(&n);
        assert_eq!(result.points, ComponentPoints::default());
        assert_eq!(result.grade, Grade::A);
    }

    #[test]
    fn test_score_is_deterministic() {
        let n = CanonicalNutrients {
            energy_kj: 1800.0,
            saturated_fat_g: 7.2,
            sugars_g: 30.0,
            salt_g: 0.9,
            protein_g: 6.0,
            fiber_g: 2.0,
            fruit_veg_percent: 10.0,
            is_cheese: false,
        };
        assert_eq!(score(&n), score(&n));
    }

    #[test]
    fn test_unfavorable_points_monotone() {
        let base = CanonicalNutrients::default();
        let mut last = 0;
        for step in 0..200 {
            let v = step as f64 * 0.05;
            let n = CanonicalNutrients { salt_g: v, ..base };
            let pts = score(&n).points.salt;
            assert!(pts >= last, "salt {} dropped to {}", v, pts);
            last = pts;
        }
        assert_eq!(last, 20);
    }
}
