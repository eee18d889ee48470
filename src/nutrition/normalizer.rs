//! Per-serving to per-100g normalization

use crate::models::{CanonicalNutrients, RawNutrientRecord};

/// Kilojoules per kilocalorie
pub const KJ_PER_KCAL: f64 = 4.184;
/// Milligrams per gram
pub const MG_PER_G: f64 = 1000.0;
/// Reference amount the scoring tables are expressed per
pub const REFERENCE_AMOUNT: f64 = 100.0;

/// Multiplier taking a per-serving value to per-100g
pub fn per_100g_factor(serving_amount: f64) -> f64 {
    REFERENCE_AMOUNT / serving_amount
}

/// Convert a per-serving record into the canonical per-100g vector.
///
/// The serving amount is taken as grams (or millilitres, scored the same) and
/// is not validated: zero or negative amounts propagate as non-finite or
/// negative values. Resolve other units with
/// [`resolve_serving`](super::resolve_serving) first.
///
/// Sodium in grams is reported as salt without the sodium-to-salt molar
/// factor. This is the label convention the grades were calibrated on.
pub fn normalize(record: &RawNutrientRecord) -> CanonicalNutrients {
    let factor = per_100g_factor(record.serving.amount);

    CanonicalNutrients {
        energy_kj: record.calories * KJ_PER_KCAL * factor,
        saturated_fat_g: record.saturated_fat * factor,
        sugars_g: record.total_sugars * factor,
        salt_g: record.sodium / MG_PER_G * factor,
        protein_g: record.protein * factor,
        fiber_g: record.dietary_fiber * factor,
        fruit_veg_percent: record.fruit_veg_percent,
        is_cheese: record.is_cheese,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServingSize;

    fn cereal_bar() -> RawNutrientRecord {
        RawNutrientRecord::from_label(
            ServingSize::grams(30.0),
            150.0,
            1.0,
            5.0,
            150.0,
            3.0,
            2.0,
            None,
            None,
        )
    }

    #[test]
    fn test_normalize_cereal_bar() {
        let n = normalize(&cereal_bar());
        assert!((n.energy_kj - 2092.0).abs() < 1e-6);
        assert!((n.saturated_fat_g - 10.0 / 3.0).abs() < 1e-9);
        assert!((n.sugars_g - 50.0 / 3.0).abs() < 1e-9);
        assert!((n.salt_g - 0.5).abs() < 1e-9);
        assert!((n.protein_g - 10.0).abs() < 1e-9);
        assert!((n.fiber_g - 20.0 / 3.0).abs() < 1e-9);
        assert_eq!(n.fruit_veg_percent, 0.0);
        assert!(!n.is_cheese);
    }

    #[test]
    fn test_hundred_gram_serving_is_identity_except_units() {
        let record = cereal_bar().with_serving(ServingSize::grams(100.0));
        let n = normalize(&record);
        assert!((n.energy_kj - 150.0 * KJ_PER_KCAL).abs() < 1e-9);
        assert!((n.saturated_fat_g - 1.0).abs() < 1e-12);
        assert!((n.salt_g - 0.15).abs() < 1e-12);
        assert!((n.fiber_g - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_doubling_serving_halves_scaled_fields() {
        let single = normalize(&cereal_bar());
        let double = normalize(&cereal_bar().with_serving(ServingSize::grams(60.0)));

        let pairs = [
            (single.energy_kj, double.energy_kj),
            (single.saturated_fat_g, double.saturated_fat_g),
            (single.sugars_g, double.sugars_g),
            (single.salt_g, double.salt_g),
            (single.protein_g, double.protein_g),
            (single.fiber_g, double.fiber_g),
        ];
        for (one, two) in pairs {
            assert!((one / 2.0 - two).abs() < 1e-9, "{} vs {}", one, two);
        }
        assert_eq!(single.fruit_veg_percent, double.fruit_veg_percent);
        assert_eq!(single.is_cheese, double.is_cheese);
    }

    #[test]
    fn test_percentage_and_cheese_pass_through() {
        let mut record = cereal_bar();
        record.fruit_veg_percent = 65.0;
        record.is_cheese = true;
        let n = normalize(&record);
        assert_eq!(n.fruit_veg_percent, 65.0);
        assert!(n.is_cheese);
    }

    #[test]
    fn test_zero_serving_is_not_guarded() {
        let record = cereal_bar().with_serving(ServingSize::grams(0.0));
        let n = normalize(&record);
        assert!(n.energy_kj.is_infinite());
        assert!(!n.is_finite());
    }

    #[test]
    fn test_negative_serving_propagates_sign() {
        let record = cereal_bar().with_serving(ServingSize::grams(-100.0));
        let n = normalize(&record);
        assert!((n.saturated_fat_g + 1.0).abs() < 1e-12);
    }
}
