//! Serving size resolution
//!
//! Turns a labelled serving ("1 oz", "2 tbsp (30g)", "1 cup") into the plain
//! gram or millilitre amount the normalizer scales by.

use thiserror::Error;

use super::units::{
    categorize_unit, grams_per_unit, ml_per_unit, BaseUnitType, ParsedUnit, UnitCategory,
};
use crate::models::ServingSize;

/// Serving conversion errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("serving amount must be a positive number, got {0}")]
    NonPositiveAmount(f64),

    #[error("unrecognized serving unit '{0}'")]
    UnknownUnit(String),

    #[error("serving unit '{0}' is a count; annotate its weight, e.g. \"{0} (28g)\"")]
    CountWithoutWeight(String),
}

/// Split a unit string into base unit and any "(20g)" / "(240ml)" annotation
pub fn parse_unit(unit_str: &str) -> ParsedUnit {
    let trimmed = unit_str.trim();

    let (base, annotation) = match (trimmed.find('('), trimmed.rfind(')')) {
        (Some(open), Some(close)) if open < close => {
            (trimmed[..open].trim(), Some(&trimmed[open + 1..close]))
        }
        _ => (trimmed, None),
    };

    let base_unit = base.to_lowercase();
    let category = categorize_unit(&base_unit);

    ParsedUnit {
        gram_weight: annotation.and_then(|a| parse_annotation(a, &["g", "gram", "grams"])),
        ml_amount: annotation.and_then(|a| {
            parse_annotation(a, &["ml", "milliliter", "milliliters", "millilitre", "millilitres"])
        }),
        base_unit,
        category,
    }
}

/// Parse "20g", "20 g", "240 ml"; suffixes are tried longest first
fn parse_annotation(s: &str, suffixes: &[&str]) -> Option<f64> {
    let lower = s.trim().to_lowercase();
    let mut ordered: Vec<&&str> = suffixes.iter().collect();
    ordered.sort_by_key(|s| std::cmp::Reverse(s.len()));

    ordered.into_iter().find_map(|suffix| {
        lower
            .strip_suffix(*suffix)
            .and_then(|num| num.trim().parse::<f64>().ok())
    })
}

/// Resolve a serving to grams or millilitres.
///
/// Annotations win over the base unit, so "2 tbsp (30g)" is 60 g rather than
/// ~29.6 ml. Count and custom units require a gram or ml annotation. The
/// resolved amount must be positive and finite, whichever branch produced it.
pub fn resolve_serving(serving: &ServingSize) -> Result<ServingSize, ConversionError> {
    let resolved = resolve_unit(serving)?;
    if !resolved.amount.is_finite() || resolved.amount <= 0.0 {
        return Err(ConversionError::NonPositiveAmount(resolved.amount));
    }
    Ok(resolved)
}

fn resolve_unit(serving: &ServingSize) -> Result<ServingSize, ConversionError> {
    let amount = serving.amount;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ConversionError::NonPositiveAmount(amount));
    }

    let parsed = parse_unit(&serving.unit);

    if let Some(grams) = parsed.gram_weight {
        return Ok(ServingSize::new(amount * grams, BaseUnitType::Weight.canonical_unit()));
    }
    if let Some(ml) = parsed.ml_amount {
        return Ok(ServingSize::new(amount * ml, BaseUnitType::Volume.canonical_unit()));
    }

    match parsed.category {
        UnitCategory::Weight => {
            let factor = grams_per_unit(&parsed.base_unit)
                .ok_or_else(|| ConversionError::UnknownUnit(serving.unit.clone()))?;
            Ok(ServingSize::new(amount * factor, BaseUnitType::Weight.canonical_unit()))
        }
        UnitCategory::Volume => {
            let factor = ml_per_unit(&parsed.base_unit)
                .ok_or_else(|| ConversionError::UnknownUnit(serving.unit.clone()))?;
            Ok(ServingSize::new(amount * factor, BaseUnitType::Volume.canonical_unit()))
        }
        UnitCategory::Count => Err(ConversionError::CountWithoutWeight(parsed.base_unit)),
        UnitCategory::Custom if parsed.base_unit.is_empty() => {
            // A bare number is read as grams, matching label data keyed by servingG
            tracing::warn!("Serving unit missing, treating {} as grams", amount);
            Ok(ServingSize::grams(amount))
        }
        UnitCategory::Custom => Err(ConversionError::UnknownUnit(serving.unit.clone())),
    }
}
