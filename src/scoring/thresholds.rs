//! Threshold tables and point counting

use serde::Serialize;

/// Ascending cut points for one nutrient component.
///
/// A value earns `k` points when it strictly exceeds the `k`-th cut point and
/// not the next one. Comparisons against NaN are false, so NaN earns 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ThresholdTable {
    cuts: Vec<f64>,
}

impl ThresholdTable {
    /// `cuts` must be strictly ascending; [`points`](Self::points) counts from
    /// the last cut exceeded and gives wrong answers for any other order.
    ///
    /// # Panics
    ///
    /// Panics if `cuts` is not strictly ascending.
    pub fn new(cuts: impl Into<Vec<f64>>) -> Self {
        let cuts = cuts.into();
        assert!(
            cuts.windows(2).all(|w| w[0] < w[1]),
            "threshold table must be strictly ascending"
        );
        Self { cuts }
    }

    /// `count` cut points starting at `start`, each `step` above the previous.
    ///
    /// Built by repeated addition so the cut points carry the same rounding as
    /// the published table generator. Panics if `count > 1` and `step` is not positive.
    pub fn arithmetic(start: f64, step: f64, count: usize) -> Self {
        let cuts = std::iter::successors(Some(start), |prev| Some(prev + step))
            .take(count)
            .collect::<Vec<_>>();
        Self::new(cuts)
    }

    pub fn cuts(&self) -> &[f64] {
        &self.cuts
    }

    pub fn max_points(&self) -> i32 {
        self.cuts.len() as i32
    }

    /// Points for `value`: the 1-based index of the last cut point it exceeds
    pub fn points(&self, value: f64) -> i32 {
        self.cuts
            .iter()
            .rposition(|&cut| value > cut)
            .map_or(0, |i| i as i32 + 1)
    }
}

/// Fruit/vegetable/legume/nut percentage bands.
///
/// Unlike the nutrient tables these are inclusive lower bounds:
/// `<40 → 0`, `<60 → 1`, `<80 → 2`, `<90 → 3`, `<100 → 4`, `100 → 5`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FruitVegBands {
    lower_bounds: Vec<f64>,
}

impl FruitVegBands {
    /// # Panics
    ///
    /// Panics if `lower_bounds` is not strictly ascending.
    pub fn new(lower_bounds: impl Into<Vec<f64>>) -> Self {
        let lower_bounds = lower_bounds.into();
        assert!(
            lower_bounds.windows(2).all(|w| w[0] < w[1]),
            "fruit/veg bands must be strictly ascending"
        );
        Self { lower_bounds }
    }

    pub fn lower_bounds(&self) -> &[f64] {
        &self.lower_bounds
    }

    pub fn max_points(&self) -> i32 {
        self.lower_bounds.len() as i32
    }

    pub fn points(&self, percent: f64) -> i32 {
        self.lower_bounds
            .iter()
            .rposition(|&bound| percent >= bound)
            .map_or(0, |i| i as i32 + 1)
    }
}
