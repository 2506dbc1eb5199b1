use serde::{Serialize, Deserialize};

use crate::{
    Classifier,
    Feature,
    Sample,
    constants::{BIN_PERTURBATION, BOUND_PADDING},
};


/// The side of a cut value that is predicted as `+1`.
///
/// Serialized as the integer `+1` (`Up`) or `-1` (`Down`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Direction {
    /// Predict `+1` when `x >= value`, `-1` otherwise.
    Up,
    /// Predict `+1` when `x <= value`, `-1` otherwise.
    Down,
}


impl Direction {
    /// Returns `+1` for `Up` and `-1` for `Down`.
    #[inline]
    pub fn sign(&self) -> i8 {
        match self {
            Self::Up   =>  1,
            Self::Down => -1,
        }
    }
}


impl From<Direction> for i8 {
    fn from(direction: Direction) -> Self {
        direction.sign()
    }
}


impl TryFrom<i8> for Direction {
    type Error = String;
    fn try_from(sign: i8) -> Result<Self, Self::Error> {
        match sign {
             1 => Ok(Self::Up),
            -1 => Ok(Self::Down),
            _  => Err(format!("direction must be +1 or -1, got {sign}")),
        }
    }
}


/// A decision stump: a threshold on a single feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    /// Index of the feature this stump looks at.
    pub feature_index: usize,
    /// The cut value.
    pub value: f64,
    /// Which side of `value` is predicted as `+1`.
    pub direction: Direction,
}


impl Threshold {
    /// Construct a new stump.
    pub fn new(feature_index: usize, value: f64, direction: Direction)
        -> Self
    {
        Self { feature_index, value, direction, }
    }


    /// Predicts the label of a single feature value.
    /// A value exactly at `self.value` is `+1` in both directions.
    #[inline(always)]
    pub fn predict_value(&self, x: f64) -> i64 {
        let positive = match self.direction {
            Direction::Up   => x >= self.value,
            Direction::Down => x <= self.value,
        };
        if positive { 1 } else { -1 }
    }


    /// Evaluates `self` on every example of `sample`.
    ///
    /// `sample` must have more than `self.feature_index` features.
    pub fn classify(&self, sample: &Sample) -> Vec<i64> {
        sample.feature(self.feature_index)
            .iter()
            .map(|&x| self.predict_value(x))
            .collect()
    }
}


impl Classifier for Threshold {
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        let x = sample.feature(self.feature_index)[row];
        self.predict_value(x) as f64
    }


    fn predict_all(&self, sample: &Sample) -> Vec<i64> {
        self.classify(sample)
    }
}


/// The padded range `[min, max]` of a feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureBound {
    /// Lower end, strictly below every training value.
    pub min: f64,
    /// Upper end, strictly above every training value.
    pub max: f64,
}


impl FeatureBound {
    /// Computes the padded range of `feature`.
    /// Returns `None` for an empty feature.
    pub fn of_feature(feature: &Feature) -> Option<Self> {
        let (min, max) = feature.min_max()?;

        // For large magnitudes `BOUND_PADDING` vanishes in rounding,
        // so pad by a few ulps at least.
        let magnitude = min.abs().max(max.abs());
        let pad = BOUND_PADDING.max(4f64 * f64::EPSILON * magnitude);

        Some(Self { min: min - pad, max: max + pad })
    }


    /// Computes the padded range of every feature in `sample`.
    pub fn of_sample(sample: &Sample) -> Vec<Self> {
        sample.features()
            .iter()
            .filter_map(Self::of_feature)
            .collect()
    }


    /// Returns `max - min`.
    #[inline(always)]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }


    /// The cut value of the `bin`-th of `n_bins` equal-width bins.
    #[inline(always)]
    pub(crate) fn cut(&self, bin: usize, n_bins: usize) -> f64 {
        self.min + (self.range() / n_bins as f64) * bin as f64
    }


    #[inline(always)]
    fn scale(&self, x: f64, n_bins: usize) -> f64 {
        (x - self.min) / self.range() * n_bins as f64
    }


    /// Bin of an example labeled `-1`.
    /// The result lies in `[0, n_bins)`.
    #[inline(always)]
    pub(crate) fn negative_bin(&self, x: f64, n_bins: usize) -> usize {
        let q = (self.scale(x, n_bins) - BIN_PERTURBATION).floor();
        (q.max(0f64) as usize).min(n_bins - 1)
    }


    /// Bin of an example labeled `+1`.
    /// The result lies in `[1, n_bins]`;
    /// `n_bins` means the example lies above every cut.
    #[inline(always)]
    pub(crate) fn positive_bin(&self, x: f64, n_bins: usize) -> usize {
        let q = (self.scale(x, n_bins) + BIN_PERTURBATION).ceil();
        (q.max(0f64) as usize).min(n_bins)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_value_is_positive_in_both_directions() {
        let up = Threshold::new(0, 1.5, Direction::Up);
        let down = Threshold::new(0, 1.5, Direction::Down);

        assert_eq!(up.predict_value(1.5), 1);
        assert_eq!(down.predict_value(1.5), 1);

        assert_eq!(up.predict_value(1.4), -1);
        assert_eq!(up.predict_value(1.6), 1);
        assert_eq!(down.predict_value(1.4), 1);
        assert_eq!(down.predict_value(1.6), -1);
    }

    #[test]
    fn padded_bounds_contain_values_strictly() {
        let feat = Feature::with_values("x", vec![0.0, 3.0, 1.0]);
        let bound = FeatureBound::of_feature(&feat).unwrap();
        assert!(bound.min < 0.0 && bound.min >= -2e-10);
        assert!(bound.max > 3.0 && bound.max <= 3.0 + 2e-10);

        let feat = Feature::with_values("x", vec![1e12, 2e12]);
        let bound = FeatureBound::of_feature(&feat).unwrap();
        assert!(bound.min < 1e12);
        assert!(bound.max > 2e12);
    }

    #[test]
    fn constant_feature_has_positive_range() {
        let feat = Feature::with_values("x", vec![7.0; 4]);
        let bound = FeatureBound::of_feature(&feat).unwrap();
        assert!(bound.range() > 0.0);
    }

    #[test]
    fn bins_stay_in_range() {
        let n_bins = 10;
        let feat = Feature::with_values("x", vec![0.0, 0.95, 2.0]);
        let bound = FeatureBound::of_feature(&feat).unwrap();

        assert_eq!(bound.negative_bin(0.0, n_bins), 0);
        assert_eq!(bound.negative_bin(2.0, n_bins), n_bins - 1);
        assert_eq!(bound.positive_bin(0.0, n_bins), 1);
        assert_eq!(bound.positive_bin(2.0, n_bins), n_bins);

        // 0.95 sits at scaled position ~4.75.
        assert_eq!(bound.negative_bin(0.95, n_bins), 4);
        assert_eq!(bound.positive_bin(0.95, n_bins), 5);
    }

    #[test]
    fn direction_serializes_as_sign() {
        let th = Threshold::new(2, 0.5, Direction::Down);
        let json = serde_json::to_string(&th).unwrap();
        assert!(json.contains("\"direction\":-1"));

        let back: Threshold = serde_json::from_str(&json).unwrap();
        assert_eq!(back, th);

        let bad = r#"{"feature_index":0,"value":0.0,"direction":0}"#;
        assert!(serde_json::from_str::<Threshold>(bad).is_err());
    }
}
