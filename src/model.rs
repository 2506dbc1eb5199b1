//! Defines [`Model`], the weighted ensemble of decision stumps
//! returned by [`AdaBoost`](crate::AdaBoost).
use std::fs;
use std::path::Path;

use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use crate::{
    Classifier,
    Sample,
    weak_learner::{FeatureBound, Threshold},
    error::{BoostError, Result},
};


/// A weighted majority vote over decision stumps.
///
/// Only the first `round_count` entries of `thresholds` and `alpha`
/// are part of the ensemble.
/// Both vectors may be longer than that (e.g., pre-sized by a writer);
/// the remaining entries are ignored.
///
/// You can read/write this struct by `serde` trait,
/// or via [`Model::save`] and [`Model::load`] as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    round_count: usize,
    bounds: Vec<FeatureBound>,
    thresholds: Vec<Threshold>,
    alpha: Vec<f64>,
}


impl Model {
    /// Construct an empty ensemble over features with the given ranges.
    /// `capacity` is the number of rounds to reserve.
    pub fn new(bounds: Vec<FeatureBound>, capacity: usize) -> Self {
        Self {
            round_count: 0,
            bounds,
            thresholds: Vec::with_capacity(capacity),
            alpha: Vec::with_capacity(capacity),
        }
    }


    /// Construct a model from its parts.
    /// Fails if the parts violate the model invariants.
    pub fn from_parts(
        round_count: usize,
        bounds: Vec<FeatureBound>,
        thresholds: Vec<Threshold>,
        alpha: Vec<f64>,
    ) -> Result<Self>
    {
        let model = Self { round_count, bounds, thresholds, alpha, };
        model.validate()?;
        Ok(model)
    }


    /// Appends a round to the ensemble.
    /// Slots beyond `round_count` are overwritten first.
    pub(crate) fn push(&mut self, threshold: Threshold, alpha: f64) {
        let t = self.round_count;
        match self.thresholds.get_mut(t) {
            Some(slot) => { *slot = threshold; },
            None => { self.thresholds.push(threshold); },
        }
        match self.alpha.get_mut(t) {
            Some(slot) => { *slot = alpha; },
            None => { self.alpha.push(alpha); },
        }
        self.round_count += 1;
    }


    /// Returns the number of rounds in the ensemble.
    pub fn round_count(&self) -> usize {
        self.round_count
    }


    /// Returns `true` if the ensemble has no stump.
    /// An empty ensemble predicts `+1` for every example.
    pub fn is_empty(&self) -> bool {
        self.round_count == 0
    }


    /// Returns the padded range of each training feature.
    pub fn bounds(&self) -> &[FeatureBound] {
        &self.bounds[..]
    }


    /// Returns the number of features the model was trained on.
    pub fn n_feature(&self) -> usize {
        self.bounds.len()
    }


    /// Returns the stumps of the valid rounds.
    pub fn thresholds(&self) -> &[Threshold] {
        &self.thresholds[..self.round_count]
    }


    /// Returns the weights of the valid rounds.
    pub fn alpha(&self) -> &[f64] {
        &self.alpha[..self.round_count]
    }


    /// Check the model invariants.
    pub fn validate(&self) -> Result<()> {
        let t = self.round_count;
        if self.thresholds.len() < t || self.alpha.len() < t {
            return Err(BoostError::invalid(format!(
                "round count {t} exceeds the stored rounds \
                 ({} thresholds, {} weights)",
                self.thresholds.len(), self.alpha.len(),
            )));
        }

        if let Some(j) = self.bounds.iter()
            .position(|b| !(b.min.is_finite() && b.max.is_finite() && b.min <= b.max))
        {
            return Err(BoostError::invalid(
                format!("the bound of feature {j} is not a finite range")
            ));
        }

        let n_feature = self.n_feature();
        for (round, (th, a)) in self.thresholds[..t].iter()
            .zip(&self.alpha[..t])
            .enumerate()
        {
            if th.feature_index >= n_feature {
                return Err(BoostError::invalid(format!(
                    "round {round} uses feature {}, \
                     but the model has {n_feature} features",
                    th.feature_index,
                )));
            }
            if !th.value.is_finite() || !a.is_finite() {
                return Err(BoostError::invalid(
                    format!("round {round} has a non-finite parameter")
                ));
            }
        }
        Ok(())
    }


    /// Check whether `sample` has the features this model expects.
    pub fn check_compatible(&self, sample: &Sample) -> Result<()> {
        let n_feature = sample.shape().1;
        if n_feature != self.n_feature() {
            return Err(BoostError::invalid(format!(
                "the model expects {} features, got {n_feature}",
                self.n_feature(),
            )));
        }
        Ok(())
    }


    /// Serializes `self` as a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }


    /// Deserializes a model from a JSON string
    /// and checks its invariants.
    pub fn from_json(json: &str) -> Result<Self> {
        let model: Self = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }


    /// Writes `self` to `path` as JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }


    /// Reads a model written by [`Model::save`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}


impl Classifier for Model {
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        self.thresholds()
            .iter()
            .zip(self.alpha())
            .map(|(th, a)| a * th.confidence(sample, row))
            .sum::<f64>()
    }


    /// Accumulates the ensemble score round by round,
    /// in the same order as the training loop does.
    fn confidence_all(&self, sample: &Sample) -> Vec<f64> {
        let n_sample = sample.shape().0;
        let mut scores = vec![0f64; n_sample];

        for (th, &a) in self.thresholds().iter().zip(self.alpha()) {
            let column = sample.feature(th.feature_index).values();
            scores.par_iter_mut()
                .zip(column)
                .for_each(|(s, &x)| { *s += a * th.predict_value(x) as f64; });
        }
        scores
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::weak_learner::Direction;

    fn bounds() -> Vec<FeatureBound> {
        vec![
            FeatureBound { min: -1.0, max: 1.0 },
            FeatureBound { min:  0.0, max: 5.0 },
        ]
    }

    #[test]
    fn push_overwrites_presized_slots() {
        let th = Threshold::new(0, 0.0, Direction::Up);
        let mut model = Model::from_parts(
            0, bounds(), vec![th; 3], vec![9.0; 3]
        ).unwrap();

        let new = Threshold::new(1, 2.5, Direction::Down);
        model.push(new, 0.75);

        assert_eq!(model.round_count(), 1);
        assert_eq!(model.thresholds(), &[new]);
        assert_eq!(model.alpha(), &[0.75]);
    }

    #[test]
    fn validate_rejects_short_vectors() {
        let th = Threshold::new(0, 0.0, Direction::Up);
        let res = Model::from_parts(2, bounds(), vec![th], vec![1.0, 1.0]);
        assert!(matches!(res, Err(BoostError::InvalidInput(_))));
    }

    #[test]
    fn validate_rejects_unknown_feature() {
        let th = Threshold::new(2, 0.0, Direction::Up);
        let res = Model::from_parts(1, bounds(), vec![th], vec![1.0]);
        assert!(res.is_err());
    }

    #[test]
    fn validate_ignores_entries_past_round_count() {
        let good = Threshold::new(1, 0.0, Direction::Up);
        let junk = Threshold::new(99, f64::NAN, Direction::Up);
        let res = Model::from_parts(
            1, bounds(), vec![good, junk], vec![1.0, f64::NAN]
        );
        assert!(res.is_ok());
    }

    #[test]
    fn json_roundtrip() {
        let mut model = Model::new(bounds(), 4);
        model.push(Threshold::new(0, 0.25, Direction::Up), 1.5);
        model.push(Threshold::new(1, 3.0, Direction::Down), 0.5);

        let json = model.to_json().unwrap();
        let back = Model::from_json(&json).unwrap();
        assert_eq!(back, model);
    }
}
