//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::{
    Feature,
    Sample,
    constants::SIMPLEX_TOLERANCE,
    error::{BoostError, Result},
};


/// Check whether the training sample is valid or not.
#[inline(always)]
pub fn sample(sample: &Sample) -> Result<()> {
    let (n_sample, n_feature) = sample.shape();

    if n_sample == 0 {
        return Err(BoostError::invalid("the sample has no example"));
    }

    if n_feature == 0 {
        return Err(BoostError::invalid("the sample has no feature"));
    }
    Ok(())
}


/// Check whether the feature columns form a fully populated matrix.
#[inline(always)]
pub fn features(features: &[Feature]) -> Result<()> {
    let n_sample = match features.first() {
        Some(feat) => feat.len(),
        None => {
            return Err(BoostError::invalid("the sample has no feature"));
        },
    };

    if n_sample == 0 {
        return Err(BoostError::invalid("the sample has no example"));
    }

    for feat in features {
        if feat.len() != n_sample {
            return Err(BoostError::invalid(format!(
                "feature `{}` has {} values, expected {n_sample}",
                feat.name(), feat.len(),
            )));
        }

        if let Some(x) = feat.iter().find(|x| !x.is_finite()) {
            return Err(BoostError::invalid(format!(
                "feature `{}` contains a non-finite value {x}",
                feat.name(),
            )));
        }
    }
    Ok(())
}


/// Check whether `target` holds one label in `{-1, +1}`
/// per example.
#[inline(always)]
pub fn target(target: &[f64], n_sample: usize) -> Result<()> {
    if target.len() != n_sample {
        return Err(BoostError::invalid(format!(
            "got {} labels for {n_sample} examples",
            target.len(),
        )));
    }

    let invalid = target.iter()
        .filter(|&&y| y != 1.0 && y != -1.0)
        .take(5)
        .map(|y| y.to_string())
        .collect::<Vec<_>>();
    if !invalid.is_empty() {
        let line = invalid.join(", ");
        return Err(BoostError::invalid(format!(
            "labels must be -1 or +1. Ex. [{line}, ...]"
        )));
    }
    Ok(())
}


/// Check the number of bins.
#[inline(always)]
pub fn n_bins(n_bins: usize) -> Result<()> {
    if n_bins == 0 {
        return Err(BoostError::invalid("the number of bins must be positive"));
    }
    Ok(())
}


/// Check whether `dist` holds one finite, non-negative weight
/// per example of a sample of size `n_sample`.
#[inline(always)]
pub fn distribution(dist: &[f64], n_sample: usize) -> Result<()> {
    if dist.len() != n_sample {
        return Err(BoostError::invalid(format!(
            "got {} weights for {n_sample} examples",
            dist.len(),
        )));
    }

    if let Some(i) = dist.iter().position(|d| !(d.is_finite() && *d >= 0f64)) {
        return Err(BoostError::invalid(
            format!("the weight of example {i} is not finite and non-negative")
        ));
    }
    Ok(())
}


/// Returns `true` if `slice` is a probability distribution.
#[inline(always)]
pub fn is_distribution(slice: &[f64]) -> bool {
    let sum = slice.iter().sum::<f64>();
    (sum - 1f64).abs() < SIMPLEX_TOLERANCE
        && slice.iter().all(|&d| d >= 0f64)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_features_success_01() {
        let feats = vec![
            Feature::with_values("a", vec![1.0, 2.0]),
            Feature::with_values("b", vec![0.0, -3.5]),
        ];
        assert!(features(&feats[..]).is_ok());
    }

    #[test]
    fn test_features_failure_empty() {
        assert!(features(&[]).is_err());
        let feats = vec![Feature::new("a")];
        assert!(features(&feats[..]).is_err());
    }

    #[test]
    fn test_features_failure_ragged() {
        let feats = vec![
            Feature::with_values("a", vec![1.0, 2.0]),
            Feature::with_values("b", vec![0.0]),
        ];
        assert!(features(&feats[..]).is_err());
    }

    #[test]
    fn test_features_failure_nan() {
        let feats = vec![Feature::with_values("a", vec![1.0, f64::NAN])];
        assert!(features(&feats[..]).is_err());
    }

    #[test]
    fn test_target_success_01() {
        assert!(target(&[1.0, -1.0, -1.0], 3).is_ok());
    }

    #[test]
    fn test_target_failure_length() {
        assert!(target(&[1.0, -1.0], 3).is_err());
    }

    #[test]
    fn test_target_failure_domain() {
        let err = target(&[1.0, 0.0, 2.0], 3).unwrap_err();
        assert!(matches!(err, BoostError::InvalidInput(_)));
    }

    #[test]
    fn test_n_bins() {
        assert!(n_bins(1).is_ok());
        assert!(n_bins(0).is_err());
    }

    #[test]
    fn test_distribution() {
        assert!(distribution(&[0.5, 0.5], 2).is_ok());

        let err = distribution(&[0.5, 0.5], 4).unwrap_err();
        assert!(matches!(err, BoostError::InvalidInput(_)));

        assert!(distribution(&[1.5, -0.5], 2).is_err());
        assert!(distribution(&[f64::NAN, 1.0], 2).is_err());
    }

    #[test]
    fn test_is_distribution() {
        assert!(is_distribution(&[0.25; 4]));
        assert!(!is_distribution(&[0.5; 4]));
        assert!(!is_distribution(&[1.5, -0.5]));
    }
}
