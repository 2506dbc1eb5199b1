//! Provides some helper functions.
use rayon::prelude::*;


/// Maps a real-valued score to a label in `{-1, +1}`.
/// Non-negative scores are mapped to `+1`.
#[inline(always)]
pub fn sign(score: f64) -> i64 {
    if score >= 0f64 { 1 } else { -1 }
}


/// Returns the fraction of `predictions` that disagree with `target`.
///
/// Time complexity: `O(m)`, where `m` is the number of examples.
#[inline(always)]
pub fn zero_one_loss(predictions: &[i64], target: &[f64]) -> f64 {
    let n_sample = target.len() as f64;
    let mistakes = predictions.iter()
        .zip(target)
        .filter(|(p, y)| **p as f64 != **y)
        .count();
    mistakes as f64 / n_sample
}


/// Returns the total weight of the examples
/// that `predictions` misclassifies.
#[inline(always)]
pub fn weighted_error(predictions: &[i64], target: &[f64], dist: &[f64])
    -> f64
{
    predictions.iter()
        .zip(target)
        .zip(dist)
        .filter_map(|((&p, &y), &d)| if p as f64 != y { Some(d) } else { None })
        .sum::<f64>()
}


/// Converts `log_dist`, the logarithm of an unnormalized distribution,
/// into a probability distribution in place.
/// The normalizer is computed by the log-sum-exp trick
/// so that no intermediate value overflows.
#[inline(always)]
pub fn normalize_log_distribution(log_dist: &mut [f64]) {
    let max = log_dist.iter()
        .copied()
        .fold(f64::MIN, f64::max);

    let normalizer = max + log_dist.iter()
        .map(|&d| (d - max).exp())
        .sum::<f64>()
        .ln();

    log_dist.par_iter_mut()
        .for_each(|d| { *d = (*d - normalizer).exp(); });
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_of_zero_is_positive() {
        assert_eq!(sign(0.0), 1);
        assert_eq!(sign(-0.0), 1);
        assert_eq!(sign(1e-300), 1);
        assert_eq!(sign(-1e-300), -1);
    }

    #[test]
    fn zero_one_loss_counts_mistakes() {
        let loss = zero_one_loss(&[1, -1, 1, 1], &[1.0, 1.0, 1.0, -1.0]);
        assert_eq!(loss, 0.5);
    }

    #[test]
    fn weighted_error_sums_mistaken_weights() {
        let err = weighted_error(
            &[1, -1, 1], &[1.0, 1.0, -1.0], &[0.5, 0.25, 0.25]
        );
        assert_eq!(err, 0.5);
    }

    #[test]
    fn normalize_log_distribution_survives_huge_exponents() {
        let mut dist = vec![1_000.0, 1_000.0, 999.0, -1_000.0];
        normalize_log_distribution(&mut dist[..]);

        let sum = dist.iter().sum::<f64>();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!(dist.iter().all(|d| d.is_finite() && *d >= 0.0));
        assert!((dist[0] - dist[1]).abs() < 1e-15);
        assert!(dist[2] < dist[0]);
    }
}
