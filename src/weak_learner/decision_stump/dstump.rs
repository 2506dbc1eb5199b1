use rayon::prelude::*;

use crate::{
    Sample,
    WeakLearner,
    checkers,
    helpers,
    weak_learner::Proposal,
};
use super::histogram::Histogram;
use super::threshold::{Direction, FeatureBound, Threshold};


/// The minimum of the binned error surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinnedMinimum {
    /// Feature attaining the minimum.
    pub feature_index: usize,
    /// Bin whose left edge is the cut value.
    pub bin: usize,
    /// Direction attaining the minimum.
    pub direction: Direction,
    /// The binned weighted error.
    pub error: f64,
}


/// The decision stump weak learner.
///
/// On construction, every example is assigned a bin per feature.
/// Examples labeled `-1` are rounded down and examples labeled `+1`
/// are rounded up, so that for the cut
/// `value(k) = min + k * range / n_bins`,
/// ```txt
/// err_up(k) = Σ_{j >= k} hist_neg(j) + Σ_{j <= k} hist_pos(j)
/// ```
/// is the weighted error of "predict `+1` iff `x >= value(k)`".
/// The mirrored rule has error `total - err_up(k)`.
///
/// [`DecisionStump`] is constructed by [`DecisionStumpBuilder`].
///
/// [`DecisionStumpBuilder`]: super::DecisionStumpBuilder
///
/// # Example
/// ```no_run
/// use adastump::prelude::*;
///
/// let sample = SampleReader::default()
///     .file("/path/to/train.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let stump = DecisionStumpBuilder::new(&sample)
///     .n_bins(1_000)
///     .build()
///     .unwrap();
///
/// let n_sample = sample.shape().0;
/// let dist = vec![1f64 / n_sample as f64; n_sample];
/// let proposal = stump.produce(&dist);
/// println!("weighted error: {}", proposal.error);
/// ```
#[derive(Debug, Clone)]
pub struct DecisionStump<'a> {
    sample: &'a Sample,
    n_bins: usize,
    bounds: Vec<FeatureBound>,

    // Indices of the examples labeled `-1` / `+1`.
    negatives: Vec<usize>,
    positives: Vec<usize>,

    // `negative_bins[j][k]` is the bin of `negatives[k]` on feature `j`.
    negative_bins: Vec<Vec<usize>>,
    positive_bins: Vec<Vec<usize>>,
}


impl<'a> DecisionStump<'a> {
    /// Initialize [`DecisionStump`].
    /// The sample is assumed to be a valid binary instance.
    pub(super) fn new(sample: &'a Sample, n_bins: usize) -> Self {
        let bounds = FeatureBound::of_sample(sample);

        let (negatives, positives) = sample.target()
            .iter()
            .enumerate()
            .fold((Vec::new(), Vec::new()), |(mut neg, mut pos), (i, &y)| {
                if y > 0f64 { pos.push(i); } else { neg.push(i); }
                (neg, pos)
            });

        let (negative_bins, positive_bins): (Vec<Vec<usize>>, Vec<Vec<usize>>)
            = sample.features()
            .par_iter()
            .zip(bounds.par_iter())
            .map(|(feature, bound)| {
                let neg = negatives.iter()
                    .map(|&i| bound.negative_bin(feature[i], n_bins))
                    .collect::<Vec<_>>();
                let pos = positives.iter()
                    .map(|&i| bound.positive_bin(feature[i], n_bins))
                    .collect::<Vec<_>>();
                (neg, pos)
            })
            .unzip();

        Self {
            sample,
            n_bins,
            bounds,
            negatives,
            positives,
            negative_bins,
            positive_bins,
        }
    }


    /// Returns the number of bins per feature.
    pub fn n_bins(&self) -> usize {
        self.n_bins
    }


    /// Returns the padded range of each feature.
    pub fn bounds(&self) -> &[FeatureBound] {
        &self.bounds[..]
    }


    /// Finds the minimum of the binned error surface
    /// for the distribution `dist`.
    ///
    /// Ties are broken by the smallest feature index,
    /// then by the `Up` direction, then by the smallest bin.
    ///
    /// Panics if `dist` does not hold one weight per example.
    pub fn best_bin(&self, dist: &[f64]) -> BinnedMinimum {
        debug_assert!(
            checkers::distribution(dist, self.sample.shape().0).is_ok(),
            "expected {} weights, got {}",
            self.sample.shape().0, dist.len(),
        );
        let n_bins = self.n_bins;
        let total = dist.iter().sum::<f64>();

        let hist_neg = {
            let weights = self.negatives.iter()
                .map(|&i| dist[i])
                .collect::<Vec<_>>();
            Histogram::accumulate(n_bins, &self.negative_bins[..], &weights)
        };
        let hist_pos = {
            let weights = self.positives.iter()
                .map(|&i| dist[i])
                .collect::<Vec<_>>();
            Histogram::accumulate(n_bins, &self.positive_bins[..], &weights)
        };

        let n_feature = self.bounds.len();
        let minima = (0..n_feature).into_par_iter()
            .map(|j| {
                let err_up = upward_errors(hist_neg.column(j), hist_pos.column(j));
                first_minimum(&err_up[..], total)
            })
            .collect::<Vec<_>>();

        // Reduce in feature order so that the first minimum wins.
        let (feature_index, (row, error)) = minima.into_iter()
            .enumerate()
            .fold((0, (0, f64::INFINITY)), |best, (j, (row, err))| {
                if err < best.1.1 { (j, (row, err)) } else { best }
            });

        let (direction, bin) = if row < n_bins {
            (Direction::Up, row)
        } else {
            (Direction::Down, row - n_bins)
        };

        BinnedMinimum { feature_index, bin, direction, error, }
    }


    /// Converts a binned minimum into a stump.
    pub fn threshold(&self, minimum: &BinnedMinimum) -> Threshold {
        let bound = &self.bounds[minimum.feature_index];
        let value = bound.cut(minimum.bin, self.n_bins);
        Threshold::new(minimum.feature_index, value, minimum.direction)
    }
}


/// Returns `err_up(k)` for every bin `k` of a single feature.
#[inline(always)]
fn upward_errors(hist_neg: &[f64], hist_pos: &[f64]) -> Vec<f64> {
    let mut errors = vec![0f64; hist_neg.len()];

    let mut acc = 0f64;
    errors.iter_mut()
        .zip(hist_neg)
        .rev()
        .for_each(|(e, &w)| {
            acc += w;
            *e = acc;
        });

    let mut acc = 0f64;
    errors.iter_mut()
        .zip(hist_pos)
        .for_each(|(e, &w)| {
            acc += w;
            *e += acc;
        });

    errors
}


/// Returns the row and value of the first minimum
/// of the column `[err_up; total - err_up]`.
#[inline(always)]
fn first_minimum(err_up: &[f64], total: f64) -> (usize, f64) {
    let err_down = err_up.iter().map(|e| total - e);
    err_up.iter()
        .copied()
        .chain(err_down)
        .enumerate()
        .fold((0, f64::INFINITY), |best, (row, err)| {
            if err < best.1 { (row, err) } else { best }
        })
}


impl WeakLearner for DecisionStump<'_> {
    type Hypothesis = Threshold;


    fn name(&self) -> &str {
        "Decision Stump"
    }


    fn n_sample(&self) -> usize {
        self.sample.shape().0
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let (n_sample, n_feature) = self.sample.shape();
        let info = Vec::from([
            ("# of bins", format!("{}", self.n_bins)),
            ("# of examples", format!("{n_sample}")),
            ("# of features", format!("{n_feature}")),
        ]);
        Some(info)
    }


    /// Searches the binned error surface,
    /// then evaluates the winning stump on the raw feature values
    /// so that the returned error is exact.
    fn produce(&self, dist: &[f64]) -> Proposal<Threshold> {
        let minimum = self.best_bin(dist);
        let hypothesis = self.threshold(&minimum);

        let predictions = hypothesis.classify(self.sample);
        let error = helpers::weighted_error(
            &predictions[..], self.sample.target(), dist
        );

        Proposal { hypothesis, predictions, error, }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upward_errors_are_suffix_plus_prefix_sums() {
        let neg = [0.1, 0.0, 0.2, 0.0];
        let pos = [0.0, 0.3, 0.0, 0.4];
        let errors = upward_errors(&neg, &pos);

        let expected = [
            0.1 + 0.2,
            0.2 + 0.3,
            0.2 + 0.3,
            0.3 + 0.4,
        ];
        for (e, x) in errors.iter().zip(expected) {
            assert!((e - x).abs() < 1e-15, "{errors:?}");
        }
    }

    #[test]
    fn first_minimum_prefers_upward_rows() {
        let (row, err) = first_minimum(&[0.5, 0.5], 1.0);
        assert_eq!((row, err), (0, 0.5));

        let (row, err) = first_minimum(&[0.9, 0.7], 1.0);
        assert_eq!(row, 2);
        assert!((err - 0.1).abs() < 1e-15);
    }

    #[test]
    fn first_minimum_prefers_the_lowest_bin() {
        let (row, err) = first_minimum(&[0.5, 0.2, 0.2, 0.2, 0.6], 1.0);
        assert_eq!((row, err), (1, 0.2));

        let (row, _) = first_minimum(&[0.6, 0.9, 0.9, 0.7], 1.0);
        assert_eq!(row, 5);
    }

    #[test]
    fn bins_are_assigned_by_label() {
        let sample = Sample::from_rows(
            &[[0.0], [1.0], [2.0], [3.0]],
            vec![-1.0, -1.0, 1.0, 1.0],
        ).unwrap();
        let stump = DecisionStump::new(&sample, 4);

        assert_eq!(stump.negatives, vec![0, 1]);
        assert_eq!(stump.positives, vec![2, 3]);

        // Scaled positions are ~0, ~1.33, ~2.67, ~4.
        assert_eq!(stump.negative_bins, vec![vec![0, 1]]);
        assert_eq!(stump.positive_bins, vec![vec![3, 4]]);
    }

    #[test]
    fn binned_error_matches_exact_error() {
        let sample = Sample::from_rows(
            &[[0.0, 5.0], [1.0, 3.0], [2.0, 4.0], [3.0, 1.0], [4.0, 2.0]],
            vec![-1.0, 1.0, -1.0, 1.0, 1.0],
        ).unwrap();
        let stump = DecisionStump::new(&sample, 1_000);
        let dist = [0.1, 0.3, 0.2, 0.15, 0.25];

        let minimum = stump.best_bin(&dist);
        let proposal = stump.produce(&dist);
        assert!((minimum.error - proposal.error).abs() < 1e-12);

        // Feature 1 separates perfectly: x <= 3 is +1.
        assert_eq!(minimum.feature_index, 1);
        assert_eq!(minimum.direction, Direction::Down);
        assert!(proposal.error.abs() < 1e-12);
    }
}
