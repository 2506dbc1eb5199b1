use crate::{
    Sample,
    checkers,
    constants::DEFAULT_NBINS,
    error::Result,
};
use super::dstump::DecisionStump;


/// A struct that builds [`DecisionStump`].
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
/// let weak_learner = DecisionStumpBuilder::new(&sample)
///     .n_bins(10_000)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct DecisionStumpBuilder<'a> {
    sample: &'a Sample,
    n_bins: usize,
}


impl<'a> DecisionStumpBuilder<'a> {
    /// Construct a new instance of [`DecisionStumpBuilder`].
    pub fn new(sample: &'a Sample) -> Self {
        Self { sample, n_bins: DEFAULT_NBINS, }
    }


    /// Set the number of bins per feature.
    /// By default, each feature is cut into `100_000` bins.
    /// Two distinct values closer than `range / n_bins`
    /// may share a bin and cannot be separated.
    pub fn n_bins(mut self, n_bins: usize) -> Self {
        self.n_bins = n_bins;
        self
    }


    /// Build a `DecisionStump`.
    /// Fails if the sample is not a binary classification instance.
    pub fn build(self) -> Result<DecisionStump<'a>> {
        checkers::n_bins(self.n_bins)?;
        self.sample.is_valid_binary_instance()?;

        Ok(DecisionStump::new(self.sample, self.n_bins))
    }
}
