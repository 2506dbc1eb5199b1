//! The core library for the weak learner in the boosting protocol.
//!
//! Given a distribution over training examples,
//! the weak learner returns a hypothesis that minimizes
//! the weighted training error among its hypothesis class.


/// The answer of a weak learner for a given distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct Proposal<H> {
    /// The chosen hypothesis.
    pub hypothesis: H,
    /// Predictions of `hypothesis` on the training examples.
    pub predictions: Vec<i64>,
    /// Weighted training error of `predictions`.
    pub error: f64,
}


/// An interface that returns a weak hypothesis.
///
/// A weak learner is bound to the training sample it was built from;
/// `produce` receives one weight per example of that sample.
pub trait WeakLearner {
    /// Returned hypothesis generated by `self`.
    type Hypothesis;


    /// Returns the name of the weak learner.
    fn name(&self) -> &str;


    /// Returns the number of examples `self` was built on,
    /// i.e., the length `produce` expects of `dist`.
    fn n_sample(&self) -> usize;


    /// Returns the information of the weak learner as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Returns the hypothesis with the smallest weighted error
    /// with respect to the distribution `dist`.
    ///
    /// `dist` must hold [`WeakLearner::n_sample`] weights.
    fn produce(&self, dist: &[f64]) -> Proposal<Self::Hypothesis>;
}
