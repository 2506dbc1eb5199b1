use crate::{Sample, helpers};


/// A trait that defines the behavor of classifier.
/// You only need to implement `confidence` method.
pub trait Classifier {
    /// Computes the confidence of the i'th row of the `sample`.
    /// The sign of the confidence is the predicted label.
    fn confidence(&self, sample: &Sample, row: usize) -> f64;


    /// Predicts the label of the i'th row of the `sample`.
    /// A confidence of exactly `0.0` is predicted as `+1`.
    fn predict(&self, sample: &Sample, row: usize) -> i64 {
        helpers::sign(self.confidence(sample, row))
    }


    /// Computes the confidence of every row of `sample`.
    fn confidence_all(&self, sample: &Sample) -> Vec<f64> {
        let n_sample = sample.shape().0;
        (0..n_sample).map(|row| self.confidence(sample, row))
            .collect::<Vec<_>>()
    }


    /// Predicts the labels of `sample`.
    fn predict_all(&self, sample: &Sample) -> Vec<i64> {
        self.confidence_all(sample)
            .into_iter()
            .map(helpers::sign)
            .collect::<Vec<_>>()
    }
}
