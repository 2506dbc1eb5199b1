use crate::booster::Termination;
use crate::weak_learner::Direction;


/// The outcome of a single boosting round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundRecord {
    /// 0-indexed round.
    pub round: usize,
    /// Feature the round's stump looks at.
    pub feature_index: usize,
    /// Cut value of the round's stump.
    pub value: f64,
    /// Direction of the round's stump.
    pub direction: Direction,
    /// Weighted error of the stump.
    pub weighted_error: f64,
    /// Weight of the stump in the ensemble.
    pub alpha: f64,
    /// Training error of the ensemble after this round.
    pub training_error: f64,
    /// Cumulative running time in milliseconds.
    pub elapsed_millis: u128,
}


/// Things a booster reports.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Training has started.
    Started {
        /// Name of the booster.
        booster: String,
        /// Name of the weak learner.
        weak_learner: String,
        /// Parameters of the booster and the weak learner.
        info: Vec<(String, String)>,
    },
    /// A round has completed.
    Round(RoundRecord),
    /// Training has stopped.
    Finished {
        /// Why training has stopped.
        termination: Termination,
        /// Number of rounds in the resulting model.
        round_count: usize,
        /// Training error of the resulting model,
        /// `None` if no round has completed.
        training_error: Option<f64>,
        /// Cumulative running time in milliseconds.
        elapsed_millis: u128,
    },
    /// A model has been evaluated on a labeled sample.
    Tested {
        /// Number of evaluated examples.
        n_sample: usize,
        /// Fraction of misclassified examples.
        error: f64,
    },
}


/// An event sink.
pub trait TrainingObserver {
    /// Receives an event.
    fn notify(&self, event: &Event);
}


impl<T> TrainingObserver for &T
    where T: TrainingObserver + ?Sized,
{
    fn notify(&self, event: &Event) {
        (**self).notify(event)
    }
}


/// An observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;


impl TrainingObserver for Silent {
    fn notify(&self, _event: &Event) {}
}
