//! Provides `Booster` trait.
use std::fmt;
use std::ops::ControlFlow;


/// Why a training run has stopped.
///
/// None of the variants is an error:
/// the model built so far is usable in every case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Termination {
    /// The ensemble classifies every training example correctly
    /// after the 0-indexed round `round`.
    Converged {
        /// The last round.
        round: usize,
    },
    /// The round limit has been reached.
    Capped {
        /// Number of completed rounds.
        rounds: usize,
    },
    /// The weak learner could not beat random guessing at `round`.
    /// That round is not part of the model.
    WeakLearnerFailed {
        /// The failed round.
        round: usize,
        /// Weighted error of the rejected hypothesis.
        error: f64,
    },
}


impl Termination {
    /// Returns the number of rounds in the resulting model.
    pub fn round_count(&self) -> usize {
        match self {
            Self::Converged { round } => round + 1,
            Self::Capped { rounds } => *rounds,
            Self::WeakLearnerFailed { round, .. } => *round,
        }
    }
}


impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Converged { round } => {
                write!(f, "Converged: zero training error at round {round}")
            },
            Self::Capped { rounds } => {
                write!(f, "Capped: reached the limit of {rounds} rounds")
            },
            Self::WeakLearnerFailed { round, error } => {
                write!(
                    f,
                    "Weak learner failed at round {round} \
                    (weighted error {error:.5} >= 0.5)"
                )
            },
        }
    }
}


/// Lifecycle of a booster.
///
/// `Untrained -> Training -> Trained`.
/// Injecting a model moves a booster directly to `Trained`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// No model is available yet.
    Untrained,
    /// Rounds are running.
    Training,
    /// A model is available for inference.
    Trained,
}


/// The trait [`Booster`] defines the standard framework of Boosting.
/// Here, the **standard framework** is defined as
/// a repeated game between **Booster** and **Weak Learner**
/// of the following form:
///
/// In each round `t = 0, 1, ...`,
/// 1. Booster chooses a probability distribution over
///    training instances.
/// 2. Weak Learner chooses a hypothesis that achieves
///    some **accuracy** with respect to the distribution.
///
/// The booster stops as soon as [`Booster::boost`] breaks
/// with a [`Termination`].
///
/// # Required Methods
/// - [`Booster::name`]
/// - [`Booster::preprocess`]
/// - [`Booster::boost`]
/// - [`Booster::postprocess`]
/// - [`Booster::info`] ... optional.
///
/// # Provided Methods
/// - [`Booster::run`]
pub trait Booster {
    /// The result of a whole run.
    type Output;

    /// Returns the name of the boosting algorithm.
    fn name(&self) -> &str;

    /// Returns the parameters of the boosting algorithm.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// A main function that runs boosting algorithm.
    fn run(&mut self) -> Self::Output {
        self.preprocess();

        let flow = (0..=usize::MAX).try_for_each(|round| self.boost(round));

        self.postprocess(flow)
    }


    /// Pre-processing for `self`.
    /// As you can see in [`Booster::run`],
    /// this method is called before the boosting process.
    fn preprocess(&mut self);


    /// Boosting step per round.
    /// Returns `ControlFlow::Break` with the reason
    /// if the booster should stop before the next round.
    fn boost(&mut self, round: usize) -> ControlFlow<Termination>;


    /// Post-processing.
    /// `flow` is the result of the last call of [`Booster::boost`].
    fn postprocess(&mut self, flow: ControlFlow<Termination>) -> Self::Output;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_count_of_each_termination() {
        assert_eq!(Termination::Converged { round: 0 }.round_count(), 1);
        assert_eq!(Termination::Capped { rounds: 7 }.round_count(), 7);
        let failed = Termination::WeakLearnerFailed { round: 3, error: 0.5 };
        assert_eq!(failed.round_count(), 3);
    }
}
