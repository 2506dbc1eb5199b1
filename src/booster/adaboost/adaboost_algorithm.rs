//! Provides [`AdaBoost`](AdaBoost) by Freund & Schapire, 1995.
use rayon::prelude::*;

use crate::{
    Booster,
    Classifier,
    Sample,
    Model,
    State,
    Termination,
    WeakLearner,
    constants::{DEFAULT_MAX_WEAK_COUNT, RANDOM_GUESS_ERROR},
    error::{BoostError, Result},
    helpers,
    logging::{Event, RoundRecord, Silent, TrainingObserver},
    weak_learner::{
        DecisionStump,
        DecisionStumpBuilder,
        FeatureBound,
        Proposal,
        Threshold,
    },
};

use std::ops::ControlFlow;
use std::time::{Duration, Instant};


/// Returns the weight of a hypothesis with weighted error `error`.
///
/// `error` is floored at the machine epsilon,
/// so a perfect hypothesis gets a large but finite weight.
#[inline]
pub fn alpha(error: f64) -> f64 {
    0.5 * ((1.0 - error) / error.max(f64::EPSILON)).ln()
}


/// Defines `AdaBoost`.
/// This struct is based on the book: 
/// [Boosting: Foundations and Algorithms](https://direct.mit.edu/books/oa-monograph/5342/BoostingFoundations-and-Algorithms)
/// by Robert E. Schapire and Yoav Freund.
///
/// `AdaBoost` owns its weak learner and borrows the training sample
/// for its whole lifetime.
/// Training stops at the first of
/// - zero training error ([`Termination::Converged`]),
/// - `max_weak_count` rounds ([`Termination::Capped`]),
/// - a hypothesis with weighted error `>= 0.5`
///   ([`Termination::WeakLearnerFailed`]).
///
/// # Example
/// ```no_run
/// use adastump::prelude::*;
///
/// // Read the training sample from the CSV file.
/// // We use the column named `class` as the label.
/// let train = SampleReader::default()
///     .file("/path/to/train.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let mut booster = AdaBoost::init(&train)
///     .unwrap()
///     .max_weak_count(200)
///     .observer(ConsoleLogger::new().print_every(20));
///
/// let termination = booster.train();
/// println!("{termination}");
///
/// let test = SampleReader::default()
///     .file("/path/to/test.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// let (predictions, error) = booster.test(&test).unwrap();
/// println!("Test error: {error}");
/// ```
pub struct AdaBoost<'a, W = DecisionStump<'a>> {
    // Training sample
    sample: &'a Sample,

    weak_learner: W,

    observer: Box<dyn TrainingObserver + 'a>,

    max_weak_count: usize,

    // Distribution on sample.
    dist: Vec<f64>,

    // Ensemble score of each training example.
    scores: Vec<f64>,

    // Training error of the ensemble after each completed round.
    training_errors: Vec<f64>,

    model: Option<Model>,
    state: State,
    termination: Option<Termination>,

    // Cumulative running time.
    time_acc: Duration,
}


impl<'a> AdaBoost<'a> {
    /// Initialize the `AdaBoost`
    /// with a [`DecisionStump`] of the default number of bins.
    pub fn init(sample: &'a Sample) -> Result<Self> {
        let weak_learner = DecisionStumpBuilder::new(sample).build()?;
        Self::with_weak_learner(sample, weak_learner)
    }
}


impl<'a, W> AdaBoost<'a, W>
    where W: WeakLearner<Hypothesis = Threshold>
{
    /// Initialize the `AdaBoost` with the given weak learner.
    /// `weak_learner` must search over the same `sample`.
    pub fn with_weak_learner(sample: &'a Sample, weak_learner: W)
        -> Result<Self>
    {
        sample.is_valid_binary_instance()?;

        let n_sample = sample.shape().0;
        if weak_learner.n_sample() != n_sample {
            return Err(BoostError::invalid(format!(
                "the weak learner is built on {} examples, \
                 but the sample has {n_sample}",
                weak_learner.n_sample(),
            )));
        }

        let uni = 1.0 / n_sample as f64;
        Ok(Self {
            sample,
            weak_learner,
            observer: Box::new(Silent),
            max_weak_count: DEFAULT_MAX_WEAK_COUNT,

            dist: vec![uni; n_sample],
            scores: vec![0f64; n_sample],
            training_errors: Vec::new(),

            model: None,
            state: State::Untrained,
            termination: None,
            time_acc: Duration::ZERO,
        })
    }


    /// Set the maximum number of rounds.
    /// The default value is `100`.
    pub fn max_weak_count(mut self, max_weak_count: usize) -> Self {
        self.set_max_weak_count(max_weak_count);
        self
    }


    /// Set the maximum number of rounds.
    /// Takes effect on the next call of [`AdaBoost::train`].
    pub fn set_max_weak_count(&mut self, max_weak_count: usize) {
        self.max_weak_count = max_weak_count;
    }


    /// Set the reporting destination.
    /// Nothing is reported by default.
    pub fn observer<O>(mut self, observer: O) -> Self
        where O: TrainingObserver + 'a
    {
        self.observer = Box::new(observer);
        self
    }


    /// Runs boosting from scratch on the training sample.
    /// Any previous model is discarded.
    pub fn train(&mut self) -> Termination {
        self.run()
    }


    /// Returns the predictions of the model on `sample`
    /// and the fraction of misclassified examples.
    pub fn test(&self, sample: &Sample) -> Result<(Vec<i64>, f64)> {
        let model = self.ready_model()?;
        model.check_compatible(sample)?;
        sample.is_valid_binary_instance()?;

        let predictions = model.predict_all(sample);
        let error = helpers::zero_one_loss(&predictions[..], sample.target());

        let n_sample = sample.shape().0;
        self.observer.notify(&Event::Tested { n_sample, error });

        Ok((predictions, error))
    }


    /// Returns the predictions of the model on `sample`.
    /// Labels of `sample`, if any, are ignored.
    pub fn predict(&self, sample: &Sample) -> Result<Vec<i64>> {
        let model = self.ready_model()?;
        model.check_compatible(sample)?;
        Ok(model.predict_all(sample))
    }


    /// Replaces the model.
    /// The booster becomes `Trained` without running any round,
    /// and has no training error history.
    pub fn set_model(&mut self, model: Model) -> Result<()> {
        model.validate()?;
        self.model = Some(model);
        self.training_errors.clear();
        self.termination = None;
        self.state = State::Trained;
        Ok(())
    }


    /// Returns the current model.
    pub fn get_model(&self) -> Result<&Model> {
        self.ready_model()
    }


    /// Returns the training error of the ensemble
    /// after each completed round.
    pub fn get_training_errors(&self) -> Result<&[f64]> {
        self.ready_model()?;
        Ok(&self.training_errors[..])
    }


    /// Returns the current state.
    pub fn state(&self) -> State {
        self.state
    }


    /// Returns why the last training run has stopped.
    /// `None` before training and after [`AdaBoost::set_model`].
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }


    fn ready_model(&self) -> Result<&Model> {
        match (&self.state, &self.model) {
            (State::Trained, Some(model)) => Ok(model),
            _ => Err(BoostError::ModelNotReady),
        }
    }


    /// Updates `self.dist` in log-space,
    /// so that no weight overflows for large `alpha`.
    fn update_params(&mut self, predictions: &[i64], alpha: f64) {
        let target = self.sample.target();

        self.dist.par_iter_mut()
            .zip(predictions)
            .zip(target)
            .for_each(|((d, &p), &y)| {
                *d = d.ln() - alpha * y * p as f64;
            });

        helpers::normalize_log_distribution(&mut self.dist[..]);
    }


    /// Adds the new hypothesis to the ensemble score
    /// and returns the training error of the ensemble.
    fn update_scores(&mut self, predictions: &[i64], alpha: f64) -> f64 {
        self.scores.par_iter_mut()
            .zip(predictions)
            .for_each(|(s, &p)| { *s += alpha * p as f64; });

        let ensemble = self.scores.par_iter()
            .map(|&s| helpers::sign(s))
            .collect::<Vec<i64>>();

        helpers::zero_one_loss(&ensemble[..], self.sample.target())
    }
}


impl<'a, W> Booster for AdaBoost<'a, W>
    where W: WeakLearner<Hypothesis = Threshold>
{
    type Output = Termination;


    fn name(&self) -> &str {
        "AdaBoost"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let (n_sample, n_feature) = self.sample.shape();
        let info = Vec::from([
            ("# of examples", format!("{n_sample}")),
            ("# of features", format!("{n_feature}")),
            ("Max weak count", format!("{}", self.max_weak_count)),
        ]);
        Some(info)
    }


    fn preprocess(&mut self) {
        let n_sample = self.sample.shape().0;
        let uni = 1.0 / n_sample as f64;
        self.dist = vec![uni; n_sample];
        self.scores = vec![0f64; n_sample];
        self.training_errors = Vec::new();

        let bounds = FeatureBound::of_sample(self.sample);
        let capacity = self.max_weak_count.min(DEFAULT_MAX_WEAK_COUNT);
        self.model = Some(Model::new(bounds, capacity));
        self.termination = None;
        self.state = State::Training;
        self.time_acc = Duration::ZERO;

        let info = self.info()
            .into_iter()
            .chain(self.weak_learner.info())
            .flatten()
            .map(|(key, val)| (key.to_string(), val))
            .collect::<Vec<_>>();
        self.observer.notify(&Event::Started {
            booster: self.name().to_string(),
            weak_learner: self.weak_learner.name().to_string(),
            info,
        });
    }


    fn boost(&mut self, round: usize) -> ControlFlow<Termination> {
        if round >= self.max_weak_count {
            return ControlFlow::Break(Termination::Capped { rounds: round });
        }

        let now = Instant::now();

        // Get a new hypothesis
        let Proposal { hypothesis, predictions, error }
            = self.weak_learner.produce(&self.dist[..]);


        // The rejected hypothesis never enters the model.
        if error >= RANDOM_GUESS_ERROR {
            self.time_acc += now.elapsed();
            return ControlFlow::Break(
                Termination::WeakLearnerFailed { round, error }
            );
        }


        let alpha = alpha(error);
        self.update_params(&predictions[..], alpha);
        let training_error = self.update_scores(&predictions[..], alpha);

        if let Some(model) = self.model.as_mut() {
            model.push(hypothesis, alpha);
        }
        self.training_errors.push(training_error);

        self.time_acc += now.elapsed();

        self.observer.notify(&Event::Round(RoundRecord {
            round,
            feature_index: hypothesis.feature_index,
            value: hypothesis.value,
            direction: hypothesis.direction,
            weighted_error: error,
            alpha,
            training_error,
            elapsed_millis: self.time_acc.as_millis(),
        }));

        if training_error == 0f64 {
            return ControlFlow::Break(Termination::Converged { round });
        }
        ControlFlow::Continue(())
    }


    fn postprocess(&mut self, flow: ControlFlow<Termination>) -> Termination {
        let round_count = self.model.as_ref()
            .map_or(0, |model| model.round_count());

        let termination = match flow {
            ControlFlow::Break(termination) => termination,
            ControlFlow::Continue(()) => {
                Termination::Capped { rounds: round_count }
            },
        };

        self.termination = Some(termination);
        self.state = State::Trained;

        self.observer.notify(&Event::Finished {
            termination,
            round_count,
            training_error: self.training_errors.last().copied(),
            elapsed_millis: self.time_acc.as_millis(),
        });

        termination
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers;

    fn noisy_line() -> Sample {
        let rows = [[0.0], [1.0], [2.0], [3.0], [4.0], [5.0]];
        let labels = vec![-1.0, 1.0, -1.0, 1.0, 1.0, -1.0];
        Sample::from_rows(&rows, labels).unwrap()
    }


    #[test]
    fn dist_stays_on_simplex() {
        let sample = noisy_line();
        let mut booster = AdaBoost::init(&sample)
            .unwrap()
            .max_weak_count(20);

        booster.preprocess();
        assert!(checkers::is_distribution(&booster.dist[..]));

        for round in 0..20 {
            let flow = booster.boost(round);
            assert!(
                checkers::is_distribution(&booster.dist[..]),
                "round {round}: {:?}", booster.dist,
            );
            if flow.is_break() { break; }
        }
    }


    #[test]
    fn misclassified_examples_get_heavier() {
        let sample = noisy_line();
        let mut booster = AdaBoost::init(&sample).unwrap();

        booster.preprocess();
        let before = booster.dist.clone();
        let flow = booster.boost(0);
        assert!(flow.is_continue());

        let stump = booster.model.as_ref().unwrap().thresholds()[0];
        let predictions = stump.classify(&sample);
        for (i, (&p, &y)) in predictions.iter().zip(sample.target()).enumerate() {
            if p as f64 == y {
                assert!(booster.dist[i] < before[i]);
            } else {
                assert!(booster.dist[i] > before[i]);
            }
        }
    }


    #[test]
    fn running_time_keeps_sub_millisecond_rounds() {
        let sample = noisy_line();
        let mut booster = AdaBoost::init(&sample)
            .unwrap()
            .max_weak_count(3);

        booster.preprocess();
        assert_eq!(booster.time_acc, Duration::ZERO);

        let mut previous = Duration::ZERO;
        for round in 0..3 {
            let flow = booster.boost(round);
            assert!(booster.time_acc > previous, "round {round}");
            previous = booster.time_acc;
            if flow.is_break() { break; }
        }
    }


    #[test]
    fn alpha_is_positive_below_half() {
        assert!(alpha(0.49) > 0.0);
        assert!(alpha(0.25) > alpha(0.49));
        assert_eq!(alpha(0.5), 0.0);
    }


    #[test]
    fn alpha_is_large_and_finite_near_zero() {
        for error in [0.0, f64::EPSILON, 1e-300] {
            let a = alpha(error);
            assert!(a.is_finite(), "alpha({error}) = {a}");
            assert!(a > 15.0, "alpha({error}) = {a}");
        }
    }


    #[test]
    fn state_moves_to_trained() {
        let sample = noisy_line();
        let mut booster = AdaBoost::init(&sample).unwrap().max_weak_count(3);
        assert_eq!(booster.state(), State::Untrained);
        assert!(booster.termination().is_none());

        let termination = booster.train();
        assert_eq!(booster.state(), State::Trained);
        assert_eq!(booster.termination(), Some(termination));
        assert_eq!(
            booster.get_model().unwrap().round_count(),
            termination.round_count(),
        );
    }
}
