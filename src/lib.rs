#![warn(missing_docs)]

//!
//! A crate that provides AdaBoost over histogram-searched decision stumps
//! for binary classification.
//!
//! Each round, [`DecisionStump`] finds the single-feature threshold rule
//! with the smallest weighted error.
//! The search runs over a fixed number of bins per feature,
//! so one round costs `O(m d + B d)` time
//! for `m` examples, `d` features, and `B` bins.
//! [`AdaBoost`] combines the rules into a [`Model`],
//! a weighted majority vote that can be saved as JSON.
//!
//! # Example
//! ```
//! use adastump::prelude::*;
//!
//! let sample = Sample::from_rows(
//!     &[[0.0], [1.0], [2.0], [3.0]],
//!     vec![-1.0, -1.0, 1.0, 1.0],
//! ).unwrap();
//!
//! let mut booster = AdaBoost::init(&sample)
//!     .unwrap()
//!     .max_weak_count(10);
//! let termination = booster.train();
//! assert_eq!(termination, Termination::Converged { round: 0 });
//!
//! let predictions = booster.predict(&sample).unwrap();
//! assert_eq!(predictions, vec![-1, -1, 1, 1]);
//! ```

pub mod booster;
pub mod checkers;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod hypothesis;
pub mod logging;
pub mod model;
pub mod prelude;
pub mod sample;
pub mod weak_learner;


/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV file to [`Sample`].
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use adastump::SampleReader;
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::default()
///     .file(filename)
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// ```
pub use sample::{
    SampleReader,
    Sample,
    Feature,
};

pub use weak_learner::{
    WeakLearner,
    Proposal,
    DecisionStump,
    DecisionStumpBuilder,
    Direction,
    FeatureBound,
    Threshold,
};

pub use booster::{
    AdaBoost,
    Booster,
    State,
    Termination,
};

pub use hypothesis::Classifier;

pub use model::Model;

pub use error::{BoostError, Result};

pub use logging::{
    ConsoleLogger,
    CsvLogger,
    Event,
    Recorder,
    RoundRecord,
    Silent,
    TrainingObserver,
};
