//! Exports the standard boosting algorithms and traits.
//!
pub use crate::booster::{
    // Booster trait
    Booster,

    AdaBoost,
    State,
    Termination,
};


pub use crate::weak_learner::{
    // Weak Learner trait
    WeakLearner,

    DecisionStump,
    DecisionStumpBuilder,
    Direction,
    Threshold,
};


pub use crate::hypothesis::Classifier;
pub use crate::model::Model;


pub use crate::sample::{
    Feature,
    Sample,
    SampleReader,
};


pub use crate::logging::{
    ConsoleLogger,
    CsvLogger,
    Recorder,
    TrainingObserver,
};


pub use crate::error::BoostError;
