//! The files in `weak_learner/` directory defines
//! `WeakLearner` trait and weak learners.

/// Provides WeakLearner trait.
pub mod core;

/// Defines the histogram-searched decision stump.
pub mod decision_stump;


pub use self::core::{
    WeakLearner,
    Proposal,
};

pub use self::decision_stump::{
    DecisionStump,
    DecisionStumpBuilder,
    BinnedMinimum,
    Direction,
    FeatureBound,
    Threshold,
};
