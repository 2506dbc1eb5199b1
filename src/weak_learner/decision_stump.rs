//! Defines the decision stump weak learner.
//!
//! Feature values are assigned to equal-width bins once,
//! so each call to `produce` costs `O(bins × features + samples)`
//! instead of sorting every feature per round.

mod builder;
mod dstump;
mod histogram;
mod threshold;


pub use builder::DecisionStumpBuilder;
pub use dstump::{DecisionStump, BinnedMinimum};
pub use threshold::{Direction, FeatureBound, Threshold};
