//! The core library for `Hypothesis` traits.

pub(crate) mod classifier;


pub use classifier::Classifier;
