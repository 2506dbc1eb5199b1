//! Reporting for the boosting loop.
//!
//! [`AdaBoost`](crate::AdaBoost) reports its progress as [`Event`]s
//! to a [`TrainingObserver`].
//! Reporting is advisory: observers cannot alter the training,
//! and they never see the distribution over examples.

mod observer;
mod console;
mod csv;
mod recorder;


pub use observer::{
    Event,
    RoundRecord,
    Silent,
    TrainingObserver,
};
pub use console::ConsoleLogger;
pub use csv::CsvLogger;
pub use recorder::Recorder;
