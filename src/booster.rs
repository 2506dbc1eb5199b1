//! Provides the boosting framework and [`AdaBoost`].

mod core;
mod adaboost;


/// Booster trait
pub use self::core::{
    Booster,
    State,
    Termination,
};

pub use self::adaboost::{
    AdaBoost,
    alpha,
};
