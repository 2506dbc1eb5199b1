//! Defines the error type returned by this crate.
use thiserror::Error;


/// Errors surfaced to the caller.
///
/// A weak learner that fails to beat random guessing is **not** an error;
/// see [`Termination::WeakLearnerFailed`](crate::Termination).
#[derive(Debug, Error)]
pub enum BoostError {
    /// `test`, `predict`, `get_model` or `get_training_errors`
    /// was called before a model was trained or injected.
    #[error("model hasn't been trained or set")]
    ModelNotReady,

    /// A precondition on the given data or model is violated.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A line of an input file could not be parsed.
    #[error("failed to parse line {line}: {message}")]
    Parse {
        /// 1-indexed line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// Reading or writing a file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A model could not be (de)serialized as JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A `polars` column could not be converted.
    #[error(transparent)]
    Polars(#[from] polars::prelude::PolarsError),
}


impl BoostError {
    #[inline]
    pub(crate) fn invalid<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput(message.into())
    }
}


/// A shorthand for `std::result::Result<T, BoostError>`.
pub type Result<T> = std::result::Result<T, BoostError>;
