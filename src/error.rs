//! Error types returned by the classifiers in this crate.

use thiserror::Error;


/// Result type alias used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;


/// Errors raised by [`Sample`](crate::Sample) construction,
/// [`LearnerConfig`](crate::LearnerConfig) validation,
/// and the `fit`/`predict` family of methods.
#[derive(Error, Debug)]
pub enum Error {
    /// Feature-count or row-count disagreement between arguments,
    /// or against the fitted weight vector.
    #[error("dimension mismatch ({context}): expected {expected}, found {found}")]
    DimensionMismatch {
        /// What was being compared.
        context: &'static str,
        /// The expected length.
        expected: usize,
        /// The length actually given.
        found: usize,
    },

    /// Hyperparameters outside of the accepted range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// `predict`/`net_input` was called before a successful `fit`.
    #[error("the classifier is not fitted yet. Call `fit` first")]
    NotFitted,

    /// A target value other than `0` or `1`.
    #[error("invalid label {0}: expected 0 or 1")]
    InvalidLabel(f64),

    /// An empty sample, a sample without features, or a missing value.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Conversion from a `polars::DataFrame` failed.
    #[error("polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// Reading a configuration failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing a training log failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}


impl Error {
    #[inline(always)]
    pub(crate) fn dimension(
        context: &'static str,
        expected: usize,
        found: usize,
    ) -> Self
    {
        Self::DimensionMismatch { context, expected, found }
    }
}
