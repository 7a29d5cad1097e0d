//! Hyperparameters shared by [`Perceptron`](crate::Perceptron)
//! and [`AdalineGD`](crate::AdalineGD).
use serde::{Serialize, Deserialize};

use crate::common::checker;
use crate::error::Result;


const DEFAULT_ETA: f64 = 0.01;
const DEFAULT_N_ITER: usize = 20;
const DEFAULT_RANDOM_STATE: u64 = 1;


/// Immutable hyperparameters of a linear threshold classifier.
///
/// - `eta` is the learning rate, a finite value in `(0, 1]`.
/// - `n_iter` is the number of epochs (passes over the training sample).
/// - `random_state` is the seed for the weight initialization.
///   Seeds are unsigned; a negative seed in JSON is rejected
///   as [`Error::Json`](crate::Error::Json).
///
/// # Example
/// ```
/// use linthresh::LearnerConfig;
///
/// let config = LearnerConfig::from_json(r#"{ "eta": 0.1, "n_iter": 10 }"#)
///     .unwrap();
/// assert_eq!(config.n_iter, 10);
/// assert_eq!(config.random_state, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnerConfig {
    /// Learning rate.
    pub eta: f64,
    /// Number of epochs.
    pub n_iter: usize,
    /// Seed for the weight initialization.
    pub random_state: u64,
}


// A configuration as written in JSON. Absent fields are `None`.
#[derive(Deserialize)]
struct PartialConfig {
    eta: Option<f64>,
    n_iter: Option<usize>,
    random_state: Option<u64>,
}


impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            eta: DEFAULT_ETA,
            n_iter: DEFAULT_N_ITER,
            random_state: DEFAULT_RANDOM_STATE,
        }
    }
}


impl LearnerConfig {
    /// Construct a new, validated, configuration.
    pub fn new(eta: f64, n_iter: usize, random_state: u64) -> Result<Self> {
        Self { eta, n_iter, random_state }.validated()
    }


    /// Read a configuration from a JSON string.
    /// Missing fields take the values of [`LearnerConfig::default`],
    /// which are the Perceptron defaults.
    /// Use [`AdalineGD::from_json`](crate::AdalineGD::from_json)
    /// to fill them with the Adaline defaults instead.
    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Self> {
        Self::from_json_with(json, Self::default())
    }


    /// Read a configuration from a JSON string.
    /// Missing fields take their values from `base`.
    pub fn from_json_with<S: AsRef<str>>(json: S, base: Self)
        -> Result<Self>
    {
        let partial: PartialConfig = serde_json::from_str(json.as_ref())?;
        Self {
            eta: partial.eta.unwrap_or(base.eta),
            n_iter: partial.n_iter.unwrap_or(base.n_iter),
            random_state: partial.random_state.unwrap_or(base.random_state),
        }.validated()
    }


    /// Set the learning rate.
    #[inline(always)]
    pub fn eta(mut self, eta: f64) -> Self {
        self.eta = eta;
        self
    }


    /// Set the number of epochs.
    #[inline(always)]
    pub fn n_iter(mut self, n_iter: usize) -> Self {
        self.n_iter = n_iter;
        self
    }


    /// Set the seed for the weight initialization.
    #[inline(always)]
    pub fn random_state(mut self, seed: u64) -> Self {
        self.random_state = seed;
        self
    }


    /// Returns `self` if every hyperparameter is in its valid range,
    /// [`Error::InvalidConfiguration`](crate::Error::InvalidConfiguration)
    /// otherwise.
    pub fn validated(self) -> Result<Self> {
        checker::check_stepsize(self.eta)?;
        checker::check_n_iter(self.n_iter)?;
        Ok(self)
    }
}
