//! Provides [`AdalineGD`](AdalineGD),
//! the ADAptive LInear NEuron by Widrow & Hoff, 1960.
use rayon::prelude::*;

use crate::{
    Sample,
    Classifier,
    LearnerConfig,
    common::utils,
    error::{Error, Result},
    linear::{LinearState, Threshold},
    linear::prediction,
    trainer::core::{self, Trainer},
};

use std::ops::ControlFlow;


const DEFAULT_N_ITER: usize = 50;


/// Defines the ADAptive LInear NEuron trained by
/// full-batch gradient descent on the mean squared error.
///
/// Each epoch computes the net input `z` of every example at once
/// and takes a single step:
/// ```text
/// errors = y - z
/// w <- w + eta * 2 * X^T errors / m
/// b <- b + eta * 2 * mean(errors)
/// ```
/// The history records `mean(errors^2)` per epoch.
///
/// The step size grows with `eta` and with the scale of the features.
/// If `eta` is too large for unscaled features the losses grow
/// every epoch instead of shrinking. This is not reported as an error;
/// inspect [`AdalineGD::losses`].
///
/// Prediction labels an example as `1` if its net input is
/// at least `0.5` by default. See [`AdalineGD::threshold`].
///
/// # Example
/// ```
/// use linthresh::prelude::*;
///
/// let x = vec![vec![-1.0], vec![-0.5], vec![0.5], vec![1.0]];
/// let y = vec![0.0, 0.0, 1.0, 1.0];
/// let sample = Sample::from_rows(x, y).unwrap();
///
/// let mut clf = AdalineGD::new(0.1, 100, 1).unwrap();
/// clf.fit(&sample).unwrap();
///
/// let losses = clf.losses().unwrap();
/// assert_eq!(losses.len(), 100);
/// assert!(losses[99] < losses[0]);
/// assert_eq!(clf.predict(sample.rows()).unwrap(), vec![0, 0, 1, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct AdalineGD {
    config: LearnerConfig,

    // Net inputs at or above this value are labeled as `1`.
    threshold: Threshold,

    // `None` until the first `fit`.
    state: Option<LinearState<f64>>,
}


impl Default for AdalineGD {
    fn default() -> Self {
        let config = LearnerConfig::default()
            .n_iter(DEFAULT_N_ITER);
        Self { config, threshold: Threshold::HALF, state: None }
    }
}


impl AdalineGD {
    /// Initialize the `AdalineGD`.
    /// Returns [`Error::InvalidConfiguration`] if `n_iter < 1`
    /// or `eta` is not in `(0, 1]`.
    pub fn new(eta: f64, n_iter: usize, random_state: u64) -> Result<Self> {
        let config = LearnerConfig::new(eta, n_iter, random_state)?;
        Ok(Self { config, threshold: Threshold::HALF, state: None })
    }


    /// Initialize the `AdalineGD` with the given configuration.
    pub fn from_config(config: LearnerConfig) -> Result<Self> {
        let config = config.validated()?;
        Ok(Self { config, threshold: Threshold::HALF, state: None })
    }


    /// Initialize the `AdalineGD` from a JSON configuration.
    /// Missing fields take the `AdalineGD` defaults
    /// (`eta = 0.01`, `n_iter = 50`, `random_state = 1`).
    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Self> {
        let base = Self::default().config;
        let config = LearnerConfig::from_json_with(json, base)?;
        Ok(Self { config, threshold: Threshold::HALF, state: None })
    }


    /// Set the prediction threshold.
    /// The default value is `0.5`, although training fits the raw
    /// net input against `{0, 1}` targets.
    /// Use `0.0` to get the same decision rule as the Perceptron.
    /// The threshold does not affect training.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Threshold(threshold);
        self
    }


    /// Returns the mean squared error of each epoch.
    pub fn losses(&self) -> Result<&[f64]> {
        self.history()
    }


    /// The linear activation. Returns `z` unchanged.
    #[inline(always)]
    pub fn activation(&self, z: Vec<f64>) -> Vec<f64> {
        z
    }
}


impl Classifier for AdalineGD {
    fn parameters(&self) -> Result<(&[f64], f64)> {
        self.state.as_ref()
            .map(|state| (state.weights(), state.bias()))
            .ok_or(Error::NotFitted)
    }


    fn threshold_policy(&self) -> Threshold {
        self.threshold
    }
}


impl Trainer for AdalineGD {
    type Entry = f64;


    fn name(&self) -> &str {
        "Adaline (batch GD)"
    }


    fn config(&self) -> &LearnerConfig {
        &self.config
    }


    fn state(&self) -> Option<&LinearState<f64>> {
        self.state.as_ref()
    }


    fn preprocess(&mut self, sample: &Sample) -> Result<()> {
        self.state = Some(core::fresh_state(&self.config, sample)?);
        Ok(())
    }


    fn epoch(&mut self, sample: &Sample, epoch: usize)
        -> Result<ControlFlow<usize>>
    {
        let eta = self.config.eta;
        let (n_sample, n_feature) = sample.shape();

        let state = self.state.as_ref().ok_or(Error::NotFitted)?;
        core::check_feature_len(state, sample)?;

        let z = prediction::net_input(
            sample.rows(), state.weights(), state.bias()
        )?;
        let output = self.activation(z);

        let errors = sample.target()
            .iter()
            .zip(output)
            .map(|(y, o)| y - o)
            .collect::<Vec<f64>>();

        let gradient = transposed_product(sample.rows(), &errors, n_feature);

        let m = n_sample as f64;
        let scale = eta * 2.0 / m;
        let bias_step = eta * 2.0 * utils::mean(&errors);
        let loss = errors.iter()
            .map(|e| e * e)
            .sum::<f64>()
            / m;

        let state = self.state.as_mut().ok_or(Error::NotFitted)?;
        state.step(scale, &gradient, bias_step);
        state.record(loss);

        Ok(core::flow(epoch, self.config.n_iter))
    }
}


/// Computes `X^T v` for the row-major matrix `X`.
/// Each component is a sequential sum over the rows,
/// so the result does not depend on the number of threads.
fn transposed_product(rows: &[Vec<f64>], v: &[f64], n_feature: usize)
    -> Vec<f64>
{
    (0..n_feature).into_par_iter()
        .map(|j| {
            rows.iter()
                .zip(v)
                .map(|(x, vi)| x[j] * vi)
                .sum::<f64>()
        })
        .collect()
}
