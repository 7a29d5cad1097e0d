//! Provides [`Perceptron`](Perceptron) by Rosenblatt, 1958.
use crate::{
    Sample,
    Classifier,
    LearnerConfig,
    error::{Error, Result},
    linear::{LinearState, Threshold},
    linear::prediction,
    trainer::core::{self, Trainer},
};

use std::ops::ControlFlow;


/// Defines the `Perceptron`.
///
/// The Perceptron visits the training examples one by one,
/// in the given order, and moves the hyperplane
/// whenever an example is misclassified:
/// ```text
/// update = eta * (y - predict(x))
/// w <- w + update * x
/// b <- b + update
/// ```
/// The history records the number of misclassifications per epoch.
/// Training always runs `n_iter` epochs; a converged run shows
/// trailing zeros in [`Perceptron::errors`].
///
/// # Example
/// ```
/// use linthresh::prelude::*;
///
/// // The logical AND.
/// let x = vec![
///     vec![0.0, 0.0],
///     vec![0.0, 1.0],
///     vec![1.0, 0.0],
///     vec![1.0, 1.0],
/// ];
/// let y = vec![0.0, 0.0, 0.0, 1.0];
/// let sample = Sample::from_rows(x, y).unwrap();
///
/// let mut clf = Perceptron::new(0.1, 20, 1).unwrap();
/// clf.fit(&sample).unwrap();
///
/// let predictions = clf.predict(sample.rows()).unwrap();
/// assert_eq!(predictions, vec![0, 0, 0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct Perceptron {
    config: LearnerConfig,

    // `None` until the first `fit`.
    state: Option<LinearState<usize>>,
}


impl Default for Perceptron {
    fn default() -> Self {
        Self { config: LearnerConfig::default(), state: None }
    }
}


impl Perceptron {
    /// Initialize the `Perceptron`.
    /// Returns [`Error::InvalidConfiguration`] if `n_iter < 1`
    /// or `eta` is not in `(0, 1]`.
    pub fn new(eta: f64, n_iter: usize, random_state: u64) -> Result<Self> {
        let config = LearnerConfig::new(eta, n_iter, random_state)?;
        Ok(Self { config, state: None })
    }


    /// Initialize the `Perceptron` with the given configuration.
    pub fn from_config(config: LearnerConfig) -> Result<Self> {
        let config = config.validated()?;
        Ok(Self { config, state: None })
    }


    /// Initialize the `Perceptron` from a JSON configuration.
    /// Missing fields take the `Perceptron` defaults
    /// (`eta = 0.01`, `n_iter = 20`, `random_state = 1`).
    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Self> {
        let base = Self::default().config;
        let config = LearnerConfig::from_json_with(json, base)?;
        Ok(Self { config, state: None })
    }


    /// Returns the number of misclassifications in each epoch.
    pub fn errors(&self) -> Result<&[usize]> {
        self.history()
    }
}


impl Classifier for Perceptron {
    fn parameters(&self) -> Result<(&[f64], f64)> {
        self.state.as_ref()
            .map(|state| (state.weights(), state.bias()))
            .ok_or(Error::NotFitted)
    }


    fn threshold_policy(&self) -> Threshold {
        Threshold::ZERO
    }
}


impl Trainer for Perceptron {
    type Entry = usize;


    fn name(&self) -> &str {
        "Perceptron"
    }


    fn config(&self) -> &LearnerConfig {
        &self.config
    }


    fn state(&self) -> Option<&LinearState<usize>> {
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
        let threshold = self.threshold_policy();
        let state = self.state.as_mut().ok_or(Error::NotFitted)?;
        core::check_feature_len(state, sample)?;

        // Later updates depend on the earlier ones,
        // so this loop must stay sequential.
        let mut errors = 0_usize;
        for (x, target) in sample.iter() {
            let z = prediction::affine(x, state.weights(), state.bias());
            let predicted = threshold.label(z) as f64;

            let update = eta * (target - predicted);
            state.step(update, x, update);

            errors += usize::from(update != 0.0);
        }
        state.record(errors);

        Ok(core::flow(epoch, self.config.n_iter))
    }
}
