//! Provides `Trainer` trait.

use crate::{
    Sample,
    Classifier,
    LearnerConfig,
    error::{Error, Result},
    linear::{LinearState, WeightInitializer},
};

use std::fmt::Display;
use std::ops::ControlFlow;


/// The trait [`Trainer`](Trainer) defines the standard framework of
/// training a linear threshold classifier for a fixed number of epochs.
///
/// You need to implement [`Trainer::preprocess`](Trainer::preprocess)
/// and [`Trainer::epoch`](Trainer::epoch)
/// to write a new training rule.
pub trait Trainer: Classifier {
    /// The type of a per-epoch history entry.
    type Entry: Copy + Display;


    /// Returns the name of the training rule.
    fn name(&self) -> &str;


    /// Returns the hyperparameters.
    fn config(&self) -> &LearnerConfig;


    /// Returns the current state.
    /// `None` before the first call of
    /// [`Trainer::preprocess`](Trainer::preprocess).
    fn state(&self) -> Option<&LinearState<Self::Entry>>;


    /// Returns the key-value pairs describing `self`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        let config = self.config();
        let info = vec![
            ("Learning rate", format!("{}", config.eta)),
            ("# of epochs", format!("{}", config.n_iter)),
            ("Random state", format!("{}", config.random_state)),
            ("Threshold", format!("{}", self.threshold_policy().0)),
        ];
        Some(info)
    }


    /// A main function that trains `self` on `sample`.
    /// Any previous state is discarded.
    /// Runs exactly `n_iter` epochs.
    fn fit(&mut self, sample: &Sample) -> Result<&mut Self>
        where Self: Sized
    {
        self.preprocess(sample)?;

        for epoch in 1.. {
            if self.epoch(sample, epoch)?.is_break() { break; }
        }
        Ok(self)
    }


    /// Pre-processing for `self`.
    /// Validates `sample` and replaces the state with a fresh one.
    fn preprocess(&mut self, sample: &Sample) -> Result<()>;


    /// Training step per epoch.
    /// This method returns
    /// `ControlFlow::Break(epoch)` after the last epoch,
    /// `ControlFlow::Continue(())` otherwise.
    fn epoch(&mut self, sample: &Sample, epoch: usize)
        -> Result<ControlFlow<usize>>;


    /// Returns the learned weights.
    fn weights(&self) -> Result<&[f64]> {
        self.state()
            .map(|state| state.weights())
            .ok_or(Error::NotFitted)
    }


    /// Returns the learned bias.
    fn bias(&self) -> Result<f64> {
        self.state()
            .map(|state| state.bias())
            .ok_or(Error::NotFitted)
    }


    /// Returns the per-epoch training history.
    fn history(&self) -> Result<&[Self::Entry]> {
        self.state()
            .map(|state| state.history())
            .ok_or(Error::NotFitted)
    }
}


/// Validates `sample` as a `{0, 1}` binary classification instance
/// and draws a fresh state for it.
pub(crate) fn fresh_state<T>(config: &LearnerConfig, sample: &Sample)
    -> Result<LinearState<T>>
{
    sample.is_valid_binary_instance()?;
    let n_feature = sample.shape().1;
    let state = WeightInitializer::new(config.random_state)
        .init(n_feature);
    Ok(state)
}


/// Checks that `sample` has as many features as `state` has weights.
#[inline(always)]
pub(crate) fn check_feature_len<T>(state: &LinearState<T>, sample: &Sample)
    -> Result<()>
{
    let n_feature = sample.shape().1;
    if n_feature != state.n_feature() {
        return Err(Error::dimension(
            "columns of X vs. len(w)", state.n_feature(), n_feature
        ));
    }
    Ok(())
}


/// Returns `Break(epoch)` for the last epoch.
#[inline(always)]
pub(crate) fn flow(epoch: usize, n_iter: usize) -> ControlFlow<usize> {
    if epoch >= n_iter {
        ControlFlow::Break(epoch)
    } else {
        ControlFlow::Continue(())
    }
}
