//! The prediction side of a linear threshold classifier.
//!
//! A linear threshold classifier labels an example `x` by
//! applying a unit step to its net input `x . w + b`.
//! The trainers in this crate differ in how they learn `w` and `b`
//! and in where they put the step; everything else is shared
//! through the default methods of [`Classifier`].
use crate::{
    Sample,
    error::Result,
    linear::{self, Threshold},
};


/// A trait that defines the behavior of a linear threshold classifier.
/// You only need to implement
/// [`Classifier::parameters`] and [`Classifier::threshold_policy`].
pub trait Classifier {
    /// Returns the learned weight vector and bias.
    /// Returns [`Error::NotFitted`](crate::Error::NotFitted)
    /// before the first successful `fit`.
    fn parameters(&self) -> Result<(&[f64], f64)>;


    /// Returns the unit step applied to the net input.
    fn threshold_policy(&self) -> Threshold;


    /// Computes the net input of every row of `rows`.
    fn net_input(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>> {
        let (w, b) = self.parameters()?;
        linear::net_input(rows, w, b)
    }


    /// Predicts the `{0, 1}` label of every row of `rows`.
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<i64>> {
        let (w, b) = self.parameters()?;
        linear::predict(rows, w, b, self.threshold_policy())
    }


    /// Predicts the labels of the examples in `sample`.
    fn predict_all(&self, sample: &Sample) -> Result<Vec<i64>> {
        self.predict(sample.rows())
    }
}
