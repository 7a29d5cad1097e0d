use rayon::prelude::*;

use crate::common::utils;
use crate::error::{Error, Result};


/// The unit step applied to the net input.
/// `Threshold(t)` labels `z` as `1` if `z >= t`, `0` otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(pub f64);


impl Threshold {
    /// Threshold of the Perceptron.
    pub const ZERO: Self = Self(0.0);

    /// Threshold of Adaline.
    pub const HALF: Self = Self(0.5);


    /// Returns the label of the net input `z`.
    #[inline(always)]
    pub fn label(&self, z: f64) -> i64 {
        if z >= self.0 { 1 } else { 0 }
    }
}


impl Default for Threshold {
    fn default() -> Self {
        Self::ZERO
    }
}


/// Computes `x . w + b` for a single example.
/// The caller is responsible for `x.len() == w.len()`.
#[inline(always)]
pub(crate) fn affine(x: &[f64], w: &[f64], b: f64) -> f64 {
    utils::inner_product(x, w) + b
}


/// Computes the net input `x . w + b` of every row `x` of `rows`.
///
/// Returns [`Error::DimensionMismatch`] if a row does not have
/// `w.len()` columns.
pub fn net_input(rows: &[Vec<f64>], w: &[f64], b: f64) -> Result<Vec<f64>> {
    let n_feature = w.len();
    if let Some(row) = rows.iter().find(|row| row.len() != n_feature) {
        return Err(Error::dimension("columns of X vs. len(w)", n_feature, row.len()));
    }

    let z = rows.par_iter()
        .map(|x| affine(x, w, b))
        .collect::<Vec<_>>();
    Ok(z)
}


/// Applies `threshold` to the net input of every row of `rows`.
pub fn predict(
    rows: &[Vec<f64>],
    w: &[f64],
    b: f64,
    threshold: Threshold,
) -> Result<Vec<i64>>
{
    let labels = net_input(rows, w, b)?
        .into_iter()
        .map(|z| threshold.label(z))
        .collect();
    Ok(labels)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_input_is_affine() {
        let rows = vec![vec![1.0, 2.0], vec![-1.0, 0.5], vec![0.0, 0.0]];
        let z = net_input(&rows, &[0.5, -1.0], 0.25).unwrap();
        assert_eq!(z, vec![-1.25, -0.75, 0.25]);
    }

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(Threshold::ZERO.label(0.0), 1);
        assert_eq!(Threshold::ZERO.label(-1e-12), 0);
        assert_eq!(Threshold::HALF.label(0.5), 1);
        assert_eq!(Threshold::HALF.label(0.49), 0);
    }

    #[test]
    fn same_net_input_different_labels() {
        let rows = vec![vec![0.25]];
        let zero = predict(&rows, &[1.0], 0.0, Threshold::ZERO).unwrap();
        let half = predict(&rows, &[1.0], 0.0, Threshold::HALF).unwrap();
        assert_eq!(zero, vec![1]);
        assert_eq!(half, vec![0]);
    }

    #[test]
    fn column_mismatch() {
        let rows = vec![vec![1.0, 2.0, 3.0]];
        let err = net_input(&rows, &[1.0, 2.0], 0.0).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch { expected: 2, found: 3, .. }
        ));
    }

    #[test]
    fn empty_input() {
        let rows: Vec<Vec<f64>> = Vec::new();
        assert!(net_input(&rows, &[1.0], 0.0).unwrap().is_empty());
    }
}
