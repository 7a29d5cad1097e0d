//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data, range of the learning rate.

use crate::Sample;
use crate::error::{Error, Result};


/// Check whether the training sample is valid or not.
#[inline(always)]
pub(crate) fn check_sample(sample: &Sample) -> Result<()> {
    let (n_sample, n_feature) = sample.shape();

    // `X` and `y` must have the length greater than `0`.
    // Since `Sample` guarantees `rows(X) == len(y)`,
    // we only need to check `n_sample`.
    if n_sample == 0 {
        return Err(Error::InvalidData("the sample has no examples".into()));
    }

    // `X` must have a feature.
    if n_feature == 0 {
        return Err(Error::InvalidData("the sample has no features".into()));
    }
    Ok(())
}


/// Check whether every row of `rows` has `n_feature` columns.
#[inline(always)]
pub(crate) fn check_rows(rows: &[Vec<f64>], n_feature: usize) -> Result<()> {
    match rows.iter().find(|row| row.len() != n_feature) {
        Some(row) => Err(Error::dimension("columns of X", n_feature, row.len())),
        None => Ok(()),
    }
}


/// Check the stepsize.
/// The learning rate must be a finite value in `(0, 1]`.
#[inline(always)]
pub(crate) fn check_stepsize(eta: f64) -> Result<()> {
    if eta.is_finite() && eta > 0f64 && eta <= 1f64 {
        return Ok(());
    }
    Err(Error::InvalidConfiguration(
        format!("the learning rate must be in (0, 1], got {eta}")
    ))
}


/// Check the number of epochs.
#[inline(always)]
pub(crate) fn check_n_iter(n_iter: usize) -> Result<()> {
    if n_iter >= 1 {
        return Ok(());
    }
    Err(Error::InvalidConfiguration(
        "the number of epochs must be at least 1".into()
    ))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepsize_success_01() {
        assert!(check_stepsize(1e-4).is_ok());
    }

    #[test]
    fn test_stepsize_success_02() {
        assert!(check_stepsize(1f64).is_ok());
    }

    #[test]
    fn test_stepsize_failure_01() {
        assert!(check_stepsize(0f64).is_err());
    }

    #[test]
    fn test_stepsize_failure_02() {
        assert!(check_stepsize(1.5).is_err());
    }

    #[test]
    fn test_stepsize_failure_03() {
        assert!(check_stepsize(f64::NAN).is_err());
    }

    #[test]
    fn test_n_iter() {
        assert!(check_n_iter(1).is_ok());
        assert!(matches!(
            check_n_iter(0),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_ragged_rows() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        match check_rows(&rows, 2) {
            Err(Error::DimensionMismatch { expected, found, .. }) => {
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            },
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
