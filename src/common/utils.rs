//! This file provides some common vector operations.


/// Computes the inner product of `x` and `y`.
/// The caller is responsible for `x.len() == y.len()`.
#[inline(always)]
pub(crate) fn inner_product(x: &[f64], y: &[f64]) -> f64 {
    x.iter()
        .zip(y)
        .map(|(xi, yi)| xi * yi)
        .sum::<f64>()
}


/// Returns the arithmetic mean of `x`.
/// Returns `0.0` for the empty slice.
#[inline(always)]
pub(crate) fn mean(x: &[f64]) -> f64 {
    if x.is_empty() { return 0f64; }
    x.iter().sum::<f64>() / x.len() as f64
}
