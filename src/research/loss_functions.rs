use crate::{
    Sample,
    Classifier,
    error::Result,
};


/// Zero-one loss, the fraction of the examples in `sample`
/// that `f` labels incorrectly.
pub fn zero_one_loss<C>(sample: &Sample, f: &C) -> Result<f64>
    where C: Classifier,
{
    let n_sample = sample.shape().0;
    if n_sample == 0 { return Ok(0f64); }

    let n_miss = f.predict_all(sample)?
        .into_iter()
        .zip(sample.target())
        .filter(|(p, y)| *p as f64 != **y)
        .count();
    Ok(n_miss as f64 / n_sample as f64)
}


/// Accuracy, `1 - zero_one_loss`.
pub fn accuracy<C>(sample: &Sample, f: &C) -> Result<f64>
    where C: Classifier,
{
    zero_one_loss(sample, f).map(|loss| 1f64 - loss)
}


/// Mean squared error between the targets and the raw net input of `f`.
pub fn squared_loss<C>(sample: &Sample, f: &C) -> Result<f64>
    where C: Classifier,
{
    let n_sample = sample.shape().0;
    if n_sample == 0 { return Ok(0f64); }

    let sum = f.net_input(sample.rows())?
        .into_iter()
        .zip(sample.target())
        .map(|(z, y)| (y - z).powi(2))
        .sum::<f64>();
    Ok(sum / n_sample as f64)
}
