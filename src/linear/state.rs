/// The learned parameters of a linear classifier and
/// the per-epoch training history.
///
/// `T` is the type of a history entry:
/// the number of misclassifications (`usize`) for the Perceptron,
/// the mean squared error (`f64`) for Adaline.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearState<T> {
    weights: Vec<f64>,
    bias: f64,
    history: Vec<T>,
}


impl<T> LinearState<T> {
    #[inline(always)]
    pub(crate) fn new(weights: Vec<f64>, bias: f64) -> Self {
        Self { weights, bias, history: Vec::new() }
    }


    /// Returns the weight vector.
    #[inline(always)]
    pub fn weights(&self) -> &[f64] {
        &self.weights[..]
    }


    /// Returns the bias.
    #[inline(always)]
    pub fn bias(&self) -> f64 {
        self.bias
    }


    /// Returns the per-epoch history recorded so far.
    #[inline(always)]
    pub fn history(&self) -> &[T] {
        &self.history[..]
    }


    /// Returns the number of features this state accepts.
    #[inline(always)]
    pub fn n_feature(&self) -> usize {
        self.weights.len()
    }


    /// `w <- w + scale * x`, `b <- b + bias_step`.
    #[inline(always)]
    pub(crate) fn step(&mut self, scale: f64, x: &[f64], bias_step: f64) {
        debug_assert_eq!(self.weights.len(), x.len());
        self.weights.iter_mut()
            .zip(x)
            .for_each(|(w, xi)| { *w += scale * xi; });
        self.bias += bias_step;
    }


    #[inline(always)]
    pub(crate) fn record(&mut self, entry: T) {
        self.history.push(entry);
    }
}
