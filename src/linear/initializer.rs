use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use super::state::LinearState;


const MEAN: f64 = 0.0;
const DEVIATION: f64 = 0.01;


/// Draws the initial weights of a linear classifier.
///
/// Each weight is sampled independently from `Normal(0, 0.01)`
/// and the bias is exactly `0`.
/// The generator is `ChaCha8` seeded by [`ChaCha8Rng::seed_from_u64`],
/// so the same seed and the same dimension give bit-identical weights
/// on every run.
#[derive(Debug, Clone, Copy)]
pub struct WeightInitializer {
    seed: u64,
}


impl WeightInitializer {
    /// Construct a new instance of `WeightInitializer`.
    #[inline(always)]
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }


    /// Returns `n_feature` weights.
    pub fn weights(&self, n_feature: usize) -> Vec<f64> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        // `DEVIATION` is a positive constant.
        let dist = Normal::<f64>::new(MEAN, DEVIATION).unwrap();
        dist.sample_iter(&mut rng)
            .take(n_feature)
            .collect()
    }


    /// Returns a fresh state with random weights, a zero bias,
    /// and an empty history.
    #[inline(always)]
    pub fn init<T>(&self, n_feature: usize) -> LinearState<T> {
        LinearState::new(self.weights(n_feature), 0f64)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_weights() {
        let w1 = WeightInitializer::new(1).weights(16);
        let w2 = WeightInitializer::new(1).weights(16);
        assert_eq!(w1.len(), 16);
        assert_eq!(w1, w2);
    }

    #[test]
    fn different_seed_different_weights() {
        let w1 = WeightInitializer::new(1).weights(8);
        let w2 = WeightInitializer::new(2).weights(8);
        assert_ne!(w1, w2);
    }

    #[test]
    fn small_weights_and_zero_bias() {
        let state = WeightInitializer::new(42).init::<usize>(1_000);
        assert_eq!(state.bias(), 0f64);
        assert!(state.history().is_empty());

        // Six standard deviations away is practically impossible.
        assert!(state.weights().iter().all(|w| w.abs() < 0.06));

        let mean = state.weights().iter().sum::<f64>() / 1_000.0;
        assert!(mean.abs() < 0.002, "mean = {mean}");
    }
}
