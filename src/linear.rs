//! Building blocks shared by the linear threshold classifiers:
//! the learned state, the seeded weight initializer,
//! and the net-input / unit-step prediction.

/// Defines the weights, the bias, and the training history.
pub mod state;
/// Defines the seeded weight initializer.
pub mod initializer;
/// Defines the net input and the threshold policy.
pub mod prediction;


pub use state::LinearState;
pub use initializer::WeightInitializer;
pub use prediction::{
    Threshold,
    net_input,
    predict,
};
