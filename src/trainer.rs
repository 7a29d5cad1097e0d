//! Provides the training rules of the linear threshold classifiers.

pub(crate) mod core;

mod perceptron;
mod adaline;


/// Trainer trait
pub use self::core::Trainer;

// Online (mistake-driven) rule
pub use self::perceptron::Perceptron;

// Batch gradient descent rule
pub use self::adaline::AdalineGD;
