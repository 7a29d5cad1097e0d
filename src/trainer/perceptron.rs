//! Defines the `Perceptron`.
//! This struct is based on the paper:
//! F. Rosenblatt, "The perceptron: A probabilistic model for
//! information storage and organization in the brain", 1958.
pub mod perceptron_algorithm;

pub use perceptron_algorithm::Perceptron;
