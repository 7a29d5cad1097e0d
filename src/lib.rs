#![warn(missing_docs)]

//!
//! A crate that provides two linear threshold classifiers
//! for binary classification with `{0, 1}` labels.
//!
//! - [`Perceptron`]
//!     The mistake-driven online rule.
//!     The weights move after every misclassified example.
//!     On a linearly separable sample, the number of mistakes per epoch
//!     reaches zero after finitely many epochs.
//!
//! - [`AdalineGD`]
//!     The ADAptive LInear NEuron.
//!     Full-batch gradient descent on the mean squared error
//!     between the targets and the raw net input.
//!
//! Both learn a weight vector `w` and a bias `b`,
//! and predict by a unit step on the net input `x . w + b`.
//! The weights are initialized from a seeded generator,
//! so the same hyperparameters and the same sample always
//! produce the same classifier.
//!
//! ```
//! use linthresh::prelude::*;
//!
//! let x = vec![
//!     vec![0.0, 0.0],
//!     vec![0.0, 1.0],
//!     vec![1.0, 0.0],
//!     vec![1.0, 1.0],
//! ];
//! let y = vec![0.0, 0.0, 0.0, 1.0];
//! let sample = Sample::from_rows(x, y).unwrap();
//!
//! let mut perceptron = Perceptron::new(0.1, 20, 1).unwrap();
//! perceptron.fit(&sample).unwrap();
//! assert_eq!(perceptron.predict(sample.rows()).unwrap(), vec![0, 0, 0, 1]);
//! ```

pub mod error;
pub mod sample;
pub mod config;
pub mod linear;
pub mod classifier;
pub mod trainer;
pub mod research;
pub mod prelude;

mod common;


pub use error::{Error, Result};
pub use sample::Sample;
pub use config::LearnerConfig;
pub use classifier::Classifier;

pub use trainer::Trainer;
pub use trainer::{Perceptron, AdalineGD};
