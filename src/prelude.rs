//! Exports the classifiers and traits.
//!
pub use crate::trainer::{
    // Trainer trait
    Trainer,

    // Online rule
    Perceptron,

    // Batch gradient descent rule
    AdalineGD,
};


pub use crate::classifier::Classifier;


pub use crate::linear::{
    LinearState,
    Threshold,
};


pub use crate::{
    Sample,
    LearnerConfig,
    Error,
};
