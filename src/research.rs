//! This directory provides some features for research
//! Measure the followings of a trainer per epoch
//! - History entry (misclassifications or mean squared error)
//! - Training loss
//! - Test loss
//! - Running time

/// Provides a struct that runs a trainer with logging.
pub mod logger;

/// Defines loss functions (e.g., zero-one loss, squared loss).
pub mod loss_functions;

pub use logger::Logger;

pub use loss_functions::{
    zero_one_loss,
    accuracy,
    squared_loss,
};
