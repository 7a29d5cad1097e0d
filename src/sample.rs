//! Struct `Sample` represents a batch sample.

// Provides sample struct.
pub(crate) mod sample_struct;


pub use sample_struct::Sample;
