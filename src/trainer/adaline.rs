//! Defines `AdalineGD`.
//! This struct is based on the report:
//! B. Widrow and M. E. Hoff, "Adaptive switching circuits", 1960.
pub mod adaline_algorithm;

pub use adaline_algorithm::AdalineGD;
