//! Distance matrices.
//!
//! Provides a dense, possibly asymmetric distance matrix for tour construction.

mod matrix;

pub use matrix::DistanceMatrix;
