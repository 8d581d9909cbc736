//! # u-tour
//!
//! Greedy tour construction for the Traveling Salesman Problem over a
//! dense, possibly asymmetric distance matrix.
//!
//! ## Modules
//!
//! - [`models`] — Node identifiers, ordered unvisited set, and tours
//! - [`distance`] — Distance matrix
//! - [`constructive`] — Look-ahead nearest neighbor and the generic tour builder
//! - [`evaluation`] — Path and cycle length of a tour
//! - [`error`] — Input validation errors
//!
//! ## Features
//!
//! - `parallel` — score candidates of a step in parallel with rayon

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
