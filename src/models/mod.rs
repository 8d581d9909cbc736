//! Domain model types for tour construction.
//!
//! Provides node identifiers, the ordered unvisited set that drives
//! candidate enumeration, and the tour produced by construction.

mod tour;
mod unvisited;

pub use tour::Tour;
pub use unvisited::{Remaining, UnvisitedSet};

/// Index of a location in `[0, N)`.
pub type NodeId = usize;
