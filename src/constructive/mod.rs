//! Constructive heuristics for building TSP tours.
//!
//! - [`build_tour`] — Look-ahead nearest neighbor: immediate cost plus the
//!   mean distance to the remaining nodes, O(n³)
//! - [`TourBuilder`] — The same greedy loop over any [`CandidateScorer`]
//! - [`NearestScorer`] — Plain nearest neighbor baseline, O(n²)

mod builder;
mod config;
mod scorer;

pub use builder::{build_tour, build_tour_from, select_next, TourBuilder};
pub use config::BuildConfig;
pub use scorer::{CandidateScorer, LookaheadScorer, NearestScorer};
