//! Tour builder configuration.

use serde::{Deserialize, Serialize};

/// Configuration for [`TourBuilder`](super::TourBuilder).
///
/// # Defaults
///
/// ```
/// use u_tour::constructive::BuildConfig;
///
/// let config = BuildConfig::default();
/// assert!(!config.parallel);
/// assert_eq!(config.min_parallel_candidates, 256);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tour::constructive::BuildConfig;
///
/// let config = BuildConfig::default()
///     .with_parallel(true)
///     .with_min_parallel_candidates(64);
/// assert!(config.parallel);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Whether to score candidates in parallel using rayon.
    ///
    /// Only takes effect when the crate is built with the `parallel`
    /// feature. The resulting tour is identical either way.
    pub parallel: bool,

    /// Smallest unvisited-set size for which a step is scored in parallel.
    ///
    /// Steps with fewer candidates are scored sequentially.
    pub min_parallel_candidates: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            min_parallel_candidates: 256,
        }
    }
}

impl BuildConfig {
    /// Enables or disables parallel candidate scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the parallel scoring threshold.
    pub fn with_min_parallel_candidates(mut self, n: usize) -> Self {
        self.min_parallel_candidates = n;
        self
    }

    /// Returns `true` if a step over `candidates` nodes should run in parallel.
    pub(crate) fn scores_in_parallel(&self, candidates: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && candidates >= self.min_parallel_candidates
    }
}
