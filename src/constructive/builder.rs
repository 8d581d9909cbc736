//! Greedy tour construction.
//!
//! Starting from a designated node, repeatedly score every unvisited
//! candidate from the last node placed, commit the cheapest, and continue
//! until every node is visited.
//!
//! # Tie-breaking
//!
//! Candidates are enumerated in ascending index order and the running best
//! is replaced only on a strictly smaller score, so the lowest-indexed
//! candidate wins any tie.
//!
//! # Complexity
//!
//! With [`LookaheadScorer`], O(n²) per step and O(n³) overall.

use log::{debug, trace};

use super::config::BuildConfig;
use super::scorer::{CandidateScorer, LookaheadScorer};
use crate::distance::DistanceMatrix;
use crate::error::{InputError, TourError};
use crate::models::{NodeId, Tour, UnvisitedSet};

/// Builds tours with a given candidate scorer.
///
/// # Examples
///
/// ```
/// use u_tour::constructive::{BuildConfig, NearestScorer, TourBuilder};
/// use u_tour::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 9.0, 1.0],
///     vec![9.0, 0.0, 2.0],
///     vec![1.0, 2.0, 0.0],
/// ])
/// .unwrap();
///
/// let builder = TourBuilder::new(NearestScorer).with_config(BuildConfig::default());
/// let tour = builder.build(0, &[0, 1, 2], &dm).unwrap();
/// assert_eq!(tour.nodes(), &[0, 2, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TourBuilder<S> {
    scorer: S,
    config: BuildConfig,
}

impl<S: CandidateScorer> TourBuilder<S> {
    /// Creates a builder with the default configuration.
    pub fn new(scorer: S) -> Self {
        Self {
            scorer,
            config: BuildConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: BuildConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Picks the next node to visit from `current`.
    ///
    /// Returns `None` when `unvisited` is empty. A single remaining node is
    /// returned without scoring. `unvisited` is not modified.
    pub fn select_next(
        &self,
        current: NodeId,
        unvisited: &UnvisitedSet,
        distances: &DistanceMatrix,
    ) -> Option<NodeId> {
        self.choose(current, unvisited, distances).map(|(node, _)| node)
    }

    /// Builds a tour over `all_nodes` starting at `start`.
    ///
    /// The instance is validated before construction. An empty node set
    /// with a 0×0 matrix yields an empty tour.
    pub fn build(
        &self,
        start: NodeId,
        all_nodes: &[NodeId],
        distances: &DistanceMatrix,
    ) -> Result<Tour, TourError> {
        validate_instance(start, all_nodes, distances)?;

        let n = all_nodes.len();
        if n == 0 {
            debug!("tour: empty instance");
            return Ok(Tour::new());
        }
        debug!("tour: start build nodes={n} start={start}");

        let mut unvisited = UnvisitedSet::from_nodes(distances.size(), all_nodes.iter().copied());
        unvisited.remove(start);

        let mut tour = Tour::with_capacity(n);
        tour.push(start);
        let mut current = start;
        let mut steps = 0usize;

        while !unvisited.is_empty() {
            let Some((next, score)) = self.choose(current, &unvisited, distances) else {
                break;
            };
            match score {
                Some(s) => trace!("tour: step={steps} from={current} next={next} score={s}"),
                None => trace!("tour: step={steps} from={current} next={next} forced"),
            }
            unvisited.remove(next);
            tour.push(next);
            current = next;
            steps += 1;
        }

        debug_assert_eq!(steps, n - 1);
        debug!("tour: built len={} steps={steps}", tour.len());
        Ok(tour)
    }

    /// Chosen node and its score; the score is `None` for a forced pick.
    fn choose(
        &self,
        current: NodeId,
        unvisited: &UnvisitedSet,
        distances: &DistanceMatrix,
    ) -> Option<(NodeId, Option<f64>)> {
        match unvisited.len() {
            0 => None,
            1 => unvisited.first().map(|node| (node, None)),
            len => {
                let scored = if self.config.scores_in_parallel(len) {
                    self.scores_parallel(current, unvisited, distances)
                } else {
                    self.scores_sequential(current, unvisited, distances)
                };
                first_minimum(scored).map(|(node, score)| (node, Some(score)))
            }
        }
    }

    fn scores_sequential(
        &self,
        current: NodeId,
        unvisited: &UnvisitedSet,
        distances: &DistanceMatrix,
    ) -> Vec<(NodeId, f64)> {
        unvisited
            .iter()
            .map(|c| (c, self.scorer.score(current, c, unvisited.without(c), distances)))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn scores_parallel(
        &self,
        current: NodeId,
        unvisited: &UnvisitedSet,
        distances: &DistanceMatrix,
    ) -> Vec<(NodeId, f64)> {
        use rayon::prelude::*;

        let candidates: Vec<NodeId> = unvisited.iter().collect();
        // `collect` on an indexed parallel iterator keeps input order.
        candidates
            .par_iter()
            .map(|&c| (c, self.scorer.score(current, c, unvisited.without(c), distances)))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn scores_parallel(
        &self,
        current: NodeId,
        unvisited: &UnvisitedSet,
        distances: &DistanceMatrix,
    ) -> Vec<(NodeId, f64)> {
        self.scores_sequential(current, unvisited, distances)
    }
}

/// First entry holding the strictly smallest score.
fn first_minimum(scored: Vec<(NodeId, f64)>) -> Option<(NodeId, f64)> {
    let mut best: Option<(NodeId, f64)> = None;
    for (node, score) in scored {
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((node, score)),
        }
    }
    best
}

/// Checks that `start`, `all_nodes` and `distances` describe one instance.
fn validate_instance(
    start: NodeId,
    all_nodes: &[NodeId],
    distances: &DistanceMatrix,
) -> Result<(), InputError> {
    let size = distances.size();
    if size != all_nodes.len() {
        return Err(InputError::DimensionMismatch {
            matrix: size,
            nodes: all_nodes.len(),
        });
    }
    if all_nodes.is_empty() {
        return Ok(());
    }

    let mut seen = vec![false; size];
    for &node in all_nodes {
        match seen.get_mut(node) {
            None => return Err(InputError::NodeOutOfRange { node, size }),
            Some(slot) if *slot => return Err(InputError::DuplicateNode { node }),
            Some(slot) => *slot = true,
        }
    }
    if !seen.get(start).copied().unwrap_or(false) {
        return Err(InputError::StartNotFound { start });
    }

    distances.validate()
}

/// Picks the next node from `current` with the look-ahead rule.
///
/// See [`TourBuilder::select_next`].
///
/// # Examples
///
/// ```
/// use u_tour::constructive::select_next;
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::models::UnvisitedSet;
///
/// let dm = DistanceMatrix::uniform(3, 1.0);
/// assert_eq!(select_next(0, &UnvisitedSet::new(3), &dm), None);
/// assert_eq!(select_next(0, &UnvisitedSet::from_nodes(3, [2]), &dm), Some(2));
/// assert_eq!(select_next(0, &UnvisitedSet::from_nodes(3, [1, 2]), &dm), Some(1));
/// ```
pub fn select_next(
    current: NodeId,
    unvisited: &UnvisitedSet,
    distances: &DistanceMatrix,
) -> Option<NodeId> {
    TourBuilder::new(LookaheadScorer).select_next(current, unvisited, distances)
}

/// Builds a tour over `all_nodes` from `start` with the look-ahead rule.
///
/// # Errors
///
/// Returns [`TourError::InvalidInput`] if `start` is not in `all_nodes`,
/// the matrix dimension differs from `all_nodes.len()`, a node is out of
/// range or repeated, or an off-diagonal distance is negative or not finite.
///
/// # Examples
///
/// ```
/// use u_tour::constructive::build_tour;
/// use u_tour::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![1.0, 0.0, 1.0, 2.0],
///     vec![2.0, 1.0, 0.0, 1.0],
///     vec![3.0, 2.0, 1.0, 0.0],
/// ])
/// .unwrap();
///
/// let tour = build_tour(0, &[0, 1, 2, 3], &dm).unwrap();
/// assert_eq!(tour.nodes(), &[0, 1, 2, 3]);
/// ```
pub fn build_tour(
    start: NodeId,
    all_nodes: &[NodeId],
    distances: &DistanceMatrix,
) -> Result<Tour, TourError> {
    TourBuilder::new(LookaheadScorer).build(start, all_nodes, distances)
}

/// Builds a tour over every node of `distances` from `start`.
pub fn build_tour_from(start: NodeId, distances: &DistanceMatrix) -> Result<Tour, TourError> {
    let all_nodes: Vec<NodeId> = (0..distances.size()).collect();
    build_tour(start, &all_nodes, distances)
}
