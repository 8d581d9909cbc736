//! Candidate scoring rules.
//!
//! A scorer assigns each unvisited candidate a scalar cost; the builder
//! commits the candidate with the smallest one.

use crate::distance::DistanceMatrix;
use crate::models::{NodeId, Remaining};

/// Rates how costly it is to visit `candidate` next.
///
/// Lower scores are better. Implementations must be pure: the same inputs
/// always produce the same score, and nothing is mutated.
pub trait CandidateScorer: Send + Sync {
    /// Scores moving from `current` to `candidate`, given the nodes that
    /// would still be unvisited afterwards.
    fn score(
        &self,
        current: NodeId,
        candidate: NodeId,
        remaining: Remaining<'_>,
        distances: &DistanceMatrix,
    ) -> f64;
}

/// Immediate travel cost plus the mean distance from the candidate to
/// everything still unvisited after it.
///
/// ```text
/// score = d(current, candidate) + mean { d(candidate, x) : x in remaining }
/// ```
///
/// The mean is taken as 0 when nothing remains. Candidates central to the
/// remaining nodes score lower than peripheral ones at the same distance.
///
/// # Examples
///
/// ```
/// use u_tour::constructive::{CandidateScorer, LookaheadScorer};
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::models::UnvisitedSet;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![1.0, 0.0, 1.0, 2.0],
///     vec![2.0, 1.0, 0.0, 1.0],
///     vec![3.0, 2.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// let unvisited = UnvisitedSet::from_nodes(4, [1, 2, 3]);
///
/// // 1 + mean(d(1,2), d(1,3)) = 1 + 1.5
/// let s = LookaheadScorer.score(0, 1, unvisited.without(1), &dm);
/// assert!((s - 2.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LookaheadScorer;

impl CandidateScorer for LookaheadScorer {
    fn score(
        &self,
        current: NodeId,
        candidate: NodeId,
        remaining: Remaining<'_>,
        distances: &DistanceMatrix,
    ) -> f64 {
        let step = distances.get(current, candidate);
        let count = remaining.len();
        if count == 0 {
            return step;
        }
        let sum: f64 = remaining.iter().map(|x| distances.get(candidate, x)).sum();
        step + sum / count as f64
    }
}

/// Plain nearest neighbor: the score is the immediate travel cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestScorer;

impl CandidateScorer for NearestScorer {
    fn score(
        &self,
        current: NodeId,
        candidate: NodeId,
        _remaining: Remaining<'_>,
        distances: &DistanceMatrix,
    ) -> f64 {
        distances.get(current, candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UnvisitedSet;

    fn line_matrix(n: usize) -> DistanceMatrix {
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                dm.set(i, j, (i as f64 - j as f64).abs());
            }
        }
        dm
    }

    #[test]
    fn test_lookahead_first_step_scores() {
        let dm = line_matrix(4);
        let unvisited = UnvisitedSet::from_nodes(4, [1, 2, 3]);
        let score = |c| LookaheadScorer.score(0, c, unvisited.without(c), &dm);
        assert!((score(1) - 2.5).abs() < 1e-10);
        assert!((score(2) - 3.0).abs() < 1e-10);
        assert!((score(3) - 4.5).abs() < 1e-10);
    }

    #[test]
    fn test_lookahead_second_step_scores() {
        let dm = line_matrix(4);
        let unvisited = UnvisitedSet::from_nodes(4, [2, 3]);
        let score = |c| LookaheadScorer.score(1, c, unvisited.without(c), &dm);
        assert!((score(2) - 2.0).abs() < 1e-10);
        assert!((score(3) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_lookahead_empty_remaining_is_step_cost() {
        let dm = line_matrix(3);
        let unvisited = UnvisitedSet::from_nodes(3, [2]);
        let s = LookaheadScorer.score(0, 2, unvisited.without(2), &dm);
        assert!((s - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_lookahead_uses_outgoing_distances() {
        // Asymmetric: only d(candidate, x) should enter the mean.
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 1.0);
        dm.set(1, 2, 10.0);
        dm.set(2, 1, 100.0);
        let unvisited = UnvisitedSet::from_nodes(3, [1, 2]);
        let s = LookaheadScorer.score(0, 1, unvisited.without(1), &dm);
        assert!((s - 11.0).abs() < 1e-10);
    }

    #[test]
    fn test_nearest_ignores_remaining() {
        let dm = line_matrix(4);
        let unvisited = UnvisitedSet::from_nodes(4, [1, 2, 3]);
        let s = NearestScorer.score(0, 3, unvisited.without(3), &dm);
        assert!((s - 3.0).abs() < 1e-10);
    }
}
