//! Tour type.

use serde::{Deserialize, Serialize};

use super::NodeId;
use crate::error::InputError;

/// An ordered sequence of nodes, each visited once.
///
/// A tour is an open Hamiltonian path: it starts at the first node and
/// does not implicitly return. Tours are produced by the builders in
/// [`constructive`](crate::constructive) and are read-only to callers.
/// A deserialized tour must visit every node of `0..len` exactly once.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::constructive::build_tour_from;
///
/// let dm = DistanceMatrix::uniform(3, 1.0);
/// let tour = build_tour_from(0, &dm).unwrap();
/// assert_eq!(tour.start(), Some(0));
/// assert_eq!(tour.len(), 3);
/// assert!(tour.is_permutation_of(3));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTour")]
pub struct Tour {
    nodes: Vec<NodeId>,
}

#[derive(Deserialize)]
struct RawTour {
    nodes: Vec<NodeId>,
}

impl TryFrom<RawTour> for Tour {
    type Error = InputError;

    fn try_from(raw: RawTour) -> Result<Self, Self::Error> {
        let size = raw.nodes.len();
        let mut seen = vec![false; size];
        for &node in &raw.nodes {
            match seen.get_mut(node) {
                None => return Err(InputError::NodeOutOfRange { node, size }),
                Some(slot) if *slot => return Err(InputError::DuplicateNode { node }),
                Some(slot) => *slot = true,
            }
        }
        Ok(Self { nodes: raw.nodes })
    }
}

impl Tour {
    /// Creates an empty tour.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, node: NodeId) {
        self.nodes.push(node);
    }

    /// The nodes in visitation order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Consumes the tour, returning the visitation order.
    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }

    /// Number of nodes in the tour.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tour has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node visited.
    pub fn start(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Most recently appended node.
    pub fn last(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Returns `true` if the tour visits every node of `0..n` exactly once.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.nodes.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &node in &self.nodes {
            match seen.get_mut(node) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }
}

impl From<Tour> for Vec<NodeId> {
    fn from(tour: Tour) -> Self {
        tour.nodes
    }
}
