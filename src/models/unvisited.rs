//! Ordered set of nodes not yet placed in a tour.

use super::NodeId;

/// The nodes still waiting to be visited during construction.
///
/// Membership is stored as a dense flag per node, so iteration is always in
/// ascending index order. Selection relies on that order to resolve ties
/// reproducibly.
///
/// # Examples
///
/// ```
/// use u_tour::models::UnvisitedSet;
///
/// let mut set = UnvisitedSet::from_nodes(5, [4, 1, 3]);
/// assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 3, 4]);
/// assert!(set.remove(3));
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.without(1).iter().collect::<Vec<_>>(), vec![4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnvisitedSet {
    member: Vec<bool>,
    len: usize,
}

impl UnvisitedSet {
    /// Creates an empty set able to hold nodes `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            member: vec![false; capacity],
            len: 0,
        }
    }

    /// Creates a set holding `nodes`, each of which must be below `capacity`.
    ///
    /// # Panics
    ///
    /// Panics if a node is `>= capacity`.
    pub fn from_nodes(capacity: usize, nodes: impl IntoIterator<Item = NodeId>) -> Self {
        let mut set = Self::new(capacity);
        for node in nodes {
            set.insert(node);
        }
        set
    }

    /// Adds a node, returning `true` if it was not already present.
    ///
    /// # Panics
    ///
    /// Panics if `node` is outside the set's capacity.
    pub fn insert(&mut self, node: NodeId) -> bool {
        let slot = &mut self.member[node];
        if *slot {
            return false;
        }
        *slot = true;
        self.len += 1;
        true
    }

    /// Removes a node, returning `true` if it was present.
    pub fn remove(&mut self, node: NodeId) -> bool {
        match self.member.get_mut(node) {
            Some(slot) if *slot => {
                *slot = false;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    /// Returns `true` if `node` is in the set.
    pub fn contains(&self, node: NodeId) -> bool {
        self.member.get(node).copied().unwrap_or(false)
    }

    /// Number of nodes in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates the members in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.member
            .iter()
            .enumerate()
            .filter_map(|(node, &present)| present.then_some(node))
    }

    /// Smallest member, if any.
    pub fn first(&self) -> Option<NodeId> {
        self.iter().next()
    }

    /// A view of this set with `excluded` removed, without copying.
    pub fn without(&self, excluded: NodeId) -> Remaining<'_> {
        Remaining {
            set: self,
            excluded,
        }
    }
}

/// The unvisited set minus one candidate.
///
/// This is what a scorer sees as "everything still left after choosing the
/// candidate".
#[derive(Debug, Clone, Copy)]
pub struct Remaining<'a> {
    set: &'a UnvisitedSet,
    excluded: NodeId,
}

impl<'a> Remaining<'a> {
    /// The node removed from the underlying set.
    pub fn excluded(&self) -> NodeId {
        self.excluded
    }

    /// Number of nodes in the view.
    pub fn len(&self) -> usize {
        if self.set.contains(self.excluded) {
            self.set.len() - 1
        } else {
            self.set.len()
        }
    }

    /// Returns `true` if the view is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the view in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + 'a {
        let set: &'a UnvisitedSet = self.set;
        let excluded = self.excluded;
        set.iter().filter(move |&node| node != excluded)
    }
}
