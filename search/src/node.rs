//! Core search node and frontier ordering key.

use crate::arena::NodeId;

/// An immutable node in the search tree.
///
/// Nodes are created when a state is first placed on the frontier and never
/// mutated afterwards. Parent links are arena indices, so a node does not
/// own its parent; the [`crate::arena::NodeArena`] owns every node produced
/// by one traversal call and is discarded wholesale when the caller drops
/// the result.
#[derive(Debug, Clone)]
pub struct SearchNode<S> {
    /// The caller-defined state at this node.
    pub state: S,
    /// Arena index of the parent node (`None` for the root).
    pub parent: Option<NodeId>,
    /// Cumulative path cost from the root (uniform +1 per step).
    pub cost: u64,
    /// Heuristic estimate of remaining cost (0 for uninformed traversals).
    pub heuristic: u64,
}

impl<S> SearchNode<S> {
    /// A root node: no parent, zero cost, zero estimate.
    pub fn root(state: S) -> Self {
        Self {
            state,
            parent: None,
            cost: 0,
            heuristic: 0,
        }
    }

    /// A child node reached from `parent` at cumulative `cost`.
    pub fn child(state: S, parent: NodeId, cost: u64) -> Self {
        Self {
            state,
            parent: Some(parent),
            cost,
            heuristic: 0,
        }
    }

    /// A child node carrying a heuristic estimate, for best-first frontiers.
    pub fn estimated(state: S, parent: Option<NodeId>, cost: u64, heuristic: u64) -> Self {
        Self {
            state,
            parent,
            cost,
            heuristic,
        }
    }

    /// Estimated total cost `f = cost + heuristic` (the frontier ordering key).
    #[must_use]
    pub fn f(&self) -> u64 {
        self.cost.saturating_add(self.heuristic)
    }
}

/// The best-first frontier ordering key: `(f, insertion)`.
///
/// Lower `f` first; ties broken by older insertion order. The insertion
/// component is the node's arena index, which is monotone in creation
/// order, so equal-priority entries pop in a reproducible order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f: u64,
    pub insertion: u64,
}

impl FrontierKey {
    /// Build the key for a node stored at arena index `id`.
    #[must_use]
    pub fn new<S>(node: &SearchNode<S>, id: NodeId) -> Self {
        Self {
            f: node.f(),
            insertion: id.index() as u64,
        }
    }
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f
            .cmp(&other.f)
            .then(self.insertion.cmp(&other.insertion))
    }
}
