//! Per-traversal node arena and path reconstruction.
//!
//! Parent back-links are arena indices rather than owned references, so the
//! node tree cannot form ownership cycles and every node created during one
//! traversal call is dropped together with the arena.

use crate::node::SearchNode;

/// Index of a node within a [`NodeArena`].
///
/// Ids are assigned in creation order, so they double as the deterministic
/// insertion sequence for frontier tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The raw arena index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Owns every [`SearchNode`] created during one traversal call.
#[derive(Debug, Clone)]
pub struct NodeArena<S> {
    nodes: Vec<SearchNode<S>>,
}

impl<S> NodeArena<S> {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Store a node and return its id.
    pub fn push(&mut self, node: SearchNode<S>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Access a node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this arena. Ids are never handed out
    /// for nodes that do not exist, so this is unreachable in library code.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.0]
    }

    /// Number of nodes created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &SearchNode<S>> {
        self.nodes.iter()
    }

    /// Walk parent links from `id` back to the root, returning the ids in
    /// root-to-`id` order.
    #[must_use]
    pub fn path_ids(&self, id: NodeId) -> Vec<NodeId> {
        let mut ids = Vec::new();
        let mut current = Some(id);
        while let Some(at) = current {
            ids.push(at);
            current = self.get(at).parent;
        }
        ids.reverse();
        ids
    }

    /// Reconstruct the state sequence `[initial, ..., state(id)]`.
    ///
    /// Pure over the arena: calling it twice on the same id yields identical
    /// sequences.
    #[must_use]
    pub fn path_to(&self, id: NodeId) -> Vec<S>
    where
        S: Clone,
    {
        self.path_ids(id)
            .into_iter()
            .map(|at| self.get(at).state.clone())
            .collect()
    }
}

impl<S> Default for NodeArena<S> {
    fn default() -> Self {
        Self::new()
    }
}
