//! Frontier disciplines: LIFO, FIFO, and priority by `(f, insertion)`.
//!
//! A frontier holds discovered-but-not-yet-expanded node ids; the arena
//! holds the nodes themselves. The discipline determines exploration order
//! only — explored-set bookkeeping lives with the traversal loop.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::arena::NodeId;
use crate::node::FrontierKey;

/// Common surface of the uninformed frontier disciplines, so depth-first
/// and breadth-first traversals share one driver loop.
pub trait Frontier {
    /// Add a node id to the frontier.
    fn push(&mut self, id: NodeId);

    /// Remove the next node id per this discipline, or `None` when empty.
    fn pop(&mut self) -> Option<NodeId>;

    /// Current frontier size.
    fn len(&self) -> usize;

    /// Whether the frontier is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest size the frontier has reached.
    fn high_water(&self) -> u64;
}

/// Last-in-first-out frontier (depth-first exploration).
#[derive(Debug, Default)]
pub struct DepthFirstFrontier {
    stack: Vec<NodeId>,
    high_water: u64,
}

impl DepthFirstFrontier {
    /// Create an empty stack frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for DepthFirstFrontier {
    fn push(&mut self, id: NodeId) {
        self.stack.push(id);
        self.high_water = self.high_water.max(self.stack.len() as u64);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// First-in-first-out frontier (breadth-first exploration).
#[derive(Debug, Default)]
pub struct BreadthFirstFrontier {
    queue: VecDeque<NodeId>,
    high_water: u64,
}

impl BreadthFirstFrontier {
    /// Create an empty queue frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for BreadthFirstFrontier {
    fn push(&mut self, id: NodeId) {
        self.queue.push_back(id);
        self.high_water = self.high_water.max(self.queue.len() as u64);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// A best-first entry: the ordering key plus the node id it refers to.
///
/// `BinaryHeap` is a max-heap, so entries wrap their key in `Reverse` to
/// pop the lowest `(f, insertion)` first.
#[derive(Debug)]
struct BestFirstEntry {
    key: Reverse<FrontierKey>,
    id: NodeId,
}

impl PartialEq for BestFirstEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for BestFirstEntry {}

impl PartialOrd for BestFirstEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BestFirstEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Priority frontier ordered by ascending `(f, insertion)`.
#[derive(Debug, Default)]
pub struct BestFirstFrontier {
    heap: BinaryHeap<BestFirstEntry>,
    high_water: u64,
}

impl BestFirstFrontier {
    /// Create an empty priority frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node id under the given ordering key.
    pub fn push(&mut self, key: FrontierKey, id: NodeId) {
        self.heap.push(BestFirstEntry {
            key: Reverse(key),
            id,
        });
        self.high_water = self.high_water.max(self.heap.len() as u64);
    }

    /// Remove the entry with the lowest `(f, insertion)` key.
    pub fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|entry| entry.id)
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier has reached.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
