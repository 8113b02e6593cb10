//! Traversal entry points and the shared expansion loop.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::arena::{NodeArena, NodeId};
use crate::frontier::{BestFirstFrontier, BreadthFirstFrontier, DepthFirstFrontier, Frontier};
use crate::node::{FrontierKey, SearchNode};

/// States ever placed on an uninformed frontier.
pub type ExploredStates<S> = HashSet<S>;

/// Best known cost per state, maintained by the best-first traversal.
pub type BestCosts<S> = HashMap<S, u64>;

/// Counters accumulated over one traversal call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Number of frontier pops that went on to successor enumeration.
    pub expansions: u64,
    /// Number of nodes created (root included).
    pub nodes_created: u64,
    /// Largest frontier size reached.
    pub frontier_high_water: u64,
}

/// Outcome of one traversal call.
///
/// `goal` is `None` when no reachable state satisfied the goal predicate —
/// absence of a path is a normal return value, not an error. The arena and
/// the explored record are returned explicitly; no traversal state survives
/// the call anywhere else.
#[derive(Debug, Clone)]
pub struct SearchResult<S, E> {
    /// Arena id of the terminal node, if a goal was reached.
    pub goal: Option<NodeId>,
    /// Every node created during the traversal, parent links included.
    pub arena: NodeArena<S>,
    /// The explored record: a state set for DFS/BFS, a cost map for A*.
    pub explored: E,
    /// Traversal counters.
    pub stats: SearchStats,
}

impl<S, E> SearchResult<S, E> {
    /// Returns `true` if the traversal reached a goal state.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.goal.is_some()
    }

    /// Reconstruct `[initial, ..., goal]`, or `None` when no path exists.
    #[must_use]
    pub fn path(&self) -> Option<Vec<S>>
    where
        S: Clone,
    {
        self.goal.map(|id| self.arena.path_to(id))
    }

    /// Cumulative cost of the path to the goal, if one was found.
    #[must_use]
    pub fn path_cost(&self) -> Option<u64> {
        self.goal.map(|id| self.arena.get(id).cost)
    }
}

/// Depth-first traversal.
///
/// Finds *some* path to a goal if one is reachable, with no optimality
/// guarantee. Each reachable state is expanded at most once.
pub fn dfs<S, G, N>(initial: S, goal_test: G, successors: N) -> SearchResult<S, ExploredStates<S>>
where
    S: Clone + Eq + Hash,
    G: Fn(&S) -> bool,
    N: Fn(&S) -> Vec<S>,
{
    uninformed(initial, goal_test, successors, DepthFirstFrontier::new())
}

/// Breadth-first traversal.
///
/// The first goal dequeued corresponds to a path with the minimum number of
/// edges from `initial`, under uniform step cost.
pub fn bfs<S, G, N>(initial: S, goal_test: G, successors: N) -> SearchResult<S, ExploredStates<S>>
where
    S: Clone + Eq + Hash,
    G: Fn(&S) -> bool,
    N: Fn(&S) -> Vec<S>,
{
    uninformed(initial, goal_test, successors, BreadthFirstFrontier::new())
}

/// Shared driver for the uninformed disciplines.
///
/// The goal is tested at pop time, so a traversal whose initial state is
/// already a goal pops the root and returns a single-node path without
/// special-casing.
fn uninformed<S, G, N, F>(
    initial: S,
    goal_test: G,
    successors: N,
    mut frontier: F,
) -> SearchResult<S, ExploredStates<S>>
where
    S: Clone + Eq + Hash,
    G: Fn(&S) -> bool,
    N: Fn(&S) -> Vec<S>,
    F: Frontier,
{
    let mut arena = NodeArena::new();
    let mut explored: ExploredStates<S> = HashSet::new();
    explored.insert(initial.clone());

    let root = arena.push(SearchNode::root(initial));
    frontier.push(root);

    let mut expansions: u64 = 0;

    while let Some(current) = frontier.pop() {
        // Clone out of the arena so successor children can be pushed while
        // the current state is borrowed by the caller's closures.
        let state = arena.get(current).state.clone();
        if goal_test(&state) {
            return SearchResult {
                goal: Some(current),
                stats: stats_of(expansions, &arena, frontier.high_water()),
                arena,
                explored,
            };
        }
        expansions += 1;

        let child_cost = arena.get(current).cost + 1;
        for next in successors(&state) {
            if explored.contains(&next) {
                continue;
            }
            explored.insert(next.clone());
            let child = arena.push(SearchNode::child(next, current, child_cost));
            frontier.push(child);
        }
    }

    SearchResult {
        goal: None,
        stats: stats_of(expansions, &arena, frontier.high_water()),
        arena,
        explored,
    }
}

/// Best-first (A*) traversal.
///
/// The frontier is ordered by ascending `cost + heuristic`, ties broken by
/// insertion order. A rediscovered state whose new cost improves on its
/// best recorded cost is relaxed: the map is updated and a fresh node is
/// pushed.
///
/// If `heuristic` is admissible and consistent, the first goal popped has
/// minimum cost among all paths from `initial`. With `heuristic` constantly
/// zero, the returned path has the same length as the breadth-first one. An
/// overestimating heuristic may yield a suboptimal path; it is still a
/// valid path and never an error.
pub fn astar<S, G, N, H>(
    initial: S,
    goal_test: G,
    successors: N,
    heuristic: H,
) -> SearchResult<S, BestCosts<S>>
where
    S: Clone + Eq + Hash,
    G: Fn(&S) -> bool,
    N: Fn(&S) -> Vec<S>,
    H: Fn(&S) -> u64,
{
    let mut arena = NodeArena::new();
    let mut best: BestCosts<S> = HashMap::new();
    best.insert(initial.clone(), 0);

    let root_estimate = heuristic(&initial);
    let root = arena.push(SearchNode::estimated(initial, None, 0, root_estimate));

    let mut frontier = BestFirstFrontier::new();
    frontier.push(FrontierKey::new(arena.get(root), root), root);

    let mut expansions: u64 = 0;

    while let Some(current) = frontier.pop() {
        let state = arena.get(current).state.clone();
        if goal_test(&state) {
            return SearchResult {
                goal: Some(current),
                stats: stats_of(expansions, &arena, frontier.high_water()),
                arena,
                explored: best,
            };
        }
        expansions += 1;

        // Uniform step cost: weighted edges are out of contract.
        let new_cost = arena.get(current).cost + 1;
        for next in successors(&state) {
            let improves = match best.get(&next) {
                Some(&known) => new_cost < known,
                None => true,
            };
            if !improves {
                continue;
            }
            best.insert(next.clone(), new_cost);
            let estimate = heuristic(&next);
            let child = arena.push(SearchNode::estimated(
                next,
                Some(current),
                new_cost,
                estimate,
            ));
            frontier.push(FrontierKey::new(arena.get(child), child), child);
        }
    }

    SearchResult {
        goal: None,
        stats: stats_of(expansions, &arena, frontier.high_water()),
        arena,
        explored: best,
    }
}

fn stats_of<S>(expansions: u64, arena: &NodeArena<S>, frontier_high_water: u64) -> SearchStats {
    SearchStats {
        expansions,
        nodes_created: arena.len() as u64,
        frontier_high_water,
    }
}
