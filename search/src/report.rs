//! `SearchReport`: a serializable summary of one traversal.
//!
//! Diagnostics are explicit values returned to the caller, not shared
//! mutable state. The canonical byte form (compact JSON, keys sorted
//! lexicographically, integer numbers only) is byte-identical across runs
//! for the same traversal, which is what the determinism tests compare.

use serde::{Deserialize, Serialize};

use crate::error::ReportError;
use crate::search::{SearchResult, SearchStats};

/// Which frontier discipline produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    BestFirst,
}

/// Summary artifact for one traversal call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// The frontier discipline used.
    pub strategy: Strategy,
    /// Whether a goal state was reached.
    pub goal_reached: bool,
    /// Number of states on the returned path (`None` on absence).
    pub path_len: Option<u64>,
    /// Cumulative cost of the returned path (`None` on absence).
    pub path_cost: Option<u64>,
    /// Traversal counters.
    pub expansions: u64,
    pub nodes_created: u64,
    pub frontier_high_water: u64,
}

impl SearchReport {
    /// Summarize a traversal result.
    pub fn from_result<S, E>(strategy: Strategy, result: &SearchResult<S, E>) -> Self {
        let SearchStats {
            expansions,
            nodes_created,
            frontier_high_water,
        } = result.stats;
        let path_len = result.goal.map(|id| result.arena.path_ids(id).len() as u64);
        Self {
            strategy,
            goal_reached: result.is_goal_reached(),
            path_len,
            path_cost: result.path_cost(),
            expansions,
            nodes_created,
            frontier_high_water,
        }
    }

    /// Canonical JSON bytes: compact form with lexicographically sorted keys.
    ///
    /// Routing through `serde_json::Value` sorts object keys (its map is a
    /// `BTreeMap`); all fields are integers, booleans, or unit-variant tags,
    /// so the encoding has no formatting drift.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Serialize`] if JSON encoding fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, ReportError> {
        let value = serde_json::to_value(self)?;
        Ok(serde_json::to_vec(&value)?)
    }
}
