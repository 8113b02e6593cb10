//! Wayfarer Search: generic traversal over implicit state spaces.
//!
//! A state space is defined by nothing more than a successor function and a
//! goal predicate over an opaque, caller-chosen state type. Three frontier
//! disciplines are provided — depth-first, breadth-first, and best-first
//! (A*) — sharing one arena-backed node representation and one path
//! reconstructor.
//!
//! # Key types
//!
//! - [`node::SearchNode`] — immutable state node with deterministic ordering
//! - [`arena::NodeArena`] — per-traversal node storage and path reconstruction
//! - [`frontier::BestFirstFrontier`] — min-heap frontier keyed by `(f, insertion)`
//! - [`search::SearchResult`] — terminal node, arena, explored record, counters
//! - [`report::SearchReport`] — canonical-JSON diagnostic artifact
//!
//! # Contract
//!
//! Traversals are total over well-formed inputs: absence of a path is the
//! `goal: None` result, never an error. Caller-supplied closures must be
//! pure and deterministic; the successor function must return a finite
//! sequence for every reachable state. Bounding an infinite space is the
//! caller's responsibility.

#![forbid(unsafe_code)]

pub mod arena;
pub mod error;
pub mod frontier;
pub mod membership;
pub mod node;
pub mod report;
pub mod search;
