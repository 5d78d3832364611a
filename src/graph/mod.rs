//! The undirected-graph ADT and the value records its analyses produce.
//!
//! The single representation lives in [`adjacency`]: a 1-based multigraph
//! over per-vertex adjacency sequences. [`Edge`] is an output-only record:
//! it is what the spanning-tree builders and the Eulerian walk return, never
//! part of the graph's internal storage.

use serde::{Deserialize, Serialize};

pub mod adjacency;

pub use adjacency::{AdjEntry, Graph, GraphStatistics};

/// Edge weight. Unweighted graphs store every edge with weight `1`.
pub type Weight = i64;

/// An undirected edge `(u, v)` with its weight.
///
/// Produced by the spanning-tree builders and by Fleury's walk; the graph
/// itself stores adjacency entries, not `Edge` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint.
    pub u: usize,
    /// Second endpoint.
    pub v: usize,
    /// Weight of the edge.
    pub weight: Weight,
}

impl Edge {
    /// Creates an edge record.
    pub fn new(u: usize, v: usize, weight: Weight) -> Self {
        Self { u, v, weight }
    }
}
