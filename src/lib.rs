//! # `trellis` - Undirected-Graph Algorithms Toolkit
//!
//! An in-memory toolkit built around a single undirected-graph abstract data
//! type: a 1-based adjacency-sequence multigraph with cached degree bounds,
//! plus the structural analyses that classical graph theory courses are built
//! from: connectivity, k-edge/k-vertex connectivity, forest detection,
//! minimum spanning trees, and Eulerian trails.
//!
//! ## Design
//!
//! - **One representation, many analyses**: every algorithm consumes the
//!   [`Graph`] ADT through its public surface. Analyses never reach into the
//!   adjacency storage directly.
//! - **Recompute, don't patch**: cached `min_degree`/`max_degree` are
//!   recomputed in full after every structural mutation. This keeps arbitrary
//!   removal sequences correct at a small constant-factor cost.
//! - **Restore-on-return**: analyses that temporarily mutate a caller's graph
//!   ([`algorithms::is_k_edge_connected`], [`algorithms::is_bridge`]) put the
//!   graph back before returning, on every path. Vertex-removal recursion
//!   clones instead, because vertex removal re-indexes every higher id.
//! - **Reported errors, not panics**: mutations referencing an out-of-range
//!   vertex return `false` and leave the graph untouched. Invariant
//!   violations (asymmetric adjacency, a stuck Eulerian walk) are
//!   `debug_assert!`ed.
//!
//! The exponential predicates (`is_k_edge_connected`, `is_k_vertex_connected`)
//! are exact recursive definitions, O(m^k) and O(n^k) respectively. They are
//! meant for small graphs and small `k`, not for production-scale inputs.
//!
//! ## Example
//!
//! ```rust
//! use trellis::{Graph, algorithms};
//!
//! // A weighted triangle.
//! let mut graph = Graph::new(3, true);
//! graph.add_edge(1, 2, 1);
//! graph.add_edge(2, 3, 2);
//! graph.add_edge(1, 3, 3);
//!
//! assert!(algorithms::is_connected(&graph));
//! assert!(!algorithms::is_forest(&graph));
//!
//! let tree = algorithms::kruskal(&graph);
//! let total: i64 = tree.iter().map(|e| e.weight).sum();
//! assert_eq!(total, 3);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod algorithms;
pub mod collections;
pub mod graph;

pub use collections::DisjointSet;
pub use graph::{AdjEntry, Edge, Graph, GraphStatistics, Weight};

// Compile-time layout checks for the hot record types. The bounds are
// intentionally loose upper bounds to avoid platform brittleness while still
// catching accidental size regressions.
const _: () = {
    use core::mem;

    // `Edge` is an output record copied freely by the spanning-tree builders.
    assert!(mem::size_of::<Edge>() <= 24);

    // Adjacency entries are stored inline per vertex; keep them compact.
    assert!(mem::size_of::<AdjEntry>() <= 16);
};
