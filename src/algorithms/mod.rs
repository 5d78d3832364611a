//! Structural analyses over the [`Graph`](crate::Graph) ADT.
//!
//! Analyses are organized into categories:
//! - [`traversal`]: BFS/DFS primitives and the bridge test
//! - [`connectivity`]: component counting, k-connectivity, forest detection
//! - [`mst`]: four minimum-spanning-tree builders
//! - [`trails`]: Eulerian-trail classification and Fleury's walk
//!
//! Data flows one direction: ADT → traversal → {connectivity, mst, trails}.
//! Analyses that temporarily mutate a caller's graph restore it before
//! returning on every path; the rest take `&Graph` and work on clones where
//! they need a scratch copy.

pub mod connectivity;
pub mod mst;
pub mod trails;
pub mod traversal;

// Re-export the full operation set at the module root.
pub use connectivity::{
    component_count, component_size, is_connected, is_forest, is_k_edge_connected,
    is_k_vertex_connected,
};
pub use mst::{kruskal, kruskal_naive, kruskal_paint, prim_naive};
pub use trails::{eulerian_properties, fleury, EulerianTrailProperties};
pub use traversal::{bfs, dfs, is_bridge};
