//! A dynamic adjacency-sequence undirected multigraph.
//!
//! Vertices carry dense 1-based ids `1..=order`; slot 0 of every id-indexed
//! buffer is unused so ids index directly. Each vertex owns a growable
//! sequence of `(neighbor, weight)` entries, and every undirected edge is
//! represented by two entries, one in each endpoint's sequence. There is no
//! deduplication: parallel edges are permitted and counted separately.
//!
//! Removal uses `swap_remove`, so adjacency sequences carry **no ordering
//! guarantee**. Algorithms built on this type must depend only on the
//! reachable set, never on sibling visitation order.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(n)\) | appends, then recomputes cached degrees |
//! | `add_edge` | \(O(n)\) | two appends, then degree recompute |
//! | `remove_edge` | \(O(\deg u + \deg v + n)\) | entry scans + degree recompute |
//! | `remove_edge_with_weight` | \(O(\deg u + \deg v + n)\) | weight-matched copy |
//! | `remove_vertex` | \(O(n + m)\) | relabels every id above the removed one |
//! | `degree` | \(O(1)\) | sequence length |
//! | `edges` | \(O(n + m)\) | canonical `u < v` enumeration |
//!
//! Cached `min_degree`/`max_degree` are recomputed in full after every
//! structural mutation rather than patched incrementally; this keeps them
//! correct under arbitrary removal sequences.

use serde::{Deserialize, Serialize};

use super::{Edge, Weight};

/// One adjacency entry: the far endpoint of an edge plus its weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjEntry {
    /// The neighboring vertex id.
    pub vertex: usize,
    /// Weight of the connecting edge (`1` in unweighted graphs).
    pub weight: Weight,
}

/// An undirected multigraph over dense 1-based vertex ids.
///
/// Invariants:
/// - symmetry: `v` appears in `u`'s sequence with weight `w` exactly as
///   often as `u` appears in `v`'s sequence with weight `w`;
/// - `size` equals the number of undirected edges present (each edge
///   contributing two adjacency entries).
///
/// `remove_vertex` compacts ids: every vertex id greater than the removed
/// one shifts down by one, invalidating externally held ids above it.
#[derive(Debug, Clone)]
pub struct Graph {
    /// Per-vertex adjacency sequences; slot 0 is unused.
    adjacency: Vec<Vec<AdjEntry>>,
    /// Undirected edge count.
    size: usize,
    /// Cached minimum degree, recomputed after every mutation.
    min_degree: usize,
    /// Cached maximum degree, recomputed after every mutation.
    max_degree: usize,
    /// When false, every accepted edge is stored with weight 1.
    weighted: bool,
}

impl Graph {
    /// Creates a graph with `order` isolated vertices.
    pub fn new(order: usize, weighted: bool) -> Self {
        Self {
            adjacency: vec![Vec::new(); order + 1],
            size: 0,
            min_degree: 0,
            max_degree: 0,
            weighted,
        }
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.adjacency.len() - 1
    }

    /// Number of undirected edges.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Minimum degree over all vertices (0 for the empty graph).
    pub fn min_degree(&self) -> usize {
        self.min_degree
    }

    /// Maximum degree over all vertices (0 for the empty graph).
    pub fn max_degree(&self) -> usize {
        self.max_degree
    }

    /// Whether edge weights are meaningful.
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Returns true iff `v` is a live vertex id.
    fn in_range(&self, v: usize) -> bool {
        v >= 1 && v <= self.order()
    }

    /// Degree of `vertex`. A self-loop contributes 2.
    ///
    /// # Panics
    /// Panics if `vertex` is out of range.
    pub fn degree(&self, vertex: usize) -> usize {
        assert!(self.in_range(vertex), "vertex {vertex} out of range");
        self.adjacency[vertex].len()
    }

    /// The adjacency sequence of `vertex`. No ordering guarantee.
    ///
    /// # Panics
    /// Panics if `vertex` is out of range.
    pub fn neighbors(&self, vertex: usize) -> &[AdjEntry] {
        assert!(self.in_range(vertex), "vertex {vertex} out of range");
        &self.adjacency[vertex]
    }

    /// Weight of the first stored edge between `u` and `v`, if any.
    pub fn edge_weight(&self, u: usize, v: usize) -> Option<Weight> {
        if !self.in_range(u) || !self.in_range(v) {
            return None;
        }
        self.adjacency[u]
            .iter()
            .find(|e| e.vertex == v)
            .map(|e| e.weight)
    }

    /// Appends an isolated vertex and returns its id (the new order).
    pub fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.update_degrees();
        self.order()
    }

    /// Adds an undirected edge between `u` and `v`.
    ///
    /// Returns false (no mutation) if either endpoint is out of range. In an
    /// unweighted graph the weight argument is ignored and 1 is stored.
    /// Parallel edges and self-loops are accepted.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: Weight) -> bool {
        if !self.in_range(u) || !self.in_range(v) {
            return false;
        }
        let weight = if self.weighted { weight } else { 1 };
        self.adjacency[u].push(AdjEntry { vertex: v, weight });
        self.adjacency[v].push(AdjEntry { vertex: u, weight });
        self.size += 1;
        self.update_degrees();
        true
    }

    /// Removes one undirected edge between `u` and `v`: the first stored
    /// copy in `u`'s sequence, whatever its weight.
    ///
    /// If no copy exists the graph is untouched and false is returned. An
    /// entry present on exactly one side means the symmetry invariant was
    /// already broken; that is a defect, debug-asserted and reported as
    /// failure without mutation.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> bool {
        if !self.in_range(u) || !self.in_range(v) {
            return false;
        }
        let first = self.adjacency[u].iter().find(|e| e.vertex == v);
        let Some(weight) = first.map(|e| e.weight) else {
            debug_assert!(
                u == v || !self.adjacency[v].iter().any(|e| e.vertex == u),
                "adjacency sequences out of sync for edge ({u}, {v})"
            );
            return false;
        };
        self.remove_edge_with_weight(u, v, weight)
    }

    /// Removes the stored copy of edge `(u, v)` carrying exactly `weight`.
    ///
    /// Among parallel copies of different weights this picks the matching
    /// one; remove/restore sequences that must preserve the edge multiset
    /// pair it with [`add_edge`](Self::add_edge). Returns false without
    /// mutation when no copy of that weight exists.
    pub fn remove_edge_with_weight(&mut self, u: usize, v: usize, weight: Weight) -> bool {
        if !self.in_range(u) || !self.in_range(v) {
            return false;
        }
        if u == v {
            return self.remove_self_loop(u, weight);
        }

        let pos_u = self.adjacency[u]
            .iter()
            .position(|e| e.vertex == v && e.weight == weight);
        let Some(pu) = pos_u else {
            return false;
        };
        let pos_v = self.adjacency[v]
            .iter()
            .position(|e| e.vertex == u && e.weight == weight);
        let Some(pv) = pos_v else {
            debug_assert!(false, "adjacency sequences out of sync for edge ({u}, {v})");
            return false;
        };

        self.adjacency[u].swap_remove(pu);
        self.adjacency[v].swap_remove(pv);
        self.size -= 1;
        self.update_degrees();
        true
    }

    /// Removes one self-loop at `v` with the given weight (two entries in
    /// the same sequence).
    fn remove_self_loop(&mut self, v: usize, weight: Weight) -> bool {
        let first = self.adjacency[v]
            .iter()
            .position(|e| e.vertex == v && e.weight == weight);
        let Some(first) = first else {
            return false;
        };
        let second = self.adjacency[v]
            .iter()
            .enumerate()
            .position(|(i, e)| i != first && e.vertex == v && e.weight == weight);
        let Some(second) = second else {
            debug_assert!(false, "self-loop at {v} has an unpaired adjacency entry");
            return false;
        };

        // Remove the higher index first so the lower one stays valid.
        let (hi, lo) = if first > second {
            (first, second)
        } else {
            (second, first)
        };
        self.adjacency[v].swap_remove(hi);
        self.adjacency[v].swap_remove(lo);
        self.size -= 1;
        self.update_degrees();
        true
    }

    /// Removes `vertex` and every incident edge, then compacts vertex ids:
    /// every id greater than `vertex` shifts down by one. O(order + size).
    ///
    /// Returns false (no mutation) if `vertex` is out of range. Externally
    /// held ids above `vertex` are invalidated by a successful removal.
    pub fn remove_vertex(&mut self, vertex: usize) -> bool {
        if !self.in_range(vertex) {
            return false;
        }

        // Each entry to another vertex is one incident edge copy; self-loop
        // entries come in pairs, two per edge.
        let entries = self.adjacency[vertex].len();
        let loop_entries = self.adjacency[vertex]
            .iter()
            .filter(|e| e.vertex == vertex)
            .count();
        self.size -= (entries - loop_entries) + loop_entries / 2;

        // Purge the mirror entries under the old ids, then relabel.
        self.adjacency.remove(vertex);
        for list in self.adjacency.iter_mut().skip(1) {
            list.retain(|e| e.vertex != vertex);
            for entry in list.iter_mut() {
                if entry.vertex > vertex {
                    entry.vertex -= 1;
                }
            }
        }
        self.update_degrees();
        true
    }

    /// Enumerates every undirected edge once, canonicalized as `u < v`.
    ///
    /// Parallel edges appear once per copy; self-loops are excluded from the
    /// canonical enumeration.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.size);
        for u in 1..=self.order() {
            for entry in &self.adjacency[u] {
                if u < entry.vertex {
                    edges.push(Edge::new(u, entry.vertex, entry.weight));
                }
            }
        }
        edges
    }

    /// Computes a summary of the graph's basic structure.
    #[allow(clippy::cast_precision_loss)]
    pub fn statistics(&self) -> GraphStatistics {
        let order = self.order();
        GraphStatistics {
            order,
            size: self.size,
            min_degree: self.min_degree,
            max_degree: self.max_degree,
            average_degree: if order == 0 {
                0.0
            } else {
                // Each undirected edge contributes to two vertex degrees.
                (2 * self.size) as f64 / order as f64
            },
        }
    }

    /// Recomputes the cached degree bounds with one linear scan per vertex.
    fn update_degrees(&mut self) {
        let order = self.order();
        self.max_degree = 0;
        self.min_degree = order;
        for v in 1..=order {
            let d = self.adjacency[v].len();
            self.max_degree = self.max_degree.max(d);
            self.min_degree = self.min_degree.min(d);
        }
    }
}

/// Summary statistics for a [`Graph`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStatistics {
    /// Number of vertices.
    pub order: usize,
    /// Number of undirected edges.
    pub size: usize,
    /// Minimum degree over all vertices.
    pub min_degree: usize,
    /// Maximum degree over all vertices.
    pub max_degree: usize,
    /// Average degree \(= 2m/n\).
    pub average_degree: f64,
}
