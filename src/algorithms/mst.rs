//! Minimum-spanning-tree builders: three Kruskal variants and naive Prim.
//!
//! All four builders consume the graph read-only, collect the canonical
//! edge list, and return the accepted edges (not a reconstructed tree).
//! They assume a connected input; on a disconnected graph they silently
//! produce a spanning forest with fewer than `order - 1` edges, a
//! documented limitation, not an error.
//!
//! Candidate edges are sorted ascending by weight with a stable sort; tie
//! order among equal weights is unspecified, so different builders may
//! return different edge sets of identical total weight.
//!
//! ### Complexity
//! | Builder | Complexity | Cycle check |
//! |---------|------------|-------------|
//! | `kruskal_naive` | \(O(m \cdot n)\) | full forest re-test per candidate |
//! | `kruskal_paint` | \(O(m \cdot n)\) | color classes, minority repaint |
//! | `kruskal` | \(O(m \log m)\) | union-find |
//! | `prim_naive` | \(O(n \cdot m)\) | frontier rescan per step |

use crate::collections::DisjointSet;
use crate::graph::{Edge, Graph};

use super::connectivity::is_forest;

#[cfg(feature = "tracing")]
use tracing::trace;

/// Canonical edge list sorted ascending by weight.
fn sorted_edges(graph: &Graph) -> Vec<Edge> {
    let mut edges = graph.edges();
    edges.sort_by_key(|e| e.weight);
    edges
}

/// True once `accepted` spanning edges cover a graph of order `n`.
fn spanning_complete(accepted: usize, n: usize) -> bool {
    accepted + 1 >= n
}

/// Kruskal with a naive cycle check: accepted edges are mirrored into a
/// working graph, and each candidate is kept only if the whole working
/// graph is still a forest after tentatively adding it.
pub fn kruskal_naive(graph: &Graph) -> Vec<Edge> {
    let n = graph.order();
    let mut tree = Vec::new();
    let mut working = Graph::new(n, true);

    for edge in sorted_edges(graph) {
        if spanning_complete(tree.len(), n) {
            break;
        }
        working.add_edge(edge.u, edge.v, edge.weight);
        if is_forest(&working) {
            tree.push(edge);
        } else {
            // Roll back the candidate that closed a cycle.
            working.remove_edge_with_weight(edge.u, edge.v, edge.weight);
        }
    }

    #[cfg(feature = "tracing")]
    trace!(edges = tree.len(), "kruskal_naive spanning tree built");
    tree
}

/// Kruskal with a color-class cycle check: a manual union-find implemented
/// by linear repainting.
///
/// Two uncolored endpoints get a fresh color; one uncolored endpoint
/// inherits the other's color; two distinct colors merge by repainting
/// every vertex of the smaller class; equal colors mean the candidate
/// closes a cycle and is rejected.
pub fn kruskal_paint(graph: &Graph) -> Vec<Edge> {
    let n = graph.order();
    let mut tree = Vec::new();
    // 0 = uncolored.
    let mut color = vec![0usize; n + 1];
    let mut next_color = 1usize;

    for edge in sorted_edges(graph) {
        if spanning_complete(tree.len(), n) {
            break;
        }
        let color_u = color[edge.u];
        let color_v = color[edge.v];

        if color_u == 0 && color_v == 0 {
            color[edge.u] = next_color;
            color[edge.v] = next_color;
            next_color += 1;
            tree.push(edge);
        } else if color_u == 0 {
            color[edge.u] = color_v;
            tree.push(edge);
        } else if color_v == 0 {
            color[edge.v] = color_u;
            tree.push(edge);
        } else if color_u != color_v {
            // Repaint the minority class with the majority color.
            let count_u = color.iter().filter(|&&c| c == color_u).count();
            let count_v = color.iter().filter(|&&c| c == color_v).count();
            let (from, to) = if count_u < count_v {
                (color_u, color_v)
            } else {
                (color_v, color_u)
            };
            for c in &mut color {
                if *c == from {
                    *c = to;
                }
            }
            tree.push(edge);
        }
        // Equal colors: the edge closes a cycle, skip it.
    }

    #[cfg(feature = "tracing")]
    trace!(edges = tree.len(), "kruskal_paint spanning tree built");
    tree
}

/// Standard Kruskal: accept a candidate iff its endpoints' set
/// representatives differ, then unite them.
pub fn kruskal(graph: &Graph) -> Vec<Edge> {
    let n = graph.order();
    let mut tree = Vec::new();
    let mut sets = DisjointSet::new(n);

    for edge in sorted_edges(graph) {
        if spanning_complete(tree.len(), n) {
            break;
        }
        if sets.union(edge.u, edge.v) {
            tree.push(edge);
        }
    }

    #[cfg(feature = "tracing")]
    trace!(edges = tree.len(), "kruskal spanning tree built");
    tree
}

/// Naive Prim: grow a vertex set from vertex 1, and at each step rescan
/// every edge incident to the set for the single cheapest frontier
/// crossing.
///
/// Stops early if no crossing edge exists (disconnected input yields a
/// partial tree of the start vertex's component).
pub fn prim_naive(graph: &Graph) -> Vec<Edge> {
    let n = graph.order();
    let mut tree = Vec::new();
    if n == 0 {
        return tree;
    }

    let mut in_tree = vec![false; n + 1];
    in_tree[1] = true;

    for _ in 1..n {
        let mut best: Option<Edge> = None;
        for u in 1..=n {
            if !in_tree[u] {
                continue;
            }
            for entry in graph.neighbors(u) {
                let crosses = !in_tree[entry.vertex];
                if crosses && best.is_none_or(|b| entry.weight < b.weight) {
                    best = Some(Edge::new(u, entry.vertex, entry.weight));
                }
            }
        }
        let Some(edge) = best else {
            break;
        };
        in_tree[edge.v] = true;
        tree.push(edge);
    }

    #[cfg(feature = "tracing")]
    trace!(edges = tree.len(), "prim_naive spanning tree built");
    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    type Builder = fn(&Graph) -> Vec<Edge>;

    const BUILDERS: [(&str, Builder); 4] = [
        ("kruskal_naive", kruskal_naive),
        ("kruskal_paint", kruskal_paint),
        ("kruskal", kruskal),
        ("prim_naive", prim_naive),
    ];

    fn total_weight(tree: &[Edge]) -> i64 {
        tree.iter().map(|e| e.weight).sum()
    }

    fn triangle() -> Graph {
        let mut graph = Graph::new(3, true);
        graph.add_edge(1, 2, 1);
        graph.add_edge(2, 3, 2);
        graph.add_edge(1, 3, 3);
        graph
    }

    fn weighted_sample() -> Graph {
        // Six vertices, eight edges; unique MST weight 15.
        let mut graph = Graph::new(6, true);
        graph.add_edge(1, 2, 4);
        graph.add_edge(1, 3, 2);
        graph.add_edge(2, 3, 5);
        graph.add_edge(2, 4, 10);
        graph.add_edge(3, 5, 3);
        graph.add_edge(4, 5, 4);
        graph.add_edge(4, 6, 11);
        graph.add_edge(5, 6, 2);
        graph
    }

    #[test]
    fn triangle_weight_is_three_for_every_builder() {
        let graph = triangle();
        for (name, builder) in BUILDERS {
            let tree = builder(&graph);
            assert_eq!(tree.len(), 2, "{name} edge count");
            assert_eq!(total_weight(&tree), 3, "{name} total weight");
        }
    }

    #[test]
    fn builders_agree_on_sample_graph() {
        let graph = weighted_sample();
        let reference = total_weight(&kruskal(&graph));
        assert_eq!(reference, 15);
        for (name, builder) in BUILDERS {
            let tree = builder(&graph);
            assert_eq!(tree.len(), 5, "{name} edge count");
            assert_eq!(total_weight(&tree), reference, "{name} total weight");
            // The accepted edges form a spanning tree, not just any subset.
            let mut check = Graph::new(6, true);
            for e in &tree {
                check.add_edge(e.u, e.v, e.weight);
            }
            assert!(is_forest(&check), "{name} result is acyclic");
        }
    }

    #[test]
    fn unweighted_graph_yields_any_spanning_tree() {
        let mut graph = Graph::new(4, false);
        graph.add_edge(1, 2, 1);
        graph.add_edge(2, 3, 1);
        graph.add_edge(3, 4, 1);
        graph.add_edge(4, 1, 1);

        for (name, builder) in BUILDERS {
            let tree = builder(&graph);
            assert_eq!(tree.len(), 3, "{name} edge count");
            assert_eq!(total_weight(&tree), 3, "{name} total weight");
        }
    }

    #[test]
    fn disconnected_graph_yields_partial_forest() {
        // Components {1,2,3} and {4,5}: Kruskal variants span both (a
        // forest of 3 edges), Prim only the start component.
        let mut graph = Graph::new(5, true);
        graph.add_edge(1, 2, 1);
        graph.add_edge(2, 3, 2);
        graph.add_edge(4, 5, 3);

        for (name, builder) in BUILDERS[..3].iter().copied() {
            let tree = builder(&graph);
            assert_eq!(tree.len(), 3, "{name} spans both components");
        }
        let prim = prim_naive(&graph);
        assert_eq!(prim.len(), 2);
        assert!(prim.iter().all(|e| e.u <= 3 && e.v <= 3));
    }

    #[test]
    fn empty_and_single_vertex_graphs() {
        for (name, builder) in BUILDERS {
            assert!(builder(&Graph::new(0, true)).is_empty(), "{name} empty");
            assert!(builder(&Graph::new(1, true)).is_empty(), "{name} single");
        }
    }

    #[test]
    fn parallel_edges_use_the_cheaper_copy() {
        let mut graph = Graph::new(2, true);
        graph.add_edge(1, 2, 9);
        graph.add_edge(1, 2, 2);
        for (name, builder) in BUILDERS {
            let tree = builder(&graph);
            assert_eq!(total_weight(&tree), 2, "{name} picks the cheap copy");
        }
    }
}
