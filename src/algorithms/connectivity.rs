//! Connectivity analyses: component queries, k-connectivity predicates, and
//! forest detection.
//!
//! Everything here is built on the traversal primitives. The two
//! k-connectivity predicates are exact recursive definitions with
//! exponential worst cases; they exist for small graphs and small `k`.
//!
//! ### Complexity
//! | Operation | Complexity |
//! |-----------|------------|
//! | `is_connected` | \(O(n + m)\) |
//! | `component_size` | \(O(n + m)\) |
//! | `component_count` | \(O(n + m)\) |
//! | `is_forest` | \(O(n + m)\) |
//! | `is_k_edge_connected` | \(O(m^k)\) edge-removal trials |
//! | `is_k_vertex_connected` | \(O(n^k)\) graph clones |

use std::collections::VecDeque;

use crate::graph::Graph;

use super::traversal::bfs;

/// Returns true iff the graph is connected.
///
/// Graphs of order ≤ 1 are trivially connected. Otherwise a BFS from
/// vertex 1 (the canonical first vertex) must cover every vertex.
pub fn is_connected(graph: &Graph) -> bool {
    let n = graph.order();
    if n <= 1 {
        return true;
    }
    let mut visited = vec![false; n + 1];
    bfs(graph, 1, &mut visited);
    visited[1..].iter().all(|&reached| reached)
}

/// Number of vertices in the connected component of `v`, including `v`.
///
/// # Panics
/// Panics if `v` is out of range.
pub fn component_size(graph: &Graph, v: usize) -> usize {
    let mut visited = vec![false; graph.order() + 1];
    bfs(graph, v, &mut visited);
    visited.iter().filter(|&&reached| reached).count()
}

/// Number of connected components.
///
/// Every unvisited vertex in `1..=order` seeds a new BFS; the seed count is
/// the component count.
pub fn component_count(graph: &Graph) -> usize {
    let n = graph.order();
    let mut visited = vec![false; n + 1];
    let mut count = 0;
    for v in 1..=n {
        if !visited[v] {
            count += 1;
            bfs(graph, v, &mut visited);
        }
    }
    count
}

/// Returns true iff the graph remains connected after removal of any
/// `k - 1` edges.
///
/// Base cases: `k == 0` is trivially true, as are graphs of order ≤ 1
/// (nothing to disconnect); `k` above the maximum degree is false (removing
/// the edges incident to a maximum-degree vertex disconnects it); a
/// complete graph is `k`-edge-connected for any `k` within the previous
/// bound; `k == 1` is plain connectivity.
///
/// Otherwise every canonical edge is removed in place, the predicate
/// recurses with `k - 1` on the same mutated graph, and the edge is
/// restored (weight preserved) before the next candidate, so each branch
/// starts from the original graph, not an accumulation of removals. The
/// graph is structurally restored before every return, including early
/// failure returns.
pub fn is_k_edge_connected(graph: &mut Graph, k: usize) -> bool {
    if k == 0 {
        return true;
    }
    let n = graph.order();
    let m = graph.size();

    if n <= 1 {
        return true;
    }
    if k > graph.max_degree() {
        return false;
    }
    if m == n * n.saturating_sub(1) / 2 {
        // Complete graph.
        return true;
    }
    if k == 1 {
        return is_connected(graph);
    }

    // The canonical edge list stays valid across iterations because every
    // removal is undone before the next candidate is tried.
    let edges = graph.edges();
    for edge in edges {
        // Weight-matched removal: among parallel copies the restore must
        // put back the same copy it took.
        graph.remove_edge_with_weight(edge.u, edge.v, edge.weight);
        let survives = is_k_edge_connected(graph, k - 1);
        graph.add_edge(edge.u, edge.v, edge.weight);
        if !survives {
            return false;
        }
    }
    true
}

/// Returns true iff the graph remains connected after removal of any
/// `k - 1` vertices.
///
/// Base cases mirror [`is_k_edge_connected`] with the minimum degree as the
/// bound: a graph cannot survive removing more vertices than its minimum
/// degree. Each recursive branch receives a fresh clone with one vertex
/// removed; vertex removal re-indexes every higher id, so in-place
/// restoration is not viable here.
pub fn is_k_vertex_connected(graph: &Graph, k: usize) -> bool {
    if k == 0 {
        return true;
    }
    let n = graph.order();
    let m = graph.size();

    if m == n * n.saturating_sub(1) / 2 {
        // Complete graph.
        return true;
    }
    if k > graph.min_degree() {
        return false;
    }
    if k == 1 {
        return is_connected(graph);
    }

    for v in 1..=n {
        let mut reduced = graph.clone();
        reduced.remove_vertex(v);
        if !is_k_vertex_connected(&reduced, k - 1) {
            return false;
        }
    }
    true
}

/// Returns true iff the graph is a forest (acyclic, possibly disconnected).
///
/// Order 0 is vacuously a forest, and `size >= order` disqualifies
/// immediately (a forest has at most `order - 1` edges). Otherwise a BFS
/// over every unvisited vertex tracks each vertex's immediate predecessor;
/// meeting an already-visited neighbor other than the immediate predecessor
/// is a cycle. Revisiting the predecessor along the traversed edge is
/// tolerated, so the two-entry undirected representation never flags a
/// false 2-cycle.
pub fn is_forest(graph: &Graph) -> bool {
    let n = graph.order();
    let m = graph.size();

    if n == 0 {
        return true;
    }
    if m >= n {
        return false;
    }

    let mut visited = vec![false; n + 1];
    let mut previous = vec![0usize; n + 1];
    let mut queue = VecDeque::new();

    for seed in 1..=n {
        if visited[seed] {
            continue;
        }
        visited[seed] = true;
        queue.push_back(seed);

        while let Some(u) = queue.pop_front() {
            for entry in graph.neighbors(u) {
                let w = entry.vertex;
                if previous[u] == w {
                    continue;
                }
                if visited[w] {
                    return false;
                }
                visited[w] = true;
                previous[w] = u;
                queue.push_back(w);
            }
        }
    }
    true
}
