//! Traversal primitives: BFS, DFS, and the bridge test built on them.
//!
//! Both traversals take a caller-owned visited buffer of length
//! `order + 1` (slot 0 unused, matching the 1-based vertex numbering) and
//! mark every vertex reachable from the start. Adjacency sequences carry no
//! ordering guarantee, so neither does visitation order among siblings;
//! every higher analysis depends only on the reachable set.

use std::collections::VecDeque;

use crate::graph::Graph;

/// Breadth-first search from `start`, marking reachable vertices in
/// `visited`. Vertices already marked are treated as walls.
///
/// # Panics
/// Panics if `start` is out of range or `visited` is shorter than
/// `order + 1`.
pub fn bfs(graph: &Graph, start: usize, visited: &mut [bool]) {
    assert!(
        visited.len() > graph.order(),
        "visited buffer must cover ids 1..=order"
    );
    visited[start] = true;
    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(u) = queue.pop_front() {
        for entry in graph.neighbors(u) {
            if !visited[entry.vertex] {
                visited[entry.vertex] = true;
                queue.push_back(entry.vertex);
            }
        }
    }
}

/// Depth-first search from `start`, marking reachable vertices in `visited`.
///
/// Produces the same reachable set as [`bfs`]; only the exploration order
/// differs.
///
/// # Panics
/// Panics if `start` is out of range or `visited` is shorter than
/// `order + 1`.
pub fn dfs(graph: &Graph, start: usize, visited: &mut [bool]) {
    assert!(
        visited.len() > graph.order(),
        "visited buffer must cover ids 1..=order"
    );
    visited[start] = true;
    let mut stack = vec![start];

    while let Some(u) = stack.pop() {
        for entry in graph.neighbors(u) {
            if !visited[entry.vertex] {
                visited[entry.vertex] = true;
                stack.push(entry.vertex);
            }
        }
    }
}

/// Tests whether the edge `(u, v)` is a bridge: an edge whose removal
/// disconnects its endpoints.
///
/// The edge is removed, reachability of `v` from `u` is probed with a BFS,
/// and the edge is restored with its original weight regardless of outcome.
/// Returns false if the edge does not exist.
pub fn is_bridge(graph: &mut Graph, u: usize, v: usize) -> bool {
    let Some(weight) = graph.edge_weight(u, v) else {
        return false;
    };
    graph.remove_edge(u, v);

    let mut visited = vec![false; graph.order() + 1];
    bfs(graph, u, &mut visited);
    let bridge = !visited[v];

    graph.add_edge(u, v, weight);
    bridge
}
