//! Eulerian-trail analysis: degree-parity classification and Fleury's
//! constructive walk.
//!
//! An undirected graph carries a closed Eulerian trail when every
//! nonzero-degree vertex has even degree, and an open one when exactly two
//! vertices have odd degree; in both cases the nonzero-degree vertices
//! must additionally form one connected piece. Fleury's algorithm then
//! extracts the trail edge by edge, never burning a bridge while another
//! exit remains.

use serde::{Deserialize, Serialize};

use crate::graph::{Edge, Graph};

use super::traversal::{bfs, is_bridge};

#[cfg(feature = "tracing")]
use tracing::trace;

/// Classification of a graph's Eulerian-trail structure.
///
/// Produced once per [`eulerian_properties`] call and immutable thereafter.
/// At most one of `has_closed_trail`/`has_open_trail` is set, and only when
/// `is_eulerian` is true.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EulerianTrailProperties {
    /// True if the graph has an Eulerian trail of either kind.
    pub is_eulerian: bool,
    /// True if a closed trail exists (every vertex degree even).
    pub has_closed_trail: bool,
    /// True if an open trail exists (exactly two odd-degree vertices).
    pub has_open_trail: bool,
    /// Start vertex for the closed-trail case: the first nonzero-degree
    /// vertex in scan order.
    pub closed_trail_start: Option<usize>,
    /// Start vertex for the open-trail case: the first odd-degree vertex in
    /// scan order.
    pub open_trail_start: Option<usize>,
    /// End vertex for the open-trail case: the second odd-degree vertex in
    /// scan order.
    pub open_trail_end: Option<usize>,
}

/// Classifies the graph's Eulerian-trail structure.
///
/// Linear scan over `1..=order`: the first nonzero-degree vertex anchors
/// the connectivity probe (no such vertex means an edgeless graph, which is
/// not Eulerian). Zero odd-degree vertices mean a closed trail, exactly two an
/// open trail between them in scan order; any other count is not Eulerian.
/// A BFS from the anchor must additionally reach every nonzero-degree
/// vertex, or the result reverts to not Eulerian.
pub fn eulerian_properties(graph: &Graph) -> EulerianTrailProperties {
    let mut properties = EulerianTrailProperties::default();
    let n = graph.order();

    let Some(anchor) = (1..=n).find(|&v| graph.degree(v) > 0) else {
        // No edges at all.
        return properties;
    };

    let mut odd_count = 0usize;
    let mut odd_ends = (None, None);
    for v in 1..=n {
        if graph.degree(v) % 2 == 1 {
            odd_count += 1;
            match odd_count {
                1 => odd_ends.0 = Some(v),
                2 => odd_ends.1 = Some(v),
                _ => {}
            }
        }
    }
    if odd_count != 0 && odd_count != 2 {
        return properties;
    }

    // All nonzero-degree vertices must sit in one component.
    let mut visited = vec![false; n + 1];
    bfs(graph, anchor, &mut visited);
    if (1..=n).any(|v| graph.degree(v) > 0 && !visited[v]) {
        return properties;
    }

    properties.is_eulerian = true;
    if odd_count == 0 {
        properties.has_closed_trail = true;
        properties.closed_trail_start = Some(anchor);
    } else {
        properties.has_open_trail = true;
        properties.open_trail_start = odd_ends.0;
        properties.open_trail_end = odd_ends.1;
    }
    properties
}

/// Extracts an Eulerian trail with Fleury's algorithm.
///
/// Operates on a private clone of the graph. From the current vertex the
/// incident entries are scanned; an edge is taken if it is the only
/// remaining incident edge, or if it is not a bridge of the current working
/// graph (probe per [`is_bridge`], restore included). The chosen edge is
/// appended to the trail, removed permanently from the working copy, and
/// the walk continues from its far endpoint until the current vertex has
/// degree 0.
///
/// Returns an empty trail when `properties` is not Eulerian. A
/// positive-degree vertex with no admissible edge cannot occur for a
/// correctly classified graph; it is debug-asserted and the partial trail
/// is returned in release builds.
pub fn fleury(graph: &Graph, properties: &EulerianTrailProperties) -> Vec<Edge> {
    let mut trail = Vec::new();
    if !properties.is_eulerian {
        return trail;
    }
    let start = if properties.has_open_trail {
        properties.open_trail_start
    } else {
        properties.closed_trail_start
    };
    let Some(mut current) = start else {
        return trail;
    };

    let mut working = graph.clone();
    while working.degree(current) > 0 {
        // Snapshot the incident entries; the bridge probe mutates and
        // restores the working graph mid-scan.
        let candidates: Vec<usize> = working.neighbors(current).iter().map(|e| e.vertex).collect();

        let mut chosen = None;
        for candidate in candidates {
            if working.degree(current) == 1 || !is_bridge(&mut working, current, candidate) {
                chosen = Some(candidate);
                break;
            }
        }
        let Some(next) = chosen else {
            debug_assert!(
                false,
                "no admissible edge at vertex {current} despite positive degree"
            );
            break;
        };

        // Record the weight of the stored copy that removal will take.
        let weight = working.edge_weight(current, next).unwrap_or(1);
        trail.push(Edge::new(current, next, weight));
        working.remove_edge(current, next);
        current = next;
    }

    #[cfg(feature = "tracing")]
    trace!(edges = trail.len(), "eulerian trail extracted");
    trail
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(n: usize) -> Graph {
        let mut graph = Graph::new(n, false);
        for v in 1..n {
            graph.add_edge(v, v + 1, 1);
        }
        graph.add_edge(n, 1, 1);
        graph
    }

    fn path(n: usize) -> Graph {
        let mut graph = Graph::new(n, false);
        for v in 1..n {
            graph.add_edge(v, v + 1, 1);
        }
        graph
    }

    /// Every edge of `graph` appears exactly once and consecutive trail
    /// edges share the walk vertex.
    fn assert_valid_trail(graph: &Graph, trail: &[Edge], start: usize, end: usize) {
        assert_eq!(trail.len(), graph.size(), "trail covers every edge");

        let mut shadow = graph.clone();
        let mut at = start;
        for edge in trail {
            assert_eq!(edge.u, at, "trail is edge-continuous");
            assert!(shadow.remove_edge(edge.u, edge.v), "edge used twice");
            at = edge.v;
        }
        assert_eq!(at, end, "trail ends where classified");
        assert_eq!(shadow.size(), 0);
    }

    #[test]
    fn edgeless_graph_is_not_eulerian() {
        let properties = eulerian_properties(&Graph::new(3, false));
        assert!(!properties.is_eulerian);
        assert!(!properties.has_closed_trail);
        assert!(!properties.has_open_trail);
    }

    #[test]
    fn cycle_has_closed_trail() {
        let graph = cycle(5);
        let properties = eulerian_properties(&graph);
        assert!(properties.is_eulerian);
        assert!(properties.has_closed_trail);
        assert!(!properties.has_open_trail);
        assert_eq!(properties.closed_trail_start, Some(1));

        let trail = fleury(&graph, &properties);
        assert_valid_trail(&graph, &trail, 1, 1);
    }

    #[test]
    fn path_has_open_trail_between_its_ends() {
        let graph = path(4);
        let properties = eulerian_properties(&graph);
        assert!(properties.is_eulerian);
        assert!(properties.has_open_trail);
        assert_eq!(properties.open_trail_start, Some(1));
        assert_eq!(properties.open_trail_end, Some(4));

        let trail = fleury(&graph, &properties);
        assert_valid_trail(&graph, &trail, 1, 4);
    }

    #[test]
    fn four_odd_vertices_is_not_eulerian() {
        // K4: every vertex has degree 3.
        let mut graph = Graph::new(4, false);
        for u in 1..=4 {
            for v in (u + 1)..=4 {
                graph.add_edge(u, v, 1);
            }
        }
        let properties = eulerian_properties(&graph);
        assert!(!properties.is_eulerian);
        assert_eq!(fleury(&graph, &properties), Vec::new());
    }

    #[test]
    fn disconnected_even_components_are_not_eulerian() {
        // Two disjoint triangles: all degrees even, but the nonzero-degree
        // vertices do not form one component.
        let mut graph = Graph::new(6, false);
        graph.add_edge(1, 2, 1);
        graph.add_edge(2, 3, 1);
        graph.add_edge(3, 1, 1);
        graph.add_edge(4, 5, 1);
        graph.add_edge(5, 6, 1);
        graph.add_edge(6, 4, 1);

        assert!(!eulerian_properties(&graph).is_eulerian);
    }

    #[test]
    fn isolated_vertices_are_tolerated() {
        // A triangle plus an isolated vertex is still Eulerian.
        let mut graph = Graph::new(4, false);
        graph.add_edge(1, 2, 1);
        graph.add_edge(2, 3, 1);
        graph.add_edge(3, 1, 1);

        let properties = eulerian_properties(&graph);
        assert!(properties.is_eulerian);
        assert!(properties.has_closed_trail);

        let trail = fleury(&graph, &properties);
        assert_valid_trail(&graph, &trail, 1, 1);
    }

    #[test]
    fn figure_eight_closed_trail() {
        // Two triangles sharing vertex 3: all degrees even, one component.
        let mut graph = Graph::new(5, false);
        graph.add_edge(1, 2, 1);
        graph.add_edge(2, 3, 1);
        graph.add_edge(3, 1, 1);
        graph.add_edge(3, 4, 1);
        graph.add_edge(4, 5, 1);
        graph.add_edge(5, 3, 1);

        let properties = eulerian_properties(&graph);
        assert!(properties.has_closed_trail);

        let trail = fleury(&graph, &properties);
        assert_valid_trail(&graph, &trail, 1, 1);
    }

    #[test]
    fn bridge_graph_open_trail() {
        // Two triangles joined by a bridge: ends of the bridge are the odd
        // vertices, and Fleury must cross it exactly once, last.
        let mut graph = Graph::new(6, false);
        graph.add_edge(1, 2, 1);
        graph.add_edge(2, 3, 1);
        graph.add_edge(3, 1, 1);
        graph.add_edge(3, 4, 1);
        graph.add_edge(4, 5, 1);
        graph.add_edge(5, 6, 1);
        graph.add_edge(6, 4, 1);

        let properties = eulerian_properties(&graph);
        assert!(properties.has_open_trail);
        assert_eq!(properties.open_trail_start, Some(3));
        assert_eq!(properties.open_trail_end, Some(4));

        let trail = fleury(&graph, &properties);
        assert_valid_trail(&graph, &trail, 3, 4);
    }

    #[test]
    fn classification_record_serializes() {
        let properties = eulerian_properties(&cycle(3));
        let json = serde_json::to_string(&properties).unwrap();
        let back: EulerianTrailProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(back, properties);
    }
}
