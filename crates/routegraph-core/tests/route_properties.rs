//! Property tests: shortest-route optimality against exhaustive search, and
//! structural invariants of returned routes.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use routegraph_core::{Edge, Graph, Node};

const IDS: [&str; 5] = ["a", "b", "c", "d", "e"];

fn build_graph(edges: &[(usize, usize, u8)]) -> Graph {
    let mut graph = Graph::new();
    for id in IDS {
        graph.add_node(Node::new(id)).unwrap();
    }
    for &(from, to, weight) in edges {
        graph
            .add_edge(
                Edge::weighted(f64::from(weight)),
                Node::new(IDS[from]),
                Node::new(IDS[to]),
            )
            .unwrap();
    }
    graph
}

/// Last write wins per ordered pair, mirroring the store's overwrite rule.
fn effective_edges(edges: &[(usize, usize, u8)]) -> HashMap<(usize, usize), f64> {
    let mut map = HashMap::new();
    for &(from, to, weight) in edges {
        map.insert((from, to), f64::from(weight));
    }
    map
}

fn search(
    edges: &HashMap<(usize, usize), f64>,
    current: usize,
    to: usize,
    visited: &mut [bool; 5],
    cost: f64,
    best: &mut Option<f64>,
) {
    if current == to {
        if best.map_or(true, |b| cost < b) {
            *best = Some(cost);
        }
        return;
    }
    for next in 0..IDS.len() {
        if visited[next] {
            continue;
        }
        if let Some(&weight) = edges.get(&(current, next)) {
            visited[next] = true;
            search(edges, next, to, visited, cost + weight, best);
            visited[next] = false;
        }
    }
}

/// Minimum cost over all simple paths, by exhaustive enumeration. Sound for
/// non-negative weights, where some cheapest walk is always a simple path.
fn exhaustive_min(edges: &HashMap<(usize, usize), f64>, from: usize, to: usize) -> Option<f64> {
    let mut best = None;
    let mut visited = [false; 5];
    visited[from] = true;
    search(edges, from, to, &mut visited, 0.0, &mut best);
    best
}

fn arb_edges() -> impl Strategy<Value = Vec<(usize, usize, u8)>> {
    proptest::collection::vec((0..IDS.len(), 0..IDS.len(), 0u8..10), 0..20)
}

proptest! {
    #[test]
    fn shortest_route_matches_exhaustive_minimum(
        edges in arb_edges(),
        from in 0..IDS.len(),
        to in 0..IDS.len(),
    ) {
        let graph = build_graph(&edges);
        let expected = exhaustive_min(&effective_edges(&edges), from, to);
        let found = graph.shortest_route(IDS[from], IDS[to]);

        match (expected, found) {
            (Some(cost), Some(route)) => {
                prop_assert!((route.total_weight() - cost).abs() < 1e-9);
                prop_assert_eq!(route.starting_node().unwrap().identifier(), IDS[from]);
                prop_assert_eq!(route.ending_node().unwrap().identifier(), IDS[to]);
            }
            (None, None) => {}
            (expected, found) => {
                prop_assert!(
                    false,
                    "expected {:?}, found {:?}",
                    expected,
                    found.map(|route| route.total_weight())
                );
            }
        }
    }

    #[test]
    fn routes_are_well_formed(
        edges in arb_edges(),
        from in 0..IDS.len(),
        to in 0..IDS.len(),
    ) {
        let graph = build_graph(&edges);
        let Some(route) = graph.shortest_route(IDS[from], IDS[to]) else {
            return Ok(());
        };

        let steps = route.steps();
        prop_assert!(!steps.is_empty());
        prop_assert!(steps[0].is_first());
        prop_assert!(steps.last().unwrap().is_last());

        // Interior edges must match the stored adjacency and sum to the total.
        let mut sum = 0.0;
        for pair in steps.windows(2) {
            let from_id = pair[0].node().identifier();
            let to_id = pair[1].node().identifier();
            let stored = graph.weight_between(from_id, to_id);
            prop_assert!(stored.is_some());
            prop_assert_eq!(pair[0].edge().map(Edge::weight), stored);
            sum += stored.unwrap_or_default();
        }
        prop_assert!((route.total_weight() - sum).abs() < 1e-9);

        // A cheapest route under non-negative weights never revisits a node.
        let distinct: HashSet<&str> = steps.iter().map(|step| step.node().identifier()).collect();
        prop_assert_eq!(distinct.len(), steps.len());
    }

    #[test]
    fn remove_edge_reports_and_applies(
        edges in arb_edges(),
        from in 0..IDS.len(),
        to in 0..IDS.len(),
    ) {
        let mut graph = build_graph(&edges);
        let existed = graph.edge_between(IDS[from], IDS[to]).is_some();
        prop_assert_eq!(graph.remove_edge(IDS[from], IDS[to]), existed);
        prop_assert!(graph.edge_between(IDS[from], IDS[to]).is_none());
        // A second removal always finds nothing.
        prop_assert!(!graph.remove_edge(IDS[from], IDS[to]));
    }
}
