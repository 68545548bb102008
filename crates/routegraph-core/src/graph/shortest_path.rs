//! Single-pair shortest-route search.
//!
//! Dijkstra relaxation over the graph arena: tentative distances start at
//! infinity, the unvisited node with the smallest finite distance is picked
//! by a linear scan, and its outgoing edges are relaxed until the
//! destination is visited or the reachable frontier is exhausted. The scan
//! is quadratic in node count, which holds up well on the small-to-medium
//! graphs this store targets.

use super::route::Route;
use super::store::Graph;
use super::types::Edge;

/// Computes the cheapest route between two registered nodes.
///
/// Returns `None` when either identifier is unknown or the destination is
/// unreachable. Requires non-negative weights, which the store enforces at
/// insertion: once a node is visited its distance is final.
pub(crate) fn shortest_route<'g>(graph: &'g Graph, start: &str, end: &str) -> Option<Route<'g>> {
    let start = graph.slot_of(start)?;
    let end = graph.slot_of(end)?;

    let len = graph.arena_len();
    let mut distance = vec![f64::INFINITY; len];
    let mut predecessor: Vec<Option<(usize, &'g Edge)>> = vec![None; len];
    let mut visited = vec![false; len];
    distance[start] = 0.0;

    while let Some(current) = nearest_unvisited(&distance, &visited) {
        visited[current] = true;
        if current == end {
            break;
        }
        for (&neighbor, edge) in graph.outgoing_at(current) {
            if visited[neighbor] {
                continue;
            }
            let candidate = distance[current] + edge.weight();
            if candidate < distance[neighbor] {
                tracing::trace!(
                    node = %graph.node_at(neighbor).identifier(),
                    distance = candidate,
                    "relaxed"
                );
                distance[neighbor] = candidate;
                predecessor[neighbor] = Some((current, edge));
            }
        }
    }

    if distance[end].is_infinite() {
        tracing::debug!(
            start = %graph.node_at(start).identifier(),
            end = %graph.node_at(end).identifier(),
            "no route"
        );
        return None;
    }

    // Walk the back-pointers from the destination, then emit the steps in
    // travel order. A finite distance guarantees the chain reaches `start`.
    let mut hops = Vec::new();
    let mut cursor = end;
    while cursor != start {
        let (prev, edge) = predecessor[cursor]?;
        hops.push((prev, edge));
        cursor = prev;
    }
    hops.reverse();

    let mut route = Route::new();
    for (slot, edge) in hops {
        route.add_step(graph.node_at(slot), Some(edge));
    }
    route.add_step(graph.node_at(end), None);

    tracing::debug!(
        start = %graph.node_at(start).identifier(),
        end = %graph.node_at(end).identifier(),
        cost = distance[end],
        steps = route.count(),
        "route resolved"
    );
    Some(route)
}

/// Returns the unvisited slot with the smallest finite distance.
///
/// Ties keep the first slot found, i.e. the earliest-registered node.
fn nearest_unvisited(distance: &[f64], visited: &[bool]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (slot, &dist) in distance.iter().enumerate() {
        if visited[slot] || dist.is_infinite() {
            continue;
        }
        if best.is_none_or(|b| dist < distance[b]) {
            best = Some(slot);
        }
    }
    best
}
