//! Dijkstra search over a [`DirectedWeightedGraph`].

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::{DirectedWeightedGraph, EdgeId, VertexId};

/// Result of a successful search
#[derive(Clone, Debug, PartialEq)]
pub struct RouteInfo {
    pub weight: f64,

    /// Edges from source to target, in travel order
    pub edges: Vec<EdgeId>,
}

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    vertex: VertexId,
}

impl Eq for State {}

// Flip the ordering on costs so `BinaryHeap` pops the cheapest state first.
// Ties fall back to the vertex id to keep `Ord` consistent with `PartialEq`.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Cheapest path from `from` to `to`.
///
/// Returns `None` when `to` is unreachable or either vertex is out of range.
/// A search from a vertex to itself yields an empty edge list with weight 0.
/// Among equally cheap paths the first one found wins; a cheaper path only
/// replaces a known one when strictly better.
pub fn build_route(graph: &DirectedWeightedGraph, from: VertexId, to: VertexId) -> Option<RouteInfo> {
    let vertex_count = graph.vertex_count();
    if from >= vertex_count || to >= vertex_count {
        return None;
    }

    let mut dist = vec![f64::INFINITY; vertex_count];
    let mut prev_edge: Vec<Option<EdgeId>> = vec![None; vertex_count];
    let mut heap = BinaryHeap::new();

    dist[from] = 0.0;
    heap.push(State { cost: 0.0, vertex: from });

    while let Some(State { cost, vertex }) = heap.pop() {
        if vertex == to {
            break;
        }

        // Stale entry, a cheaper one was already settled
        if cost > dist[vertex] {
            continue;
        }

        for &edge_id in graph.incident_edges(vertex) {
            let Some(edge) = graph.edge(edge_id) else {
                continue;
            };
            let next = cost + edge.weight;
            if next < dist[edge.to] {
                dist[edge.to] = next;
                prev_edge[edge.to] = Some(edge_id);
                heap.push(State { cost: next, vertex: edge.to });
            }
        }
    }

    if !dist[to].is_finite() {
        return None;
    }

    let mut edges = Vec::new();
    let mut vertex = to;
    while vertex != from {
        let edge_id = prev_edge[vertex]?;
        edges.push(edge_id);
        vertex = graph.edge(edge_id)?.from;
    }
    edges.reverse();

    Some(RouteInfo {
        weight: dist[to],
        edges,
    })
}
