//! Weighted directed graph and shortest-path search.
//!
//! The graph knows nothing about stops or buses: vertices and edges are
//! plain indices, and callers keep their own per-edge metadata in a table
//! indexed by [`EdgeId`].

pub mod dijkstra;

pub use dijkstra::RouteInfo;

pub type VertexId = usize;
pub type EdgeId = usize;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

/// Directed graph with a fixed vertex count and non-negative edge weights
#[derive(Clone, Debug, Default)]
pub struct DirectedWeightedGraph {
    edges: Vec<Edge>,
    incidence: Vec<Vec<EdgeId>>,
}

impl DirectedWeightedGraph {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Add an edge and return its id. Ids are assigned sequentially from 0.
    ///
    /// # Panics
    ///
    /// Panics if `edge.from` is not a vertex of this graph.
    pub fn add_edge(&mut self, edge: Edge) -> EdgeId {
        debug_assert!(edge.weight >= 0.0, "negative edge weight {}", edge.weight);
        debug_assert!(edge.to < self.incidence.len(), "edge target {} out of range", edge.to);

        let id = self.edges.len();
        self.incidence[edge.from].push(id);
        self.edges.push(edge);
        id
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Edges leaving `vertex`, in insertion order
    pub fn incident_edges(&self, vertex: VertexId) -> &[EdgeId] {
        self.incidence.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Cheapest path from `from` to `to`, see [`dijkstra::build_route`].
    pub fn build_route(&self, from: VertexId, to: VertexId) -> Option<RouteInfo> {
        dijkstra::build_route(self, from, to)
    }
}
