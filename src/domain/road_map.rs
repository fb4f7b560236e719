//! Weighted undirected map graph.
//!
//! Vertices and edges are stored in a `petgraph` undirected graph whose
//! node and edge indices double as stable arena ids. Edge indices follow
//! insertion order, which makes the edge list canonical: one record per
//! undirected connection, traversable from either endpoint.

use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;
use tracing::warn;

/// Vertex identifier (arena index)
pub type VertexId = NodeIndex;

/// Undirected edge identifier (canonical edge list index)
pub type EdgeId = EdgeIndex;

/// A named point on the map
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub fn distance_to(&self, other: &Vertex) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Endpoints and weight of a canonical edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRecord {
    pub id: EdgeId,
    pub source: VertexId,
    pub target: VertexId,
    pub weight: f64,
}

/// Weighted Graph - vertices joined by roads weighted with Euclidean length
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    /// Undirected graph; edge weight is the road length
    pub graph: UnGraph<Vertex, f64>,

    name_to_vertex: HashMap<String, VertexId>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex. Returns `None` when the name is already taken; the
    /// existing vertex keeps its coordinates.
    pub fn add_vertex(&mut self, name: &str, x: f64, y: f64) -> Option<VertexId> {
        if self.name_to_vertex.contains_key(name) {
            warn!(name, "duplicate vertex ignored");
            return None;
        }
        let idx = self.graph.add_node(Vertex {
            name: name.to_string(),
            x,
            y,
        });
        self.name_to_vertex.insert(name.to_string(), idx);
        Some(idx)
    }

    /// Add an undirected edge between two named vertices.
    ///
    /// Returns `None` when either name is unknown.
    pub fn add_edge(&mut self, source: &str, target: &str) -> Option<EdgeId> {
        let (Some(a), Some(b)) = (
            self.get_vertex_by_name(source),
            self.get_vertex_by_name(target),
        ) else {
            warn!(source, target, "edge references unknown vertex");
            return None;
        };
        Some(self.connect(a, b))
    }

    /// Add an undirected edge between two existing vertices. The weight is
    /// computed once here and never changes.
    pub fn connect(&mut self, source: VertexId, target: VertexId) -> EdgeId {
        let weight = self.graph[source].distance_to(&self.graph[target]);
        self.graph.add_edge(source, target, weight)
    }

    pub fn get_vertex_by_name(&self, name: &str) -> Option<VertexId> {
        self.name_to_vertex.get(name).copied()
    }

    pub fn vertex(&self, idx: VertexId) -> &Vertex {
        &self.graph[idx]
    }

    pub fn name(&self, idx: VertexId) -> &str {
        &self.graph[idx].name
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn edge(&self, id: EdgeId) -> EdgeRecord {
        let (source, target) = self.graph.edge_endpoints(id).unwrap_or_default();
        EdgeRecord {
            id,
            source,
            target,
            weight: self.graph[id],
        }
    }

    /// Canonical undirected edge list, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRecord> + '_ {
        self.graph.edge_indices().map(move |id| self.edge(id))
    }

    /// Directed view of a vertex's adjacency: `(neighbor, edge, weight)`.
    ///
    /// Every edge shows up from both endpoints; a self loop shows up with
    /// the vertex as its own neighbor.
    pub fn neighbors(&self, idx: VertexId) -> impl Iterator<Item = (VertexId, EdgeId, f64)> + '_ {
        self.graph.edges(idx).map(move |e| {
            let other = if e.source() == idx { e.target() } else { e.source() };
            (other, e.id(), *e.weight())
        })
    }

    /// Number of connected components, counting isolated vertices.
    pub fn component_count(&self) -> usize {
        petgraph::algo::connected_components(&self.graph)
    }

    /// Sum of the weights of the given edges.
    pub fn total_weight(&self, edges: &[EdgeId]) -> f64 {
        edges.iter().map(|&e| self.graph[e]).sum()
    }
}
