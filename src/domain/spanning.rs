//! Minimum spanning tree (Kruskal) over the canonical edge list of a
//! [`WeightedGraph`].

use crate::domain::disjoint_set::DisjointSet;
use crate::domain::road_map::{EdgeId, WeightedGraph};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::debug;

/// Accepted edges of a minimum spanning forest, in acceptance order
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningForest {
    pub edges: Vec<EdgeId>,
    pub total_weight: f64,
}

#[derive(Debug)]
struct Candidate<'g> {
    /// Ordering key: road lengths are compared at single precision, so
    /// lengths equal as `f32` fall through to the target name.
    weight: f32,
    target_name: &'g str,
    edge: EdgeId,
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate<'_> {}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate<'_> {
    // Max-heap: lightest edge first, then smallest target name, then earliest edge.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.target_name.cmp(self.target_name))
            .then_with(|| other.edge.cmp(&self.edge))
    }
}

/// Spanning Tree Builder - Kruskal over a disjoint-set forest
pub struct SpanningTreeBuilder<'g> {
    graph: &'g WeightedGraph,
}

impl<'g> SpanningTreeBuilder<'g> {
    pub fn new(graph: &'g WeightedGraph) -> Self {
        Self { graph }
    }

    /// Build a minimum spanning forest. A disconnected map yields one tree
    /// per component; isolated vertices contribute no edges.
    pub fn build(&self) -> SpanningForest {
        let mut frontier: BinaryHeap<Candidate<'g>> = self
            .graph
            .edges()
            .map(|record| Candidate {
                weight: record.weight as f32,
                target_name: self.graph.name(record.target),
                edge: record.id,
            })
            .collect();

        let mut sets = DisjointSet::new(self.graph.vertex_count());
        let mut accepted = Vec::new();
        let mut total_weight = 0.0;

        while let Some(candidate) = frontier.pop() {
            let record = self.graph.edge(candidate.edge);
            if sets.union(record.source.index(), record.target.index()) {
                accepted.push(record.id);
                total_weight += record.weight;
            }
        }

        debug!(
            edges = accepted.len(),
            total_weight, "minimum spanning forest built"
        );
        SpanningForest {
            edges: accepted,
            total_weight,
        }
    }
}

impl WeightedGraph {
    pub fn minimum_spanning_tree(&self) -> SpanningForest {
        SpanningTreeBuilder::new(self).build()
    }
}
