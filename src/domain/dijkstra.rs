//! Weighted shortest path over a [`WeightedGraph`].
//!
//! Frontier entries are snapshots ordered by (distance, vertex name), so
//! equal distances are settled in ascending name order. Distances,
//! predecessors and the settled set live in per-call vectors; the graph is
//! never written to.

use crate::domain::query::{QueryOutcome, resolve_endpoints};
use crate::domain::road_map::{VertexId, WeightedGraph};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::debug;

/// How edge weights are added to a running distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accumulation {
    /// The running distance is an integer: the weight is rounded to `f32`,
    /// added in single precision and truncated toward zero. Reproduces the
    /// reference outputs, including lengths that round up to a whole number.
    #[default]
    Truncated,
    /// Full floating point sums.
    Precise,
}

impl Accumulation {
    pub fn add(self, distance: f64, weight: f64) -> f64 {
        match self {
            Accumulation::Truncated => ((distance as f32) + (weight as f32)).trunc() as f64,
            Accumulation::Precise => distance + weight,
        }
    }
}

/// Vertices from source to destination with the distance recorded at each stop
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    pub vertices: Vec<VertexId>,
    /// Cumulative distance at each vertex; starts at 0
    pub distances: Vec<f64>,
}

impl ShortestPath {
    pub fn total_distance(&self) -> f64 {
        self.distances.last().copied().unwrap_or(0.0)
    }

    pub fn names<'g>(&self, graph: &'g WeightedGraph) -> Vec<&'g str> {
        self.vertices.iter().map(|&v| graph.name(v)).collect()
    }
}

#[derive(Debug)]
struct FrontierEntry<'g> {
    distance: f64,
    name: &'g str,
    vertex: VertexId,
}

impl PartialEq for FrontierEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry<'_> {}

impl PartialOrd for FrontierEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry<'_> {
    // BinaryHeap is a max-heap: the smallest distance, then the smallest name, ranks highest.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.name.cmp(self.name))
    }
}

impl WeightedGraph {
    /// Shortest path with truncated distance accumulation.
    pub fn shortest_path(&self, from: &str, to: &str) -> QueryOutcome<ShortestPath> {
        self.shortest_path_with(from, to, Accumulation::Truncated)
    }

    pub fn shortest_path_with(
        &self,
        from: &str,
        to: &str,
        accumulation: Accumulation,
    ) -> QueryOutcome<ShortestPath> {
        let (source, goal) = match resolve_endpoints(from, to, |name| self.get_vertex_by_name(name))
        {
            Ok(endpoints) => endpoints,
            Err(reason) => {
                debug!(from, to, %reason, "shortest path query skipped");
                return QueryOutcome::Invalid(reason);
            }
        };

        let n = self.vertex_count();
        // None is the "unreached" sentinel
        let mut distance: Vec<Option<f64>> = vec![None; n];
        let mut previous: Vec<Option<VertexId>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut frontier = BinaryHeap::new();

        distance[source.index()] = Some(0.0);
        frontier.push(FrontierEntry {
            distance: 0.0,
            name: self.name(source),
            vertex: source,
        });

        while let Some(FrontierEntry {
            distance: current_distance,
            vertex: current,
            ..
        }) = frontier.pop()
        {
            if current == goal {
                return QueryOutcome::Found(reconstruct(goal, &distance, &previous));
            }
            if settled[current.index()] {
                continue;
            }
            settled[current.index()] = true;

            for (neighbor, _, weight) in self.neighbors(current) {
                let candidate = accumulation.add(current_distance, weight);
                let improves = match distance[neighbor.index()] {
                    None => true,
                    Some(known) => candidate < known,
                };
                if improves {
                    distance[neighbor.index()] = Some(candidate);
                    previous[neighbor.index()] = Some(current);
                    frontier.push(FrontierEntry {
                        distance: candidate,
                        name: self.name(neighbor),
                        vertex: neighbor,
                    });
                }
            }
        }

        debug!(from, to, "no path on map");
        QueryOutcome::NoPath
    }
}

fn reconstruct(
    goal: VertexId,
    distance: &[Option<f64>],
    previous: &[Option<VertexId>],
) -> ShortestPath {
    let mut vertices = Vec::new();
    let mut distances = Vec::new();
    let mut current = Some(goal);
    while let Some(v) = current {
        vertices.push(v);
        distances.push(distance[v.index()].unwrap_or(0.0));
        current = previous[v.index()];
    }
    vertices.reverse();
    distances.reverse();
    ShortestPath {
        vertices,
        distances,
    }
}
