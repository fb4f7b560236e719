//! Critical roads: edges whose removal disconnects their two endpoints.

use crate::domain::road_map::{EdgeId, EdgeRecord, VertexId, WeightedGraph};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How bridges are detected. Both strategies return the same edges in the
/// same (canonical) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgeStrategy {
    /// One depth-first reachability search per edge, with that edge removed.
    /// O(E * (V + E)).
    #[default]
    Reachability,
    /// Single depth-first pass comparing discovery times with low links.
    LowLink,
}

const UNDISCOVERED: usize = usize::MAX;

/// Bridge Finder - detects edges that are the only connection between their endpoints
pub struct BridgeFinder<'g> {
    graph: &'g WeightedGraph,
    strategy: BridgeStrategy,
}

impl<'g> BridgeFinder<'g> {
    pub fn new(graph: &'g WeightedGraph) -> Self {
        Self {
            graph,
            strategy: BridgeStrategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: BridgeStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Critical edges, in canonical edge order.
    pub fn find(&self) -> Vec<EdgeId> {
        let critical: Vec<EdgeId> = match self.strategy {
            BridgeStrategy::Reachability => self
                .graph
                .edges()
                .filter(|record| !self.reachable_without(record))
                .map(|record| record.id)
                .collect(),
            BridgeStrategy::LowLink => {
                let marked = self.low_link_bridges();
                self.graph
                    .edges()
                    .filter(|record| marked[record.id.index()])
                    .map(|record| record.id)
                    .collect()
            }
        };
        debug!(
            strategy = ?self.strategy,
            critical = critical.len(),
            "critical roads found"
        );
        critical
    }

    /// Depth-first search from the edge's source for its target, skipping
    /// only this edge. A parallel edge between the same endpoints still counts.
    fn reachable_without(&self, removed: &EdgeRecord) -> bool {
        let mut visited = vec![false; self.graph.vertex_count()];
        let mut stack = vec![removed.source];

        while let Some(current) = stack.pop() {
            if current == removed.target {
                return true;
            }
            if visited[current.index()] {
                continue;
            }
            visited[current.index()] = true;

            for (neighbor, edge, _) in self.graph.neighbors(current) {
                if edge == removed.id || visited[neighbor.index()] {
                    continue;
                }
                stack.push(neighbor);
            }
        }
        false
    }

    /// Iterative Tarjan bridge search. The tree edge a vertex was entered by
    /// is skipped by identity, so parallel edges act as back edges.
    fn low_link_bridges(&self) -> Vec<bool> {
        struct Frame {
            vertex: VertexId,
            via: Option<EdgeId>,
            adjacency: Vec<(VertexId, EdgeId)>,
            next: usize,
        }

        let adjacency_of = |v: VertexId| -> Vec<(VertexId, EdgeId)> {
            self.graph.neighbors(v).map(|(w, e, _)| (w, e)).collect()
        };

        let n = self.graph.vertex_count();
        let mut discovered = vec![UNDISCOVERED; n];
        let mut low = vec![UNDISCOVERED; n];
        let mut timer = 0;
        let mut bridges = vec![false; self.graph.edge_count()];

        for root in self.graph.graph.node_indices() {
            if discovered[root.index()] != UNDISCOVERED {
                continue;
            }
            discovered[root.index()] = timer;
            low[root.index()] = timer;
            timer += 1;
            let mut stack = vec![Frame {
                vertex: root,
                via: None,
                adjacency: adjacency_of(root),
                next: 0,
            }];

            while let Some(frame) = stack.last_mut() {
                if frame.next < frame.adjacency.len() {
                    let (neighbor, edge) = frame.adjacency[frame.next];
                    frame.next += 1;
                    let vertex = frame.vertex;
                    if frame.via == Some(edge) {
                        continue;
                    }

                    if discovered[neighbor.index()] == UNDISCOVERED {
                        discovered[neighbor.index()] = timer;
                        low[neighbor.index()] = timer;
                        timer += 1;
                        stack.push(Frame {
                            vertex: neighbor,
                            via: Some(edge),
                            adjacency: adjacency_of(neighbor),
                            next: 0,
                        });
                    } else {
                        low[vertex.index()] = low[vertex.index()].min(discovered[neighbor.index()]);
                    }
                    continue;
                }

                let finished = stack.pop();
                if let (Some(child), Some(parent)) = (finished, stack.last()) {
                    let (c, p) = (child.vertex.index(), parent.vertex.index());
                    low[p] = low[p].min(low[c]);
                    if let Some(edge) = child.via
                        && low[c] > discovered[p]
                    {
                        bridges[edge.index()] = true;
                    }
                }
            }
        }
        bridges
    }
}

impl WeightedGraph {
    pub fn critical_edges(&self) -> Vec<EdgeId> {
        BridgeFinder::new(self).find()
    }
}
