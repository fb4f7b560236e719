use crate::adapters::dataset::LoadReport;
use crate::adapters::dataset::cast::load_collaboration_graph;
use crate::adapters::dataset::road::{MapLoadReport, load_weighted_graph};
use crate::app::dto::*;
use crate::domain::bridges::{BridgeFinder, BridgeStrategy};
use crate::domain::collaboration::CollaborationGraph;
use crate::domain::dijkstra::Accumulation;
use crate::domain::ports::DatasetReader;
use crate::domain::query::QueryOutcome;
use crate::domain::road_map::{EdgeId, WeightedGraph};
use anyhow::{Result, anyhow, bail};
use std::path::PathBuf;
use std::sync::Arc;

/// Which datasets to load and how map queries behave
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub actors: Option<PathBuf>,
    pub vertices: Option<PathBuf>,
    pub edges: Option<PathBuf>,
    pub accumulation: Accumulation,
    pub bridge_strategy: BridgeStrategy,
}

/// Query engine over the loaded graphs.
///
/// Graphs are read-only after loading and every query keeps its own
/// scratch state, so clones of the engine can be queried from several
/// threads at once.
#[derive(Debug, Clone)]
pub struct RouteEngine {
    inner: Arc<EngineData>,
}

#[derive(Debug)]
struct EngineData {
    collaboration: Option<(CollaborationGraph, LoadReport)>,
    map: Option<(WeightedGraph, MapLoadReport)>,
    accumulation: Accumulation,
    bridge_strategy: BridgeStrategy,
}

impl RouteEngine {
    /// Construct an engine from already-built graphs.
    pub fn from_prebuilt(
        collaboration: Option<CollaborationGraph>,
        map: Option<WeightedGraph>,
        accumulation: Accumulation,
        bridge_strategy: BridgeStrategy,
    ) -> Self {
        Self {
            inner: Arc::new(EngineData {
                collaboration: collaboration.map(|g| (g, LoadReport::default())),
                map: map.map(|g| (g, MapLoadReport::default())),
                accumulation,
                bridge_strategy,
            }),
        }
    }

    pub fn load(config: &EngineConfig, reader: &dyn DatasetReader) -> Result<Self> {
        let collaboration = match &config.actors {
            Some(path) => Some(load_collaboration_graph(reader, path)?),
            None => None,
        };

        let map = match (&config.vertices, &config.edges) {
            (Some(vertices), Some(edges)) => Some(load_weighted_graph(reader, vertices, edges)?),
            (None, None) => None,
            _ => bail!("A map needs both a vertex file and an edge file"),
        };

        if collaboration.is_none() && map.is_none() {
            bail!("No dataset given: pass an actor file, or vertex and edge files");
        }

        Ok(Self {
            inner: Arc::new(EngineData {
                collaboration,
                map,
                accumulation: config.accumulation,
                bridge_strategy: config.bridge_strategy,
            }),
        })
    }

    fn collaboration(&self) -> Result<&CollaborationGraph> {
        self.inner
            .collaboration
            .as_ref()
            .map(|(graph, _)| graph)
            .ok_or_else(|| anyhow!("No actor dataset loaded"))
    }

    fn map(&self) -> Result<&WeightedGraph> {
        self.inner
            .map
            .as_ref()
            .map(|(graph, _)| graph)
            .ok_or_else(|| anyhow!("No map dataset loaded"))
    }

    pub fn summary(&self) -> SummaryResponse {
        SummaryResponse {
            collaboration: self
                .inner
                .collaboration
                .as_ref()
                .map(|(graph, load)| CollaborationSummary {
                    actor_count: graph.actor_count(),
                    movie_count: graph.movie_count(),
                    appearance_count: graph.appearance_count(),
                    load: *load,
                }),
            map: self.inner.map.as_ref().map(|(graph, load)| MapSummary {
                vertex_count: graph.vertex_count(),
                edge_count: graph.edge_count(),
                component_count: graph.component_count(),
                load: *load,
            }),
        }
    }

    pub fn actor_path(&self, from: &str, to: &str) -> Result<ActorPathResponse> {
        let graph = self.collaboration()?;
        let outcome = graph.find_path(from, to);

        let mut response = ActorPathResponse {
            from: from.to_string(),
            to: to.to_string(),
            status: status_of(&outcome),
            reason: reason_of(&outcome),
            rendered: None,
            actors: Vec::new(),
            movies: Vec::new(),
        };
        if let QueryOutcome::Found(path) = outcome {
            response.rendered = Some(path.to_string());
            response.actors = path.actors().map(String::from).collect();
            response.movies = path.hops.into_iter().map(|hop| hop.movie).collect();
        }
        Ok(response)
    }

    pub fn shortest_path(&self, from: &str, to: &str) -> Result<ShortestPathResponse> {
        let graph = self.map()?;
        let accumulation = self.inner.accumulation;
        let outcome = graph.shortest_path_with(from, to, accumulation);

        let mut response = ShortestPathResponse {
            from: from.to_string(),
            to: to.to_string(),
            status: status_of(&outcome),
            reason: reason_of(&outcome),
            accumulation,
            stops: Vec::new(),
            total_distance: None,
        };
        if let QueryOutcome::Found(path) = outcome {
            response.total_distance = Some(path.total_distance());
            response.stops = path
                .vertices
                .iter()
                .zip(&path.distances)
                .map(|(&v, &distance)| {
                    let vertex = graph.vertex(v);
                    StopDto {
                        name: vertex.name.clone(),
                        x: vertex.x,
                        y: vertex.y,
                        distance,
                    }
                })
                .collect();
        }
        Ok(response)
    }

    pub fn spanning_tree(&self) -> Result<SpanningTreeResponse> {
        let graph = self.map()?;
        let forest = graph.minimum_spanning_tree();
        Ok(SpanningTreeResponse {
            edges: edge_dtos(graph, &forest.edges),
            total_weight: forest.total_weight,
            component_count: graph.component_count(),
        })
    }

    pub fn critical_roads(&self) -> Result<CriticalRoadsResponse> {
        let graph = self.map()?;
        let strategy = self.inner.bridge_strategy;
        let edges = BridgeFinder::new(graph).with_strategy(strategy).find();
        Ok(CriticalRoadsResponse {
            strategy,
            edges: edge_dtos(graph, &edges),
        })
    }
}

fn status_of<T>(outcome: &QueryOutcome<T>) -> QueryStatus {
    match outcome {
        QueryOutcome::Found(_) => QueryStatus::Found,
        QueryOutcome::NoPath => QueryStatus::NoPath,
        QueryOutcome::Invalid(_) => QueryStatus::InvalidQuery,
    }
}

fn reason_of<T>(outcome: &QueryOutcome<T>) -> Option<String> {
    match outcome {
        QueryOutcome::Invalid(reason) => Some(reason.to_string()),
        _ => None,
    }
}

fn edge_dtos(graph: &WeightedGraph, edges: &[EdgeId]) -> Vec<EdgeDto> {
    edges
        .iter()
        .map(|&id| {
            let record = graph.edge(id);
            EdgeDto {
                source: graph.name(record.source).to_string(),
                target: graph.name(record.target).to_string(),
                weight: record.weight,
            }
        })
        .collect()
}
