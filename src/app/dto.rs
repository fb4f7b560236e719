use crate::adapters::dataset::LoadReport;
use crate::adapters::dataset::road::MapLoadReport;
use crate::domain::bridges::BridgeStrategy;
use crate::domain::dijkstra::Accumulation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryStatus {
    Found,
    NoPath,
    InvalidQuery,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub collaboration: Option<CollaborationSummary>,
    pub map: Option<MapSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollaborationSummary {
    pub actor_count: usize,
    pub movie_count: usize,
    pub appearance_count: usize,
    pub load: LoadReport,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapSummary {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub component_count: usize,
    pub load: MapLoadReport,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorPathResponse {
    pub from: String,
    pub to: String,
    pub status: QueryStatus,
    /// Why the query was not attempted, for `InvalidQuery`.
    pub reason: Option<String>,
    /// `(A)--[Title#@Year]-->(B)`; absent unless found.
    pub rendered: Option<String>,
    pub actors: Vec<String>,
    pub movies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopDto {
    pub name: String,
    pub x: f64,
    pub y: f64,
    /// Distance from the start, accumulated per the response's policy.
    pub distance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortestPathResponse {
    pub from: String,
    pub to: String,
    pub status: QueryStatus,
    pub reason: Option<String>,
    pub accumulation: Accumulation,
    pub stops: Vec<StopDto>,
    pub total_distance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDto {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpanningTreeResponse {
    /// Accepted edges, in acceptance order.
    pub edges: Vec<EdgeDto>,
    pub total_weight: f64,
    pub component_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriticalRoadsResponse {
    pub strategy: BridgeStrategy,
    /// Critical edges, in edge file order.
    pub edges: Vec<EdgeDto>,
}
