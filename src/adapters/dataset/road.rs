//! Map datasets: `Name X Y` vertex lines and `Name1 Name2` edge lines,
//! single-space delimited, no header.

use super::{LoadReport, split_fields};
use crate::domain::ports::DatasetReader;
use crate::domain::road_map::WeightedGraph;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Line accounting for the vertex and edge files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapLoadReport {
    pub vertices: LoadReport,
    pub edges: LoadReport,
}

/// Coordinates are integers, optionally signed; a `.digits` fractional part
/// is dropped. Exponents and other float spellings are rejected.
fn parse_coordinate(field: &str) -> Option<f64> {
    let (whole, fraction) = field.split_once('.').unwrap_or((field, ""));
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits = whole.strip_prefix(['+', '-']).unwrap_or(whole);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    whole.parse::<i64>().ok().map(|value| value as f64)
}

pub fn parse_vertex(line: &str) -> Option<(&str, f64, f64)> {
    let fields = split_fields(line, ' ');
    let &[name, x, y] = fields.as_slice() else {
        return None;
    };
    Some((name, parse_coordinate(x)?, parse_coordinate(y)?))
}

pub fn parse_edge(line: &str) -> Option<(&str, &str)> {
    let fields = split_fields(line, ' ');
    let &[source, target] = fields.as_slice() else {
        return None;
    };
    Some((source, target))
}

/// Build the map from vertex text, then edge text.
pub fn build_weighted_graph(vertex_text: &str, edge_text: &str) -> (WeightedGraph, MapLoadReport) {
    let mut graph = WeightedGraph::new();
    let mut report = MapLoadReport::default();

    for (line_no, line) in vertex_text.lines().enumerate() {
        report.vertices.lines += 1;
        let Some((name, x, y)) = parse_vertex(line) else {
            debug!(line = line_no + 1, "skipping malformed vertex line");
            report.vertices.skipped += 1;
            continue;
        };
        if graph.add_vertex(name, x, y).is_some() {
            report.vertices.accepted += 1;
        } else {
            report.vertices.rejected += 1;
        }
    }

    for (line_no, line) in edge_text.lines().enumerate() {
        report.edges.lines += 1;
        let Some((source, target)) = parse_edge(line) else {
            debug!(line = line_no + 1, "skipping malformed edge line");
            report.edges.skipped += 1;
            continue;
        };
        if graph.add_edge(source, target).is_some() {
            report.edges.accepted += 1;
        } else {
            report.edges.rejected += 1;
        }
    }

    (graph, report)
}

/// Read both map files and build the weighted graph.
pub fn load_weighted_graph(
    reader: &dyn DatasetReader,
    vertex_path: &Path,
    edge_path: &Path,
) -> Result<(WeightedGraph, MapLoadReport)> {
    let vertex_text = reader.read(vertex_path)?;
    let edge_text = reader.read(edge_path)?;
    let (graph, report) = build_weighted_graph(&vertex_text, &edge_text);
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        rejected_vertices = report.vertices.rejected,
        rejected_edges = report.edges.rejected,
        "map loaded"
    );
    Ok((graph, report))
}
