//! Actor/movie dataset: a header line, then `Actor<TAB>Title<TAB>Year` per line.

use super::{LoadReport, split_fields};
use crate::domain::collaboration::CollaborationGraph;
use crate::domain::ports::DatasetReader;
use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};

/// One parsed dataset line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance<'a> {
    pub actor: &'a str,
    pub title: &'a str,
    pub year: i32,
}

/// Parse one data line. `None` for lines that do not have exactly three
/// fields or whose year is not an integer.
pub fn parse_appearance(line: &str) -> Option<Appearance<'_>> {
    let fields = split_fields(line, '\t');
    let &[actor, title, year] = fields.as_slice() else {
        return None;
    };
    let year = year.trim().parse::<i32>().ok()?;
    Some(Appearance {
        actor,
        title,
        year,
    })
}

/// Build a collaboration graph from dataset text. The first line is a header.
pub fn build_collaboration_graph(text: &str) -> (CollaborationGraph, LoadReport) {
    let mut graph = CollaborationGraph::new();
    let mut report = LoadReport::default();

    for (line_no, line) in text.lines().enumerate() {
        report.lines += 1;
        if line_no == 0 {
            continue;
        }
        match parse_appearance(line) {
            Some(appearance) => {
                if graph.add_appearance(appearance.actor, appearance.title, appearance.year) {
                    report.accepted += 1;
                } else {
                    report.rejected += 1;
                }
            }
            None => {
                debug!(line = line_no + 1, "skipping malformed actor line");
                report.skipped += 1;
            }
        }
    }

    (graph, report)
}

/// Read and build the collaboration graph from a dataset file.
pub fn load_collaboration_graph(
    reader: &dyn DatasetReader,
    path: &Path,
) -> Result<(CollaborationGraph, LoadReport)> {
    let text = reader.read(path)?;
    let (graph, report) = build_collaboration_graph(&text);
    info!(
        path = %path.display(),
        actors = graph.actor_count(),
        movies = graph.movie_count(),
        skipped = report.skipped,
        "collaboration graph loaded"
    );
    Ok((graph, report))
}
