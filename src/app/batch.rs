//! Batch queries read from a pairs file, one answer line per pair.

use crate::adapters::dataset::pairs::parse_pairs;
use crate::app::engine::RouteEngine;
use anyhow::Result;
use std::fmt::Write as _;
use tracing::info;

/// First line of an actor batch output file.
pub const ACTOR_BATCH_HEADER: &str = "(actor)--[movie#@year]-->(actor)--...";

/// Answer every actor pair. Pairs without a connection get an empty line.
pub fn actor_batch(engine: &RouteEngine, pairs_text: &str) -> Result<String> {
    let pairs = parse_pairs(pairs_text);
    let mut out = String::new();
    writeln!(out, "{}", ACTOR_BATCH_HEADER)?;

    let mut found = 0;
    for (from, to) in &pairs {
        let response = engine.actor_path(from, to)?;
        if response.rendered.is_some() {
            found += 1;
        }
        writeln!(out, "{}", response.rendered.unwrap_or_default())?;
    }

    info!(pairs = pairs.len(), found, "actor batch finished");
    Ok(out)
}

/// Answer every map pair as `(A)-->(B)-->(C)`. Pairs without a route get
/// an empty line.
pub fn map_batch(engine: &RouteEngine, pairs_text: &str) -> Result<String> {
    let pairs = parse_pairs(pairs_text);
    let mut out = String::new();

    let mut found = 0;
    for (from, to) in &pairs {
        let response = engine.shortest_path(from, to)?;
        if !response.stops.is_empty() {
            found += 1;
        }
        let line = response
            .stops
            .iter()
            .map(|stop| format!("({})", stop.name))
            .collect::<Vec<_>>()
            .join("-->");
        writeln!(out, "{}", line)?;
    }

    info!(pairs = pairs.len(), found, "map batch finished");
    Ok(out)
}
