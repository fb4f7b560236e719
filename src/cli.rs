use crate::adapters::fs::reader::FileDatasetReader;
use crate::app::batch::{actor_batch, map_batch};
use crate::app::dto::{EdgeDto, QueryStatus};
use crate::app::engine::RouteEngine;
use crate::domain::ports::DatasetReader;
use anyhow::{Context as _, Result};
use serde::Serialize;
use std::path::Path;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn display_summary(engine: &RouteEngine, json: bool) -> Result<()> {
    let summary = engine.summary();
    if json {
        return print_json(&summary);
    }

    if let Some(c) = &summary.collaboration {
        println!("Collaboration graph:");
        println!("  Actors:      {}", c.actor_count);
        println!("  Movies:      {}", c.movie_count);
        println!("  Appearances: {}", c.appearance_count);
        println!(
            "  Lines: {} read, {} skipped, {} duplicate",
            c.load.lines, c.load.skipped, c.load.rejected
        );
    }
    if let Some(m) = &summary.map {
        println!("Map:");
        println!("  Vertices:   {}", m.vertex_count);
        println!("  Edges:      {}", m.edge_count);
        println!("  Components: {}", m.component_count);
        println!(
            "  Rejected: {} vertices, {} edges",
            m.load.vertices.rejected, m.load.edges.rejected
        );
    }
    Ok(())
}

pub fn display_actor_path(engine: &RouteEngine, from: &str, to: &str, json: bool) -> Result<()> {
    let response = engine.actor_path(from, to)?;
    if json {
        return print_json(&response);
    }

    match response.status {
        QueryStatus::Found => {
            println!("{}", response.rendered.unwrap_or_default());
            println!("  Movies crossed: {}", response.movies.len());
        }
        QueryStatus::NoPath => println!("No connection between {} and {}", from, to),
        QueryStatus::InvalidQuery => println!(
            "Query skipped: {}",
            response.reason.unwrap_or_default()
        ),
    }
    Ok(())
}

pub fn display_route(engine: &RouteEngine, from: &str, to: &str, json: bool) -> Result<()> {
    let response = engine.shortest_path(from, to)?;
    if json {
        return print_json(&response);
    }

    match response.status {
        QueryStatus::Found => {
            println!("Route from {} to {}:", from, to);
            for (i, stop) in response.stops.iter().enumerate() {
                println!(
                    "{:>4}. {:<20} ({}, {})  {:>10}",
                    i + 1,
                    stop.name,
                    stop.x,
                    stop.y,
                    stop.distance
                );
            }
            if let Some(total) = response.total_distance {
                println!("Total distance: {}", total);
            }
        }
        QueryStatus::NoPath => println!("No route between {} and {}", from, to),
        QueryStatus::InvalidQuery => println!(
            "Query skipped: {}",
            response.reason.unwrap_or_default()
        ),
    }
    Ok(())
}

fn print_edges(edges: &[EdgeDto]) {
    for edge in edges {
        println!("  {} -- {}  ({:.3})", edge.source, edge.target, edge.weight);
    }
}

pub fn display_spanning_tree(engine: &RouteEngine, json: bool) -> Result<()> {
    let response = engine.spanning_tree()?;
    if json {
        return print_json(&response);
    }

    println!(
        "Minimum spanning {} ({} edges, total weight {:.3}):",
        if response.component_count > 1 { "forest" } else { "tree" },
        response.edges.len(),
        response.total_weight
    );
    print_edges(&response.edges);
    Ok(())
}

pub fn display_critical_roads(engine: &RouteEngine, json: bool) -> Result<()> {
    let response = engine.critical_roads()?;
    if json {
        return print_json(&response);
    }

    println!("Critical roads: {}", response.edges.len());
    print_edges(&response.edges);
    Ok(())
}

pub fn run_actor_batch(engine: &RouteEngine, pairs: &Path, output: &Path) -> Result<()> {
    let text = FileDatasetReader::new().read(pairs)?;
    let out = actor_batch(engine, &text)?;
    std::fs::write(output, out)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;
    println!("Wrote {}", output.display());
    Ok(())
}

pub fn run_route_batch(engine: &RouteEngine, pairs: &Path, output: &Path) -> Result<()> {
    let text = FileDatasetReader::new().read(pairs)?;
    let out = map_batch(engine, &text)?;
    std::fs::write(output, out)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;
    println!("Wrote {}", output.display());
    Ok(())
}
