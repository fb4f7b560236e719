use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use graph_routes::adapters::fs::reader::FileDatasetReader;
use graph_routes::app::engine::{EngineConfig, RouteEngine};
use graph_routes::cli;
use graph_routes::domain::bridges::BridgeStrategy;
use graph_routes::domain::dijkstra::Accumulation;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Shortest connections between actors, and routes, spanning trees and
/// critical roads on a map.
#[derive(Parser)]
#[command(name = "graph-routes")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Tab-separated actor/movie/year file (first line is a header)
    #[arg(long, global = true)]
    actors: Option<PathBuf>,

    /// Space-separated `Name X Y` vertex file
    #[arg(long, global = true)]
    vertices: Option<PathBuf>,

    /// Space-separated `Name1 Name2` edge file
    #[arg(long, global = true)]
    edges: Option<PathBuf>,

    /// Accumulate route distances in full precision instead of truncating
    #[arg(long, global = true)]
    precise: bool,

    /// Critical road detection strategy
    #[arg(long, value_enum, default_value = "reachability", global = true)]
    strategy: StrategyArg,

    /// Print responses as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Reachability,
    LowLink,
}

impl From<StrategyArg> for BridgeStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Reachability => BridgeStrategy::Reachability,
            StrategyArg::LowLink => BridgeStrategy::LowLink,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show what was loaded
    Summary,

    /// Shortest chain of shared movies between two actors
    ActorPath {
        from: String,
        to: String,
    },

    /// Answer every actor pair in a tab-separated pairs file
    ActorBatch {
        /// Pairs file (first line is a header)
        pairs: PathBuf,
        /// Output file
        output: PathBuf,
    },

    /// Shortest route between two map vertices
    Route {
        from: String,
        to: String,
    },

    /// Answer every vertex pair in a tab-separated pairs file
    RouteBatch {
        /// Pairs file (first line is a header)
        pairs: PathBuf,
        /// Output file
        output: PathBuf,
    },

    /// Minimum spanning tree (forest) of the map
    Mst,

    /// Roads whose removal disconnects their endpoints
    CriticalRoads,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = EngineConfig {
        actors: args.actors,
        vertices: args.vertices,
        edges: args.edges,
        accumulation: if args.precise {
            Accumulation::Precise
        } else {
            Accumulation::Truncated
        },
        bridge_strategy: args.strategy.into(),
    };
    let engine = RouteEngine::load(&config, &FileDatasetReader::new())?;

    match args.command {
        Commands::Summary => cli::display_summary(&engine, args.json),
        Commands::ActorPath { from, to } => cli::display_actor_path(&engine, &from, &to, args.json),
        Commands::ActorBatch { pairs, output } => cli::run_actor_batch(&engine, &pairs, &output),
        Commands::Route { from, to } => cli::display_route(&engine, &from, &to, args.json),
        Commands::RouteBatch { pairs, output } => cli::run_route_batch(&engine, &pairs, &output),
        Commands::Mst => cli::display_spanning_tree(&engine, args.json),
        Commands::CriticalRoads => cli::display_critical_roads(&engine, args.json),
    }
}
