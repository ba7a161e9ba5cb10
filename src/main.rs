use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use graphlink::graph::Graph;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "graphlink")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version = "0.1.0")]
#[command(about = "In-memory undirected graph with symmetric links", long_about = None)]
struct Cli {
    /// Log filter (e.g. "debug", "graphlink=trace"); overrides RUST_LOG
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the sample graph and print the result of each link
    Demo,
    /// Show version information
    Version,
}

fn init_tracing(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).context("Invalid log filter")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// A is the root; B, C and D hang off A; E and F hang off D.
fn run_demo() -> Result<()> {
    let mut graph = Graph::new();
    graph.insert("A")?;
    for child in ["B", "C", "D"] {
        graph.insert_under(&"A", child)?;
    }
    for child in ["E", "F"] {
        graph.insert_under(&"D", child)?;
    }

    for (source, target) in [("B", "D"), ("B", "E"), ("D", "E"), ("E", "F"), ("C", "F")] {
        println!(
            "Link Node {} with Node {}: {}",
            source,
            target,
            graph.link(&source, &target)
        );
    }

    let order: Vec<&str> = graph.traverse().into_iter().copied().collect();
    println!("Traversal from root: {}", order.join(" -> "));
    println!("{} nodes, {} links", graph.len(), graph.edge_count());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    match &cli.command {
        Some(Commands::Demo) => run_demo()?,
        Some(Commands::Version) => {
            println!("graphlink v{}", env!("CARGO_PKG_VERSION"));
        }
        None => {
            println!("graphlink - In-memory undirected graph");
            println!("Run 'graphlink demo' to replay the sample graph");
            println!("Run 'graphlink --help' for more information");
        }
    }

    Ok(())
}
