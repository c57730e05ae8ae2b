#![forbid(unsafe_code)]

mod cmd;

use std::env;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "linkrank: structural-importance ranking over directed link graphs",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Rank nodes by structural importance",
        long_about = "Ingest collected (source, target) pairs, compute PageRank, betweenness, \
                      and degree centrality, and emit the top-K ranking.",
        after_help = "EXAMPLES:\n    # Rank the top 5 nodes from a comma-delimited edge file\n    lr rank --input edges.txt\n\n    # Read from stdin, emit CSV\n    cat edges.txt | lr rank --input - --format csv\n\n    # Top 20 with a custom damping factor\n    lr rank --input edges.txt --top-k 20 --damping 0.9"
    )]
    Rank(cmd::rank::RankArgs),

    #[command(
        about = "Show structural diagnostics for an edge file",
        after_help = "EXAMPLES:\n    # Node/edge counts, density, components\n    lr stats --input edges.txt"
    )]
    Stats(cmd::stats::StatsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("LINKRANK_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "info,linkrank_core=debug,linkrank_cli=debug"
        } else {
            "warn,linkrank_core=info,linkrank_cli=info"
        })
    });

    let format = env::var("LINKRANK_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false)).init();
        }
        _ => {
            registry.with(fmt::layer().compact()).init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Rank(args) => cmd::rank::run(&args),
        Commands::Stats(args) => cmd::stats::run(&args),
    }
}
