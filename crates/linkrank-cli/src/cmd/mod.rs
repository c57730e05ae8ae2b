//! Subcommand implementations.

pub mod rank;
pub mod stats;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use linkrank_core::graph::{GraphBuilder, LinkGraph};
use linkrank_core::ingest::ingest_delimited;
use tracing::{info, warn};

/// Open the edge input: a file path, or stdin for `-`.
fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(path).with_context(|| format!("open edge file {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Ingest an edge file into an immutable graph, warning on rejected lines.
pub(crate) fn load_graph(path: &Path, delimiter: char) -> Result<LinkGraph> {
    let reader = open_input(path)?;

    let mut builder = GraphBuilder::new();
    let report = ingest_delimited(&mut builder, reader, delimiter)
        .with_context(|| format!("read edges from {}", path.display()))?;

    if !report.is_clean() {
        warn!(
            rejected = report.rejected,
            "skipped malformed edge records; continuing with the valid remainder"
        );
    }
    info!(
        accepted = report.accepted,
        nodes = builder.node_count(),
        "edge ingest complete"
    );

    Ok(builder.build())
}
