//! `lr stats` — structural diagnostics for an edge file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use linkrank_core::graph::GraphStats;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Edge file: one `source<delimiter>target` pair per line (`-` = stdin).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Field delimiter between source and target.
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,
}

pub fn run(args: &StatsArgs) -> Result<()> {
    let lg = super::load_graph(&args.input, args.delimiter)?;
    let stats = GraphStats::from_graph(&lg);

    println!("nodes:        {}", stats.node_count);
    println!("edges:        {}", stats.edge_count);
    println!("density:      {:.6}", stats.density);
    println!("components:   {}", stats.component_count);
    if let Some(largest) = stats.component_sizes.first() {
        println!("largest:      {largest}");
    }
    println!("sources:      {}", stats.source_count);
    println!("sinks:        {} (dangling)", stats.sink_count);
    println!("fingerprint:  {}", lg.content_hash());

    Ok(())
}
