//! `lr rank` — compute centrality metrics and emit the top-K ranking.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use linkrank_core::metrics::{BetweennessConfig, PageRankConfig};
use linkrank_core::{Analysis, AnalyzeConfig, DEFAULT_TOP_K, ScoreRecord, analyze};
use tracing::warn;

#[derive(Args, Debug)]
pub struct RankArgs {
    /// Edge file: one `source<delimiter>target` pair per line (`-` = stdin).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Field delimiter between source and target.
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,

    /// Number of records to emit.
    #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
    pub top_k: usize,

    /// PageRank damping factor.
    #[arg(long, default_value_t = 0.85)]
    pub damping: f64,

    /// PageRank convergence tolerance (L1 norm).
    #[arg(long, default_value_t = 1e-6)]
    pub tolerance: f64,

    /// PageRank iteration cap.
    #[arg(long, default_value_t = 100)]
    pub max_iter: usize,

    /// Emit raw (unnormalized) betweenness totals.
    #[arg(long)]
    pub raw_betweenness: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable aligned columns.
    Table,
    /// Comma-separated values with a header row.
    Csv,
    /// JSON array of score records.
    Json,
}

pub fn run(args: &RankArgs) -> Result<()> {
    let lg = super::load_graph(&args.input, args.delimiter)?;

    let config = AnalyzeConfig {
        pagerank: PageRankConfig {
            damping: args.damping,
            tolerance: args.tolerance,
            max_iter: args.max_iter,
        },
        betweenness: BetweennessConfig {
            normalized: !args.raw_betweenness,
            parallel: true,
        },
        top_k: Some(args.top_k),
    };

    let analysis = analyze(&lg, &config);
    if !analysis.pagerank.converged {
        warn!(
            iterations = analysis.pagerank.iterations,
            "pagerank did not converge; ranking uses the last iterate"
        );
    }

    let rendered = render(&analysis, args.format)?;

    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("write output to {}", path.display()))?,
        None => io::stdout().write_all(rendered.as_bytes())?,
    }

    Ok(())
}

/// Render the ranking in the requested format.
fn render(analysis: &Analysis, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(&analysis.ranking)),
        OutputFormat::Csv => Ok(render_csv(&analysis.ranking)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&analysis.ranking)
                .context("serialize ranking to JSON")?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn render_table(records: &[ScoreRecord]) -> String {
    let mut out = String::new();

    let node_width = records
        .iter()
        .map(|r| r.node.len())
        .chain(std::iter::once("node".len()))
        .max()
        .unwrap_or(4);

    out.push_str(&format!(
        "{:<node_width$}  {:>10}  {:>11}  {:>11}\n",
        "node", "pagerank", "betweenness", "degree"
    ));

    for r in records {
        out.push_str(&format!(
            "{:<node_width$}  {:>10.6}  {:>11.6}  {:>11.6}\n",
            r.node, r.pagerank, r.betweenness, r.degree_centrality
        ));
    }

    out
}

/// CSV with the canonical column order. Floats use Rust's shortest
/// round-trip formatting, so the stated tolerance survives re-parsing.
fn render_csv(records: &[ScoreRecord]) -> String {
    let mut out = String::from("node,pagerank,betweenness,degree_centrality\n");
    for r in records {
        out.push_str(&format!(
            "{},{},{},{}\n",
            csv_field(&r.node),
            r.pagerank,
            r.betweenness,
            r.degree_centrality
        ));
    }
    out
}

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
