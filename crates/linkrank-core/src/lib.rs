#![forbid(unsafe_code)]
//! linkrank-core: structural-importance rankings over directed link graphs.
//!
//! # Overview
//!
//! The engine ingests a finite batch of `(source, target)` identifier pairs,
//! builds a deduplicated directed graph, and computes three centrality
//! measures over it — PageRank, betweenness centrality, and degree
//! centrality — before merging them into a stable top-K ranking.
//!
//! ```text
//! (source, target) pairs
//!        ↓  ingest / GraphBuilder
//! LinkGraph (immutable directed graph)
//!        ↓  metrics::{pagerank, betweenness, degree}
//! per-node score maps
//!        ↓  rank::rank()
//! Vec<ScoreRecord> (PageRank-descending, deterministic tie-break)
//! ```
//!
//! The graph is built once per run. [`GraphBuilder::build`] is the barrier
//! between the mutable ingest phase and the read-only analysis phase; the
//! calculators only ever take `&LinkGraph`.
//!
//! # Conventions
//!
//! - **Errors**: typed [`Error`] in this crate; binaries wrap with `anyhow`.
//! - **Logging**: `tracing` macros (`info!`, `warn!`, `debug!`).

pub mod error;
pub mod graph;
pub mod ingest;
pub mod metrics;
pub mod rank;

pub use error::{Error, Result};
pub use graph::{GraphBuilder, LinkGraph};
pub use rank::{Analysis, AnalyzeConfig, DEFAULT_TOP_K, ScoreRecord, analyze, rank};
