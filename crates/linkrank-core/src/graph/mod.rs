//! Directed link graph: construction and structural diagnostics.
//!
//! # Overview
//!
//! This module builds a petgraph-based directed graph from an in-memory
//! stream of `(source, target)` identifier pairs. The graph feeds every
//! centrality metric and the final ranking.
//!
//! ## Pipeline
//!
//! ```text
//! (source, target) pairs
//!        ↓  GraphBuilder::add_edges()
//! GraphBuilder (mutable, deduplicating)
//!        ↓  GraphBuilder::build()
//! LinkGraph (immutable; safe for concurrent reads)
//!        ↓  stats::GraphStats::from_graph()
//! GraphStats (density, component count, dangling count, …)
//! ```
//!
//! ## Fingerprint
//!
//! [`LinkGraph::content_hash`] is a BLAKE3 hash of the sorted edge set.
//! Two graphs built from the same edges — in any submission order, with any
//! duplicates — carry the same fingerprint.

pub mod build;
pub mod stats;

// Re-export primary types at module level for convenience.
pub use build::{GraphBuilder, LinkGraph};
pub use stats::GraphStats;
