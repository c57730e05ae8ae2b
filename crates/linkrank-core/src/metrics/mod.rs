//! Centrality metrics over the link graph.
//!
//! # Overview
//!
//! Each metric answers a different question about node importance:
//!
//! - **PageRank** (`pagerank`): Which nodes do important nodes endorse?
//! - **Betweenness centrality** (`betweenness`): Which nodes bridge
//!   otherwise-distant parts of the graph?
//! - **Degree centrality** (`degree`): Which nodes have the most direct
//!   connections?
//!
//! All metrics take `&LinkGraph` and return scores indexed by node ID. The
//! graph is immutable during analysis, so the calculators have no data
//! dependency on one another and may run concurrently.
//!
//! ```rust,ignore
//! use linkrank_core::graph::LinkGraph;
//! use linkrank_core::metrics::pagerank::{pagerank, PageRankConfig};
//! use linkrank_core::metrics::betweenness::{betweenness_centrality, BetweennessConfig};
//! use linkrank_core::metrics::degree::degree_centrality;
//!
//! let lg: LinkGraph = /* build graph */;
//!
//! let pr = pagerank(&lg, &PageRankConfig::default());
//! let bc = betweenness_centrality(&lg, &BetweennessConfig::default());
//! let dc = degree_centrality(&lg);
//! ```

pub mod betweenness;
pub mod degree;
pub mod pagerank;

pub use betweenness::{BetweennessConfig, betweenness_centrality};
pub use degree::degree_centrality;
pub use pagerank::{PageRankConfig, PageRankResult, pagerank};
