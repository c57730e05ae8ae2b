//! Merging metric maps into a stable top-K ranking.
//!
//! # Overview
//!
//! The ranker joins the three per-node score maps into explicit
//! [`ScoreRecord`]s keyed by node — no implicit reliance on separate maps
//! sharing an iteration order — then sorts by PageRank descending and
//! truncates to the first `top_k` records.
//!
//! ## Tie-breaking
//!
//! Exactly equal PageRank values are a real possibility (isolated or
//! symmetric nodes). Ties are broken by the node's insertion order in the
//! graph, which is deterministic within a run, so re-ranking the same
//! input always produces the same output order.

use std::collections::HashMap;

use serde::Serialize;
use tracing::instrument;

use crate::graph::LinkGraph;
use crate::metrics::{
    BetweennessConfig, PageRankConfig, PageRankResult, betweenness_centrality, degree_centrality,
    pagerank,
};

/// Default number of records kept in a ranking, matching the historical
/// top-5 output of the system this engine replaces.
pub const DEFAULT_TOP_K: usize = 5;

// ---------------------------------------------------------------------------
// Record type
// ---------------------------------------------------------------------------

/// A ranked node with all three centrality scores joined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRecord {
    /// Node identifier.
    pub node: String,
    /// PageRank score (scores over the full graph sum to ~1.0).
    pub pagerank: f64,
    /// Betweenness centrality.
    pub betweenness: f64,
    /// Normalized degree centrality.
    pub degree_centrality: f64,
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// Join the three metric maps and produce the top-K ranking.
///
/// Every node in the graph appears in all three maps (the calculators
/// iterate the full node set); a missing entry is treated as 0.0 rather
/// than panicking.
///
/// Sort key: PageRank descending, then node insertion order. The sort is
/// stable, so records that compare equal keep their insertion order.
#[must_use]
#[instrument(skip(lg, pagerank_scores, betweenness, degree))]
pub fn rank(
    lg: &LinkGraph,
    pagerank_scores: &HashMap<String, f64>,
    betweenness: &HashMap<String, f64>,
    degree: &HashMap<String, f64>,
    top_k: usize,
) -> Vec<ScoreRecord> {
    // Build records in insertion order so the stable sort's tie order is
    // the node's first appearance in the edge stream.
    let mut records: Vec<ScoreRecord> = lg
        .nodes()
        .filter_map(|idx| lg.node_id(idx))
        .map(|id| ScoreRecord {
            node: id.to_string(),
            pagerank: pagerank_scores.get(id).copied().unwrap_or(0.0),
            betweenness: betweenness.get(id).copied().unwrap_or(0.0),
            degree_centrality: degree.get(id).copied().unwrap_or(0.0),
        })
        .collect();

    records.sort_by(|a, b| b.pagerank.total_cmp(&a.pagerank));
    records.truncate(top_k);
    records
}

// ---------------------------------------------------------------------------
// End-to-end analysis
// ---------------------------------------------------------------------------

/// Configuration for a full analysis run.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeConfig {
    /// PageRank parameters.
    pub pagerank: PageRankConfig,
    /// Betweenness parameters.
    pub betweenness: BetweennessConfig,
    /// Number of records to keep; `None` keeps [`DEFAULT_TOP_K`].
    pub top_k: Option<usize>,
}

/// Output of a full analysis run.
#[derive(Debug)]
pub struct Analysis {
    /// PageRank result, including the convergence flag.
    pub pagerank: PageRankResult,
    /// Betweenness centrality per node.
    pub betweenness: HashMap<String, f64>,
    /// Degree centrality per node.
    pub degree: HashMap<String, f64>,
    /// Top-K ranking joined from the three maps.
    pub ranking: Vec<ScoreRecord>,
}

/// Run all three calculators over an immutable graph and rank the result.
///
/// The calculators only read `lg`; ingestion must have finished before this
/// is called (enforced by the builder/graph type split). PageRank failing
/// to converge is surfaced via the result flag and a warning, not an error.
#[must_use]
#[instrument(skip(lg, config))]
pub fn analyze(lg: &LinkGraph, config: &AnalyzeConfig) -> Analysis {
    let pr = pagerank(lg, &config.pagerank);
    let bc = betweenness_centrality(lg, &config.betweenness);
    let dc = degree_centrality(lg);

    let ranking = rank(
        lg,
        &pr.scores,
        &bc,
        &dc,
        config.top_k.unwrap_or(DEFAULT_TOP_K),
    );

    Analysis {
        pagerank: pr,
        betweenness: bc,
        degree: dc,
        ranking,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphBuilder, LinkGraph};

    fn graph_from(edges: &[(&str, &str)]) -> LinkGraph {
        LinkGraph::from_edges(
            edges
                .iter()
                .map(|(a, b)| ((*a).to_string(), (*b).to_string())),
        )
    }

    #[test]
    fn empty_graph_ranks_empty() {
        let lg = GraphBuilder::new().build();
        let analysis = analyze(&lg, &AnalyzeConfig::default());
        assert!(analysis.ranking.is_empty());
        assert!(analysis.pagerank.scores.is_empty());
    }

    #[test]
    fn rank_sorts_by_pagerank_descending() {
        // B → A, C → A: A is the clear PageRank winner.
        let lg = graph_from(&[("B", "A"), ("C", "A")]);
        let analysis = analyze(&lg, &AnalyzeConfig::default());

        assert_eq!(analysis.ranking[0].node, "A");
        assert!(analysis.ranking[0].pagerank > analysis.ranking[1].pagerank);
    }

    #[test]
    fn rank_truncates_to_top_k() {
        let lg = graph_from(&[("A", "B"), ("B", "C"), ("C", "D"), ("D", "E")]);
        let config = AnalyzeConfig {
            top_k: Some(2),
            ..AnalyzeConfig::default()
        };
        let analysis = analyze(&lg, &config);
        assert_eq!(analysis.ranking.len(), 2);
    }

    #[test]
    fn top_k_zero_yields_empty_ranking() {
        let lg = graph_from(&[("A", "B")]);
        let config = AnalyzeConfig {
            top_k: Some(0),
            ..AnalyzeConfig::default()
        };
        let analysis = analyze(&lg, &config);
        assert!(analysis.ranking.is_empty());
    }

    #[test]
    fn ties_break_by_insertion_order() {
        // Two isolated edges: B and D have identical PageRank, as do A and
        // C. Insertion order is A, B, C, D, so among equals the earlier
        // node wins.
        let lg = graph_from(&[("A", "B"), ("C", "D")]);
        let pr = pagerank(&lg, &PageRankConfig::default());
        assert!((pr.scores["B"] - pr.scores["D"]).abs() < 1e-12);

        let bc = betweenness_centrality(&lg, &BetweennessConfig::default());
        let dc = degree_centrality(&lg);

        let ranking = rank(&lg, &pr.scores, &bc, &dc, 4);
        let order: Vec<&str> = ranking.iter().map(|r| r.node.as_str()).collect();
        assert_eq!(order, vec!["B", "D", "A", "C"]);
    }

    #[test]
    fn ranking_is_deterministic_across_runs() {
        let edges = [("A", "B"), ("C", "D"), ("E", "F")];
        let lg = graph_from(&edges);
        let first = analyze(&lg, &AnalyzeConfig::default());

        for _ in 0..5 {
            let again = analyze(&lg, &AnalyzeConfig::default());
            assert_eq!(first.ranking, again.ranking);
        }
    }

    #[test]
    fn every_record_joins_all_three_metrics() {
        let lg = graph_from(&[("A", "B"), ("B", "C"), ("C", "A")]);
        let config = AnalyzeConfig {
            top_k: Some(10),
            ..AnalyzeConfig::default()
        };
        let analysis = analyze(&lg, &config);

        assert_eq!(analysis.ranking.len(), 3);
        for record in &analysis.ranking {
            assert!(analysis.pagerank.scores.contains_key(&record.node));
            assert!(analysis.betweenness.contains_key(&record.node));
            assert!(analysis.degree.contains_key(&record.node));
        }
    }

    #[test]
    fn score_record_serializes_with_field_order() {
        let record = ScoreRecord {
            node: "A".to_string(),
            pagerank: 0.5,
            betweenness: 0.25,
            degree_centrality: 1.0,
        };
        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(
            json,
            r#"{"node":"A","pagerank":0.5,"betweenness":0.25,"degree_centrality":1.0}"#
        );
    }
}
