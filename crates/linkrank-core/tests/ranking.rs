//! End-to-end ranking tests plus property tests over random edge batches.

use linkrank_core::graph::{GraphBuilder, LinkGraph};
use linkrank_core::ingest::{EdgeRecord, ingest_records};
use linkrank_core::metrics::pagerank::{PageRankConfig, pagerank};
use linkrank_core::{AnalyzeConfig, analyze};

use proptest::prelude::*;

// ---------------------------------------------------------------------------
// End-to-end
// ---------------------------------------------------------------------------

#[test]
fn end_to_end_triangle_with_chord() {
    // The canonical smoke input: A → B → C → A plus the chord A → C.
    let edges = vec![
        EdgeRecord {
            source: "A".to_string(),
            target: Some("B".to_string()),
        },
        EdgeRecord {
            source: "B".to_string(),
            target: Some("C".to_string()),
        },
        EdgeRecord {
            source: "C".to_string(),
            target: Some("A".to_string()),
        },
        EdgeRecord {
            source: "A".to_string(),
            target: Some("C".to_string()),
        },
    ];

    let mut builder = GraphBuilder::new();
    let report = ingest_records(&mut builder, edges);
    assert!(report.is_clean());

    let lg = builder.build();
    let config = AnalyzeConfig {
        top_k: Some(4),
        ..AnalyzeConfig::default()
    };
    let analysis = analyze(&lg, &config);

    // All 3 nodes ranked (top_k exceeds node count).
    assert_eq!(analysis.ranking.len(), 3);

    // PageRank values sum to 1.0.
    let total: f64 = analysis.pagerank.scores.values().sum();
    assert!((total - 1.0).abs() < 1e-6, "Σ pagerank = {total}");

    // C has two in-edges, A and B one each; C ranks first.
    assert_eq!(analysis.ranking[0].node, "C");

    // Deterministic across re-runs.
    let again = analyze(&lg, &config);
    assert_eq!(analysis.ranking, again.ranking);
}

#[test]
fn end_to_end_with_rejected_records() {
    let records = vec![
        EdgeRecord {
            source: "good".to_string(),
            target: Some("page".to_string()),
        },
        EdgeRecord {
            source: "corrupt".to_string(),
            target: None,
        },
    ];

    let mut builder = GraphBuilder::new();
    let report = ingest_records(&mut builder, records);
    assert_eq!(report.accepted, 1);
    assert_eq!(report.rejected, 1);

    // The run proceeds with the valid remainder.
    let analysis = analyze(&builder.build(), &AnalyzeConfig::default());
    assert_eq!(analysis.ranking.len(), 2);
    assert!(!analysis.ranking.iter().any(|r| r.node == "corrupt"));
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

/// Small identifier alphabet so random batches collide into interesting
/// shared-node topologies instead of disjoint edges.
fn arb_edges() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-h]", "[a-h]"), 0..40)
}

proptest! {
    #[test]
    fn pagerank_mass_always_conserved(edges in arb_edges()) {
        let lg = LinkGraph::from_edges(edges);
        prop_assume!(lg.node_count() > 0);

        let result = pagerank(&lg, &PageRankConfig::default());
        let total: f64 = result.scores.values().sum();
        prop_assert!((total - 1.0).abs() < 1e-6, "Σ = {}", total);
    }

    #[test]
    fn duplicate_submission_is_idempotent(edges in arb_edges()) {
        let once = LinkGraph::from_edges(edges.clone());
        let twice = LinkGraph::from_edges(edges.iter().cloned().chain(edges.clone()));

        prop_assert_eq!(once.node_count(), twice.node_count());
        prop_assert_eq!(once.edge_count(), twice.edge_count());
        prop_assert_eq!(once.content_hash(), twice.content_hash());
    }

    #[test]
    fn ranking_never_exceeds_top_k(edges in arb_edges(), top_k in 0usize..10) {
        let lg = LinkGraph::from_edges(edges);
        let config = AnalyzeConfig {
            top_k: Some(top_k),
            ..AnalyzeConfig::default()
        };
        let analysis = analyze(&lg, &config);
        prop_assert!(analysis.ranking.len() <= top_k);
        prop_assert!(analysis.ranking.len() <= lg.node_count());

        // Sorted by PageRank descending.
        for pair in analysis.ranking.windows(2) {
            prop_assert!(pair[0].pagerank >= pair[1].pagerank);
        }
    }
}
