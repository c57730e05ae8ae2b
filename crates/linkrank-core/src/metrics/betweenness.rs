//! Betweenness centrality via Brandes' algorithm.
//!
//! # Overview
//!
//! Betweenness measures how often a node lies on shortest paths between
//! other pairs of nodes. High-betweenness nodes are bridges — removing
//! them would disconnect parts of the graph.
//!
//! # Algorithm
//!
//! Brandes (2001) for unweighted directed graphs:
//!
//! 1. For each source node `s`, run BFS to compute shortest-path counts
//!    (`sigma`) and distances, recording predecessors on shortest paths.
//! 2. Accumulate dependency scores in reverse BFS order (farthest nodes
//!    first): `delta[v] += (sigma[v] / sigma[w]) * (1 + delta[w])`.
//! 3. Sum the dependency scores across all source nodes.
//!
//! Complexity: O(V * E). No all-pairs distance matrix is materialized.
//!
//! Edge direction is respected throughout — this is directed betweenness,
//! not its symmetric cousin. Unreachable pairs contribute zero and
//! isolated nodes score 0.
//!
//! # Parallelism
//!
//! The per-source passes are independent. With `parallel` enabled they run
//! across rayon workers; each worker folds into a private partial vector
//! and the partials are summed at the end, so no accumulator is ever
//! written from two threads.
//!
//! # Normalization
//!
//! With `normalized` (the default), final totals are scaled by
//! `1 / ((N-1)(N-2))` to bound scores to `[0, 1]`; graphs with N ≤ 2 are
//! left unnormalized (every score is zero anyway).

use std::collections::{HashMap, VecDeque};

use petgraph::graph::NodeIndex;
use rayon::prelude::*;
use tracing::instrument;

use crate::graph::LinkGraph;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for betweenness centrality.
#[derive(Debug, Clone, Copy)]
pub struct BetweennessConfig {
    /// Scale scores by `1 / ((N-1)(N-2))` to bound them to `[0, 1]`.
    pub normalized: bool,
    /// Run per-source passes across rayon workers.
    pub parallel: bool,
}

impl Default for BetweennessConfig {
    fn default() -> Self {
        Self {
            normalized: true,
            parallel: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Compute betweenness centrality for all nodes in the graph.
///
/// # Returns
///
/// A `HashMap<String, f64>` mapping each node ID to its betweenness score.
/// Disconnected nodes and nodes with no shortest paths through them receive
/// a score of 0.0.
#[must_use]
#[instrument(skip(lg, config))]
#[allow(clippy::cast_precision_loss)]
pub fn betweenness_centrality(lg: &LinkGraph, config: &BetweennessConfig) -> HashMap<String, f64> {
    let n = lg.node_count();

    if n == 0 {
        return HashMap::new();
    }

    let sources: Vec<NodeIndex> = lg.nodes().collect();

    // Node-indexed betweenness accumulator. Per-worker partials merged at
    // the end; single accumulator on the sequential path.
    let cb: Vec<f64> = if config.parallel {
        sources
            .par_iter()
            .fold(
                || vec![0.0_f64; n],
                |mut acc, &s| {
                    accumulate_from_source(lg, s, &mut acc);
                    acc
                },
            )
            .reduce(
                || vec![0.0_f64; n],
                |mut a, b| {
                    for (x, y) in a.iter_mut().zip(b) {
                        *x += y;
                    }
                    a
                },
            )
    } else {
        let mut acc = vec![0.0_f64; n];
        for &s in &sources {
            accumulate_from_source(lg, s, &mut acc);
        }
        acc
    };

    let scale = if config.normalized && n > 2 {
        1.0 / ((n - 1) as f64 * (n - 2) as f64)
    } else {
        1.0
    };

    lg.nodes()
        .filter_map(|idx| {
            lg.node_id(idx)
                .map(|id| (id.to_string(), cb[idx.index()] * scale))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Single-source pass
// ---------------------------------------------------------------------------

/// One Brandes pass: BFS from `s`, then reverse dependency accumulation
/// into `cb`.
fn accumulate_from_source(lg: &LinkGraph, s: NodeIndex, cb: &mut [f64]) {
    let n = cb.len();
    let si = s.index();

    // Stack: nodes in order of discovery (farthest popped first).
    let mut stack: Vec<NodeIndex> = Vec::with_capacity(n);

    // predecessors[w] = nodes immediately preceding w on shortest paths from s.
    let mut predecessors: Vec<Vec<NodeIndex>> = vec![Vec::new(); n];

    // sigma[t]: number of shortest paths from s to t.
    let mut sigma: Vec<f64> = vec![0.0; n];
    sigma[si] = 1.0;

    // dist[t]: distance from s to t (-1 = unvisited).
    let mut dist: Vec<i64> = vec![-1; n];
    dist[si] = 0;

    let mut queue: VecDeque<NodeIndex> = VecDeque::new();
    queue.push_back(s);

    while let Some(v) = queue.pop_front() {
        let vi = v.index();
        stack.push(v);

        for w in lg.out_neighbors(v) {
            let wi = w.index();

            // First visit to w?
            if dist[wi] < 0 {
                dist[wi] = dist[vi] + 1;
                queue.push_back(w);
            }

            // Shortest path to w via v?
            if dist[wi] == dist[vi] + 1 {
                sigma[wi] += sigma[vi];
                predecessors[wi].push(v);
            }
        }
    }

    // Accumulate dependencies in reverse BFS order.
    let mut delta: Vec<f64> = vec![0.0; n];

    while let Some(w) = stack.pop() {
        let wi = w.index();

        for &v in &predecessors[wi] {
            let vi = v.index();
            if sigma[wi] > 0.0 {
                delta[vi] += (sigma[vi] / sigma[wi]) * (1.0 + delta[wi]);
            }
        }

        if wi != si {
            cb[wi] += delta[wi];
        }
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

    fn graph_with_nodes(nodes: &[&str], edges: &[(&str, &str)]) -> LinkGraph {
        let mut builder = GraphBuilder::new();
        for id in nodes {
            builder.add_node(id);
        }
        for (a, b) in edges {
            builder.add_edge(a, b);
        }
        builder.build()
    }

    fn raw() -> BetweennessConfig {
        BetweennessConfig {
            normalized: false,
            parallel: false,
        }
    }

    #[test]
    fn empty_graph_returns_empty() {
        let lg = graph_with_nodes(&[], &[]);
        let bc = betweenness_centrality(&lg, &BetweennessConfig::default());
        assert!(bc.is_empty());
    }

    #[test]
    fn single_node_zero_betweenness() {
        let lg = graph_with_nodes(&["A"], &[]);
        let bc = betweenness_centrality(&lg, &BetweennessConfig::default());
        assert_eq!(bc.get("A"), Some(&0.0));
    }

    #[test]
    fn linear_chain_middle_node_has_betweenness() {
        // A → B → C: B is on the single shortest path from A to C.
        // Unnormalized dependency is exactly 1.0.
        let lg = graph_from(&[("A", "B"), ("B", "C")]);
        let bc = betweenness_centrality(&lg, &raw());

        assert!((bc["A"] - 0.0).abs() < 1e-10, "A has no betweenness");
        assert!((bc["B"] - 1.0).abs() < 1e-10, "B on path A→C, got {}", bc["B"]);
        assert!((bc["C"] - 0.0).abs() < 1e-10, "C has no betweenness");
    }

    #[test]
    fn linear_chain_normalized() {
        // N = 3: scale = 1 / (2 * 1) = 0.5, so B = 0.5 normalized.
        let lg = graph_from(&[("A", "B"), ("B", "C")]);
        let bc = betweenness_centrality(
            &lg,
            &BetweennessConfig {
                normalized: true,
                parallel: false,
            },
        );
        assert!((bc["B"] - 0.5).abs() < 1e-10, "got {}", bc["B"]);
    }

    #[test]
    fn direction_is_respected() {
        // A → B ← C: no directed path A→C or C→A, so B bridges nothing.
        let lg = graph_from(&[("A", "B"), ("C", "B")]);
        let bc = betweenness_centrality(&lg, &raw());
        assert!((bc["B"] - 0.0).abs() < 1e-10);
    }

    #[test]
    fn diamond_graph_betweenness() {
        // A → B → D, A → C → D: two shortest A→D paths, one through each
        // of B and C, so each scores 0.5 unnormalized.
        let lg = graph_from(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
        let bc = betweenness_centrality(&lg, &raw());

        assert!((bc["A"] - 0.0).abs() < 1e-10);
        assert!((bc["B"] - 0.5).abs() < 1e-10, "got {}", bc["B"]);
        assert!((bc["C"] - 0.5).abs() < 1e-10, "got {}", bc["C"]);
        assert!((bc["D"] - 0.0).abs() < 1e-10);
    }

    #[test]
    fn chain_of_four_betweenness() {
        // A → B → C → D
        // B is on paths A→C, A→D → 2.0; C on A→D, B→D → 2.0.
        let lg = graph_from(&[("A", "B"), ("B", "C"), ("C", "D")]);
        let bc = betweenness_centrality(&lg, &raw());

        assert!((bc["A"] - 0.0).abs() < 1e-10);
        assert!((bc["B"] - 2.0).abs() < 1e-10, "got {}", bc["B"]);
        assert!((bc["C"] - 2.0).abs() < 1e-10, "got {}", bc["C"]);
        assert!((bc["D"] - 0.0).abs() < 1e-10);
    }

    #[test]
    fn disconnected_components_no_cross_betweenness() {
        // A → B and C → D: no shortest paths cross components.
        let lg = graph_from(&[("A", "B"), ("C", "D")]);
        let bc = betweenness_centrality(&lg, &raw());

        for id in ["A", "B", "C", "D"] {
            assert!((bc[id] - 0.0).abs() < 1e-10, "{id} should be 0");
        }
    }

    #[test]
    fn isolated_node_scores_zero() {
        let lg = graph_with_nodes(&["A", "B", "C", "X"], &[("A", "B"), ("B", "C")]);
        let bc = betweenness_centrality(&lg, &raw());
        assert!((bc["X"] - 0.0).abs() < 1e-10);
        assert!(bc["B"] > 0.0);
    }

    #[test]
    fn parallel_matches_sequential() {
        // Two overlapping diamonds plus a tail.
        let edges = [
            ("A", "B"),
            ("A", "C"),
            ("B", "D"),
            ("C", "D"),
            ("D", "E"),
            ("E", "F"),
            ("B", "E"),
        ];
        let lg = graph_from(&edges);

        let seq = betweenness_centrality(&lg, &raw());
        let par = betweenness_centrality(
            &lg,
            &BetweennessConfig {
                normalized: false,
                parallel: true,
            },
        );

        assert_eq!(seq.len(), par.len());
        for (id, score) in &seq {
            assert!(
                (score - par[id]).abs() < 1e-12,
                "{id}: sequential {score} vs parallel {}",
                par[id]
            );
        }
    }

    #[test]
    fn two_node_graph_left_unnormalized() {
        // N = 2: normalization divisor would be zero; scores are zero anyway.
        let lg = graph_from(&[("A", "B")]);
        let bc = betweenness_centrality(&lg, &BetweennessConfig::default());
        assert!((bc["A"] - 0.0).abs() < 1e-10);
        assert!((bc["B"] - 0.0).abs() < 1e-10);
    }
}
