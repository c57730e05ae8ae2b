//! PageRank via power iteration.
//!
//! # Overview
//!
//! PageRank treats each link as a vote of endorsement: a node is important
//! when important nodes link to it. Damping models a random surfer who
//! occasionally jumps to a uniformly random node.
//!
//! # Algorithm
//!
//! ```text
//! PR(v) = (1 - d) / N + d * Σ PR(u) / out_degree(u)   for each u → v
//! ```
//!
//! where `d` is the damping factor (default 0.85).
//!
//! # Dangling nodes
//!
//! A node with no out-edges would leak probability mass out of the system.
//! Its rank is instead redistributed uniformly across all N nodes (as if it
//! linked to everything), so Σ scores stays at 1.0 after every iteration.
//!
//! # Output
//!
//! Returns a [`PageRankResult`] with per-node scores and metadata about the
//! computation (iterations, convergence). Failing to converge within
//! `max_iter` is not an error: the last iterate is returned with
//! `converged = false`.

use std::collections::HashMap;

use tracing::{instrument, warn};

use crate::graph::LinkGraph;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for PageRank computation.
#[derive(Debug, Clone)]
pub struct PageRankConfig {
    /// Damping factor (probability of following a link vs teleporting).
    /// Default: 0.85.
    pub damping: f64,
    /// Convergence threshold: stop when the L1 norm of the rank delta is
    /// below this. Default: 1e-6.
    pub tolerance: f64,
    /// Maximum number of iterations. Default: 100.
    pub max_iter: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            tolerance: 1e-6,
            max_iter: 100,
        }
    }
}

// ---------------------------------------------------------------------------
// Result type
// ---------------------------------------------------------------------------

/// Result of a PageRank computation.
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// PageRank scores: node ID → score. Scores sum to ~1.0.
    pub scores: HashMap<String, f64>,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Whether the L1 delta dropped below tolerance within `max_iter`.
    pub converged: bool,
}

// ---------------------------------------------------------------------------
// Power iteration
// ---------------------------------------------------------------------------

/// Compute PageRank for every node in the graph.
///
/// # Arguments
///
/// * `lg` — An immutable [`LinkGraph`].
/// * `config` — PageRank configuration (damping, tolerance, max_iter).
///
/// # Returns
///
/// A [`PageRankResult`] with scores for every node ID. An empty graph
/// yields empty scores, zero iterations, and `converged = true`.
#[must_use]
#[instrument(skip(lg, config))]
#[allow(clippy::cast_precision_loss)]
pub fn pagerank(lg: &LinkGraph, config: &PageRankConfig) -> PageRankResult {
    let n = lg.node_count();

    if n == 0 {
        return PageRankResult {
            scores: HashMap::new(),
            iterations: 0,
            converged: true,
        };
    }

    let n_f64 = n as f64;
    let base = (1.0 - config.damping) / n_f64;

    // Initialize ranks uniformly.
    let mut ranks = vec![1.0 / n_f64; n];
    let mut new_ranks = vec![0.0_f64; n];

    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..config.max_iter {
        iterations += 1;

        // Reset new_ranks to the base teleportation value.
        for r in &mut new_ranks {
            *r = base;
        }

        // Distribute rank from each node to its outgoing neighbors.
        for node in lg.nodes() {
            let idx = node.index();
            let out_degree = lg.out_degree(node);

            if out_degree == 0 {
                // Dangling node: distribute its rank equally to all nodes.
                let share = config.damping * ranks[idx] / n_f64;
                for r in &mut new_ranks {
                    *r += share;
                }
            } else {
                let share = config.damping * ranks[idx] / out_degree as f64;
                for neighbor in lg.out_neighbors(node) {
                    new_ranks[neighbor.index()] += share;
                }
            }
        }

        // Check convergence: L1 norm of the delta.
        let delta: f64 = ranks
            .iter()
            .zip(new_ranks.iter())
            .map(|(old, new)| (old - new).abs())
            .sum();

        std::mem::swap(&mut ranks, &mut new_ranks);

        if delta < config.tolerance {
            converged = true;
            break;
        }
    }

    if !converged {
        warn!(
            iterations,
            tolerance = config.tolerance,
            "pagerank did not converge; returning last iterate"
        );
    }

    // Map scores back to node IDs.
    let scores = lg
        .nodes()
        .filter_map(|idx| lg.node_id(idx).map(|id| (id.to_string(), ranks[idx.index()])))
        .collect();

    PageRankResult {
        scores,
        iterations,
        converged,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
