//! Normalized degree centrality.
//!
//! Degree centrality counts a node's direct connections:
//! `(out_degree + in_degree) / (N - 1)`. A self-loop counts once toward
//! each direction. Defined as 0.0 for graphs with N ≤ 1.

use std::collections::HashMap;

use tracing::instrument;

use crate::graph::LinkGraph;

/// Compute normalized degree centrality for every node.
///
/// # Returns
///
/// A `HashMap<String, f64>` mapping each node ID to
/// `(out + in) / (N - 1)`, or 0.0 when the graph has at most one node.
#[must_use]
#[instrument(skip(lg))]
#[allow(clippy::cast_precision_loss)]
pub fn degree_centrality(lg: &LinkGraph) -> HashMap<String, f64> {
    let n = lg.node_count();
    let mut scores = HashMap::with_capacity(n);

    for idx in lg.nodes() {
        let Some(id) = lg.node_id(idx) else { continue };

        let score = if n <= 1 {
            0.0
        } else {
            (lg.out_degree(idx) + lg.in_degree(idx)) as f64 / (n - 1) as f64
        };

        scores.insert(id.to_string(), score);
    }

    scores
}
