//! Structural diagnostics for a built link graph.
//!
//! Cheap O(N + E) summaries surfaced by the CLI: density, weakly connected
//! components, and source/sink counts. None of these feed the ranking —
//! they exist so an operator can sanity-check what the collector produced.

use petgraph::Direction;

use crate::graph::build::LinkGraph;

/// Summary statistics for a [`LinkGraph`].
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStats {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of edges.
    pub edge_count: usize,
    /// Edge density: `E / (N * (N - 1))`. 0.0 for fewer than 2 nodes.
    pub density: f64,
    /// Number of weakly connected components.
    pub component_count: usize,
    /// Component sizes, sorted descending.
    pub component_sizes: Vec<usize>,
    /// Nodes with no incoming edges.
    pub source_count: usize,
    /// Nodes with no outgoing edges (dangling nodes for PageRank).
    pub sink_count: usize,
}

impl GraphStats {
    /// Compute all statistics in one pass over the graph.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_graph(lg: &LinkGraph) -> Self {
        let n = lg.node_count();
        let e = lg.edge_count();

        let density = if n < 2 {
            0.0
        } else {
            e as f64 / (n * (n - 1)) as f64
        };

        let component_sizes = weak_component_sizes(lg);

        let mut source_count = 0;
        let mut sink_count = 0;
        for idx in lg.nodes() {
            if lg.in_neighbors(idx).next().is_none() {
                source_count += 1;
            }
            if lg.out_neighbors(idx).next().is_none() {
                sink_count += 1;
            }
        }

        Self {
            node_count: n,
            edge_count: e,
            density,
            component_count: component_sizes.len(),
            component_sizes,
            source_count,
            sink_count,
        }
    }
}

/// Sizes of weakly connected components, sorted descending.
///
/// BFS treating edges as undirected.
fn weak_component_sizes(lg: &LinkGraph) -> Vec<usize> {
    let n = lg.node_count();
    if n == 0 {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut sizes = Vec::new();

    for start in lg.nodes() {
        if visited[start.index()] {
            continue;
        }

        // BFS from start, treating edges as undirected.
        let mut stack = vec![start];
        let mut size = 0usize;

        while let Some(node) = stack.pop() {
            if visited[node.index()] {
                continue;
            }
            visited[node.index()] = true;
            size += 1;

            for neighbor in lg.out_neighbors(node) {
                if !visited[neighbor.index()] {
                    stack.push(neighbor);
                }
            }
            for neighbor in lg.graph.neighbors_directed(node, Direction::Incoming) {
                if !visited[neighbor.index()] {
                    stack.push(neighbor);
                }
            }
        }

        sizes.push(size);
    }

    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes
}
