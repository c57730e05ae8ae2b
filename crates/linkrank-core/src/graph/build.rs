//! Graph construction from an edge stream.
//!
//! # Overview
//!
//! [`GraphBuilder`] accepts raw `(source, target)` pairs and accumulates a
//! [`petgraph`] directed graph. Node identity is exact string equality —
//! no scheme/host canonicalization happens here (that is the collector's
//! job). Endpoints are created implicitly on first appearance, duplicate
//! ordered pairs are ignored, self-loops are permitted, and the empty
//! string is a valid identifier.
//!
//! ## Edge Direction
//!
//! An edge `A → B` means "A links to B" — A endorses B. PageRank mass
//! flows along edge direction.
//!
//! ## Iteration Order
//!
//! petgraph allocates node indices in insertion order, so iterating
//! [`LinkGraph::nodes`] is deterministic across calls within one run. The
//! ranker relies on this for reproducible tie-breaking.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
};

// ---------------------------------------------------------------------------
// GraphBuilder
// ---------------------------------------------------------------------------

/// Mutable accumulator for the link graph.
///
/// Calling [`GraphBuilder::build`] freezes the accumulated edges into an
/// immutable [`LinkGraph`]; this is the synchronization barrier between the
/// ingest phase and the analysis phase.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: DiGraph<String, ()>,
    node_map: HashMap<String, NodeIndex>,
}

impl GraphBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a node identifier, creating it on first appearance.
    pub fn add_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(id.to_string());
        self.node_map.insert(id.to_string(), idx);
        idx
    }

    /// Insert a directed edge, creating either endpoint if absent.
    ///
    /// Duplicate ordered pairs are idempotent: the graph holds at most one
    /// edge per `(source, target)`. `source == target` inserts a self-loop.
    pub fn add_edge(&mut self, source: &str, target: &str) {
        let s = self.add_node(source);
        let t = self.add_node(target);

        // petgraph allows parallel edges by default; guard against them.
        if !self.graph.contains_edge(s, t) {
            self.graph.add_edge(s, t, ());
        }
    }

    /// Insert a batch of directed edges.
    pub fn add_edges<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (source, target) in pairs {
            self.add_edge(&source, &target);
        }
    }

    /// Number of nodes accumulated so far.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Freeze the builder into an immutable [`LinkGraph`].
    ///
    /// Computes the BLAKE3 content hash of the sorted edge set as part of
    /// freezing, so equal edge sets produce equal fingerprints regardless
    /// of submission order.
    #[must_use]
    pub fn build(self) -> LinkGraph {
        let mut edges: Vec<(&str, &str)> = self
            .graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(s, t)| (self.graph[s].as_str(), self.graph[t].as_str()))
            .collect();
        edges.sort_unstable();
        let content_hash = compute_edge_hash(&edges);

        LinkGraph {
            graph: self.graph,
            node_map: self.node_map,
            content_hash,
        }
    }
}

// ---------------------------------------------------------------------------
// LinkGraph
// ---------------------------------------------------------------------------

/// An immutable directed link graph.
///
/// Nodes are opaque string identifiers. The graph is built once per run and
/// never mutated during analysis, so the centrality calculators may read it
/// concurrently without locking.
#[derive(Debug)]
pub struct LinkGraph {
    /// Directed graph: nodes = identifiers, edges = links.
    pub graph: DiGraph<String, ()>,
    /// Mapping from identifier to petgraph `NodeIndex`.
    pub node_map: HashMap<String, NodeIndex>,
    /// BLAKE3 content hash of the sorted edge set.
    pub content_hash: String,
}

impl LinkGraph {
    /// Build a graph directly from an edge iterator.
    #[must_use]
    pub fn from_edges<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut builder = GraphBuilder::new();
        builder.add_edges(pairs);
        builder.build()
    }

    /// Number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up the `NodeIndex` for an identifier.
    #[must_use]
    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.node_map.get(id).copied()
    }

    /// Return the identifier for a node.
    #[must_use]
    pub fn node_id(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    /// Iterate all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Out-neighbors of a node (targets it links to).
    pub fn out_neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(idx, Direction::Outgoing)
    }

    /// In-neighbors of a node (sources linking to it).
    pub fn in_neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(idx, Direction::Incoming)
    }

    /// Out-degree of a node. A self-loop counts once.
    #[must_use]
    pub fn out_degree(&self, idx: NodeIndex) -> usize {
        self.out_neighbors(idx).count()
    }

    /// In-degree of a node. A self-loop counts once.
    #[must_use]
    pub fn in_degree(&self, idx: NodeIndex) -> usize {
        self.in_neighbors(idx).count()
    }

    /// Whether a directed edge exists between two identifiers.
    #[must_use]
    pub fn contains_edge(&self, source: &str, target: &str) -> bool {
        match (self.node_index(source), self.node_index(target)) {
            (Some(s), Some(t)) => self.graph.contains_edge(s, t),
            _ => false,
        }
    }

    /// BLAKE3 fingerprint of the edge set.
    #[must_use]
    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Compute a BLAKE3 hash of the sorted edge list.
fn compute_edge_hash(edges: &[(&str, &str)]) -> String {
    let mut hasher = blake3::Hasher::new();
    for (source, target) in edges {
        hasher.update(source.as_bytes());
        hasher.update(b"\x00");
        hasher.update(target.as_bytes());
        hasher.update(b"\x00");
    }
    format!("blake3:{}", hasher.finalize())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
