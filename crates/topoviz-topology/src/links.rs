//! Network link tables
//!
//! Per-provider intra-network connection lists plus the headquarters
//! spoke targets. Edges are undirected in meaning but stored with a
//! fixed start/end so derived arcs keep a deterministic orientation.
//!
//! No validation happens here: ids referencing nodes absent from the
//! registry stay in the table and are skipped at projection time. The
//! dataset is hand-curated, so a stale reference must never take the
//! visualization down.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use topoviz_common::Provider;

/// A declared connection between two nodes inside one provider's network
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopologyEdge {
    /// Start node id
    pub start: String,
    /// End node id
    pub end: String,
}

impl TopologyEdge {
    /// Create an edge
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// True when the edge touches the given node id at either endpoint
    pub fn touches(&self, id: &str) -> bool {
        self.start == id || self.end == id
    }
}

/// Static per-provider edge lists and headquarters spoke targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkTable {
    edges: HashMap<Provider, Vec<TopologyEdge>>,
    hq_targets: Vec<String>,
}

impl LinkTable {
    /// Build a table from explicit per-provider lists
    pub fn new(edges: HashMap<Provider, Vec<TopologyEdge>>, hq_targets: Vec<String>) -> Self {
        Self { edges, hq_targets }
    }

    /// The compiled-in production link set
    pub fn builtin() -> Self {
        crate::data::builtin_links()
    }

    /// Edges declared for one provider; empty for providers with none
    pub fn edges_for_provider(&self, provider: Provider) -> &[TopologyEdge] {
        self.edges.get(&provider).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Headquarters spoke target ids
    pub fn hq_targets(&self) -> &[String] {
        &self.hq_targets
    }

    /// Total declared edge count across all providers (spokes excluded)
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Diagnostic: unordered pairs appearing more than once within a
    /// single provider's list.
    ///
    /// The table tolerates duplicates (each occurrence produces its own
    /// arc); this exists for dataset curation, not enforcement.
    pub fn debug_duplicate_pairs(&self) -> Vec<(Provider, TopologyEdge)> {
        let mut duplicates = Vec::new();
        for provider in Provider::CLOUD {
            let mut seen = HashSet::new();
            for edge in self.edges_for_provider(provider) {
                let mut key = [edge.start.as_str(), edge.end.as_str()];
                key.sort_unstable();
                if !seen.insert([key[0].to_string(), key[1].to_string()]) {
                    duplicates.push((provider, edge.clone()));
                }
            }
        }
        duplicates
    }
}
