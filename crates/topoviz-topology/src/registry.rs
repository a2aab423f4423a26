//! Datacenter registry
//!
//! Validated, immutable catalog of [`GeoNode`] records with id-indexed
//! lookup. Construction is the configuration-integrity gate: a registry
//! that builds successfully is guaranteed to hold exactly one
//! headquarters node, unique ids, and in-range coordinates.

use std::collections::HashMap;

use topoviz_common::{Provider, Tier, TopoResult, TopologyError};

use crate::node::GeoNode;
use crate::stats::RegistryStatistics;

/// Immutable datacenter catalog
#[derive(Debug, Clone)]
pub struct Registry {
    nodes: Vec<GeoNode>,
    by_id: HashMap<String, usize>,
    hq_index: usize,
}

impl Registry {
    /// Build a registry, validating configuration integrity.
    ///
    /// Fails fast on a missing or duplicated headquarters node, duplicate
    /// ids, out-of-range coordinates, or a headquarters provider/tier
    /// mismatch. Dangling link-table references are NOT checked here;
    /// those are tolerated at projection time.
    pub fn new(nodes: Vec<GeoNode>) -> TopoResult<Self> {
        let mut by_id = HashMap::with_capacity(nodes.len());
        let mut hq_index = None;

        for (idx, node) in nodes.iter().enumerate() {
            if !node.coordinates_in_range() {
                return Err(TopologyError::InvalidCoordinates {
                    id: node.id.clone(),
                    lat: node.latitude,
                    lng: node.longitude,
                });
            }
            if by_id.insert(node.id.clone(), idx).is_some() {
                return Err(TopologyError::DuplicateNode(node.id.clone()));
            }

            let hq_provider = node.provider.is_headquarters();
            let hq_tier = node.tier == Tier::Headquarters;
            if hq_provider != hq_tier {
                return Err(TopologyError::MismatchedHeadquartersTier(node.id.clone()));
            }
            if hq_provider {
                if hq_index.is_some() {
                    return Err(TopologyError::DuplicateHeadquarters(node.id.clone()));
                }
                hq_index = Some(idx);
            }
        }

        let hq_index = hq_index.ok_or(TopologyError::MissingHeadquarters)?;

        tracing::info!(
            nodes = nodes.len(),
            hq = %nodes[hq_index].id,
            "datacenter registry loaded"
        );

        Ok(Self {
            nodes,
            by_id,
            hq_index,
        })
    }

    /// Build the compiled-in production registry
    pub fn builtin() -> TopoResult<Self> {
        Self::new(crate::data::builtin_nodes())
    }

    /// Load a registry from a JSON array of nodes
    pub fn from_json(json: &str) -> TopoResult<Self> {
        let nodes: Vec<GeoNode> = serde_json::from_str(json)?;
        Self::new(nodes)
    }

    /// Look up a node by id
    pub fn get_by_id(&self, id: &str) -> Option<&GeoNode> {
        self.by_id.get(id).map(|&idx| &self.nodes[idx])
    }

    /// All nodes for one provider, in registry order
    pub fn get_by_provider(&self, provider: Provider) -> Vec<&GeoNode> {
        self.nodes
            .iter()
            .filter(|n| n.provider == provider)
            .collect()
    }

    /// The headquarters node, guaranteed unique by construction
    pub fn hq_node(&self) -> &GeoNode {
        &self.nodes[self.hq_index]
    }

    /// All nodes in registry order
    pub fn nodes(&self) -> &[GeoNode] {
        &self.nodes
    }

    /// Node count
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the registry holds no nodes (never true post-validation)
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Aggregate counts by provider, tier, and coarse region group
    pub fn statistics(&self) -> RegistryStatistics {
        RegistryStatistics::from_nodes(&self.nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hq() -> GeoNode {
        GeoNode::new(
            "issi-hq",
            Provider::Headquarters,
            "ISSI Headquarters",
            38.9912,
            -76.8751,
            "North America",
            Tier::Headquarters,
            "HQ",
        )
    }

    fn region(id: &str) -> GeoNode {
        GeoNode::new(
            id,
            Provider::Aws,
            "Region",
            1.0,
            2.0,
            "Europe",
            Tier::Secondary,
            "r-1",
        )
    }

    #[test]
    fn test_missing_hq_rejected() {
        let err = Registry::new(vec![region("a")]).unwrap_err();
        assert!(matches!(err, TopologyError::MissingHeadquarters));
    }

    #[test]
    fn test_duplicate_hq_rejected() {
        let mut second = hq();
        second.id = "issi-hq-2".into();
        let err = Registry::new(vec![hq(), second]).unwrap_err();
        assert!(matches!(err, TopologyError::DuplicateHeadquarters(_)));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = Registry::new(vec![hq(), region("a"), region("a")]).unwrap_err();
        assert!(matches!(err, TopologyError::DuplicateNode(_)));
    }

    #[test]
    fn test_out_of_range_coordinates_rejected() {
        let mut bad = region("a");
        bad.longitude = 181.0;
        let err = Registry::new(vec![hq(), bad]).unwrap_err();
        assert!(matches!(err, TopologyError::InvalidCoordinates { .. }));
    }

    #[test]
    fn test_hq_tier_mismatch_rejected() {
        let mut bad = region("a");
        bad.tier = Tier::Headquarters;
        let err = Registry::new(vec![hq(), bad]).unwrap_err();
        assert!(matches!(err, TopologyError::MismatchedHeadquartersTier(_)));
    }

    #[test]
    fn test_lookup_and_hq() {
        let reg = Registry::new(vec![hq(), region("a"), region("b")]).unwrap();
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.get_by_id("a").unwrap().id, "a");
        assert!(reg.get_by_id("missing").is_none());
        assert_eq!(reg.hq_node().id, "issi-hq");
        assert_eq!(reg.hq_node().latitude, 38.9912);
        assert_eq!(reg.hq_node().longitude, -76.8751);
    }

    #[test]
    fn test_provider_filter_preserves_order() {
        let reg = Registry::new(vec![hq(), region("a"), region("b")]).unwrap();
        let aws: Vec<_> = reg
            .get_by_provider(Provider::Aws)
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(aws, vec!["a", "b"]);
        assert!(reg.get_by_provider(Provider::Gcp).is_empty());
    }

    #[test]
    fn test_from_json_roundtrip() {
        let json = serde_json::to_string(&vec![hq(), region("a")]).unwrap();
        let reg = Registry::from_json(&json).unwrap();
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.hq_node().id, "issi-hq");
    }

    #[test]
    fn test_builtin_is_valid() {
        let reg = Registry::builtin().unwrap();
        assert_eq!(reg.hq_node().id, "issi-hq");
        assert!(reg.len() > 1);
    }
}
