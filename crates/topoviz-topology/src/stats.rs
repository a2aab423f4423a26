//! Registry aggregate statistics
//!
//! Descriptive reporting for dashboards and the services map sidebar;
//! nothing here feeds the geometry engine.

use serde::{Deserialize, Serialize};
use topoviz_common::{Provider, Tier};

use crate::node::GeoNode;

/// Aggregate node counts
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegistryStatistics {
    /// Total node count
    pub total: usize,
    /// Counts by provider
    pub by_provider: ProviderCounts,
    /// Counts by tier
    pub by_tier: TierCounts,
    /// Counts by coarse region group
    pub by_region_group: RegionGroupCounts,
}

/// Node counts per provider
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCounts {
    /// Headquarters nodes (always 1 in a valid registry)
    pub headquarters: usize,
    /// AWS regions
    pub aws: usize,
    /// Azure regions
    pub azure: usize,
    /// GCP regions
    pub gcp: usize,
}

/// Node counts per tier
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TierCounts {
    /// Headquarters tier
    pub headquarters: usize,
    /// Primary regions
    pub primary: usize,
    /// Secondary regions
    pub secondary: usize,
}

/// Node counts per coarse region group, classified by substring match
/// on the free-text region label
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegionGroupCounts {
    /// Region label mentions an American continent
    pub americas: usize,
    /// Europe, Middle East, Africa
    pub emea: usize,
    /// Asia, Pacific, Australia
    pub asia_pacific: usize,
    /// Anything else
    pub other: usize,
}

impl RegistryStatistics {
    /// Compute statistics over a node slice
    pub fn from_nodes(nodes: &[GeoNode]) -> Self {
        let mut stats = Self {
            total: nodes.len(),
            ..Self::default()
        };

        for node in nodes {
            match node.provider {
                Provider::Headquarters => stats.by_provider.headquarters += 1,
                Provider::Aws => stats.by_provider.aws += 1,
                Provider::Azure => stats.by_provider.azure += 1,
                Provider::Gcp => stats.by_provider.gcp += 1,
            }
            match node.tier {
                Tier::Headquarters => stats.by_tier.headquarters += 1,
                Tier::Primary => stats.by_tier.primary += 1,
                Tier::Secondary => stats.by_tier.secondary += 1,
            }

            let region = node.region.as_str();
            if region.contains("America") {
                stats.by_region_group.americas += 1;
            } else if region.contains("Europe")
                || region.contains("Middle East")
                || region.contains("Africa")
            {
                stats.by_region_group.emea += 1;
            } else if region.contains("Asia")
                || region.contains("Pacific")
                || region.contains("Australia")
            {
                stats.by_region_group.asia_pacific += 1;
            } else {
                stats.by_region_group.other += 1;
            }
        }

        stats
    }
}
