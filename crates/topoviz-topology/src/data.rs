//! Compiled-in production dataset
//!
//! The active ISSI point-of-presence catalog: the Greenbelt headquarters
//! plus the cloud regions ISSI deploys into, and the declared network
//! links between them. Hand-curated; edit here, validation happens in
//! [`Registry::new`](crate::registry::Registry::new).

use std::collections::HashMap;

use topoviz_common::{Provider, Tier};

use crate::links::{LinkTable, TopologyEdge};
use crate::node::GeoNode;

/// The active node catalog
pub fn builtin_nodes() -> Vec<GeoNode> {
    vec![
        GeoNode::new(
            "issi-hq",
            Provider::Headquarters,
            "ISSI Headquarters",
            38.9912,
            -76.8751,
            "North America",
            Tier::Headquarters,
            "HQ",
        ),
        // AWS
        GeoNode::new(
            "aws-us-east-1",
            Provider::Aws,
            "AWS US East (N. Virginia)",
            38.9519,
            -77.4480,
            "North America",
            Tier::Primary,
            "us-east-1",
        ),
        GeoNode::new(
            "aws-us-west-2",
            Provider::Aws,
            "AWS US West (Oregon)",
            45.8399,
            -119.7006,
            "North America",
            Tier::Secondary,
            "us-west-2",
        ),
        GeoNode::new(
            "aws-eu-west-1",
            Provider::Aws,
            "AWS Europe (Ireland)",
            53.3498,
            -6.2603,
            "Europe",
            Tier::Primary,
            "eu-west-1",
        ),
        GeoNode::new(
            "aws-eu-central-1",
            Provider::Aws,
            "AWS Europe (Frankfurt)",
            50.1109,
            8.6821,
            "Europe",
            Tier::Secondary,
            "eu-central-1",
        ),
        GeoNode::new(
            "aws-ap-southeast-1",
            Provider::Aws,
            "AWS Asia Pacific (Singapore)",
            1.3521,
            103.8198,
            "Asia Pacific",
            Tier::Secondary,
            "ap-southeast-1",
        ),
        GeoNode::new(
            "aws-ap-northeast-1",
            Provider::Aws,
            "AWS Asia Pacific (Tokyo)",
            35.6762,
            139.6503,
            "Asia Pacific",
            Tier::Primary,
            "ap-northeast-1",
        ),
        GeoNode::new(
            "aws-sa-east-1",
            Provider::Aws,
            "AWS South America (São Paulo)",
            -23.5505,
            -46.6333,
            "South America",
            Tier::Secondary,
            "sa-east-1",
        ),
        // Azure
        GeoNode::new(
            "azure-eastus",
            Provider::Azure,
            "Azure East US (Virginia)",
            37.3719,
            -79.8164,
            "North America",
            Tier::Primary,
            "eastus",
        ),
        GeoNode::new(
            "azure-westus2",
            Provider::Azure,
            "Azure West US 2 (Washington)",
            47.2529,
            -119.8523,
            "North America",
            Tier::Secondary,
            "westus2",
        ),
        GeoNode::new(
            "azure-westeurope",
            Provider::Azure,
            "Azure West Europe (Netherlands)",
            52.3676,
            4.9041,
            "Europe",
            Tier::Primary,
            "westeurope",
        ),
        GeoNode::new(
            "azure-uksouth",
            Provider::Azure,
            "Azure UK South (London)",
            51.5074,
            -0.1278,
            "Europe",
            Tier::Secondary,
            "uksouth",
        ),
        GeoNode::new(
            "azure-southeastasia",
            Provider::Azure,
            "Azure Southeast Asia (Singapore)",
            1.2897,
            103.8501,
            "Asia Pacific",
            Tier::Secondary,
            "southeastasia",
        ),
        GeoNode::new(
            "azure-australiaeast",
            Provider::Azure,
            "Azure Australia East (Sydney)",
            -33.8688,
            151.2093,
            "Asia Pacific",
            Tier::Secondary,
            "australiaeast",
        ),
        // GCP
        GeoNode::new(
            "gcp-us-central1",
            Provider::Gcp,
            "GCP US Central (Iowa)",
            41.2619,
            -95.8608,
            "North America",
            Tier::Primary,
            "us-central1",
        ),
        GeoNode::new(
            "gcp-us-east4",
            Provider::Gcp,
            "GCP US East (N. Virginia)",
            38.7465,
            -77.4838,
            "North America",
            Tier::Secondary,
            "us-east4",
        ),
        GeoNode::new(
            "gcp-europe-west1",
            Provider::Gcp,
            "GCP Europe West (Belgium)",
            50.4706,
            3.8170,
            "Europe",
            Tier::Primary,
            "europe-west1",
        ),
        GeoNode::new(
            "gcp-asia-south1",
            Provider::Gcp,
            "GCP Asia South (Mumbai)",
            19.0760,
            72.8777,
            "Asia Pacific",
            Tier::Secondary,
            "asia-south1",
        ),
        GeoNode::new(
            "gcp-asia-east1",
            Provider::Gcp,
            "GCP Asia East (Taiwan)",
            24.0717,
            120.5624,
            "Asia Pacific",
            Tier::Secondary,
            "asia-east1",
        ),
    ]
}

/// The active link set
pub fn builtin_links() -> LinkTable {
    let mut edges = HashMap::new();

    edges.insert(
        Provider::Aws,
        vec![
            TopologyEdge::new("aws-us-east-1", "aws-us-west-2"),
            TopologyEdge::new("aws-us-east-1", "aws-eu-west-1"),
            TopologyEdge::new("aws-us-east-1", "aws-sa-east-1"),
            TopologyEdge::new("aws-eu-west-1", "aws-eu-central-1"),
            TopologyEdge::new("aws-eu-central-1", "aws-ap-southeast-1"),
            TopologyEdge::new("aws-ap-southeast-1", "aws-ap-northeast-1"),
            TopologyEdge::new("aws-us-west-2", "aws-ap-northeast-1"),
        ],
    );
    edges.insert(
        Provider::Azure,
        vec![
            TopologyEdge::new("azure-eastus", "azure-westus2"),
            TopologyEdge::new("azure-eastus", "azure-westeurope"),
            TopologyEdge::new("azure-westeurope", "azure-uksouth"),
            TopologyEdge::new("azure-westeurope", "azure-southeastasia"),
            TopologyEdge::new("azure-southeastasia", "azure-australiaeast"),
        ],
    );
    edges.insert(
        Provider::Gcp,
        vec![
            TopologyEdge::new("gcp-us-central1", "gcp-us-east4"),
            TopologyEdge::new("gcp-us-central1", "gcp-europe-west1"),
            TopologyEdge::new("gcp-europe-west1", "gcp-asia-south1"),
            TopologyEdge::new("gcp-asia-south1", "gcp-asia-east1"),
        ],
    );

    let hq_targets = vec![
        "aws-us-east-1".to_string(),
        "azure-eastus".to_string(),
        "gcp-us-central1".to_string(),
        "aws-eu-west-1".to_string(),
        "azure-southeastasia".to_string(),
    ];

    LinkTable::new(edges, hq_targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_single_hq() {
        let hqs: Vec<_> = builtin_nodes()
            .into_iter()
            .filter(|n| n.provider.is_headquarters())
            .collect();
        assert_eq!(hqs.len(), 1);
        assert_eq!(hqs[0].id, "issi-hq");
    }

    #[test]
    fn test_all_link_refs_resolve() {
        let ids: HashSet<String> = builtin_nodes().into_iter().map(|n| n.id).collect();
        let links = builtin_links();

        for provider in Provider::CLOUD {
            for edge in links.edges_for_provider(provider) {
                assert!(ids.contains(&edge.start), "dangling start {}", edge.start);
                assert!(ids.contains(&edge.end), "dangling end {}", edge.end);
            }
        }
        for target in links.hq_targets() {
            assert!(ids.contains(target), "dangling HQ target {target}");
        }
    }

    #[test]
    fn test_edges_stay_inside_their_provider() {
        let by_id: HashMap<String, Provider> = builtin_nodes()
            .into_iter()
            .map(|n| (n.id, n.provider))
            .collect();
        let links = builtin_links();

        for provider in Provider::CLOUD {
            for edge in links.edges_for_provider(provider) {
                assert_eq!(by_id[&edge.start], provider, "{}", edge.start);
                assert_eq!(by_id[&edge.end], provider, "{}", edge.end);
            }
        }
    }
}
