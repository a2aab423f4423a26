//! Renderer-boundary record shapes
//!
//! These serialize to the exact JSON shapes the globe and services-map
//! components consume, hence the camelCase field names.

use serde::{Deserialize, Serialize};
use topoviz_common::{Provider, Tier};

/// One visual connection between two nodes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArcRecord {
    /// Sequence number, assigned from 1 in generation order
    pub order: u32,
    /// Start latitude in degrees
    pub start_lat: f64,
    /// Start longitude in degrees
    pub start_lng: f64,
    /// End latitude in degrees
    pub end_lat: f64,
    /// End longitude in degrees
    pub end_lng: f64,
    /// Visual arc altitude
    pub arc_alt: f64,
    /// RGBA color string
    pub color: String,
}

/// One visual node marker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PointRecord {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
    /// Marker size from the node tier
    pub size: f64,
    /// RGBA color string from the node provider
    pub color: String,
    /// Display label
    pub label: String,
    /// Node tier
    pub tier: Tier,
    /// Node provider
    pub provider: Provider,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_serializes_camel_case() {
        let arc = ArcRecord {
            order: 1,
            start_lat: 38.9912,
            start_lng: -76.8751,
            end_lat: 1.3521,
            end_lng: 103.8198,
            arc_alt: 0.5,
            color: "rgba(220, 38, 38, 0.9)".into(),
        };
        let json = serde_json::to_string(&arc).unwrap();
        assert!(json.contains("\"startLat\":38.9912"));
        assert!(json.contains("\"arcAlt\":0.5"));
        assert!(!json.contains("start_lat"));
    }

    #[test]
    fn test_point_serializes_camel_case() {
        let point = PointRecord {
            lat: 38.9912,
            lng: -76.8751,
            size: 0.6,
            color: "rgba(220, 38, 38, 0.9)".into(),
            label: "ISSI Headquarters".into(),
            tier: Tier::Headquarters,
            provider: Provider::Headquarters,
        };
        let json = serde_json::to_string(&point).unwrap();
        assert!(json.contains("\"tier\":\"headquarters\""));
        assert!(json.contains("\"provider\":\"headquarters\""));
    }
}
