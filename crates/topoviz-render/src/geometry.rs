//! Arc geometry
//!
//! Pure functions from node pairs to visual arc parameters. The altitude
//! heuristic is presentation-only: longer hops and flagship regions get
//! taller arcs. Thresholds are part of the renderer contract, so they
//! never change without a matching fixture update.

use topoviz_common::{Provider, Tier};
use topoviz_topology::GeoNode;

/// Altitude for headquarters spoke arcs
pub const HQ_SPOKE_ALTITUDE: f64 = 0.4;

/// Great-circle distance between two coordinates
pub fn haversine_distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    const R: f64 = 6371.0; // Earth radius in km

    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().asin();
    R * c
}

/// Visual arc altitude for an edge between two nodes.
///
/// Distance buckets at 2,000 km and 5,000 km; a primary endpoint on
/// either side bumps the bucket's altitude one step.
pub fn arc_altitude(start: &GeoNode, end: &GeoNode) -> f64 {
    let d = haversine_distance_km(start.latitude, start.longitude, end.latitude, end.longitude);
    let is_primary = start.tier.is_primary() || end.tier.is_primary();

    if d > 5000.0 {
        if is_primary {
            0.6
        } else {
            0.5
        }
    } else if d > 2000.0 {
        if is_primary {
            0.4
        } else {
            0.3
        }
    } else if is_primary {
        0.2
    } else {
        0.1
    }
}

/// Arc and marker color per provider
pub fn provider_color(provider: Provider) -> &'static str {
    match provider {
        Provider::Headquarters => "rgba(220, 38, 38, 0.9)",
        Provider::Aws => "rgba(255, 153, 0, 0.85)",
        Provider::Azure => "rgba(0, 120, 212, 0.85)",
        Provider::Gcp => "rgba(66, 133, 244, 0.85)",
    }
}

/// Marker size per tier
pub fn tier_point_size(tier: Tier) -> f64 {
    match tier {
        Tier::Headquarters => 0.6,
        Tier::Primary => 0.45,
        Tier::Secondary => 0.3,
    }
}
