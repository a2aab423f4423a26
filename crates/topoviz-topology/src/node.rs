//! Datacenter node definition

use serde::{Deserialize, Serialize};
use topoviz_common::{Provider, Tier};

/// A single geographic point of presence (headquarters or cloud region)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoNode {
    /// Unique identifier, stable across registry and link tables
    pub id: String,
    /// Owning provider
    pub provider: Provider,
    /// Human-readable display label
    pub name: String,
    /// Latitude in decimal degrees, [-90, 90]
    pub latitude: f64,
    /// Longitude in decimal degrees, [-180, 180]
    pub longitude: f64,
    /// Geographic grouping label, used for statistics only
    pub region: String,
    /// Importance tier
    pub tier: Tier,
    /// Provider-native region code, display only
    pub code: String,
}

impl GeoNode {
    /// Create a node
    pub fn new(
        id: &str,
        provider: Provider,
        name: &str,
        latitude: f64,
        longitude: f64,
        region: &str,
        tier: Tier,
        code: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            provider,
            name: name.to_string(),
            latitude,
            longitude,
            region: region.to_string(),
            tier,
            code: code.to_string(),
        }
    }

    /// True when latitude and longitude fall within valid bounds
    pub fn coordinates_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}
