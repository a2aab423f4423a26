//! Provider and tier classifications

use serde::{Deserialize, Serialize};

/// Network provider owning a datacenter node
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// The single ISSI headquarters node
    Headquarters,
    /// Amazon Web Services
    Aws,
    /// Microsoft Azure
    Azure,
    /// Google Cloud Platform
    Gcp,
}

impl Provider {
    /// Cloud vendors in their fixed iteration order.
    ///
    /// Arc generation walks providers in this order; reordering changes
    /// the `order` sequence of every derived arc collection.
    pub const CLOUD: [Provider; 3] = [Provider::Aws, Provider::Azure, Provider::Gcp];

    /// Display name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Headquarters => "ISSI HQ",
            Self::Aws => "AWS",
            Self::Azure => "Azure",
            Self::Gcp => "Google Cloud",
        }
    }

    /// True for the headquarters pseudo-provider
    pub fn is_headquarters(&self) -> bool {
        matches!(self, Self::Headquarters)
    }
}

/// Node importance tier, drives visual size and arc altitude
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// The headquarters node itself
    Headquarters,
    /// Flagship region for its provider
    Primary,
    /// Standard region
    Secondary,
}

impl Tier {
    /// True for flagship regions
    pub fn is_primary(&self) -> bool {
        matches!(self, Self::Primary)
    }
}
