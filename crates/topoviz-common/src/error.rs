//! Error types for ISSI TopoViz

use thiserror::Error;

/// Topology error type
#[derive(Error, Debug)]
pub enum TopologyError {
    /// No headquarters node in the registry
    #[error("registry has no headquarters node")]
    MissingHeadquarters,

    /// More than one headquarters node
    #[error("duplicate headquarters node: {0}")]
    DuplicateHeadquarters(String),

    /// Node id appears more than once
    #[error("duplicate node id: {0}")]
    DuplicateNode(String),

    /// Latitude or longitude out of range
    #[error("node {id} has out-of-range coordinates ({lat}, {lng})")]
    InvalidCoordinates {
        /// Offending node id
        id: String,
        /// Latitude in degrees
        lat: f64,
        /// Longitude in degrees
        lng: f64,
    },

    /// Headquarters node carries a non-headquarters tier (or vice versa)
    #[error("node {0}: headquarters provider and tier must match")]
    MismatchedHeadquartersTier(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for ISSI TopoViz
pub type TopoResult<T> = Result<T, TopologyError>;
