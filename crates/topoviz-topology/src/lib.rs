//! ISSI TopoViz Topology - Datacenter registry and network link tables
//!
//! Models the ISSI point-of-presence graph: the Greenbelt headquarters
//! node plus cloud-provider regions, with per-provider connection lists
//! and the headquarters spoke targets.
//!
//! All data is static, compiled-in configuration. The [`Registry`] and
//! [`LinkTable`] are immutable after construction, so they are shared
//! between rendering call sites without coordination.

#![warn(missing_docs)]

pub mod data;
pub mod links;
pub mod node;
pub mod registry;
pub mod stats;

pub use links::{LinkTable, TopologyEdge};
pub use node::GeoNode;
pub use registry::Registry;
pub use stats::RegistryStatistics;
