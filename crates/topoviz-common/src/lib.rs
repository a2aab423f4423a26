//! ISSI TopoViz Common - Shared types for the datacenter topology model
//!
//! This crate provides the enumerations and error types shared by the
//! topology registry and the projection layer:
//! - Provider classification (headquarters + cloud vendors)
//! - Tier classification (visual weight hierarchy)
//! - Error handling

#![warn(missing_docs)]

pub mod error;
pub mod provider;

pub use error::*;
pub use provider::*;
