//! ISSI TopoViz Render - Geometry engine and projection adapter
//!
//! Turns the static datacenter registry and link tables into the record
//! collections the globe and services-map renderers consume:
//!
//! - [`geometry`]: Haversine distance, the arc-altitude heuristic, and
//!   the provider color palette
//! - [`records`]: renderer-boundary [`ArcRecord`] / [`PointRecord`] shapes
//! - [`projector`]: the [`Projector`] that assembles full collections
//!
//! Everything here is a pure transform over immutable data; collections
//! are recomputed per call and never cached.

#![warn(missing_docs)]

pub mod geometry;
pub mod projector;
pub mod records;

pub use geometry::{arc_altitude, haversine_distance_km, provider_color, tier_point_size};
pub use projector::Projector;
pub use records::{ArcRecord, PointRecord};
