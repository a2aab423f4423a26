//! Projection adapter
//!
//! Assembles the full arc and point collections for a rendering call
//! site. Providers and edges are walked in their declared order so the
//! output sequence, including each record's `order` value, is identical
//! across runs.

use std::sync::Arc;

use topoviz_common::Provider;
use topoviz_topology::{GeoNode, LinkTable, Registry};

use crate::geometry::{arc_altitude, provider_color, tier_point_size, HQ_SPOKE_ALTITUDE};
use crate::records::{ArcRecord, PointRecord};

/// Stateless projector over the shared registry and link tables
#[derive(Debug, Clone)]
pub struct Projector {
    registry: Arc<Registry>,
    links: Arc<LinkTable>,
}

impl Projector {
    /// Create a projector over shared topology data
    pub fn new(registry: Arc<Registry>, links: Arc<LinkTable>) -> Self {
        Self { registry, links }
    }

    /// Registry backing this projector
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Generate the full arc collection.
    ///
    /// Walks each cloud provider's edge list in [`Provider::CLOUD`]
    /// order, then appends the headquarters spokes. An edge or spoke
    /// naming an id absent from the registry produces no arc; the
    /// dataset is hand-curated and a stale reference is not an error.
    pub fn arcs(&self) -> Vec<ArcRecord> {
        let mut arcs = Vec::with_capacity(self.links.edge_count() + self.links.hq_targets().len());
        let mut order = 1u32;

        for provider in Provider::CLOUD {
            let color = provider_color(provider);
            for edge in self.links.edges_for_provider(provider) {
                let (start, end) = match (
                    self.registry.get_by_id(&edge.start),
                    self.registry.get_by_id(&edge.end),
                ) {
                    (Some(s), Some(e)) => (s, e),
                    _ => {
                        tracing::debug!(start = %edge.start, end = %edge.end, "skipping arc with unknown endpoint");
                        continue;
                    }
                };

                arcs.push(ArcRecord {
                    order,
                    start_lat: start.latitude,
                    start_lng: start.longitude,
                    end_lat: end.latitude,
                    end_lng: end.longitude,
                    arc_alt: arc_altitude(start, end),
                    color: color.to_string(),
                });
                order += 1;
            }
        }

        let hq = self.registry.hq_node();
        let hq_color = provider_color(hq.provider);
        for target_id in self.links.hq_targets() {
            let Some(target) = self.registry.get_by_id(target_id) else {
                tracing::debug!(target = %target_id, "skipping HQ spoke with unknown target");
                continue;
            };

            arcs.push(ArcRecord {
                order,
                start_lat: hq.latitude,
                start_lng: hq.longitude,
                end_lat: target.latitude,
                end_lng: target.longitude,
                arc_alt: HQ_SPOKE_ALTITUDE,
                color: hq_color.to_string(),
            });
            order += 1;
        }

        arcs
    }

    /// Generate one marker per registry node, in registry order
    pub fn points(&self) -> Vec<PointRecord> {
        self.registry.nodes().iter().map(point_for_node).collect()
    }
}

fn point_for_node(node: &GeoNode) -> PointRecord {
    PointRecord {
        lat: node.latitude,
        lng: node.longitude,
        size: tier_point_size(node.tier),
        color: provider_color(node.provider).to_string(),
        label: node.name.clone(),
        tier: node.tier,
        provider: node.provider,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use topoviz_common::Tier;

    fn projector() -> Projector {
        Projector::new(
            Arc::new(Registry::builtin().unwrap()),
            Arc::new(LinkTable::builtin()),
        )
    }

    #[test]
    fn test_order_is_sequential_from_one() {
        let arcs = projector().arcs();
        assert!(!arcs.is_empty());
        for (i, arc) in arcs.iter().enumerate() {
            assert_eq!(arc.order as usize, i + 1);
        }
    }

    #[test]
    fn test_arc_count_matches_tables() {
        let p = projector();
        // Builtin data has no dangling references, so every edge and
        // spoke yields exactly one arc.
        let expected = LinkTable::builtin().edge_count() + LinkTable::builtin().hq_targets().len();
        assert_eq!(p.arcs().len(), expected);
    }

    #[test]
    fn test_hq_spokes_use_hq_color_and_fixed_altitude() {
        let p = projector();
        let arcs = p.arcs();
        let spokes = &arcs[arcs.len() - LinkTable::builtin().hq_targets().len()..];

        let hq_color = provider_color(Provider::Headquarters);
        for spoke in spokes {
            assert_eq!(spoke.arc_alt, HQ_SPOKE_ALTITUDE);
            assert_eq!(spoke.color, hq_color);
            assert_eq!(spoke.start_lat, 38.9912);
            assert_eq!(spoke.start_lng, -76.8751);
        }
    }

    #[test]
    fn test_one_point_per_node() {
        let p = projector();
        let points = p.points();
        assert_eq!(points.len(), p.registry().len());

        for (point, node) in points.iter().zip(p.registry().nodes()) {
            assert_eq!(point.lat, node.latitude);
            assert_eq!(point.lng, node.longitude);
            assert_eq!(point.size, tier_point_size(node.tier));
            assert_eq!(point.color, provider_color(node.provider));
            assert_eq!(point.label, node.name);
        }
    }

    #[test]
    fn test_hq_point_size() {
        let points = projector().points();
        let hq = points
            .iter()
            .find(|p| p.provider == Provider::Headquarters)
            .unwrap();
        assert_eq!(hq.size, tier_point_size(Tier::Headquarters));
    }
}
