//! `FleetStore` — owns all fleet entities for one session.

use rf_core::{Bounds, EngineRng, EntityId, GeoPoint};

// ── FleetEntity ───────────────────────────────────────────────────────────────

/// One simulated vehicle: a position inside the service envelope and a
/// heading for the marker icon.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetEntity {
    pub id: EntityId,
    pub position: GeoPoint,
    /// Marker rotation in degrees, [0, 360).
    pub heading_deg: f64,
}

// ── FleetStore ────────────────────────────────────────────────────────────────

/// Owns the fleet.  Entities are created in one batch and replaced in one
/// batch; there is no per-entity lifecycle.
///
/// Iteration order is insertion order (`car-0`, `car-1`, …), which is what
/// makes proximity tie-breaking stable.
#[derive(Default)]
pub struct FleetStore {
    entities: Vec<FleetEntity>,
}

impl FleetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire fleet with `count` freshly sampled entities.
    ///
    /// Positions are uniform inside `bounds`, headings uniform in [0, 360).
    /// The new batch is fully built before the old one is dropped, so a
    /// reader never observes a partial fleet.
    pub fn populate(&mut self, bounds: Bounds, count: usize, rng: &mut EngineRng) {
        let sw = bounds.southwest();
        let ne = bounds.northeast();

        let mut batch = Vec::with_capacity(count);
        for i in 0..count {
            // gen_range panics on an empty range; a degenerate (zero-area)
            // envelope still has exactly one valid position.
            let lat = if sw.lat < ne.lat { rng.gen_range(sw.lat..ne.lat) } else { sw.lat };
            let lng = if sw.lng < ne.lng { rng.gen_range(sw.lng..ne.lng) } else { sw.lng };
            batch.push(FleetEntity {
                id: EntityId::indexed(i),
                position: GeoPoint::new(lat, lng),
                heading_deg: rng.gen_range(0.0..360.0),
            });
        }

        self.entities = batch;
        tracing::info!(count, "fleet populated");
    }

    /// Build a store from explicit entities — tests place hand-crafted fleets.
    #[cfg(test)]
    pub(crate) fn from_entities(entities: Vec<FleetEntity>) -> Self {
        Self { entities }
    }

    /// All entities in insertion order.
    #[inline]
    pub fn entities(&self) -> &[FleetEntity] {
        &self.entities
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
