//! Nearest-entity query.
//!
//! A plain linear scan: the fleet is tens of entities, so an O(n) pass per
//! pickup selection is far below any threshold where a spatial index would
//! pay for itself.  The contract still holds for arbitrarily large fleets.

use rf_core::GeoPoint;

use crate::store::{FleetEntity, FleetStore};

/// Result of a proximity query: the winning entity and its great-circle
/// distance from the query point.
#[derive(Debug, PartialEq)]
pub struct Nearest<'a> {
    pub entity: &'a FleetEntity,
    pub distance_m: f64,
}

/// The fleet entity closest to `query`, or `None` for an empty fleet.
///
/// Ties keep the first entity in store order — the strict `<` comparison
/// never replaces an equal-distance incumbent.
pub fn nearest<'a>(query: GeoPoint, fleet: &'a FleetStore) -> Option<Nearest<'a>> {
    let mut best: Option<Nearest<'a>> = None;

    for entity in fleet.entities() {
        let distance_m = query.distance_m(entity.position);
        match &best {
            Some(b) if distance_m >= b.distance_m => {}
            _ => best = Some(Nearest { entity, distance_m }),
        }
    }

    best
}
