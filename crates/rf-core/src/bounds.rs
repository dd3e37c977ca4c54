//! Fixed geographic envelope and viewport correction.
//!
//! The engine operates inside one rectangular service area fixed at session
//! start.  `Bounds` answers containment and clamping queries; `BoundsGuard`
//! turns those into the viewport-correction contract the map layer consumes.

use crate::error::{CoreError, RfResult};
use crate::geo::GeoPoint;

// ── Bounds ────────────────────────────────────────────────────────────────────

/// A rectangular geographic envelope, southwest/northeast corners inclusive.
///
/// Invariant: `southwest.lat <= northeast.lat` and
/// `southwest.lng <= northeast.lng`.  Enforced at construction; the value is
/// never mutated afterwards.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    southwest: GeoPoint,
    northeast: GeoPoint,
}

impl Bounds {
    /// Build a bounds rectangle, validating corner ordering.
    pub fn new(southwest: GeoPoint, northeast: GeoPoint) -> RfResult<Self> {
        if southwest.lat > northeast.lat || southwest.lng > northeast.lng {
            return Err(CoreError::InvalidBounds { southwest, northeast });
        }
        Ok(Self { southwest, northeast })
    }

    /// Re-check corner ranges and ordering.
    ///
    /// Deserialization bypasses [`Bounds::new`], so configs that arrive
    /// over the wire get re-validated here.
    pub(crate) fn revalidate(&self) -> RfResult<()> {
        GeoPoint::try_new(self.southwest.lat, self.southwest.lng)?;
        GeoPoint::try_new(self.northeast.lat, self.northeast.lng)?;
        Self::new(self.southwest, self.northeast)?;
        Ok(())
    }

    #[inline]
    pub fn southwest(&self) -> GeoPoint {
        self.southwest
    }

    #[inline]
    pub fn northeast(&self) -> GeoPoint {
        self.northeast
    }

    /// `true` iff both coordinates of `p` lie within the closed intervals.
    #[inline]
    pub fn contains(&self, p: GeoPoint) -> bool {
        (self.southwest.lat..=self.northeast.lat).contains(&p.lat)
            && (self.southwest.lng..=self.northeast.lng).contains(&p.lng)
    }

    /// Clamp each coordinate of `p` independently into the envelope.
    ///
    /// Idempotent: clamping an already-clamped point is the identity, and
    /// `contains(clamp(p))` always holds.
    #[inline]
    pub fn clamp(&self, p: GeoPoint) -> GeoPoint {
        GeoPoint::new(
            p.lat.clamp(self.southwest.lat, self.northeast.lat),
            p.lng.clamp(self.southwest.lng, self.northeast.lng),
        )
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} .. {}]", self.southwest, self.northeast)
    }
}

// ── BoundsGuard ───────────────────────────────────────────────────────────────

/// Keeps a viewport centre inside the service envelope.
///
/// The map layer calls [`on_viewport_settled`][BoundsGuard::on_viewport_settled]
/// once per settle event (debouncing is the caller's job).  The guard holds
/// no state beyond the bounds and is independent of the session — it can be
/// wired straight to the viewport event source.
#[derive(Copy, Clone, Debug)]
pub struct BoundsGuard {
    bounds: Bounds,
}

impl BoundsGuard {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    /// `None` when `center` is already inside the envelope; otherwise the
    /// corrected centre the viewport must animate toward.
    pub fn on_viewport_settled(&self, center: GeoPoint) -> Option<GeoPoint> {
        if self.bounds.contains(center) {
            None
        } else {
            Some(self.bounds.clamp(center))
        }
    }
}
