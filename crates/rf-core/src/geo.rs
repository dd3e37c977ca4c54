//! Geographic coordinate type and great-circle distance.
//!
//! `GeoPoint` uses `f64` (double-precision) latitude/longitude.  Positions
//! here feed user-facing distance and fare-estimate figures, so the few
//! extra bytes over `f32` buy exact agreement with the backend's numbers.

use crate::error::{CoreError, RfResult};

/// A WGS-84 geographic coordinate.
///
/// Equality is by coordinate value; the type is `Copy` and never mutated
/// after construction.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Construct without validation.  Use for coordinates already known to
    /// be in range (constants, points derived from validated inputs).
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Construct from untrusted input, rejecting out-of-range coordinates.
    ///
    /// Latitude must lie in [-90, 90] and longitude in [-180, 180]; NaN
    /// fails both checks.  This is the single validation gate — everything
    /// downstream assumes in-range points.
    pub fn try_new(lat: f64, lng: f64) -> RfResult<Self> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(CoreError::InvalidCoordinate { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Symmetric in its arguments; ~0 for identical points.  Spherical
    /// Earth is accurate to ~0.5 % — plenty for pickup distances and time
    /// estimates at city scale.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        const R: f64 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}
