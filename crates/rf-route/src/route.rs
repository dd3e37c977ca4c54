//! The `Route` value handed from acquisition to playback.

use rf_core::GeoPoint;

// ── RouteOrigin ───────────────────────────────────────────────────────────────

/// Where a route's geometry came from.
///
/// `Fallback` marks the straight-line substitute used when the oracle is
/// unavailable; the UI can use it to label the line as approximate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RouteOrigin {
    Oracle,
    Fallback,
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// An ordered polyline from source to destination.
///
/// Immutable once built — acquisition constructs it, the session hands it
/// to the player behind an `Arc`, and nobody mutates it afterwards.
/// Always holds at least two points.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub points: Vec<GeoPoint>,
    /// Sum of consecutive-point haversine distances along `points`.
    pub total_distance_m: f64,
    pub origin: RouteOrigin,
}

impl Route {
    /// Build an oracle-origin route from a returned point sequence.
    ///
    /// Returns `None` for fewer than two points — a single-point or empty
    /// payload is unusable and must be treated as an oracle failure.
    pub fn from_oracle_path(points: Vec<GeoPoint>) -> Option<Route> {
        if points.len() < 2 {
            return None;
        }
        let total_distance_m = path_distance_m(&points);
        Some(Route {
            points,
            total_distance_m,
            origin: RouteOrigin::Oracle,
        })
    }

    /// The straight-line substitute route.  Construction never fails — this
    /// is the terminal error-handling policy for route acquisition.
    pub fn fallback(source: GeoPoint, destination: GeoPoint) -> Route {
        Route {
            points: vec![source, destination],
            total_distance_m: source.distance_m(destination),
            origin: RouteOrigin::Fallback,
        }
    }

    #[inline]
    pub fn is_fallback(&self) -> bool {
        self.origin == RouteOrigin::Fallback
    }

    /// Number of polyline vertices (≥ 2).
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

/// Aggregate haversine length of a polyline, metres.  Zero for fewer than
/// two points.
pub fn path_distance_m(points: &[GeoPoint]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[0].distance_m(pair[1]))
        .sum()
}
