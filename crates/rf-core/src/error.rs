//! Engine error type.
//!
//! Only invalid input ever surfaces to callers as an error — oracle
//! failures resolve to fallback routes, empty-fleet queries to `None`, and
//! stale route responses are dropped.  Sub-crates with their own failure
//! modes (rf-route) define their own enums; everything else reuses
//! `CoreError`.

use thiserror::Error;

use crate::geo::GeoPoint;

/// The top-level error type for `rf-core` and the session surface.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("coordinate out of range: lat={lat}, lng={lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("bounds corners out of order: southwest={southwest}, northeast={northeast}")]
    InvalidBounds {
        southwest: GeoPoint,
        northeast: GeoPoint,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `rf-*` crates.
pub type RfResult<T> = Result<T, CoreError>;
