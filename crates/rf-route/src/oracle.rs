//! The shortest-path oracle boundary.
//!
//! # Pluggability
//!
//! Route acquisition talks to the oracle via the [`OracleClient`] trait, so
//! applications can swap in a different backend (or tests a stub) without
//! touching the acquisition logic.  [`HttpOracleClient`] is the production
//! implementation against the `GET /api/shortest_path` endpoint.

use std::future::Future;

use rf_core::GeoPoint;
use serde::Deserialize;

use crate::error::OracleError;

// ── Wire types ────────────────────────────────────────────────────────────────

/// One vertex of the oracle's `path` payload.
#[derive(Debug, Deserialize)]
pub struct PathPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Top-level oracle response.  An error payload simply lacks `path`.
#[derive(Debug, Deserialize)]
pub struct PathResponse {
    #[serde(default)]
    pub path: Option<Vec<PathPoint>>,
}

// ── OracleClient trait ────────────────────────────────────────────────────────

/// Pluggable shortest-path backend.
///
/// Implementations return the raw point sequence; route construction,
/// distance aggregation, and the fallback policy live in
/// [`fetch_route`][crate::fetch_route].  Implementors may write the method
/// as a plain `async fn`.
pub trait OracleClient {
    /// One shortest-path request from `source` to `destination`.
    ///
    /// A payload with fewer than two points must be reported as
    /// [`OracleError::EmptyPath`], not returned.
    fn shortest_path(
        &self,
        source: GeoPoint,
        destination: GeoPoint,
    ) -> impl Future<Output = Result<Vec<GeoPoint>, OracleError>> + Send;
}

// ── HttpOracleClient ──────────────────────────────────────────────────────────

/// `reqwest`-backed client for the HTTP oracle.
///
/// Issues `GET {base}/api/shortest_path` with decimal-degree query
/// parameters and decodes the `path` field.
pub struct HttpOracleClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpOracleClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Use a pre-configured `reqwest::Client` (connection pools, proxies).
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/shortest_path", self.base_url)
    }
}

impl OracleClient for HttpOracleClient {
    async fn shortest_path(
        &self,
        source: GeoPoint,
        destination: GeoPoint,
    ) -> Result<Vec<GeoPoint>, OracleError> {
        let response = self
            .http
            .get(self.endpoint())
            .query(&[
                ("source_lat", source.lat),
                ("source_lng", source.lng),
                ("dest_lat", destination.lat),
                ("dest_lng", destination.lng),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OracleError::Status(status.as_u16()));
        }

        let body: PathResponse = response.json().await?;
        decode_path(body)
    }
}

/// Validate and convert a decoded payload into engine coordinates.
pub(crate) fn decode_path(body: PathResponse) -> Result<Vec<GeoPoint>, OracleError> {
    let path = body.path.unwrap_or_default();
    if path.len() < 2 {
        return Err(OracleError::EmptyPath);
    }
    path.into_iter()
        .map(|p| {
            GeoPoint::try_new(p.lat, p.lng)
                .map_err(|e| OracleError::Malformed(e.to_string()))
        })
        .collect()
}
