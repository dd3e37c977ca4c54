//! Timeout-bounded route acquisition.

use std::time::Duration;

use rf_core::GeoPoint;

use crate::error::OracleError;
use crate::oracle::OracleClient;
use crate::route::Route;

/// Acquire a route from the oracle, falling back to a straight line.
///
/// Issues exactly one request and awaits it for at most `timeout`.  The
/// result is always a usable [`Route`]:
///
/// - oracle success with ≥ 2 points → `RouteOrigin::Oracle`, distance
///   summed along the returned polyline;
/// - transport error, non-2xx status, malformed or too-short payload, or
///   deadline elapsed → `RouteOrigin::Fallback` with
///   `points = [source, destination]`.
///
/// This function never returns an error; the fallback is the terminal
/// error-handling policy for acquisition.
pub async fn fetch_route<C: OracleClient>(
    source: GeoPoint,
    destination: GeoPoint,
    client: &C,
    timeout: Duration,
) -> Route {
    tracing::debug!(%source, %destination, "requesting shortest path");

    let outcome = match tokio::time::timeout(timeout, client.shortest_path(source, destination))
        .await
    {
        Ok(result) => result,
        Err(_) => Err(OracleError::Timeout(timeout)),
    };

    // Guard the ≥2-point invariant here as well: client implementations are
    // external and may not honour the EmptyPath contract.
    match outcome.map(Route::from_oracle_path) {
        Ok(Some(route)) => {
            tracing::debug!(
                points = route.point_count(),
                distance_m = route.total_distance_m,
                "oracle route acquired"
            );
            route
        }
        Ok(None) | Err(OracleError::EmptyPath) => {
            tracing::warn!("oracle path unusable, substituting direct line");
            Route::fallback(source, destination)
        }
        Err(err) => {
            tracing::warn!(%err, "oracle unavailable, substituting direct line");
            Route::fallback(source, destination)
        }
    }
}
