//! jodhpur — smallest end-to-end demo of the rust_rf engine.
//!
//! Spawns a 25-car fleet inside the central-Jodhpur envelope, picks a
//! pickup and dropoff, asks the routing oracle at `localhost:8000` for a
//! path (degrading to the straight line when the backend is down), and
//! replays the route as GeoJSON `LineString` prefixes — the same geometry
//! hand-off a map layer would consume.

use std::time::Duration;

use anyhow::Result;
use serde_json::json;

use rf_core::{Bounds, BoundsGuard, EngineConfig, GeoPoint};
use rf_playback::{PlaybackObserver, PlayerState};
use rf_route::HttpOracleClient;
use rf_session::{SelectionMode, Session};

// ── Constants ─────────────────────────────────────────────────────────────────

const ORACLE_URL: &str = "http://localhost:8000";
const FLEET_SIZE: usize = 25;
const SEED: u64 = 42;
const FRAME_INTERVAL: Duration = Duration::from_millis(40);

// Central Jodhpur service envelope.
const SW: (f64, f64) = (26.288, 73.0161);
const NE: (f64, f64) = (26.2988, 73.031);

// Demo pickup and dropoff, both inside the envelope.
const PICKUP: (f64, f64) = (26.2934, 73.0248);
const DROPOFF: (f64, f64) = (26.2960, 73.0290);

// ── Rendering boundary ────────────────────────────────────────────────────────

/// Prints each revealed route prefix as a GeoJSON feature.
struct GeoJsonRenderer;

impl PlaybackObserver for GeoJsonRenderer {
    fn on_frame(&mut self, revealed: &[GeoPoint]) {
        let coordinates: Vec<[f64; 2]> = revealed.iter().map(|p| [p.lng, p.lat]).collect();
        let feature = json!({
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": coordinates },
        });
        println!("{feature}");
    }

    fn on_complete(&mut self) {
        println!("route fully drawn");
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let bounds = Bounds::new(GeoPoint::new(SW.0, SW.1), GeoPoint::new(NE.0, NE.1))?;
    let mut config = EngineConfig::new(bounds);
    config.fleet_size = FLEET_SIZE;
    config.seed = Some(SEED);

    let mut session = Session::new(config, HttpOracleClient::new(ORACLE_URL))?;
    println!("fleet of {} cars ready", session.fleet().len());

    // The guard watches viewport settles independently of the session.
    let guard = BoundsGuard::new(bounds);
    let wandered = GeoPoint::new(26.35, 73.02);
    if let Some(corrected) = guard.on_viewport_settled(wandered) {
        println!("viewport recentered from {wandered} to {corrected}");
    }

    // Pickup: also resolves the nearest car.
    session.select_point(PICKUP.0, PICKUP.1)?;
    if let Some(pickup) = session.nearest() {
        println!("closest car: {} at {:.0} m", pickup.id, pickup.distance_m);
    }

    session.set_mode(SelectionMode::Destination);
    session.select_point(DROPOFF.0, DROPOFF.1)?;

    session.request_route().await;
    if let Some(route) = session.route() {
        let label = if route.is_fallback() { "approximate" } else { "road" };
        println!(
            "{label} route: {} points, {:.0} m",
            route.point_count(),
            route.total_distance_m
        );
    }
    if let Some(est) = session.route_estimates() {
        println!(
            "estimated minutes — car: {}, bike: {}, walk: {}",
            est.car_min, est.bike_min, est.walk_min
        );
    }

    // Frame-paced reveal: one vertex per timer tick.
    let mut renderer = GeoJsonRenderer;
    let mut frames = tokio::time::interval(FRAME_INTERVAL);
    while session.playback_state() == PlayerState::Playing {
        frames.tick().await;
        session.tick_playback(&mut renderer);
    }

    Ok(())
}
