//! Unit tests for rf-session.

use std::sync::atomic::{AtomicUsize, Ordering};

use rf_core::{Bounds, EngineConfig, GeoPoint};
use rf_playback::{PlaybackObserver, PlayerState};
use rf_route::{OracleClient, OracleError, Route, RouteOrigin, fetch_route};

use crate::mode::SelectionMode;
use crate::session::{RouteResolution, Session};

// ── Stub oracles ──────────────────────────────────────────────────────────────

/// Returns a three-point path through the midpoint and counts calls.
#[derive(Default)]
struct CountingOracle {
    calls: AtomicUsize,
}

impl CountingOracle {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl OracleClient for CountingOracle {
    async fn shortest_path(
        &self,
        source: GeoPoint,
        destination: GeoPoint,
    ) -> Result<Vec<GeoPoint>, OracleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mid = GeoPoint::new(
            (source.lat + destination.lat) / 2.0,
            (source.lng + destination.lng) / 2.0,
        );
        Ok(vec![source, mid, destination])
    }
}

/// Always unreachable.
struct DownOracle;

impl OracleClient for DownOracle {
    async fn shortest_path(
        &self,
        _source: GeoPoint,
        _destination: GeoPoint,
    ) -> Result<Vec<GeoPoint>, OracleError> {
        Err(OracleError::Unreachable("connection refused".to_string()))
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn demo_config() -> EngineConfig {
    let bounds =
        Bounds::new(GeoPoint::new(26.288, 73.0161), GeoPoint::new(26.2988, 73.031)).unwrap();
    let mut cfg = EngineConfig::new(bounds);
    cfg.fleet_size = 5;
    cfg.seed = Some(42);
    cfg
}

fn session() -> Session<CountingOracle> {
    Session::new(demo_config(), CountingOracle::default()).unwrap()
}

/// Selects a source and a destination inside the demo bounds.
fn select_both(s: &mut Session<CountingOracle>) {
    s.select_point(26.2934, 73.0248).unwrap();
    s.set_mode(SelectionMode::Destination);
    s.select_point(26.2960, 73.0290).unwrap();
}

/// Counts playback frames.
#[derive(Default)]
struct FrameCounter {
    frames: usize,
    completions: usize,
}

impl PlaybackObserver for FrameCounter {
    fn on_frame(&mut self, _revealed: &[GeoPoint]) {
        self.frames += 1;
    }

    fn on_complete(&mut self) {
        self.completions += 1;
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn populates_initial_fleet() {
        let s = session();
        assert_eq!(s.fleet().len(), 5);
        assert_eq!(s.mode(), SelectionMode::Source);
        assert_eq!(s.playback_state(), PlayerState::Idle);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut cfg = demo_config();
        cfg.oracle_timeout_ms = 0;
        assert!(Session::new(cfg, CountingOracle::default()).is_err());
    }
}

// ── Waypoint selection ────────────────────────────────────────────────────────

#[cfg(test)]
mod selection {
    use super::*;

    #[test]
    fn out_of_range_click_is_rejected_before_any_state_change() {
        let mut s = session();
        assert!(s.select_point(200.0, 73.02).is_err());
        assert!(s.source().is_none());
        assert!(s.nearest().is_none());
    }

    #[test]
    fn source_click_sets_waypoint_and_nearest() {
        let mut s = session();
        let query = s.select_point(26.2934, 73.0248).unwrap();
        assert_eq!(s.source(), Some(query));

        let hit = s.nearest().expect("non-empty fleet must yield a pickup");
        let min = s
            .fleet()
            .entities()
            .iter()
            .map(|e| query.distance_m(e.position))
            .fold(f64::INFINITY, f64::min);
        assert_eq!(hit.distance_m, min);
    }

    #[test]
    fn destination_click_leaves_nearest_untouched() {
        let mut s = session();
        s.set_mode(SelectionMode::Destination);
        s.select_point(26.2960, 73.0290).unwrap();
        assert!(s.destination().is_some());
        assert!(s.source().is_none());
        assert!(s.nearest().is_none());
    }

    #[test]
    fn reselect_replaces_prior_waypoint_of_same_role() {
        let mut s = session();
        s.select_point(26.2934, 73.0248).unwrap();
        let second = s.select_point(26.2950, 73.0200).unwrap();
        assert_eq!(s.source(), Some(second));
    }

    #[test]
    fn empty_fleet_yields_no_nearest() {
        let mut cfg = demo_config();
        cfg.fleet_size = 0;
        let mut s = Session::new(cfg, CountingOracle::default()).unwrap();
        s.select_point(26.2934, 73.0248).unwrap();
        assert!(s.source().is_some());
        assert!(s.nearest().is_none());
    }
}

// ── Route request lifecycle ───────────────────────────────────────────────────

#[cfg(test)]
mod request {
    use super::*;

    #[test]
    fn disabled_until_both_waypoints_set() {
        let mut s = session();
        assert!(!s.can_request_route());
        assert!(s.begin_route_request().is_none());

        s.select_point(26.2934, 73.0248).unwrap();
        assert!(s.begin_route_request().is_none());

        s.set_mode(SelectionMode::Destination);
        s.select_point(26.2960, 73.0290).unwrap();
        assert!(s.begin_route_request().is_some());
    }

    #[test]
    fn second_request_while_in_flight_is_a_noop() {
        let mut s = session();
        select_both(&mut s);

        let ticket = s.begin_route_request().expect("first request issues");
        // Back-to-back attempt before the first resolves: disabled, so no
        // second oracle call can ever be made for it.
        assert!(s.begin_route_request().is_none());
        assert!(!s.can_request_route());

        let route = Route::fallback(ticket.source, ticket.destination);
        assert_eq!(s.complete_route_request(ticket, route), RouteResolution::Applied);
        assert!(s.can_request_route());
    }

    #[test]
    fn completion_after_reset_is_stale() {
        let mut s = session();
        select_both(&mut s);
        let ticket = s.begin_route_request().unwrap();

        s.reset();

        let late = Route::fallback(
            GeoPoint::new(26.2934, 73.0248),
            GeoPoint::new(26.2960, 73.0290),
        );
        assert_eq!(s.complete_route_request(ticket, late), RouteResolution::Stale);
        assert!(s.route().is_none());
        assert_eq!(s.playback_state(), PlayerState::Idle);
    }

    #[test]
    fn old_ticket_loses_to_newer_request() {
        let mut s = session();
        select_both(&mut s);
        let old = s.begin_route_request().unwrap();

        // Only a reset can clear the in-flight guard and permit a newer
        // request while the old fetch is still outstanding.
        s.reset();
        select_both(&mut s);
        let new = s.begin_route_request().unwrap();

        let stale_route = Route::fallback(old.source, old.destination);
        assert_eq!(
            s.complete_route_request(old, stale_route),
            RouteResolution::Stale
        );

        let fresh_route = Route::fallback(new.source, new.destination);
        assert_eq!(
            s.complete_route_request(new, fresh_route),
            RouteResolution::Applied
        );
        assert!(s.route().is_some());
    }

    #[tokio::test]
    async fn exactly_one_oracle_call_per_issued_ticket() {
        let mut s = session();
        select_both(&mut s);

        let ticket = s.begin_route_request().unwrap();
        assert!(s.begin_route_request().is_none());

        let route = fetch_route(
            ticket.source,
            ticket.destination,
            s.client(),
            s.config().oracle_timeout(),
        )
        .await;
        assert_eq!(s.client().calls(), 1);
        assert_eq!(s.complete_route_request(ticket, route), RouteResolution::Applied);
    }
}

// ── End-to-end flow ───────────────────────────────────────────────────────────

#[cfg(test)]
mod full_flow {
    use super::*;

    #[tokio::test]
    async fn oracle_route_plays_back_to_completion() {
        let mut s = session();
        select_both(&mut s);

        assert_eq!(s.request_route().await, Some(RouteResolution::Applied));
        let route = s.route().unwrap();
        assert_eq!(route.origin, RouteOrigin::Oracle);
        assert_eq!(route.point_count(), 3);
        assert_eq!(s.playback_state(), PlayerState::Playing);
        assert!(s.route_estimates().is_some());

        let mut counter = FrameCounter::default();
        for _ in 0..10 {
            s.tick_playback(&mut counter);
        }
        assert_eq!(counter.frames, 3);
        assert_eq!(counter.completions, 1);
        assert_eq!(s.playback_state(), PlayerState::Done);
    }

    #[tokio::test]
    async fn oracle_outage_degrades_to_fallback_route() {
        let mut s = Session::new(demo_config(), DownOracle).unwrap();
        s.select_point(26.2934, 73.0248).unwrap();
        s.set_mode(SelectionMode::Destination);
        s.select_point(26.2960, 73.0290).unwrap();

        assert_eq!(s.request_route().await, Some(RouteResolution::Applied));
        let route = s.route().unwrap();
        assert_eq!(route.origin, RouteOrigin::Fallback);
        assert_eq!(route.points, vec![s.source().unwrap(), s.destination().unwrap()]);
        assert_eq!(s.playback_state(), PlayerState::Playing);
    }

    #[tokio::test]
    async fn request_without_waypoints_resolves_to_disabled() {
        let mut s = session();
        assert_eq!(s.request_route().await, None);
        assert_eq!(s.client().calls(), 0);
    }
}

// ── Reset ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod reset {
    use super::*;

    #[tokio::test]
    async fn clears_state_cancels_playback_and_repopulates() {
        let mut s = session();
        select_both(&mut s);
        s.request_route().await;
        assert_eq!(s.playback_state(), PlayerState::Playing);
        let fleet_before: Vec<_> = s.fleet().entities().to_vec();

        s.reset();

        assert!(s.source().is_none());
        assert!(s.destination().is_none());
        assert!(s.nearest().is_none());
        assert!(s.route().is_none());
        assert_eq!(s.playback_state(), PlayerState::Cancelled);
        assert_eq!(s.fleet().len(), 5);
        // The seeded RNG stream has advanced: a whole new batch.
        assert_ne!(s.fleet().entities(), fleet_before.as_slice());
    }

    #[test]
    fn reset_on_fresh_session_is_harmless() {
        let mut s = session();
        s.reset();
        assert_eq!(s.fleet().len(), 5);
        assert_eq!(s.playback_state(), PlayerState::Idle);
    }
}
