//! The `Session` — owns all per-session state and drives the other
//! components.
//!
//! # Request lifecycle
//!
//! A route request is a three-step exchange designed for an event-loop
//! host:
//!
//! 1. [`begin_route_request`][Session::begin_route_request] — hands out a
//!    [`RouteTicket`] (or `None` while the action is disabled: a waypoint
//!    missing, or a request already in flight).
//! 2. The host awaits [`fetch_route`][rf_route::fetch_route] with the
//!    ticket's endpoints.  This is the only suspension point in the engine.
//! 3. [`complete_route_request`][Session::complete_route_request] — applies
//!    the result if the ticket is still current, or drops it as stale when
//!    a reset or newer request superseded it in the meantime.
//!
//! [`request_route`][Session::request_route] drives all three steps for
//! hosts that can simply await.

use std::sync::Arc;

use rf_core::{EngineConfig, EngineRng, EntityId, GeoPoint, RfResult};
use rf_fleet::{FleetStore, proximity};
use rf_playback::{PlaybackObserver, PlayerState, RoutePlayer};
use rf_route::{OracleClient, Route, TravelEstimates, fetch_route};

use crate::mode::SelectionMode;

// ── Query results ─────────────────────────────────────────────────────────────

/// Owned snapshot of the closest fleet entity to the current source.
///
/// A snapshot rather than a borrow so the renderer can hold it across
/// fleet repopulation.
#[derive(Clone, Debug, PartialEq)]
pub struct NearestPickup {
    pub id: EntityId,
    pub position: GeoPoint,
    pub heading_deg: f64,
    pub distance_m: f64,
}

// ── Route request plumbing ────────────────────────────────────────────────────

/// Capability to complete one route request.
///
/// Carries the endpoints frozen at issue time and the sequence number that
/// decides staleness at completion.
#[derive(Debug)]
pub struct RouteTicket {
    seq: u64,
    pub source: GeoPoint,
    pub destination: GeoPoint,
}

/// What became of a completed route request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RouteResolution {
    /// The route was stored and playback started.
    Applied,
    /// A reset or newer request superseded this one; the result was
    /// silently dropped.
    Stale,
}

// ── Session ───────────────────────────────────────────────────────────────────

/// All mutable state for one ride-finder session.
///
/// The session exclusively owns the waypoints, the fleet, the active route,
/// and the player; collaborators receive borrows, never ownership.  `C` is
/// the pluggable oracle backend.
pub struct Session<C: OracleClient> {
    config: EngineConfig,
    client: C,
    rng: EngineRng,
    mode: SelectionMode,
    source: Option<GeoPoint>,
    destination: Option<GeoPoint>,
    fleet: FleetStore,
    nearest: Option<NearestPickup>,
    route: Option<Arc<Route>>,
    player: RoutePlayer,
    /// Monotonically increasing route-request counter; never reused.
    request_seq: u64,
    /// Sequence number of the outstanding request, if any.
    in_flight: Option<u64>,
}

impl<C: OracleClient> Session<C> {
    /// Validate `config`, populate the initial fleet, and start in
    /// [`SelectionMode::Source`].
    pub fn new(config: EngineConfig, client: C) -> RfResult<Self> {
        config.validate()?;

        let mut rng = EngineRng::from_seed_opt(config.seed);
        let mut fleet = FleetStore::new();
        fleet.populate(config.bounds, config.fleet_size, &mut rng);

        Ok(Self {
            config,
            client,
            rng,
            mode: SelectionMode::default(),
            source: None,
            destination: None,
            fleet,
            nearest: None,
            route: None,
            player: RoutePlayer::new(),
            request_seq: 0,
            in_flight: None,
        })
    }

    // ── Selection ─────────────────────────────────────────────────────────

    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
    }

    #[inline]
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Accept a clicked coordinate into the slot named by the current mode.
    ///
    /// This is the validation gate: out-of-range input is rejected here,
    /// before any component sees it.  A new point replaces the previous
    /// waypoint of the same role.  A source selection also refreshes the
    /// nearest-pickup result (`None` on an empty fleet).
    pub fn select_point(&mut self, lat: f64, lng: f64) -> RfResult<GeoPoint> {
        let point = GeoPoint::try_new(lat, lng)?;

        match self.mode {
            SelectionMode::Source => {
                self.source = Some(point);
                self.nearest = proximity::nearest(point, &self.fleet).map(|n| NearestPickup {
                    id: n.entity.id.clone(),
                    position: n.entity.position,
                    heading_deg: n.entity.heading_deg,
                    distance_m: n.distance_m,
                });
            }
            SelectionMode::Destination => {
                self.destination = Some(point);
            }
        }

        tracing::debug!(%point, mode = %self.mode, "waypoint set");
        Ok(point)
    }

    // ── Route requests ────────────────────────────────────────────────────

    /// `true` when the route action is enabled: both waypoints set and no
    /// request outstanding.
    pub fn can_request_route(&self) -> bool {
        self.source.is_some() && self.destination.is_some() && self.in_flight.is_none()
    }

    /// Issue a route request, or `None` while the action is disabled.
    ///
    /// Reentrancy guard: at most one ticket is outstanding; further calls
    /// return `None` until the first completes or a reset intervenes.
    pub fn begin_route_request(&mut self) -> Option<RouteTicket> {
        if !self.can_request_route() {
            return None;
        }
        let source = self.source?;
        let destination = self.destination?;

        self.request_seq += 1;
        self.in_flight = Some(self.request_seq);
        tracing::debug!(seq = self.request_seq, "route request issued");

        Some(RouteTicket {
            seq: self.request_seq,
            source,
            destination,
        })
    }

    /// Apply a fetched route if `ticket` is still the outstanding request.
    ///
    /// Stale tickets (superseded by [`reset`][Session::reset] or a newer
    /// request) are dropped without touching session state.
    pub fn complete_route_request(&mut self, ticket: RouteTicket, route: Route) -> RouteResolution {
        if self.in_flight != Some(ticket.seq) {
            tracing::debug!(seq = ticket.seq, "stale route response dropped");
            return RouteResolution::Stale;
        }
        self.in_flight = None;

        let route = Arc::new(route);
        self.route = Some(Arc::clone(&route));
        self.player.start(route);
        RouteResolution::Applied
    }

    /// Convenience driver: begin → fetch → complete.
    ///
    /// `None` mirrors the disabled action; otherwise the request always
    /// resolves (oracle or fallback) and the result says whether it was
    /// applied.
    pub async fn request_route(&mut self) -> Option<RouteResolution> {
        let ticket = self.begin_route_request()?;
        let route = fetch_route(
            ticket.source,
            ticket.destination,
            &self.client,
            self.config.oracle_timeout(),
        )
        .await;
        Some(self.complete_route_request(ticket, route))
    }

    // ── Playback ──────────────────────────────────────────────────────────

    /// Forward one external scheduling tick to the player.
    pub fn tick_playback<O: PlaybackObserver>(&mut self, observer: &mut O) {
        self.player.tick(observer);
    }

    #[inline]
    pub fn playback_state(&self) -> PlayerState {
        self.player.state()
    }

    // ── Reset ─────────────────────────────────────────────────────────────

    /// Return the session to its initial state with a fresh fleet.
    ///
    /// Cancels any active playback, clears both waypoints, the nearest
    /// result, and the route, and invalidates any outstanding route ticket
    /// (its eventual completion resolves as stale).
    pub fn reset(&mut self) {
        self.player.cancel();
        self.source = None;
        self.destination = None;
        self.nearest = None;
        self.route = None;
        self.in_flight = None;
        self.fleet
            .populate(self.config.bounds, self.config.fleet_size, &mut self.rng);
        tracing::info!("session reset");
    }

    // ── Read accessors (rendering boundary) ───────────────────────────────

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The oracle backend — for hosts driving the ticket API with their own
    /// fetch call instead of [`request_route`][Session::request_route].
    #[inline]
    pub fn client(&self) -> &C {
        &self.client
    }

    #[inline]
    pub fn fleet(&self) -> &FleetStore {
        &self.fleet
    }

    #[inline]
    pub fn source(&self) -> Option<GeoPoint> {
        self.source
    }

    #[inline]
    pub fn destination(&self) -> Option<GeoPoint> {
        self.destination
    }

    #[inline]
    pub fn nearest(&self) -> Option<&NearestPickup> {
        self.nearest.as_ref()
    }

    #[inline]
    pub fn route(&self) -> Option<&Arc<Route>> {
        self.route.as_ref()
    }

    /// Travel-time panel for the active route, when one exists.
    pub fn route_estimates(&self) -> Option<TravelEstimates> {
        self.route.as_ref().map(|r| {
            TravelEstimates::for_distance(r.total_distance_m, &self.config.speed_profiles)
        })
    }
}
