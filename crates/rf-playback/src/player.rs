//! The `RoutePlayer` state machine.

use std::sync::Arc;

use rf_route::Route;

use crate::observer::PlaybackObserver;

// ── PlayerState ───────────────────────────────────────────────────────────────

/// Lifecycle of one playback.
///
/// `Idle -> Playing -> Done`, with `Playing -> Cancelled` on explicit stop
/// or when a new route replaces the in-flight one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PlayerState {
    #[default]
    Idle,
    Playing,
    Done,
    Cancelled,
}

// ── RoutePlayer ───────────────────────────────────────────────────────────────

/// Reveal state for the active playback.  Exists only while a route is
/// loaded; dropped on completion, cancellation, or replacement.
struct Playback {
    /// Shared-read handle — the player never mutates the route.
    route: Arc<Route>,
    /// Vertices revealed so far, in [0, route.point_count()].
    revealed: usize,
}

/// Reveals a route one vertex per tick.
///
/// At most one playback is active at a time: [`start`][RoutePlayer::start]
/// on a playing player cancels the previous playback first.  The tick
/// source is external — see the crate docs.
#[derive(Default)]
pub struct RoutePlayer {
    playback: Option<Playback>,
    state: PlayerState,
}

impl RoutePlayer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> PlayerState {
        self.state
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state() == PlayerState::Playing
    }

    /// Vertices revealed by the active playback, 0 when none is active.
    #[inline]
    pub fn revealed_count(&self) -> usize {
        self.playback.as_ref().map_or(0, |p| p.revealed)
    }

    /// Load `route` and enter `Playing` with nothing revealed yet.
    ///
    /// An in-flight playback is cancelled first — its remaining frames are
    /// never emitted.
    pub fn start(&mut self, route: Arc<Route>) {
        self.cancel();
        self.playback = Some(Playback { route, revealed: 0 });
        self.state = PlayerState::Playing;
    }

    /// Stop the active playback; no further callbacks fire.
    ///
    /// Idempotent — cancelling an idle, done, or already-cancelled player
    /// is a no-op.
    pub fn cancel(&mut self) {
        if self.is_playing() {
            self.playback = None;
            self.state = PlayerState::Cancelled;
        }
    }

    /// Advance one frame: reveal the next vertex and hand the prefix to
    /// `observer`.  On the final vertex, also signal completion and enter
    /// `Done`.  A tick outside `Playing` does nothing.
    pub fn tick<O: PlaybackObserver>(&mut self, observer: &mut O) {
        let Some(playback) = self.playback.as_mut() else {
            return;
        };

        playback.revealed += 1;
        let finished = playback.revealed == playback.route.point_count();
        observer.on_frame(&playback.route.points[..playback.revealed]);

        if finished {
            observer.on_complete();
            self.playback = None;
            self.state = PlayerState::Done;
        }
    }
}
