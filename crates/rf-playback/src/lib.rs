//! `rf-playback` — animated route reveal, one vertex per tick.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`player`]   | `RoutePlayer` state machine, `PlayerState`            |
//! | [`observer`] | `PlaybackObserver` frame callbacks, `NoopObserver`    |
//!
//! # Tick source
//!
//! The player never schedules itself.  Whatever periodic source the host
//! has — a timer, a render-frame callback, or manual stepping in tests —
//! calls [`RoutePlayer::tick`] once per frame, which keeps the reveal
//! algorithm independent of any particular rendering loop.

pub mod observer;
pub mod player;


pub use observer::{NoopObserver, PlaybackObserver};
pub use player::{PlayerState, RoutePlayer};
