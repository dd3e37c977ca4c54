//! `rf-session` — the engine's orchestrating state machine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`mode`]    | `SelectionMode` — which waypoint slot a click targets     |
//! | [`session`] | `Session`, route-request tickets, reset                   |
//!
//! # Rendering boundary
//!
//! The session never touches pixels.  After each input event the renderer
//! reads the accessors ([`Session::fleet`], [`Session::source`],
//! [`Session::nearest`], …) and redraws what changed; playback frames
//! arrive through the [`PlaybackObserver`][rf_playback::PlaybackObserver]
//! handed to [`Session::tick_playback`].

pub mod mode;
pub mod session;

#[cfg(test)]
mod tests;

pub use mode::SelectionMode;
pub use session::{NearestPickup, RouteResolution, RouteTicket, Session};
