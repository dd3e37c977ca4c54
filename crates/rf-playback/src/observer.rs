//! Playback observer trait for frame delivery.

use rf_core::GeoPoint;

/// Callbacks invoked by [`RoutePlayer::tick`][crate::RoutePlayer::tick].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — console renderer
///
/// ```rust,ignore
/// struct PrefixPrinter;
///
/// impl PlaybackObserver for PrefixPrinter {
///     fn on_frame(&mut self, revealed: &[GeoPoint]) {
///         println!("revealed {} vertices", revealed.len());
///     }
/// }
/// ```
pub trait PlaybackObserver {
    /// Called once per tick with the currently revealed route prefix.
    ///
    /// Prefix lengths are strictly increasing (1, 2, …, N) within one
    /// playback — no gaps, no repeats, and nothing after cancellation.
    fn on_frame(&mut self, _revealed: &[GeoPoint]) {}

    /// Called exactly once, after the frame that revealed the final vertex.
    fn on_complete(&mut self) {}
}

/// A [`PlaybackObserver`] that does nothing.
pub struct NoopObserver;

impl PlaybackObserver for NoopObserver {}
