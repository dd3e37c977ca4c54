//! Engine configuration.
//!
//! Built once by the application (hard-coded, or deserialized with the
//! `serde` feature) and handed to the session at construction, which
//! validates it before any component runs.

use std::time::Duration;

use crate::bounds::Bounds;
use crate::error::{CoreError, RfResult};

// ── SpeedProfiles ─────────────────────────────────────────────────────────────

/// Assumed travel speeds for the time-estimate panel, in metres/second.
///
/// Each entry is an independent scalar consumed only by the travel-time
/// formula; the engine does no mode-specific routing.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedProfiles {
    pub car_mps: f64,
    pub bike_mps: f64,
    pub walk_mps: f64,
}

impl Default for SpeedProfiles {
    /// 30 km/h car, 15 km/h bike, 5 km/h walk.
    fn default() -> Self {
        Self {
            car_mps: 30.0 * 1000.0 / 3600.0,
            bike_mps: 15.0 * 1000.0 / 3600.0,
            walk_mps: 5.0 * 1000.0 / 3600.0,
        }
    }
}

impl SpeedProfiles {
    fn validate(&self) -> RfResult<()> {
        for (name, v) in [
            ("car", self.car_mps),
            ("bike", self.bike_mps),
            ("walk", self.walk_mps),
        ] {
            if !(v > 0.0) {
                return Err(CoreError::Config(format!(
                    "speed profile '{name}' must be > 0 m/s, got {v}"
                )));
            }
        }
        Ok(())
    }
}

// ── EngineConfig ──────────────────────────────────────────────────────────────

/// Top-level engine configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// The fixed service envelope.  The viewport, the fleet, and all
    /// selectable points live inside it.
    pub bounds: Bounds,

    /// Number of fleet entities generated at session start and on reset.
    pub fleet_size: usize,

    /// Deadline for one routing-oracle request, milliseconds.  Must be > 0.
    pub oracle_timeout_ms: u64,

    /// Speeds backing the travel-time estimates.
    pub speed_profiles: SpeedProfiles,

    /// Master RNG seed.  `Some` makes fleet generation reproducible;
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Sensible defaults for everything except the envelope, which has no
    /// meaningful default.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            fleet_size: 25,
            oracle_timeout_ms: 5_000,
            speed_profiles: SpeedProfiles::default(),
            seed: None,
        }
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> RfResult<()> {
        self.bounds.revalidate()?;
        if self.oracle_timeout_ms == 0 {
            return Err(CoreError::Config(
                "oracle_timeout_ms must be > 0".to_string(),
            ));
        }
        self.speed_profiles.validate()
    }

    /// The oracle deadline as a `Duration`.
    #[inline]
    pub fn oracle_timeout(&self) -> Duration {
        Duration::from_millis(self.oracle_timeout_ms)
    }
}
