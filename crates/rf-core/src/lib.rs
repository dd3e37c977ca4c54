//! `rf-core` — foundational types for the `rust_rf` ride-finder engine.
//!
//! This crate is a dependency of every other `rf-*` crate.  It intentionally
//! has no `rf-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`geo`]      | `GeoPoint`, haversine distance                       |
//! | [`bounds`]   | `Bounds`, `BoundsGuard` viewport correction          |
//! | [`ids`]      | `EntityId`                                           |
//! | [`rng`]      | `EngineRng` (deterministic when seeded)              |
//! | [`config`]   | `EngineConfig`, `SpeedProfiles`                      |
//! | [`error`]    | `CoreError`, `RfResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod bounds;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bounds::{Bounds, BoundsGuard};
pub use config::{EngineConfig, SpeedProfiles};
pub use error::{CoreError, RfResult};
pub use geo::GeoPoint;
pub use ids::EntityId;
pub use rng::EngineRng;
