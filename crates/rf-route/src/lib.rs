//! `rf-route` — route acquisition from the shortest-path oracle.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`route`]    | `Route`, `RouteOrigin`, polyline distance                 |
//! | [`oracle`]   | `OracleClient` trait, `HttpOracleClient`, wire types      |
//! | [`fetch`]    | `fetch_route` — timeout-bounded acquisition with fallback |
//! | [`estimate`] | Travel-time estimates per speed profile                   |
//! | [`error`]    | `OracleError`                                             |
//!
//! # Failure policy
//!
//! Oracle failures never escape this crate.  [`fetch_route`] is a total
//! function: transport errors, timeouts, and unusable payloads all resolve
//! to a two-point straight-line route marked [`RouteOrigin::Fallback`], so
//! downstream consumers stay failure-agnostic.

pub mod error;
pub mod estimate;
pub mod fetch;
pub mod oracle;
pub mod route;


pub use error::OracleError;
pub use estimate::{TravelEstimates, travel_time_minutes};
pub use fetch::fetch_route;
pub use oracle::{HttpOracleClient, OracleClient};
pub use route::{Route, RouteOrigin, path_distance_m};
