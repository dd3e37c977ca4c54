//! Travel-time estimates derived from a route distance.
//!
//! No routing intelligence here — each profile is a flat assumed speed
//! applied to the same distance.

use rf_core::SpeedProfiles;

/// Whole minutes to cover `distance_m` at `speed_mps`, rounded to nearest.
///
/// Callers with an unset distance (`Option`) map over it; a built route
/// always has one.
#[inline]
pub fn travel_time_minutes(distance_m: f64, speed_mps: f64) -> u64 {
    (distance_m / speed_mps / 60.0).round() as u64
}

/// The per-profile estimate panel shown alongside a route.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TravelEstimates {
    pub car_min: u64,
    pub bike_min: u64,
    pub walk_min: u64,
}

impl TravelEstimates {
    pub fn for_distance(distance_m: f64, profiles: &SpeedProfiles) -> Self {
        Self {
            car_min: travel_time_minutes(distance_m, profiles.car_mps),
            bike_min: travel_time_minutes(distance_m, profiles.bike_mps),
            walk_min: travel_time_minutes(distance_m, profiles.walk_mps),
        }
    }
}
