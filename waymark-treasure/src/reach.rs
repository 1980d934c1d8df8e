//! Whether a user is close enough to collect a treasure.

use waymark_core::{Coordinate, haversine_m};

/// Maximum distance, in metres, from which a treasure can be collected.
pub const COLLECT_RADIUS_METERS: f64 = 10.0;

/// Outcome of a reach check.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ReachCheck {
    /// Great-circle distance between user and treasure.
    pub distance_meters: f64,
    /// The distance is at most the collection radius.
    pub within_reach: bool,
}

/// Check `user` against `target` using [`COLLECT_RADIUS_METERS`].
///
/// # Examples
/// ```
/// use waymark_core::Coordinate;
/// use waymark_treasure::check_reach;
///
/// let chest = Coordinate::new(37.5665, 126.978);
/// assert!(check_reach(chest, chest).within_reach);
/// assert!(!check_reach(Coordinate::new(37.5675, 126.978), chest).within_reach);
/// ```
#[must_use]
pub fn check_reach(user: Coordinate, target: Coordinate) -> ReachCheck {
    check_reach_within(user, target, COLLECT_RADIUS_METERS)
}

/// Check `user` against `target` using a custom radius in metres.
///
/// The boundary is inclusive.
#[must_use]
pub fn check_reach_within(user: Coordinate, target: Coordinate, radius_meters: f64) -> ReachCheck {
    let distance_meters = haversine_m(user, target);
    ReachCheck {
        distance_meters,
        within_reach: distance_meters <= radius_meters,
    }
}
