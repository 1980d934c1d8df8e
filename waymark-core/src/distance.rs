//! Great-circle distance on a spherical Earth.

use std::f64::consts::PI;

use crate::Coordinate;

/// Mean Earth radius used by every distance estimate, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates in kilometres.
///
/// The result is symmetric, non-negative for finite input, and zero when
/// both coordinates are identical.
///
/// # Examples
/// ```
/// use waymark_core::{Coordinate, haversine_km};
///
/// let origin = Coordinate::new(0.0, 0.0);
/// let east = Coordinate::new(0.0, 1.0);
/// let km = haversine_km(origin, east);
/// assert!((km - 111.195).abs() < 1e-3);
/// assert_eq!(haversine_km(origin, origin), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let d_lat = to_radians(to.lat - from.lat);
    let d_lng = to_radians(to.lng - from.lng);
    let half_lat = (d_lat / 2.0).sin();
    let half_lng = (d_lng / 2.0).sin();
    let a = half_lat * half_lat
        + to_radians(from.lat).cos() * to_radians(to.lat).cos() * half_lng * half_lng;
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Haversine distance between two coordinates in metres.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "unit conversion")]
pub fn haversine_m(from: Coordinate, to: Coordinate) -> f64 {
    haversine_km(from, to) * 1000.0
}

#[expect(clippy::float_arithmetic, reason = "degree to radian conversion")]
fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOLERANCE_KM: f64 = 1e-6;

    #[rstest]
    fn identical_points_are_zero_apart() {
        let point = Coordinate::new(37.5665, 126.978);
        assert_eq!(haversine_km(point, point), 0.0);
    }

    #[rstest]
    #[case(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 10.0))]
    #[case(Coordinate::new(51.5074, -0.1278), Coordinate::new(48.8566, 2.3522))]
    #[case(Coordinate::new(-33.8688, 151.2093), Coordinate::new(35.6762, 139.6503))]
    fn distance_is_symmetric(#[case] a: Coordinate, #[case] b: Coordinate) {
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < TOLERANCE_KM);
    }

    #[rstest]
    fn one_degree_of_latitude_matches_arc_length() {
        let expected = EARTH_RADIUS_KM * PI / 180.0;
        let km = haversine_km(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0));
        assert!((km - expected).abs() < TOLERANCE_KM);
    }

    #[rstest]
    fn london_to_paris_is_roughly_344_km() {
        let london = Coordinate::new(51.5074, -0.1278);
        let paris = Coordinate::new(48.8566, 2.3522);
        let km = haversine_km(london, paris);
        assert!((km - 343.56).abs() < 0.5, "unexpected distance {km}");
    }

    #[rstest]
    fn antipodes_are_half_a_circumference_apart() {
        let km = haversine_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0));
        assert!((km - EARTH_RADIUS_KM * PI).abs() < 1e-3);
    }

    #[rstest]
    fn metres_scale_kilometres() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 0.0001);
        assert!((haversine_m(a, b) - haversine_km(a, b) * 1000.0).abs() < 1e-9);
    }
}
