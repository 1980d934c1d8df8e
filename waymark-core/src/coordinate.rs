//! Geographic coordinates in WGS84 degrees.

use geo::Coord;

/// A point on the Earth's surface.
///
/// Latitude and longitude are plain degrees. Range checking is left to the
/// geocoder that produced the value.
///
/// Map integrations that already use `geo` convert with `From`, where
/// `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::Coordinate;
///
/// let seoul = Coordinate::new(37.5665, 126.9780);
/// let coord: Coord<f64> = seoul.into();
/// assert_eq!(coord.x, 126.9780);
/// assert_eq!(Coordinate::from(coord), seoul);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Latitude in degrees, nominally `-90..=90`.
    pub lat: f64,
    /// Longitude in degrees, nominally `-180..=180`.
    pub lng: f64,
}

impl Coordinate {
    /// Construct a coordinate from latitude and longitude degrees.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both components are finite numbers.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            x: coordinate.lng,
            y: coordinate.lat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn geo_coord_maps_longitude_to_x() {
        let coord: Coord<f64> = Coordinate::new(10.0, 20.0).into();
        assert_eq!(coord, Coord { x: 20.0, y: 10.0 });
    }

    #[rstest]
    #[case(Coordinate::new(f64::NAN, 0.0), false)]
    #[case(Coordinate::new(0.0, f64::INFINITY), false)]
    #[case(Coordinate::new(-33.9, 151.2), true)]
    fn reports_finiteness(#[case] coordinate: Coordinate, #[case] expected: bool) {
        assert_eq!(coordinate.is_finite(), expected);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serialises_with_short_field_names() {
        let json = serde_json::to_string(&Coordinate::new(1.5, -2.5)).expect("serialise");
        assert_eq!(json, r#"{"lat":1.5,"lng":-2.5}"#);
    }
}
