//! In-memory collaborators for unit and behaviour tests.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use crate::{
    Coordinate, DirectionsError, DirectionsProvider, GeocodeError, Geocoder, HopDirections,
    TravelMode, haversine_m,
};

/// `Geocoder` backed by a lookup table of trimmed place names.
#[derive(Debug, Default, Clone)]
pub struct MemoryGeocoder {
    places: HashMap<String, Coordinate>,
}

impl MemoryGeocoder {
    /// Create a geocoder from `(name, coordinate)` pairs.
    pub fn with_places<I, S>(places: I) -> Self
    where
        I: IntoIterator<Item = (S, Coordinate)>,
        S: Into<String>,
    {
        Self {
            places: places
                .into_iter()
                .map(|(name, coordinate)| (name.into(), coordinate))
                .collect(),
        }
    }
}

impl Geocoder for MemoryGeocoder {
    fn resolve(&self, query: &str) -> Result<Coordinate, GeocodeError> {
        let key = query.trim();
        if key.is_empty() {
            return Err(GeocodeError::EmptyQuery);
        }
        self.places
            .get(key)
            .copied()
            .ok_or_else(|| GeocodeError::NotFound {
                query: key.to_owned(),
            })
    }
}

/// `DirectionsProvider` that travels in a straight line at a fixed speed.
///
/// Modes listed through [`Self::refusing`] report
/// [`DirectionsError::NoRoute`].
#[derive(Debug, Default, Clone)]
pub struct StraightLineDirections {
    refused: HashSet<TravelMode>,
}

impl StraightLineDirections {
    /// Refuse every mode in `modes`.
    #[must_use]
    pub fn refusing<I>(modes: I) -> Self
    where
        I: IntoIterator<Item = TravelMode>,
    {
        Self {
            refused: modes.into_iter().collect(),
        }
    }

    /// Average speed used for `mode`, in metres per second.
    #[must_use]
    pub const fn speed_mps(mode: TravelMode) -> f64 {
        match mode {
            TravelMode::Driving => 10.0,
            TravelMode::Transit => 8.0,
            TravelMode::Walking => 1.25,
            TravelMode::Bicycling => 4.0,
        }
    }
}

impl DirectionsProvider for StraightLineDirections {
    #[expect(clippy::float_arithmetic, reason = "distance over speed")]
    fn route(
        &self,
        from: Coordinate,
        to: Coordinate,
        mode: TravelMode,
    ) -> Result<HopDirections, DirectionsError> {
        if self.refused.contains(&mode) {
            return Err(DirectionsError::NoRoute { mode });
        }
        let distance_meters = haversine_m(from, to);
        let duration = Duration::try_from_secs_f64(distance_meters / Self::speed_mps(mode))
            .map_err(|err| DirectionsError::Provider {
                message: format!("cannot time a {distance_meters} m hop: {err}"),
            })?;
        Ok(HopDirections {
            mode,
            distance_meters,
            duration,
            polyline: vec![from, to],
        })
    }
}
