//! Turn-by-turn directions for a single hop.
//!
//! The directions service is external. Callers request one hop at a time,
//! in the order returned by [`optimize_route`](crate::optimize_route).

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::Coordinate;

/// How a hop is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum TravelMode {
    /// By car.
    #[default]
    Driving,
    /// By public transport.
    Transit,
    /// On foot.
    Walking,
    /// By bicycle.
    Bicycling,
}

impl TravelMode {
    /// Modes tried in turn when no specific mode was requested.
    pub const FALLBACK_ORDER: [Self; 4] =
        [Self::Driving, Self::Transit, Self::Walking, Self::Bicycling];

    /// Upper-case wire name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Driving => "DRIVING",
            Self::Transit => "TRANSIT",
            Self::Walking => "WALKING",
            Self::Bicycling => "BICYCLING",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`TravelMode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown travel mode {0:?}")]
pub struct ParseTravelModeError(pub String);

impl FromStr for TravelMode {
    type Err = ParseTravelModeError;

    /// Parse a mode name, ignoring ASCII case.
    ///
    /// ```
    /// use waymark_core::TravelMode;
    ///
    /// assert_eq!("walking".parse(), Ok(TravelMode::Walking));
    /// assert!("teleport".parse::<TravelMode>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::FALLBACK_ORDER
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseTravelModeError(s.to_owned()))
    }
}

/// Directions for one hop as reported by the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct HopDirections {
    /// Mode the provider routed with.
    pub mode: TravelMode,
    /// Travelled distance in metres.
    pub distance_meters: f64,
    /// Estimated travel time.
    pub duration: Duration,
    /// Path geometry from start to end.
    pub polyline: Vec<Coordinate>,
}

/// Errors from [`DirectionsProvider::route`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectionsError {
    /// The provider found no route for the requested mode.
    #[error("no {mode} route between the requested points")]
    NoRoute {
        /// Mode that was requested.
        mode: TravelMode,
    },
    /// The provider failed for another reason.
    #[error("directions provider failed: {message}")]
    Provider {
        /// Provider-specific status or description.
        message: String,
    },
}

/// Fetch directions between two coordinates.
///
/// Implementations wrap a concrete map provider. They must be safe to call
/// once per hop in sequence.
pub trait DirectionsProvider {
    /// Route from `from` to `to` using `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectionsError::NoRoute`] when the mode cannot connect the
    /// two points.
    fn route(
        &self,
        from: Coordinate,
        to: Coordinate,
        mode: TravelMode,
    ) -> Result<HopDirections, DirectionsError>;
}

impl<D: DirectionsProvider + ?Sized> DirectionsProvider for &D {
    fn route(
        &self,
        from: Coordinate,
        to: Coordinate,
        mode: TravelMode,
    ) -> Result<HopDirections, DirectionsError> {
        (**self).route(from, to, mode)
    }
}
