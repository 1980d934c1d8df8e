//! Errors raised while planning a trip.

use thiserror::Error;
use waymark_core::{DirectionsError, GeocodeError, RouteRequestError};

/// Errors returned by [`TripPlanner::plan`](crate::TripPlanner::plan).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The origin or the destination was blank.
    #[error("{field} must not be empty")]
    MissingEndpoint {
        /// Which endpoint was blank.
        field: &'static str,
    },
    /// A typed location could not be geocoded.
    #[error("failed to geocode {query:?}: {source}")]
    Geocode {
        /// The location as typed.
        query: String,
        /// Underlying geocoder error.
        #[source]
        source: GeocodeError,
    },
    /// The optimizer input could not be assembled.
    #[error(transparent)]
    Request(#[from] RouteRequestError),
    /// A hop of the optimized route has no directions.
    #[error("no directions for hop {hop} ({from} -> {to}): {source}")]
    Directions {
        /// Zero-based position of the hop in the route.
        hop: usize,
        /// Name of the hop's departure point.
        from: String,
        /// Name of the hop's arrival point.
        to: String,
        /// Underlying provider error.
        #[source]
        source: DirectionsError,
    },
    /// Every travel mode failed for a direct origin to destination trip.
    #[error("no travel mode connects {from} and {to}")]
    NoRoute {
        /// Origin as typed.
        from: String,
        /// Destination as typed.
        to: String,
    },
}
