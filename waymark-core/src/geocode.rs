//! Resolve typed addresses or place names to coordinates.
//!
//! Geocoding itself is delegated to the map provider; this module only fixes
//! the boundary the trip planner calls through.

use thiserror::Error;

use crate::Coordinate;

/// Errors from [`Geocoder::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    /// The query was blank after trimming.
    #[error("cannot geocode an empty query")]
    EmptyQuery,
    /// The provider has no match for the query.
    #[error("no location found for {query:?}")]
    NotFound {
        /// The query as supplied by the caller.
        query: String,
    },
    /// The provider failed for another reason.
    #[error("geocoding provider failed: {message}")]
    Provider {
        /// Provider-specific status or description.
        message: String,
    },
}

/// Turn a free-form place string into a [`Coordinate`].
///
/// # Examples
///
/// ```rust
/// use waymark_core::{Coordinate, GeocodeError, Geocoder};
///
/// struct Fixed;
///
/// impl Geocoder for Fixed {
///     fn resolve(&self, query: &str) -> Result<Coordinate, GeocodeError> {
///         match query.trim() {
///             "" => Err(GeocodeError::EmptyQuery),
///             "City Hall" => Ok(Coordinate::new(37.5663, 126.9779)),
///             other => Err(GeocodeError::NotFound { query: other.to_owned() }),
///         }
///     }
/// }
///
/// assert!(Fixed.resolve("City Hall").is_ok());
/// assert_eq!(Fixed.resolve("  "), Err(GeocodeError::EmptyQuery));
/// ```
pub trait Geocoder {
    /// Resolve `query` to a coordinate.
    ///
    /// # Errors
    ///
    /// Implementations return [`GeocodeError::NotFound`] when nothing matches
    /// and [`GeocodeError::EmptyQuery`] for blank input.
    fn resolve(&self, query: &str) -> Result<Coordinate, GeocodeError>;
}

impl<G: Geocoder + ?Sized> Geocoder for &G {
    fn resolve(&self, query: &str) -> Result<Coordinate, GeocodeError> {
        (**self).resolve(query)
    }
}
