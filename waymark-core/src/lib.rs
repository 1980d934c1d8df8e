//! Core domain types and route ordering for Waymark.
//!
//! The crate is provider-agnostic: each map integration adapts its own
//! coordinate and place types into a [`RouteRequest`], runs
//! [`optimize_route`], and feeds the resulting [`Hop`]s to whichever
//! [`DirectionsProvider`] it talks to.
//!
//! Geocoding and turn-by-turn directions are modelled only as traits. The
//! optimizer itself performs no I/O and holds no shared state, so calls are
//! independent and may run concurrently.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod coordinate;
pub mod directions;
pub mod distance;
pub mod geocode;
pub mod optimizer;
pub mod request;
pub mod route;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use coordinate::Coordinate;
pub use directions::{
    DirectionsError, DirectionsProvider, HopDirections, ParseTravelModeError, TravelMode,
};
pub use distance::{EARTH_RADIUS_KM, haversine_km, haversine_m};
pub use geocode::{GeocodeError, Geocoder};
pub use optimizer::optimize_route;
pub use request::{Destination, LockConstraint, RouteRequest, RouteRequestError};
pub use route::{Hop, RouteResult, RouteStop};
