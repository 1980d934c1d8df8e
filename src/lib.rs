//! Facade crate for the Waymark trip engine.
//!
//! This crate re-exports the core routing types and exposes the trip planner
//! and treasure scatter behind feature flags.
//!
//! ```
//! use waymark::{Coordinate, Destination, RouteRequest, optimize_route};
//!
//! let request = RouteRequest::unconstrained(
//!     Coordinate::new(0.0, 0.0),
//!     vec![
//!         Destination::new("Far", Coordinate::new(0.0, 2.0)),
//!         Destination::new("Near", Coordinate::new(0.0, 1.0)),
//!     ],
//! );
//! assert_eq!(optimize_route(&request).optimized_names, ["Near", "Far"]);
//! ```

#![forbid(unsafe_code)]

pub use waymark_core::{
    Coordinate, Destination, DirectionsError, DirectionsProvider, EARTH_RADIUS_KM, GeocodeError,
    Geocoder, Hop, HopDirections, LockConstraint, ParseTravelModeError, RouteRequest,
    RouteRequestError, RouteResult, RouteStop, TravelMode, haversine_km, haversine_m,
    optimize_route,
};

#[cfg(feature = "test-support")]
pub use waymark_core::test_support;

#[cfg(feature = "planner")]
pub use waymark_planner::{
    PlanError, PlannedLeg, TripPlan, TripPlanner, TripPlannerConfig, TripRequest, WaypointInput,
};

#[cfg(feature = "treasure")]
pub use waymark_treasure::{
    COLLECT_RADIUS_METERS, ReachCheck, ScatterError, Treasure, TreasureField, check_reach,
    check_reach_within, scatter,
};
