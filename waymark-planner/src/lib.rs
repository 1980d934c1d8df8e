//! Trip planning on top of the Waymark route optimizer.
//!
//! [`TripPlanner`] is the glue every map integration shares: it geocodes the
//! typed addresses through a [`Geocoder`](waymark_core::Geocoder), orders the
//! stops with [`optimize_route`](waymark_core::optimize_route), then asks a
//! [`DirectionsProvider`](waymark_core::DirectionsProvider) for each hop in
//! turn. Provider-specific code only needs to implement the two traits.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod planner;
mod trip;

pub use error::PlanError;
pub use planner::{TripPlanner, TripPlannerConfig};
pub use trip::{PlannedLeg, TripPlan, TripRequest, WaypointInput};
