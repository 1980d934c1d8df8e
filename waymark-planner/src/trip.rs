//! Trip inputs as typed by the user and the plans built from them.

use std::time::Duration;

use waymark_core::{HopDirections, LockConstraint, RouteResult, TravelMode};

/// An intermediate stop as entered in the route form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WaypointInput {
    /// Address or place name; blank entries are ignored.
    pub address: String,
    /// Keep this stop at a fixed position, e.g. to catch a sunset.
    pub locked: bool,
    /// One-based position among locked stops.
    pub order: Option<u32>,
    /// Mode used when leaving this stop.
    pub travel_mode: Option<TravelMode>,
}

impl WaypointInput {
    /// A free stop that may be reordered.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }

    /// Pin the stop at `order` among locked stops.
    #[must_use]
    pub const fn locked_at(mut self, order: u32) -> Self {
        self.locked = true;
        self.order = Some(order);
        self
    }

    /// Leave this stop using `mode`.
    #[must_use]
    pub const fn leaving_by(mut self, mode: TravelMode) -> Self {
        self.travel_mode = Some(mode);
        self
    }

    pub(crate) const fn constraint(&self) -> LockConstraint {
        LockConstraint {
            locked: self.locked,
            order: self.order,
        }
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.address.trim().is_empty()
    }
}

/// A trip from `origin` to `destination` through optional waypoints.
///
/// The destination takes part in ordering like any unlocked waypoint, so it
/// is only visited last when it is the farthest stop.
///
/// # Examples
/// ```
/// use waymark_core::TravelMode;
/// use waymark_planner::{TripRequest, WaypointInput};
///
/// let trip = TripRequest::new("Station", "Harbour")
///     .with_waypoint(WaypointInput::new("Museum"))
///     .with_waypoint(WaypointInput::new("Viewpoint").locked_at(1))
///     .with_origin_mode(TravelMode::Walking);
/// assert_eq!(trip.waypoints.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TripRequest {
    /// Starting address.
    pub origin: String,
    /// Final address.
    pub destination: String,
    /// Mode used when leaving the origin.
    pub origin_mode: Option<TravelMode>,
    /// Intermediate stops in entry order.
    pub waypoints: Vec<WaypointInput>,
}

impl TripRequest {
    /// A direct trip with no waypoints.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            ..Self::default()
        }
    }

    /// Append a waypoint.
    #[must_use]
    pub fn with_waypoint(mut self, waypoint: WaypointInput) -> Self {
        self.waypoints.push(waypoint);
        self
    }

    /// Leave the origin using `mode`.
    #[must_use]
    pub const fn with_origin_mode(mut self, mode: TravelMode) -> Self {
        self.origin_mode = Some(mode);
        self
    }
}

/// Directions for one hop of a planned trip.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedLeg {
    /// Departure name as typed.
    pub from: String,
    /// Arrival name as typed.
    pub to: String,
    /// Provider directions for the hop.
    pub directions: HopDirections,
}

/// A fully planned trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripPlan {
    /// Optimized order; `None` for a direct trip without waypoints.
    pub route: Option<RouteResult>,
    /// Hops in travel order.
    pub legs: Vec<PlannedLeg>,
    /// Provider-reported distance over all legs, in metres.
    pub total_distance_meters: f64,
    /// Provider-reported duration over all legs.
    pub total_duration: Duration,
}

impl TripPlan {
    pub(crate) fn from_legs(route: Option<RouteResult>, legs: Vec<PlannedLeg>) -> Self {
        let total_distance_meters = legs.iter().map(|leg| leg.directions.distance_meters).sum();
        let total_duration = legs.iter().map(|leg| leg.directions.duration).sum();
        Self {
            route,
            legs,
            total_distance_meters,
            total_duration,
        }
    }

    /// Travel modes per leg, in order.
    #[must_use]
    pub fn modes(&self) -> Vec<TravelMode> {
        self.legs.iter().map(|leg| leg.directions.mode).collect()
    }

    /// Stop names in travel order, starting with the origin.
    #[must_use]
    pub fn stop_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.legs.first().map(|leg| leg.from.as_str()).into_iter().collect();
        names.extend(self.legs.iter().map(|leg| leg.to.as_str()));
        names
    }
}
