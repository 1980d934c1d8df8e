//! `TripPlanner`: geocode, order, then fetch directions hop by hop.

use waymark_core::{
    Coordinate, Destination, DirectionsProvider, Geocoder, LockConstraint, RouteRequest,
    TravelMode, optimize_route,
};

use crate::{PlanError, PlannedLeg, TripPlan, TripRequest, WaypointInput};

/// Configuration for [`TripPlanner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripPlannerConfig {
    /// Mode used for a hop whose departure point has no mode of its own.
    pub default_mode: TravelMode,
}

impl Default for TripPlannerConfig {
    fn default() -> Self {
        Self {
            default_mode: TravelMode::Driving,
        }
    }
}

/// Plans trips against a geocoder and a directions provider.
///
/// The planner is generic over the provider boundaries so each map
/// integration plugs in its own SDK adapters.
///
/// # Examples
/// ```
/// use waymark_core::Coordinate;
/// use waymark_core::test_support::{MemoryGeocoder, StraightLineDirections};
/// use waymark_planner::{TripPlanner, TripRequest, WaypointInput};
///
/// let geocoder = MemoryGeocoder::with_places([
///     ("Home", Coordinate::new(0.0, 0.0)),
///     ("Cafe", Coordinate::new(0.0, 0.01)),
///     ("Park", Coordinate::new(0.0, 0.02)),
/// ]);
/// let planner = TripPlanner::new(geocoder, StraightLineDirections::default());
/// let plan = planner.plan(&TripRequest::new("Home", "Park").with_waypoint(WaypointInput::new("Cafe")))?;
/// assert_eq!(plan.stop_names(), ["Home", "Cafe", "Park"]);
/// # Ok::<(), waymark_planner::PlanError>(())
/// ```
pub struct TripPlanner<G, D>
where
    G: Geocoder,
    D: DirectionsProvider,
{
    geocoder: G,
    directions: D,
    config: TripPlannerConfig,
}

/// A geocoded stop, with the mode used when leaving it.
struct ResolvedStop<'a> {
    name: &'a str,
    location: Coordinate,
    leaving_mode: Option<TravelMode>,
    constraint: LockConstraint,
}

impl<G, D> TripPlanner<G, D>
where
    G: Geocoder,
    D: DirectionsProvider,
{
    /// Construct a planner using default configuration.
    pub fn new(geocoder: G, directions: D) -> Self {
        Self::with_config(geocoder, directions, TripPlannerConfig::default())
    }

    /// Construct a planner with explicit configuration.
    pub const fn with_config(geocoder: G, directions: D, config: TripPlannerConfig) -> Self {
        Self {
            geocoder,
            directions,
            config,
        }
    }

    /// Plan `trip`.
    ///
    /// Blank waypoints are dropped. Without waypoints the origin and
    /// destination are connected directly, trying each mode in
    /// [`TravelMode::FALLBACK_ORDER`]. Otherwise waypoints are ordered by
    /// [`optimize_route`] together with the destination, which is appended as
    /// an ordinary unlocked stop. Each hop uses the mode of the stop it leaves
    /// from.
    ///
    /// # Errors
    ///
    /// Fails on the first location that cannot be geocoded, on the first hop
    /// without directions, or when no mode connects a direct trip.
    pub fn plan(&self, trip: &TripRequest) -> Result<TripPlan, PlanError> {
        let origin_name = required(&trip.origin, "origin")?;
        let destination_name = required(&trip.destination, "destination")?;
        let waypoints = active_waypoints(trip);
        if waypoints.is_empty() {
            return self.plan_direct(origin_name, destination_name);
        }

        let (origin, stops) = self.resolve_stops(origin_name, destination_name, waypoints)?;
        let request = RouteRequest::new(
            origin,
            stops
                .iter()
                .map(|stop| Destination::new(stop.name, stop.location))
                .collect(),
            stops.iter().map(|stop| stop.constraint).collect(),
        )?;
        if request.has_locks() {
            log::debug!(
                "applying {} locked waypoints",
                request.constraints().iter().filter(|c| c.locked).count()
            );
        }
        let route = optimize_route(&request);
        log::info!(
            "optimized {} stops, estimated {:.1} km",
            route.len(),
            route.total_distance_km
        );

        let visits: Vec<&ResolvedStop<'_>> = route
            .order
            .iter()
            .filter_map(|&index| stops.get(index))
            .collect();
        let legs = self.fetch_legs(trip, origin_name, origin, &visits)?;
        Ok(TripPlan::from_legs(Some(route), legs))
    }

    /// Plan `trip` visiting waypoints in the order they were entered.
    ///
    /// The destination is always the last stop and lock settings are ignored.
    /// Blank waypoints, the direct-trip fallback and per-hop travel modes
    /// behave as in [`Self::plan`]. The returned plan has no `route`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::plan`].
    pub fn plan_in_order(&self, trip: &TripRequest) -> Result<TripPlan, PlanError> {
        let origin_name = required(&trip.origin, "origin")?;
        let destination_name = required(&trip.destination, "destination")?;
        let waypoints = active_waypoints(trip);
        if waypoints.is_empty() {
            return self.plan_direct(origin_name, destination_name);
        }

        let (origin, stops) = self.resolve_stops(origin_name, destination_name, waypoints)?;
        let visits: Vec<&ResolvedStop<'_>> = stops.iter().collect();
        let legs = self.fetch_legs(trip, origin_name, origin, &visits)?;
        log::info!("planned {} stops in entry order", legs.len());
        Ok(TripPlan::from_legs(None, legs))
    }

    /// Geocode origin, destination and waypoints, in that order.
    ///
    /// The destination is appended unlocked after the waypoints.
    fn resolve_stops<'a>(
        &self,
        origin_name: &str,
        destination_name: &'a str,
        waypoints: Vec<&'a WaypointInput>,
    ) -> Result<(Coordinate, Vec<ResolvedStop<'a>>), PlanError> {
        let origin = self.resolve(origin_name)?;
        let destination = self.resolve(destination_name)?;
        let mut stops = Vec::with_capacity(waypoints.len().saturating_add(1));
        for waypoint in waypoints {
            let name = waypoint.address.trim();
            stops.push(ResolvedStop {
                name,
                location: self.resolve(name)?,
                leaving_mode: waypoint.travel_mode,
                constraint: waypoint.constraint(),
            });
        }
        stops.push(ResolvedStop {
            name: destination_name,
            location: destination,
            leaving_mode: None,
            constraint: LockConstraint::unlocked(),
        });
        Ok((origin, stops))
    }

    /// Request directions for each hop from the origin through `visits`.
    fn fetch_legs(
        &self,
        trip: &TripRequest,
        origin_name: &str,
        origin: Coordinate,
        visits: &[&ResolvedStop<'_>],
    ) -> Result<Vec<PlannedLeg>, PlanError> {
        let mut legs = Vec::with_capacity(visits.len());
        let mut departure: Option<&ResolvedStop<'_>> = None;
        for (position, &arrival) in visits.iter().enumerate() {
            let from_name = departure.map_or(origin_name, |stop| stop.name);
            let from = departure.map_or(origin, |stop| stop.location);
            let mode = departure
                .map_or(trip.origin_mode, |stop| stop.leaving_mode)
                .unwrap_or(self.config.default_mode);

            log::debug!("hop {position}: {from_name} -> {} by {mode}", arrival.name);
            let directions = self
                .directions
                .route(from, arrival.location, mode)
                .map_err(|source| PlanError::Directions {
                    hop: position,
                    from: from_name.to_owned(),
                    to: arrival.name.to_owned(),
                    source,
                })?;
            legs.push(PlannedLeg {
                from: from_name.to_owned(),
                to: arrival.name.to_owned(),
                directions,
            });
            departure = Some(arrival);
        }
        Ok(legs)
    }

    fn plan_direct(&self, origin_name: &str, destination_name: &str) -> Result<TripPlan, PlanError> {
        let from = self.resolve(origin_name)?;
        let to = self.resolve(destination_name)?;
        for mode in TravelMode::FALLBACK_ORDER {
            match self.directions.route(from, to, mode) {
                Ok(directions) => {
                    log::info!("direct route found by {mode}");
                    let leg = PlannedLeg {
                        from: origin_name.to_owned(),
                        to: destination_name.to_owned(),
                        directions,
                    };
                    return Ok(TripPlan::from_legs(None, vec![leg]));
                }
                Err(err) => log::warn!("{mode} failed for direct route: {err}"),
            }
        }
        Err(PlanError::NoRoute {
            from: origin_name.to_owned(),
            to: destination_name.to_owned(),
        })
    }

    fn resolve(&self, query: &str) -> Result<Coordinate, PlanError> {
        self.geocoder
            .resolve(query)
            .map_err(|source| PlanError::Geocode {
                query: query.to_owned(),
                source,
            })
    }
}

fn active_waypoints(trip: &TripRequest) -> Vec<&WaypointInput> {
    trip.waypoints
        .iter()
        .filter(|waypoint| !waypoint.is_blank())
        .collect()
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, PlanError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(PlanError::MissingEndpoint { field })
    } else {
        Ok(trimmed)
    }
}
