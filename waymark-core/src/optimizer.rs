//! Constrained nearest-neighbour route ordering.
//!
//! Ordering happens in two phases:
//!
//! 1. Locked destinations are visited first, sorted by their lock order. The
//!    sort is stable, so equal orders keep their input order.
//! 2. Remaining unlocked destinations are appended greedily, always stepping
//!    to the closest one from the current position. Exact ties go to the
//!    lowest input index.
//!
//! Locked and greedy stops never interleave: every locked stop precedes every
//! greedy one.

use crate::{Coordinate, Destination, RouteRequest, RouteResult, RouteStop, haversine_km};

/// Running state while a route is built.
struct Walk {
    position: Coordinate,
    visited: Vec<bool>,
    stops: Vec<RouteStop>,
    total_km: f64,
}

impl Walk {
    fn new(origin: Coordinate, size: usize) -> Self {
        Self {
            position: origin,
            visited: vec![false; size],
            stops: Vec::with_capacity(size),
            total_km: 0.0,
        }
    }

    fn is_visited(&self, index: usize) -> bool {
        self.visited.get(index).copied().unwrap_or(true)
    }

    #[expect(clippy::float_arithmetic, reason = "distance accumulation")]
    fn visit(&mut self, index: usize, destination: &Destination, distance_km: f64, locked: bool) {
        if let Some(flag) = self.visited.get_mut(index) {
            *flag = true;
        }
        self.stops.push(RouteStop {
            index,
            name: destination.name.clone(),
            distance_km,
            locked,
        });
        self.total_km += distance_km;
        self.position = destination.location;
    }

    fn finish(self) -> RouteResult {
        RouteResult::from_stops(self.stops, self.total_km)
    }
}

/// Order `request`'s destinations into a visiting route.
///
/// The function is pure and deterministic: identical requests produce
/// identical results.
///
/// # Examples
/// ```
/// use waymark_core::{Coordinate, Destination, LockConstraint, RouteRequest, optimize_route};
///
/// let request = RouteRequest::new(
///     Coordinate::new(0.0, 0.0),
///     vec![
///         Destination::new("A", Coordinate::new(0.0, 10.0)),
///         Destination::new("B", Coordinate::new(0.0, 1.0)),
///         Destination::new("C", Coordinate::new(0.0, 2.0)),
///     ],
///     vec![
///         LockConstraint::unlocked(),
///         LockConstraint::locked_at(1),
///         LockConstraint::unlocked(),
///     ],
/// )?;
///
/// let route = optimize_route(&request);
/// assert_eq!(route.optimized_names, ["B", "C", "A"]);
/// assert_eq!(route.order, [1, 2, 0]);
/// # Ok::<(), waymark_core::RouteRequestError>(())
/// ```
#[must_use]
pub fn optimize_route(request: &RouteRequest) -> RouteResult {
    if request.is_empty() {
        return RouteResult::empty();
    }

    let destinations = request.destinations();
    let mut walk = Walk::new(request.origin(), destinations.len());

    let mut locked: Vec<(usize, u32)> = request
        .constraints()
        .iter()
        .enumerate()
        .filter(|(_, constraint)| constraint.locked)
        .map(|(index, constraint)| (index, constraint.sort_key()))
        .collect();
    // `sort_by_key` is stable; equal orders keep input order.
    locked.sort_by_key(|&(_, order)| order);
    let locked_count = locked.len();

    for (index, _) in locked {
        if walk.is_visited(index) {
            continue;
        }
        let Some(destination) = destinations.get(index) else {
            continue;
        };
        let distance_km = haversine_km(walk.position, destination.location);
        walk.visit(index, destination, distance_km, true);
    }

    while walk.stops.len() < destinations.len() {
        let Some((index, distance_km)) = nearest_unlocked(request, &walk) else {
            break;
        };
        let Some(destination) = destinations.get(index) else {
            break;
        };
        walk.visit(index, destination, distance_km, false);
    }

    log::debug!(
        "ordered {} destinations ({locked_count} locked, {} greedy)",
        walk.stops.len(),
        walk.stops.len().saturating_sub(locked_count)
    );
    walk.finish()
}

/// Closest unvisited, unlocked destination from the walk's position.
///
/// Candidates are scanned in index order with a strict `<`, so the first of
/// several equally close candidates wins.
fn nearest_unlocked(request: &RouteRequest, walk: &Walk) -> Option<(usize, f64)> {
    let (best, _) = request
        .entries()
        .enumerate()
        .filter(|&(index, (_, constraint))| !constraint.locked && !walk.is_visited(index))
        .map(|(index, (destination, _))| {
            (index, haversine_km(walk.position, destination.location))
        })
        .fold(
            (None, f64::INFINITY),
            |(best, best_km), (index, distance_km)| {
                if distance_km < best_km {
                    (Some((index, distance_km)), distance_km)
                } else {
                    (best, best_km)
                }
            },
        );
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LockConstraint;
    use rstest::{fixture, rstest};

    const TOLERANCE_KM: f64 = 1e-9;

    fn dest(name: &str, lat: f64, lng: f64) -> Destination {
        Destination::new(name, Coordinate::new(lat, lng))
    }

    #[fixture]
    fn origin() -> Coordinate {
        Coordinate::new(0.0, 0.0)
    }

    fn request(
        origin: Coordinate,
        destinations: Vec<Destination>,
        constraints: Vec<LockConstraint>,
    ) -> RouteRequest {
        RouteRequest::new(origin, destinations, constraints).expect("aligned request")
    }

    #[rstest]
    fn empty_request_yields_empty_route(origin: Coordinate) {
        let route = optimize_route(&RouteRequest::unconstrained(origin, Vec::new()));
        assert_eq!(route, RouteResult::empty());
    }

    #[rstest]
    fn unlocked_stops_follow_nearest_neighbour(origin: Coordinate) {
        let route = optimize_route(&RouteRequest::unconstrained(
            origin,
            vec![dest("far", 0.0, 3.0), dest("near", 0.0, 1.0), dest("mid", 0.0, 2.0)],
        ));
        assert_eq!(route.optimized_names, ["near", "mid", "far"]);
        assert_eq!(route.order, [1, 2, 0]);
        assert!(route.stops.iter().all(|stop| !stop.locked));
    }

    #[rstest]
    fn all_locked_stops_follow_lock_order_regardless_of_distance(origin: Coordinate) {
        let route = optimize_route(&request(
            origin,
            vec![dest("X", 0.0, 1.0), dest("Y", 0.0, 5.0), dest("Z", 0.0, 2.0)],
            vec![
                LockConstraint::locked_at(2),
                LockConstraint::locked_at(1),
                LockConstraint::locked_at(3),
            ],
        ));
        assert_eq!(route.optimized_names, ["Y", "X", "Z"]);
        assert!(route.stops.iter().all(|stop| stop.locked));
    }

    #[rstest]
    fn locked_stop_is_placed_before_greedy_stops(origin: Coordinate) {
        let a = dest("A", 0.0, 10.0);
        let b = dest("B", 0.0, 1.0);
        let c = dest("C", 0.0, 2.0);
        let expected_km = haversine_km(origin, b.location)
            + haversine_km(b.location, c.location)
            + haversine_km(c.location, a.location);

        let route = optimize_route(&request(
            origin,
            vec![a, b, c],
            vec![
                LockConstraint::unlocked(),
                LockConstraint::locked_at(1),
                LockConstraint::unlocked(),
            ],
        ));

        assert_eq!(route.optimized_names, ["B", "C", "A"]);
        assert_eq!(route.order, [1, 2, 0]);
        assert!((route.total_distance_km - expected_km).abs() < TOLERANCE_KM);
    }

    #[rstest]
    fn locked_stop_far_away_still_goes_first(origin: Coordinate) {
        let route = optimize_route(&request(
            origin,
            vec![dest("near", 0.0, 0.1), dest("sunset", 0.0, 20.0)],
            vec![LockConstraint::unlocked(), LockConstraint::locked_at(1)],
        ));
        assert_eq!(route.optimized_names, ["sunset", "near"]);
    }

    #[rstest]
    fn duplicate_lock_orders_keep_input_order(origin: Coordinate) {
        let route = optimize_route(&request(
            origin,
            vec![dest("first", 0.0, 9.0), dest("second", 0.0, 1.0), dest("third", 0.0, 5.0)],
            vec![
                LockConstraint::locked_at(1),
                LockConstraint::locked_at(1),
                LockConstraint::locked_at(0),
            ],
        ));
        assert_eq!(route.optimized_names, ["third", "first", "second"]);
    }

    #[rstest]
    fn missing_lock_order_sorts_as_zero(origin: Coordinate) {
        let route = optimize_route(&request(
            origin,
            vec![dest("ordered", 0.0, 1.0), dest("unordered", 0.0, 2.0)],
            vec![
                LockConstraint::locked_at(1),
                LockConstraint {
                    locked: true,
                    order: None,
                },
            ],
        ));
        assert_eq!(route.optimized_names, ["unordered", "ordered"]);
    }

    #[rstest]
    fn exact_ties_go_to_lowest_index(origin: Coordinate) {
        let route = optimize_route(&RouteRequest::unconstrained(
            origin,
            vec![dest("west", 0.0, -1.0), dest("east", 0.0, 1.0)],
        ));
        assert_eq!(route.order, [0, 1]);
    }

    #[rstest]
    fn order_field_is_ignored_when_unlocked(origin: Coordinate) {
        let route = optimize_route(&request(
            origin,
            vec![dest("far", 0.0, 2.0), dest("near", 0.0, 1.0)],
            vec![
                LockConstraint {
                    locked: false,
                    order: Some(1),
                },
                LockConstraint::unlocked(),
            ],
        ));
        assert_eq!(route.optimized_names, ["near", "far"]);
    }

    #[rstest]
    fn stop_distances_sum_to_total(origin: Coordinate) {
        let route = optimize_route(&RouteRequest::unconstrained(
            origin,
            vec![dest("a", 1.0, 1.0), dest("b", -2.0, 0.5), dest("c", 0.3, -1.2)],
        ));
        let sum: f64 = route.stops.iter().map(|stop| stop.distance_km).sum();
        assert!((sum - route.total_distance_km).abs() < TOLERANCE_KM);
    }

    #[rstest]
    fn repeated_runs_are_identical(origin: Coordinate) {
        let input = request(
            origin,
            vec![dest("a", 1.0, 1.0), dest("b", -2.0, 0.5), dest("c", 0.3, -1.2)],
            vec![
                LockConstraint::unlocked(),
                LockConstraint::locked_at(1),
                LockConstraint::unlocked(),
            ],
        );
        assert_eq!(optimize_route(&input), optimize_route(&input));
    }

    #[rstest]
    fn non_finite_destinations_are_never_picked(origin: Coordinate) {
        let route = optimize_route(&RouteRequest::unconstrained(
            origin,
            vec![dest("broken", f64::NAN, 0.0)],
        ));
        assert!(route.is_empty());
    }
}
