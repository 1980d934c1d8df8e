//! Property-based tests for the distance estimator and the route optimizer.
//!
//! # Invariants tested
//!
//! - **Symmetry:** `d(a, b) == d(b, a)`.
//! - **Identity:** `d(a, a) == 0` and distinct points are strictly apart.
//! - **Nearest neighbour:** unlocked requests match a reference greedy walk.
//! - **Accounting:** the reported total equals the recomputed hop sum.
//! - **Completeness:** the order is a permutation of the input indices.
//! - **Lock precedence:** locked stops come first, sorted by lock order.
//! - **Determinism:** identical input yields identical output.


use proptest::prelude::*;
use waymark_core::{Coordinate, RouteRequest, haversine_km, optimize_route};

use proptest_support::{
    constrained_strategy, coordinate_strategy, destinations_strategy, recomputed_length,
    reference_nearest_neighbour,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn distance_is_symmetric(a in coordinate_strategy(), b in coordinate_strategy()) {
        let forward = haversine_km(a, b);
        let backward = haversine_km(b, a);
        prop_assert!((forward - backward).abs() <= 1e-9 * forward.max(1.0));
    }

    #[test]
    fn distance_is_zero_only_for_identical_points(
        a in coordinate_strategy(),
        d_lat in 1e-4_f64..1.0,
    ) {
        prop_assert_eq!(haversine_km(a, a), 0.0);
        let b = Coordinate::new(a.lat + d_lat, a.lng);
        prop_assert!(haversine_km(a, b) > 0.0);
    }

    #[test]
    fn unlocked_routes_match_reference_nearest_neighbour(
        origin in coordinate_strategy(),
        destinations in destinations_strategy(0, 12),
    ) {
        let expected = reference_nearest_neighbour(origin, &destinations);
        let route = optimize_route(&RouteRequest::unconstrained(origin, destinations));
        prop_assert_eq!(route.order, expected);
    }

    #[test]
    fn total_matches_recomputed_hops(
        origin in coordinate_strategy(),
        (destinations, constraints) in constrained_strategy(0, 12),
    ) {
        let request = RouteRequest::new(origin, destinations, constraints)
            .expect("strategy aligns lengths");
        let route = optimize_route(&request);
        let recomputed = recomputed_length(origin, request.destinations(), &route.order);
        prop_assert!(
            (route.total_distance_km - recomputed).abs() <= 1e-6,
            "reported {} but recomputed {}",
            route.total_distance_km,
            recomputed
        );
    }

    #[test]
    fn order_is_a_permutation(
        origin in coordinate_strategy(),
        (destinations, constraints) in constrained_strategy(0, 12),
    ) {
        let request = RouteRequest::new(origin, destinations, constraints)
            .expect("strategy aligns lengths");
        let route = optimize_route(&request);
        let mut sorted = route.order.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..request.len()).collect::<Vec<_>>());
        prop_assert_eq!(route.optimized_names.len(), route.order.len());
    }

    #[test]
    fn locked_stops_precede_greedy_stops_in_lock_order(
        origin in coordinate_strategy(),
        (destinations, constraints) in constrained_strategy(1, 12),
    ) {
        let request = RouteRequest::new(origin, destinations, constraints)
            .expect("strategy aligns lengths");
        let route = optimize_route(&request);
        let locked_count = request.constraints().iter().filter(|c| c.locked).count();

        let (locked, greedy) = route.stops.split_at(locked_count);
        prop_assert!(locked.iter().all(|stop| stop.locked));
        prop_assert!(greedy.iter().all(|stop| !stop.locked));

        let keys: Vec<(u32, usize)> = locked
            .iter()
            .map(|stop| (request.constraints()[stop.index].sort_key(), stop.index))
            .collect();
        let mut expected = keys.clone();
        expected.sort_unstable();
        prop_assert_eq!(keys, expected);
    }

    #[test]
    fn optimization_is_deterministic(
        origin in coordinate_strategy(),
        (destinations, constraints) in constrained_strategy(0, 12),
    ) {
        let request = RouteRequest::new(origin, destinations, constraints)
            .expect("strategy aligns lengths");
        prop_assert_eq!(optimize_route(&request), optimize_route(&request));
    }
}
