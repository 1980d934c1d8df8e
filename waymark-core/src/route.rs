//! Optimized visiting orders and the hops between their stops.

use crate::{Coordinate, RouteRequest};

/// One visited destination in an optimized order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RouteStop {
    /// Index of the destination in the caller's input list.
    pub index: usize,
    /// Display name of the destination.
    pub name: String,
    /// Distance of the hop arriving at this stop, in kilometres.
    pub distance_km: f64,
    /// The stop was placed by its lock rather than by proximity.
    pub locked: bool,
}

/// The visiting order produced by [`optimize_route`](crate::optimize_route).
///
/// `order` and `optimized_names` are parallel; `total_distance_km` sums every
/// hop including the one leaving the origin.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RouteResult {
    /// Original destination indices in visiting order.
    pub order: Vec<usize>,
    /// Destination names in visiting order.
    pub optimized_names: Vec<String>,
    /// Estimated great-circle length of the whole route.
    #[cfg_attr(feature = "serde", serde(rename = "totalDistance"))]
    pub total_distance_km: f64,
    /// Per-stop detail in visiting order.
    pub stops: Vec<RouteStop>,
}

impl RouteResult {
    /// A route that visits nothing.
    ///
    /// # Examples
    /// ```
    /// use waymark_core::RouteResult;
    ///
    /// let route = RouteResult::empty();
    /// assert!(route.is_empty());
    /// assert_eq!(route.total_distance_km, 0.0);
    /// ```
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            order: Vec::new(),
            optimized_names: Vec::new(),
            total_distance_km: 0.0,
            stops: Vec::new(),
        }
    }

    /// Assemble a result from stops in visiting order.
    #[must_use]
    pub fn from_stops(stops: Vec<RouteStop>, total_distance_km: f64) -> Self {
        let order = stops.iter().map(|stop| stop.index).collect();
        let optimized_names = stops.iter().map(|stop| stop.name.clone()).collect();
        Self {
            order,
            optimized_names,
            total_distance_km,
            stops,
        }
    }

    /// Number of visited stops.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no stop is visited.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Consecutive legs of this route, starting at the request's origin.
    ///
    /// One [`Hop`] is produced per stop. Indices that do not belong to
    /// `request` are skipped.
    ///
    /// # Examples
    /// ```
    /// use waymark_core::{Coordinate, Destination, RouteRequest, optimize_route};
    ///
    /// let origin = Coordinate::new(0.0, 0.0);
    /// let request = RouteRequest::unconstrained(
    ///     origin,
    ///     vec![
    ///         Destination::new("far", Coordinate::new(0.0, 2.0)),
    ///         Destination::new("near", Coordinate::new(0.0, 1.0)),
    ///     ],
    /// );
    /// let route = optimize_route(&request);
    /// let hops = route.hops(&request);
    /// assert_eq!(hops.len(), 2);
    /// assert_eq!(hops[0].from, origin);
    /// assert_eq!(hops[0].destination, 1);
    /// assert_eq!(hops[1].from, hops[0].to);
    /// ```
    #[must_use]
    pub fn hops(&self, request: &RouteRequest) -> Vec<Hop> {
        let destinations = request.destinations();
        let mut from = request.origin();
        let mut from_destination = None;
        let mut hops = Vec::with_capacity(self.order.len());
        for &index in &self.order {
            let Some(target) = destinations.get(index) else {
                log::warn!("route refers to unknown destination {index}; skipping hop");
                continue;
            };
            hops.push(Hop {
                from,
                to: target.location,
                from_destination,
                destination: index,
            });
            from = target.location;
            from_destination = Some(index);
        }
        hops
    }
}

impl Default for RouteResult {
    fn default() -> Self {
        Self::empty()
    }
}

/// One leg between consecutive stops, ready for a directions request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hop {
    /// Where the leg starts.
    pub from: Coordinate,
    /// Where the leg ends.
    pub to: Coordinate,
    /// Input index of the departure stop; `None` for the origin.
    pub from_destination: Option<usize>,
    /// Input index of the arrival stop.
    pub destination: usize,
}
