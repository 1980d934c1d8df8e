//! Inputs to a single route optimization.

use thiserror::Error;

use crate::Coordinate;

/// A named stop the caller wants to visit.
///
/// `name` is the address or place string the user typed; it is echoed back
/// in [`RouteResult::optimized_names`](crate::RouteResult::optimized_names).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Destination {
    /// Display name of the stop.
    pub name: String,
    /// Geocoded position of the stop.
    pub location: Coordinate,
}

impl Destination {
    /// Pair a display name with a coordinate.
    pub fn new(name: impl Into<String>, location: Coordinate) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}

/// Whether a destination keeps a fixed position in the visiting order.
///
/// Locked destinations are visited first, sorted by `order`. A locked entry
/// without an `order` sorts as if its order were `0`.
///
/// # Examples
/// ```
/// use waymark_core::LockConstraint;
///
/// assert!(!LockConstraint::unlocked().locked);
/// assert_eq!(LockConstraint::locked_at(2).sort_key(), 2);
/// assert_eq!(LockConstraint { locked: true, order: None }.sort_key(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LockConstraint {
    /// The destination is excluded from greedy reordering.
    #[cfg_attr(feature = "serde", serde(default))]
    pub locked: bool,
    /// One-based position among the locked destinations.
    #[cfg_attr(feature = "serde", serde(default))]
    pub order: Option<u32>,
}

impl LockConstraint {
    /// A destination free to be reordered.
    #[must_use]
    pub const fn unlocked() -> Self {
        Self {
            locked: false,
            order: None,
        }
    }

    /// A destination pinned to `order` among the locked subset.
    #[must_use]
    pub const fn locked_at(order: u32) -> Self {
        Self {
            locked: true,
            order: Some(order),
        }
    }

    /// Sort key used when placing locked destinations.
    #[must_use]
    pub const fn sort_key(&self) -> u32 {
        match self.order {
            Some(order) => order,
            None => 0,
        }
    }
}

/// Errors returned by [`RouteRequest::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteRequestError {
    /// Every destination needs exactly one lock constraint.
    #[error("{destinations} destinations were supplied with {constraints} lock constraints")]
    ConstraintCountMismatch {
        /// Number of destinations supplied.
        destinations: usize,
        /// Number of constraints supplied.
        constraints: usize,
    },
}

/// A validated optimization input.
///
/// `constraints[i]` always describes `destinations[i]`; the constructor
/// refuses mismatched lengths rather than truncating.
///
/// # Examples
/// ```
/// use waymark_core::{Coordinate, Destination, LockConstraint, RouteRequest, RouteRequestError};
///
/// let origin = Coordinate::new(0.0, 0.0);
/// let stops = vec![Destination::new("Museum", Coordinate::new(0.0, 1.0))];
///
/// let request = RouteRequest::new(origin, stops.clone(), vec![LockConstraint::unlocked()])?;
/// assert_eq!(request.len(), 1);
///
/// let err = RouteRequest::new(origin, stops, Vec::new()).unwrap_err();
/// assert!(matches!(err, RouteRequestError::ConstraintCountMismatch { .. }));
/// # Ok::<(), RouteRequestError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    origin: Coordinate,
    destinations: Vec<Destination>,
    constraints: Vec<LockConstraint>,
}

impl RouteRequest {
    /// Validate and construct a request.
    ///
    /// # Errors
    ///
    /// Returns [`RouteRequestError::ConstraintCountMismatch`] when
    /// `constraints` and `destinations` differ in length.
    pub fn new(
        origin: Coordinate,
        destinations: Vec<Destination>,
        constraints: Vec<LockConstraint>,
    ) -> Result<Self, RouteRequestError> {
        if destinations.len() != constraints.len() {
            return Err(RouteRequestError::ConstraintCountMismatch {
                destinations: destinations.len(),
                constraints: constraints.len(),
            });
        }
        Ok(Self {
            origin,
            destinations,
            constraints,
        })
    }

    /// Build a request in which every destination may be reordered.
    #[must_use]
    pub fn unconstrained(origin: Coordinate, destinations: Vec<Destination>) -> Self {
        let constraints = vec![LockConstraint::unlocked(); destinations.len()];
        Self {
            origin,
            destinations,
            constraints,
        }
    }

    /// Starting point of the trip.
    #[must_use]
    pub const fn origin(&self) -> Coordinate {
        self.origin
    }

    /// Destinations in caller order.
    #[must_use]
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Lock constraints aligned with [`Self::destinations`].
    #[must_use]
    pub fn constraints(&self) -> &[LockConstraint] {
        &self.constraints
    }

    /// Number of destinations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Whether the request has no destinations.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Whether any destination is locked.
    #[must_use]
    pub fn has_locks(&self) -> bool {
        self.constraints.iter().any(|constraint| constraint.locked)
    }

    /// Iterate destinations together with their constraints.
    pub fn entries(&self) -> impl Iterator<Item = (&Destination, &LockConstraint)> {
        self.destinations.iter().zip(&self.constraints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn stops() -> Vec<Destination> {
        vec![
            Destination::new("A", Coordinate::new(0.0, 10.0)),
            Destination::new("B", Coordinate::new(0.0, 1.0)),
        ]
    }

    #[rstest]
    fn rejects_short_constraint_list(stops: Vec<Destination>) {
        let err = RouteRequest::new(
            Coordinate::new(0.0, 0.0),
            stops,
            vec![LockConstraint::unlocked()],
        )
        .expect_err("mismatched lengths");
        assert_eq!(
            err,
            RouteRequestError::ConstraintCountMismatch {
                destinations: 2,
                constraints: 1,
            }
        );
    }

    #[rstest]
    fn unconstrained_request_has_no_locks(stops: Vec<Destination>) {
        let request = RouteRequest::unconstrained(Coordinate::new(0.0, 0.0), stops);
        assert_eq!(request.constraints().len(), 2);
        assert!(!request.has_locks());
    }

    #[rstest]
    fn reports_locks(stops: Vec<Destination>) {
        let request = RouteRequest::new(
            Coordinate::new(0.0, 0.0),
            stops,
            vec![LockConstraint::unlocked(), LockConstraint::locked_at(1)],
        )
        .expect("aligned lengths");
        assert!(request.has_locks());
        let locked: Vec<&str> = request
            .entries()
            .filter(|(_, constraint)| constraint.locked)
            .map(|(destination, _)| destination.name.as_str())
            .collect();
        assert_eq!(locked, ["B"]);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn constraint_fields_default_when_absent() {
        let constraint: LockConstraint = serde_json::from_str("{}").expect("parse");
        assert_eq!(constraint, LockConstraint::unlocked());
    }
}
