//! Seeded placement of treasures around a centre point.

use std::f64::consts::{PI, TAU};

use rand::distributions::Standard;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use waymark_core::{Coordinate, EARTH_RADIUS_KM};

/// Default number of treasures per field.
const DEFAULT_COUNT: u32 = 5;
/// Default scatter radius: ten metres.
const DEFAULT_RADIUS_KM: f64 = 0.01;

/// Where and how many treasures to scatter.
///
/// # Examples
/// ```
/// use waymark_core::Coordinate;
/// use waymark_treasure::{TreasureField, scatter};
///
/// let field = TreasureField::around(Coordinate::new(37.5665, 126.978)).with_seed(7);
/// let treasures = scatter(&field)?;
/// assert_eq!(treasures.len(), 5);
/// assert_eq!(treasures[0].title, "Treasure 1");
/// # Ok::<(), waymark_treasure::ScatterError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TreasureField {
    /// Centre of the scatter disc, usually the user's position.
    pub centre: Coordinate,
    /// Number of treasures to place.
    pub count: u32,
    /// Disc radius in kilometres.
    pub radius_km: f64,
    /// Seed for reproducible placement.
    pub seed: u64,
}

impl TreasureField {
    /// Five treasures within ten metres of `centre`, seed `0`.
    #[must_use]
    pub const fn around(centre: Coordinate) -> Self {
        Self {
            centre,
            count: DEFAULT_COUNT,
            radius_km: DEFAULT_RADIUS_KM,
            seed: 0,
        }
    }

    /// Place `count` treasures.
    #[must_use]
    pub const fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Scatter within `radius_km` of the centre.
    #[must_use]
    pub const fn with_radius_km(mut self, radius_km: f64) -> Self {
        self.radius_km = radius_km;
        self
    }

    /// Use `seed` for placement.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the field can be scattered.
    ///
    /// # Errors
    ///
    /// Rejects a non-finite centre, a centre on a pole (where longitude
    /// offsets are undefined) and a negative or non-finite radius.
    pub fn validate(&self) -> Result<(), ScatterError> {
        if !self.centre.is_finite() {
            return Err(ScatterError::NonFiniteCentre);
        }
        if self.centre.lat.abs() >= 90.0 {
            return Err(ScatterError::PolarCentre {
                lat: self.centre.lat,
            });
        }
        if !self.radius_km.is_finite() || self.radius_km < 0.0 {
            return Err(ScatterError::InvalidRadius {
                radius_km: self.radius_km,
            });
        }
        Ok(())
    }
}

/// Errors returned by [`scatter`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScatterError {
    /// The centre has a NaN or infinite component.
    #[error("treasure field centre must be finite")]
    NonFiniteCentre,
    /// The centre sits on a pole.
    #[error("cannot scatter treasures around a pole (latitude {lat})")]
    PolarCentre {
        /// Offending latitude.
        lat: f64,
    },
    /// The radius is negative or not finite.
    #[error("scatter radius must be a finite, non-negative distance, got {radius_km} km")]
    InvalidRadius {
        /// Offending radius.
        radius_km: f64,
    },
}

/// A collectible marker.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Treasure {
    /// One-based identifier within the field.
    pub id: u64,
    /// Where the treasure lies.
    pub location: Coordinate,
    /// Display title.
    pub title: String,
}

/// Scatter the treasures described by `field`.
///
/// Each treasure gets a uniform random bearing and a uniform random distance
/// below the radius. The same field always yields the same treasures.
///
/// # Errors
///
/// Returns the first [`TreasureField::validate`] failure.
pub fn scatter(field: &TreasureField) -> Result<Vec<Treasure>, ScatterError> {
    field.validate()?;
    let mut rng = ChaCha8Rng::seed_from_u64(field.seed);
    let treasures: Vec<Treasure> = (1..=u64::from(field.count))
        .map(|id| {
            let bearing: f64 = rng.sample(Standard);
            let reach: f64 = rng.sample(Standard);
            Treasure {
                id,
                location: offset(field.centre, bearing, reach, field.radius_km),
                title: format!("Treasure {id}"),
            }
        })
        .collect();
    log::debug!(
        "scattered {} treasures within {} km of ({}, {})",
        treasures.len(),
        field.radius_km,
        field.centre.lat,
        field.centre.lng
    );
    Ok(treasures)
}

/// Move `centre` by `reach × radius_km` along bearing `bearing × 2π`.
///
/// `bearing` and `reach` are unit-interval samples.
#[expect(
    clippy::float_arithmetic,
    reason = "spherical offset from a bearing and distance"
)]
fn offset(centre: Coordinate, bearing: f64, reach: f64, radius_km: f64) -> Coordinate {
    let angle = bearing * TAU;
    let distance_km = reach * radius_km;
    let delta_lat = (distance_km / EARTH_RADIUS_KM) * (180.0 / PI);
    let delta_lng = delta_lat / (centre.lat * PI / 180.0).cos();
    Coordinate::new(
        centre.lat + delta_lat * angle.cos(),
        centre.lng + delta_lng * angle.sin(),
    )
}
