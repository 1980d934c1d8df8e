//! Collectible treasures scattered around the user.
//!
//! [`scatter`] drops a seeded, reproducible set of [`Treasure`]s inside a
//! small radius of a centre point, and [`check_reach`] decides whether a user
//! stands close enough to collect one. Storing treasures is left to the
//! backend that owns them.

#![forbid(unsafe_code)]

mod reach;
mod scatter;

pub use reach::{COLLECT_RADIUS_METERS, ReachCheck, check_reach, check_reach_within};
pub use scatter::{ScatterError, Treasure, TreasureField, scatter};
