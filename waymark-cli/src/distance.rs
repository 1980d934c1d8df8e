//! Distance command implementation for the Waymark CLI.

use std::io::Write;

use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use waymark_core::{Coordinate, haversine_km, haversine_m};

use crate::{
    ARG_DISTANCE_FROM_LAT, ARG_DISTANCE_FROM_LNG, ARG_DISTANCE_TO_LAT, ARG_DISTANCE_TO_LNG,
    CliError, ENV_DISTANCE_FROM_LAT, ENV_DISTANCE_FROM_LNG, ENV_DISTANCE_TO_LAT,
    ENV_DISTANCE_TO_LNG, write_json,
};

/// CLI arguments for the `distance` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Great-circle distance between two points")]
#[ortho_config(prefix = "WAYMARK")]
pub(crate) struct DistanceArgs {
    /// Start latitude in degrees.
    #[arg(long = ARG_DISTANCE_FROM_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) from_lat: Option<f64>,
    /// Start longitude in degrees.
    #[arg(long = ARG_DISTANCE_FROM_LNG, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) from_lng: Option<f64>,
    /// End latitude in degrees.
    #[arg(long = ARG_DISTANCE_TO_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) to_lat: Option<f64>,
    /// End longitude in degrees.
    #[arg(long = ARG_DISTANCE_TO_LNG, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) to_lng: Option<f64>,
}

/// Endpoints of a distance query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DistanceQuery {
    pub(crate) from: Coordinate,
    pub(crate) to: Coordinate,
}

/// Output of the `distance` command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DistanceReport {
    pub(crate) distance_km: f64,
    pub(crate) distance_meters: f64,
}

impl DistanceQuery {
    pub(crate) fn measure(self) -> DistanceReport {
        DistanceReport {
            distance_km: haversine_km(self.from, self.to),
            distance_meters: haversine_m(self.from, self.to),
        }
    }
}

impl TryFrom<DistanceArgs> for DistanceQuery {
    type Error = CliError;

    fn try_from(args: DistanceArgs) -> Result<Self, Self::Error> {
        let require = |value: Option<f64>, field, env| {
            value.ok_or(CliError::MissingArgument { field, env })
        };
        let from = Coordinate::new(
            require(args.from_lat, ARG_DISTANCE_FROM_LAT, ENV_DISTANCE_FROM_LAT)?,
            require(args.from_lng, ARG_DISTANCE_FROM_LNG, ENV_DISTANCE_FROM_LNG)?,
        );
        let to = Coordinate::new(
            require(args.to_lat, ARG_DISTANCE_TO_LAT, ENV_DISTANCE_TO_LAT)?,
            require(args.to_lng, ARG_DISTANCE_TO_LNG, ENV_DISTANCE_TO_LNG)?,
        );
        Ok(Self { from, to })
    }
}

pub(crate) fn run_distance(args: DistanceArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let query = DistanceQuery::try_from(merged)?;
    write_json(writer, &query.measure())
}
