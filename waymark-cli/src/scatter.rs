//! Scatter command implementation for the Waymark CLI.

use std::io::Write;

use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use waymark_core::Coordinate;
use waymark_treasure::{TreasureField, scatter};

use crate::{
    ARG_SCATTER_COUNT, ARG_SCATTER_LAT, ARG_SCATTER_LNG, ARG_SCATTER_RADIUS_KM, ARG_SCATTER_SEED,
    CliError, ENV_SCATTER_LAT, ENV_SCATTER_LNG, write_json,
};

/// CLI arguments for the `scatter` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Place treasures at seeded random points within a radius \
                 of a centre. The same seed always yields the same field.",
    about = "Scatter treasures around a point"
)]
#[ortho_config(prefix = "WAYMARK")]
pub(crate) struct ScatterArgs {
    /// Centre latitude in degrees.
    #[arg(long = ARG_SCATTER_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Centre longitude in degrees.
    #[arg(long = ARG_SCATTER_LNG, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// Number of treasures (default 5).
    #[arg(long = ARG_SCATTER_COUNT, value_name = "n")]
    #[serde(default)]
    pub(crate) count: Option<u32>,
    /// Scatter radius in kilometres (default 0.01).
    #[arg(long = ARG_SCATTER_RADIUS_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) radius_km: Option<f64>,
    /// Seed for reproducible placement (default 0).
    #[arg(long = ARG_SCATTER_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl ScatterArgs {
    fn into_field(self) -> Result<TreasureField, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        TreasureField::try_from(merged)
    }
}

impl TryFrom<ScatterArgs> for TreasureField {
    type Error = CliError;

    fn try_from(args: ScatterArgs) -> Result<Self, Self::Error> {
        let lat = args.lat.ok_or(CliError::MissingArgument {
            field: ARG_SCATTER_LAT,
            env: ENV_SCATTER_LAT,
        })?;
        let lng = args.lng.ok_or(CliError::MissingArgument {
            field: ARG_SCATTER_LNG,
            env: ENV_SCATTER_LNG,
        })?;
        let mut field = Self::around(Coordinate::new(lat, lng));
        if let Some(count) = args.count {
            field = field.with_count(count);
        }
        if let Some(radius_km) = args.radius_km {
            field = field.with_radius_km(radius_km);
        }
        if let Some(seed) = args.seed {
            field = field.with_seed(seed);
        }
        Ok(field)
    }
}

pub(crate) fn run_scatter(args: ScatterArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let field = args.into_field()?;
    let treasures = scatter(&field)?;
    write_json(writer, &treasures)
}
