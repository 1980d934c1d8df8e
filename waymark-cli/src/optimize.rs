//! Optimize command implementation for the Waymark CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use waymark_core::{
    Coordinate, Destination, LockConstraint, RouteRequest, RouteRequestError, RouteResult,
    optimize_route,
};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{ARG_OPTIMIZE_REQUEST, CliError, ENV_OPTIMIZE_REQUEST, write_json};

/// CLI arguments for the `optimize` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Order the destinations of a JSON route request. Locked \
                 destinations are visited first in their lock order, the \
                 rest nearest-first from wherever the trip currently is.",
    about = "Optimize the visiting order of a route request"
)]
#[ortho_config(prefix = "WAYMARK")]
pub(crate) struct OptimizeArgs {
    /// Path to a JSON file containing the route request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
}

impl OptimizeArgs {
    fn into_config(self) -> Result<OptimizeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        OptimizeConfig::try_from(merged)
    }
}

/// Resolved `optimize` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OptimizeConfig {
    pub(crate) request_path: Utf8PathBuf,
}

impl OptimizeConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        let path = &self.request_path;
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field: ARG_OPTIMIZE_REQUEST,
                path: path.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field: ARG_OPTIMIZE_REQUEST,
                    path: path.clone(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_OPTIMIZE_REQUEST,
                path: path.clone(),
                source,
            }),
        }
    }
}

impl TryFrom<OptimizeArgs> for OptimizeConfig {
    type Error = CliError;

    fn try_from(args: OptimizeArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_OPTIMIZE_REQUEST,
            env: ENV_OPTIMIZE_REQUEST,
        })?;
        Ok(Self { request_path })
    }
}

/// Wire format of a route request file.
///
/// Locks are normally written inline on each destination. A top-level
/// `constraints` array, parallel to `destinations`, replaces the inline
/// locks when present and must match it in length.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct RouteRequestFile {
    pub(crate) origin: Coordinate,
    pub(crate) destinations: Vec<DestinationEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) constraints: Option<Vec<LockConstraint>>,
}

/// A destination with its optional lock, flattened into one JSON object.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct DestinationEntry {
    #[serde(flatten)]
    pub(crate) destination: Destination,
    #[serde(flatten)]
    pub(crate) constraint: LockConstraint,
}

impl RouteRequestFile {
    fn into_request(self) -> Result<RouteRequest, RouteRequestError> {
        let (destinations, inline): (Vec<Destination>, Vec<LockConstraint>) = self
            .destinations
            .into_iter()
            .map(|entry| (entry.destination, entry.constraint))
            .unzip();
        let constraints = self.constraints.unwrap_or(inline);
        RouteRequest::new(self.origin, destinations, constraints)
    }
}

pub(crate) fn run_optimize(args: OptimizeArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let route = optimize_file(&config.request_path)?;
    write_json(writer, &route)
}

/// Load the request at `path` and optimize it.
pub(crate) fn optimize_file(path: &Utf8Path) -> Result<RouteResult, CliError> {
    let request = load_route_request(path)?;
    log::debug!(
        "optimizing {} destinations from {}",
        request.len(),
        path
    );
    Ok(optimize_route(&request))
}

/// Loads a JSON-encoded route request from disk.
pub(crate) fn load_route_request(path: &Utf8Path) -> Result<RouteRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRouteRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let decoded: RouteRequestFile =
        serde_json::from_reader(reader).map_err(|source| CliError::ParseRouteRequest {
            path: path.to_path_buf(),
            source,
        })?;
    decoded
        .into_request()
        .map_err(|source| CliError::InvalidRouteRequest {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<OptimizeConfig, CliError> {
    let merged = OptimizeArgs::merge_from_layers(layers).map_err(CliError::from)?;
    OptimizeConfig::try_from(merged)
}
