//! Command-line interface for Waymark's route and treasure tooling.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod distance;
mod error;
mod fs;
mod optimize;
mod scatter;

pub use error::CliError;

use distance::DistanceArgs;
use optimize::OptimizeArgs;
use scatter::ScatterArgs;

pub(crate) const ARG_OPTIMIZE_REQUEST: &str = "request";
pub(crate) const ENV_OPTIMIZE_REQUEST: &str = "WAYMARK_CMDS_OPTIMIZE_REQUEST_PATH";

pub(crate) const ARG_SCATTER_LAT: &str = "lat";
pub(crate) const ARG_SCATTER_LNG: &str = "lng";
pub(crate) const ARG_SCATTER_COUNT: &str = "count";
pub(crate) const ARG_SCATTER_RADIUS_KM: &str = "radius-km";
pub(crate) const ARG_SCATTER_SEED: &str = "seed";
pub(crate) const ENV_SCATTER_LAT: &str = "WAYMARK_CMDS_SCATTER_LAT";
pub(crate) const ENV_SCATTER_LNG: &str = "WAYMARK_CMDS_SCATTER_LNG";

pub(crate) const ARG_DISTANCE_FROM_LAT: &str = "from-lat";
pub(crate) const ARG_DISTANCE_FROM_LNG: &str = "from-lng";
pub(crate) const ARG_DISTANCE_TO_LAT: &str = "to-lat";
pub(crate) const ARG_DISTANCE_TO_LNG: &str = "to-lng";
pub(crate) const ENV_DISTANCE_FROM_LAT: &str = "WAYMARK_CMDS_DISTANCE_FROM_LAT";
pub(crate) const ENV_DISTANCE_FROM_LNG: &str = "WAYMARK_CMDS_DISTANCE_FROM_LNG";
pub(crate) const ENV_DISTANCE_TO_LAT: &str = "WAYMARK_CMDS_DISTANCE_TO_LAT";
pub(crate) const ENV_DISTANCE_TO_LNG: &str = "WAYMARK_CMDS_DISTANCE_TO_LNG";

/// Run the Waymark CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments or configuration are invalid, when an
/// input file cannot be read, or when writing the result fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Optimize(args) => optimize::run_optimize(args, &mut stdout),
        Command::Scatter(args) => scatter::run_scatter(args, &mut stdout),
        Command::Distance(args) => distance::run_distance(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "waymark",
    about = "Order trip stops and scatter treasures around a location",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Order destinations from a JSON request, honouring locked stops.
    Optimize(OptimizeArgs),
    /// Scatter treasures around a point.
    Scatter(ScatterArgs),
    /// Great-circle distance between two points.
    Distance(DistanceArgs),
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
