//! The `cgs` command line: argument parsing, command execution and output.
//!
//! Kept as a library so the whole pipeline from argv to rendered text can be
//! exercised without spawning a process.

mod error;
mod output;

use cgs_config::{Config, ConfigOverrides, default_config_dir};
use cgs_geodesy::{
    Body, LatLon, Vec3d, cartesian_to_lat_lon, checked, clamp_degrees_180, clamp_degrees_360,
    forward_geo_solve, inverse_geo_solve, lat_lon_to_cartesian,
};
use clap::{Parser, Subcommand, ValueEnum};

pub use error::CliError;
pub use output::{Outcome, render};

/// Spherical geodesy on celestial bodies.
#[derive(Parser, Debug)]
#[command(name = "cgs", version, about = "Spherical geodesy on celestial bodies")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub overrides: ConfigOverrides,
}

/// One geodesy operation.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Surface position of a latitude/longitude, in meters.
    #[command(allow_negative_numbers = true)]
    ToCartesian { lat: f64, lon: f64 },

    /// Latitude/longitude below a body-fixed position.
    #[command(allow_negative_numbers = true)]
    ToLatLon { x: f64, y: f64, z: f64 },

    /// Destination after travelling a distance (m) on an initial heading.
    #[command(allow_negative_numbers = true)]
    Forward {
        lat: f64,
        lon: f64,
        heading: f64,
        distance: f64,
    },

    /// Distance and headings between two points.
    #[command(allow_negative_numbers = true)]
    Inverse {
        lat1: f64,
        lon1: f64,
        lat2: f64,
        lon2: f64,
    },

    /// Wrap an angle in degrees.
    #[command(allow_negative_numbers = true)]
    Clamp {
        angle: f64,
        #[arg(long, value_enum, default_value_t = ClampRange::Half)]
        range: ClampRange,
    },

    /// List the built-in bodies.
    Bodies,
}

/// Target range for `cgs clamp`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClampRange {
    /// `(-180, 180]`
    #[value(name = "180")]
    Half,
    /// `[0, 360)`
    #[value(name = "360")]
    Full,
}

/// Load `config.ron` and apply command-line overrides.
///
/// An explicit `--config` directory is created with defaults when empty. The
/// per-user default location is only read, never written.
pub fn load_config(overrides: &ConfigOverrides) -> Result<Config, CliError> {
    let mut config = match &overrides.config {
        Some(dir) => Config::load_or_create(dir)?,
        None => match default_config_dir() {
            Some(dir) if dir.join("config.ron").exists() => Config::load_or_create(&dir)?,
            _ => Config::default(),
        },
    };
    config.apply_cli_overrides(overrides);
    Ok(config)
}

/// Run one command against the configured body.
pub fn execute(command: &Command, config: &Config) -> Result<Outcome, CliError> {
    let body = config.body.resolve()?;
    let strict = config.output.strict;
    tracing::debug!(?command, body = %body.name, radius_m = body.radius_m, strict, "executing");

    let outcome = match *command {
        Command::ToCartesian { lat, lon } => {
            let position = if strict {
                checked::try_lat_lon_to_cartesian(lat, lon, body.radius_m)?
            } else {
                lat_lon_to_cartesian(lat, lon, body.radius_m)
            };
            Outcome::Cartesian {
                body,
                from: LatLon::new(lat, lon),
                position,
            }
        }
        Command::ToLatLon { x, y, z } => {
            let position = Vec3d::new(x, y, z);
            let lat_lon = if strict {
                checked::try_cartesian_to_lat_lon(position)?
            } else {
                cartesian_to_lat_lon(position)
            };
            Outcome::LatLon { position, lat_lon }
        }
        Command::Forward {
            lat,
            lon,
            heading,
            distance,
        } => {
            let solution = if strict {
                checked::try_forward_solve(lat, lon, heading, distance, body.radius_m)?
            } else {
                forward_geo_solve(lat, lon, heading, distance, body.radius_m)
            };
            Outcome::Forward {
                body,
                from: LatLon::new(lat, lon),
                heading,
                distance,
                solution,
            }
        }
        Command::Inverse {
            lat1,
            lon1,
            lat2,
            lon2,
        } => {
            let solution = if strict {
                checked::try_inverse_solve(lat1, lon1, lat2, lon2, body.radius_m)?
            } else {
                inverse_geo_solve(lat1, lon1, lat2, lon2, body.radius_m)
            };
            Outcome::Inverse {
                body,
                from: LatLon::new(lat1, lon1),
                to: LatLon::new(lat2, lon2),
                solution,
            }
        }
        Command::Clamp { angle, range } => {
            let value = match range {
                ClampRange::Half => clamp_degrees_180(angle),
                ClampRange::Full => clamp_degrees_360(angle),
            };
            Outcome::Clamp { angle, value }
        }
        Command::Bodies => Outcome::Bodies {
            bodies: Body::PRESETS.to_vec(),
        },
    };

    if !outcome.is_finite() {
        tracing::warn!("result is not finite; pass --strict to reject invalid input");
    }
    Ok(outcome)
}
