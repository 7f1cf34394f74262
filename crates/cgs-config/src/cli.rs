//! Command-line overrides for the persisted configuration.

use std::path::PathBuf;

use clap::Args;

use crate::Config;

/// Global flags shared by every `cgs` subcommand.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    /// Body preset to use (Kerbin, Mun, Minmus, Duna, Eve, Earth).
    #[arg(long, global = true)]
    pub body: Option<String>,

    /// Body radius in meters (overrides the preset radius).
    #[arg(long, global = true)]
    pub radius: Option<f64>,

    /// Decimal places for raw numbers.
    #[arg(long, global = true)]
    pub precision: Option<usize>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Reject out-of-range or non-finite inputs.
    #[arg(long, global = true)]
    pub strict: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    ///
    /// Picking a different body by name drops any radius from the file, so
    /// `--body Mun` means the Mun even when `config.ron` sets a custom radius.
    pub fn apply_cli_overrides(&mut self, args: &ConfigOverrides) {
        if let Some(ref name) = args.body {
            self.body.name = name.clone();
            self.body.radius_m = None;
        }
        if let Some(radius) = args.radius {
            self.body.radius_m = Some(radius);
        }
        if let Some(precision) = args.precision {
            self.output.precision = precision;
        }
        if args.json {
            self.output.json = true;
        }
        if args.strict {
            self.output.strict = true;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
