//! Errors reported by the `cgs` binary.

use cgs_config::ConfigError;
use cgs_geodesy::GeodesyError;

/// Everything that can make a `cgs` invocation fail.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Loading or resolving configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// `--strict` rejected an input.
    #[error("invalid input: {0}")]
    Geodesy(#[from] GeodesyError),

    /// Rendering JSON output failed.
    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}
