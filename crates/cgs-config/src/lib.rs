//! Configuration for the geodesy command-line tools.
//!
//! Settings persist to disk as `config.ron` and are overridden per run by
//! command-line flags. Unknown or missing fields fall back to defaults so
//! older and newer config files both load.

mod cli;
mod config;
mod error;

pub use cli::ConfigOverrides;
pub use config::{BodyConfig, Config, DebugConfig, OutputConfig, default_config_dir};
pub use error::ConfigError;
