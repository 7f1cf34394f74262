//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use cgs_geodesy::Body;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Which body conversions run against.
    pub body: BodyConfig,
    /// How results are printed.
    pub output: OutputConfig,
    /// Logging settings.
    pub debug: DebugConfig,
}

/// Body selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BodyConfig {
    /// Preset name (case-insensitive), or a label for a custom body.
    pub name: String,
    /// Explicit radius in meters. Overrides the preset radius when set.
    pub radius_m: Option<f64>,
}

/// Output formatting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Decimal places for raw numbers in text output.
    pub precision: usize,
    /// Emit JSON instead of text.
    pub json: bool,
    /// Reject out-of-range and non-finite inputs instead of propagating NaN.
    pub strict: bool,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Also write JSON logs to `cgs.log` in debug builds.
    pub log_to_file: bool,
}

// --- Default implementations ---

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            name: Body::KERBIN.name.to_string(),
            radius_m: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: 6,
            json: false,
            strict: false,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_to_file: false,
        }
    }
}

impl BodyConfig {
    /// Resolve the configured body.
    ///
    /// An explicit radius always wins; otherwise the name must match a preset.
    pub fn resolve(&self) -> Result<Body, ConfigError> {
        match self.radius_m {
            Some(r) if r.is_finite() && r > 0.0 => Ok(Body::new(self.name.clone(), r)),
            Some(r) => Err(ConfigError::InvalidRadius(r)),
            None => {
                Body::by_name(&self.name).ok_or_else(|| ConfigError::UnknownBody(self.name.clone()))
            }
        }
    }
}

/// Default per-user config directory (`<config_dir>/cgs`), if the platform has one.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cgs"))
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Re-read the file: returns `Some(new_config)` if it changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
