//! Structured logging for the geodesy tools.
//!
//! Logs go to stderr through `tracing`, so command output on stdout stays
//! machine-readable. The level comes from `RUST_LOG` when set, otherwise
//! from the `debug.log_level` config setting. Debug builds can also write
//! JSON logs to a file for later inspection.

use cgs_config::Config;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config says otherwise.
pub const DEFAULT_FILTER: &str = "warn";

/// Name of the JSON log file written in debug builds.
pub const LOG_FILE_NAME: &str = "cgs.log";

/// Initialize the global tracing subscriber.
///
/// Sets up:
/// - stderr output with uptime timestamps, targets and levels
/// - JSON file logging when `debug_build` is set and `log_dir` is usable
/// - environment-based filtering (`RUST_LOG` wins over the config)
///
/// Must be called at most once per process.
///
/// # Examples
///
/// ```no_run
/// use cgs_config::Config;
/// use cgs_log::init_logging;
///
/// let config = Config::default();
/// init_logging(None, false, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = filter_directive(config);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| config_env_filter(&filter_str));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && let Some(log_file) = open_log_file(log_dir)
    {
        let file_layer = fmt::layer()
            .with_writer(Mutex::new(log_file))
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        tracing::debug!(
            filter = %filter_str,
            log_dir = %log_dir.display(),
            "logging initialized"
        );
        return;
    }

    subscriber.init();
    tracing::debug!(filter = %filter_str, "logging initialized");
}

/// The filter directive string for a given config.
///
/// An empty `log_level` falls back to [`DEFAULT_FILTER`].
pub fn filter_directive(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.trim().is_empty() => {
            config.debug.log_level.trim().to_string()
        }
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Create an `EnvFilter` with the default filter string.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

/// Parse a configured directive, falling back to [`default_env_filter`]
/// when it does not parse.
fn config_env_filter(filter_str: &str) -> EnvFilter {
    EnvFilter::try_new(filter_str).unwrap_or_else(|err| {
        eprintln!("invalid log filter {filter_str:?} ({err}), using {DEFAULT_FILTER:?}");
        default_env_filter()
    })
}

/// Create `log_dir` if needed and open a fresh log file inside it.
fn open_log_file(log_dir: &Path) -> Option<File> {
    std::fs::create_dir_all(log_dir).ok()?;
    File::create(log_dir.join(LOG_FILE_NAME)).ok()
}
