//! Configuration error types.

/// Errors that can occur when loading, saving, or interpreting configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write the config file to disk.
    #[error("failed to write config: {0}")]
    WriteError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),

    /// The configured body is not a preset and has no explicit radius.
    #[error("unknown body {0:?}; set body.radius_m or pass --radius")]
    UnknownBody(String),

    /// The configured radius is not a positive finite number.
    #[error("body radius must be positive, got {0}")]
    InvalidRadius(f64),
}
