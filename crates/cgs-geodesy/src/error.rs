//! Errors surfaced by the checked conversion API.

/// Inputs rejected by the [`checked`](crate::checked) functions.
///
/// The unchecked functions never return these; they let NaN and infinity
/// propagate instead.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GeodesyError {
    /// An input was NaN or infinite.
    #[error("{name} is not finite")]
    NonFinite { name: &'static str },

    /// Body radius must be strictly positive.
    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    /// Latitude outside `[-90, 90]`.
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    /// Longitude outside `[-180, 180]`.
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    /// Travel distance must not be negative.
    #[error("distance must not be negative, got {0}")]
    NegativeDistance(f64),

    /// A zero-length vector has no direction to convert.
    #[error("cannot convert a zero-length vector to latitude/longitude")]
    ZeroVector,
}
