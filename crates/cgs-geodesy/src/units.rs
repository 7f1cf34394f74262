//! Human-readable formatting for distances and angles.

/// 1 kilometer in meters.
pub const METERS_PER_KILOMETER: f64 = 1_000.0;

/// 1 megameter in meters.
pub const METERS_PER_MEGAMETER: f64 = 1_000_000.0;

/// Format a distance in meters, picking the largest unit that keeps the
/// value at or above 1.
///
/// Examples:
/// - 500.0 -> "500.000 m"
/// - 1_500.0 -> "1.500 km"
/// - 10_007_543.4 -> "10.008 Mm"
#[must_use]
pub fn format_distance(meters: f64) -> String {
    if !meters.is_finite() {
        return format!("{meters} m");
    }
    let sign = if meters < 0.0 { "-" } else { "" };
    let abs = meters.abs();

    if abs >= METERS_PER_MEGAMETER {
        format!("{}{:.3} Mm", sign, abs / METERS_PER_MEGAMETER)
    } else if abs >= METERS_PER_KILOMETER {
        format!("{}{:.3} km", sign, abs / METERS_PER_KILOMETER)
    } else {
        format!("{}{:.3} m", sign, abs)
    }
}

/// Format an angle in degrees with six decimals.
#[must_use]
pub fn format_angle(degrees: f64) -> String {
    format!("{degrees:.6}°")
}
