//! Degree/radian conversion and angle wrapping.

use std::f64::consts::PI;

/// Convert degrees to radians.
#[must_use]
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees.
#[must_use]
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Wrap an angle in degrees into `[0, 360)`.
///
/// `%` on `f64` keeps the sign of the dividend, so negative inputs are
/// shifted up by one turn afterwards. A negative remainder too small to
/// survive that shift lands on exactly `360.0` and is folded to `0.0`. The
/// result is congruent to the input modulo 360. Non-finite input yields NaN.
#[must_use]
pub fn clamp_degrees_360(angle: f64) -> f64 {
    let angle = angle % 360.0;
    if angle >= 0.0 {
        return angle;
    }
    let shifted = angle + 360.0;
    if shifted >= 360.0 { 0.0 } else { shifted }
}

/// Wrap an angle in degrees into `(-180, 180]`.
///
/// `180` stays `180` and `-180` becomes `180`; a full turn maps to `0`.
#[must_use]
pub fn clamp_degrees_180(angle: f64) -> f64 {
    let angle = clamp_degrees_360(angle);
    if angle > 180.0 { angle - 360.0 } else { angle }
}
