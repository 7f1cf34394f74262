//! Validating wrappers around the conversion and solver functions.
//!
//! Each `try_*` function rejects the inputs that would make its unchecked
//! counterpart produce NaN or a physically meaningless answer, then calls
//! that counterpart unchanged. Valid input gives bit-identical results.

use crate::coords::{LatLon, cartesian_to_lat_lon, lat_lon_to_cartesian};
use crate::error::GeodesyError;
use crate::solve::{ForwardSolution, InverseSolution, forward_geo_solve, inverse_geo_solve};
use crate::vector::Vec3d;

fn finite(name: &'static str, value: f64) -> Result<f64, GeodesyError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeodesyError::NonFinite { name })
    }
}

fn radius(value: f64) -> Result<f64, GeodesyError> {
    let value = finite("radius", value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(GeodesyError::NonPositiveRadius(value))
    }
}

fn latitude(name: &'static str, value: f64) -> Result<f64, GeodesyError> {
    let value = finite(name, value)?;
    if (-90.0..=90.0).contains(&value) {
        Ok(value)
    } else {
        Err(GeodesyError::LatitudeOutOfRange(value))
    }
}

fn longitude(name: &'static str, value: f64) -> Result<f64, GeodesyError> {
    let value = finite(name, value)?;
    if (-180.0..=180.0).contains(&value) {
        Ok(value)
    } else {
        Err(GeodesyError::LongitudeOutOfRange(value))
    }
}

/// [`lat_lon_to_cartesian`] with range and radius checks.
pub fn try_lat_lon_to_cartesian(lat: f64, lon: f64, rad: f64) -> Result<Vec3d, GeodesyError> {
    Ok(lat_lon_to_cartesian(
        latitude("lat", lat)?,
        longitude("lon", lon)?,
        radius(rad)?,
    ))
}

/// [`cartesian_to_lat_lon`] that refuses zero-length and non-finite vectors.
pub fn try_cartesian_to_lat_lon(vec: Vec3d) -> Result<LatLon, GeodesyError> {
    finite("x", vec.x)?;
    finite("y", vec.y)?;
    finite("z", vec.z)?;
    // The squared length can underflow to zero for tiny but non-zero vectors;
    // those still normalize to NaN, so treat them the same way.
    if vec.length_squared() == 0.0 {
        return Err(GeodesyError::ZeroVector);
    }
    Ok(cartesian_to_lat_lon(vec))
}

/// [`forward_geo_solve`] with range, radius and distance checks.
///
/// The heading may be any finite angle.
pub fn try_forward_solve(
    lat1: f64,
    lon1: f64,
    heading1: f64,
    distance: f64,
    rad: f64,
) -> Result<ForwardSolution, GeodesyError> {
    let lat1 = latitude("lat1", lat1)?;
    let lon1 = longitude("lon1", lon1)?;
    let heading1 = finite("heading", heading1)?;
    let distance = finite("distance", distance)?;
    if distance < 0.0 {
        return Err(GeodesyError::NegativeDistance(distance));
    }
    Ok(forward_geo_solve(lat1, lon1, heading1, distance, radius(rad)?))
}

/// [`inverse_geo_solve`] with range and radius checks.
pub fn try_inverse_solve(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    rad: f64,
) -> Result<InverseSolution, GeodesyError> {
    Ok(inverse_geo_solve(
        latitude("lat1", lat1)?,
        longitude("lon1", lon1)?,
        latitude("lat2", lat2)?,
        longitude("lon2", lon2)?,
        radius(rad)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input_matches_unchecked() {
        assert_eq!(
            try_lat_lon_to_cartesian(12.0, -45.0, 600_000.0).unwrap(),
            lat_lon_to_cartesian(12.0, -45.0, 600_000.0)
        );
        let v = Vec3d::new(1.0, -2.0, 0.5);
        assert_eq!(try_cartesian_to_lat_lon(v).unwrap(), cartesian_to_lat_lon(v));
        assert_eq!(
            try_forward_solve(10.0, 20.0, 33.0, 1234.0, 600_000.0).unwrap(),
            forward_geo_solve(10.0, 20.0, 33.0, 1234.0, 600_000.0)
        );
        assert_eq!(
            try_inverse_solve(10.0, 20.0, -5.0, 170.0, 600_000.0).unwrap(),
            inverse_geo_solve(10.0, 20.0, -5.0, 170.0, 600_000.0)
        );
    }

    #[test]
    fn test_range_boundaries_accepted() {
        assert!(try_lat_lon_to_cartesian(90.0, 180.0, 1.0).is_ok());
        assert!(try_lat_lon_to_cartesian(-90.0, -180.0, 1.0).is_ok());
        assert!(try_forward_solve(0.0, 0.0, -720.0, 0.0, 1.0).is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(
            try_lat_lon_to_cartesian(90.5, 0.0, 1.0),
            Err(GeodesyError::LatitudeOutOfRange(90.5))
        );
        assert_eq!(
            try_lat_lon_to_cartesian(0.0, -181.0, 1.0),
            Err(GeodesyError::LongitudeOutOfRange(-181.0))
        );
        assert_eq!(
            try_inverse_solve(0.0, 0.0, -91.0, 0.0, 1.0),
            Err(GeodesyError::LatitudeOutOfRange(-91.0))
        );
    }

    #[test]
    fn test_radius_rejected() {
        assert_eq!(
            try_lat_lon_to_cartesian(0.0, 0.0, 0.0),
            Err(GeodesyError::NonPositiveRadius(0.0))
        );
        assert_eq!(
            try_inverse_solve(0.0, 0.0, 1.0, 1.0, -5.0),
            Err(GeodesyError::NonPositiveRadius(-5.0))
        );
        assert_eq!(
            try_forward_solve(0.0, 0.0, 0.0, 1.0, f64::INFINITY),
            Err(GeodesyError::NonFinite { name: "radius" })
        );
    }

    #[test]
    fn test_negative_distance_rejected() {
        assert_eq!(
            try_forward_solve(0.0, 0.0, 90.0, -1.0, 1.0),
            Err(GeodesyError::NegativeDistance(-1.0))
        );
    }

    #[test]
    fn test_nan_reports_field_name() {
        assert_eq!(
            try_forward_solve(0.0, 0.0, f64::NAN, 1.0, 1.0),
            Err(GeodesyError::NonFinite { name: "heading" })
        );
        assert_eq!(
            try_cartesian_to_lat_lon(Vec3d::new(1.0, f64::NAN, 0.0)),
            Err(GeodesyError::NonFinite { name: "y" })
        );
    }

    #[test]
    fn test_zero_vector_rejected() {
        assert_eq!(
            try_cartesian_to_lat_lon(Vec3d::ZERO),
            Err(GeodesyError::ZeroVector)
        );
        assert_eq!(
            try_cartesian_to_lat_lon(Vec3d::new(1e-200, 0.0, 0.0)),
            Err(GeodesyError::ZeroVector)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GeodesyError::LatitudeOutOfRange(95.0).to_string(),
            "latitude 95 is outside [-90, 90]"
        );
        assert_eq!(
            GeodesyError::NonFinite { name: "lat1" }.to_string(),
            "lat1 is not finite"
        );
    }
}
