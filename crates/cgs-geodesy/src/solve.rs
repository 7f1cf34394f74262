//! Forward and inverse geodetic problems on a sphere.
//!
//! Both solvers are single-pass closed forms of the Vincenty equations with
//! zero flattening. There is no iteration and no ellipsoid; the results are
//! only meaningful for a spherical body.

use serde::{Deserialize, Serialize};

use crate::angle::{clamp_degrees_180, deg_to_rad, rad_to_deg};

/// Destination of a forward solve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForwardSolution {
    /// Destination latitude, degrees.
    pub lat: f64,
    /// Destination longitude, degrees in `(-180, 180]`.
    pub lon: f64,
    /// Azimuth of travel at the destination, degrees in `[-180, 180]`. Not wrapped.
    pub heading_back: f64,
}

/// Distance and azimuths between two points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InverseSolution {
    /// Great-circle arc length in meters.
    pub distance: f64,
    /// Initial azimuth at point 1 toward point 2, degrees in `[-180, 180]`.
    pub heading_1_to_2: f64,
    /// Azimuth of travel on arrival at point 2, degrees in `[-180, 180]`.
    pub heading_2_to_1: f64,
}

/// Travel `distance` meters from (`lat1`, `lon1`) along initial `heading1`
/// on a sphere of `radius` meters.
///
/// The angular distance is `distance / radius` with no flattening term.
/// Only the destination longitude is wrapped (into `(-180, 180]`). Inputs
/// are not validated: a zero radius or NaN input propagates to the output,
/// and a distance beyond one circumference simply keeps going around.
#[must_use]
pub fn forward_geo_solve(
    lat1: f64,
    lon1: f64,
    heading1: f64,
    distance: f64,
    radius: f64,
) -> ForwardSolution {
    let u1 = deg_to_rad(lat1);
    let alpha1 = deg_to_rad(heading1);
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_alpha1, cos_alpha1) = alpha1.sin_cos();

    // Azimuth of the great circle at the equator crossing; constant along the path.
    let sin_alpha = cos_u1 * sin_alpha1;

    let sigma = distance / radius;
    let (sin_sigma, cos_sigma) = sigma.sin_cos();

    let lat2 = rad_to_deg(f64::atan2(
        sin_u1 * cos_sigma + cos_u1 * sin_sigma * cos_alpha1,
        (sin_alpha.powi(2) + (sin_u1 * sin_sigma - cos_u1 * cos_sigma * cos_alpha1).powi(2))
            .sqrt(),
    ));

    let lambda = rad_to_deg(f64::atan2(
        sin_sigma * sin_alpha1,
        cos_u1 * cos_sigma + sin_u1 * sin_sigma * cos_alpha1,
    ));
    let lon2 = clamp_degrees_180(lon1 + lambda);

    let heading_back = rad_to_deg(f64::atan2(
        sin_alpha,
        -sin_u1 * sin_sigma + cos_u1 * cos_sigma * cos_alpha1,
    ));

    ForwardSolution {
        lat: lat2,
        lon: lon2,
        heading_back,
    }
}

/// Distance and azimuths between (`lat1`, `lon1`) and (`lat2`, `lon2`) on a
/// sphere of `radius` meters.
///
/// The central angle comes from `atan2(sin σ, cos σ)` rather than `acos`, so
/// it stays well conditioned near 0 and 180 degrees.
///
/// Coincident points give a distance of 0. The azimuths are undefined there
/// and come back as `f64::atan2(0.0, 0.0)`, which is `0.0`.
#[must_use]
pub fn inverse_geo_solve(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    radius: f64,
) -> InverseSolution {
    let lambda = deg_to_rad(lon2 - lon1);
    let (sin_u1, cos_u1) = deg_to_rad(lat1).sin_cos();
    let (sin_u2, cos_u2) = deg_to_rad(lat2).sin_cos();
    let (sin_lambda, cos_lambda) = lambda.sin_cos();

    let sin_sigma = ((cos_u1 * sin_lambda).powi(2)
        + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
    .sqrt();
    let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
    let sigma = f64::atan2(sin_sigma, cos_sigma);

    let heading_1_to_2 = rad_to_deg(f64::atan2(
        cos_u2 * sin_lambda,
        cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda,
    ));
    let heading_2_to_1 = rad_to_deg(f64::atan2(
        cos_u1 * sin_lambda,
        -sin_u1 * cos_u2 + cos_u1 * sin_u2 * cos_lambda,
    ));

    InverseSolution {
        distance: sigma * radius,
        heading_1_to_2,
        heading_2_to_1,
    }
}
