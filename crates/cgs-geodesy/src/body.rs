//! Named spherical bodies, binding a radius for repeated conversions.

use std::borrow::Cow;
use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::coords::{LatLon, cartesian_to_lat_lon, lat_lon_to_cartesian};
use crate::solve::{ForwardSolution, InverseSolution, forward_geo_solve, inverse_geo_solve};
use crate::vector::Vec3d;

/// A spherical celestial body.
///
/// Only the mean radius matters to the geodesy functions. The body does not
/// carry a position; all coordinates are body-fixed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Human-readable name (e.g. "Kerbin", "Earth").
    pub name: Cow<'static, str>,
    /// Mean radius in meters. Always positive.
    pub radius_m: f64,
}

impl Body {
    pub const KERBIN: Body = Body::preset("Kerbin", 600_000.0);
    pub const MUN: Body = Body::preset("Mun", 200_000.0);
    pub const MINMUS: Body = Body::preset("Minmus", 60_000.0);
    pub const DUNA: Body = Body::preset("Duna", 320_000.0);
    pub const EVE: Body = Body::preset("Eve", 700_000.0);
    pub const EARTH: Body = Body::preset("Earth", 6_371_000.0);

    /// Every built-in body, smallest first.
    pub const PRESETS: [Body; 6] = [
        Self::MINMUS,
        Self::MUN,
        Self::DUNA,
        Self::KERBIN,
        Self::EVE,
        Self::EARTH,
    ];

    const fn preset(name: &'static str, radius_m: f64) -> Self {
        Self {
            name: Cow::Borrowed(name),
            radius_m,
        }
    }

    /// Define a custom body.
    ///
    /// # Panics
    ///
    /// Panics if `radius_m` is not a positive finite number.
    pub fn new(name: impl Into<String>, radius_m: f64) -> Self {
        assert!(
            radius_m.is_finite() && radius_m > 0.0,
            "Body radius must be positive, got {radius_m}"
        );
        Self {
            name: Cow::Owned(name.into()),
            radius_m,
        }
    }

    /// Look up a preset by name, ignoring ASCII case.
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        Self::PRESETS
            .into_iter()
            .find(|body| body.name.eq_ignore_ascii_case(name))
    }

    /// Circumference of a great circle in meters.
    #[must_use]
    pub fn circumference_m(&self) -> f64 {
        2.0 * PI * self.radius_m
    }

    /// Surface position of (`lat`, `lon`) on this body.
    #[must_use]
    pub fn to_cartesian(&self, lat: f64, lon: f64) -> Vec3d {
        lat_lon_to_cartesian(lat, lon, self.radius_m)
    }

    /// Latitude/longitude below a body-fixed position. The radius is not used.
    #[must_use]
    pub fn to_lat_lon(&self, pos: Vec3d) -> LatLon {
        cartesian_to_lat_lon(pos)
    }

    /// Forward geodetic solve on this body.
    #[must_use]
    pub fn forward(&self, from: LatLon, heading: f64, distance: f64) -> ForwardSolution {
        forward_geo_solve(from.lat, from.lon, heading, distance, self.radius_m)
    }

    /// Inverse geodetic solve on this body.
    #[must_use]
    pub fn inverse(&self, from: LatLon, to: LatLon) -> InverseSolution {
        inverse_geo_solve(from.lat, from.lon, to.lat, to.lon, self.radius_m)
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::KERBIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(Body::KERBIN.radius_m, 600_000.0);
        assert_eq!(Body::EARTH.radius_m, 6_371_000.0);
        assert_eq!(Body::default(), Body::KERBIN);
        assert!(
            Body::PRESETS
                .windows(2)
                .all(|pair| pair[0].radius_m < pair[1].radius_m)
        );
    }

    #[test]
    fn test_by_name_case_insensitive() {
        assert_eq!(Body::by_name("kerbin"), Some(Body::KERBIN));
        assert_eq!(Body::by_name("MUN"), Some(Body::MUN));
        assert_eq!(Body::by_name("Jool"), None);
    }

    #[test]
    fn test_custom_body() {
        let body = Body::new("Gilly", 13_000.0);
        assert_eq!(body.name, "Gilly");
        assert!((body.circumference_m() - 2.0 * PI * 13_000.0).abs() < 1e-9);
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn test_zero_radius_panics() {
        let _ = Body::new("Nothing", 0.0);
    }

    #[test]
    fn test_methods_delegate_with_bound_radius() {
        let mun = Body::MUN;
        assert_eq!(mun.to_cartesian(0.0, 0.0), Vec3d::new(200_000.0, 0.0, 0.0));

        let start = LatLon::new(0.0, 0.0);
        let quarter = mun.circumference_m() / 4.0;
        let fwd = mun.forward(start, 90.0, quarter);
        assert!((fwd.lon - 90.0).abs() < 1e-9);

        let inv = mun.inverse(start, LatLon::new(fwd.lat, fwd.lon));
        assert!((inv.distance - quarter).abs() < 1e-6);

        let ll = mun.to_lat_lon(Vec3d::Z * 5.0);
        assert!((ll.lat - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_body_serializes_name_and_radius() {
        let json = serde_json::to_string(&Body::DUNA).unwrap();
        assert_eq!(json, r#"{"name":"Duna","radius_m":320000.0}"#);
    }
}
