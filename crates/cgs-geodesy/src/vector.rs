//! Owned 3D vector type for body-fixed positions.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Body-fixed Cartesian position or direction in meters.
///
/// Prime meridian on +x, north pole on +z. Kept separate from any host
/// engine's vector type; convert through [`DVec3`] at the boundary.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3d {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// Unit vector toward the prime meridian on the equator.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector toward longitude 90 on the equator.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector toward the north pole.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Create a new vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// x₁x₂ + y₁y₂ + z₁z₂
    #[must_use]
    pub fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Scale to unit length.
    ///
    /// No guard for the zero vector: every component comes back NaN, which
    /// is how callers downstream observe the precondition violation.
    #[must_use]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Componentwise comparison with an absolute tolerance.
    #[must_use]
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
    }

    /// Whether every component is finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl fmt::Display for Vec3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.p$}, {:.p$}, {:.p$})", self.x, self.y, self.z),
            None => write!(f, "({}, {}, {})", self.x, self.y, self.z),
        }
    }
}

impl From<DVec3> for Vec3d {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3d> for DVec3 {
    fn from(v: Vec3d) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl From<[f64; 3]> for Vec3d {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vec3d> for [f64; 3] {
    fn from(v: Vec3d) -> Self {
        [v.x, v.y, v.z]
    }
}

impl Add for Vec3d {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3d {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3d {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vec3d {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Vec3d {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3d> for f64 {
    type Output = Vec3d;
    fn mul(self, rhs: Vec3d) -> Vec3d {
        rhs * self
    }
}

impl MulAssign<f64> for Vec3d {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Div<f64> for Vec3d {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl DivAssign<f64> for Vec3d {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl Neg for Vec3d {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_and_normalize() {
        let v = Vec3d::new(3.0, 4.0, 0.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(v.length(), 5.0);
        assert!(v.normalize().approx_eq(Vec3d::new(0.6, 0.8, 0.0), 1e-15));
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        let n = Vec3d::ZERO.normalize();
        assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
        assert!(!n.is_finite());
    }

    #[test]
    fn test_dot_of_axes() {
        assert_eq!(Vec3d::X.dot(Vec3d::Y), 0.0);
        assert_eq!(Vec3d::Z.dot(Vec3d::Z), 1.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Vec3d::new(1.0, 2.0, 3.0);
        let b = Vec3d::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3d::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3d::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!(b / 2.0, Vec3d::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vec3d::new(-1.0, -2.0, -3.0));

        let mut c = a;
        c += b;
        c -= a;
        c *= 3.0;
        c /= 3.0;
        assert_eq!(c, b);
    }

    #[test]
    fn test_glam_roundtrip() {
        let v = Vec3d::new(1.5, -2.5, 1e9);
        let g: DVec3 = v.into();
        assert_eq!(g, DVec3::new(1.5, -2.5, 1e9));
        assert_eq!(Vec3d::from(g), v);
        let arr: [f64; 3] = v.into();
        assert_eq!(Vec3d::from(arr), v);
    }

    #[test]
    fn test_display_precision() {
        let v = Vec3d::new(1.0, 2.5, -3.25);
        assert_eq!(format!("{v:.2}"), "(1.00, 2.50, -3.25)");
        assert_eq!(format!("{v}"), "(1, 2.5, -3.25)");
    }
}
