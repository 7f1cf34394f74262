//! Spherical geodesy for celestial bodies: angle helpers, lat/lon <-> Cartesian
//! conversion, and single-pass forward/inverse great-circle solvers.
//!
//! Every function here is pure and allocation-free. The body is a perfect
//! sphere whose radius is passed per call (or bound once through [`Body`]).
//! The body-fixed frame puts the prime meridian on +x and the north pole on +z.

mod angle;
mod body;
pub mod checked;
mod coords;
mod error;
mod solve;
mod units;
mod vector;

pub use angle::{clamp_degrees_180, clamp_degrees_360, deg_to_rad, rad_to_deg};
pub use body::Body;
pub use coords::{LatLon, cartesian_to_lat_lon, lat_lon_to_cartesian};
pub use error::GeodesyError;
pub use solve::{ForwardSolution, InverseSolution, forward_geo_solve, inverse_geo_solve};
pub use units::{format_angle, format_distance};
pub use vector::Vec3d;
