//! Result values and their text/JSON rendering.

use cgs_config::OutputConfig;
use cgs_geodesy::{
    Body, ForwardSolution, InverseSolution, LatLon, Vec3d, format_angle, format_distance,
};
use serde::Serialize;

use crate::CliError;

/// The result of one command, with the inputs echoed back for JSON consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Cartesian {
        body: Body,
        from: LatLon,
        position: Vec3d,
    },
    LatLon {
        position: Vec3d,
        lat_lon: LatLon,
    },
    Forward {
        body: Body,
        from: LatLon,
        heading: f64,
        distance: f64,
        solution: ForwardSolution,
    },
    Inverse {
        body: Body,
        from: LatLon,
        to: LatLon,
        solution: InverseSolution,
    },
    Clamp {
        angle: f64,
        value: f64,
    },
    Bodies {
        bodies: Vec<Body>,
    },
}

impl Outcome {
    /// Whether every computed number is finite.
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Cartesian { position, .. } => position.is_finite(),
            Self::LatLon { lat_lon, .. } => lat_lon.lat.is_finite() && lat_lon.lon.is_finite(),
            Self::Forward { solution, .. } => {
                solution.lat.is_finite()
                    && solution.lon.is_finite()
                    && solution.heading_back.is_finite()
            }
            Self::Inverse { solution, .. } => {
                solution.distance.is_finite()
                    && solution.heading_1_to_2.is_finite()
                    && solution.heading_2_to_1.is_finite()
            }
            Self::Clamp { value, .. } => value.is_finite(),
            Self::Bodies { .. } => true,
        }
    }
}

/// Render an outcome as text or pretty JSON, per the output settings.
pub fn render(outcome: &Outcome, output: &OutputConfig) -> Result<String, CliError> {
    if output.json {
        return Ok(serde_json::to_string_pretty(outcome)?);
    }

    let p = output.precision;
    let text = match outcome {
        Outcome::Cartesian { position, .. } => format!(
            "x: {:.p$} m\ny: {:.p$} m\nz: {:.p$} m",
            position.x, position.y, position.z
        ),
        Outcome::LatLon { lat_lon, .. } => format!(
            "lat: {}\nlon: {}",
            format_angle(lat_lon.lat),
            format_angle(lat_lon.lon)
        ),
        Outcome::Forward { solution, .. } => format!(
            "lat: {}\nlon: {}\nheading back: {}",
            format_angle(solution.lat),
            format_angle(solution.lon),
            format_angle(solution.heading_back)
        ),
        Outcome::Inverse { solution, .. } => format!(
            "distance: {} ({:.p$} m)\nheading 1->2: {}\nheading 2->1: {}",
            format_distance(solution.distance),
            solution.distance,
            format_angle(solution.heading_1_to_2),
            format_angle(solution.heading_2_to_1)
        ),
        Outcome::Clamp { value, .. } => format!("{value:.p$}"),
        Outcome::Bodies { bodies } => bodies
            .iter()
            .map(|body| {
                format!(
                    "{:<8} {:<12} {}",
                    body.name,
                    format_distance(body.radius_m),
                    format_distance(body.circumference_m())
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(text)
}
