use super::geometry::Geometry;
use serde::Serialize;

/// Where a derived-or-given quantity came from.
///
/// An explicit zero in a request is derived like a missing value but keeps its
/// own marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Origin {
    Provided,
    Derived,
    ZeroTreatedAsUnset,
}

/// Dimensionless groups for one request, computed once by
/// [`crate::engine::params::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionlessState {
    pub geometry: Geometry,
    /// `Lc = thickness / 2`.
    pub characteristic_length: f64,
    /// `ξ = distance / Lc`.
    pub dimensionless_distance: f64,
    /// `Fo = α·t / Lc²`.
    pub fourier: f64,
    pub biot: f64,
    pub biot_origin: Origin,
    pub thermal_diffusivity: f64,
    pub diffusivity_origin: Origin,
}
