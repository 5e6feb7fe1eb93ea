use crate::core::models::geometry::Geometry;
use crate::core::models::sample::MaterialSample;
use std::f64::consts::PI;

/// Energy the body would exchange if it reached the ambient temperature.
///
/// Per unit face area for the plate, per unit length for the cylinder, and for
/// the whole sphere. Positive when the body heats up.
pub fn max_energy(sample: &MaterialSample, characteristic_length: f64) -> f64 {
    let capacity = sample.density * sample.specific_heat;
    let delta = sample.ambient_temperature - sample.initial_temperature;
    let lc = characteristic_length;
    match sample.geometry {
        Geometry::Slab => sample.thickness * capacity * delta,
        Geometry::Cylinder => capacity * PI * lc.powi(2) * delta,
        Geometry::Sphere => capacity * (4.0 / 3.0) * PI * lc.powi(3) * delta,
    }
}
