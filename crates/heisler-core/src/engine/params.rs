use crate::core::models::sample::MaterialSample;
use crate::core::models::state::{DimensionlessState, Origin};
use crate::engine::error::EngineError;
use tracing::{debug, instrument, warn};

/// Reduces a sample to the dimensionless groups the series is written in.
///
/// Missing Biot number and diffusivity are derived (`Bi = h·Lc/k`,
/// `α = k/(ρ·cp)`); an explicit zero is derived too but flagged as
/// [`Origin::ZeroTreatedAsUnset`].
#[instrument(level = "debug", skip_all, fields(geometry = %sample.geometry))]
pub fn normalize(sample: &MaterialSample) -> Result<DimensionlessState, EngineError> {
    if !(sample.thickness.is_finite() && sample.thickness > 0.0) {
        return Err(EngineError::InvalidInput {
            field: "thickness",
            value: sample.thickness,
            reason: "must be greater than zero",
        });
    }
    let characteristic_length = sample.thickness / 2.0;
    let dimensionless_distance = sample.distance / characteristic_length;
    if dimensionless_distance > 1.0 {
        warn!(
            "Evaluation distance {} lies outside the body (ξ = {:.4} > 1); the series is extrapolated.",
            sample.distance, dimensionless_distance
        );
    }

    let (thermal_diffusivity, diffusivity_origin) = match sample.thermal_diffusivity {
        Some(alpha) if alpha != 0.0 => (alpha, Origin::Provided),
        Some(_) => {
            warn!("Thermal diffusivity of zero is treated as unset and derived from k/(ρ·cp).");
            (derive_diffusivity(sample), Origin::ZeroTreatedAsUnset)
        }
        None => (derive_diffusivity(sample), Origin::Derived),
    };

    let (biot, biot_origin) = match sample.biot {
        Some(bi) if bi != 0.0 => (bi, Origin::Provided),
        Some(_) => {
            warn!("Biot number of zero is treated as unset and derived from h·Lc/k.");
            (
                derive_biot(sample, characteristic_length),
                Origin::ZeroTreatedAsUnset,
            )
        }
        None => (derive_biot(sample, characteristic_length), Origin::Derived),
    };

    let fourier = thermal_diffusivity * sample.time / characteristic_length.powi(2);

    debug!(
        lc = characteristic_length,
        xi = dimensionless_distance,
        fo = fourier,
        bi = biot,
        alpha = thermal_diffusivity,
        "Normalized sample."
    );

    Ok(DimensionlessState {
        geometry: sample.geometry,
        characteristic_length,
        dimensionless_distance,
        fourier,
        biot,
        biot_origin,
        thermal_diffusivity,
        diffusivity_origin,
    })
}

fn derive_diffusivity(sample: &MaterialSample) -> f64 {
    sample.conductivity_coefficient / (sample.density * sample.specific_heat)
}

fn derive_biot(sample: &MaterialSample, characteristic_length: f64) -> f64 {
    sample.convection_coefficient * characteristic_length / sample.conductivity_coefficient
}
