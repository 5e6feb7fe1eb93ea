use crate::core::models::geometry::Geometry;
use crate::core::models::series::SeriesTerm;
use crate::core::models::state::DimensionlessState;
use crate::core::special::{bessel_j0, bessel_j1};
use crate::engine::error::EngineError;
use tracing::{instrument, trace};

/// Evaluates the series term belonging to one eigenvalue.
#[instrument(level = "trace", skip(state), fields(geometry = %state.geometry))]
pub fn evaluate(state: &DimensionlessState, lambda: f64) -> Result<SeriesTerm, EngineError> {
    let geometry = state.geometry;
    let value_a = checked(amplitude(geometry, lambda), geometry, "amplitude", lambda)?;
    let value_theta_o = checked(
        value_a * (-(lambda * lambda) * state.fourier).exp(),
        geometry,
        "decayed amplitude",
        lambda,
    )?;
    let value_theta = checked(
        value_theta_o * shape(geometry, lambda, state.dimensionless_distance),
        geometry,
        "shape function",
        lambda,
    )?;
    let value_q = checked(
        value_theta_o * flux(geometry, lambda),
        geometry,
        "flux fraction",
        lambda,
    )?;

    let term = SeriesTerm {
        value_a,
        value_theta_o,
        value_theta,
        value_q,
    };
    trace!(?term, "Series term evaluated.");
    Ok(term)
}

/// Amplitude coefficient `A(λ)` from the orthogonality of the eigenfunctions.
pub fn amplitude(geometry: Geometry, lambda: f64) -> f64 {
    match geometry {
        Geometry::Slab => 4.0 * lambda.sin() / (2.0 * lambda + (2.0 * lambda).sin()),
        Geometry::Cylinder => {
            let j0 = bessel_j0(lambda);
            let j1 = bessel_j1(lambda);
            2.0 * j1 / (lambda * (j0 * j0 + j1 * j1))
        }
        Geometry::Sphere => {
            4.0 * (lambda.sin() - lambda * lambda.cos()) / (2.0 * lambda - (2.0 * lambda).sin())
        }
    }
}

/// Spatial profile at dimensionless position `xi`.
pub fn shape(geometry: Geometry, lambda: f64, xi: f64) -> f64 {
    match geometry {
        Geometry::Slab => (lambda * xi).cos(),
        Geometry::Cylinder => bessel_j0(lambda * xi),
        // sin(x)/x → 1 at the center.
        Geometry::Sphere if xi == 0.0 => 1.0,
        Geometry::Sphere => (lambda * xi).sin() / (lambda * xi),
    }
}

/// Ratio of the volume-averaged to the center temperature for one term.
pub fn flux(geometry: Geometry, lambda: f64) -> f64 {
    match geometry {
        Geometry::Slab => lambda.sin() / lambda,
        Geometry::Cylinder => 2.0 * bessel_j1(lambda) / lambda,
        Geometry::Sphere => 3.0 * (lambda.sin() - lambda * lambda.cos()) / lambda.powi(3),
    }
}

fn checked(
    value: f64,
    geometry: Geometry,
    quantity: &str,
    lambda: f64,
) -> Result<f64, EngineError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::NumericDomain {
            context: format!("{} {} at λ = {} (got {})", geometry, quantity, lambda, value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::state::Origin;

    const TOLERANCE: f64 = 1e-4;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn state(geometry: Geometry, fourier: f64, xi: f64) -> DimensionlessState {
        DimensionlessState {
            geometry,
            characteristic_length: 0.05,
            dimensionless_distance: xi,
            fourier,
            biot: 1.0,
            biot_origin: Origin::Provided,
            thermal_diffusivity: 1e-6,
            diffusivity_origin: Origin::Provided,
        }
    }

    #[test]
    fn first_term_amplitudes_match_tabulated_values_for_unit_biot() {
        assert!(f64_approx_equal(amplitude(Geometry::Slab, 0.8603), 1.1191));
        assert!(f64_approx_equal(amplitude(Geometry::Cylinder, 1.2558), 1.2071));
        assert!(f64_approx_equal(
            amplitude(Geometry::Sphere, std::f64::consts::FRAC_PI_2),
            1.2732
        ));
    }

    #[test]
    fn sphere_shape_is_exactly_one_at_the_center() {
        for lambda in [1e-6, 0.5, 1.5708, 4.7124, 100.0] {
            assert_eq!(shape(Geometry::Sphere, lambda, 0.0), 1.0);
        }
    }

    #[test]
    fn sphere_shape_is_continuous_near_the_center() {
        let near = shape(Geometry::Sphere, 2.0, 1e-9);
        assert!((near - 1.0).abs() < 1e-12);
    }

    #[test]
    fn slab_and_cylinder_shapes_are_one_at_the_center() {
        assert_eq!(shape(Geometry::Slab, 1.3, 0.0), 1.0);
        assert!((shape(Geometry::Cylinder, 1.3, 0.0) - 1.0).abs() < 1e-7);
    }

    #[test]
    fn zero_fourier_leaves_the_amplitude_undecayed() {
        for geometry in Geometry::ALL {
            let term = evaluate(&state(geometry, 0.0, 0.0), 1.2).unwrap();
            assert_eq!(term.value_theta_o, term.value_a);
        }
    }

    #[test]
    fn sphere_center_term_has_theta_equal_to_theta_o() {
        let term = evaluate(&state(Geometry::Sphere, 0.3, 0.0), 2.0).unwrap();
        assert_eq!(term.value_theta, term.value_theta_o);
        assert!(term.value_theta.is_finite());
    }

    #[test]
    fn slab_first_term_matches_reference_at_half_depth() {
        let term = evaluate(&state(Geometry::Slab, 0.5, 0.5), 0.8603336).unwrap();
        assert!(f64_approx_equal(term.value_a, 1.119132));
        assert!(f64_approx_equal(term.value_theta_o, 0.772956));
        assert!(f64_approx_equal(term.value_theta, 0.702536));
        assert!(f64_approx_equal(term.value_q, 0.681069));
    }

    #[test]
    fn cylinder_first_term_matches_reference_at_half_radius() {
        let term = evaluate(&state(Geometry::Cylinder, 0.5, 0.5), 1.2557837).unwrap();
        assert!(f64_approx_equal(term.value_a, 1.207092));
        assert!(f64_approx_equal(term.value_theta_o, 0.548657));
        assert!(f64_approx_equal(term.value_theta, 0.495898));
        assert!(f64_approx_equal(term.value_q, 0.447381));
    }

    #[test]
    fn zero_eigenvalue_is_a_numeric_domain_error() {
        let err = evaluate(&state(Geometry::Slab, 0.1, 0.2), 0.0).unwrap_err();
        match err {
            EngineError::NumericDomain { context } => assert!(context.contains("plate amplitude")),
            other => panic!("expected NumericDomain, got {other:?}"),
        }
    }
}
