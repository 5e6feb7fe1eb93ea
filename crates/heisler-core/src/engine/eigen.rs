//! Eigenvalues of the one-term-per-root series.
//!
//! | Geometry | Characteristic equation   | Update                                  |
//! |----------|---------------------------|-----------------------------------------|
//! | Slab     | `λ·tan λ = Bi`            | `λ ← atan(Bi/λ) + kπ`                   |
//! | Cylinder | `λ·J1(λ)/J0(λ) = Bi`      | `λ ← λ − f/f'`, `f = λJ1 − Bi·J0`       |
//! | Sphere   | `1 − λ·cot λ = Bi`        | `λ ← arccot((1 − Bi)/λ) + kπ`           |
//!
//! Every branch applies exactly `iterations` updates from its seed. There is no
//! convergence test unless [`SolverConfig::early_exit_tolerance`] is set, so the
//! roots for a given `(Bi, N)` are reproducible bit for bit.

use crate::core::models::geometry::Geometry;
use crate::core::models::series::EigenvalueSet;
use crate::core::special::{bessel_j0, bessel_j1};
use crate::engine::config::SolverConfig;
use crate::engine::error::EngineError;
use std::f64::consts::{FRAC_PI_2, PI};
use tracing::{debug, instrument, trace, warn};

const FIXED_POINT_SEED: f64 = 1.0;
const BRANCH_OFFSETS: [f64; 3] = [0.0, PI, 2.0 * PI];
const CYLINDER_SEEDS: [f64; 3] = [1.0, 4.0, 8.0];

/// Solves for the first three roots of the characteristic equation.
#[instrument(level = "debug", skip(config))]
pub fn solve(
    geometry: Geometry,
    biot: f64,
    iterations: usize,
    config: &SolverConfig,
) -> Result<EigenvalueSet, EngineError> {
    if !(biot.is_finite() && biot >= 0.0) {
        return Err(EngineError::InvalidBiot(biot));
    }
    if iterations == 0 {
        return Err(EngineError::InvalidInput {
            field: "iterations",
            value: 0.0,
            reason: "at least one iteration is required",
        });
    }

    let mut roots = [0.0; 3];
    for (index, root) in roots.iter_mut().enumerate() {
        let number = index + 1;
        *root = match geometry {
            Geometry::Slab => iterate(
                geometry,
                number,
                FIXED_POINT_SEED,
                iterations,
                config,
                |lambda| slab_update(biot, BRANCH_OFFSETS[index], lambda),
            )?,
            Geometry::Cylinder => iterate(
                geometry,
                number,
                CYLINDER_SEEDS[index],
                iterations,
                config,
                |lambda| cylinder_update(biot, lambda),
            )?,
            Geometry::Sphere => iterate(
                geometry,
                number,
                FIXED_POINT_SEED,
                iterations,
                config,
                |lambda| sphere_update(biot, BRANCH_OFFSETS[index], lambda),
            )?,
        };
        debug!(root = number, lambda = *root, "Eigenvalue found.");
    }

    let set = EigenvalueSet::from(roots);
    if !set.is_strictly_increasing() {
        warn!("{}", ordering_warning(geometry, biot, &set));
    }
    Ok(set)
}

/// Describes an eigenvalue set that is not three ordered positive roots.
pub fn ordering_warning(geometry: Geometry, biot: f64, set: &EigenvalueSet) -> String {
    let roots = set.as_array();
    let detail = if roots.iter().any(|&lambda| lambda <= 0.0) {
        "contains a non-positive root"
    } else if roots.windows(2).any(|pair| (pair[0] - pair[1]).abs() < 1e-9) {
        "contains duplicate roots"
    } else {
        "is out of order"
    };
    format!(
        "Eigenvalues for {} at Bi = {} {}: {:?}. \
         The fixed seeds converged to the wrong roots; results are reported as computed.",
        geometry, biot, detail, roots
    )
}

/// Residual of the characteristic equation at `lambda`; zero at a root.
pub fn characteristic_residual(geometry: Geometry, biot: f64, lambda: f64) -> f64 {
    match geometry {
        Geometry::Slab => lambda * lambda.tan() - biot,
        Geometry::Cylinder => lambda * bessel_j1(lambda) / bessel_j0(lambda) - biot,
        Geometry::Sphere => 1.0 - lambda / lambda.tan() - biot,
    }
}

fn iterate<F>(
    geometry: Geometry,
    root: usize,
    seed: f64,
    iterations: usize,
    config: &SolverConfig,
    update: F,
) -> Result<f64, EngineError>
where
    F: Fn(f64) -> Result<f64, &'static str>,
{
    let divergent = |iteration: usize, reason: String| EngineError::DivergentIteration {
        geometry,
        root,
        iteration,
        reason,
    };

    let mut lambda = seed;
    for iteration in 1..=iterations {
        let next = update(lambda).map_err(|reason| divergent(iteration, reason.to_string()))?;
        if !next.is_finite() {
            return Err(divergent(iteration, format!("non-finite value {}", next)));
        }
        trace!(root, iteration, lambda = next);

        let step = (next - lambda).abs();
        lambda = next;
        if let Some(tolerance) = config.early_exit_tolerance {
            if step <= tolerance {
                debug!(root, iteration, "Early exit: update below tolerance.");
                break;
            }
        }
    }
    Ok(lambda)
}

fn slab_update(biot: f64, offset: f64, lambda: f64) -> Result<f64, &'static str> {
    if lambda == 0.0 {
        return Err("division by zero (λ = 0)");
    }
    Ok((biot / lambda).atan() + offset)
}

fn cylinder_update(biot: f64, lambda: f64) -> Result<f64, &'static str> {
    let j0 = bessel_j0(lambda);
    let j1 = bessel_j1(lambda);
    let f = lambda * j1 - biot * j0;
    let df = lambda * j0 + biot * j1;
    if df == 0.0 {
        return Err("division by zero (f'(λ) = 0)");
    }
    Ok(lambda - f / df)
}

fn sphere_update(biot: f64, offset: f64, lambda: f64) -> Result<f64, &'static str> {
    if lambda == 0.0 {
        return Err("division by zero (λ = 0)");
    }
    Ok(arccot((1.0 - biot) / lambda) + offset)
}

/// Continuous inverse cotangent with range `(0, π)`.
#[inline]
fn arccot(x: f64) -> f64 {
    FRAC_PI_2 - x.atan()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE_TOLERANCE: f64 = 1e-4;

    fn solve_fixed(geometry: Geometry, biot: f64, iterations: usize) -> EigenvalueSet {
        solve(geometry, biot, iterations, &SolverConfig::default()).unwrap()
    }

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected} ± {tolerance}, got {actual}"
        );
    }

    fn biot_grid(max: f64) -> Vec<f64> {
        let mut grid = Vec::new();
        let mut bi = 0.01;
        while bi <= max {
            grid.push(bi);
            bi *= 1.3;
        }
        grid
    }

    #[test]
    fn slab_roots_match_tabulated_values_for_unit_biot() {
        let roots = solve_fixed(Geometry::Slab, 1.0, 100);
        assert_close(roots.lambda1, 0.8603, TABLE_TOLERANCE);
        assert_close(roots.lambda2, 3.4256, TABLE_TOLERANCE);
        assert_close(roots.lambda3, 6.4373, TABLE_TOLERANCE);
    }

    #[test]
    fn cylinder_roots_match_tabulated_values_for_unit_biot() {
        let roots = solve_fixed(Geometry::Cylinder, 1.0, 100);
        assert_close(roots.lambda1, 1.2558, TABLE_TOLERANCE);
        assert_close(roots.lambda2, 4.0795, TABLE_TOLERANCE);
        assert_close(roots.lambda3, 7.1558, TABLE_TOLERANCE);
    }

    #[test]
    fn sphere_roots_for_unit_biot_are_odd_multiples_of_half_pi() {
        let roots = solve_fixed(Geometry::Sphere, 1.0, 100);
        assert_close(roots.lambda1, 1.5708, TABLE_TOLERANCE);
        assert_eq!(roots.lambda1, FRAC_PI_2);
        assert_close(roots.lambda2, 3.0 * FRAC_PI_2, 1e-12);
        assert_close(roots.lambda3, 5.0 * FRAC_PI_2, 1e-12);
    }

    #[test]
    fn sphere_roots_stay_on_the_tabulated_branch_above_unit_biot() {
        let roots = solve_fixed(Geometry::Sphere, 10.0, 100);
        assert_close(roots.lambda1, 2.8363, TABLE_TOLERANCE);
        assert_close(roots.lambda2, 5.7172, TABLE_TOLERANCE);
        assert_close(roots.lambda3, 8.6587, TABLE_TOLERANCE);
    }

    #[test]
    fn roots_satisfy_the_characteristic_equation() {
        for geometry in Geometry::ALL {
            for biot in [0.5, 1.0, 5.0] {
                let roots = solve_fixed(geometry, biot, 200);
                for lambda in roots.as_array() {
                    let residual = characteristic_residual(geometry, biot, lambda);
                    assert!(
                        residual.abs() < 1e-6,
                        "{geometry} Bi={biot} λ={lambda} residual={residual}"
                    );
                }
            }
        }
    }

    #[test]
    fn slab_and_sphere_roots_are_strictly_increasing() {
        for geometry in [Geometry::Slab, Geometry::Sphere] {
            for biot in biot_grid(1.0e4) {
                for iterations in [20, 50, 100] {
                    let roots = solve_fixed(geometry, biot, iterations);
                    assert!(
                        roots.is_strictly_increasing(),
                        "{geometry} Bi={biot} N={iterations}: {roots:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn cylinder_roots_are_strictly_increasing_in_the_chart_range() {
        for biot in biot_grid(10.0) {
            for iterations in [20, 50, 100] {
                let roots = solve_fixed(Geometry::Cylinder, biot, iterations);
                assert!(
                    roots.is_strictly_increasing(),
                    "Bi={biot} N={iterations}: {roots:?}"
                );
            }
        }
    }

    #[test]
    fn cylinder_seeds_leave_the_root_sequence_for_large_biot() {
        let out_of_order = solve_fixed(Geometry::Cylinder, 16.0, 100);
        assert_close(out_of_order.lambda2, 11.1673, 1e-3);
        assert_close(out_of_order.lambda3, 8.1688, 1e-3);
        assert!(!out_of_order.is_strictly_increasing());

        let negative = solve_fixed(Geometry::Cylinder, 20.0, 100);
        assert_close(negative.lambda1, 2.2880, 1e-3);
        assert!(negative.lambda2 < 0.0);
        assert_close(negative.lambda2, -8.2534, 1e-3);
        assert_close(negative.lambda3, 8.2534, 1e-3);
        assert!(ordering_warning(Geometry::Cylinder, 20.0, &negative).contains("non-positive"));

        for (biot, repeated) in [(50.0, 8.4840), (100.0, 8.5678)] {
            let roots = solve_fixed(Geometry::Cylinder, biot, 100);
            assert_close(roots.lambda2, repeated, 1e-3);
            assert_close(roots.lambda3, roots.lambda2, 1e-9);
            assert!(!roots.is_strictly_increasing());
            assert!(ordering_warning(Geometry::Cylinder, biot, &roots).contains("duplicate"));
        }

        for biot in [16.0, 20.0, 50.0, 100.0] {
            for lambda in solve_fixed(Geometry::Cylinder, biot, 100).as_array() {
                let residual = characteristic_residual(Geometry::Cylinder, biot, lambda);
                assert!(residual.abs() < 1e-6, "Bi={biot} λ={lambda} residual={residual}");
            }
        }
    }

    #[test]
    fn first_root_approaches_the_fixed_temperature_limit_for_large_biot() {
        let bi = 1.0e5;
        assert_close(solve_fixed(Geometry::Slab, bi, 100).lambda1, FRAC_PI_2, 1e-3);
        assert_close(
            solve_fixed(Geometry::Cylinder, bi, 100).lambda1,
            2.404825557695773,
            1e-3,
        );
        assert_close(solve_fixed(Geometry::Sphere, bi, 100).lambda1, PI, 1e-3);
    }

    #[test]
    fn exactly_n_updates_are_applied() {
        let one = solve_fixed(Geometry::Slab, 1.0, 1);
        assert_eq!(one.lambda1, 1.0f64.atan());
        let two = solve_fixed(Geometry::Slab, 1.0, 2);
        assert_eq!(two.lambda1, (1.0 / 1.0f64.atan()).atan());
    }

    #[test]
    fn early_exit_agrees_with_fixed_iteration_once_converged() {
        let config = SolverConfig {
            early_exit_tolerance: Some(1e-13),
        };
        for geometry in Geometry::ALL {
            let fixed = solve_fixed(geometry, 2.0, 500);
            let early = solve(geometry, 2.0, 500, &config).unwrap();
            for (a, b) in fixed.as_array().iter().zip(early.as_array()) {
                assert_close(*a, b, 1e-10);
            }
        }
    }

    #[test]
    fn repeated_solves_are_bit_identical() {
        for geometry in Geometry::ALL {
            let first = solve_fixed(geometry, 0.37, 64);
            let second = solve_fixed(geometry, 0.37, 64);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn negative_or_non_finite_biot_is_rejected() {
        for biot in [-0.1, f64::NAN, f64::INFINITY] {
            let err = solve(Geometry::Slab, biot, 10, &SolverConfig::default()).unwrap_err();
            assert!(matches!(err, EngineError::InvalidBiot(_)));
        }
    }

    #[test]
    fn zero_iterations_is_rejected() {
        let err = solve(Geometry::Sphere, 1.0, 0, &SolverConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidInput {
                field: "iterations",
                ..
            }
        ));
    }

    #[test]
    fn slab_with_zero_biot_divides_by_zero_on_the_second_update() {
        let err = solve(Geometry::Slab, 0.0, 10, &SolverConfig::default()).unwrap_err();
        match err {
            EngineError::DivergentIteration {
                geometry,
                root,
                iteration,
                ..
            } => {
                assert_eq!(geometry, Geometry::Slab);
                assert_eq!(root, 1);
                assert_eq!(iteration, 2);
            }
            other => panic!("expected DivergentIteration, got {other:?}"),
        }
    }

    #[test]
    fn arccot_covers_zero_to_pi() {
        assert_eq!(arccot(0.0), FRAC_PI_2);
        assert!(arccot(1e9) > 0.0 && arccot(1e9) < 1e-8);
        assert!(arccot(-1e9) < PI && arccot(-1e9) > PI - 1e-8);
    }
}
