use crate::core::models::sample::MaterialSample;
use crate::core::models::series::{AggregateResult, PhysicalResult};
use crate::engine::error::EngineError;

/// Rescales the aggregated dimensionless values to temperature and heat.
pub fn map(
    aggregate: &AggregateResult,
    sample: &MaterialSample,
    q_max: f64,
) -> Result<PhysicalResult, EngineError> {
    let span = sample.initial_temperature - sample.ambient_temperature;
    let tem = aggregate.value_theta * span + sample.ambient_temperature;
    let q = (1.0 - aggregate.value_q) * q_max;

    for (name, value) in [("temperature", tem), ("transferred heat", q)] {
        if !value.is_finite() {
            return Err(EngineError::NumericDomain {
                context: format!("{} (got {})", name, value),
            });
        }
    }

    Ok(PhysicalResult {
        theta: aggregate.value_theta,
        q_fraction: aggregate.value_q,
        q_max,
        tem,
        q,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::geometry::Geometry;

    fn sample() -> MaterialSample {
        MaterialSample::builder(Geometry::Slab)
            .thickness(0.1)
            .conductivity_coefficient(1.0)
            .density(1000.0)
            .specific_heat(500.0)
            .temperatures(200.0, 20.0)
            .build()
            .unwrap()
    }

    fn aggregate(theta: f64, q: f64) -> AggregateResult {
        AggregateResult {
            value_a: 1.0,
            value_theta_o: theta,
            value_theta: theta,
            value_q: q,
        }
    }

    #[test]
    fn theta_one_keeps_initial_temperature() {
        let result = map(&aggregate(1.0, 1.0), &sample(), -9000.0).unwrap();
        assert_eq!(result.tem, 200.0);
        assert_eq!(result.q, 0.0);
    }

    #[test]
    fn theta_zero_reaches_ambient_and_full_heat() {
        let result = map(&aggregate(0.0, 0.0), &sample(), -9000.0).unwrap();
        assert_eq!(result.tem, 20.0);
        assert_eq!(result.q, -9000.0);
    }

    #[test]
    fn intermediate_values_interpolate_linearly() {
        let result = map(&aggregate(0.25, 0.4), &sample(), -1000.0).unwrap();
        assert!((result.tem - 65.0).abs() < 1e-12);
        assert!((result.q - -600.0).abs() < 1e-12);
        assert_eq!(result.theta, 0.25);
        assert_eq!(result.q_fraction, 0.4);
    }

    #[test]
    fn non_finite_output_is_a_numeric_domain_error() {
        let err = map(&aggregate(f64::NAN, 0.5), &sample(), 1.0).unwrap_err();
        assert!(matches!(err, EngineError::NumericDomain { .. }));
    }
}
