use crate::core::models::sample::MaterialSample;
use crate::engine::config::SolverConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::{aggregate, eigen, energy, params, result};
use crate::workflows::solve::evaluate_terms;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, instrument};

/// The quantity varied across a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SweepAxis {
    Time,
    Distance,
}

impl fmt::Display for SweepAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepAxis::Time => f.write_str("time"),
            SweepAxis::Distance => f.write_str("distance"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepPlan {
    pub axis: SweepAxis,
    pub values: Vec<f64>,
}

impl SweepPlan {
    pub fn new(axis: SweepAxis, values: Vec<f64>) -> Self {
        Self { axis, values }
    }

    /// `steps` evenly spaced values from `start` to `end`, both included.
    pub fn linspace(
        axis: SweepAxis,
        start: f64,
        end: f64,
        steps: usize,
    ) -> Result<Self, EngineError> {
        for (field, value) in [("start", start), ("end", end)] {
            if !value.is_finite() {
                return Err(EngineError::InvalidInput {
                    field,
                    value,
                    reason: "must be a finite number",
                });
            }
        }
        let values = match steps {
            0 => {
                return Err(EngineError::InvalidInput {
                    field: "steps",
                    value: 0.0,
                    reason: "a sweep needs at least one point",
                });
            }
            1 => vec![start],
            _ => {
                let span = end - start;
                let last = (steps - 1) as f64;
                (0..steps)
                    .map(|i| start + span * i as f64 / last)
                    .collect()
            }
        };
        Ok(Self { axis, values })
    }
}

/// One evaluated point of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub time: f64,
    pub distance: f64,
    pub fourier: f64,
    pub dimensionless_distance: f64,
    pub theta: f64,
    pub q_fraction: f64,
    pub temperature: f64,
    pub heat: f64,
}

/// Evaluates `sample` at every value of `plan`.
///
/// The eigenvalues depend only on geometry, Bi and the iteration count, so they
/// are solved once up front. Points are independent and run on the rayon pool;
/// the output keeps the order of `plan.values`. A failure at any point fails the
/// whole sweep.
#[instrument(skip_all, name = "sweep_workflow", fields(geometry = %sample.geometry, axis = %plan.axis, points = plan.values.len()))]
pub fn run(
    sample: &MaterialSample,
    plan: &SweepPlan,
    config: &SolverConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<SweepPoint>, EngineError> {
    if plan.values.is_empty() {
        return Err(EngineError::InvalidInput {
            field: "steps",
            value: 0.0,
            reason: "a sweep needs at least one point",
        });
    }

    reporter.report(Progress::PhaseStart {
        name: "Solving eigenvalues",
    });
    let base = params::normalize(sample)?;
    let q_max = energy::max_energy(sample, base.characteristic_length);
    let lamb = eigen::solve(sample.geometry, base.biot, sample.iterations, config)?;
    if !lamb.is_strictly_increasing() {
        reporter.report(Progress::Message(eigen::ordering_warning(
            sample.geometry,
            base.biot,
            &lamb,
        )));
    }
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Evaluating points",
    });
    reporter.report(Progress::PointsStart {
        total: plan.values.len() as u64,
    });

    let points = plan
        .values
        .par_iter()
        .map(|&value| -> Result<SweepPoint, EngineError> {
            let point_sample = match plan.axis {
                SweepAxis::Time => sample.at_time(value)?,
                SweepAxis::Distance => sample.at_distance(value)?,
            };
            let state = params::normalize(&point_sample)?;
            let terms = evaluate_terms(&state, &lamb)?;
            let sum = aggregate::aggregate(&terms);
            let physical = result::map(&sum, &point_sample, q_max)?;
            reporter.report(Progress::PointDone);
            Ok(SweepPoint {
                time: point_sample.time,
                distance: point_sample.distance,
                fourier: state.fourier,
                dimensionless_distance: state.dimensionless_distance,
                theta: physical.theta,
                q_fraction: physical.q_fraction,
                temperature: physical.tem,
                heat: physical.q,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    reporter.report(Progress::PointsFinish);
    reporter.report(Progress::PhaseFinish);
    info!("Sweep evaluated {} point(s).", points.len());
    Ok(points)
}
