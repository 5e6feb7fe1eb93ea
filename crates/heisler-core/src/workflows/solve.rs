use crate::core::models::geometry::Geometry;
use crate::core::models::sample::{ConvectionRequest, MaterialSample};
use crate::core::models::series::{AggregateResult, EigenvalueSet, PhysicalResult, SeriesTerm};
use crate::core::models::state::{DimensionlessState, Origin};
use crate::engine::config::SolverConfig;
use crate::engine::error::EngineError;
use crate::engine::{aggregate, eigen, energy, params, result, series};
use serde::Serialize;
use tracing::{info, instrument};

/// Everything computed for one request, with the field names of the wire
/// format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvectionReport {
    pub thickness: f64,
    pub thermal_diffusivity: f64,
    pub conductivity_coefficient: f64,
    pub convection_coefficient: f64,
    pub initial_temperature: f64,
    pub ambient_temperature: f64,
    pub density: f64,
    pub specific_heat: f64,
    pub distance: f64,
    pub time: f64,
    pub iterations: usize,
    pub biot: f64,
    pub geometry: Geometry,

    pub characteristic_length: f64,
    pub dimensionless_distance: f64,
    pub fourier: f64,
    pub biot_origin: Origin,
    pub diffusivity_origin: Origin,

    pub q_max: f64,
    pub calc1: SeriesTerm,
    pub calc2: SeriesTerm,
    pub calc3: SeriesTerm,
    pub lamb: EigenvalueSet,

    pub value_a: f64,
    pub value_theta_o: f64,
    pub value_theta: f64,
    pub value_q: f64,
    pub tem: f64,
    pub q: f64,
}

impl ConvectionReport {
    fn assemble(
        sample: &MaterialSample,
        state: &DimensionlessState,
        lamb: EigenvalueSet,
        terms: [SeriesTerm; 3],
        sum: AggregateResult,
        physical: PhysicalResult,
    ) -> Self {
        let [calc1, calc2, calc3] = terms;
        Self {
            thickness: sample.thickness,
            thermal_diffusivity: state.thermal_diffusivity,
            conductivity_coefficient: sample.conductivity_coefficient,
            convection_coefficient: sample.convection_coefficient,
            initial_temperature: sample.initial_temperature,
            ambient_temperature: sample.ambient_temperature,
            density: sample.density,
            specific_heat: sample.specific_heat,
            distance: sample.distance,
            time: sample.time,
            iterations: sample.iterations,
            biot: state.biot,
            geometry: sample.geometry,
            characteristic_length: state.characteristic_length,
            dimensionless_distance: state.dimensionless_distance,
            fourier: state.fourier,
            biot_origin: state.biot_origin,
            diffusivity_origin: state.diffusivity_origin,
            q_max: physical.q_max,
            calc1,
            calc2,
            calc3,
            lamb,
            value_a: sum.value_a,
            value_theta_o: sum.value_theta_o,
            value_theta: sum.value_theta,
            value_q: sum.value_q,
            tem: physical.tem,
            q: physical.q,
        }
    }

    pub fn terms(&self) -> [SeriesTerm; 3] {
        [self.calc1, self.calc2, self.calc3]
    }
}

/// Parses and validates a raw request, then runs the pipeline.
pub fn run_request(
    request: ConvectionRequest,
    config: &SolverConfig,
) -> Result<ConvectionReport, EngineError> {
    let sample = MaterialSample::try_from(request)?;
    run(&sample, config)
}

/// Runs the full pipeline for one sample.
#[instrument(skip_all, name = "solve_workflow", fields(geometry = %sample.geometry))]
pub fn run(sample: &MaterialSample, config: &SolverConfig) -> Result<ConvectionReport, EngineError> {
    let state = params::normalize(sample)?;
    let q_max = energy::max_energy(sample, state.characteristic_length);
    let lamb = eigen::solve(sample.geometry, state.biot, sample.iterations, config)?;
    let terms = evaluate_terms(&state, &lamb)?;
    let sum = aggregate::aggregate(&terms);
    let physical = result::map(&sum, sample, q_max)?;

    info!(
        "Solved {} at t = {}: T = {:.6}, Q = {:.6} (Bi = {:.6}, Fo = {:.6}).",
        sample.geometry, sample.time, physical.tem, physical.q, state.biot, state.fourier
    );

    Ok(ConvectionReport::assemble(
        sample, &state, lamb, terms, sum, physical,
    ))
}

pub(crate) fn evaluate_terms(
    state: &DimensionlessState,
    lamb: &EigenvalueSet,
) -> Result<[SeriesTerm; 3], EngineError> {
    Ok([
        series::evaluate(state, lamb.lambda1)?,
        series::evaluate(state, lamb.lambda2)?,
        series::evaluate(state, lamb.lambda3)?,
    ])
}
