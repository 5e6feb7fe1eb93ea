use super::defaults::DefaultsConfig;
use super::file::FileRequest;
use super::models::AppConfig;
use crate::cli::RequestArgs;
use crate::error::{CliError, Result};
use heisler::core::models::sample::{ConvectionRequest, MaterialSample};
use heisler::engine::config::SolverConfigBuilder;
use std::str::FromStr;
use tracing::debug;

/// Merges defaults, the request file, `--set` values and flags, in increasing
/// order of precedence, into a validated sample and solver configuration.
pub fn build_config(args: &RequestArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_request = FileRequest::from_file(&args.input)?;
    let mut file_request = apply_set_values(file_request, &args.set_values)?;

    let solver_file = file_request.solver.take().unwrap_or_default();

    let request = ConvectionRequest {
        thickness: required(file_request.thickness, "thickness")?,
        thermal_diffusivity: file_request.thermal_diffusivity,
        conductivity_coefficient: required(
            file_request.conductivity_coefficient,
            "conductivity_coefficient",
        )?,
        convection_coefficient: required(
            file_request.convection_coefficient,
            "convection_coefficient",
        )?,
        initial_temperature: required(file_request.initial_temperature, "initial_temperature")?,
        ambient_temperature: required(file_request.ambient_temperature, "ambient_temperature")?,
        density: required(file_request.density, "density")?,
        specific_heat: required(file_request.specific_heat, "specific_heat")?,
        distance: args
            .distance
            .or(file_request.distance)
            .unwrap_or(defaults.distance),
        time: args.time.or(file_request.time).unwrap_or(defaults.time),
        iterations: args
            .iterations
            .or(file_request.iterations)
            .unwrap_or(defaults.iterations),
        biot: args.biot.or(file_request.biot),
        geometry: required(
            args.geometry.clone().or(file_request.geometry),
            "geometry",
        )?,
    };
    debug!("Merged request: {:?}", request);

    let sample = MaterialSample::try_from(request)?;

    let solver = SolverConfigBuilder::new()
        .maybe_early_exit_tolerance(
            args.early_exit_tolerance
                .or(solver_file.early_exit_tolerance),
        )
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        input_path: args.input.clone(),
        sample,
        solver,
    })
}

fn required<T>(value: Option<T>, key: &str) -> Result<T> {
    value.ok_or_else(|| {
        CliError::Config(format!(
            "Missing required value `{}` (set it in the request file or with --set {}=...)",
            key, key
        ))
    })
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid value for {}: {}", key, value)))
}

fn apply_set_values(mut request: FileRequest, set_values: &[String]) -> Result<FileRequest> {
    for kv_pair in set_values {
        let Some((key, value)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let key = key.trim();

        match key {
            "thickness" => request.thickness = Some(parse_value(key, value)?),
            "thermal_diffusivity" => request.thermal_diffusivity = Some(parse_value(key, value)?),
            "conductivity_coefficient" => {
                request.conductivity_coefficient = Some(parse_value(key, value)?)
            }
            "convection_coefficient" => {
                request.convection_coefficient = Some(parse_value(key, value)?)
            }
            "initial_temperature" => request.initial_temperature = Some(parse_value(key, value)?),
            "ambient_temperature" => request.ambient_temperature = Some(parse_value(key, value)?),
            "density" => request.density = Some(parse_value(key, value)?),
            "specific_heat" => request.specific_heat = Some(parse_value(key, value)?),
            "distance" => request.distance = Some(parse_value(key, value)?),
            "time" => request.time = Some(parse_value(key, value)?),
            "iterations" => request.iterations = Some(parse_value(key, value)?),
            "biot" => request.biot = Some(parse_value(key, value)?),
            "geometry" => request.geometry = Some(value.trim().to_string()),
            "solver.early-exit-tolerance" => {
                request
                    .solver
                    .get_or_insert_with(Default::default)
                    .early_exit_tolerance = Some(parse_value(key, value)?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(request)
}
