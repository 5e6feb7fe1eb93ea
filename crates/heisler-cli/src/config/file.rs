use crate::error::{CliError, Result};
use heisler::core::io::request::load_toml;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// A request file where every field may be missing, so that flags and
/// `--set` values can fill the gaps.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileRequest {
    pub thickness: Option<f64>,
    pub thermal_diffusivity: Option<f64>,
    pub conductivity_coefficient: Option<f64>,
    pub convection_coefficient: Option<f64>,
    pub initial_temperature: Option<f64>,
    pub ambient_temperature: Option<f64>,
    pub density: Option<f64>,
    pub specific_heat: Option<f64>,
    pub distance: Option<f64>,
    pub time: Option<f64>,
    pub iterations: Option<usize>,
    pub biot: Option<f64>,
    pub geometry: Option<String>,
    pub solver: Option<FileSolverConfig>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileSolverConfig {
    pub early_exit_tolerance: Option<f64>,
}

impl FileRequest {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading request file {:?}", path);
        load_toml(path).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
