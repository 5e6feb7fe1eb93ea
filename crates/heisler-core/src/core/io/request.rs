use crate::core::models::sample::ConvectionRequest;
use crate::engine::config::{ConfigError, SolverConfig, SolverConfigBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// Optional `[solver]` table of a request file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SolverSection {
    #[serde(default)]
    pub early_exit_tolerance: Option<f64>,
}

impl SolverSection {
    pub fn to_config(&self) -> Result<SolverConfig, ConfigError> {
        SolverConfigBuilder::new()
            .maybe_early_exit_tolerance(self.early_exit_tolerance)
            .build()
    }
}

/// A complete request file: the request fields at the top level plus the
/// solver options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RequestDocument {
    #[serde(flatten)]
    pub request: ConvectionRequest,
    #[serde(default)]
    pub solver: SolverSection,
}

/// Reads any TOML document from disk, tagging errors with the path.
pub fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, RequestLoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| RequestLoadError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| RequestLoadError::Toml {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}

pub fn load_request(path: &Path) -> Result<RequestDocument, RequestLoadError> {
    load_toml(path)
}
