use crate::core::models::geometry::Geometry;
use thiserror::Error;

/// Whether a failure is the caller's fault or the engine's.
///
/// Transports use this to pick a status: HTTP 4xx/5xx, or a CLI exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Client,
    Server,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid input: {field} = {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Missing required input: {0}")]
    MissingInput(&'static str),

    #[error("Unsupported geometry '{name}'. Expected one of 'plate', 'cylinder' or 'sphere'")]
    UnsupportedGeometry { name: String },

    #[error("Invalid Biot number {0}: must be a non-negative finite number")]
    InvalidBiot(f64),

    #[error(
        "Eigenvalue iteration diverged for {geometry} root {root} at iteration {iteration}: {reason}"
    )]
    DivergentIteration {
        geometry: Geometry,
        root: usize,
        iteration: usize,
        reason: String,
    },

    #[error("Numeric domain error while evaluating {context}")]
    NumericDomain { context: String },
}

impl EngineError {
    pub fn class(&self) -> ErrorClass {
        match self {
            EngineError::InvalidInput { .. }
            | EngineError::MissingInput(_)
            | EngineError::UnsupportedGeometry { .. }
            | EngineError::InvalidBiot(_) => ErrorClass::Client,
            EngineError::DivergentIteration { .. } | EngineError::NumericDomain { .. } => {
                ErrorClass::Server
            }
        }
    }
}
