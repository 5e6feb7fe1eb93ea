use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid early-exit tolerance {0}: must be a positive finite number")]
    InvalidTolerance(f64),
}

/// Options for the eigenvalue iteration.
///
/// The default applies exactly `iterations` updates to every branch, which is
/// what reproduces the published root tables. An early-exit tolerance is opt-in.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SolverConfig {
    pub early_exit_tolerance: Option<f64>,
}

#[derive(Default)]
pub struct SolverConfigBuilder {
    early_exit_tolerance: Option<f64>,
}

impl SolverConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn early_exit_tolerance(mut self, tolerance: f64) -> Self {
        self.early_exit_tolerance = Some(tolerance);
        self
    }

    pub fn maybe_early_exit_tolerance(mut self, tolerance: Option<f64>) -> Self {
        self.early_exit_tolerance = tolerance;
        self
    }

    pub fn build(self) -> Result<SolverConfig, ConfigError> {
        if let Some(tol) = self.early_exit_tolerance {
            if !(tol.is_finite() && tol > 0.0) {
                return Err(ConfigError::InvalidTolerance(tol));
            }
        }
        Ok(SolverConfig {
            early_exit_tolerance: self.early_exit_tolerance,
        })
    }
}
