use heisler::core::io::csv::ExportError;
use heisler::engine::error::{EngineError, ErrorClass};
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Heisler(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Process exit status: 2 when the caller supplied something wrong, 1 when
    /// the computation or the environment failed.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Heisler(e) => match e.class() {
                ErrorClass::Client => 2,
                ErrorClass::Server => 1,
            },
            CliError::Config(_) | CliError::FileParsing { .. } | CliError::Argument(_) => 2,
            CliError::Export(_) | CliError::Io(_) | CliError::Other(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_engine_errors_exit_with_two() {
        let err = CliError::from(EngineError::InvalidBiot(-1.0));
        assert_eq!(err.exit_code(), 2);
        let err = CliError::from(EngineError::UnsupportedGeometry {
            name: "cube".to_string(),
        });
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn server_engine_errors_exit_with_one() {
        let err = CliError::from(EngineError::NumericDomain {
            context: "plate amplitude".to_string(),
        });
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn configuration_and_io_errors_are_classified() {
        assert_eq!(CliError::Config("bad".to_string()).exit_code(), 2);
        assert_eq!(CliError::Argument("bad".to_string()).exit_code(), 2);
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(CliError::from(io).exit_code(), 1);
    }

    #[test]
    fn engine_error_message_is_passed_through() {
        let err = CliError::from(EngineError::InvalidBiot(-1.0));
        assert_eq!(err.to_string(), EngineError::InvalidBiot(-1.0).to_string());
    }
}
