//! Error types for synthvr-sim

use synthvr_driver::DriverError;
use synthvr_driver_abi::InitError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("No provider for interface version {0}")]
    ProviderUnavailable(String),

    #[error("Driver rejected {operation}: {code}")]
    Driver {
        operation: &'static str,
        code: InitError,
    },

    #[error("{0} controller slot is not connected")]
    SlotUnavailable(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Config(#[from] DriverError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CliError {
    pub fn driver(operation: &'static str, code: InitError) -> Self {
        Self::Driver { operation, code }
    }

    /// Stable name used in JSON error output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ProviderUnavailable(_) => "ProviderUnavailable",
            Self::Driver { .. } => "Driver",
            Self::SlotUnavailable(_) => "SlotUnavailable",
            Self::InvalidArgument(_) => "InvalidArgument",
            Self::Config(_) => "Config",
            Self::JsonError(_) => "JsonError",
        }
    }
}
