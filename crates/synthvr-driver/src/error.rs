//! Error types for the driver.
//!
//! Only initialization and activation can fail. Per-tick publication
//! problems are logged and swallowed because the host has no channel for
//! reporting them mid-frame.

use std::collections::TryReserveError;

use synthvr_driver_abi::{HostError, InitError};
use thiserror::Error;

/// Errors that can occur during driver operations.
#[derive(Debug, Error)]
pub enum DriverError {
    /// A required parameter was missing or invalid.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The host rejected driver context registration.
    #[error("Driver initialization failed: {0}")]
    InitializationFailed(#[from] HostError),

    /// Controller storage could not be allocated.
    #[error("Out of resources allocating {requested} controller slots")]
    OutOfResources {
        /// Number of slots requested.
        requested: usize,
        /// Allocator failure.
        #[source]
        source: TryReserveError,
    },

    /// The host does not expose an interface the driver needs.
    #[error("Host interface unavailable: {interface}")]
    HostInterfaceUnavailable {
        /// Interface version that was requested.
        interface: &'static str,
    },

    /// No connected device at the given ordinal.
    #[error("No connected device at ordinal {0}")]
    DeviceNotConnected(u32),

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Configuration could not be parsed.
    #[error("Configuration parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DriverError {
    /// Create an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(reason: impl Into<String>) -> Self {
        Self::InvalidParameter(reason.into())
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }

    /// Create a host interface unavailable error.
    #[must_use]
    pub fn host_interface_unavailable(interface: &'static str) -> Self {
        Self::HostInterfaceUnavailable { interface }
    }

    /// Collapse this error into the code reported to the host.
    #[must_use]
    pub fn init_error(&self) -> InitError {
        match self {
            Self::InitializationFailed(_) => InitError::InitInternal,
            Self::OutOfResources { .. } => InitError::OutOfMemory,
            Self::HostInterfaceUnavailable { .. } => InitError::InterfaceNotFound,
            Self::InvalidParameter(_)
            | Self::DeviceNotConnected(_)
            | Self::InvalidConfiguration(_)
            | Self::Json(_)
            | Self::Io(_) => InitError::InvalidParam,
        }
    }
}

impl From<DriverError> for InitError {
    fn from(err: DriverError) -> Self {
        err.init_error()
    }
}

/// A specialized `Result` type for driver operations.
pub type DriverResult<T> = std::result::Result<T, DriverError>;
