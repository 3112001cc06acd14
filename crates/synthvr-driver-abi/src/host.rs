//! Host-side interfaces a driver calls into.
//!
//! The host hands a driver one [`DriverHost`] connection at initialization.
//! Everything else (property and pose publication) is reached through the
//! capability query [`DriverHost::generic_interface`], keyed by
//! [`DRIVER_HOST_VERSION`](crate::constants::DRIVER_HOST_VERSION).
//!
//! All calls are synchronous and made from the host's own thread.

use std::sync::Arc;

use crate::constants::TrackedDeviceIndex;
use crate::pose::DriverPose;
use crate::types::DeviceProperty;

/// Errors a host reports back to the driver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// The host refused to register the driver context.
    #[error("Driver context registration rejected: {0}")]
    RegistrationRejected(String),
}

impl HostError {
    /// Create a registration rejected error.
    #[must_use]
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::RegistrationRejected(reason.into())
    }
}

/// Property and pose publication interface.
pub trait TrackedDeviceHost: Send + Sync {
    /// Set one property in the device's property bag.
    fn tracked_device_property(&self, device: TrackedDeviceIndex, property: &DeviceProperty);

    /// Publish the device's pose for the current tick.
    fn tracked_device_pose_updated(&self, device: TrackedDeviceIndex, pose: &DriverPose);
}

/// Connection to the host runtime.
pub trait DriverHost: Send + Sync {
    /// Register the driver context with the host.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if the host rejects the registration.
    fn init_driver_context(&self) -> Result<(), HostError>;

    /// Release the registration made by [`DriverHost::init_driver_context`].
    fn cleanup_driver_context(&self);

    /// Look up a host interface by version string.
    ///
    /// Returns `None` if the host does not (or no longer) provides it.
    fn generic_interface(&self, interface_version: &str) -> Option<Arc<dyn TrackedDeviceHost>>;
}

/// Shared handle to a host connection.
pub type DriverHostHandle = Arc<dyn DriverHost>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_error_display() {
        let err = HostError::rejected("runtime shutting down");
        assert!(err.to_string().contains("runtime shutting down"));
        assert_eq!(err, HostError::RegistrationRejected("runtime shutting down".into()));
    }

    #[test]
    fn test_host_error_is_std_error() {
        let err = HostError::rejected("x");
        let _: &dyn std::error::Error = &err;
    }
}
