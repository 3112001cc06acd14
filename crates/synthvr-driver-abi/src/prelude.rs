//! Convenience re-exports for common contract types.
//!
//! # Example
//!
//! ```
//! use synthvr_driver_abi::prelude::*;
//!
//! let pose = DriverPose::tracked([0.0, 1.0, -2.0], Quaternion::from_yaw_degrees(45.0));
//! assert!(pose.pose_is_valid);
//! assert!(is_valid_device_index(3));
//! assert!(!is_valid_device_index(INVALID_TRACKED_DEVICE_INDEX));
//! ```

pub use crate::constants::{
    DRIVER_HOST_VERSION, INVALID_TRACKED_DEVICE_INDEX, SERVER_TRACKED_DEVICE_PROVIDER_VERSION,
    TrackedDeviceIndex, init_code, is_valid_device_index,
};

pub use crate::driver::{ServerTrackedDeviceProvider, TrackedDeviceDriver};

pub use crate::host::{DriverHost, DriverHostHandle, HostError, TrackedDeviceHost};

pub use crate::pose::{ButtonMask, ControllerState, DriverPose, DriverTransform, Quaternion, Vec3};

pub use crate::types::{
    ControllerRole, DeviceClass, DeviceProperty, InitError, InputCapabilities, PropertyKey,
    PropertyValue, TrackingResult, TrackingUniverseOrigin,
};
