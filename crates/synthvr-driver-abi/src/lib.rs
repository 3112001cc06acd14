//! Host/driver contract for SynthVR drivers.
//!
//! This crate defines the in-process plugin contract between a VR host
//! runtime and a tracked-device driver:
//! - Interface version strings and the invalid device sentinel
//! - Initialization result codes
//! - The typed tracked-device property bag
//! - Pose and input-state records
//! - Host traits the driver calls ([`DriverHost`], [`TrackedDeviceHost`])
//! - Driver traits the host calls ([`ServerTrackedDeviceProvider`],
//!   [`TrackedDeviceDriver`])
//!
//! # Lifecycle
//!
//! 1. The host asks the driver factory for
//!    [`SERVER_TRACKED_DEVICE_PROVIDER_VERSION`].
//! 2. `initialize` hands the provider a host connection.
//! 3. The host activates each device with an identity of its choosing.
//! 4. Every tick the host calls `run_frame`; active devices publish a pose.
//! 5. `cleanup` releases everything.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod constants;
pub mod driver;
pub mod host;
pub mod pose;
pub mod prelude;
pub mod types;

pub use constants::{
    DRIVER_HOST_VERSION, INVALID_TRACKED_DEVICE_INDEX, SERVER_TRACKED_DEVICE_PROVIDER_VERSION,
    TrackedDeviceIndex, init_code, is_valid_device_index,
};
pub use driver::{ServerTrackedDeviceProvider, TrackedDeviceDriver};
pub use host::{DriverHost, DriverHostHandle, HostError, TrackedDeviceHost};
pub use pose::{
    ButtonMask, CONTROLLER_AXIS_COUNT, ControllerAxis, ControllerState, DriverPose,
    DriverTransform, Quaternion, Vec3,
};
pub use types::{
    ControllerRole, DeviceClass, DeviceProperty, InitError, InputCapabilities, PropertyKey,
    PropertyType, PropertyValue, TrackingResult, TrackingUniverseOrigin, result_code,
};
