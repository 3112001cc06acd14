//! Interface version strings and sentinel values.
//!
//! These constants define the contract between the host runtime and a
//! driver. The host looks a driver up by interface version and the driver
//! asks the host for its publication interface the same way.

/// Opaque identity assigned by the host to a tracked device at activation.
pub type TrackedDeviceIndex = u32;

/// Identity value meaning "not currently registered with the host".
pub const INVALID_TRACKED_DEVICE_INDEX: TrackedDeviceIndex = 0xFFFF_FFFF;

/// Interface version the driver factory answers to.
///
/// A host asking for any other version gets nothing back.
pub const SERVER_TRACKED_DEVICE_PROVIDER_VERSION: &str = "IServerTrackedDeviceProvider_001";

/// Interface version of the host's property and pose publication interface.
///
/// Drivers pass this to [`DriverHost::generic_interface`](crate::host::DriverHost::generic_interface).
pub const DRIVER_HOST_VERSION: &str = "IVRDriverHost_001";

/// Returns `true` if `index` is a real host-assigned identity.
#[must_use]
pub const fn is_valid_device_index(index: TrackedDeviceIndex) -> bool {
    index != INVALID_TRACKED_DEVICE_INDEX
}

/// Initialization result codes reported across the host boundary.
///
/// Values are stable; hosts compare against the raw integer.
pub mod init_code {
    /// Success
    pub const NONE: i32 = 0;
    /// A required parameter (usually the host connection) was missing
    pub const INVALID_PARAM: i32 = 1;
    /// The host rejected driver context registration
    pub const INIT_INTERNAL: i32 = 2;
    /// Device storage could not be allocated
    pub const OUT_OF_MEMORY: i32 = 3;
    /// A host interface the driver depends on was not available
    pub const INTERFACE_NOT_FOUND: i32 = 4;
}
