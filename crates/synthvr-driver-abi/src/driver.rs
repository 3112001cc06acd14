//! Driver-side interfaces the host calls into.
//!
//! A driver exposes one [`ServerTrackedDeviceProvider`] per process and one
//! [`TrackedDeviceDriver`] per virtual device. The host drives both from a
//! single thread: lifecycle hooks first, then one `run_frame` per tick.

use crate::constants::TrackedDeviceIndex;
use crate::host::DriverHostHandle;
use crate::pose::{ControllerState, DriverTransform};
use crate::types::{InitError, TrackingUniverseOrigin};

/// One tracked device.
pub trait TrackedDeviceDriver {
    /// Take the host-assigned identity and publish the device's properties.
    ///
    /// # Errors
    ///
    /// Returns an [`InitError`] if the host publication interface is missing.
    fn activate(&mut self, device: TrackedDeviceIndex) -> Result<(), InitError>;

    /// Drop the host-assigned identity. Idempotent.
    fn deactivate(&mut self);

    /// Advance one tick and publish a pose. No-op while inactive.
    fn run_frame(&mut self);

    /// Last known button and axis state.
    fn input_state(&self) -> ControllerState;

    /// Request a haptic pulse on `axis_id` lasting `duration_us`.
    fn trigger_haptic_pulse(&mut self, axis_id: u32, duration_us: u16);

    /// Attach the device to a display transform.
    fn attach_to_display(&mut self, transform: &DriverTransform, origin: TrackingUniverseOrigin);

    /// Host-assigned identity, or the invalid sentinel.
    fn id(&self) -> TrackedDeviceIndex;
}

/// Top-level object a driver hands to the host.
pub trait ServerTrackedDeviceProvider {
    /// Interface version this provider implements.
    fn interface_version(&self) -> &'static str;

    /// Connect to the host and create the provider's devices.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::InvalidParam`] for a missing host,
    /// [`InitError::InitInternal`] if the host rejects registration and
    /// [`InitError::OutOfMemory`] if devices cannot be allocated.
    fn initialize(
        &mut self,
        host: Option<DriverHostHandle>,
        log_output: Option<&str>,
    ) -> Result<(), InitError>;

    /// Destroy devices and release the host. Idempotent.
    fn cleanup(&mut self);

    /// Advance every connected device by one tick.
    fn run_frame(&mut self);

    /// Number of devices this provider manages.
    fn tracked_device_count(&self) -> u32;

    /// Identity of the device at `ordinal`, or the invalid sentinel.
    fn tracked_device_id_to_driver(&self, ordinal: u32) -> TrackedDeviceIndex;

    /// Device driver at `ordinal`, if that slot is connected.
    fn device_driver_mut(&mut self, ordinal: u32) -> Option<&mut dyn TrackedDeviceDriver>;

    /// Device driver currently registered under `device`.
    fn tracked_device_driver(&self, device: TrackedDeviceIndex) -> Option<&dyn TrackedDeviceDriver>;

    /// Disconnect the device registered under `device`, if any.
    fn disconnect_device(&mut self, device: TrackedDeviceIndex);

    /// Render target size the driver recommends, in pixels.
    fn recommended_render_target_size(&self) -> (u32, u32);

    /// Whether the host should stay out of standby for this driver.
    fn should_block_standby_mode(&self) -> bool;

    /// Host is entering standby.
    fn enter_standby(&mut self);

    /// Host is leaving standby.
    fn leave_standby(&mut self);

    /// Whether the provider offers an additional interface by name.
    fn provides_interface(&self, interface_name: &str) -> bool;
}
