//! Device provider that owns the synthetic controllers.
//!
//! A [`DeviceContext`] mediates the host lifecycle: it registers with the
//! host on initialize, owns one slot per hand, dispatches ticks and releases
//! the host on teardown. Slots are never removed individually; disconnecting
//! a device only clears its slot's connected flag, and slot storage is
//! reclaimed at teardown.

use synthvr_driver_abi::{
    DriverHostHandle, INVALID_TRACKED_DEVICE_INDEX, InitError,
    SERVER_TRACKED_DEVICE_PROVIDER_VERSION, ServerTrackedDeviceProvider, TrackedDeviceDriver,
    TrackedDeviceIndex,
};

use crate::config::DriverConfig;
use crate::controller::{Hand, SyntheticController};
use crate::error::{DriverError, DriverResult};

/// Number of devices the context reports, regardless of connection state.
pub const DEVICE_COUNT: u32 = 2;

#[derive(Debug)]
struct ControllerSlot {
    controller: SyntheticController,
    connected: bool,
}

/// Owner of the two synthetic controllers.
pub struct DeviceContext {
    config: DriverConfig,
    host: Option<DriverHostHandle>,
    slots: Vec<ControllerSlot>,
    log_output: Option<String>,
}

impl std::fmt::Debug for DeviceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceContext")
            .field("initialized", &self.is_initialized())
            .field("slots", &self.slots)
            .field("log_output", &self.log_output)
            .finish_non_exhaustive()
    }
}

impl DeviceContext {
    /// Create an uninitialized context.
    #[must_use]
    pub fn new(config: DriverConfig) -> Self {
        Self {
            config,
            host: None,
            slots: Vec::new(),
            log_output: None,
        }
    }

    /// Register with `host` and create both controllers, inactive.
    ///
    /// Any previous session is torn down first, so a failed call leaves the
    /// context uninitialized with no controllers.
    ///
    /// # Errors
    ///
    /// - [`DriverError::InvalidParameter`] if `host` is `None`
    /// - [`DriverError::InvalidConfiguration`] if the configuration is invalid
    /// - [`DriverError::InitializationFailed`] if the host rejects registration
    /// - [`DriverError::OutOfResources`] if controller storage cannot be
    ///   allocated
    pub fn initialize(
        &mut self,
        host: Option<DriverHostHandle>,
        log_output: Option<&str>,
    ) -> DriverResult<()> {
        self.initialize_with_capacity(host, log_output, Hand::ALL.len())
    }

    fn initialize_with_capacity(
        &mut self,
        host: Option<DriverHostHandle>,
        log_output: Option<&str>,
        capacity: usize,
    ) -> DriverResult<()> {
        if self.is_initialized() {
            tracing::warn!("Initialize called on an initialized context, tearing down first");
            self.teardown();
        }

        let Some(host) = host else {
            return Err(DriverError::invalid_parameter(
                "host connection is required",
            ));
        };
        self.config.validate()?;

        host.init_driver_context()?;
        self.host = Some(host.clone());
        self.log_output = log_output.map(str::to_owned);

        match self.build_slots(&host, capacity) {
            Ok(slots) => self.slots = slots,
            Err(err) => {
                self.teardown();
                return Err(err);
            }
        }

        tracing::info!(
            devices = self.slots.len(),
            log_output = self.log_output.as_deref().unwrap_or("none"),
            "Driver context initialized"
        );
        Ok(())
    }

    fn build_slots(
        &self,
        host: &DriverHostHandle,
        capacity: usize,
    ) -> DriverResult<Vec<ControllerSlot>> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|source| DriverError::OutOfResources {
                requested: capacity,
                source,
            })?;
        slots.extend(Hand::ALL.into_iter().map(|hand| ControllerSlot {
            controller: SyntheticController::new(hand, &self.config, host.clone()),
            connected: true,
        }));
        Ok(slots)
    }

    /// Deactivate and drop every controller, then release the host.
    /// Idempotent; the host is only told once per successful initialize.
    pub fn teardown(&mut self) {
        for slot in &mut self.slots {
            slot.controller.deactivate();
        }
        self.slots.clear();
        self.log_output = None;

        if let Some(host) = self.host.take() {
            host.cleanup_driver_context();
            tracing::info!("Driver context torn down");
        }
    }

    /// Advance every connected controller by one tick, left then right.
    pub fn tick(&mut self) {
        for slot in self.slots.iter_mut().filter(|s| s.connected) {
            let _pose = slot.controller.advance_frame();
        }
    }

    /// Identity of the controller at `ordinal` (0 left, 1 right), or
    /// [`INVALID_TRACKED_DEVICE_INDEX`] for an unknown ordinal, a
    /// disconnected slot or an inactive controller.
    #[must_use]
    pub fn lookup_driver(&self, ordinal: u32) -> TrackedDeviceIndex {
        self.controller(ordinal)
            .map_or(INVALID_TRACKED_DEVICE_INDEX, SyntheticController::identity)
    }

    /// Disconnect the controller currently holding `device`.
    ///
    /// Unknown identities and the invalid sentinel are ignored.
    pub fn disconnect(&mut self, device: TrackedDeviceIndex) {
        if device == INVALID_TRACKED_DEVICE_INDEX {
            return;
        }
        let Some(slot) = self
            .slots
            .iter_mut()
            .find(|s| s.connected && s.controller.identity() == device)
        else {
            tracing::debug!(device, "Disconnect for unknown device ignored");
            return;
        };

        slot.controller.deactivate();
        slot.connected = false;
        tracing::info!(device, hand = %slot.controller.hand(), "Device disconnected");
    }

    /// Activate the controller at `ordinal` with a host-assigned identity.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::DeviceNotConnected`] if no connected slot exists
    /// at `ordinal`, or the controller's activation error.
    pub fn activate_device(
        &mut self,
        ordinal: u32,
        device: TrackedDeviceIndex,
    ) -> DriverResult<()> {
        self.controller_mut(ordinal)
            .ok_or(DriverError::DeviceNotConnected(ordinal))?
            .activate(device)
    }

    /// Recommended render target size in pixels.
    #[must_use]
    pub fn recommended_render_target_size(&self) -> (u32, u32) {
        (
            self.config.render_target_width,
            self.config.render_target_height,
        )
    }

    /// The driver has no standby requirements.
    #[must_use]
    pub fn should_block_standby(&self) -> bool {
        false
    }

    /// Standby has no effect on the synthetic devices.
    pub fn enter_standby(&mut self) {
        tracing::debug!("Entering standby");
    }

    /// Leaving standby has no effect either.
    pub fn leave_standby(&mut self) {
        tracing::debug!("Leaving standby");
    }

    /// Number of devices, fixed at [`DEVICE_COUNT`].
    #[must_use]
    pub fn device_count(&self) -> u32 {
        DEVICE_COUNT
    }

    /// Connected controller at `ordinal`.
    #[must_use]
    pub fn controller(&self, ordinal: u32) -> Option<&SyntheticController> {
        let index = usize::try_from(ordinal).ok()?;
        self.slots
            .get(index)
            .filter(|s| s.connected)
            .map(|s| &s.controller)
    }

    /// Connected controller at `ordinal`, mutably.
    #[must_use]
    pub fn controller_mut(&mut self, ordinal: u32) -> Option<&mut SyntheticController> {
        let index = usize::try_from(ordinal).ok()?;
        self.slots
            .get_mut(index)
            .filter(|s| s.connected)
            .map(|s| &mut s.controller)
    }

    /// Connected controller currently holding `device`.
    #[must_use]
    pub fn controller_by_identity(&self, device: TrackedDeviceIndex) -> Option<&SyntheticController> {
        if device == INVALID_TRACKED_DEVICE_INDEX {
            return None;
        }
        self.slots
            .iter()
            .find(|s| s.connected && s.controller.identity() == device)
            .map(|s| &s.controller)
    }

    /// Whether a host is currently held.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.host.is_some()
    }

    /// Log-output hint passed to the last successful initialize.
    #[must_use]
    pub fn log_output(&self) -> Option<&str> {
        self.log_output.as_deref()
    }

    /// Configuration the controllers are built from.
    #[must_use]
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }
}

impl Default for DeviceContext {
    fn default() -> Self {
        Self::new(DriverConfig::default())
    }
}

impl Drop for DeviceContext {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl ServerTrackedDeviceProvider for DeviceContext {
    fn interface_version(&self) -> &'static str {
        SERVER_TRACKED_DEVICE_PROVIDER_VERSION
    }

    fn initialize(
        &mut self,
        host: Option<DriverHostHandle>,
        log_output: Option<&str>,
    ) -> Result<(), InitError> {
        DeviceContext::initialize(self, host, log_output).map_err(|err| {
            tracing::warn!(error = %err, "Driver initialization failed");
            err.init_error()
        })
    }

    fn cleanup(&mut self) {
        self.teardown();
    }

    fn run_frame(&mut self) {
        self.tick();
    }

    fn tracked_device_count(&self) -> u32 {
        self.device_count()
    }

    fn tracked_device_id_to_driver(&self, ordinal: u32) -> TrackedDeviceIndex {
        self.lookup_driver(ordinal)
    }

    fn device_driver_mut(&mut self, ordinal: u32) -> Option<&mut dyn TrackedDeviceDriver> {
        self.controller_mut(ordinal)
            .map(|c| c as &mut dyn TrackedDeviceDriver)
    }

    fn tracked_device_driver(&self, device: TrackedDeviceIndex) -> Option<&dyn TrackedDeviceDriver> {
        self.controller_by_identity(device)
            .map(|c| c as &dyn TrackedDeviceDriver)
    }

    fn disconnect_device(&mut self, device: TrackedDeviceIndex) {
        self.disconnect(device);
    }

    fn recommended_render_target_size(&self) -> (u32, u32) {
        DeviceContext::recommended_render_target_size(self)
    }

    fn should_block_standby_mode(&self) -> bool {
        self.should_block_standby()
    }

    fn enter_standby(&mut self) {
        DeviceContext::enter_standby(self);
    }

    fn leave_standby(&mut self) {
        DeviceContext::leave_standby(self);
    }

    fn provides_interface(&self, _interface_name: &str) -> bool {
        false
    }
}
