//! Synthetic controller device.
//!
//! A [`SyntheticController`] is either inactive or active under a
//! host-assigned identity. Only an active controller advances its motion
//! and publishes poses; ticks delivered while inactive are ignored so the
//! owning context can dispatch to every slot without checking state first.

use synthvr_driver_abi::{
    ControllerRole, ControllerState, DRIVER_HOST_VERSION, DeviceClass, DeviceProperty,
    DriverHostHandle, DriverPose, DriverTransform, INVALID_TRACKED_DEVICE_INDEX, InitError,
    InputCapabilities, PropertyKey, TrackedDeviceDriver, TrackedDeviceHost, TrackedDeviceIndex,
    TrackingUniverseOrigin,
};
use std::sync::Arc;

use crate::config::DriverConfig;
use crate::error::{DriverError, DriverResult};
use crate::motion::SyntheticMotion;

/// Which hand, and therefore which context slot, a controller occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    /// Slot 0
    Left,
    /// Slot 1
    Right,
}

impl Hand {
    /// Both hands in dispatch order.
    pub const ALL: [Hand; 2] = [Hand::Left, Hand::Right];

    /// Slot ordinal of this hand.
    #[must_use]
    pub const fn ordinal(self) -> u32 {
        match self {
            Hand::Left => 0,
            Hand::Right => 1,
        }
    }

    /// Hand for a slot ordinal.
    #[must_use]
    pub const fn from_ordinal(ordinal: u32) -> Option<Self> {
        match ordinal {
            0 => Some(Hand::Left),
            1 => Some(Hand::Right),
            _ => None,
        }
    }

    /// Controller role published for this hand.
    #[must_use]
    pub const fn role(self) -> ControllerRole {
        match self {
            Hand::Left => ControllerRole::LeftHand,
            Hand::Right => ControllerRole::RightHand,
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hand::Left => write!(f, "left"),
            Hand::Right => write!(f, "right"),
        }
    }
}

/// Static identity and capability set of a controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerProfile {
    /// Manufacturer name.
    pub manufacturer: String,
    /// Model number.
    pub model_number: String,
    /// Handedness.
    pub role: ControllerRole,
    /// Input and tracking capabilities.
    pub capabilities: InputCapabilities,
}

impl ControllerProfile {
    /// Capabilities every synthetic controller advertises: a trigger, a grip
    /// and tracking. No touchpad, joystick or proximity sensor, no yaw drift.
    pub const CAPABILITIES: InputCapabilities = InputCapabilities::TRIGGER
        .union(InputCapabilities::GRIP)
        .union(InputCapabilities::TRACKING);

    /// Profile for `hand` using the identity strings from `config`.
    #[must_use]
    pub fn new(config: &DriverConfig, hand: Hand) -> Self {
        Self {
            manufacturer: config.manufacturer.clone(),
            model_number: config.model_number.clone(),
            role: hand.role(),
            capabilities: Self::CAPABILITIES,
        }
    }

    /// Property bag published on activation, in publication order.
    #[must_use]
    pub fn properties(&self) -> Vec<DeviceProperty> {
        let [drift, flags @ ..] = self.capabilities.properties();
        let mut props = Vec::with_capacity(11);
        props.push(drift);
        props.push(DeviceProperty::string(
            PropertyKey::ManufacturerName,
            self.manufacturer.as_str(),
        ));
        props.push(DeviceProperty::string(
            PropertyKey::ModelNumber,
            self.model_number.as_str(),
        ));
        props.push(DeviceProperty::controller_role(self.role));
        props.push(DeviceProperty::device_class(DeviceClass::Controller));
        props.extend(flags);
        props
    }
}

/// Activation state of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    /// Not registered with the host.
    #[default]
    Inactive,
    /// Registered under a host-assigned identity.
    Active(TrackedDeviceIndex),
}

/// One virtual tracked controller.
pub struct SyntheticController {
    hand: Hand,
    profile: ControllerProfile,
    host: DriverHostHandle,
    activation: Activation,
    motion: SyntheticMotion,
    input: ControllerState,
    last_pose: Option<DriverPose>,
}

impl std::fmt::Debug for SyntheticController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntheticController")
            .field("hand", &self.hand)
            .field("activation", &self.activation)
            .field("ticks", &self.motion.ticks())
            .finish_non_exhaustive()
    }
}

impl SyntheticController {
    /// Create an inactive controller for `hand`.
    #[must_use]
    pub fn new(hand: Hand, config: &DriverConfig, host: DriverHostHandle) -> Self {
        Self {
            hand,
            profile: ControllerProfile::new(config, hand),
            host,
            activation: Activation::Inactive,
            motion: SyntheticMotion::new(config.motion),
            input: ControllerState::default(),
            last_pose: None,
        }
    }

    /// Take identity `device`, reset the motion phase and publish the
    /// controller's properties.
    ///
    /// On failure the controller stays inactive.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::InvalidParameter`] for the invalid sentinel and
    /// [`DriverError::HostInterfaceUnavailable`] if the host publication
    /// interface cannot be obtained.
    pub fn activate(&mut self, device: TrackedDeviceIndex) -> DriverResult<()> {
        if device == INVALID_TRACKED_DEVICE_INDEX {
            return Err(DriverError::invalid_parameter(
                "cannot activate with the invalid device index",
            ));
        }
        let Some(iface) = self.publication_interface() else {
            tracing::warn!(hand = %self.hand, device, "Host interface missing during activation");
            return Err(DriverError::host_interface_unavailable(DRIVER_HOST_VERSION));
        };

        for property in self.profile.properties() {
            iface.tracked_device_property(device, &property);
        }

        self.motion.reset();
        self.last_pose = None;
        self.activation = Activation::Active(device);
        tracing::info!(hand = %self.hand, device, "Controller activated");
        Ok(())
    }

    /// Drop the host-assigned identity. Idempotent.
    pub fn deactivate(&mut self) {
        if let Activation::Active(device) = self.activation {
            tracing::info!(hand = %self.hand, device, "Controller deactivated");
        }
        self.activation = Activation::Inactive;
    }

    /// Advance one tick and publish the new pose.
    ///
    /// Returns `None` without touching the motion phase while inactive. A
    /// missing host interface is logged; the pose is still produced.
    pub fn advance_frame(&mut self) -> Option<DriverPose> {
        let Activation::Active(device) = self.activation else {
            return None;
        };

        let pose = self.motion.advance();
        match self.publication_interface() {
            Some(iface) => {
                iface.tracked_device_pose_updated(device, &pose);
                tracing::trace!(
                    device,
                    x = pose.position[0],
                    y = pose.position[1],
                    z = pose.position[2],
                    "Pose published"
                );
            }
            None => {
                tracing::warn!(hand = %self.hand, device, "Host interface missing, pose dropped");
            }
        }
        self.last_pose = Some(pose);
        Some(pose)
    }

    /// Last known button and axis state. Always neutral; no input is decoded.
    #[must_use]
    pub fn current_input_state(&self) -> ControllerState {
        self.input
    }

    /// Accept a haptic pulse request. There is no actuator; the request is logged.
    pub fn trigger_haptic_pulse(&mut self, axis_id: u32, duration_us: u16) {
        tracing::debug!(
            hand = %self.hand,
            axis_id,
            duration_us,
            "Haptic pulse requested (no actuator)"
        );
    }

    /// Host-assigned identity, or [`INVALID_TRACKED_DEVICE_INDEX`].
    #[must_use]
    pub fn identity(&self) -> TrackedDeviceIndex {
        match self.activation {
            Activation::Active(device) => device,
            Activation::Inactive => INVALID_TRACKED_DEVICE_INDEX,
        }
    }

    /// Whether the controller is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.activation, Activation::Active(_))
    }

    /// Activation state.
    #[must_use]
    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Hand this controller occupies.
    #[must_use]
    pub fn hand(&self) -> Hand {
        self.hand
    }

    /// Static identity and capability set.
    #[must_use]
    pub fn profile(&self) -> &ControllerProfile {
        &self.profile
    }

    /// Animation state.
    #[must_use]
    pub fn motion(&self) -> &SyntheticMotion {
        &self.motion
    }

    /// Pose produced by the most recent tick since activation.
    #[must_use]
    pub fn last_pose(&self) -> Option<DriverPose> {
        self.last_pose
    }

    fn publication_interface(&self) -> Option<Arc<dyn TrackedDeviceHost>> {
        self.host.generic_interface(DRIVER_HOST_VERSION)
    }
}

impl TrackedDeviceDriver for SyntheticController {
    fn activate(&mut self, device: TrackedDeviceIndex) -> Result<(), InitError> {
        SyntheticController::activate(self, device).map_err(InitError::from)
    }

    fn deactivate(&mut self) {
        SyntheticController::deactivate(self);
    }

    fn run_frame(&mut self) {
        let _pose = self.advance_frame();
    }

    fn input_state(&self) -> ControllerState {
        self.current_input_state()
    }

    fn trigger_haptic_pulse(&mut self, axis_id: u32, duration_us: u16) {
        SyntheticController::trigger_haptic_pulse(self, axis_id, duration_us);
    }

    fn attach_to_display(&mut self, _transform: &DriverTransform, origin: TrackingUniverseOrigin) {
        tracing::debug!(hand = %self.hand, ?origin, "Attach to display ignored");
    }

    fn id(&self) -> TrackedDeviceIndex {
        self.identity()
    }
}
