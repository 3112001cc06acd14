//! Enumerations and property records exchanged with the host.
//!
//! This module contains the result codes, device classification enums,
//! capability flags and the typed property bag a driver publishes for each
//! device on activation.

use crate::constants::init_code;
use bitflags::bitflags;

/// Initialization result reported to the host.
///
/// The discriminants are the raw codes in [`init_code`]. Drivers keep a
/// richer error internally and collapse it to one of these at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum InitError {
    /// A required parameter was missing
    #[error("invalid parameter")]
    InvalidParam = init_code::INVALID_PARAM,
    /// The host rejected registration
    #[error("internal initialization failure")]
    InitInternal = init_code::INIT_INTERNAL,
    /// Storage could not be allocated
    #[error("out of memory")]
    OutOfMemory = init_code::OUT_OF_MEMORY,
    /// A host interface was not available
    #[error("host interface not found")]
    InterfaceNotFound = init_code::INTERFACE_NOT_FOUND,
}

impl InitError {
    /// Raw code as seen by the host.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Decode a raw code. `init_code::NONE` and unknown values yield `None`.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            init_code::INVALID_PARAM => Some(Self::InvalidParam),
            init_code::INIT_INTERNAL => Some(Self::InitInternal),
            init_code::OUT_OF_MEMORY => Some(Self::OutOfMemory),
            init_code::INTERFACE_NOT_FOUND => Some(Self::InterfaceNotFound),
            _ => None,
        }
    }
}

/// Raw code for a `Result` crossing the host boundary.
#[must_use]
pub fn result_code(result: Result<(), InitError>) -> i32 {
    match result {
        Ok(()) => init_code::NONE,
        Err(e) => e.code(),
    }
}

/// Which hand a controller is held in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum ControllerRole {
    /// No role assigned
    #[default]
    Invalid = 0,
    /// Held in the left hand
    LeftHand = 1,
    /// Held in the right hand
    RightHand = 2,
}

/// Broad class of a tracked device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u64)]
pub enum DeviceClass {
    /// Unknown device
    #[default]
    Invalid = 0,
    /// Head-mounted display
    Hmd = 1,
    /// Hand controller
    Controller = 2,
    /// Tracker without input
    GenericTracker = 3,
}

/// Tracking quality attached to every pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum TrackingResult {
    /// No tracking data yet
    #[default]
    Uninitialized = 1,
    /// Calibration in progress
    CalibratingInProgress = 100,
    /// Calibration target out of range
    CalibratingOutOfRange = 101,
    /// Tracking normally
    RunningOk = 200,
    /// Tracking but device is outside the tracked volume
    RunningOutOfRange = 201,
}

impl TrackingResult {
    /// Whether this result describes an actively tracked device.
    #[must_use]
    pub fn is_running(self) -> bool {
        matches!(self, Self::RunningOk | Self::RunningOutOfRange)
    }
}

/// Origin of the tracking universe a display transform is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum TrackingUniverseOrigin {
    /// Seated play space
    Seated = 0,
    /// Standing play space
    #[default]
    Standing = 1,
    /// Raw, uncalibrated driver space
    RawAndUncalibrated = 2,
}

bitflags! {
    /// Input and tracking capabilities a device advertises.
    ///
    /// Each flag maps to one boolean property published at activation
    /// (see [`InputCapabilities::properties`]).
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InputCapabilities: u32 {
        /// Device has an analog trigger
        const TRIGGER            = 0b0000_0001;
        /// Device has a grip button
        const GRIP               = 0b0000_0010;
        /// Device has a touchpad
        const TOUCHPAD           = 0b0000_0100;
        /// Device has a joystick
        const JOYSTICK           = 0b0000_1000;
        /// Device has a proximity sensor
        const PROXIMITY_SENSOR   = 0b0001_0000;
        /// Device position and orientation are tracked
        const TRACKING           = 0b0010_0000;
        /// Device orientation drifts in yaw over time
        const DRIFTS_IN_YAW      = 0b0100_0000;
    }
}

impl InputCapabilities {
    /// Boolean properties describing these capabilities, in publication order.
    #[must_use]
    pub fn properties(self) -> [DeviceProperty; 7] {
        [
            DeviceProperty::bool(PropertyKey::WillDriftInYaw, self.contains(Self::DRIFTS_IN_YAW)),
            DeviceProperty::bool(PropertyKey::HasControllerTracking, self.contains(Self::TRACKING)),
            DeviceProperty::bool(
                PropertyKey::HasProximitySensor,
                self.contains(Self::PROXIMITY_SENSOR),
            ),
            DeviceProperty::bool(PropertyKey::HasTouchPad, self.contains(Self::TOUCHPAD)),
            DeviceProperty::bool(PropertyKey::HasJoystick, self.contains(Self::JOYSTICK)),
            DeviceProperty::bool(PropertyKey::HasTrigger, self.contains(Self::TRIGGER)),
            DeviceProperty::bool(PropertyKey::HasGrip, self.contains(Self::GRIP)),
        ]
    }
}

/// Storage type of a property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyType {
    /// Boolean
    Bool,
    /// Signed 32-bit integer
    Int32,
    /// Unsigned 64-bit integer
    Uint64,
    /// UTF-8 string
    String,
}

/// Keys of the tracked-device property bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyKey {
    /// Orientation drifts in yaw (bool)
    WillDriftInYaw,
    /// Manufacturer display name (string)
    ManufacturerName,
    /// Model number (string)
    ModelNumber,
    /// Handedness, a [`ControllerRole`] (int32)
    ControllerRole,
    /// Device class, a [`DeviceClass`] (uint64)
    DeviceClass,
    /// Controller pose is tracked (bool)
    HasControllerTracking,
    /// Has a proximity sensor (bool)
    HasProximitySensor,
    /// Has a touchpad (bool)
    HasTouchPad,
    /// Has a joystick (bool)
    HasJoystick,
    /// Has a trigger (bool)
    HasTrigger,
    /// Has a grip button (bool)
    HasGrip,
}

impl PropertyKey {
    /// Value type the host expects for this key.
    #[must_use]
    pub const fn value_type(self) -> PropertyType {
        match self {
            Self::ManufacturerName | Self::ModelNumber => PropertyType::String,
            Self::ControllerRole => PropertyType::Int32,
            Self::DeviceClass => PropertyType::Uint64,
            Self::WillDriftInYaw
            | Self::HasControllerTracking
            | Self::HasProximitySensor
            | Self::HasTouchPad
            | Self::HasJoystick
            | Self::HasTrigger
            | Self::HasGrip => PropertyType::Bool,
        }
    }
}

/// A property value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyValue {
    /// Boolean value
    Bool(bool),
    /// Signed 32-bit value
    Int32(i32),
    /// Unsigned 64-bit value
    Uint64(u64),
    /// String value
    String(String),
}

impl PropertyValue {
    /// Storage type of this value.
    #[must_use]
    pub const fn value_type(&self) -> PropertyType {
        match self {
            Self::Bool(_) => PropertyType::Bool,
            Self::Int32(_) => PropertyType::Int32,
            Self::Uint64(_) => PropertyType::Uint64,
            Self::String(_) => PropertyType::String,
        }
    }
}

/// One entry of a device's property bag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceProperty {
    /// Property key
    pub key: PropertyKey,
    /// Property value
    pub value: PropertyValue,
}

impl DeviceProperty {
    /// Boolean property.
    #[must_use]
    pub fn bool(key: PropertyKey, value: bool) -> Self {
        Self {
            key,
            value: PropertyValue::Bool(value),
        }
    }

    /// String property.
    #[must_use]
    pub fn string(key: PropertyKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: PropertyValue::String(value.into()),
        }
    }

    /// Controller role property.
    #[must_use]
    pub fn controller_role(role: ControllerRole) -> Self {
        Self {
            key: PropertyKey::ControllerRole,
            value: PropertyValue::Int32(role as i32),
        }
    }

    /// Device class property.
    #[must_use]
    pub fn device_class(class: DeviceClass) -> Self {
        Self {
            key: PropertyKey::DeviceClass,
            value: PropertyValue::Uint64(class as u64),
        }
    }

    /// Whether the value type matches what the key requires.
    #[must_use]
    pub fn is_well_typed(&self) -> bool {
        self.key.value_type() == self.value.value_type()
    }
}
