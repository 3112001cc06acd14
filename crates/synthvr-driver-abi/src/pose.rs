//! Pose and input-state records.
//!
//! A [`DriverPose`] is produced fresh every tick and handed to the host,
//! which consumes it immediately. [`ControllerState`] is the button/axis
//! snapshot a device reports on request.
//!
//! # Units
//!
//! Positions are in meters, velocities in meters per second, angular
//! quantities in radians. Quaternions are `w, x, y, z` and unit length.

use bitflags::bitflags;

use crate::types::TrackingResult;

/// Three-component vector.
pub type Vec3 = [f64; 3];

/// Orientation quaternion.
///
/// # Memory Layout
///
/// | Offset | Size | Field |
/// |--------|------|-------|
/// | 0      | 8    | w     |
/// | 8      | 8    | x     |
/// | 16     | 8    | y     |
/// | 24     | 8    | z     |
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    /// Scalar part
    pub w: f64,
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
}

impl Quaternion {
    /// No rotation.
    pub const IDENTITY: Self = Self {
        w: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Rotation about the vertical (+Y) axis.
    #[must_use]
    pub fn from_yaw_degrees(degrees: f64) -> Self {
        let half = degrees.to_radians() / 2.0;
        Self {
            w: half.cos(),
            x: 0.0,
            y: half.sin(),
            z: 0.0,
        }
    }

    /// Euclidean norm; 1.0 for a valid rotation.
    #[must_use]
    pub fn norm(&self) -> f64 {
        (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Spatial state of one tracked device for one tick.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriverPose {
    /// Position in driver space
    pub position: Vec3,
    /// Orientation in driver space
    pub rotation: Quaternion,
    /// Rotation from driver space into world space
    pub world_from_driver_rotation: Quaternion,
    /// Rotation from head space into driver space
    pub driver_from_head_rotation: Quaternion,
    /// Linear velocity
    pub velocity: Vec3,
    /// Linear acceleration
    pub acceleration: Vec3,
    /// Angular velocity
    pub angular_velocity: Vec3,
    /// Angular acceleration
    pub angular_acceleration: Vec3,
    /// Tracking quality
    pub result: TrackingResult,
    /// Whether the host may use this pose
    pub pose_is_valid: bool,
    /// Whether the device is connected
    pub device_is_connected: bool,
}

impl Default for DriverPose {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            rotation: Quaternion::IDENTITY,
            world_from_driver_rotation: Quaternion::IDENTITY,
            driver_from_head_rotation: Quaternion::IDENTITY,
            velocity: [0.0; 3],
            acceleration: [0.0; 3],
            angular_velocity: [0.0; 3],
            angular_acceleration: [0.0; 3],
            result: TrackingResult::Uninitialized,
            pose_is_valid: false,
            device_is_connected: false,
        }
    }
}

impl DriverPose {
    /// A valid, connected, running pose at `position` facing `rotation`.
    ///
    /// Derivatives are zero. World-from-driver matches the device rotation
    /// and driver-from-head is the identity.
    #[must_use]
    pub fn tracked(position: Vec3, rotation: Quaternion) -> Self {
        Self {
            position,
            rotation,
            world_from_driver_rotation: rotation,
            driver_from_head_rotation: Quaternion::IDENTITY,
            result: TrackingResult::RunningOk,
            pose_is_valid: true,
            device_is_connected: true,
            ..Self::default()
        }
    }

    /// Whether every velocity and acceleration component is zero.
    #[must_use]
    pub fn is_stationary(&self) -> bool {
        [
            self.velocity,
            self.acceleration,
            self.angular_velocity,
            self.angular_acceleration,
        ]
        .iter()
        .flatten()
        .all(|c| *c == 0.0)
    }
}

/// Row-major 3x4 affine transform.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriverTransform {
    /// Matrix rows
    pub m: [[f32; 4]; 3],
}

impl Default for DriverTransform {
    fn default() -> Self {
        Self {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
            ],
        }
    }
}

bitflags! {
    /// Button bits of a [`ControllerState`].
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ButtonMask: u64 {
        /// System button
        const SYSTEM           = 1 << 0;
        /// Application menu button
        const APPLICATION_MENU = 1 << 1;
        /// Grip button
        const GRIP             = 1 << 2;
        /// A button
        const A                = 1 << 7;
        /// Touchpad or joystick press
        const AXIS0            = 1 << 32;
        /// Trigger press
        const AXIS1            = 1 << 33;
    }
}

/// One analog axis.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerAxis {
    /// Horizontal component, -1.0..=1.0 (0.0..=1.0 for triggers)
    pub x: f32,
    /// Vertical component, -1.0..=1.0
    pub y: f32,
}

/// Number of analog axes in a [`ControllerState`].
pub const CONTROLLER_AXIS_COUNT: usize = 5;

/// Button and axis snapshot.
///
/// # Memory Layout
///
/// | Offset | Size | Field          |
/// |--------|------|----------------|
/// | 0      | 4    | packet_num     |
/// | 4      | 4    | (padding)      |
/// | 8      | 8    | buttons_pressed|
/// | 16     | 8    | buttons_touched|
/// | 24     | 40   | axes           |
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerState {
    /// Increments whenever the state changes
    pub packet_num: u32,
    /// Buttons currently pressed
    pub buttons_pressed: ButtonMask,
    /// Buttons currently touched
    pub buttons_touched: ButtonMask,
    /// Analog axes
    pub axes: [ControllerAxis; CONTROLLER_AXIS_COUNT],
}

impl ControllerState {
    /// Whether nothing is pressed, touched or deflected.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.buttons_pressed.is_empty()
            && self.buttons_touched.is_empty()
            && self.axes.iter().all(|a| a.x == 0.0 && a.y == 0.0)
    }
}

static_assertions::const_assert_eq!(std::mem::size_of::<Quaternion>(), 32);
static_assertions::const_assert_eq!(std::mem::align_of::<Quaternion>(), 8);
static_assertions::const_assert_eq!(std::mem::size_of::<ControllerAxis>(), 8);
static_assertions::const_assert_eq!(std::mem::size_of::<ControllerState>(), 64);
