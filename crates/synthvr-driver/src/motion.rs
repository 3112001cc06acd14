//! Synthetic pose generation.
//!
//! Each controller owns one [`SyntheticMotion`]. Every tick advances its
//! phase by one step and derives a pose from the new phase alone:
//!
//! - position `(x, sin(x) * amplitude, depth)` with `x = ticks * step`
//! - orientation a yaw of `ticks * yaw_step` degrees about +Y
//! - all derivatives zero
//!
//! Deriving from the tick count keeps `x` free of accumulated rounding, so
//! after `n` ticks it equals `n * step` to within one rounding of the product.

use serde::{Deserialize, Serialize};
use synthvr_driver_abi::{DriverPose, Quaternion};

use crate::error::{DriverError, DriverResult};

/// Horizontal distance advanced per tick.
pub const DEFAULT_STEP_PER_TICK: f64 = 0.01;
/// Vertical bob amplitude.
pub const DEFAULT_BOB_AMPLITUDE: f64 = 0.1;
/// Fixed depth (z) of the sweep.
pub const DEFAULT_DEPTH: f64 = -2.0;
/// Yaw advanced per tick, in degrees.
pub const DEFAULT_YAW_STEP_DEGREES: f64 = 1.0;

/// Shape of the synthetic motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionParams {
    /// Horizontal distance advanced per tick.
    pub step_per_tick: f64,
    /// Vertical bob amplitude.
    pub bob_amplitude: f64,
    /// Fixed depth.
    pub depth: f64,
    /// Yaw advanced per tick, in degrees.
    pub yaw_step_degrees: f64,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            step_per_tick: DEFAULT_STEP_PER_TICK,
            bob_amplitude: DEFAULT_BOB_AMPLITUDE,
            depth: DEFAULT_DEPTH,
            yaw_step_degrees: DEFAULT_YAW_STEP_DEGREES,
        }
    }
}

impl MotionParams {
    /// Validate the parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is non-finite or the step is not positive.
    pub fn validate(&self) -> DriverResult<()> {
        let values = [
            ("step_per_tick", self.step_per_tick),
            ("bob_amplitude", self.bob_amplitude),
            ("depth", self.depth),
            ("yaw_step_degrees", self.yaw_step_degrees),
        ];
        if let Some((name, _)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(DriverError::invalid_configuration(format!(
                "{name} must be finite"
            )));
        }
        if self.step_per_tick <= 0.0 {
            return Err(DriverError::invalid_configuration(
                "step_per_tick must be greater than 0",
            ));
        }
        Ok(())
    }

    /// Pose after `ticks` steps from the initial phase.
    #[must_use]
    pub fn pose_at(&self, ticks: u64) -> DriverPose {
        #[expect(
            clippy::cast_precision_loss,
            reason = "tick counts stay far below 2^53 for any process lifetime"
        )]
        let n = ticks as f64;
        let x = n * self.step_per_tick;
        let position = [x, x.sin() * self.bob_amplitude, self.depth];
        let rotation = Quaternion::from_yaw_degrees(n * self.yaw_step_degrees);
        DriverPose::tracked(position, rotation)
    }
}

/// Per-controller animation state.
///
/// The phase only moves forward; [`SyntheticMotion::reset`] returns it to
/// the initial value on activation.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticMotion {
    params: MotionParams,
    ticks: u64,
}

impl SyntheticMotion {
    /// Motion at its initial phase.
    #[must_use]
    pub fn new(params: MotionParams) -> Self {
        Self { params, ticks: 0 }
    }

    /// Return to the initial phase.
    pub fn reset(&mut self) {
        self.ticks = 0;
    }

    /// Advance one tick and return the new pose.
    pub fn advance(&mut self) -> DriverPose {
        self.ticks = self.ticks.saturating_add(1);
        self.params.pose_at(self.ticks)
    }

    /// Number of ticks since the last reset.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Current horizontal phase, `ticks * step`.
    #[must_use]
    pub fn phase(&self) -> f64 {
        self.params.pose_at(self.ticks).position[0]
    }

    /// Motion parameters.
    #[must_use]
    pub fn params(&self) -> &MotionParams {
        &self.params
    }
}

impl Default for SyntheticMotion {
    fn default() -> Self {
        Self::new(MotionParams::default())
    }
}
