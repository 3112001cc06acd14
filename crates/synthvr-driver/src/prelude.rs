//! Prelude for synthvr-driver.
//!
//! ```rust
//! use synthvr_driver::prelude::*;
//!
//! let config = DriverConfig::default();
//! let ctx = DeviceContext::new(config);
//! assert!(!ctx.is_initialized());
//! ```

pub use crate::config::{DriverConfig, DriverConfigBuilder};
pub use crate::context::{DEVICE_COUNT, DeviceContext};
pub use crate::controller::{Activation, ControllerProfile, Hand, SyntheticController};
pub use crate::error::{DriverError, DriverResult};
pub use crate::factory::{driver_factory, driver_factory_with_config};
pub use crate::motion::{MotionParams, SyntheticMotion};

pub use synthvr_driver_abi::{
    DriverPose, INVALID_TRACKED_DEVICE_INDEX, InitError, ServerTrackedDeviceProvider,
    TrackedDeviceDriver, TrackedDeviceIndex,
};
