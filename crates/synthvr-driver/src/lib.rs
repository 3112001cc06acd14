//! # synthvr-driver
//!
//! A stub device driver that registers two synthetic controllers with a VR
//! host and feeds them a sine-wave pose once per frame.
//!
//! ## Architecture
//!
//! - [`context`] - [`DeviceContext`], the provider that owns the controllers
//!   and mediates host lifecycle calls
//! - [`controller`] - [`SyntheticController`], one virtual tracked device
//! - [`motion`] - per-controller animation phase and pose derivation
//! - [`factory`] - version-keyed provider construction
//! - [`config`] - identity strings, motion shape and render target size
//! - [`logging`] - optional subscriber bootstrap
//! - [`error`] - driver error taxonomy and its mapping to host init codes
//!
//! ## Threading
//!
//! Every call is made synchronously on the host's thread. Nothing here
//! spawns threads or blocks beyond the call out to the host interface.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use synthvr_driver::prelude::*;
//! use synthvr_driver_abi::{DriverHost, DriverHostHandle, HostError, TrackedDeviceHost};
//!
//! struct NullHost;
//!
//! impl DriverHost for NullHost {
//!     fn init_driver_context(&self) -> Result<(), HostError> {
//!         Ok(())
//!     }
//!     fn cleanup_driver_context(&self) {}
//!     fn generic_interface(&self, _version: &str) -> Option<Arc<dyn TrackedDeviceHost>> {
//!         None
//!     }
//! }
//!
//! let host: DriverHostHandle = Arc::new(NullHost);
//! let mut ctx = DeviceContext::default();
//! assert!(ctx.initialize(Some(host), None).is_ok());
//! assert_eq!(ctx.device_count(), 2);
//! assert_eq!(ctx.lookup_driver(0), INVALID_TRACKED_DEVICE_INDEX);
//! ctx.tick();
//! ctx.teardown();
//! ```

#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod factory;
pub mod logging;
pub mod motion;
pub mod prelude;

pub use config::{DriverConfig, DriverConfigBuilder};
pub use context::{DEVICE_COUNT, DeviceContext};
pub use controller::{Activation, ControllerProfile, Hand, SyntheticController};
pub use error::{DriverError, DriverResult};
pub use factory::{driver_factory, driver_factory_with_config};
pub use motion::{MotionParams, SyntheticMotion};
