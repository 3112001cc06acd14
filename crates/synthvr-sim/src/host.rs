//! In-process host that records what the driver publishes.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use synthvr_driver_abi::{
    DRIVER_HOST_VERSION, DeviceProperty, DriverHost, DriverPose, HostError, TrackedDeviceHost,
    TrackedDeviceIndex,
};

/// One pose as received from the driver.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PoseRecord {
    pub device: TrackedDeviceIndex,
    pub position: [f64; 3],
    pub rotation: [f64; 4],
    pub valid: bool,
}

impl PoseRecord {
    fn new(device: TrackedDeviceIndex, pose: &DriverPose) -> Self {
        let q = pose.rotation;
        Self {
            device,
            position: pose.position,
            rotation: [q.w, q.x, q.y, q.z],
            valid: pose.pose_is_valid,
        }
    }
}

#[derive(Debug, Default)]
struct Published {
    properties: Mutex<Vec<(TrackedDeviceIndex, DeviceProperty)>>,
    poses: Mutex<Vec<PoseRecord>>,
}

impl TrackedDeviceHost for Published {
    fn tracked_device_property(&self, device: TrackedDeviceIndex, property: &DeviceProperty) {
        tracing::debug!(device, key = ?property.key, value = ?property.value, "Property set");
        self.properties.lock().push((device, property.clone()));
    }

    fn tracked_device_pose_updated(&self, device: TrackedDeviceIndex, pose: &DriverPose) {
        self.poses.lock().push(PoseRecord::new(device, pose));
    }
}

/// Host side of the simulator.
#[derive(Debug, Default)]
pub struct SimHost {
    published: Arc<Published>,
}

impl SimHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Poses received since the last call.
    pub fn take_poses(&self) -> Vec<PoseRecord> {
        std::mem::take(&mut *self.published.poses.lock())
    }

    /// Number of properties received for `device`.
    pub fn property_count(&self, device: TrackedDeviceIndex) -> usize {
        self.published
            .properties
            .lock()
            .iter()
            .filter(|(id, _)| *id == device)
            .count()
    }
}

impl DriverHost for SimHost {
    fn init_driver_context(&self) -> Result<(), HostError> {
        tracing::debug!("Driver context registered");
        Ok(())
    }

    fn cleanup_driver_context(&self) {
        tracing::debug!("Driver context released");
    }

    fn generic_interface(&self, interface_version: &str) -> Option<Arc<dyn TrackedDeviceHost>> {
        if interface_version != DRIVER_HOST_VERSION {
            return None;
        }
        let iface: Arc<dyn TrackedDeviceHost> = self.published.clone();
        Some(iface)
    }
}
