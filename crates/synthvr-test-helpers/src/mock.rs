//! Recording host connection for driver tests.
//!
//! [`MockDriverHost`] implements the host side of the driver contract and
//! records every property and pose a driver publishes. Its behavior can be
//! switched to reject registration or to withdraw the publication interface.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use parking_lot::Mutex;
use synthvr_driver_abi::{
    DRIVER_HOST_VERSION, DeviceProperty, DriverHost, DriverHostHandle, DriverPose, HostError,
    PropertyKey, TrackedDeviceHost, TrackedDeviceIndex,
};

/// Everything published through the host interface, in call order.
#[derive(Debug, Default)]
pub struct PublishLog {
    properties: Mutex<Vec<(TrackedDeviceIndex, DeviceProperty)>>,
    poses: Mutex<Vec<(TrackedDeviceIndex, DriverPose)>>,
}

impl TrackedDeviceHost for PublishLog {
    fn tracked_device_property(&self, device: TrackedDeviceIndex, property: &DeviceProperty) {
        self.properties.lock().push((device, property.clone()));
    }

    fn tracked_device_pose_updated(&self, device: TrackedDeviceIndex, pose: &DriverPose) {
        self.poses.lock().push((device, *pose));
    }
}

/// A host connection that records what the driver does with it.
#[derive(Debug)]
pub struct MockDriverHost {
    log: Arc<PublishLog>,
    reject_registration: Option<String>,
    interface_available: AtomicBool,
    init_calls: AtomicU32,
    cleanup_calls: AtomicU32,
}

impl MockDriverHost {
    pub fn new() -> Self {
        Self {
            log: Arc::new(PublishLog::default()),
            reject_registration: None,
            interface_available: AtomicBool::new(true),
            init_calls: AtomicU32::new(0),
            cleanup_calls: AtomicU32::new(0),
        }
    }

    /// A host that refuses driver context registration.
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            reject_registration: Some(reason.into()),
            ..Self::new()
        }
    }

    /// A host that accepts registration but never exposes its publication interface.
    pub fn without_interface() -> Self {
        let host = Self::new();
        host.set_interface_available(false);
        host
    }

    pub fn into_handle(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Type-erased connection to hand to a driver.
    pub fn connection(self: &Arc<Self>) -> DriverHostHandle {
        Arc::<Self>::clone(self)
    }

    pub fn set_interface_available(&self, available: bool) {
        self.interface_available.store(available, Ordering::SeqCst);
    }

    pub fn init_calls(&self) -> u32 {
        self.init_calls.load(Ordering::SeqCst)
    }

    pub fn cleanup_calls(&self) -> u32 {
        self.cleanup_calls.load(Ordering::SeqCst)
    }

    pub fn properties_for(&self, device: TrackedDeviceIndex) -> Vec<DeviceProperty> {
        self.log
            .properties
            .lock()
            .iter()
            .filter(|(id, _)| *id == device)
            .map(|(_, p)| p.clone())
            .collect()
    }

    pub fn property(&self, device: TrackedDeviceIndex, key: PropertyKey) -> Option<DeviceProperty> {
        self.properties_for(device)
            .into_iter()
            .rev()
            .find(|p| p.key == key)
    }

    pub fn poses_for(&self, device: TrackedDeviceIndex) -> Vec<DriverPose> {
        self.log
            .poses
            .lock()
            .iter()
            .filter(|(id, _)| *id == device)
            .map(|(_, p)| *p)
            .collect()
    }

    pub fn last_pose(&self, device: TrackedDeviceIndex) -> Option<DriverPose> {
        self.poses_for(device).last().copied()
    }

    /// Device ids in the order their poses were published.
    pub fn pose_order(&self) -> Vec<TrackedDeviceIndex> {
        self.log.poses.lock().iter().map(|(id, _)| *id).collect()
    }

    pub fn pose_count(&self) -> usize {
        self.log.poses.lock().len()
    }

    pub fn property_count(&self) -> usize {
        self.log.properties.lock().len()
    }

    pub fn clear(&self) {
        self.log.properties.lock().clear();
        self.log.poses.lock().clear();
    }
}

impl Default for MockDriverHost {
    fn default() -> Self {
        Self::new()
    }
}

impl DriverHost for MockDriverHost {
    fn init_driver_context(&self) -> Result<(), HostError> {
        self.init_calls.fetch_add(1, Ordering::SeqCst);
        match &self.reject_registration {
            Some(reason) => Err(HostError::rejected(reason.clone())),
            None => Ok(()),
        }
    }

    fn cleanup_driver_context(&self) {
        self.cleanup_calls.fetch_add(1, Ordering::SeqCst);
    }

    fn generic_interface(&self, interface_version: &str) -> Option<Arc<dyn TrackedDeviceHost>> {
        if interface_version != DRIVER_HOST_VERSION
            || !self.interface_available.load(Ordering::SeqCst)
        {
            return None;
        }
        let iface: Arc<dyn TrackedDeviceHost> = self.log.clone();
        Some(iface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use synthvr_driver_abi::Quaternion;

    #[test]
    fn test_records_per_device() {
        let host = MockDriverHost::new();
        let iface = host.generic_interface(DRIVER_HOST_VERSION).unwrap();

        iface.tracked_device_property(1, &DeviceProperty::bool(PropertyKey::HasGrip, true));
        iface.tracked_device_pose_updated(1, &DriverPose::tracked([1.0, 0.0, 0.0], Quaternion::IDENTITY));
        iface.tracked_device_pose_updated(2, &DriverPose::default());

        assert_eq!(host.properties_for(1).len(), 1);
        assert_eq!(host.poses_for(1).len(), 1);
        assert_eq!(host.pose_order(), vec![1, 2]);
        assert!(host.property(1, PropertyKey::HasGrip).is_some());
        assert!(host.property(2, PropertyKey::HasGrip).is_none());

        host.clear();
        assert_eq!(host.pose_count(), 0);
        assert_eq!(host.property_count(), 0);
    }

    #[test]
    fn test_interface_gating() {
        let host = MockDriverHost::new();
        assert!(host.generic_interface("IUnknown_001").is_none());

        host.set_interface_available(false);
        assert!(host.generic_interface(DRIVER_HOST_VERSION).is_none());

        assert!(MockDriverHost::without_interface().generic_interface(DRIVER_HOST_VERSION).is_none());
    }

    #[test]
    fn test_connection_shares_log() {
        let host = MockDriverHost::new().into_handle();
        let handle = host.connection();
        let iface = handle.generic_interface(DRIVER_HOST_VERSION).unwrap();

        iface.tracked_device_pose_updated(4, &DriverPose::default());
        handle.cleanup_driver_context();

        assert_eq!(host.pose_count(), 1);
        assert_eq!(host.cleanup_calls(), 1);
    }

    #[test]
    fn test_registration() {
        let host = MockDriverHost::rejecting("busy");
        assert!(host.init_driver_context().is_err());
        assert_eq!(host.init_calls(), 1);

        let host = MockDriverHost::new();
        assert!(host.init_driver_context().is_ok());
        host.cleanup_driver_context();
        assert_eq!(host.cleanup_calls(), 1);
    }
}
