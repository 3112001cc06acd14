//! Provider factory keyed by interface version.
//!
//! The host asks for a provider by version string. The embedder owns the
//! returned provider; there is no process-wide instance.

use synthvr_driver_abi::{SERVER_TRACKED_DEVICE_PROVIDER_VERSION, ServerTrackedDeviceProvider};

use crate::config::DriverConfig;
use crate::context::DeviceContext;

/// Provider for `interface_version`, built with the default configuration.
///
/// Returns `None` for any version other than
/// [`SERVER_TRACKED_DEVICE_PROVIDER_VERSION`].
#[must_use]
pub fn driver_factory(interface_version: &str) -> Option<Box<dyn ServerTrackedDeviceProvider>> {
    driver_factory_with_config(interface_version, DriverConfig::default())
}

/// Provider for `interface_version`, built with `config`.
///
/// Returns `None` for an unsupported version or a configuration that fails
/// [`DriverConfig::validate`].
#[must_use]
pub fn driver_factory_with_config(
    interface_version: &str,
    config: DriverConfig,
) -> Option<Box<dyn ServerTrackedDeviceProvider>> {
    if interface_version != SERVER_TRACKED_DEVICE_PROVIDER_VERSION {
        tracing::warn!(
            requested = interface_version,
            supported = SERVER_TRACKED_DEVICE_PROVIDER_VERSION,
            "Unsupported provider interface version"
        );
        return None;
    }
    if let Err(err) = config.validate() {
        tracing::warn!(error = %err, "Refusing provider with invalid configuration");
        return None;
    }
    Some(Box::new(DeviceContext::new(config)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_version() {
        let provider = driver_factory(SERVER_TRACKED_DEVICE_PROVIDER_VERSION);
        assert!(provider.is_some());
        assert_eq!(
            provider.map(|p| p.tracked_device_count()),
            Some(2)
        );
    }

    #[test]
    fn test_invalid_config() {
        let config = DriverConfig {
            render_target_width: 0,
            ..DriverConfig::default()
        };
        assert!(driver_factory_with_config(SERVER_TRACKED_DEVICE_PROVIDER_VERSION, config).is_none());
    }

    #[test]
    fn test_mismatched_version() {
        assert!(driver_factory("IServerTrackedDeviceProvider_000").is_none());
        assert!(driver_factory("").is_none());
    }
}
