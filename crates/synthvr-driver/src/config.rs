//! Driver configuration.
//!
//! The host never hands the driver configuration; the factory always uses
//! [`DriverConfig::default`]. Embedders and the simulator may load one from
//! JSON to change device identity strings or the synthetic motion.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DriverError, DriverResult};
use crate::motion::MotionParams;

/// Manufacturer string published for both controllers by default.
pub const DEFAULT_MANUFACTURER: &str = "My Manufacturer";

/// Model number string published for both controllers by default.
pub const DEFAULT_MODEL_NUMBER: &str = "My Controller Model";

/// Default recommended render target edge length in pixels.
pub const DEFAULT_RENDER_TARGET_EDGE: u32 = 1024;

/// Driver configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Manufacturer name property.
    pub manufacturer: String,
    /// Model number property.
    pub model_number: String,
    /// Synthetic motion parameters.
    pub motion: MotionParams,
    /// Recommended render target width in pixels.
    pub render_target_width: u32,
    /// Recommended render target height in pixels.
    pub render_target_height: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            manufacturer: DEFAULT_MANUFACTURER.to_string(),
            model_number: DEFAULT_MODEL_NUMBER.to_string(),
            motion: MotionParams::default(),
            render_target_width: DEFAULT_RENDER_TARGET_EDGE,
            render_target_height: DEFAULT_RENDER_TARGET_EDGE,
        }
    }
}

impl DriverConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> DriverResult<()> {
        if self.manufacturer.trim().is_empty() {
            return Err(DriverError::invalid_configuration(
                "manufacturer must not be empty",
            ));
        }
        if self.model_number.trim().is_empty() {
            return Err(DriverError::invalid_configuration(
                "model_number must not be empty",
            ));
        }
        if self.render_target_width == 0 || self.render_target_height == 0 {
            return Err(DriverError::invalid_configuration(
                "render target dimensions must be greater than 0",
            ));
        }
        self.motion.validate()
    }

    /// Parse and validate a JSON configuration.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the result is invalid.
    pub fn from_json_str(json: &str) -> DriverResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> DriverResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Create a configuration builder.
    #[must_use]
    pub fn builder() -> DriverConfigBuilder {
        DriverConfigBuilder::default()
    }
}

/// Builder for `DriverConfig`.
#[derive(Debug, Default)]
pub struct DriverConfigBuilder {
    config: DriverConfig,
}

impl DriverConfigBuilder {
    /// Set the manufacturer name.
    #[must_use]
    pub fn manufacturer(mut self, name: impl Into<String>) -> Self {
        self.config.manufacturer = name.into();
        self
    }

    /// Set the model number.
    #[must_use]
    pub fn model_number(mut self, model: impl Into<String>) -> Self {
        self.config.model_number = model.into();
        self
    }

    /// Set the synthetic motion parameters.
    #[must_use]
    pub fn motion(mut self, motion: MotionParams) -> Self {
        self.config.motion = motion;
        self
    }

    /// Set the recommended render target size.
    #[must_use]
    pub fn render_target(mut self, width: u32, height: u32) -> Self {
        self.config.render_target_width = width;
        self.config.render_target_height = height;
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> DriverResult<DriverConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = DriverConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.manufacturer, "My Manufacturer");
        assert_eq!(config.model_number, "My Controller Model");
        assert_eq!(config.render_target_width, 1024);
        assert_eq!(config.render_target_height, 1024);
    }

    #[test]
    fn test_builder_rejects_empty_strings() {
        assert!(DriverConfig::builder().manufacturer("  ").build().is_err());
        assert!(DriverConfig::builder().model_number("").build().is_err());
    }

    #[test]
    fn test_builder_rejects_zero_render_target() {
        let result = DriverConfig::builder().render_target(0, 1024).build();
        assert!(matches!(result, Err(DriverError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_partial_json_uses_defaults() -> DriverResult<()> {
        let config = DriverConfig::from_json_str(r#"{ "manufacturer": "Acme" }"#)?;
        assert_eq!(config.manufacturer, "Acme");
        assert_eq!(config.model_number, DEFAULT_MODEL_NUMBER);
        assert_eq!(config.motion, MotionParams::default());
        Ok(())
    }

    #[test]
    fn test_malformed_json() {
        let result = DriverConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(DriverError::Json(_))));
    }
}
