//! `info`: report what the provider exposes without initializing it.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use synthvr_driver::driver_factory_with_config;
use synthvr_driver_abi::{DRIVER_HOST_VERSION, SERVER_TRACKED_DEVICE_PROVIDER_VERSION};

use super::load_config;
use crate::error::CliError;
use crate::output;

#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Driver configuration file (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InfoReport {
    pub provider_interface: &'static str,
    pub host_interface: &'static str,
    pub device_count: u32,
    pub render_target: (u32, u32),
    pub manufacturer: String,
    pub model_number: String,
}

pub fn execute(args: &InfoArgs, json: bool) -> Result<()> {
    let report = describe(args)?;
    output::print_info(&report, json)
}

pub fn describe(args: &InfoArgs) -> Result<InfoReport> {
    let config = load_config(args.config.as_deref())?;
    let manufacturer = config.manufacturer.clone();
    let model_number = config.model_number.clone();

    let provider =
        driver_factory_with_config(SERVER_TRACKED_DEVICE_PROVIDER_VERSION, config).ok_or_else(
            || CliError::ProviderUnavailable(SERVER_TRACKED_DEVICE_PROVIDER_VERSION.to_string()),
        )?;

    Ok(InfoReport {
        provider_interface: provider.interface_version(),
        host_interface: DRIVER_HOST_VERSION,
        device_count: provider.tracked_device_count(),
        render_target: provider.recommended_render_target_size(),
        manufacturer,
        model_number,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_info() -> Result<()> {
        let report = describe(&InfoArgs { config: None })?;
        assert_eq!(report.device_count, 2);
        assert_eq!(report.render_target, (1024, 1024));
        assert_eq!(report.provider_interface, SERVER_TRACKED_DEVICE_PROVIDER_VERSION);
        assert_eq!(report.manufacturer, "My Manufacturer");
        Ok(())
    }
}
