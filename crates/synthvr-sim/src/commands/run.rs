//! `run`: drive the provider for a number of ticks and report every pose.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use synthvr_driver::{Hand, driver_factory_with_config};
use synthvr_driver_abi::{
    DriverHostHandle, SERVER_TRACKED_DEVICE_PROVIDER_VERSION, ServerTrackedDeviceProvider,
    TrackedDeviceIndex, is_valid_device_index,
};

use super::{Activation, HandArg, load_config};
use crate::error::CliError;
use crate::host::{PoseRecord, SimHost};
use crate::output;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Number of frames to run
    #[arg(long, default_value_t = 3)]
    pub ticks: u64,

    /// Controllers to activate before the first frame
    #[arg(long, value_enum, default_value_t = Activation::Both)]
    pub activate: Activation,

    /// Disconnect a controller during the run
    #[arg(long, value_enum)]
    pub disconnect: Option<HandArg>,

    /// Frame after which the disconnect happens (defaults to half way)
    #[arg(long, requires = "disconnect")]
    pub disconnect_at: Option<u64>,

    /// Driver configuration file (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// An activated controller.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceSummary {
    pub hand: String,
    pub ordinal: u32,
    pub device: TrackedDeviceIndex,
    pub properties: usize,
}

/// A pose tagged with the frame that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct FramePose {
    pub tick: u64,
    #[serde(flatten)]
    pub pose: PoseRecord,
}

/// Result of a run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub ticks: u64,
    pub devices: Vec<DeviceSummary>,
    pub disconnected: Option<TrackedDeviceIndex>,
    pub poses: Vec<FramePose>,
}

/// Identity the simulated host assigns to a hand. Index 0 is left for a headset.
pub fn device_index_for(hand: Hand) -> TrackedDeviceIndex {
    hand.ordinal() + 1
}

pub fn execute(args: &RunArgs, json: bool) -> Result<()> {
    let report = simulate(args)?;
    output::print_run_report(&report, json)
}

/// Run the provider against a fresh [`SimHost`].
pub fn simulate(args: &RunArgs) -> Result<RunReport> {
    if let Some(at) = args.disconnect_at
        && at > args.ticks
    {
        return Err(CliError::InvalidArgument(format!(
            "--disconnect-at {at} is past the last frame ({})",
            args.ticks
        ))
        .into());
    }
    if let Some(hand) = args.disconnect
        && !args.activate.hands().contains(&Hand::from(hand))
    {
        return Err(CliError::InvalidArgument(format!(
            "--disconnect {} names a controller that is not activated",
            Hand::from(hand)
        ))
        .into());
    }

    let config = load_config(args.config.as_deref())?;
    let mut provider =
        driver_factory_with_config(SERVER_TRACKED_DEVICE_PROVIDER_VERSION, config).ok_or_else(
            || CliError::ProviderUnavailable(SERVER_TRACKED_DEVICE_PROVIDER_VERSION.to_string()),
        )?;

    let host = Arc::new(SimHost::new());
    let handle: DriverHostHandle = host.clone();
    provider
        .initialize(Some(handle), None)
        .map_err(|code| CliError::driver("initialize", code))?;

    let mut devices = Vec::new();
    for &hand in args.activate.hands() {
        devices.push(activate(provider.as_mut(), &host, hand)?);
    }

    let disconnect_at = args.disconnect_at.unwrap_or(args.ticks / 2);
    let mut disconnected = None;
    let mut poses = Vec::new();

    for tick in 0..=args.ticks {
        if let Some(hand) = args.disconnect
            && tick == disconnect_at
            && disconnected.is_none()
        {
            let device = provider.tracked_device_id_to_driver(Hand::from(hand).ordinal());
            if !is_valid_device_index(device) {
                return Err(CliError::SlotUnavailable(Hand::from(hand).to_string()).into());
            }
            provider.disconnect_device(device);
            disconnected = Some(device);
            tracing::info!(hand = %Hand::from(hand), device, tick, "Disconnected controller");
        }
        if tick == args.ticks {
            break;
        }

        provider.run_frame();
        let frame = tick.saturating_add(1);
        poses.extend(
            host.take_poses()
                .into_iter()
                .map(|pose| FramePose { tick: frame, pose }),
        );
    }

    provider.cleanup();

    Ok(RunReport {
        ticks: args.ticks,
        devices,
        disconnected,
        poses,
    })
}

fn activate(
    provider: &mut dyn ServerTrackedDeviceProvider,
    host: &SimHost,
    hand: Hand,
) -> Result<DeviceSummary, CliError> {
    let device = device_index_for(hand);
    provider
        .device_driver_mut(hand.ordinal())
        .ok_or_else(|| CliError::SlotUnavailable(hand.to_string()))?
        .activate(device)
        .map_err(|code| CliError::driver("activate", code))?;

    Ok(DeviceSummary {
        hand: hand.to_string(),
        ordinal: hand.ordinal(),
        device,
        properties: host.property_count(device),
    })
}
