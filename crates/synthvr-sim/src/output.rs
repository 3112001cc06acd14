//! Output formatting for CLI responses

use anyhow::{Error, Result};
use colored::*;
use serde_json::json;

use crate::commands::info::InfoReport;
use crate::commands::run::RunReport;
use crate::error::CliError;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error)
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

fn error_type_name(error: &Error) -> &'static str {
    error
        .downcast_ref::<CliError>()
        .map_or("Unknown", CliError::kind)
}

/// Print the poses produced by a run
pub fn print_run_report(report: &RunReport, json: bool) -> Result<()> {
    if json {
        let output = json!({
            "success": true,
            "run": report
        });
        println!("{}", serde_json::to_string_pretty(&output).map_err(CliError::from)?);
        return Ok(());
    }

    if report.devices.is_empty() {
        println!("{}", "No controllers activated".yellow());
    }
    for device in &report.devices {
        println!(
            "  {} {} controller as device {} ({} properties)",
            "●".green(),
            device.hand.bold(),
            device.device,
            device.properties
        );
    }

    for frame in &report.poses {
        let [x, y, z] = frame.pose.position;
        let [w, qx, qy, qz] = frame.pose.rotation;
        println!(
            "tick {:>4}  device {}  pos ({x:+.4}, {y:+.4}, {z:+.4})  rot ({w:+.4}, {qx:+.4}, {qy:+.4}, {qz:+.4})",
            frame.tick, frame.pose.device,
        );
    }

    if let Some(device) = report.disconnected {
        println!("{} device {}", "Disconnected".yellow(), device);
    }
    println!(
        "{} {} ticks, {} poses",
        "Done:".bold(),
        report.ticks,
        report.poses.len()
    );
    Ok(())
}

/// Print provider information
pub fn print_info(info: &InfoReport, json: bool) -> Result<()> {
    if json {
        let output = json!({
            "success": true,
            "info": info
        });
        println!("{}", serde_json::to_string_pretty(&output).map_err(CliError::from)?);
        return Ok(());
    }

    println!("{}", "Provider:".bold());
    println!("  Interface:     {}", info.provider_interface);
    println!("  Host:          {}", info.host_interface);
    println!("  Devices:       {}", info.device_count);
    println!(
        "  Render target: {}x{}",
        info.render_target.0, info.render_target.1
    );
    println!("  Manufacturer:  {}", info.manufacturer);
    println!("  Model:         {}", info.model_number);
    Ok(())
}
