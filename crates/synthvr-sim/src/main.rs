//! synthvr-sim - SynthVR driver simulator
//!
//! Loads the driver through its provider factory, connects it to an
//! in-process host and runs frames, printing every pose the driver publishes.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod error;
mod host;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{InfoArgs, RunArgs};

#[derive(Parser)]
#[command(name = "synthvr-sim")]
#[command(about = "SynthVR driver simulator - run synthetic controllers against an in-process host")]
#[command(version)]
#[command(long_about = "
synthvr-sim drives the SynthVR stub driver the way a VR runtime would: it
initializes the provider, activates controllers, runs frames and prints the
poses the driver publishes.

Use --json for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the driver for a number of frames
    Run(RunArgs),

    /// Show provider interface, device count and render target
    Info(InfoArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = synthvr_driver::logging::level_for_verbosity(cli.verbose);
    synthvr_driver::logging::init_logging(&format!(
        "synthvr_sim={level},synthvr_driver={level}"
    ));

    let result = execute_command(&cli);

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }
            std::process::exit(1);
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Run(args) => commands::run::execute(args, cli.json),
        Commands::Info(args) => commands::info::execute(args, cli.json),
    }
}
