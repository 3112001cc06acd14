//! Command implementations for synthvr-sim

pub mod info;
pub mod run;

use std::path::Path;

use clap::ValueEnum;
use synthvr_driver::{DriverConfig, Hand};

pub use info::InfoArgs;
pub use run::RunArgs;

/// Controller selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HandArg {
    Left,
    Right,
}

impl From<HandArg> for Hand {
    fn from(arg: HandArg) -> Self {
        match arg {
            HandArg::Left => Hand::Left,
            HandArg::Right => Hand::Right,
        }
    }
}

/// Which controllers to activate before ticking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Activation {
    Left,
    Right,
    #[default]
    Both,
    None,
}

impl Activation {
    pub fn hands(self) -> &'static [Hand] {
        match self {
            Activation::Left => &[Hand::Left],
            Activation::Right => &[Hand::Right],
            Activation::Both => &Hand::ALL,
            Activation::None => &[],
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<DriverConfig> {
    let config = match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading driver configuration");
            DriverConfig::load(path).map_err(crate::error::CliError::from)?
        }
        None => DriverConfig::default(),
    };
    Ok(config)
}
