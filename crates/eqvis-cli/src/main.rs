//! eqvis CLI
//!
//! Renders and checks the eqmarl-vis README.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::process::ExitCode;

use anyhow::Result;
use eqvis_cli::cli::{Cli, Command};
use eqvis_cli::commands::{cmd_check, cmd_inspect, cmd_render};
use eqvis_cli::config_handlers::handle_config_command;
use eqvis_cli::{EqvisConfig, logging};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse_args();
    logging::init_logging(cli.verbose);

    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Config { action } => {
            handle_config_command(config_path, action)?;
        }
        Command::Render { manifest, output } => {
            let config = EqvisConfig::load(config_path)?;
            cmd_render(&config, manifest.as_deref(), output.as_deref())?;
        }
        Command::Check { manifest, readme } => {
            let config = EqvisConfig::load(config_path)?;
            let drift = cmd_check(&config, manifest.as_deref(), readme.as_deref())?;
            if !drift.is_up_to_date() {
                eprintln!("README is out of date: {drift}");
                eprintln!("Run `eqvis render -o <README>` to regenerate it.");
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Inspect { readme } => {
            let config = EqvisConfig::load(config_path)?;
            cmd_inspect(&config, readme.as_deref())?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
