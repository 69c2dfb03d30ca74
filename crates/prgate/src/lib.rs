//! CLI module.

use anyhow::Result;
use args::{Args, CommandExecutor};
use clap::Parser;
use prgate_config::Config;
use prgate_logging::configure_logging;
use tracing::info;

pub(crate) mod args;
mod commands;
mod config_validator;
pub(crate) mod outputs;
#[cfg(test)]
mod testutils;

/// Get version data.
pub fn get_version_data() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Initialize command line.
pub fn initialize_command_line() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env(env!("CARGO_PKG_VERSION").to_string())?;
    configure_logging(&config)?;

    info!("{}", get_version_data());

    let args = Args::parse();
    config_validator::validate_configuration(&config, args.requirements())?;
    CommandExecutor::parse_args(config, args)
}

/// Report a fatal error as a workflow error annotation.
pub fn report_failure(err: &anyhow::Error) {
    let mut message = err.to_string();
    for cause in err.chain().skip(1) {
        message.push_str(&format!("\nbecause: {cause}"));
    }

    println!("::error::{}", outputs::escape_command_data(&message));
}
