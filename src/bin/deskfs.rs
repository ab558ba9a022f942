//! deskfs CLI Binary
//!
//! Command-line interface for the desktop virtual filesystem.

use anyhow::Context;
use clap::Parser;
use deskfs::config::ConfigLoader;
use deskfs::logging::init_logging;
use deskfs::tooling::cli::{Cli, CliContext};
use std::process;

fn run(cli: Cli) -> anyhow::Result<String> {
    let config = ConfigLoader::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let logging = config.logging.clone().with_overrides(
        cli.log_level.clone(),
        cli.log_format.clone(),
        cli.log_output.clone(),
        cli.log_file.clone(),
    );
    init_logging(Some(&logging)).context("Failed to initialize logging")?;

    let mut context = CliContext::from_config(cli.seed.clone(), config)
        .context("Error initializing desktop filesystem")?;
    if cli.no_color {
        context.set_color(false);
    }

    Ok(context.execute(&cli.command)?)
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
