//! styleguide - browse a catalog of bad/good code-style examples

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use styleguide::{
    catalog::Catalog,
    cli::{dispatch, Cli, CommandResult, LogLevel},
    config::{CatalogConfig, ConfigLoader},
};

/// Initialize tracing with CLI flags
///
/// Logs always go to stderr; stdout carries command output only.
fn initialize_tracing(log_level: &LogLevel, json: bool) {
    let filter = EnvFilter::try_from_env("STYLEGUIDE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn load_config(cli: &Cli) -> Result<CatalogConfig> {
    let mut config = ConfigLoader::new()?
        .with_config_file(cli.config.clone())
        .load()?;

    if !cli.sources.is_empty() {
        debug!("Using --source overrides: {:?}", cli.sources);
        config.sources = cli.sources.clone();
    }

    Ok(config)
}

fn run(cli: &Cli) -> Result<CommandResult> {
    debug!("Running '{}' command", cli.command.name());
    let config = load_config(cli).context("Failed to load configuration")?;
    let catalog = Catalog::load(&config);

    let mut stdout = io::stdout().lock();
    let result = dispatch(&cli.command, cli.format, &catalog, &mut stdout);
    stdout.flush().context("Failed to write output")?;
    Ok(result)
}

fn main() {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level, cli.log_json);

    let result = match run(&cli) {
        Ok(result) => result,
        Err(e) => CommandResult::LoadFailed(format!("{e:#}")),
    };

    if result.exit_code() != 0 {
        if let Some(message) = result.message() {
            eprintln!("Error: {message}");
        }
    }

    std::process::exit(result.exit_code());
}
