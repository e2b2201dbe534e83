//! ufs CLI Binary
//!
//! Command-line interface for path inspection, content hashing and directory creation.

use clap::Parser;
use std::process;
use tracing::{debug, error};
use ultra_file_search::cli::{map_error, Cli, RunContext};
use ultra_file_search::logging::{init_logging, LoggingConfig};

fn main() {
    let cli = Cli::parse();

    // Configuration comes first: it carries the logging settings
    let context = match RunContext::new(cli.config.as_deref()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, &context.config().logging);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    debug!(command = ?cli.command, "ufs starting");

    match context.execute(&cli.command, &cli.format) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Fold CLI flags over the configured logging settings.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, base: &LoggingConfig) -> LoggingConfig {
    let mut config = base.clone();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
