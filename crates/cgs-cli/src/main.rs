//! The `cgs` binary entry point.

use std::process::ExitCode;

use cgs_cli::{Cli, execute, load_config, render};
use cgs_config::default_config_dir;
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli.overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log_dir = cli
        .overrides
        .config
        .clone()
        .or_else(default_config_dir)
        .map(|dir| dir.join("logs"));
    cgs_log::init_logging(
        log_dir.as_deref(),
        cfg!(debug_assertions) && config.debug.log_to_file,
        Some(&config),
    );

    match execute(&cli.command, &config).and_then(|outcome| render(&outcome, &config.output)) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
