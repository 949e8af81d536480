//! `safetynet` command-line entry point.

mod cli;
mod commands;
mod config;
mod logging;
mod render;

use std::process::ExitCode;

use clap::Parser;
use log::{info, warn};

use crate::cli::Cli;
use crate::config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli, chrono::Local::now().date_naive());

    let _logger = match logging::init_logging(&config.log_level, config.log_dir.as_deref()) {
        Ok(handle) => handle,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let name = cli.command.name();
    info!(
        "event=request module=cli status=start command={name} as_of={}",
        config.reference_date
    );

    let result = commands::run(&config, cli.command).and_then(|output| {
        if let Some(value) = output {
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Ok(())
    });

    match result {
        Ok(()) => {
            info!("event=response module=cli status=ok command={name}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let status = commands::status_of(&err);
            warn!("event=response module=cli status=error command={name} code={status}");
            eprintln!("Error: {err:#}");
            exit_code(status)
        }
    }
}

fn exit_code(status: u16) -> ExitCode {
    match status {
        404 => ExitCode::from(3),
        409 => ExitCode::from(4),
        400 => ExitCode::from(5),
        _ => ExitCode::FAILURE,
    }
}
