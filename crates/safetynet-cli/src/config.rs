//! Runtime configuration resolved from arguments and environment.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::cli::Cli;
use crate::logging::default_log_level;

/// Settings for one CLI invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Dataset file to load (and save with `write_back`)
    pub data_path: PathBuf,
    /// Date ages are computed against
    pub reference_date: NaiveDate,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
    /// Save the dataset after a successful mutation
    pub write_back: bool,
}

impl Config {
    /// Resolve the configuration; `today` fills in a missing `--as-of`.
    pub fn from_cli(cli: &Cli, today: NaiveDate) -> Self {
        Self {
            data_path: cli.data.clone(),
            reference_date: cli.as_of.unwrap_or(today),
            log_level: cli
                .log_level
                .clone()
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir: cli.log_dir.clone(),
            write_back: cli.write,
        }
    }
}
