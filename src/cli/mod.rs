//! Command-line surface for the `skm` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub mod commands;
pub mod output;

pub use commands::Commands;

#[derive(Parser, Debug)]
#[command(name = "skm")]
#[command(author, version, about = "Skill taxonomy and people search over an employee snapshot")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to an explicit config file (skips global/project discovery)
    #[arg(long, global = true, env = "SKM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Employee snapshot (JSON with `employees` and `endorsements`)
    #[arg(long, global = true, env = "SKM_DATA")]
    pub data: Option<PathBuf>,

    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub robot: bool,

    /// Output format (overrides config)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all logging
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Format requested on the command line, if any. `--robot` wins.
    #[must_use]
    pub const fn requested_format(&self) -> Option<OutputFormat> {
        if self.robot {
            Some(OutputFormat::Json)
        } else {
            self.format
        }
    }

    /// Whether errors and logs should be JSON before any config file is read.
    #[must_use]
    pub fn robot_requested(&self) -> bool {
        self.requested_format()
            .or_else(crate::config::env_output_format)
            .is_some_and(OutputFormat::is_robot)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    /// Parse the config-file spelling; anything unknown is human output.
    #[must_use]
    pub fn from_config(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Human
        }
    }

    #[must_use]
    pub const fn is_robot(self) -> bool {
        matches!(self, Self::Json)
    }
}
