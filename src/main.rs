//! skm - skill taxonomy and people search
//!
//! Reads an employee snapshot and prints the skill tree, ranked search
//! results or a replayed dropdown session.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use skillmap::Result;
use skillmap::app::AppContext;
use skillmap::cli::output::{emit_robot, robot_error};
use skillmap::cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut robot = cli.robot_requested();
    init_tracing(&cli, robot);

    match run(&cli, &mut robot) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if robot {
                // Robot mode: JSON error envelope on stdout
                if emit_robot(&robot_error(e.code(), e.to_string())).is_err() {
                    eprintln!("Error: {e}");
                }
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, robot: &mut bool) -> Result<()> {
    if let Commands::Completions(args) = &cli.command {
        return skillmap::cli::commands::completions::run(args);
    }
    let ctx = AppContext::from_cli(cli)?;
    // The config file may have switched the output format.
    *robot = ctx.robot();
    skillmap::cli::commands::run(&ctx, &cli.command)
}

fn init_tracing(cli: &Cli, robot: bool) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,skillmap=info",
        1 => "info,skillmap=debug",
        _ => "debug,skillmap=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if robot {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
