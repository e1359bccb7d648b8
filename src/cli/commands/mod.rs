//! CLI command implementations

mod estimate;
mod sweep;


use crate::cli::LogLevel;
use crate::config::{Cli, Command};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    // Configure output based on verbose/quiet flags
    let log_level = if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    };

    match cli.command {
        Command::Sweep(args) => sweep::run_sweep(args, log_level),
        Command::Estimate(args) => estimate::run_estimate(args, log_level),
    }
}
