//! Command implementations for the Olympedia processor CLI
//!
//! This module contains the command execution logic and dispatch. Each
//! command is implemented in its own module:
//! - `process`: full pipeline run with warehouse export
//! - `validate`: integrity checks over an exported warehouse

pub mod process;
pub mod shared;
pub mod validate;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Main command runner, dispatching to the subcommand handlers
pub async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Process(process_args)) => process::run_process(process_args).await,
        Some(Commands::Validate(validate_args)) => validate::run_validate(validate_args).await,
        None => Err(Error::configuration(
            "No command specified; run with --help for usage".to_string(),
        )),
    }
}
