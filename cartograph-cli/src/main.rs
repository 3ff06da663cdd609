//! CLI entry point for the cartograph road planner.
//!
//! Reads a tab-separated road listing, plans the network and writes the
//! report to the requested output file. Logging goes to stderr and is
//! initialised before anything else runs.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use cartograph_cli::{
    cli::{Cli, CliError, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    run_cli(cli).context("failed to plan road network")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let (code, detail_code) = err
            .downcast_ref::<CliError>()
            .and_then(|cli_error| match cli_error {
                CliError::Core(core) => Some((Some(core.code()), Some(core.detail_code()))),
                _ => None,
            })
            .unwrap_or((None, None));

        let message = format!("{err:#}");
        error!(
            error = message.as_str(),
            code = code.map(|code| field::display(code.as_str())),
            detail_code = detail_code.map(field::display),
            "planning failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
