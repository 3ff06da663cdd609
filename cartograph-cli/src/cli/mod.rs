//! Command-line interface for the cartograph road planner.
//!
//! Takes an input road listing and an output path, plans the network and
//! writes the report.

mod commands;
mod report;

pub use commands::{Cli, CliError, run_cli};
pub use report::render_report;
