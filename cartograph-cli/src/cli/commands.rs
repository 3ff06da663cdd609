//! Argument parsing and command execution for the cartograph CLI.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use cartograph_core::{CartographError, NetworkReport, plan_network};
use cartograph_providers_tsv::{RoadListing, TsvProviderError};
use clap::Parser;
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

use super::report::render_report;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "cartograph",
    about = "Plan the fastest route and a barely connected map for a road network."
)]
pub struct Cli {
    /// Tab-separated road listing: a `start<TAB>end` query line followed by
    /// `endpoint<TAB>endpoint<TAB>length<TAB>id` roads.
    pub input: PathBuf,

    /// File the report is written to; replaced if it exists.
    pub output: PathBuf,
}

/// Errors surfaced while executing the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input listing could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The report could not be written.
    #[error("failed to write `{path}`: {source}")]
    Write {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The road listing is malformed.
    #[error(transparent)]
    Tsv(#[from] TsvProviderError),
    /// Planning failed.
    #[error(transparent)]
    Core(#[from] CartographError),
}

/// Reads `cli.input`, plans the network and writes the report to
/// `cli.output`.
///
/// The output file is only created once planning has succeeded.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or parsed, when a query
/// location is not on the map, or when the report cannot be written.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use cartograph_cli::cli::{Cli, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let input = dir.path().join("roads.tsv");
/// let output = dir.path().join("report.txt");
/// std::fs::write(&input, "A\tC\nA\tB\t10\t1\nB\tC\t10\t2\nA\tC\t5\t3\n")?;
/// let report = run_cli(Cli { input, output: output.clone() })?;
/// assert_eq!(report.forest().roads().len(), 2);
/// assert!(std::fs::read_to_string(output)?.starts_with("Fastest Route from A to C (5 KM):"));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(input = field::Empty, output = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<NetworkReport, CliError> {
    let Cli { input, output } = cli;
    let span = Span::current();
    span.record("input", field::display(input.display()));
    span.record("output", field::display(output.display()));

    let report = plan_from_path(&input)?;
    write_report(&report, &output)?;
    info!(
        forest_roads = report.forest().roads().len(),
        "report written"
    );
    Ok(report)
}

#[instrument(name = "cli.plan", err, fields(path = field::Empty))]
pub(super) fn plan_from_path(path: &Path) -> Result<NetworkReport, CliError> {
    Span::current().record("path", field::display(path.display()));
    let listing = RoadListing::try_from_reader(open_listing(path)?)?;
    if listing.skipped() > 0 {
        warn!(skipped = listing.skipped(), "ignored malformed road records");
    }
    let (query, roads) = listing.into_parts();
    Ok(plan_network(&query, roads)?)
}

pub(super) fn open_listing(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

#[instrument(name = "cli.write_report", err, skip(report))]
pub(super) fn write_report(report: &NetworkReport, path: &Path) -> Result<(), CliError> {
    let write_error = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    render_report(report, &mut writer).map_err(write_error)?;
    writer.flush().map_err(write_error)
}
