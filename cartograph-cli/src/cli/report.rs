//! Plain-text rendering of a [`NetworkReport`].

use std::fmt;
use std::io::{self, Write};

use cartograph_core::{AnalysisError, NetworkReport, Ratio, Route, RouteQuery};

const FOREST_HEADING: &str = "Roads of Barely Connected Map is:";
const MATERIAL_LABEL: &str =
    "Ratio of Construction Material Usage Between Barely Connected and Original Map";
const ROUTE_LABEL: &str = "Ratio of Fastest Route Between Barely Connected and Original Map";

#[derive(Clone, Copy)]
enum MapKind {
    Original,
    BarelyConnected,
}

impl MapKind {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Original => "",
            Self::BarelyConnected => " on Barely Connected Map",
        }
    }
}

struct RatioCell(Result<Ratio, AnalysisError>);

impl fmt::Display for RatioCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Ok(ratio) => write!(f, "{ratio:.2}"),
            Err(reason) => write!(f, "undefined ({reason})"),
        }
    }
}

/// Writes `report` to `writer`.
///
/// Sections appear in order: the fastest route on the original map, the
/// roads of the barely connected map, the fastest route on that map, and
/// the analysis. Roads are printed tab-separated. The final line carries no
/// trailing newline.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use cartograph_cli::cli::render_report;
/// # use cartograph_core::{Road, RouteQuery, plan_network};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let report = plan_network(
///     &RouteQuery::new("A", "B"),
///     vec![Road::new("A", "B", 4, 1)],
/// )?;
/// let mut buffer = Vec::new();
/// render_report(&report, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.starts_with("Fastest Route from A to B (4 KM):\nA\tB\t4\t1\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_report(report: &NetworkReport, mut writer: impl Write) -> io::Result<()> {
    let query = report.query();
    write_route(&mut writer, query, report.original_route(), MapKind::Original)?;

    writeln!(writer, "{FOREST_HEADING}")?;
    for road in report.forest().roads() {
        writeln!(writer, "{road}")?;
    }

    write_route(
        &mut writer,
        query,
        report.forest_route(),
        MapKind::BarelyConnected,
    )?;

    let analysis = report.analysis();
    writeln!(writer, "Analysis:")?;
    writeln!(
        writer,
        "{MATERIAL_LABEL}: {}",
        RatioCell(analysis.material_ratio())
    )?;
    write!(writer, "{ROUTE_LABEL}: {}", RatioCell(analysis.route_ratio()))
}

fn write_route(
    writer: &mut impl Write,
    query: &RouteQuery,
    route: Option<&Route>,
    kind: MapKind,
) -> io::Result<()> {
    let (start, end, suffix) = (query.start(), query.end(), kind.suffix());
    let Some(route) = route else {
        return writeln!(writer, "No route from {start} to {end}{suffix}.");
    };
    writeln!(
        writer,
        "Fastest Route from {start} to {end}{suffix} ({} KM):",
        route.distance()
    )?;
    for road in route.roads() {
        writeln!(writer, "{road}")?;
    }
    Ok(())
}
