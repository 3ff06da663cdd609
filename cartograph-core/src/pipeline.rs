//! End-to-end planning over one road listing.
//!
//! Indexes the original map, routes on it, reduces it to a barely connected
//! map, routes again on the reduced map and compares the two.

use tracing::{info, instrument, warn};

use crate::{
    Result,
    analysis::MapAnalysis,
    forest::{SpanningForest, build_spanning_forest},
    graph::RoadIndex,
    road::{Road, RouteQuery, total_length},
    route::{Route, find_route},
};

/// Everything computed for one route query over one road map.
#[derive(Clone, Debug)]
pub struct NetworkReport {
    query: RouteQuery,
    original_map: RoadIndex,
    original_route: Option<Route>,
    forest: SpanningForest,
    forest_route: Option<Route>,
    analysis: MapAnalysis,
}

impl NetworkReport {
    /// Returns the route query the report answers.
    #[must_use]
    #[rustfmt::skip]
    pub fn query(&self) -> &RouteQuery { &self.query }

    /// Returns the index over the original road map.
    #[must_use]
    #[rustfmt::skip]
    pub fn original_map(&self) -> &RoadIndex { &self.original_map }

    /// Returns the fastest route on the original map, if one exists.
    #[must_use]
    #[rustfmt::skip]
    pub fn original_route(&self) -> Option<&Route> { self.original_route.as_ref() }

    /// Returns the barely connected map.
    #[must_use]
    #[rustfmt::skip]
    pub fn forest(&self) -> &SpanningForest { &self.forest }

    /// Returns the fastest route on the barely connected map, if one exists.
    #[must_use]
    #[rustfmt::skip]
    pub fn forest_route(&self) -> Option<&Route> { self.forest_route.as_ref() }

    /// Returns the comparison between the two maps.
    #[must_use]
    #[rustfmt::skip]
    pub fn analysis(&self) -> &MapAnalysis { &self.analysis }
}

/// Runs the full planning pipeline for `query` over `roads`.
///
/// # Errors
/// Returns [`crate::CartographError::Graph`] when a road cannot be indexed
/// and [`crate::CartographError::Route`] when a query location does not
/// appear on the map.
///
/// # Examples
/// ```
/// use cartograph_core::{Road, RouteQuery, plan_network};
///
/// let report = plan_network(
///     &RouteQuery::new("A", "C"),
///     vec![
///         Road::new("A", "B", 10, 1),
///         Road::new("B", "C", 10, 2),
///         Road::new("A", "C", 5, 3),
///     ],
/// )?;
/// assert_eq!(report.original_route().map(|route| route.distance()), Some(5));
/// assert_eq!(report.forest().roads().len(), 2);
/// assert_eq!(format!("{:.2}", report.analysis().material_ratio()?), "0.60");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "pipeline.run",
    err,
    skip(query, roads),
    fields(start = query.start(), end = query.end(), roads = roads.len()),
)]
pub fn plan_network(query: &RouteQuery, roads: Vec<Road>) -> Result<NetworkReport> {
    let original_map = RoadIndex::build(roads)?;
    let original_route = find_route(&original_map, query.start(), query.end())?;
    if original_route.is_none() {
        warn!("no route on the original map");
    }

    let forest = build_spanning_forest(original_map.roads());
    // Vertices dropped with their self-loops stay resolvable on the reduced map.
    let forest_map = original_map.vertices().fold(
        RoadIndex::build(forest.roads().iter().cloned())?,
        RoadIndex::with_vertex,
    );
    let forest_route = find_route(&forest_map, query.start(), query.end())?;

    let analysis = MapAnalysis::new(
        total_length(original_map.roads()),
        forest.total_length(),
        original_route.as_ref().map(Route::distance),
        forest_route.as_ref().map(Route::distance),
    );
    info!(
        original_length = analysis.original_length(),
        forest_length = analysis.forest_length(),
        "network planned"
    );

    Ok(NetworkReport {
        query: query.clone(),
        original_map,
        original_route,
        forest,
        forest_route,
        analysis,
    })
}
