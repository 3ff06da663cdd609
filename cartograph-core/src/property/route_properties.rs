//! Route search properties.
//!
//! - **Optimality**: every route distance matches Floyd–Warshall.
//! - **Well-formedness**: roads chain from start to end and sum to the
//!   reported distance.
//! - **Reduced map**: the barely connected map keeps exactly the same pairs
//!   reachable, never with a shorter route.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Road, RoadIndex, Route, build_spanning_forest, find_route, total_length};

use super::oracle::DenseMap;
use super::types::RoadFixture;

fn index_of(roads: &[Road]) -> Result<RoadIndex, TestCaseError> {
    RoadIndex::build(roads.iter().cloned())
        .map_err(|err| TestCaseError::fail(format!("indexing failed: {err}")))
}

fn search(index: &RoadIndex, start: &str, end: &str) -> Result<Option<Route>, TestCaseError> {
    find_route(index, start, end)
        .map_err(|err| TestCaseError::fail(format!("route {start} -> {end} failed: {err}")))
}

fn check_chain(route: &Route) -> TestCaseResult {
    let mut at = route.start();
    for road in route.roads() {
        at = road.other_end(at).ok_or_else(|| {
            TestCaseError::fail(format!("road {} does not touch {at}", road.id()))
        })?;
    }
    if at != route.end() {
        return Err(TestCaseError::fail(format!(
            "route ends at {at}, expected {}",
            route.end()
        )));
    }
    if total_length(route.roads()) != route.distance() {
        return Err(TestCaseError::fail("route roads do not sum to its distance"));
    }
    Ok(())
}

/// Checks every ordered pair of locations against the oracle.
pub(super) fn run_route_optimality_property(fixture: &RoadFixture) -> TestCaseResult {
    let index = index_of(&fixture.roads)?;
    let dense = DenseMap::from_roads(&fixture.roads);
    let distances = dense.all_pairs_distances();

    for (from, start) in dense.names().iter().enumerate() {
        for (to, end) in dense.names().iter().enumerate() {
            let expected = distances[from][to];
            let route = search(&index, start, end)?;
            match (&route, expected) {
                (None, None) => {}
                (Some(route), Some(distance)) if route.distance() == distance => {
                    check_chain(route)?;
                }
                _ => {
                    return Err(TestCaseError::fail(format!(
                        "{start} -> {end}: got {:?}, oracle {expected:?}",
                        route.as_ref().map(Route::distance),
                    )));
                }
            }
        }
    }
    Ok(())
}

/// Checks that routing on the barely connected map preserves reachability.
pub(super) fn run_reduced_map_property(fixture: &RoadFixture) -> TestCaseResult {
    let original = index_of(&fixture.roads)?;
    let forest = build_spanning_forest(&fixture.roads);
    let reduced = original
        .vertices()
        .fold(index_of(forest.roads())?, RoadIndex::with_vertex);

    for slot in 0..fixture.name_count {
        let start = RoadFixture::name(slot);
        if !original.contains(&start) {
            continue;
        }
        for end in original.vertices() {
            let full = search(&original, &start, end)?;
            let thin = search(&reduced, &start, end)?;
            match (full, thin) {
                (None, None) => {}
                (Some(full), Some(thin)) if thin.distance() >= full.distance() => {
                    check_chain(&thin)?;
                }
                (full, thin) => {
                    return Err(TestCaseError::fail(format!(
                        "{start} -> {end}: original {:?}, reduced {:?}",
                        full.map(|route| route.distance()),
                        thin.map(|route| route.distance()),
                    )));
                }
            }
        }
    }
    Ok(())
}

/// Checks that repeated searches return identical routes.
pub(super) fn run_route_determinism_property(fixture: &RoadFixture) -> TestCaseResult {
    let index = index_of(&fixture.roads)?;
    let names: Vec<&str> = index.vertices().collect();
    for start in &names {
        for end in &names {
            if search(&index, start, end)? != search(&index, start, end)? {
                return Err(TestCaseError::fail(format!(
                    "{start} -> {end} differs between runs"
                )));
            }
        }
    }
    Ok(())
}
