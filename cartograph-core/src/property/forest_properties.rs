//! Spanning forest properties.
//!
//! - **Edge count**: `V - C` roads for `V` locations in `C` components.
//! - **Acyclicity**: replaying the forest never joins an already joined pair.
//! - **Minimality**: total length matches an independent Prim oracle.
//! - **Determinism**: input order does not affect the output.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{ComponentTracker, Road, build_spanning_forest};

use super::oracle::DenseMap;
use super::types::RoadFixture;

/// Checks edge count, acyclicity, component count and minimality.
pub(super) fn run_forest_structure_property(fixture: &RoadFixture) -> TestCaseResult {
    let forest = build_spanning_forest(&fixture.roads);
    let dense = DenseMap::from_roads(&fixture.roads);

    if forest.vertex_count() != dense.names().len() {
        return Err(TestCaseError::fail(format!(
            "vertex count mismatch: forest={}, oracle={} (roads={})",
            forest.vertex_count(),
            dense.names().len(),
            fixture.roads.len(),
        )));
    }

    let components = dense.component_count();
    if forest.component_count() != components {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: forest={}, oracle={components}",
            forest.component_count(),
        )));
    }

    if forest.roads().len() != dense.names().len() - components {
        return Err(TestCaseError::fail(format!(
            "forest has {} roads for {} locations in {components} components",
            forest.roads().len(),
            dense.names().len(),
        )));
    }

    let mut tracker = ComponentTracker::new();
    for road in forest.roads() {
        if !tracker.union(road.endpoint_a(), road.endpoint_b()) {
            return Err(TestCaseError::fail(format!("road {} closes a cycle", road.id())));
        }
        if !fixture.roads.contains(road) {
            return Err(TestCaseError::fail(format!("road {} was not in the input", road.id())));
        }
    }

    let expected = dense.spanning_weight();
    if forest.total_length() != expected {
        return Err(TestCaseError::fail(format!(
            "total length mismatch: forest={}, oracle={expected}",
            forest.total_length(),
        )));
    }

    Ok(())
}

/// Checks that acceptance order is non-decreasing in `(length, id)`.
pub(super) fn run_forest_order_property(fixture: &RoadFixture) -> TestCaseResult {
    let forest = build_spanning_forest(&fixture.roads);
    for pair in forest.roads().windows(2) {
        if let [earlier, later] = pair {
            if earlier.cmp_by_length(later).is_gt() {
                return Err(TestCaseError::fail(format!(
                    "road {} accepted before road {}",
                    earlier.id(),
                    later.id(),
                )));
            }
        }
    }
    Ok(())
}

/// Checks that rebuilding, or building from a permuted input, is identical.
pub(super) fn run_forest_determinism_property(
    fixture: &RoadFixture,
    shuffled: &[Road],
) -> TestCaseResult {
    let first = build_spanning_forest(&fixture.roads);
    let again = build_spanning_forest(&fixture.roads);
    let permuted = build_spanning_forest(shuffled);

    if first != again {
        return Err(TestCaseError::fail("rebuilding changed the forest"));
    }
    if first.roads() != permuted.roads() {
        return Err(TestCaseError::fail(format!(
            "input order changed the forest: {:?} vs {:?}",
            first.roads().iter().map(Road::id).collect::<Vec<_>>(),
            permuted.roads().iter().map(Road::id).collect::<Vec<_>>(),
        )));
    }
    Ok(())
}
