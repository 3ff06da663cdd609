//! Fixture types for road map property tests.

use crate::Road;

/// A generated road map.
///
/// Road ids are a permutation of `0..roads.len()`, so they are unique but
/// unrelated to input order.
#[derive(Clone, Debug)]
pub(super) struct RoadFixture {
    /// Number of location names the generator drew from. Not every name
    /// necessarily appears on a road.
    pub name_count: usize,
    /// Generated roads in input order.
    pub roads: Vec<Road>,
}

impl RoadFixture {
    /// Returns the location name used for index `slot`.
    pub(super) fn name(slot: usize) -> String {
        format!("v{slot}")
    }
}
