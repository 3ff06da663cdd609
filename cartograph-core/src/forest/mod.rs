//! Minimum spanning forest ("barely connected map") construction.
//!
//! Roads are stably sorted by `(length, id)` and accepted greedily whenever
//! they join two previously separate components, i.e. Kruskal's algorithm
//! generalised to disconnected road maps. The id tie-break keeps the output
//! reproducible when several roads share a length.

use tracing::{debug, info, instrument, trace};

use crate::{
    components::ComponentTracker,
    road::{Road, total_length},
};

/// The roads kept by the spanning forest builder.
///
/// When the road map is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningForest {
    roads: Vec<Road>,
    vertex_count: usize,
    component_count: usize,
}

impl SpanningForest {
    /// Returns the accepted roads in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn roads(&self) -> &[Road] { &self.roads }

    /// Consumes the forest and returns its roads in acceptance order.
    #[must_use]
    pub fn into_roads(self) -> Vec<Road> {
        self.roads
    }

    /// Returns the number of locations spanned.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of connected components of the input road map.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the summed length of the accepted roads.
    #[must_use]
    pub fn total_length(&self) -> u64 {
        total_length(&self.roads)
    }
}

/// Builds the minimum spanning forest of `roads`.
///
/// Roads are considered in ascending `(length, id)` order. A road is accepted
/// when its endpoints are not yet connected and rejected otherwise, so
/// self-loops and parallel duplicates are always rejected. The returned
/// roads keep that acceptance order.
///
/// # Examples
/// ```
/// use cartograph_core::{Road, build_spanning_forest};
///
/// let forest = build_spanning_forest(&[
///     Road::new("A", "B", 10, 1),
///     Road::new("B", "C", 10, 2),
///     Road::new("A", "C", 5, 3),
/// ]);
/// let ids: Vec<i64> = forest.roads().iter().map(Road::id).collect();
/// assert_eq!(ids, vec![3, 1]);
/// assert_eq!(forest.total_length(), 15);
/// assert!(forest.is_tree());
/// ```
#[instrument(name = "forest.build", skip(roads), fields(roads = roads.len()))]
pub fn build_spanning_forest(roads: &[Road]) -> SpanningForest {
    let mut ordered: Vec<&Road> = roads.iter().collect();
    ordered.sort_by(|left, right| left.cmp_by_length(right));

    let mut tracker = ComponentTracker::new();
    for road in roads {
        let (endpoint_a, endpoint_b) = road.shared_endpoints();
        tracker.slot_shared(endpoint_a);
        tracker.slot_shared(endpoint_b);
    }
    let vertex_count = tracker.vertex_count();

    let mut accepted = Vec::with_capacity(vertex_count.saturating_sub(1));
    for road in ordered {
        let (endpoint_a, endpoint_b) = road.shared_endpoints();
        let left = tracker.slot_shared(endpoint_a);
        let right = tracker.slot_shared(endpoint_b);
        if tracker.union_slots(left, right) {
            trace!(road = road.id(), length = road.length(), "road accepted");
            accepted.push(road.clone());
        } else {
            trace!(
                road = road.id(),
                self_loop = road.is_self_loop(),
                "road closes a cycle; rejected"
            );
        }
    }

    let forest = SpanningForest {
        roads: accepted,
        vertex_count,
        component_count: tracker.group_count(),
    };
    debug!(
        rejected = roads.len().saturating_sub(forest.roads.len()),
        "spanning forest selection finished"
    );
    info!(
        accepted = forest.roads.len(),
        components = forest.component_count,
        total_length = forest.total_length(),
        "spanning forest built"
    );
    forest
}
