//! Incidence index over a road list.
//!
//! [`RoadIndex`] maps every location to the roads touching it, preserving the
//! order in which roads were supplied. Both route searches and the pipeline
//! read the graph exclusively through this index.

use std::{collections::HashMap, sync::Arc};

use crate::{error::GraphError, road::Road};

/// Location → incident roads, in input order.
///
/// Every road is listed under both of its endpoints; a self-loop is listed
/// twice under its single endpoint.
///
/// # Examples
/// ```
/// use cartograph_core::{Road, RoadIndex};
///
/// let index = RoadIndex::build(vec![
///     Road::new("A", "B", 10, 1),
///     Road::new("B", "C", 10, 2),
/// ])?;
/// assert_eq!(index.vertex_count(), 3);
/// let ids: Vec<i64> = index.incident("B").into_iter().flatten().map(|r| r.id()).collect();
/// assert_eq!(ids, vec![1, 2]);
/// # Ok::<(), cartograph_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct RoadIndex {
    roads: Vec<Road>,
    incidence: HashMap<Arc<str>, Vec<usize>>,
    vertices: Vec<Arc<str>>,
}

impl RoadIndex {
    /// Indexes `roads` by endpoint.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyEndpoint`] when a road names an empty
    /// location.
    pub fn build(roads: impl IntoIterator<Item = Road>) -> Result<Self, GraphError> {
        let mut index = Self::default();
        for road in roads {
            index.insert(road)?;
        }
        Ok(index)
    }

    /// Registers `vertex` without attaching any road to it.
    ///
    /// Registering a known vertex is a no-op.
    #[must_use]
    pub fn with_vertex(mut self, vertex: impl Into<Arc<str>>) -> Self {
        self.slots_mut(vertex.into());
        self
    }

    fn insert(&mut self, road: Road) -> Result<(), GraphError> {
        let (endpoint_a, endpoint_b) = road.shared_endpoints();
        if endpoint_a.is_empty() || endpoint_b.is_empty() {
            return Err(GraphError::EmptyEndpoint { id: road.id() });
        }
        let (endpoint_a, endpoint_b) = (Arc::clone(endpoint_a), Arc::clone(endpoint_b));

        let slot = self.roads.len();
        self.roads.push(road);
        self.slots_mut(endpoint_a).push(slot);
        self.slots_mut(endpoint_b).push(slot);
        Ok(())
    }

    fn slots_mut(&mut self, vertex: Arc<str>) -> &mut Vec<usize> {
        let vertices = &mut self.vertices;
        self.incidence.entry(vertex).or_insert_with_key(|key| {
            vertices.push(Arc::clone(key));
            Vec::new()
        })
    }

    /// Returns the roads touching `vertex` in input order, or `None` when the
    /// vertex is unknown. Isolated vertices yield an empty iterator.
    #[must_use]
    pub fn incident(&self, vertex: &str) -> Option<impl Iterator<Item = &Road> + '_> {
        let roads = &self.roads;
        self.incidence
            .get(vertex)
            .map(move |slots| slots.iter().filter_map(move |&slot| roads.get(slot)))
    }

    pub(crate) fn shared_vertex(&self, vertex: &str) -> Option<&Arc<str>> {
        self.incidence.get_key_value(vertex).map(|(key, _)| key)
    }

    /// Returns `true` when `vertex` is part of the index.
    #[must_use]
    pub fn contains(&self, vertex: &str) -> bool {
        self.incidence.contains_key(vertex)
    }

    /// Returns the indexed roads in input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn roads(&self) -> &[Road] { &self.roads }

    /// Returns every known location in first-seen order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices.iter().map(|vertex| &**vertex)
    }

    /// Returns the number of distinct locations.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of indexed roads.
    #[must_use]
    pub fn road_count(&self) -> usize {
        self.roads.len()
    }
}
