//! Road records and route queries.
//!
//! A [`Road`] is an undirected, weighted connection between two named
//! locations. Locations have no identity beyond their names; they emerge from
//! the endpoints of the roads that mention them.

use std::{cmp::Ordering, fmt, sync::Arc};

/// A bidirectional road between two named locations.
///
/// Endpoint order carries no meaning for the algorithms but is preserved so
/// output reproduces the input verbatim.
///
/// # Examples
/// ```
/// use cartograph_core::Road;
///
/// let road = Road::new("Ankara", "Konya", 260, 7);
/// assert_eq!(road.to_string(), "Ankara\tKonya\t260\t7");
/// assert_eq!(road.other_end("Konya"), Some("Ankara"));
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Road {
    endpoint_a: Arc<str>,
    endpoint_b: Arc<str>,
    length: u64,
    id: i64,
}

impl Road {
    /// Creates a road between `endpoint_a` and `endpoint_b`.
    #[must_use]
    pub fn new(
        endpoint_a: impl Into<Arc<str>>,
        endpoint_b: impl Into<Arc<str>>,
        length: u64,
        id: i64,
    ) -> Self {
        Self {
            endpoint_a: endpoint_a.into(),
            endpoint_b: endpoint_b.into(),
            length,
            id,
        }
    }

    /// Returns the first endpoint as written in the input.
    #[must_use]
    #[rustfmt::skip]
    pub fn endpoint_a(&self) -> &str { &self.endpoint_a }

    /// Returns the second endpoint as written in the input.
    #[must_use]
    #[rustfmt::skip]
    pub fn endpoint_b(&self) -> &str { &self.endpoint_b }

    /// Returns the road length.
    #[must_use]
    #[rustfmt::skip]
    pub fn length(&self) -> u64 { self.length }

    /// Returns the unique road identifier used for deterministic tie-breaks.
    #[must_use]
    #[rustfmt::skip]
    pub fn id(&self) -> i64 { self.id }

    pub(crate) fn shared_endpoints(&self) -> (&Arc<str>, &Arc<str>) {
        (&self.endpoint_a, &self.endpoint_b)
    }

    /// Returns `true` when both endpoints name the same location.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.endpoint_a == self.endpoint_b
    }

    /// Returns the endpoint opposite `location`, or `None` when the road does
    /// not touch `location`.
    #[must_use]
    pub fn other_end(&self, location: &str) -> Option<&str> {
        self.shared_other_end(location).map(|end| &**end)
    }

    pub(crate) fn shared_other_end(&self, location: &str) -> Option<&Arc<str>> {
        if *self.endpoint_a == *location {
            Some(&self.endpoint_b)
        } else if *self.endpoint_b == *location {
            Some(&self.endpoint_a)
        } else {
            None
        }
    }

    /// Orders roads by `(length, id)`, the key used to build spanning forests.
    #[must_use]
    pub fn cmp_by_length(&self, other: &Self) -> Ordering {
        self.length
            .cmp(&other.length)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.endpoint_a, self.endpoint_b, self.length, self.id
        )
    }
}

/// Sums road lengths, saturating at `u64::MAX`.
#[must_use]
pub fn total_length<'a>(roads: impl IntoIterator<Item = &'a Road>) -> u64 {
    roads
        .into_iter()
        .fold(0_u64, |acc, road| acc.saturating_add(road.length()))
}

/// The pair of locations a route is requested between.
///
/// # Examples
/// ```
/// use cartograph_core::RouteQuery;
///
/// let query = RouteQuery::new("A", "C");
/// assert_eq!(query.start(), "A");
/// assert_eq!(query.end(), "C");
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RouteQuery {
    start: Arc<str>,
    end: Arc<str>,
}

impl RouteQuery {
    /// Creates a query from `start` to `end`.
    #[must_use]
    pub fn new(start: impl Into<Arc<str>>, end: impl Into<Arc<str>>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Returns the departure location.
    #[must_use]
    #[rustfmt::skip]
    pub fn start(&self) -> &str { &self.start }

    /// Returns the destination location.
    #[must_use]
    #[rustfmt::skip]
    pub fn end(&self) -> &str { &self.end }
}
