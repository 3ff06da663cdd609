//! Shortest route search over a [`RoadIndex`].
//!
//! A Dijkstra search whose frontier is a binary heap ordered by
//! `(distance, road id, insertion sequence)`. Ties on distance are therefore
//! settled by road id rather than by destination name, and the sequence key
//! makes the pop order total even when one road yields two equal candidates.

use std::{
    cmp::{Ordering, Reverse},
    collections::{BinaryHeap, HashMap},
    sync::Arc,
};

use tracing::{Span, debug, field, info, instrument};

use crate::{
    error::{QueryEndpoint, RouteError},
    graph::RoadIndex,
    road::Road,
};

/// A shortest route between two locations.
///
/// # Examples
/// ```
/// use cartograph_core::{Road, RoadIndex, find_route};
///
/// let index = RoadIndex::build(vec![
///     Road::new("A", "B", 10, 1),
///     Road::new("B", "C", 10, 2),
///     Road::new("A", "C", 5, 3),
/// ])?;
/// let route = find_route(&index, "A", "C")?.expect("C is reachable from A");
/// assert_eq!(route.distance(), 5);
/// assert_eq!(route.roads().len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    start: Arc<str>,
    end: Arc<str>,
    roads: Vec<Road>,
    distance: u64,
}

impl Route {
    /// Returns the departure location.
    #[must_use]
    #[rustfmt::skip]
    pub fn start(&self) -> &str { &self.start }

    /// Returns the destination location.
    #[must_use]
    #[rustfmt::skip]
    pub fn end(&self) -> &str { &self.end }

    /// Returns the roads travelled, ordered from start to end.
    #[must_use]
    #[rustfmt::skip]
    pub fn roads(&self) -> &[Road] { &self.roads }

    /// Returns the summed length of the route.
    #[must_use]
    #[rustfmt::skip]
    pub fn distance(&self) -> u64 { self.distance }

    /// Returns `true` when the route uses no roads (start equals end).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }
}

/// Provisional arrival at `destination` pending finalisation.
#[derive(Clone, Debug)]
struct RouteCandidate<'a> {
    distance: u64,
    road: &'a Road,
    sequence: u64,
    arrived_from: Arc<str>,
    destination: Arc<str>,
}

impl RouteCandidate<'_> {
    fn key(&self) -> (u64, i64, u64) {
        (self.distance, self.road.id(), self.sequence)
    }
}

impl PartialEq for RouteCandidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for RouteCandidate<'_> {}

impl Ord for RouteCandidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for RouteCandidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// How a finalised location was first reached.
#[derive(Clone, Debug)]
struct Arrival<'a> {
    distance: u64,
    via: Option<(&'a Road, Arc<str>)>,
}

struct RouteSearch<'a> {
    index: &'a RoadIndex,
    frontier: BinaryHeap<Reverse<RouteCandidate<'a>>>,
    finalized: HashMap<Arc<str>, Arrival<'a>>,
    best: HashMap<Arc<str>, u64>,
    sequence: u64,
}

impl<'a> RouteSearch<'a> {
    fn new(index: &'a RoadIndex, start: &Arc<str>) -> Self {
        let mut search = Self {
            index,
            frontier: BinaryHeap::new(),
            finalized: HashMap::new(),
            best: HashMap::new(),
            sequence: 0,
        };
        search.finalized.insert(
            Arc::clone(start),
            Arrival {
                distance: 0,
                via: None,
            },
        );

        // Every road out of the start is a candidate, parallel roads included;
        // the best-known table simply records the latest seed per neighbour.
        for road in index.incident(start).into_iter().flatten() {
            let Some(neighbour) = road.shared_other_end(start) else {
                continue;
            };
            search
                .best
                .insert(Arc::clone(neighbour), road.length());
            search.push(road.length(), road, start, neighbour);
        }
        search
    }

    fn push(&mut self, distance: u64, road: &'a Road, from: &Arc<str>, to: &Arc<str>) {
        self.frontier.push(Reverse(RouteCandidate {
            distance,
            road,
            sequence: self.sequence,
            arrived_from: Arc::clone(from),
            destination: Arc::clone(to),
        }));
        self.sequence = self.sequence.saturating_add(1);
    }

    /// Pops candidates until `end` is finalised or the frontier runs dry.
    fn run(&mut self, end: &str) -> bool {
        while let Some(Reverse(candidate)) = self.frontier.pop() {
            if self.finalized.contains_key(&candidate.destination) {
                continue;
            }

            let RouteCandidate {
                distance,
                road,
                arrived_from,
                destination,
                ..
            } = candidate;
            self.finalized.insert(
                Arc::clone(&destination),
                Arrival {
                    distance,
                    via: Some((road, arrived_from)),
                },
            );

            if *destination == *end {
                return true;
            }
            self.relax(&destination, distance);
        }
        false
    }

    fn relax(&mut self, current: &Arc<str>, distance: u64) {
        let index = self.index;
        for road in index.incident(current).into_iter().flatten() {
            let Some(neighbour) = road.shared_other_end(current) else {
                continue;
            };
            if self.finalized.contains_key(neighbour) {
                continue;
            }

            let candidate = distance.saturating_add(road.length());
            let improves = self
                .best
                .get(neighbour)
                .is_none_or(|&known| candidate < known);
            if improves {
                self.best.insert(Arc::clone(neighbour), candidate);
                self.push(candidate, road, current, neighbour);
            }
        }
    }

    /// Walks predecessor links back from `end` and returns the roads in
    /// start → end order.
    fn reconstruct(&self, end: &str) -> Vec<Road> {
        let mut roads = Vec::new();
        let mut cursor = self.finalized.get(end);
        while let Some(Arrival {
            via: Some((road, from)),
            ..
        }) = cursor
        {
            roads.push((*road).clone());
            if roads.len() > self.finalized.len() {
                break;
            }
            cursor = self.finalized.get(from);
        }
        roads.reverse();
        roads
    }

    fn settled(&self) -> usize {
        self.finalized.len()
    }
}

fn resolve<'a>(
    index: &'a RoadIndex,
    vertex: &str,
    endpoint: QueryEndpoint,
) -> Result<&'a Arc<str>, RouteError> {
    index
        .shared_vertex(vertex)
        .ok_or_else(|| RouteError::UnknownVertex {
            vertex: Arc::from(vertex),
            endpoint,
        })
}

/// Finds the shortest route from `start` to `end`.
///
/// Returns `Ok(None)` when `end` cannot be reached from `start`. A query
/// whose start equals its end yields an empty route of distance zero.
///
/// # Errors
/// Returns [`RouteError::UnknownVertex`] when either location is absent from
/// `index`.
#[instrument(
    name = "route.find",
    err,
    skip(index),
    fields(settled = field::Empty),
)]
pub fn find_route(index: &RoadIndex, start: &str, end: &str) -> Result<Option<Route>, RouteError> {
    let start = resolve(index, start, QueryEndpoint::Start)?;
    let end = resolve(index, end, QueryEndpoint::End)?;

    let mut search = RouteSearch::new(index, start);
    let reached = start == end || search.run(end);
    Span::current().record("settled", search.settled());

    if !reached {
        debug!("destination unreachable");
        return Ok(None);
    }

    let roads = search.reconstruct(end);
    let distance = search
        .finalized
        .get(&**end)
        .map_or(0, |arrival| arrival.distance);
    info!(hops = roads.len(), distance, "route found");
    Ok(Some(Route {
        start: Arc::clone(start),
        end: Arc::clone(end),
        roads,
        distance,
    }))
}
