//! Seeded synthetic road networks.
//!
//! A network is a random spanning tree over `location_count` locations
//! (so every query has an answer) plus `extra_roads` random roads that
//! create cycles, parallel roads and the occasional self-loop. Road ids are
//! a shuffled permutation so input order and id order disagree.

use cartograph_core::{Road, RouteQuery};
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

/// Errors that may occur during synthetic network generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested location count was zero.
    #[error("location count must be greater than zero")]
    ZeroLocations,
    /// The requested maximum road length was zero.
    #[error("maximum road length must be greater than zero")]
    ZeroMaxLength,
    /// More roads were requested than road ids can number.
    #[error("{requested} roads exceed the road id range")]
    TooManyRoads {
        /// Number of roads requested.
        requested: usize,
    },
}

/// Configuration for synthetic network generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of locations.
    pub location_count: usize,
    /// Roads added on top of the spanning tree.
    pub extra_roads: usize,
    /// Road lengths are drawn uniformly from `1..=max_length`.
    pub max_length: u64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A generated road map and the query spanning it end to end.
///
/// # Examples
///
/// ```
/// use cartograph_benches::network::{SyntheticConfig, SyntheticNetwork};
///
/// let config = SyntheticConfig { location_count: 10, extra_roads: 5, max_length: 9, seed: 42 };
/// let network = SyntheticNetwork::generate(&config).expect("valid config");
/// assert_eq!(network.roads().len(), 14);
/// assert_eq!(network.query().end(), "loc9");
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticNetwork {
    query: RouteQuery,
    roads: Vec<Road>,
}

impl SyntheticNetwork {
    /// Generates a network from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::ZeroLocations`] if `location_count` is zero,
    /// [`SyntheticError::ZeroMaxLength`] if `max_length` is zero, or
    /// [`SyntheticError::TooManyRoads`] if the road count overflows `i64`.
    pub fn generate(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        if config.location_count == 0 {
            return Err(SyntheticError::ZeroLocations);
        }
        if config.max_length == 0 {
            return Err(SyntheticError::ZeroMaxLength);
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let total = (config.location_count - 1).saturating_add(config.extra_roads);
        let mut links = Vec::with_capacity(total);
        for child in 1..config.location_count {
            links.push((rng.gen_range(0..child), child));
        }
        for _ in 0..config.extra_roads {
            links.push((
                rng.gen_range(0..config.location_count),
                rng.gen_range(0..config.location_count),
            ));
        }

        let mut ids = (0..links.len())
            .map(i64::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| SyntheticError::TooManyRoads { requested: total })?;
        ids.shuffle(&mut rng);

        let roads = links
            .into_iter()
            .zip(ids)
            .map(|((a, b), id)| {
                Road::new(
                    location(a),
                    location(b),
                    rng.gen_range(1..=config.max_length),
                    id,
                )
            })
            .collect();

        Ok(Self {
            query: RouteQuery::new(location(0), location(config.location_count - 1)),
            roads,
        })
    }

    /// Returns the query from the first to the last location.
    #[must_use]
    pub const fn query(&self) -> &RouteQuery {
        &self.query
    }

    /// Returns the generated roads.
    #[must_use]
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }
}

fn location(slot: usize) -> String {
    format!("loc{slot}")
}
