//! Benchmark parameter labels.

use std::fmt;

/// Size of one benchmarked network.
#[derive(Clone, Copy, Debug)]
pub struct NetworkBenchParams {
    /// Number of locations.
    pub location_count: usize,
    /// Number of roads.
    pub road_count: usize,
}

impl fmt::Display for NetworkBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.location_count, self.road_count)
    }
}
