//! Reference implementations used as oracles by the property tests.
//!
//! Each oracle works on a dense adjacency matrix over location slots and
//! shares no code with the production algorithms.

use std::collections::{HashMap, VecDeque};

use crate::Road;

/// Dense view of a road map: minimum parallel-road length per vertex pair.
pub(super) struct DenseMap {
    names: Vec<String>,
    lengths: Vec<Vec<Option<u64>>>,
}

impl DenseMap {
    /// Collapses `roads` into a matrix over the locations they mention.
    pub(super) fn from_roads(roads: &[Road]) -> Self {
        let mut slots: HashMap<&str, usize> = HashMap::new();
        let mut names = Vec::new();
        for road in roads {
            for name in [road.endpoint_a(), road.endpoint_b()] {
                slots.entry(name).or_insert_with(|| {
                    names.push(name.to_owned());
                    names.len() - 1
                });
            }
        }

        let mut lengths = vec![vec![None; names.len()]; names.len()];
        for road in roads {
            let a = slots[road.endpoint_a()];
            let b = slots[road.endpoint_b()];
            if a == b {
                continue;
            }
            for (row, col) in [(a, b), (b, a)] {
                let cell: &mut Option<u64> = &mut lengths[row][col];
                *cell = Some(cell.map_or(road.length(), |known| known.min(road.length())));
            }
        }

        Self { names, lengths }
    }

    /// Returns the location names in slot order.
    pub(super) fn names(&self) -> &[String] {
        &self.names
    }

    /// All-pairs shortest distances (Floyd–Warshall).
    pub(super) fn all_pairs_distances(&self) -> Vec<Vec<Option<u64>>> {
        let n = self.names.len();
        let mut dist = self.lengths.clone();
        for (slot, row) in dist.iter_mut().enumerate() {
            row[slot] = Some(0);
        }
        for via in 0..n {
            for from in 0..n {
                for to in 0..n {
                    if let (Some(left), Some(right)) = (dist[from][via], dist[via][to]) {
                        let through = left + right;
                        if dist[from][to].is_none_or(|known| through < known) {
                            dist[from][to] = Some(through);
                        }
                    }
                }
            }
        }
        dist
    }

    /// Number of connected components (breadth-first search).
    pub(super) fn component_count(&self) -> usize {
        let n = self.names.len();
        let mut seen = vec![false; n];
        let mut components = 0;
        for root in 0..n {
            if seen[root] {
                continue;
            }
            components += 1;
            seen[root] = true;
            let mut queue = VecDeque::from([root]);
            while let Some(current) = queue.pop_front() {
                for next in 0..n {
                    if self.lengths[current][next].is_some() && !seen[next] {
                        seen[next] = true;
                        queue.push_back(next);
                    }
                }
            }
        }
        components
    }

    /// Total weight of a minimum spanning forest (Prim, restarted per
    /// component).
    pub(super) fn spanning_weight(&self) -> u64 {
        let n = self.names.len();
        let mut in_tree = vec![false; n];
        let mut total = 0;
        for root in 0..n {
            if in_tree[root] {
                continue;
            }
            let mut best: Vec<Option<u64>> = vec![None; n];
            best[root] = Some(0);
            loop {
                let next = (0..n)
                    .filter(|&slot| !in_tree[slot])
                    .filter_map(|slot| best[slot].map(|cost| (cost, slot)))
                    .min();
                let Some((cost, slot)) = next else {
                    break;
                };
                in_tree[slot] = true;
                total += cost;
                for other in 0..n {
                    if let Some(length) = self.lengths[slot][other] {
                        if !in_tree[other] && best[other].is_none_or(|known| length < known) {
                            best[other] = Some(length);
                        }
                    }
                }
            }
        }
        total
    }
}
