//! Configuration and result types for the backtracking search.
//!
//! Kept small and explicit to make the `dfs` module easy to read.

use crate::layer::Layer;

/// Candidate enumeration order at each search node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderPolicy {
    /// Disk ids ascending, face-up before face-down, angles 0..5.
    /// Repeated runs visit nodes in identical order and find the same first
    /// solution.
    Sequential,
    /// Each axis (disks, sides, angles) shuffled independently at every
    /// node with a `StdRng` seeded once from `seed`. Reproducible per seed.
    Shuffled { seed: u64 },
}

/// Search configuration.
#[derive(Clone, Copy, Debug)]
pub struct SearchCfg {
    pub order: OrderPolicy,
    /// Invoke the progress callback every this many nodes; 0 disables.
    pub progress_every: u64,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            order: OrderPolicy::Sequential,
            progress_every: 1000,
        }
    }
}

/// A complete stacking order: one layer per disk, bottom-up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub layers: Vec<Layer>,
}

/// Terminal state of a search run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// First valid solution found; the search stopped immediately.
    Found(Solution),
    /// Every candidate at every depth was tried without success.
    Exhausted,
}

/// Outcome plus traversal statistics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    /// Total nodes visited, counting the root.
    pub nodes: u64,
}

impl SearchReport {
    pub fn solution(&self) -> Option<&Solution> {
        match &self.outcome {
            SearchOutcome::Found(s) => Some(s),
            SearchOutcome::Exhausted => None,
        }
    }
}
