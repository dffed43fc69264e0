//! Depth-first backtracking with early pruning via the peg simulator.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::catalog::{Catalog, DiskId, Orientation, Side, ANGLES};
use crate::layer::{Layer, Stack};

use super::types::{OrderPolicy, SearchCfg, SearchOutcome, SearchReport, Solution};

/// Run the search over `catalog` and return the first solution found, or
/// proof of exhaustion.
pub fn solve(catalog: &Catalog, cfg: SearchCfg) -> SearchReport {
    DfsRunner::new(catalog, cfg, None).run()
}

/// Like [`solve`], invoking `on_progress` with the running node count every
/// `cfg.progress_every` nodes.
pub fn solve_with_progress(
    catalog: &Catalog,
    cfg: SearchCfg,
    on_progress: &mut dyn FnMut(u64),
) -> SearchReport {
    DfsRunner::new(catalog, cfg, Some(on_progress)).run()
}

/// DFS runner carrying the single in-progress stack and used-disk set.
///
/// Both are owned exclusively by the current path: every push is undone by a
/// matching pop before the next candidate is tried, so branches never see
/// each other's state.
struct DfsRunner<'a> {
    catalog: &'a Catalog,
    cfg: SearchCfg,
    rng: Option<StdRng>,
    stack: Stack,
    used: Vec<bool>,
    nodes: u64,
    progress: Option<&'a mut dyn FnMut(u64)>,
}

impl<'a> DfsRunner<'a> {
    fn new(
        catalog: &'a Catalog,
        cfg: SearchCfg,
        progress: Option<&'a mut dyn FnMut(u64)>,
    ) -> Self {
        let rng = match cfg.order {
            OrderPolicy::Sequential => None,
            OrderPolicy::Shuffled { seed } => Some(StdRng::seed_from_u64(seed)),
        };
        Self {
            catalog,
            cfg,
            rng,
            stack: Stack::new(),
            used: vec![false; catalog.len()],
            nodes: 0,
            progress,
        }
    }

    fn run(mut self) -> SearchReport {
        let outcome = match self.recur() {
            Some(solution) => SearchOutcome::Found(solution),
            None => SearchOutcome::Exhausted,
        };
        SearchReport {
            outcome,
            nodes: self.nodes,
        }
    }

    /// Visit one node: either validate a full stack or try all candidate
    /// placements at this depth. Returns `Some` as soon as a solution exists
    /// below this node, which unwinds every frame without further trials.
    fn recur(&mut self) -> Option<Solution> {
        self.nodes += 1;
        if self.cfg.progress_every != 0 && self.nodes % self.cfg.progress_every == 0 {
            let nodes = self.nodes;
            if let Some(cb) = self.progress.as_deref_mut() {
                cb(nodes);
            }
        }

        if self.stack.len() == self.catalog.len() {
            if self.stack.is_valid(self.catalog.len()) {
                return Some(Solution {
                    layers: self.stack.layers().to_vec(),
                });
            }
            // Full but invalid: an ordinary dead end.
            return None;
        }

        let mut disks: Vec<DiskId> = self
            .catalog
            .disk_ids()
            .filter(|d| !self.used[d.0])
            .collect();
        if let Some(rng) = &mut self.rng {
            disks.shuffle(rng);
        }

        for disk in disks {
            let mut sides = [Side::FaceUp, Side::FaceDown];
            if let Some(rng) = &mut self.rng {
                sides.shuffle(rng);
            }
            for side in sides {
                let mut angles = ANGLES;
                if let Some(rng) = &mut self.rng {
                    angles.shuffle(rng);
                }
                for angle in angles {
                    let orientation = Orientation { disk, side, angle };
                    let holes = self.catalog.hole_config(orientation);
                    if !self.stack.admits(&holes) {
                        continue;
                    }
                    let pegs = self.stack.step(&holes);
                    self.stack.push(Layer { orientation, pegs });
                    self.used[disk.0] = true;
                    if let Some(solution) = self.recur() {
                        return Some(solution);
                    }
                    self.used[disk.0] = false;
                    self.stack.pop();
                }
            }
        }
        None
    }
}
