//! Solver for the "Hexa Dowel" stacking puzzle.
//!
//! The puzzle is a stack of 12 perforated disks. Pegs are pushed up through
//! aligned holes as disks are added; a finished stack must leave no peg
//! protruding at partial height above the top disk. The crate is split into:
//!
//! - [`catalog`]: the fixed disk hole patterns and orientation handling
//!   (side + rotation angle → hole configuration).
//! - [`layer`]: the physical model — peg-height bookkeeping per layer and the
//!   compatibility rule that prunes placements.
//! - [`search`]: depth-first backtracking over (disk, side, angle) candidates
//!   with an injectable enumeration-order policy (deterministic or seeded
//!   shuffle per node).
//!
//! The search returns a [`search::SearchReport`] carrying either the first
//! solution found or proof of exhaustion, plus the visited-node count.

pub mod catalog;
pub mod layer;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::catalog::{Catalog, DiskId, HolePattern, Orientation, Side, SLOTS};
    pub use crate::layer::{
        compatible, next_peg_config, HoleConfig, Layer, PegConfig, Stack, PEG_HEIGHT,
    };
    pub use crate::search::{
        solve, solve_with_progress, OrderPolicy, SearchCfg, SearchOutcome, SearchReport, Solution,
    };
}
