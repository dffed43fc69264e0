//! Depth-first backtracking search over (disk, side, angle) candidates.
//!
//! Purpose
//! - Find the first stacking order that uses every disk once and leaves no
//!   peg at partial height above the finished stack.
//! - Candidate enumeration order is an injectable policy: deterministic
//!   sequential order for reproducible traversal, or a per-node seeded
//!   shuffle (the randomized-restart strategy the puzzle benefits from).
//!
//! The search result is a [`SearchReport`]: either the first [`Solution`]
//! found, or proof that the space was exhausted, together with the total
//! number of nodes visited. A found solution unwinds every active frame
//! immediately; no further candidates are tried at any depth.

mod dfs;
mod types;

pub use dfs::{solve, solve_with_progress};
pub use types::{OrderPolicy, SearchCfg, SearchOutcome, SearchReport, Solution};
