use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

use hexadowel::catalog::Catalog;
use hexadowel::layer::Layer;
use hexadowel::search::{solve_with_progress, OrderPolicy, SearchCfg, SearchOutcome, Solution};

#[derive(Parser)]
#[command(name = "hexadowel")]
#[command(about = "Hexa Dowel stacking-puzzle solver")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Search the canonical 12-disk instance for a valid stacking order
    Solve {
        /// Seed for the shuffled candidate ordering (time-derived if omitted)
        #[arg(long, conflicts_with = "sequential")]
        seed: Option<u64>,
        /// Enumerate candidates deterministically: disk ids ascending,
        /// face-up before face-down, angles 0..5
        #[arg(long)]
        sequential: bool,
        /// Log a progress line every N nodes (0 disables)
        #[arg(long, default_value_t = 1000)]
        progress_every: u64,
        /// Also write the solution as a JSON report to this path
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            seed,
            sequential,
            progress_every,
            out,
        } => run_solve(seed, sequential, progress_every, out),
    }
}

fn run_solve(
    seed: Option<u64>,
    sequential: bool,
    progress_every: u64,
    out: Option<PathBuf>,
) -> Result<()> {
    let order = if sequential {
        tracing::info!("solve: sequential order");
        OrderPolicy::Sequential
    } else {
        let seed = seed.unwrap_or_else(time_seed);
        tracing::info!(seed, "solve: shuffled order");
        OrderPolicy::Shuffled { seed }
    };
    let catalog = Catalog::canonical();
    let cfg = SearchCfg {
        order,
        progress_every,
    };

    let mut on_progress = |nodes: u64| tracing::info!(nodes, "searching");
    let report = solve_with_progress(&catalog, cfg, &mut on_progress);

    match report.outcome {
        SearchOutcome::Found(solution) => {
            tracing::info!(nodes = report.nodes, "solution found");
            for (depth, layer) in solution.layers.iter().enumerate() {
                tracing::info!(
                    depth,
                    disk = layer.orientation.disk.0,
                    side = side_label(layer),
                    angle = layer.orientation.angle,
                    pegs = ?layer.pegs,
                    "layer"
                );
            }
            if let Some(path) = out {
                write_report(&path, &solution, report.nodes)?;
                tracing::info!(path = %path.display(), "report written");
            }
            Ok(())
        }
        SearchOutcome::Exhausted => {
            bail!("no solution found after {} nodes", report.nodes)
        }
    }
}

/// Seed for ad-hoc runs when none is given on the command line.
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn side_label(layer: &Layer) -> &'static str {
    match layer.orientation.side {
        hexadowel::catalog::Side::FaceUp => "up",
        hexadowel::catalog::Side::FaceDown => "down",
    }
}

#[derive(Serialize)]
struct LayerReport {
    disk: usize,
    side: &'static str,
    angle: u8,
    pegs: Vec<u8>,
}

#[derive(Serialize)]
struct SolveReport {
    nodes: u64,
    layers: Vec<LayerReport>,
}

fn write_report(path: &Path, solution: &Solution, nodes: u64) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let report = SolveReport {
        nodes,
        layers: solution
            .layers
            .iter()
            .map(|layer| LayerReport {
                disk: layer.orientation.disk.0,
                side: side_label(layer),
                angle: layer.orientation.angle,
                pegs: layer.pegs.to_vec(),
            })
            .collect(),
    };
    std::fs::write(path, serde_json::to_vec_pretty(&report)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexadowel::search::solve;

    #[test]
    fn report_round_trips_through_json() {
        let patterns = [
            [1u8, 0, 0, 0, 0, 0],
            [1, 0, 0, 0, 0, 0],
            [1, 0, 0, 0, 0, 0],
        ];
        let catalog = Catalog::from_patterns(&patterns);
        let report = solve(
            &catalog,
            SearchCfg {
                order: OrderPolicy::Sequential,
                progress_every: 0,
            },
        );
        let solution = report.solution().expect("reduced dataset is solvable");

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("solution.json");
        write_report(&path, solution, report.nodes).expect("write report");

        let raw = std::fs::read(&path).expect("read report");
        let value: serde_json::Value = serde_json::from_slice(&raw).expect("parse report");
        assert_eq!(value["nodes"], report.nodes);
        let layers = value["layers"].as_array().expect("layers array");
        assert_eq!(layers.len(), 3);
        assert_eq!(layers[0]["disk"], 0);
        assert_eq!(layers[0]["side"], "up");
        assert_eq!(layers[2]["pegs"][0], 3);
    }
}
