//! Common test utilities for hopgraph integration tests
//!
//! Record-file fixtures on disk, seeded random graphs, and a naive
//! reachability oracle to check traversals against.

#![allow(dead_code)]

use hopgraph::Graph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary directory of record files
pub struct RecordFiles {
    dir: TempDir,
}

impl RecordFiles {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Write `lines` joined by newlines to `name`, returning its path
    pub fn write(&self, name: &str, lines: &[&str]) -> PathBuf {
        let path = self.dir.path().join(name);
        let mut text = lines.join("\n");
        text.push('\n');
        fs::write(&path, text).expect("Failed to write record file");
        path
    }

    /// Path inside the directory that was never written
    pub fn missing(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Sample rail network used across tests
pub const RAIL_LINES: &[&str] = &[
    "Haifa\tAcre\t12",
    "Haifa\tHadera\t25",
    "Hadera\tNetanya\t10",
    "Netanya\tTel-Aviv\t20",
    "Tel-Aviv\tJerusalem\t40",
    "Acre\tNahariya\t8",
    "Beersheba\tTel-Aviv\t55",
];

/// Random graph over vertices `0..vertices`, each edge present with `density`
///
/// Weights are in `1..100`, so never equal to the absence sentinel.
pub fn random_graph(seed: u64, vertices: u32, density: f64) -> Graph<u32, u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = Graph::new();
    for v in 0..vertices {
        g.add_vertex(v);
    }
    for from in 0..vertices {
        for to in 0..vertices {
            if rng.gen_bool(density) {
                g.add_edge(&from, &to, rng.gen_range(1..100)).unwrap();
            }
        }
    }
    g
}

/// Every vertex reachable from `origin` (origin included), by fixed-point iteration
pub fn reachable_oracle(g: &Graph<u32, u32>, origin: u32) -> Vec<u32> {
    let mut reached = vec![origin];
    loop {
        let mut grew = false;
        for (from, to, _) in g.edges() {
            if reached.contains(from) && !reached.contains(to) {
                reached.push(*to);
                grew = true;
            }
        }
        if !grew {
            break;
        }
    }
    reached.sort_unstable();
    reached
}
