//! High-level solver interface.

use std::time::Instant;

use dg_graph::GraphSnapshot;
use tracing::debug;

use crate::floyd_warshall::{SolverConfig, adjacency_matrix, relax};
use crate::matrix::DistanceMatrix;

/// Compute shortest distances between every pair of vertices.
///
/// Row and column `i` of the result correspond to `snapshot.labels()[i]`.
/// Pairs with no connecting path hold [`crate::Distance::Unreachable`].
///
/// An empty snapshot yields an empty matrix; a single vertex yields `[[0]]`.
pub fn compute_all_pairs_shortest_paths(snapshot: &GraphSnapshot) -> DistanceMatrix {
    solve(snapshot, None)
}

/// Same as [`compute_all_pairs_shortest_paths`] with an explicit configuration.
///
/// # Arguments
/// * `snapshot` - Frozen graph to solve
/// * `config` - Optional solver configuration (defaults apply when `None`)
pub fn solve(snapshot: &GraphSnapshot, config: Option<SolverConfig>) -> DistanceMatrix {
    let config = config.unwrap_or_default();
    let n = snapshot.vertex_count();
    let start = Instant::now();

    let mut matrix = adjacency_matrix(snapshot);
    relax(&mut matrix, &config);

    debug!(
        vertices = n,
        edges = snapshot.edge_count(),
        parallel = n > 0 && config.use_parallel(n),
        elapsed_us = start.elapsed().as_micros() as u64,
        "all-pairs shortest paths computed"
    );
    matrix
}
