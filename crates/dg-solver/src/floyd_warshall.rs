//! Adjacency reduction and Floyd–Warshall relaxation.

use dg_graph::GraphSnapshot;
use rayon::prelude::*;

use crate::distance::Distance;
use crate::matrix::DistanceMatrix;

/// Solver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Vertex count from which each relaxation step runs its rows in parallel.
    pub parallel_threshold: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 128,
        }
    }
}

impl SolverConfig {
    /// Always relax sequentially.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    /// Always relax in parallel (for any non-empty graph).
    pub fn parallel() -> Self {
        Self {
            parallel_threshold: 0,
        }
    }

    pub(crate) fn use_parallel(&self, n: usize) -> bool {
        n >= self.parallel_threshold
    }
}

/// Direct-edge matrix: 0 on the diagonal, the lightest edge weight between
/// each connected pair, `Unreachable` elsewhere.
///
/// When several edges join the same pair, the minimum weight wins regardless
/// of insertion order.
pub fn adjacency_matrix(snapshot: &GraphSnapshot) -> DistanceMatrix {
    let mut matrix = DistanceMatrix::unconnected(snapshot.labels().to_vec());
    for edge in snapshot.edges() {
        matrix.lower_symmetric(edge.i, edge.j, Distance::from(edge.weight));
    }
    matrix
}

/// Relax `matrix` in place until it holds all-pairs shortest distances.
///
/// The intermediate vertex `k` is the outermost loop. Weights are
/// non-negative, so `dist[k][k]` stays 0 and row `k` is unchanged during
/// step `k`; that is what lets the parallel path read a copy of it.
pub fn relax(matrix: &mut DistanceMatrix, config: &SolverConfig) {
    let n = matrix.len();
    if n == 0 {
        return;
    }
    if config.use_parallel(n) {
        relax_parallel(matrix.cells_mut(), n);
    } else {
        relax_sequential(matrix.cells_mut(), n);
    }
}

fn relax_sequential(cells: &mut [Distance], n: usize) {
    for k in 0..n {
        for i in 0..n {
            let d_ik = cells[i * n + k];
            if !d_ik.is_reachable() {
                continue;
            }
            for j in 0..n {
                let via_k = d_ik.saturating_add(cells[k * n + j]);
                if via_k < cells[i * n + j] {
                    cells[i * n + j] = via_k;
                }
            }
        }
    }
}

fn relax_parallel(cells: &mut [Distance], n: usize) {
    let mut row_k = vec![Distance::Unreachable; n];
    for k in 0..n {
        row_k.copy_from_slice(&cells[k * n..(k + 1) * n]);
        cells.par_chunks_mut(n).for_each(|row| {
            let d_ik = row[k];
            if !d_ik.is_reachable() {
                return;
            }
            for (cell, &d_kj) in row.iter_mut().zip(&row_k) {
                let via_k = d_ik.saturating_add(d_kj);
                if via_k < *cell {
                    *cell = via_k;
                }
            }
        });
    }
}
