//! All-pairs shortest-path solver for distgraph.
//!
//! Takes a [`dg_graph::GraphSnapshot`], reduces its edges to a dense
//! adjacency matrix (lightest edge per pair) and runs Floyd–Warshall over
//! it. Distances are exact integers; unreachable pairs are marked with
//! [`Distance::Unreachable`].

pub mod distance;
pub mod floyd_warshall;
pub mod matrix;
pub mod solve;

pub use distance::Distance;
pub use floyd_warshall::{SolverConfig, adjacency_matrix, relax};
pub use matrix::DistanceMatrix;
pub use solve::{compute_all_pairs_shortest_paths, solve};
