//! dg-core: stable foundation for distgraph.
//!
//! Contains:
//! - ids (stable compact IDs for vertices and edges)
//! - weight (non-negative integer edge weights + text parsing)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod weight;

// Re-exports: nice ergonomics for downstream crates
pub use error::{DgError, DgResult};
pub use ids::*;
pub use weight::*;
