//! dg-graph: editable graph model for distgraph.
//!
//! Provides:
//! - Vertex and edge records (`Vertex`, `Edge`, `EdgeView`)
//! - `GraphStore`, the mutable store with atomic, validated edits
//! - `GraphSnapshot` and `IndexMap` for handing a frozen, densely indexed
//!   copy to the solver
//!
//! # Example
//!
//! ```
//! use dg_core::Weight;
//! use dg_graph::GraphStore;
//!
//! let mut store = GraphStore::new();
//! store.add_vertex("A").unwrap();
//! store.add_vertex("B").unwrap();
//! store.add_edge("A", "B", Weight::new(4)).unwrap();
//!
//! let snapshot = store.snapshot();
//! assert_eq!(snapshot.labels(), &["A", "B"]);
//! assert_eq!(snapshot.edge_count(), 1);
//! ```

pub mod error;
pub mod graph;
pub mod indexing;
pub mod snapshot;
pub mod store;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, EdgeView, Vertex};
pub use indexing::IndexMap;
pub use snapshot::{GraphSnapshot, IndexedEdge};
pub use store::GraphStore;
