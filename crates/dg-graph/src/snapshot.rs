//! Read-only graph snapshots handed to the distance solver.

use dg_core::Weight;

use crate::error::GraphResult;
use crate::validate;

/// An edge whose endpoints are positions in [`GraphSnapshot::labels`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedEdge {
    pub i: usize,
    pub j: usize,
    pub weight: Weight,
}

/// Owned copy of a store's vertices and edges with dense vertex indices.
///
/// Position `i` in `labels()` is the row/column `i` of any distance matrix
/// computed from this snapshot. A snapshot is detached from the store, so
/// later edits never affect it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphSnapshot {
    labels: Vec<String>,
    edges: Vec<IndexedEdge>,
}

impl GraphSnapshot {
    /// Build a snapshot from raw parts.
    ///
    /// Labels must be non-empty and unique once surrounding whitespace is
    /// ignored, as in [`crate::GraphStore::add_vertex`], and every edge
    /// endpoint must be a valid position in `labels`.
    pub fn from_parts(labels: Vec<String>, edges: Vec<IndexedEdge>) -> GraphResult<Self> {
        validate::validate_labels(&labels)?;
        validate::validate_edge_indices(&edges, labels.len())?;
        Ok(Self { labels, edges })
    }

    /// Parts already checked by the store.
    pub(crate) fn from_validated(labels: Vec<String>, edges: Vec<IndexedEdge>) -> Self {
        debug_assert!(validate::validate_edge_indices(&edges, labels.len()).is_ok());
        Self { labels, edges }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn edges(&self) -> &[IndexedEdge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Position of `label`, if present.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }
}
