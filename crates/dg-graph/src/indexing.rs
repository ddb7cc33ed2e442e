//! Stable indexing for solver integration.
//!
//! Vertex IDs are sparse once vertices are removed; the solver needs dense
//! indices `0..N`. [`IndexMap`] maps between the two in enumeration order.

use std::collections::HashMap;

use dg_core::VertexId;

use crate::error::{GraphError, GraphResult};
use crate::graph::Edge;
use crate::snapshot::IndexedEdge;
use crate::store::GraphStore;

/// Bidirectional `VertexId <-> index` mapping for one state of a store.
#[derive(Debug, Clone, Default)]
pub struct IndexMap {
    /// Contiguous list of vertex IDs (index -> VertexId).
    vertex_ids: Vec<VertexId>,

    /// Reverse lookup: VertexId -> index.
    vertex_to_idx: HashMap<VertexId, usize>,
}

impl IndexMap {
    /// Build an index map from the store's current vertices.
    pub fn from_store(store: &GraphStore) -> Self {
        let vertex_ids: Vec<VertexId> = store.vertex_records().iter().map(|v| v.id).collect();
        let vertex_to_idx = vertex_ids
            .iter()
            .enumerate()
            .map(|(i, &id)| (id, i))
            .collect();

        Self {
            vertex_ids,
            vertex_to_idx,
        }
    }

    /// Number of vertices in the index.
    pub fn vertex_count(&self) -> usize {
        self.vertex_ids.len()
    }

    /// Get the contiguous index for a vertex ID.
    pub fn vertex_idx(&self, id: VertexId) -> GraphResult<usize> {
        self.vertex_to_idx
            .get(&id)
            .copied()
            .ok_or(GraphError::IdNotFound { what: "vertex", id })
    }

    /// Get the vertex ID at a contiguous index.
    pub fn vertex_id(&self, i: usize) -> Option<VertexId> {
        self.vertex_ids.get(i).copied()
    }

    /// All vertex IDs in index order.
    pub fn vertex_ids(&self) -> &[VertexId] {
        &self.vertex_ids
    }

    pub(crate) fn index_edge(&self, edge: &Edge) -> Option<IndexedEdge> {
        Some(IndexedEdge {
            i: *self.vertex_to_idx.get(&edge.a)?,
            j: *self.vertex_to_idx.get(&edge.b)?,
            weight: edge.weight,
        })
    }
}
