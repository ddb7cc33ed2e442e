//! Editable graph store.

use std::collections::HashMap;

use dg_core::{EdgeId, IdAllocator, VertexId, Weight, parse_weight};
use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::graph::{Edge, EdgeView, Vertex};
use crate::indexing::IndexMap;
use crate::snapshot::GraphSnapshot;
use crate::validate;

/// Mutable store of named vertices and weighted, undirected edges.
///
/// Vertices and edges are kept in insertion order; that order is the
/// canonical index assignment used by [`GraphStore::snapshot`].
///
/// Every mutating call either applies fully or returns an error and leaves
/// the store untouched. Ids come from monotonic allocators that survive
/// [`GraphStore::clear`], so an id is never handed out twice by one store.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    by_label: HashMap<String, VertexId>,
    vertex_ids: IdAllocator,
    edge_ids: IdAllocator,
}

impl GraphStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex and return its ID.
    ///
    /// Surrounding whitespace is trimmed from `label`. Fails with
    /// [`GraphError::EmptyLabel`] if nothing remains, or
    /// [`GraphError::DuplicateLabel`] if the label is taken.
    pub fn add_vertex(&mut self, label: &str) -> GraphResult<VertexId> {
        let label = validate::normalize_label(label)?;
        if self.by_label.contains_key(label) {
            return Err(GraphError::DuplicateLabel {
                label: label.to_string(),
            });
        }
        let id = self
            .vertex_ids
            .allocate()
            .ok_or(GraphError::CapacityExceeded { what: "vertex" })?;

        self.by_label.insert(label.to_string(), id);
        self.vertices.push(Vertex {
            id,
            label: label.to_string(),
        });
        debug!(%id, label, "added vertex");
        Ok(id)
    }

    /// Add an edge between two vertices named by label.
    ///
    /// Self-loops and repeated pairs are accepted.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Weight) -> GraphResult<EdgeId> {
        let a = self.resolve(from)?;
        let b = self.resolve(to)?;
        self.push_edge(a, b, weight)
    }

    /// Add an edge whose weight is still raw user input.
    ///
    /// Endpoints are checked first, then the weight text; see
    /// [`dg_core::parse_weight`] for the accepted format.
    pub fn add_edge_parsed(
        &mut self,
        from: &str,
        to: &str,
        raw_weight: &str,
    ) -> GraphResult<EdgeId> {
        let a = self.resolve(from)?;
        let b = self.resolve(to)?;
        let weight = parse_weight(raw_weight)?;
        self.push_edge(a, b, weight)
    }

    /// Add an edge between two vertices named by ID.
    pub fn add_edge_between(
        &mut self,
        a: VertexId,
        b: VertexId,
        weight: Weight,
    ) -> GraphResult<EdgeId> {
        for id in [a, b] {
            if self.vertex(id).is_none() {
                return Err(GraphError::IdNotFound { what: "vertex", id });
            }
        }
        self.push_edge(a, b, weight)
    }

    fn push_edge(&mut self, a: VertexId, b: VertexId, weight: Weight) -> GraphResult<EdgeId> {
        let id = self
            .edge_ids
            .allocate()
            .ok_or(GraphError::CapacityExceeded { what: "edge" })?;
        self.edges.push(Edge { id, a, b, weight });
        debug!(%id, %a, %b, %weight, "added edge");
        Ok(id)
    }

    /// Remove one edge by its stable ID and return it.
    ///
    /// The relative order of the remaining edges is preserved and their IDs
    /// stay valid.
    pub fn remove_edge(&mut self, id: EdgeId) -> GraphResult<Edge> {
        let pos = self
            .edges
            .iter()
            .position(|e| e.id == id)
            .ok_or(GraphError::UnknownEdge { id })?;
        let edge = self.edges.remove(pos);
        debug!(%id, "removed edge");
        Ok(edge)
    }

    /// Remove a vertex together with every edge touching it.
    ///
    /// Returns the IDs of the removed edges, in insertion order.
    pub fn remove_vertex(&mut self, label: &str) -> GraphResult<Vec<EdgeId>> {
        let id = self.resolve(label)?;

        let removed: Vec<EdgeId> = self
            .edges
            .iter()
            .filter(|e| e.touches(id))
            .map(|e| e.id)
            .collect();
        self.edges.retain(|e| !e.touches(id));

        if let Some(pos) = self.vertices.iter().position(|v| v.id == id) {
            let vertex = self.vertices.remove(pos);
            self.by_label.remove(&vertex.label);
        }
        debug!(%id, edges = removed.len(), "removed vertex");
        Ok(removed)
    }

    /// Drop all vertices and edges.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.by_label.clear();
        debug!("cleared graph");
    }

    /// Vertex labels in insertion order.
    pub fn vertices(&self) -> Vec<&str> {
        self.vertices.iter().map(|v| v.label.as_str()).collect()
    }

    /// Edges with labels resolved, in insertion order.
    pub fn edges(&self) -> Vec<EdgeView<'_>> {
        let labels: HashMap<VertexId, &str> = self
            .vertices
            .iter()
            .map(|v| (v.id, v.label.as_str()))
            .collect();

        self.edges
            .iter()
            .filter_map(|e| {
                Some(EdgeView {
                    id: e.id,
                    from: labels.get(&e.a).copied()?,
                    to: labels.get(&e.b).copied()?,
                    weight: e.weight,
                })
            })
            .collect()
    }

    /// Vertex records in insertion order.
    pub fn vertex_records(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Edge records in insertion order.
    pub fn edge_records(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.id == id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Look up a vertex ID by label (surrounding whitespace ignored).
    pub fn vertex_id(&self, label: &str) -> Option<VertexId> {
        self.by_label.get(label.trim()).copied()
    }

    pub fn label_of(&self, id: VertexId) -> Option<&str> {
        self.vertex(id).map(|v| v.label.as_str())
    }

    pub fn contains_vertex(&self, label: &str) -> bool {
        self.vertex_id(label).is_some()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }

    /// Contiguous indices for the current vertices.
    pub fn index_map(&self) -> IndexMap {
        IndexMap::from_store(self)
    }

    /// Take an owned, read-only copy for a distance query.
    pub fn snapshot(&self) -> GraphSnapshot {
        let index = self.index_map();
        let labels = self.vertices.iter().map(|v| v.label.clone()).collect();
        let edges = self
            .edges
            .iter()
            .filter_map(|e| index.index_edge(e))
            .collect();
        GraphSnapshot::from_validated(labels, edges)
    }

    fn resolve(&self, label: &str) -> GraphResult<VertexId> {
        self.vertex_id(label).ok_or_else(|| GraphError::UnknownVertex {
            label: label.trim().to_string(),
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    proptest! {
        #[test]
        fn vertices_preserve_insertion_order(
            labels in prop::collection::btree_set("[a-z]{1,6}", 0..24)
        ) {
            // unique labels, inserted out of sorted order
            let labels: Vec<String> = labels.into_iter().rev().collect();
            let mut store = GraphStore::new();
            for label in &labels {
                store.add_vertex(label).unwrap();
            }
            prop_assert_eq!(store.vertices(), labels.iter().map(String::as_str).collect::<Vec<_>>());
            let members: BTreeSet<&str> = store.vertices().into_iter().collect();
            prop_assert_eq!(members.len(), labels.len());
        }

        #[test]
        fn add_edge_requires_both_endpoints(
            from in "[a-d]",
            to in "[a-d]",
            weight in any::<u32>(),
        ) {
            let mut store = GraphStore::new();
            store.add_vertex("a").unwrap();
            store.add_vertex("b").unwrap();

            let known = |l: &str| l == "a" || l == "b";
            let result = store.add_edge(&from, &to, Weight::new(weight));
            if known(&from) && known(&to) {
                let id = result.unwrap();
                let edges = store.edges();
                prop_assert_eq!(edges.len(), 1);
                prop_assert_eq!(edges[0].id, id);
                prop_assert_eq!(edges[0].as_tuple(), (from.as_str(), to.as_str(), Weight::new(weight)));
            } else {
                let is_unknown = matches!(result, Err(GraphError::UnknownVertex { .. }));
                prop_assert!(is_unknown);
                prop_assert_eq!(store.edge_count(), 0);
            }
        }

        #[test]
        fn clear_empties_everything(n in 0_usize..10, m in 0_usize..20) {
            let mut store = GraphStore::new();
            for i in 0..n {
                store.add_vertex(&format!("v{i}")).unwrap();
            }
            if n > 0 {
                for k in 0..m {
                    let from = format!("v{}", k % n);
                    let to = format!("v{}", (k * 7) % n);
                    store.add_edge(&from, &to, Weight::new(k as u32)).unwrap();
                }
            }
            store.clear();
            prop_assert!(store.vertices().is_empty());
            prop_assert!(store.edges().is_empty());
        }
    }
}
