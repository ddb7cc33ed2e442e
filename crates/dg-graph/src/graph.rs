//! Core graph records.

use core::fmt;

use dg_core::{EdgeId, VertexId, Weight};

/// A named vertex.
///
/// Vertices hold only semantic data. Any on-screen position belongs to the
/// front-end, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub id: VertexId,
    pub label: String,
}

/// An undirected, weighted edge between two vertices.
///
/// `a` and `b` are stored in the order the caller gave them; that order is
/// only used when listing edges and carries no direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: EdgeId,
    pub a: VertexId,
    pub b: VertexId,
    pub weight: Weight,
}

impl Edge {
    /// Both endpoints, in insertion order.
    pub fn endpoints(&self) -> [VertexId; 2] {
        [self.a, self.b]
    }

    /// Whether `vertex` is one of this edge's endpoints.
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.a == vertex || self.b == vertex
    }

    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }
}

/// An edge with its endpoints resolved to labels, borrowed from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeView<'a> {
    pub id: EdgeId,
    pub from: &'a str,
    pub to: &'a str,
    pub weight: Weight,
}

impl<'a> EdgeView<'a> {
    /// `(from, to, weight)` triple.
    pub fn as_tuple(&self) -> (&'a str, &'a str, Weight) {
        (self.from, self.to, self.weight)
    }
}

/// Renders as `"A -> B"`, the form used by edge pickers.
impl fmt::Display for EdgeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
