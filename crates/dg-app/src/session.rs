//! Editing sessions.
//!
//! A [`GraphSession`] owns one graph store for the lifetime of an editing
//! session and answers distance queries from snapshots of it.
//! [`SharedSession`] wraps one behind a lock for multi-threaded hosts.

use std::sync::Arc;

use dg_core::{EdgeId, VertexId};
use dg_graph::{EdgeView, GraphSnapshot, GraphStore};
use dg_solver::{SolverConfig, solve};
use parking_lot::RwLock;
use tracing::info;

use crate::error::AppResult;
use crate::table::DistanceTable;

/// One editing session: a graph store plus solver settings.
#[derive(Debug, Clone, Default)]
pub struct GraphSession {
    store: GraphStore,
    config: SolverConfig,
}

impl GraphSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            store: GraphStore::new(),
            config,
        }
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn config(&self) -> SolverConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SolverConfig) {
        self.config = config;
    }

    pub fn add_vertex(&mut self, label: &str) -> AppResult<VertexId> {
        let id = self.store.add_vertex(label)?;
        info!(%id, label = label.trim(), "vertex added");
        Ok(id)
    }

    /// Add an edge from raw user input; the weight is validated here.
    pub fn add_edge(&mut self, from: &str, to: &str, raw_weight: &str) -> AppResult<EdgeId> {
        let id = self.store.add_edge_parsed(from, to, raw_weight)?;
        info!(%id, from = from.trim(), to = to.trim(), weight = raw_weight, "edge added");
        Ok(id)
    }

    pub fn remove_edge(&mut self, id: EdgeId) -> AppResult<()> {
        self.store.remove_edge(id)?;
        info!(%id, "edge removed");
        Ok(())
    }

    /// Remove a vertex and its edges; returns how many edges went with it.
    pub fn remove_vertex(&mut self, label: &str) -> AppResult<usize> {
        let removed = self.store.remove_vertex(label)?;
        info!(label = label.trim(), edges = removed.len(), "vertex removed");
        Ok(removed.len())
    }

    /// Reset the session to an empty graph.
    pub fn clear(&mut self) {
        self.store.clear();
        info!("session cleared");
    }

    pub fn vertices(&self) -> Vec<&str> {
        self.store.vertices()
    }

    pub fn edges(&self) -> Vec<EdgeView<'_>> {
        self.store.edges()
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        self.store.snapshot()
    }

    /// Compute the all-pairs distance table for the current graph.
    pub fn compute(&self) -> DistanceTable {
        DistanceTable::new(solve(&self.snapshot(), Some(self.config)))
    }
}

/// Cloneable, thread-safe handle to one [`GraphSession`].
///
/// Edits hold the write lock for their whole duration and queries copy a
/// snapshot under the read lock, so a query never sees a half-applied edit.
/// The solver itself runs after the lock is released.
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<RwLock<GraphSession>>,
}

impl SharedSession {
    pub fn new(session: GraphSession) -> Self {
        Self {
            inner: Arc::new(RwLock::new(session)),
        }
    }

    /// Run `f` with exclusive access to the session.
    pub fn edit<R>(&self, f: impl FnOnce(&mut GraphSession) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Run `f` with shared access to the session.
    pub fn read<R>(&self, f: impl FnOnce(&GraphSession) -> R) -> R {
        f(&self.inner.read())
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        self.inner.read().snapshot()
    }

    /// Snapshot under the read lock, then solve without holding it.
    pub fn compute(&self) -> DistanceTable {
        let (snapshot, config) = {
            let session = self.inner.read();
            (session.snapshot(), session.config())
        };
        DistanceTable::new(solve(&snapshot, Some(config)))
    }
}
