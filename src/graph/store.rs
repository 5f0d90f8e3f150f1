//! In-memory graph storage implementation
//!
//! Owns the node registry and the adjacency index. The adjacency index is
//! the single source of truth for edge existence and must never reference a
//! key absent from the registry; node removal restores that invariant by
//! scrubbing edges in both directions before the node leaves the registry.

use super::edge::Edge;
use super::node::Node;
use super::types::{NodeKey, Weight};
use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError<K: fmt::Debug> {
    #[error("node {0:?} not found")]
    UnknownNode(K),

    #[error("invalid edge weight {0}: must be finite and non-negative")]
    InvalidWeight(f64),

    #[error("no path from {0:?} to {1:?}")]
    NoPathFound(K, K),

    #[error("extract_min called on an empty queue")]
    EmptyQueue,
}

pub type GraphResult<T, K> = Result<T, GraphError<K>>;

/// In-memory directed weighted graph
///
/// All state lives on the value itself, so independent `Graph` instances
/// never interfere. Insertion-ordered maps keep iteration deterministic,
/// which the algorithms rely on for reproducible tie-breaking:
/// - `nodes`: key -> Node (node registry)
/// - `outgoing`: source -> (target -> Edge) (adjacency index)
/// - `incoming`: target -> set of sources (reverse index for removal cleanup)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K: NodeKey + Serialize, V: Serialize",
    deserialize = "K: NodeKey + Deserialize<'de>, V: Deserialize<'de>"
))]
pub struct Graph<K, V> {
    nodes: IndexMap<K, Node<K, V>>,
    outgoing: IndexMap<K, IndexMap<K, Edge<K>>>,
    incoming: FxHashMap<K, FxHashSet<K>>,
    edge_count: usize,
}

impl<K: NodeKey, V> Graph<K, V> {
    /// Create a new empty graph
    pub fn new() -> Self {
        Graph {
            nodes: IndexMap::new(),
            outgoing: IndexMap::new(),
            incoming: FxHashMap::default(),
            edge_count: 0,
        }
    }

    /// Number of nodes in the registry
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True when the graph holds no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check whether a key is registered
    pub fn contains_node(&self, key: &K) -> bool {
        self.nodes.contains_key(key)
    }

    /// Get a node by key
    pub fn get_node(&self, key: &K) -> Option<&Node<K, V>> {
        self.nodes.get(key)
    }

    /// Get a mutable node by key
    pub fn get_node_mut(&mut self, key: &K) -> Option<&mut Node<K, V>> {
        self.nodes.get_mut(key)
    }

    /// Iterate node keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.nodes.keys()
    }

    /// Iterate nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node<K, V>> {
        self.nodes.values()
    }

    /// Insert a node. Idempotent: if the key is already registered the
    /// existing payload is preserved and the new value is dropped.
    pub fn add_node(&mut self, key: K, value: V) {
        if self.nodes.contains_key(&key) {
            trace!(key = ?key, "add_node: key already registered, payload preserved");
            return;
        }
        self.outgoing.insert(key.clone(), IndexMap::new());
        self.nodes.insert(key.clone(), Node::new(key, value));
    }

    /// Remove a node and every edge touching it, in both directions.
    /// No-op when the key is absent.
    pub fn remove_node(&mut self, key: &K) {
        if !self.nodes.contains_key(key) {
            return;
        }

        let mut removed = 0usize;

        // Outgoing: drop this node's adjacency row and unlink the reverse
        // index of every former target.
        if let Some(row) = self.outgoing.shift_remove(key) {
            removed += row.len();
            for target in row.keys() {
                if let Some(sources) = self.incoming.get_mut(target) {
                    sources.remove(key);
                }
            }
        }

        // Incoming: every source still pointing here loses exactly that
        // one directed edge, so the adjacency index never dangles.
        if let Some(sources) = self.incoming.remove(key) {
            for source in &sources {
                if let Some(row) = self.outgoing.get_mut(source) {
                    if row.shift_remove(key).is_some() {
                        removed += 1;
                    }
                }
            }
        }

        self.nodes.shift_remove(key);
        self.edge_count -= removed;
        debug!(key = ?key, edges_removed = removed, "removed node");
    }

    /// Insert or overwrite the directed edge `from -> to`.
    ///
    /// Fails with [`GraphError::UnknownNode`] when either endpoint is
    /// missing and [`GraphError::InvalidWeight`] when the weight is
    /// negative or non-finite. Nothing is mutated on failure.
    pub fn add_edge(&mut self, from: K, to: K, weight: Weight) -> GraphResult<(), K> {
        if !self.nodes.contains_key(&from) {
            return Err(GraphError::UnknownNode(from));
        }
        if !self.nodes.contains_key(&to) {
            return Err(GraphError::UnknownNode(to));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight(weight));
        }

        let edge = Edge::new(from.clone(), to.clone(), weight);
        let row = self.outgoing.entry(from.clone()).or_default();
        if row.insert(to.clone(), edge).is_some() {
            trace!(from = ?from, to = ?to, weight, "overwrote edge weight");
        } else {
            self.incoming.entry(to).or_default().insert(from);
            self.edge_count += 1;
        }
        Ok(())
    }

    /// Remove the single directed edge `from -> to`. No-op when either
    /// endpoint or the edge itself is absent.
    pub fn remove_edge(&mut self, from: &K, to: &K) {
        let removed = match self.outgoing.get_mut(from) {
            Some(row) => row.shift_remove(to).is_some(),
            None => false,
        };
        if !removed {
            return;
        }
        if let Some(sources) = self.incoming.get_mut(to) {
            sources.remove(from);
        }
        self.edge_count -= 1;
        trace!(from = ?from, to = ?to, "removed edge");
    }

    /// True when the directed edge `from -> to` exists
    pub fn has_edge(&self, from: &K, to: &K) -> bool {
        self.outgoing
            .get(from)
            .map_or(false, |row| row.contains_key(to))
    }

    /// Weight of the directed edge `from -> to`, if it exists
    pub fn edge_weight(&self, from: &K, to: &K) -> Option<Weight> {
        self.outgoing
            .get(from)
            .and_then(|row| row.get(to))
            .map(|edge| edge.weight)
    }

    /// Outgoing (target, weight) pairs of `key`, in edge insertion order.
    ///
    /// Fails with [`GraphError::UnknownNode`] when `key` is not registered;
    /// a registered node with no outgoing edges yields an empty iterator.
    pub fn neighbors(&self, key: &K) -> GraphResult<impl Iterator<Item = (&K, Weight)> + '_, K> {
        if !self.nodes.contains_key(key) {
            return Err(GraphError::UnknownNode(key.clone()));
        }
        Ok(self
            .outgoing
            .get(key)
            .into_iter()
            .flat_map(|row| row.iter().map(|(target, edge)| (target, edge.weight))))
    }
}

impl<K: NodeKey, V> Default for Graph<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
