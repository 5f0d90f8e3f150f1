//! Core directed weighted graph implementation
//!
//! This module implements the graph data model:
//! - Nodes with caller-supplied opaque keys and arbitrary payloads
//! - Directed edges with non-negative finite weights
//! - At most one edge per ordered (source, target) pair; re-insertion
//!   overwrites the weight
//! - Consistent adjacency maintenance under node and edge removal

pub mod edge;
pub mod node;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::Edge;
pub use node::Node;
pub use store::{Graph, GraphError, GraphResult};
pub use types::{NodeKey, Weight};
