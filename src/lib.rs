//! Routegraph
//!
//! An in-memory directed weighted graph with single-source shortest path
//! (Dijkstra over a decrease-key min-heap) and forward reachability
//! enumeration.
//!
//! # Design
//!
//! - Node keys are caller-supplied and opaque; payloads are arbitrary.
//! - Edges are directed with non-negative finite weights; at most one
//!   edge per ordered (source, target) pair, re-insertion overwrites.
//! - Removing a node scrubs every edge touching it, in both directions,
//!   so the adjacency index never dangles.
//! - All containers are owned by the `Graph` value; no shared state,
//!   no internal synchronization. Concurrent mutation of one `Graph`
//!   must be serialized by the caller.
//! - Iteration and heap tie-breaking follow insertion order, so the
//!   algorithms are deterministic run to run.
//!
//! # Example Usage
//!
//! ```rust
//! use routegraph::{algo, Graph};
//!
//! let mut graph = Graph::new();
//! for city in ["berlin", "prague", "vienna", "budapest"] {
//!     graph.add_node(city, ());
//! }
//! graph.add_edge("berlin", "prague", 5.0).unwrap();
//! graph.add_edge("prague", "vienna", 8.0).unwrap();
//! graph.add_edge("vienna", "budapest", 12.0).unwrap();
//! graph.add_edge("berlin", "budapest", 15.0).unwrap();
//!
//! let route = algo::shortest_path(&graph, &"berlin", &"budapest").unwrap();
//! assert_eq!(route.path, vec!["berlin", "budapest"]);
//! assert_eq!(route.distance, 15.0);
//!
//! let reachable = algo::connected_nodes(&graph, &"prague").unwrap();
//! assert_eq!(reachable.len(), 3);
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod graph;

// Re-export main types for convenience
pub use algo::{connected_nodes, shortest_path, MinPriorityQueue, PathResult};
pub use graph::{Edge, Graph, GraphError, GraphResult, Node, NodeKey, Weight};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
