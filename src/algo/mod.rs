//! Graph algorithms module
//!
//! Read-only algorithms parameterized by a [`Graph`](crate::graph::Graph)
//! reference. `shortest_path` allocates a fresh [`MinPriorityQueue`] and
//! its distance/predecessor maps per invocation, so concurrent calls
//! against a graph that is not being mutated are safe.

pub mod heap;
pub mod pathfinding;
pub mod traversal;

pub use heap::MinPriorityQueue;
pub use pathfinding::{shortest_path, PathResult};
pub use traversal::connected_nodes;
