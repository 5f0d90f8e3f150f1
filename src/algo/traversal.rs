//! Reachability traversal
//!
//! Depth-first walk over outgoing edges with an explicit stack, so depth
//! is bounded by heap memory rather than the call stack.

use crate::graph::{Graph, GraphError, GraphResult, NodeKey};
use indexmap::IndexSet;

/// Enumerate every node reachable from `start` by following outgoing
/// edges transitively, `start` included.
///
/// Fails with [`GraphError::UnknownNode`] when `start` is not registered.
/// The returned set iterates in visitation order. This is forward
/// reachability only, not an undirected-connectivity check.
pub fn connected_nodes<K: NodeKey, V>(
    graph: &Graph<K, V>,
    start: &K,
) -> GraphResult<IndexSet<K>, K> {
    if !graph.contains_node(start) {
        return Err(GraphError::UnknownNode(start.clone()));
    }

    let mut visited: IndexSet<K> = IndexSet::new();
    let mut stack = vec![start.clone()];

    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }
        for (target, _weight) in graph.neighbors(&current)? {
            if !visited.contains(target) {
                stack.push(target.clone());
            }
        }
    }

    Ok(visited)
}
