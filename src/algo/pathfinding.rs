//! Single-source shortest path (Dijkstra)
//!
//! Classic Dijkstra over the decrease-key queue in [`super::heap`]. Valid
//! only because edge weights are non-negative (the store enforces this):
//! once a node is extracted its distance is final and it is never relaxed
//! again.

use super::heap::MinPriorityQueue;
use crate::graph::{Graph, GraphError, GraphResult, NodeKey, Weight};
use rustc_hash::FxHashMap;

/// Result of a shortest-path computation
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult<K> {
    /// Node keys from start to end, inclusive
    pub path: Vec<K>,
    /// Sum of edge weights along `path`
    pub distance: Weight,
}

/// Compute the minimum-weight path from `start` to `end`.
///
/// Fails with [`GraphError::UnknownNode`] when either endpoint is not
/// registered and [`GraphError::NoPathFound`] when `end` is unreachable
/// from `start`. `shortest_path(g, s, s)` yields path `[s]` with distance
/// `0`. Ties in tentative distance resolve earliest-inserted-first (node
/// registry insertion order), so results are deterministic.
pub fn shortest_path<K: NodeKey, V>(
    graph: &Graph<K, V>,
    start: &K,
    end: &K,
) -> GraphResult<PathResult<K>, K> {
    if !graph.contains_node(start) {
        return Err(GraphError::UnknownNode(start.clone()));
    }
    if !graph.contains_node(end) {
        return Err(GraphError::UnknownNode(end.clone()));
    }

    let mut dist: FxHashMap<K, Weight> = FxHashMap::default();
    let mut prev: FxHashMap<K, K> = FxHashMap::default();
    let mut queue = MinPriorityQueue::with_capacity(graph.node_count());

    // Every node enters the queue up front, keyed by tentative distance:
    // 0 for the start, +inf for everything else.
    for key in graph.keys() {
        let tentative = if key == start { 0.0 } else { f64::INFINITY };
        dist.insert(key.clone(), tentative);
        queue.insert(tentative, key.clone());
    }

    while !queue.is_empty() {
        let (current_dist, current) = queue.extract_min()?;

        // An infinite minimum means nothing left in the queue is
        // reachable, `end` included.
        if current_dist.is_infinite() {
            break;
        }

        if current == *end {
            let mut path = vec![current];
            let mut cursor = end;
            while let Some(predecessor) = prev.get(cursor) {
                path.push(predecessor.clone());
                cursor = predecessor;
            }
            path.reverse();
            return Ok(PathResult {
                path,
                distance: current_dist,
            });
        }

        for (target, weight) in graph.neighbors(&current)? {
            let alt = current_dist + weight;
            let known = dist.get(target).copied().unwrap_or(f64::INFINITY);
            if alt < known {
                dist.insert(target.clone(), alt);
                prev.insert(target.clone(), current.clone());
                queue.decrease_key(target, alt);
            }
        }
    }

    Err(GraphError::NoPathFound(start.clone(), end.clone()))
}
