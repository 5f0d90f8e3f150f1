//! Edge implementation for the directed graph
//!
//! Edges are directed: an edge A->B does not imply B->A. At most one edge
//! exists per ordered (source, target) pair; re-inserting the pair
//! overwrites the weight.

use super::types::Weight;
use serde::{Deserialize, Serialize};

/// A directed, weighted edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<K> {
    /// Source node (edge goes FROM this node)
    pub source: K,

    /// Target node (edge goes TO this node)
    pub target: K,

    /// Non-negative finite weight
    pub weight: Weight,
}

impl<K: PartialEq> Edge<K> {
    /// Create a new directed edge
    pub fn new(source: K, target: K, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }

    /// Check if this edge goes FROM a specific node
    pub fn starts_from(&self, key: &K) -> bool {
        self.source == *key
    }

    /// Check if this edge goes TO a specific node
    pub fn ends_at(&self, key: &K) -> bool {
        self.target == *key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_edge() {
        let edge = Edge::new("a", "b", 5.0);
        assert_eq!(edge.source, "a");
        assert_eq!(edge.target, "b");
        assert_eq!(edge.weight, 5.0);
    }

    #[test]
    fn test_edge_direction() {
        let edge = Edge::new(10u64, 20u64, 1.5);

        assert!(edge.starts_from(&10));
        assert!(edge.ends_at(&20));
        assert!(!edge.starts_from(&20));
        assert!(!edge.ends_at(&10));
    }
}
