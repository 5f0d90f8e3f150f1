//! Node implementation for the directed graph
//!
//! A node is a caller-supplied unique key plus an arbitrary payload value.
//! Nodes are owned exclusively by the graph's node registry and are only
//! created by explicit insertion.

use serde::{Deserialize, Serialize};

/// A graph vertex
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node<K, V> {
    /// Caller-supplied unique identifier
    pub key: K,

    /// Arbitrary payload carried by the node
    pub value: V,
}

impl<K, V> Node<K, V> {
    /// Create a new node
    pub fn new(key: K, value: V) -> Self {
        Node { key, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_node() {
        let node = Node::new("alice", 30u32);
        assert_eq!(node.key, "alice");
        assert_eq!(node.value, 30);
    }

    #[test]
    fn test_payload_is_arbitrary() {
        let node = Node::new(7u64, vec!["a", "b"]);
        assert_eq!(node.value.len(), 2);
    }
}
