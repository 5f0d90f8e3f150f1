//! Graph mutation integration tests

use routegraph::{Graph, GraphError};

fn neighbor_set(graph: &Graph<&str, i64>, key: &&str) -> Vec<(String, f64)> {
    let mut pairs: Vec<(String, f64)> = graph
        .neighbors(key)
        .unwrap()
        .map(|(target, weight)| (target.to_string(), weight))
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    pairs
}

#[test]
fn test_idempotent_insert_law() {
    let mut graph = Graph::new();
    graph.add_node("n", 1);
    graph.add_node("n", 2);

    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.get_node(&"n").unwrap().value, 1);
}

#[test]
fn test_adjacency_consistency_after_remove_node() {
    let mut graph = Graph::new();
    for key in ["a", "b", "c", "d"] {
        graph.add_node(key, 0);
    }
    graph.add_edge("a", "b", 1.0).unwrap();
    graph.add_edge("b", "c", 1.0).unwrap();
    graph.add_edge("c", "b", 1.0).unwrap();
    graph.add_edge("d", "b", 1.0).unwrap();
    graph.add_edge("b", "b", 1.0).unwrap();

    graph.remove_node(&"b");

    // No surviving node may still see "b" in either direction.
    for key in ["a", "c", "d"] {
        assert!(!graph.has_edge(&key, &"b"), "{key} still points at b");
        assert!(!graph.has_edge(&"b", &key), "b still points at {key}");
        assert!(graph
            .neighbors(&key)
            .unwrap()
            .all(|(target, _)| *target != "b"));
    }
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_edge_round_trip_restores_neighbors() {
    let mut graph = Graph::new();
    for key in ["a", "b", "x"] {
        graph.add_node(key, 0);
    }
    graph.add_edge("a", "x", 7.0).unwrap();

    let before = neighbor_set(&graph, &"a");
    graph.add_edge("a", "b", 3.0).unwrap();
    graph.remove_edge(&"a", &"b");

    assert_eq!(neighbor_set(&graph, &"a"), before);
}

#[test]
fn test_no_implicit_node_creation() {
    let mut graph: Graph<&str, i64> = Graph::new();
    graph.add_node("a", 0);

    assert!(graph.add_edge("a", "b", 1.0).is_err());
    assert!(!graph.contains_node(&"b"));
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_weight_validation() {
    let mut graph = Graph::new();
    graph.add_node("a", 0);
    graph.add_node("b", 0);

    assert_eq!(
        graph.add_edge("a", "b", -0.5),
        Err(GraphError::InvalidWeight(-0.5))
    );
    assert!(matches!(
        graph.add_edge("a", "b", f64::NEG_INFINITY),
        Err(GraphError::InvalidWeight(_))
    ));
    assert!(graph.add_edge("a", "b", 0.0).is_ok());
    assert!(graph.add_edge("a", "b", 1e9).is_ok());
}

#[test]
fn test_serde_round_trip_preserves_topology() {
    let mut graph = Graph::new();
    for key in ["a", "b", "c"] {
        graph.add_node(key.to_string(), key.len() as i64);
    }
    graph.add_edge("a".to_string(), "b".to_string(), 2.5).unwrap();
    graph.add_edge("b".to_string(), "c".to_string(), 4.0).unwrap();

    let json = serde_json::to_string(&graph).unwrap();
    let restored: Graph<String, i64> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.node_count(), 3);
    assert_eq!(restored.edge_count(), 2);
    assert_eq!(
        restored.edge_weight(&"a".to_string(), &"b".to_string()),
        Some(2.5)
    );
    assert!(!restored.has_edge(&"c".to_string(), &"b".to_string()));
}
