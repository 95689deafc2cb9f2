use graphforge::{
    codec::{
        database_from_json, database_from_str, database_to_json, database_to_string,
        graph_from_json, graph_to_json, node_from_json, node_to_json, read_database_from_path,
        write_database_to_path,
    },
    Database, Graph, GraphForgeError, Node, PropertyMap, Relationship, NODE_ID_KEY,
};
use serde_json::json;

fn props(pairs: &[(&str, &str)]) -> PropertyMap {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn sample_database() -> Database {
    let a = Node::new(["Person"], props(&[("name", "Alice"), (NODE_ID_KEY, "1")])).expect("node");
    let b = Node::new(["Person"], props(&[("name", "Bob"), (NODE_ID_KEY, "2")])).expect("node");
    let rel =
        Relationship::with_properties(a.clone(), "KNOWS", b.clone(), props(&[("since", "2024")]));
    Database::new(Graph::new(vec![a, b], vec![rel]), "TestDatabase")
}

#[test]
fn test_node_round_trip() {
    let node = Node::new(["Person", "Admin"], props(&[("name", "Alice")])).expect("node");
    let decoded = node_from_json(&node_to_json(&node)).expect("decode");
    assert_eq!(decoded, node);
}

#[test]
fn test_node_document_shape() {
    let node = Node::new(["Person"], props(&[(NODE_ID_KEY, "1")])).expect("node");
    assert_eq!(
        node_to_json(&node),
        json!({"node_types": ["Person"], "properties": {"node_id": "1"}})
    );
}

#[test]
fn test_node_decode_missing_key_names_it() {
    let err = node_from_json(&json!({"properties": {}})).unwrap_err();
    assert!(matches!(err, GraphForgeError::MalformedGraph(_)));
    assert!(err.to_string().contains("node_types"));
}

#[test]
fn test_node_decode_empty_types_is_invalid() {
    let err = node_from_json(&json!({"node_types": [], "properties": {}})).unwrap_err();
    assert!(matches!(err, GraphForgeError::InvalidNode(_)));
}

#[test]
fn test_database_round_trip() {
    let database = sample_database();
    let decoded = database_from_json(&database_to_json(&database)).expect("decode");
    assert_eq!(decoded, database);
}

#[test]
fn test_round_trip_preserves_relationship_properties() {
    let database = sample_database();
    let decoded = database_from_str(&database_to_string(&database).expect("encode"))
        .expect("decode");
    let original = &database.graph.relationships[0];
    let restored = &decoded.graph.relationships[0];
    assert!(restored.eq_including_properties(original));
}

#[test]
fn test_graph_decode_resolves_relationships_against_nodes() {
    let value = graph_to_json(&sample_database().graph);
    let graph = graph_from_json(&value).expect("decode");
    let rel = &graph.relationships[0];
    assert_eq!(rel.node_a().id(), "1");
    assert_eq!(rel.node_b().id(), "2");
    assert!(graph.nodes.contains(rel.node_a()));
    assert!(graph.nodes.contains(rel.node_b()));
}

#[test]
fn test_graph_decode_dangling_reference_fails() {
    let value = json!({
        "nodes": [{"node_types": ["A"], "properties": {"node_id": "1"}}],
        "relationships": [{
            "node_a": "1",
            "relationship_type": "KNOWS",
            "node_b": "missing",
            "properties": {}
        }]
    });
    let err = graph_from_json(&value).unwrap_err();
    assert!(matches!(err, GraphForgeError::DanglingReference(_)));
    assert!(err.to_string().contains("missing"));
}

#[test]
fn test_graph_decode_missing_relationships_key_fails() {
    let err = graph_from_json(&json!({"nodes": []})).unwrap_err();
    assert!(matches!(err, GraphForgeError::MalformedGraph(_)));
    assert!(err.to_string().contains("relationships"));
}

#[test]
fn test_database_from_str_rejects_invalid_json() {
    let err = database_from_str("{not json").unwrap_err();
    assert!(matches!(err, GraphForgeError::MalformedGraph(_)));
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("database.json");
    let database = sample_database();
    write_database_to_path(&database, &path).expect("write");
    let restored = read_database_from_path(&path).expect("read");
    assert_eq!(restored, database);
}

#[test]
fn test_read_missing_file_is_invalid_input() {
    let err = read_database_from_path("/nonexistent/graph.json").unwrap_err();
    assert!(matches!(err, GraphForgeError::InvalidInput(_)));
}
