//! JSON codec for graphs and databases.
//!
//! The wire shape is stable:
//! `{ "name": ..., "graph": { "nodes": [...], "relationships": [...] } }`
//! with relationships referencing nodes by id. Decoding resolves nodes
//! fully first, then relationships against the id index; that ordering is a
//! contract, not an optimization.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    errors::GraphForgeError,
    model::{Database, Graph, Node, PropertyMap, Relationship},
};

#[derive(Serialize, Deserialize)]
struct NodeDoc {
    node_types: Vec<String>,
    properties: PropertyMap,
}

#[derive(Serialize, Deserialize)]
struct RelationshipDoc {
    node_a: String,
    relationship_type: String,
    node_b: String,
    properties: PropertyMap,
}

#[derive(Serialize, Deserialize)]
struct GraphDoc {
    nodes: Vec<NodeDoc>,
    relationships: Vec<RelationshipDoc>,
}

#[derive(Serialize, Deserialize)]
struct DatabaseDoc {
    name: String,
    graph: GraphDoc,
}

fn malformed(err: serde_json::Error) -> GraphForgeError {
    GraphForgeError::malformed_graph(err.to_string())
}

fn node_doc(node: &Node) -> NodeDoc {
    NodeDoc {
        node_types: node.node_types().to_vec(),
        properties: node.properties().clone(),
    }
}

fn relationship_doc(rel: &Relationship) -> RelationshipDoc {
    RelationshipDoc {
        node_a: rel.node_a().id().to_string(),
        relationship_type: rel.relationship_type().to_string(),
        node_b: rel.node_b().id().to_string(),
        properties: rel.properties().clone(),
    }
}

fn graph_doc(graph: &Graph) -> GraphDoc {
    GraphDoc {
        nodes: graph.nodes.iter().map(node_doc).collect(),
        relationships: graph.relationships.iter().map(relationship_doc).collect(),
    }
}

fn node_from_doc(doc: NodeDoc) -> Result<Node, GraphForgeError> {
    Node::new(doc.node_types, doc.properties)
}

fn relationship_from_doc(
    doc: RelationshipDoc,
    index: &AHashMap<&str, &Node>,
) -> Result<Relationship, GraphForgeError> {
    let resolve = |id: &str| -> Result<Node, GraphForgeError> {
        index
            .get(id)
            .map(|node| (*node).clone())
            .ok_or_else(|| GraphForgeError::dangling_reference(format!("unknown node id {id}")))
    };
    let node_a = resolve(&doc.node_a)?;
    let node_b = resolve(&doc.node_b)?;
    Ok(Relationship::with_properties(
        node_a,
        doc.relationship_type,
        node_b,
        doc.properties,
    ))
}

fn graph_from_doc(doc: GraphDoc) -> Result<Graph, GraphForgeError> {
    let mut graph = Graph::default();
    for node in doc.nodes {
        graph.nodes.push(node_from_doc(node)?);
    }
    let index = graph.node_index();
    let mut relationships = Vec::with_capacity(doc.relationships.len());
    for rel in doc.relationships {
        relationships.push(relationship_from_doc(rel, &index)?);
    }
    graph.relationships = relationships;
    Ok(graph)
}

/// Encodes a node as `{ "node_types": [...], "properties": {...} }`.
pub fn node_to_json(node: &Node) -> Value {
    serde_json::to_value(node_doc(node)).unwrap_or(Value::Null)
}

/// Decodes a node document; a missing or mistyped key is a malformed-graph
/// error naming the key.
pub fn node_from_json(value: &Value) -> Result<Node, GraphForgeError> {
    let doc: NodeDoc = serde_json::from_value(value.clone()).map_err(malformed)?;
    node_from_doc(doc)
}

/// Encodes a relationship by endpoint ids.
pub fn relationship_to_json(rel: &Relationship) -> Value {
    serde_json::to_value(relationship_doc(rel)).unwrap_or(Value::Null)
}

/// Decodes a relationship document, resolving endpoint ids through the
/// already-decoded node index.
pub fn relationship_from_json(
    value: &Value,
    index: &AHashMap<&str, &Node>,
) -> Result<Relationship, GraphForgeError> {
    let doc: RelationshipDoc = serde_json::from_value(value.clone()).map_err(malformed)?;
    relationship_from_doc(doc, index)
}

/// Encodes a graph as `{ "nodes": [...], "relationships": [...] }`.
pub fn graph_to_json(graph: &Graph) -> Value {
    serde_json::to_value(graph_doc(graph)).unwrap_or(Value::Null)
}

pub fn graph_from_json(value: &Value) -> Result<Graph, GraphForgeError> {
    let doc: GraphDoc = serde_json::from_value(value.clone()).map_err(malformed)?;
    graph_from_doc(doc)
}

/// Encodes a database as `{ "name": ..., "graph": {...} }`.
pub fn database_to_json(database: &Database) -> Value {
    serde_json::to_value(DatabaseDoc {
        name: database.name.clone(),
        graph: graph_doc(&database.graph),
    })
    .unwrap_or(Value::Null)
}

pub fn database_from_json(value: &Value) -> Result<Database, GraphForgeError> {
    let doc: DatabaseDoc = serde_json::from_value(value.clone()).map_err(malformed)?;
    Ok(Database::new(graph_from_doc(doc.graph)?, doc.name))
}

/// Serializes a database to pretty-printed JSON text.
pub fn database_to_string(database: &Database) -> Result<String, GraphForgeError> {
    let doc = DatabaseDoc {
        name: database.name.clone(),
        graph: graph_doc(&database.graph),
    };
    serde_json::to_string_pretty(&doc).map_err(malformed)
}

pub fn database_from_str(text: &str) -> Result<Database, GraphForgeError> {
    let doc: DatabaseDoc = serde_json::from_str(text).map_err(malformed)?;
    Ok(Database::new(graph_from_doc(doc.graph)?, doc.name))
}

/// Writes a database document to a file, creating or truncating it.
pub fn write_database_to_path<P: AsRef<Path>>(
    database: &Database,
    path: P,
) -> Result<(), GraphForgeError> {
    let file =
        File::create(path.as_ref()).map_err(|e| GraphForgeError::invalid_input(e.to_string()))?;
    write_database_to_writer(database, BufWriter::new(file))
}

pub fn write_database_to_writer<W: Write>(
    database: &Database,
    mut writer: W,
) -> Result<(), GraphForgeError> {
    let text = database_to_string(database)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| GraphForgeError::invalid_input(e.to_string()))
}

/// Reads a database document from a file.
pub fn read_database_from_path<P: AsRef<Path>>(path: P) -> Result<Database, GraphForgeError> {
    let file =
        File::open(path.as_ref()).map_err(|e| GraphForgeError::invalid_input(e.to_string()))?;
    read_database_from_reader(BufReader::new(file))
}

pub fn read_database_from_reader<R: Read>(reader: R) -> Result<Database, GraphForgeError> {
    let doc: DatabaseDoc = serde_json::from_reader(reader).map_err(malformed)?;
    Ok(Database::new(graph_from_doc(doc.graph)?, doc.name))
}
