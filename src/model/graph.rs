//! Graph and Database containers.

use ahash::AHashMap;

use super::node::Node;
use super::relationship::Relationship;

/// An in-memory property graph: nodes and relationships in insertion order.
///
/// Order is kept for deterministic output but carries no meaning. Nothing
/// here enforces that relationship endpoints exist in `nodes`; loaders are
/// responsible for constructing nodes first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub relationships: Vec<Relationship>,
}

impl Graph {
    pub fn new(nodes: Vec<Node>, relationships: Vec<Relationship>) -> Self {
        Self {
            nodes,
            relationships,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.relationships.is_empty()
    }

    /// Builds an id → node index over the current node list.
    ///
    /// Later duplicates of an id shadow earlier ones, matching the way the
    /// loaders resolve references.
    pub fn node_index(&self) -> AHashMap<&str, &Node> {
        self.nodes.iter().map(|node| (node.id(), node)).collect()
    }

    /// Removes every relationship touching `node`.
    pub fn detach_node(&mut self, node: &Node) {
        self.relationships.retain(|rel| !rel.touches(node));
    }

    /// Detaches and removes the first node equal to `node`. Returns whether
    /// a node was removed.
    pub fn remove_node(&mut self, node: &Node) -> bool {
        match self.nodes.iter().position(|candidate| candidate == node) {
            Some(index) => {
                let removed = self.nodes.remove(index);
                self.detach_node(&removed);
                true
            }
            None => false,
        }
    }
}

/// A named graph, the unit imported from or exported to a store.
#[derive(Debug, Clone, PartialEq)]
pub struct Database {
    pub graph: Graph,
    pub name: String,
}

impl Database {
    pub fn new<T: Into<String>>(graph: Graph, name: T) -> Self {
        Self {
            graph,
            name: name.into(),
        }
    }
}
