//! Relationship value type: a typed edge between two nodes.

use std::hash::{Hash, Hasher};

use super::node::{Node, PropertyMap};

/// A typed relationship between two nodes, optionally carrying properties.
///
/// Endpoints are held by value; the owning [`Graph`](super::Graph) is the
/// source of truth for which nodes actually exist. The model does not
/// enforce referential integrity, loaders construct nodes before
/// relationships.
#[derive(Debug, Clone)]
pub struct Relationship {
    node_a: Node,
    relationship_type: String,
    node_b: Node,
    properties: PropertyMap,
}

impl Relationship {
    pub fn new<T: Into<String>>(node_a: Node, relationship_type: T, node_b: Node) -> Self {
        Self::with_properties(node_a, relationship_type, node_b, PropertyMap::new())
    }

    pub fn with_properties<T: Into<String>>(
        node_a: Node,
        relationship_type: T,
        node_b: Node,
        properties: PropertyMap,
    ) -> Self {
        Self {
            node_a,
            relationship_type: relationship_type.into(),
            node_b,
            properties,
        }
    }

    pub fn node_a(&self) -> &Node {
        &self.node_a
    }

    pub fn relationship_type(&self) -> &str {
        &self.relationship_type
    }

    pub fn node_b(&self) -> &Node {
        &self.node_b
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// True if either endpoint equals `node`.
    pub fn touches(&self, node: &Node) -> bool {
        &self.node_a == node || &self.node_b == node
    }

    /// Strict comparison that, unlike `==`, also requires equal property
    /// maps. `==` deliberately ignores properties so that duplicate store
    /// records with drifting properties collapse under set semantics.
    pub fn eq_including_properties(&self, other: &Self) -> bool {
        self == other && self.properties == other.properties
    }
}

/// Relationships compare by (type, endpoints); properties are excluded.
impl PartialEq for Relationship {
    fn eq(&self, other: &Self) -> bool {
        self.relationship_type == other.relationship_type
            && self.node_a == other.node_a
            && self.node_b == other.node_b
    }
}

impl Eq for Relationship {}

impl Hash for Relationship {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.relationship_type.hash(state);
        self.node_a.hash(state);
        self.node_b.hash(state);
    }
}
