//! Node value type: a labeled, property-bearing graph vertex with a stable id.

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use uuid::Uuid;

use crate::errors::GraphForgeError;

/// Reserved property key holding a node's identifier.
pub const NODE_ID_KEY: &str = "node_id";

/// Insertion-ordered property map. Order matters for command rendering,
/// equality does not depend on it.
pub type PropertyMap = IndexMap<String, String>;

/// A property-graph node.
///
/// Every node carries at least one type label and always has an id stored
/// under the reserved [`NODE_ID_KEY`] property. Construction enforces both.
#[derive(Debug, Clone)]
pub struct Node {
    node_types: Vec<String>,
    properties: PropertyMap,
}

impl Node {
    /// Creates a node from a list of type labels and a property map.
    ///
    /// If `properties` already contains [`NODE_ID_KEY`] that value is kept,
    /// otherwise a random UUID id is generated.
    pub fn new<I, S>(node_types: I, properties: PropertyMap) -> Result<Self, GraphForgeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build(node_types, properties, None)
    }

    /// Creates a node with an explicitly supplied id.
    ///
    /// A `node_id` already present in `properties` still takes precedence
    /// over `given_id`.
    pub fn with_id<I, S>(
        node_types: I,
        properties: PropertyMap,
        given_id: &str,
    ) -> Result<Self, GraphForgeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build(node_types, properties, Some(given_id.to_string()))
    }

    /// Creates a single-type node, normalizing the label into a one-element
    /// type list.
    pub fn with_type(node_type: &str, properties: PropertyMap) -> Result<Self, GraphForgeError> {
        Self::build([node_type], properties, None)
    }

    fn build<I, S>(
        node_types: I,
        mut properties: PropertyMap,
        given_id: Option<String>,
    ) -> Result<Self, GraphForgeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let node_types: Vec<String> = node_types.into_iter().map(Into::into).collect();
        if node_types.is_empty() {
            return Err(GraphForgeError::invalid_node(
                "cannot create a node without at least one type",
            ));
        }
        if !properties.contains_key(NODE_ID_KEY) {
            let id = given_id.unwrap_or_else(|| Uuid::new_v4().to_string());
            properties.insert(NODE_ID_KEY.to_string(), id);
        }
        Ok(Self {
            node_types,
            properties,
        })
    }

    pub fn node_types(&self) -> &[String] {
        &self.node_types
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// The node id, read through the [`NODE_ID_KEY`] property.
    pub fn id(&self) -> &str {
        // Construction guarantees the key exists and nothing removes it.
        self.properties
            .get(NODE_ID_KEY)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Replaces the node id, writing through to the [`NODE_ID_KEY`] property.
    pub fn set_id<T: Into<String>>(&mut self, id: T) {
        self.properties.insert(NODE_ID_KEY.to_string(), id.into());
    }

    /// Looks up a property value by key.
    pub fn property(&self, key: &str) -> Result<&str, GraphForgeError> {
        self.properties
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| GraphForgeError::property_not_found(key))
    }

    pub fn set_property<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.properties.insert(key.into(), value.into());
    }

    fn type_set(&self) -> BTreeSet<&str> {
        self.node_types.iter().map(String::as_str).collect()
    }
}

/// Nodes compare by unordered type set plus the full property map
/// (`node_id` included). Property map equality ignores insertion order.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.type_set() == other.type_set() && self.properties == other.properties
    }
}

impl Eq for Node {}

/// Set identity hashes the sorted type set and the id only, so deduplicating
/// collections group candidates by (types, id) before the full equality check.
impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for node_type in self.type_set() {
            node_type.hash(state);
        }
        self.id().hash(state);
    }
}
