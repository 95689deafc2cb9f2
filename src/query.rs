//! Deterministic rendering of model entities into store command text.
//!
//! Everything here is pure string generation; no I/O and no validation
//! beyond the empty-property rule. The store decides what MERGE/MATCH
//! actually do with the rendered patterns.

use crate::errors::GraphForgeError;
use crate::model::{Node, PropertyMap, Relationship};

/// Default alias for a single rendered node.
pub const DEFAULT_NODE_ALIAS: &str = "n";
/// Default aliases for relationship endpoint nodes.
pub const DEFAULT_ENDPOINT_ALIASES: (&str, &str) = ("nodeA", "nodeB");
/// Default alias for a rendered relationship.
pub const DEFAULT_RELATIONSHIP_ALIAS: &str = "r";

fn escape_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Renders a property map as `{k1: 'v1', k2: 'v2'}` in insertion order.
///
/// An empty map is an error: nodes always carry at least `node_id`, so an
/// empty map here means malformed input.
pub fn render_properties(properties: &PropertyMap) -> Result<String, GraphForgeError> {
    if properties.is_empty() {
        return Err(GraphForgeError::empty_properties(
            "cannot render an empty property map",
        ));
    }
    let rendered: Vec<String> = properties
        .iter()
        .map(|(key, value)| format!("{key}: '{}'", escape_value(value)))
        .collect();
    Ok(format!("{{{}}}", rendered.join(", ")))
}

// Relationships, unlike nodes, may legitimately be property-free.
fn render_relationship_properties(properties: &PropertyMap) -> Result<String, GraphForgeError> {
    if properties.is_empty() {
        return Ok("{}".to_string());
    }
    render_properties(properties)
}

/// Renders a node pattern: `(alias:Type1:Type2 {props})`.
pub fn render_node(node: &Node, alias: &str) -> Result<String, GraphForgeError> {
    let labels = node.node_types().join(":");
    let properties = render_properties(node.properties())?;
    Ok(format!("({alias}:{labels} {properties})"))
}

/// Renders both endpoint nodes of a relationship, comma-joined.
pub fn render_relationship_endpoints(
    rel: &Relationship,
    alias_a: &str,
    alias_b: &str,
) -> Result<String, GraphForgeError> {
    Ok(format!(
        "{}, {}",
        render_node(rel.node_a(), alias_a)?,
        render_node(rel.node_b(), alias_b)?
    ))
}

/// Renders a relationship pattern between already-bound endpoint aliases:
/// `(aliasA)-[r:TYPE {props}]-(aliasB)`.
pub fn render_relationship(
    rel: &Relationship,
    alias_a: &str,
    alias_b: &str,
    rel_alias: &str,
) -> Result<String, GraphForgeError> {
    let properties = render_relationship_properties(rel.properties())?;
    Ok(format!(
        "({alias_a})-[{rel_alias}:{} {properties}]-({alias_b})",
        rel.relationship_type()
    ))
}

/// Builds the idempotent node upsert command: `MERGE (n:... {...})`.
pub fn build_create_node_command(node: &Node) -> Result<String, GraphForgeError> {
    Ok(format!("MERGE {}", render_node(node, DEFAULT_NODE_ALIAS)?))
}

/// Builds the relationship upsert command. Both endpoints must already
/// exist in the store; a MATCH miss makes the MERGE a silent no-op there.
pub fn build_create_relationship_command(rel: &Relationship) -> Result<String, GraphForgeError> {
    let (alias_a, alias_b) = DEFAULT_ENDPOINT_ALIASES;
    Ok(format!(
        "MATCH {} MERGE {}",
        render_relationship_endpoints(rel, alias_a, alias_b)?,
        render_relationship(rel, alias_a, alias_b, DEFAULT_RELATIONSHIP_ALIAS)?
    ))
}

/// Builds a detaching node delete, removing incident relationships with it.
pub fn build_delete_node_command(node: &Node) -> Result<String, GraphForgeError> {
    Ok(format!(
        "MATCH {} DETACH DELETE {}",
        render_node(node, DEFAULT_NODE_ALIAS)?,
        DEFAULT_NODE_ALIAS
    ))
}

/// Builds a delete of one matched relationship.
pub fn build_delete_relationship_command(rel: &Relationship) -> Result<String, GraphForgeError> {
    let properties = render_relationship_properties(rel.properties())?;
    Ok(format!(
        "MATCH {}-[{rel_alias}:{} {properties}]-{} DELETE {rel_alias}",
        render_node(rel.node_a(), "a")?,
        rel.relationship_type(),
        render_node(rel.node_b(), "b")?,
        rel_alias = DEFAULT_RELATIONSHIP_ALIAS
    ))
}

/// Builds the detach-delete-all command. Irreversible; confirmation is the
/// caller's problem.
pub fn build_delete_all_command() -> String {
    "MATCH (n) DETACH DELETE n".to_string()
}

/// Builds the read-all-nodes query.
pub fn build_read_nodes_command() -> String {
    "MATCH (n) RETURN n".to_string()
}

/// Builds the read-all-relationships query. The result mixes node and
/// relationship records; callers filter by record kind.
pub fn build_read_relationships_command() -> String {
    "MATCH (n)-[r]-(m) RETURN n, r, m".to_string()
}
