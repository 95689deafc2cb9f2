//! Random test-database generation from a names list.

use std::{fs::File, io::BufReader, path::Path};

use indexmap::IndexMap;
use rand::{seq::SliceRandom, Rng};
use serde::Deserialize;

use crate::{
    config::GeneratorConfig,
    errors::GraphForgeError,
    model::{Database, Graph, Node, Relationship},
};

#[derive(Deserialize)]
struct NamesDoc {
    names: Vec<String>,
}

/// Reads a names list from a JSON file of the form `{ "names": [...] }`.
pub fn read_names_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<String>, GraphForgeError> {
    let file =
        File::open(path.as_ref()).map_err(|e| GraphForgeError::invalid_input(e.to_string()))?;
    let doc: NamesDoc = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| GraphForgeError::invalid_input(format!("invalid names file: {e}")))?;
    Ok(doc.names)
}

/// Builds a random database: one node per name, then for each node a
/// uniform number of connection attempts in `0..=connection_chance`, each
/// linking it to one uniformly chosen other node. Attempts that pick the
/// node itself are skipped, so the generator never emits self-loops.
pub fn generate_database<R: Rng>(
    names: &[String],
    cfg: &GeneratorConfig,
    rng: &mut R,
) -> Result<Database, GraphForgeError> {
    let mut nodes = Vec::with_capacity(names.len());
    for name in names {
        let mut properties = IndexMap::new();
        properties.insert("name".to_string(), name.clone());
        nodes.push(Node::with_type(&cfg.node_type, properties)?);
    }

    let mut relationships = Vec::new();
    for current in &nodes {
        let attempts = rng.gen_range(0..=cfg.connection_chance);
        for _ in 0..attempts {
            let target = nodes
                .choose(rng)
                .ok_or_else(|| GraphForgeError::empty_graph("no nodes to connect"))?;
            if target.id() == current.id() {
                continue;
            }
            relationships.push(Relationship::new(
                current.clone(),
                cfg.relationship_type.as_str(),
                target.clone(),
            ));
        }
    }

    Ok(Database::new(
        Graph::new(nodes, relationships),
        cfg.database_name.as_str(),
    ))
}
