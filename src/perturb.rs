//! Randomized structural perturbation of graphs.
//!
//! Produces controlled noise for testing graph-diff tooling: random node
//! deletion (with detach), random relationship insertion, random
//! relationship deletion. Each action runs as a series of independent
//! Bernoulli draws, not a fixed mutation count.

use rand::{seq::SliceRandom, Rng};

use crate::{
    config::PerturbConfig,
    errors::GraphForgeError,
    model::{Graph, Relationship},
};

#[derive(Clone, Copy)]
enum Action {
    DeleteNode,
    CreateRelationship,
    DeleteRelationship,
}

// Fixed order: deletions of nodes first, then insertion, then deletion of
// relationships, matching the differ fixtures this generates.
const ACTIONS: [Action; 3] = [
    Action::DeleteNode,
    Action::CreateRelationship,
    Action::DeleteRelationship,
];

/// Perturbs `graph` in place.
///
/// For every action in the fixed list, `cfg.iterations` draws are taken
/// and the action fires when the draw lands below `cfg.chance`. A firing
/// action on an empty node/relationship list is an empty-graph error.
pub fn perturb_graph<R: Rng>(
    graph: &mut Graph,
    cfg: &PerturbConfig,
    rng: &mut R,
) -> Result<(), GraphForgeError> {
    for action in ACTIONS {
        for _ in 0..cfg.iterations {
            if rng.gen_range(0.0..1.0) < cfg.chance {
                apply(action, graph, cfg, rng)?;
            }
        }
    }
    Ok(())
}

/// Perturbs a copy of `graph`, leaving the input untouched.
///
/// The clone is a full value copy of nodes and relationships; on a large
/// graph that doubles resident memory for the duration of the call.
pub fn perturb_graph_copy<R: Rng>(
    graph: &Graph,
    cfg: &PerturbConfig,
    rng: &mut R,
) -> Result<Graph, GraphForgeError> {
    let mut copy = graph.clone();
    perturb_graph(&mut copy, cfg, rng)?;
    Ok(copy)
}

fn apply<R: Rng>(
    action: Action,
    graph: &mut Graph,
    cfg: &PerturbConfig,
    rng: &mut R,
) -> Result<(), GraphForgeError> {
    match action {
        Action::DeleteNode => delete_random_node(graph, rng),
        Action::CreateRelationship => {
            create_random_relationship(graph, &cfg.relationship_type, rng)
        }
        Action::DeleteRelationship => delete_random_relationship(graph, rng),
    }
}

/// Removes one uniformly chosen node after dropping every relationship
/// touching it.
pub fn delete_random_node<R: Rng>(graph: &mut Graph, rng: &mut R) -> Result<(), GraphForgeError> {
    if graph.nodes.is_empty() {
        return Err(GraphForgeError::empty_graph(
            "no nodes left to delete",
        ));
    }
    let index = rng.gen_range(0..graph.nodes.len());
    let node = graph.nodes.remove(index);
    graph.detach_node(&node);
    Ok(())
}

/// Adds a relationship between two uniformly chosen nodes. Picks are with
/// replacement, so self-loops are possible.
pub fn create_random_relationship<R: Rng>(
    graph: &mut Graph,
    relationship_type: &str,
    rng: &mut R,
) -> Result<(), GraphForgeError> {
    let node_a = graph
        .nodes
        .choose(rng)
        .cloned()
        .ok_or_else(|| GraphForgeError::empty_graph("no nodes to connect"))?;
    let node_b = graph
        .nodes
        .choose(rng)
        .cloned()
        .ok_or_else(|| GraphForgeError::empty_graph("no nodes to connect"))?;
    graph
        .relationships
        .push(Relationship::new(node_a, relationship_type, node_b));
    Ok(())
}

/// Removes one uniformly chosen relationship.
pub fn delete_random_relationship<R: Rng>(
    graph: &mut Graph,
    rng: &mut R,
) -> Result<(), GraphForgeError> {
    if graph.relationships.is_empty() {
        return Err(GraphForgeError::empty_graph(
            "no relationships left to delete",
        ));
    }
    let index = rng.gen_range(0..graph.relationships.len());
    graph.relationships.remove(index);
    Ok(())
}
