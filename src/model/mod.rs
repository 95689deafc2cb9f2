//! Core graph model: nodes, relationships, graphs, and named databases.

mod graph;
mod node;
mod relationship;

pub use graph::{Database, Graph};
pub use node::{Node, PropertyMap, NODE_ID_KEY};
pub use relationship::Relationship;
