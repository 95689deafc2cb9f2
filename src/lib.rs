//! Property-graph test data toolkit.
//!
//! graphforge converts between an in-memory property-graph model, a JSON
//! serialization of it, and an external store reached over a textual
//! command protocol. It also generates random test databases and applies
//! randomized structural perturbation for differential testing of
//! graph-diff tooling.
//!
//! # Components
//!
//! - [`model`] - nodes, typed relationships, graphs, and named databases,
//!   with the identity and equality rules the rest of the crate relies on
//! - [`query`] - pure rendering of entities into store command text
//! - [`codec`] - lossless JSON round-trip plus file helpers
//! - [`bridge`] - chunked export to a [`store::GraphStore`], delete-all,
//!   and import with id resolution and deduplication
//! - [`perturb`] - Bernoulli-per-draw random structural mutation
//! - [`generate`] - random database generation from a names list
//!
//! # Quick start
//!
//! ```
//! use graphforge::config::GeneratorConfig;
//! use graphforge::generate::generate_database;
//! use graphforge::codec::{database_to_string, database_from_str};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let names = vec!["Alice".to_string(), "Bob".to_string()];
//! let mut rng = StdRng::seed_from_u64(7);
//! let database = generate_database(&names, &GeneratorConfig::default(), &mut rng)?;
//! let text = database_to_string(&database)?;
//! assert_eq!(database_from_str(&text)?, database);
//! # Ok::<(), graphforge::GraphForgeError>(())
//! ```
//!
//! The store itself is a collaborator: implement [`store::GraphStore`] over
//! a real driver, or use [`store::ScriptStore`] to render command scripts
//! offline.

pub mod bridge;
pub mod cli;
pub mod codec;
pub mod config;
pub mod errors;
pub mod generate;
pub mod model;
pub mod perturb;
pub mod query;
pub mod store;

pub use errors::GraphForgeError;
pub use model::{Database, Graph, Node, PropertyMap, Relationship, NODE_ID_KEY};
pub use store::{GraphStore, StoreRecord, StoreTransaction};
