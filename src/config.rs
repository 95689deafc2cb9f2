//! Option structs for the random generator and the perturber.

/// Options for random test-database generation.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Label applied to every generated node.
    pub node_type: String,
    /// Type of every generated relationship.
    pub relationship_type: String,
    /// Name of the produced database.
    pub database_name: String,
    /// Upper bound on connection attempts per node; each node draws a
    /// uniform count in `0..=connection_chance`. Higher means denser.
    pub connection_chance: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            node_type: "Person".to_string(),
            relationship_type: "KNOWS".to_string(),
            database_name: "TestDatabase".to_string(),
            connection_chance: 5,
        }
    }
}

/// Options for graph perturbation.
#[derive(Clone, Debug, PartialEq)]
pub struct PerturbConfig {
    /// Probability in [0, 1] that any single action draw fires.
    pub chance: f64,
    /// Independent draws per action.
    pub iterations: usize,
    /// Type of relationships inserted by the create action.
    pub relationship_type: String,
}

impl Default for PerturbConfig {
    fn default() -> Self {
        Self {
            chance: 0.1,
            iterations: 10,
            relationship_type: "KNOWS".to_string(),
        }
    }
}
