use graphforge::{
    bridge::export_graph,
    codec::{database_from_str, database_to_string},
    config::{GeneratorConfig, PerturbConfig},
    generate::generate_database,
    perturb::perturb_graph,
    store::ScriptStore,
    Database, GraphForgeError, NODE_ID_KEY,
};
use rand::Rng;

#[path = "fuzz_common.rs"]
mod fuzz_common;

fn random_database(rng: &mut impl Rng) -> Database {
    let count = rng.gen_range(1..=12);
    let names: Vec<String> = (0..count).map(|i| format!("name{i}")).collect();
    let cfg = GeneratorConfig {
        connection_chance: rng.gen_range(0..=4),
        ..GeneratorConfig::default()
    };
    generate_database(&names, &cfg, rng).expect("generate")
}

#[test]
fn fuzz_perturbed_graphs_keep_model_invariants() {
    let iterations = fuzz_common::fuzz_iterations();
    let mut rng = fuzz_common::labeled_rng("perturb-fuzz");
    for _ in 0..iterations {
        let mut database = random_database(&mut rng);
        let cfg = PerturbConfig {
            chance: rng.gen_range(0.0..1.0),
            iterations: rng.gen_range(0..=6),
            relationship_type: "KNOWS".to_string(),
        };
        match perturb_graph(&mut database.graph, &cfg, &mut rng) {
            Ok(()) => {}
            Err(GraphForgeError::EmptyGraph(_)) => continue,
            Err(other) => panic!("unexpected perturb error: {other}"),
        }
        let index = database.graph.node_index();
        for node in &database.graph.nodes {
            assert!(node.property(NODE_ID_KEY).is_ok());
        }
        // Detach-on-delete keeps every surviving relationship resolvable.
        for rel in &database.graph.relationships {
            assert!(index.contains_key(rel.node_a().id()));
            assert!(index.contains_key(rel.node_b().id()));
        }
    }
}

#[test]
fn fuzz_json_round_trip_reproduces_database() {
    let iterations = fuzz_common::fuzz_iterations();
    let mut rng = fuzz_common::labeled_rng("roundtrip-fuzz");
    for _ in 0..iterations {
        let database = random_database(&mut rng);
        let text = database_to_string(&database).expect("encode");
        let decoded = database_from_str(&text).expect("decode");
        assert_eq!(decoded, database);
        for (restored, original) in decoded
            .graph
            .relationships
            .iter()
            .zip(&database.graph.relationships)
        {
            assert!(restored.eq_including_properties(original));
        }
    }
}

#[test]
fn fuzz_export_renders_one_command_per_entity() {
    let iterations = fuzz_common::fuzz_iterations();
    let mut rng = fuzz_common::labeled_rng("export-fuzz");
    for _ in 0..iterations {
        let database = random_database(&mut rng);
        let batch_size = rng.gen_range(1..=8);
        let store = ScriptStore::new(Vec::new());
        export_graph(&database.graph, &store, batch_size).expect("export");
        let script = String::from_utf8(store.into_inner().expect("writer")).expect("utf8");
        let expected = database.graph.nodes.len() + database.graph.relationships.len();
        assert_eq!(script.lines().count(), expected);
    }
}
