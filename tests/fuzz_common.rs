use rand::{rngs::StdRng, SeedableRng};
use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

pub fn fuzz_iterations() -> usize {
    std::env::var("GRAPHFORGE_FUZZ_ITERS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(128)
}

pub fn labeled_rng(label: &str) -> StdRng {
    let mut hasher = DefaultHasher::new();
    label.hash(&mut hasher);
    StdRng::seed_from_u64(hasher.finish())
}
