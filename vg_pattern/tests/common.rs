#![allow(dead_code)]

use std::sync::Arc;
use regex::Regex;
use vg_pattern::Expander;
use vg_random::SharedRandom;

pub fn seeded_expander(seed: u64) -> Expander {
    Expander::with_rng(Arc::new(SharedRandom::with_seed(seed)))
}

/// Expands `pattern` `samples` times and checks every result against the
/// pattern itself, compiled by a real regex engine.
pub fn assert_conforms(pattern: &str, samples: usize, seed: u64) {
    let matcher = Regex::new(pattern).unwrap();
    let expander = seeded_expander(seed);
    for _ in 0..samples {
        let generated = expander.expand(pattern);
        assert!(matcher.is_match(&generated),
            "{:?} generated {:?}, which does not match", pattern, generated);
    }
}
