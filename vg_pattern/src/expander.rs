/**
 * Turning a pattern into one concrete string.
 */

use std::sync::Arc;
use tracing::debug;
use vg_alphabet::CodeGenerator;
use vg_random::RandomSource;
use crate::stage::Pipeline;

/// Runs the rewrite stages over a pattern. Holds no state besides its random
/// source, so one expander can serve any number of threads.
pub struct Expander {
    pipeline: Pipeline,
    rng: Arc<dyn RandomSource>,
}

impl Expander {
    pub fn new() -> Self {
        Self::with_rng(vg_random::shared())
    }

    pub fn with_rng(rng: Arc<dyn RandomSource>) -> Self {
        Self{ pipeline: Pipeline::new(), rng }
    }

    /// One random string for `pattern`. Never fails: whatever a stage does
    /// not recognise ends up in the output as literal text.
    pub fn expand(&self, pattern: &str) -> String {
        let result = self.pipeline.run(pattern, self.rng.as_ref());
        debug!(pattern, result = %result, "expanded pattern");
        result
    }
}

impl Default for Expander {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Expander {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Expander").field("pipeline", &self.pipeline).finish_non_exhaustive()
    }
}

/// Expands `pattern` with the process-wide random source.
pub fn expand(pattern: &str) -> String {
    Expander::new().expand(pattern)
}

/**
 * A fixed pattern as a code generator.
 */

#[derive(Debug)]
pub struct PatternGenerator {
    pattern: String,
    expander: Expander,
}

impl PatternGenerator {
    pub fn new<S>(pattern: S) -> Self where S : Into<String> {
        Self::with_rng(pattern, vg_random::shared())
    }

    pub fn with_rng<S>(pattern: S, rng: Arc<dyn RandomSource>) -> Self where S : Into<String> {
        Self{ pattern: pattern.into(), expander: Expander::with_rng(rng) }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl CodeGenerator for PatternGenerator {
    fn generate(&self) -> String {
        self.expander.expand(&self.pattern)
    }
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod expander_tests {
    use super::*;
    use std::collections::BTreeSet;
    use vg_random::SharedRandom;

    fn expander(seed: u64) -> Expander {
        Expander::with_rng(Arc::new(SharedRandom::with_seed(seed)))
    }

    fn outputs(pattern: &str, n: usize) -> BTreeSet<String> {
        let e = expander(1);
        (0..n).map(|_| e.expand(pattern)).collect()
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn plain_text_is_unchanged() {
        let e = expander(0);
        assert_eq!(e.expand("hello world"), "hello world");
        assert_eq!(e.expand(""), "");
        assert_eq!(e.expand("G-1234"), "G-1234");
    }

    #[test]
    fn class_of_three() {
        assert_eq!(outputs("[abc]", 200), set(&["a", "b", "c"]));
    }

    #[test]
    fn exact_repetition() {
        assert_eq!(expander(2).expand("a{2,2}"), "aa");
        assert_eq!(expander(2).expand("a{2}"), "aa");
    }

    #[test]
    fn alternation_of_two() {
        assert_eq!(outputs("(cat|dog)", 200), set(&["cat", "dog"]));
    }

    #[test]
    fn digit_shorthand_repeated() {
        let e = expander(3);
        for _ in 0..100 {
            let s = e.expand(r"\d{3}");
            assert_eq!(s.len(), 3);
            assert!(s.chars().all(|c| c.is_ascii_digit()), "{}", s);
        }
    }

    #[test]
    fn quantified_class_resolves_per_copy() {
        let e = expander(4);
        let samples: Vec<String> = (0..200).map(|_| e.expand("[0-9]{3}")).collect();
        for s in &samples {
            assert_eq!(s.len(), 3);
            assert!(s.chars().all(|c| c.is_ascii_digit()), "{}", s);
        }
        let mixed = samples.iter().filter(|s| {
            let b = s.as_bytes();
            !(b[0] == b[1] && b[1] == b[2])
        }).count();
        assert!(mixed > 100, "only {} of 200 mixed", mixed);
        let distinct: BTreeSet<&String> = samples.iter().collect();
        assert!(distinct.len() > 50);
    }

    #[test]
    fn optional_prefix() {
        assert_eq!(outputs("a?b", 200), set(&["b", "ab"]));
    }

    #[test]
    fn uppercase_range() {
        assert_eq!(outputs("[A-C]", 200), set(&["A", "B", "C"]));
    }

    #[test]
    fn anchors_are_dropped() {
        assert_eq!(expander(5).expand("^abc$"), "abc");
        assert_eq!(expander(5).expand("/^abc$/"), "abc");
    }

    #[test]
    fn escaped_markers_are_literal() {
        assert_eq!(expander(6).expand(r"1\+1=2\?"), "1+1=2?");
        assert_eq!(expander(6).expand(r"a\*b"), "a*b");
        assert_eq!(expander(6).expand(r"v1\.0"), "v1.0");
    }

    #[test]
    fn star_and_plus_lengths() {
        let e = expander(7);
        for _ in 0..200 {
            let star = e.expand("xa*");
            assert!(star.starts_with('x') && (1..=10).contains(&star.len()), "{}", star);
            let plus = e.expand("a+");
            assert!((1..=9).contains(&plus.len()), "{}", plus);
            assert!(plus.chars().all(|c| c == 'a'));
        }
    }

    #[test]
    fn quantified_group_resolves_per_copy() {
        let all = outputs("(x|y){2}", 300);
        assert_eq!(all, set(&["xx", "xy", "yx", "yy"]));
    }

    #[test]
    fn word_shorthand() {
        let e = expander(8);
        for _ in 0..100 {
            let s = e.expand(r"\w\w\w");
            assert_eq!(s.len(), 3);
            assert!(s.chars().all(|c| c.is_ascii_lowercase()), "{}", s);
        }
    }

    #[test]
    fn wildcard_is_printable() {
        let e = expander(9);
        for _ in 0..300 {
            let s = e.expand("<.>");
            let chars: Vec<char> = s.chars().collect();
            assert_eq!(chars.len(), 3, "{}", s);
            assert!(('!'..='~').contains(&chars[1]), "{}", s);
        }
    }

    #[test]
    fn malformed_patterns_degrade() {
        let e = expander(10);
        assert_eq!(e.expand("(abc"), "(abc");
        assert_eq!(e.expand("[abc"), "[abc");
        assert_eq!(e.expand("[z-a]"), "[]");
        assert_eq!(e.expand("a{3,1}"), "a{3,1}");
        assert_eq!(e.expand("a{"), "a{");
        assert_eq!(e.expand(")("), ")(");
    }

    #[test]
    fn huge_counts_are_clamped() {
        let s = expander(11).expand("a{5000}");
        assert_eq!(s.len(), crate::ast::MAX_REPEAT);
    }

    #[test]
    fn same_seed_same_output() {
        let pattern = r"^[A-Z]{3}-\d{2,6}(x|y|z)?.$";
        let a = expander(12);
        let b = expander(12);
        for _ in 0..20 {
            assert_eq!(a.expand(pattern), b.expand(pattern));
        }
    }

    #[test]
    fn pattern_generator() {
        let gen = PatternGenerator::with_rng(r"^G-\d{4}$", Arc::new(SharedRandom::with_seed(13)));
        assert_eq!(gen.pattern(), r"^G-\d{4}$");
        let code = gen.generate();
        assert_eq!(code.len(), 6);
        assert!(code.starts_with("G-"));
        assert!(code[2..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn free_function_uses_shared_source() {
        assert_eq!(expand("[q]{3}"), "qqq");
    }
}
