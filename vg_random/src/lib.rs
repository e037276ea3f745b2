/**
 * Random sources shared by every generator.
 *
 * Generators never seed anything themselves. They receive a source that was
 * seeded exactly once, either one locked generator shared by everybody
 * ([`SharedRandom`]) or one generator per thread ([`ThreadRandom`]).
 */

mod shared;
mod thread;

use std::sync::{Arc, OnceLock};

pub use shared::SharedRandom;
pub use thread::ThreadRandom;

/// Uniform choices, safe to draw from concurrently.
pub trait RandomSource : Send + Sync {
    /// A uniform index in `[0, len)`. Returns 0 for `len == 0`, which is
    /// never a valid index, so callers check for empty input first.
    fn index(&self, len: usize) -> usize;

    /// A uniform integer in `[min, max]`, both ends included. Reversed bounds
    /// are swapped.
    fn between(&self, min: usize, max: usize) -> usize;
}

impl <R> RandomSource for Arc<R> where R : RandomSource + ?Sized {
    fn index(&self, len: usize) -> usize {
        (**self).index(len)
    }

    fn between(&self, min: usize, max: usize) -> usize {
        (**self).between(min, max)
    }
}

impl <R> RandomSource for &R where R : RandomSource + ?Sized {
    fn index(&self, len: usize) -> usize {
        (**self).index(len)
    }

    fn between(&self, min: usize, max: usize) -> usize {
        (**self).between(min, max)
    }
}

/// Picks one element uniformly, `None` if there is nothing to pick from.
pub fn sample<'a, T>(rng: &dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        None
    }
    else {
        items.get(rng.index(items.len()))
    }
}

/// The process-wide source, seeded from entropy on first use.
pub fn shared() -> Arc<dyn RandomSource> {
    static SHARED: OnceLock<Arc<SharedRandom>> = OnceLock::new();
    SHARED.get_or_init(|| Arc::new(SharedRandom::from_entropy())).clone()
}

// Tests ///////////////////////////////////////////////////////////////////////
