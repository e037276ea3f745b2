/**
 * One generator behind a lock, shared by any number of threads.
 */

use std::sync::{Mutex, PoisonError};
use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;
use crate::RandomSource;

pub struct SharedRandom {
    rng: Mutex<Mcg128Xsl64>,
}

impl SharedRandom {
    pub fn from_entropy() -> Self {
        Self{ rng: Mutex::new(Mcg128Xsl64::from_entropy()) }
    }

    /// A source whose whole draw sequence is fixed by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self{ rng: Mutex::new(Mcg128Xsl64::seed_from_u64(seed)) }
    }

    fn with_rng<T, F>(&self, f: F) -> T where F : FnOnce(&mut Mcg128Xsl64) -> T {
        // A panic while holding the lock cannot leave the generator half-updated
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}

impl Default for SharedRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl std::fmt::Debug for SharedRandom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedRandom").finish_non_exhaustive()
    }
}

impl RandomSource for SharedRandom {
    fn index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.with_rng(|rng| rng.gen_range(0..len))
    }

    fn between(&self, min: usize, max: usize) -> usize {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.with_rng(|rng| rng.gen_range(lo..=hi))
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
