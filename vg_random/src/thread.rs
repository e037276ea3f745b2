/**
 * One generator per thread, each seeded once from entropy on first use.
 */

use std::cell::RefCell;
use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;
use crate::RandomSource;

thread_local! {
    static MY_RNG: RefCell<Mcg128Xsl64> = RefCell::new(Mcg128Xsl64::from_entropy());
    static CURR_SEED: RefCell<Option<u64>> = RefCell::new(None);
}

/// Handle to the calling thread's generator. Copies on different threads draw
/// from different generators, so no locking is involved.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl ThreadRandom {
    pub fn new() -> Self {
        Self
    }

    /// Re-seeds the calling thread's generator. Other threads are unaffected.
    pub fn set_seed(s: u64) {
        MY_RNG.with(|rng| {
            *rng.borrow_mut() = Mcg128Xsl64::seed_from_u64(s);
        });
        CURR_SEED.with(|se| {
            *se.borrow_mut() = Some(s);
        });
    }

    /// The last explicit seed on this thread, `None` while still on entropy.
    pub fn current_seed() -> Option<u64> {
        CURR_SEED.with(|s| {
            *s.borrow()
        })
    }
}

impl RandomSource for ThreadRandom {
    fn index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        MY_RNG.with(|rng| {
            rng.borrow_mut().gen_range(0..len)
        })
    }

    fn between(&self, min: usize, max: usize) -> usize {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        MY_RNG.with(|rng| {
            rng.borrow_mut().gen_range(lo..=hi)
        })
    }
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod thread_random_tests {
    use super::*;
    use std::thread;

    #[test]
    fn seeding_is_reproducible() {
        let rng = ThreadRandom::new();
        ThreadRandom::set_seed(1234);
        let xs: Vec<usize> = (0..50).map(|_| rng.index(100)).collect();
        ThreadRandom::set_seed(1234);
        let ys: Vec<usize> = (0..50).map(|_| rng.index(100)).collect();
        assert_eq!(xs, ys);
        assert_eq!(ThreadRandom::current_seed(), Some(1234));
    }

    #[test]
    fn seed_is_per_thread() {
        ThreadRandom::set_seed(77);
        let other = thread::spawn(|| ThreadRandom::current_seed()).join().unwrap();
        assert_eq!(other, None);
        assert_eq!(ThreadRandom::current_seed(), Some(77));
    }

    #[test]
    fn draws_stay_in_bounds() {
        let rng = ThreadRandom::new();
        for _ in 0..200 {
            assert!(rng.index(7) < 7);
            let v = rng.between(10, 12);
            assert!((10..=12).contains(&v));
        }
    }
}
