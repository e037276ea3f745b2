/**
 * Generators over the static alphabets: digits, letters and words.
 */

use std::sync::Arc;
use tracing::trace;
use vg_random::RandomSource;
use crate::str_gen::{CodeGenerator, CharsetGenerator};

pub const DIGITS: &str = "0123456789";
pub const NON_ZERO_DIGITS: &str = "123456789";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const WORD: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

fn fixed(len: usize, charset: &'static str, rng: Arc<dyn RandomSource>) -> CharsetGenerator {
    CharsetGenerator::from_static(len, charset, rng)
}

/**
 * Digits only, optionally never starting with a zero.
 */

#[derive(Debug, Clone)]
pub struct DigitGenerator {
    inner: CharsetGenerator,
    no_leading_zero: bool,
}

impl DigitGenerator {
    pub fn new(len: usize, no_leading_zero: bool) -> Self {
        Self::with_rng(len, no_leading_zero, vg_random::shared())
    }

    pub fn with_rng(len: usize, no_leading_zero: bool, rng: Arc<dyn RandomSource>) -> Self {
        Self{ inner: fixed(len, DIGITS, rng), no_leading_zero }
    }
}

impl CodeGenerator for DigitGenerator {
    fn generate(&self) -> String {
        let mut result: Vec<char> = (0..self.inner.len()).map(|_| self.inner.draw()).collect();

        // Only the first position is redrawn, the rest stay uniform over all ten digits
        if self.no_leading_zero && result.first() == Some(&'0') {
            let non_zero = NON_ZERO_DIGITS.as_bytes();
            result[0] = non_zero[self.inner.rng().index(non_zero.len())] as char;
            trace!(replacement = %result[0], "redrew leading zero");
        }

        result.into_iter().collect()
    }
}

/**
 * Letters in one case or both.
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterCase {
    Upper,
    Lower,
    #[default]
    Mixed,
}

impl LetterCase {
    /// Two independent flags, as older configurations carry them. Upper wins
    /// when both are set, neither set means mixed.
    pub fn from_flags(all_upper: bool, all_lower: bool) -> Self {
        if all_upper {
            LetterCase::Upper
        }
        else if all_lower {
            LetterCase::Lower
        }
        else {
            LetterCase::Mixed
        }
    }

    pub fn alphabet(self) -> &'static str {
        match self {
            LetterCase::Upper => UPPERCASE,
            LetterCase::Lower => LOWERCASE,
            LetterCase::Mixed => LETTERS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LetterGenerator {
    inner: CharsetGenerator,
    case: LetterCase,
}

impl LetterGenerator {
    pub fn new(len: usize, case: LetterCase) -> Self {
        Self::with_rng(len, case, vg_random::shared())
    }

    pub fn from_flags(len: usize, all_upper: bool, all_lower: bool) -> Self {
        Self::new(len, LetterCase::from_flags(all_upper, all_lower))
    }

    pub fn with_rng(len: usize, case: LetterCase, rng: Arc<dyn RandomSource>) -> Self {
        Self{ inner: fixed(len, case.alphabet(), rng), case }
    }

    pub fn case(&self) -> LetterCase {
        self.case
    }
}

impl CodeGenerator for LetterGenerator {
    fn generate(&self) -> String {
        self.inner.generate()
    }
}

/**
 * Letters of both cases and digits.
 */

#[derive(Debug, Clone)]
pub struct WordGenerator {
    inner: CharsetGenerator,
}

impl WordGenerator {
    pub fn new(len: usize) -> Self {
        Self::with_rng(len, vg_random::shared())
    }

    pub fn with_rng(len: usize, rng: Arc<dyn RandomSource>) -> Self {
        Self{ inner: fixed(len, WORD, rng) }
    }
}

impl CodeGenerator for WordGenerator {
    fn generate(&self) -> String {
        self.inner.generate()
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
