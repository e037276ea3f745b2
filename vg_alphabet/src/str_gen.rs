/**
 * String generation strategies.
 */

use std::sync::Arc;
use thiserror::Error;
use vg_random::RandomSource;

/// Produces one fresh code per call. The shape of the result is fixed by the
/// generator, the content is random.
pub trait CodeGenerator : Send + Sync {
    fn generate(&self) -> String;
}

impl <G> CodeGenerator for Box<G> where G : CodeGenerator + ?Sized {
    fn generate(&self) -> String {
        (**self).generate()
    }
}

impl <G> CodeGenerator for Arc<G> where G : CodeGenerator + ?Sized {
    fn generate(&self) -> String {
        (**self).generate()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    #[error("alphabet must contain at least one character")]
    EmptyAlphabet,
}

/**
 * Random string of a fixed length from a charset.
 */

#[derive(Clone)]
pub struct CharsetGenerator {
    len: usize,
    charset: Vec<char>,
    rng: Arc<dyn RandomSource>,
}

impl CharsetGenerator {
    pub fn with_len_and_charset(len: usize, charset: &str) -> Result<Self, AlphabetError> {
        Self::with_rng(len, charset, vg_random::shared())
    }

    pub fn with_rng(len: usize, charset: &str, rng: Arc<dyn RandomSource>)
        -> Result<Self, AlphabetError> {

        let charset: Vec<char> = charset.chars().collect();
        if charset.is_empty() {
            return Err(AlphabetError::EmptyAlphabet);
        }
        Ok(Self{ len, charset, rng })
    }

    /// Skips validation, the built-in alphabets are never empty.
    pub(crate) fn from_static(len: usize, charset: &'static str, rng: Arc<dyn RandomSource>) -> Self {
        Self{ len, charset: charset.chars().collect(), rng }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn charset(&self) -> &[char] {
        &self.charset
    }

    pub(crate) fn rng(&self) -> &dyn RandomSource {
        self.rng.as_ref()
    }

    /// One character drawn uniformly from the charset.
    pub(crate) fn draw(&self) -> char {
        self.charset[self.rng.index(self.charset.len())]
    }
}

impl std::fmt::Debug for CharsetGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharsetGenerator")
            .field("len", &self.len)
            .field("charset", &self.charset.iter().collect::<String>())
            .finish()
    }
}

impl CodeGenerator for CharsetGenerator {
    fn generate(&self) -> String {
        (0..self.len).map(|_| self.draw()).collect()
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
