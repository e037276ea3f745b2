/**
 * The code generation capability and the fixed-alphabet generators.
 */

mod str_gen;
mod alphabet;

pub use str_gen::{CodeGenerator, CharsetGenerator, AlphabetError};
pub use alphabet::{DigitGenerator, LetterGenerator, LetterCase, WordGenerator};
pub use alphabet::{DIGITS, NON_ZERO_DIGITS, LOWERCASE, UPPERCASE, LETTERS, WORD};
