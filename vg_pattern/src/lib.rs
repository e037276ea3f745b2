/**
 * Random strings from simplified regular expressions.
 *
 * A pattern is rewritten by a fixed sequence of stages, each of which
 * removes one kind of construct, until only literal text remains:
 *
 *  1. `^`, `/^`, `$` and `$/` at the ends are dropped
 *  2. `{n}` becomes `{n,n}`
 *  3. unescaped `?`, `*`, `+` become `{0,1}`, `{0,k}`, `{1,k}` with a fresh
 *     random `k` in `1..=9` per occurrence
 *  4. quantified groups, then classes, then single (possibly escaped)
 *     characters are repeated a random number of times
 *  5. `(a|b|c)` becomes one of its branches
 *  6. ranges inside `[...]` are spelled out
 *  7. `[...]` becomes one of its members
 *  8. `\w` becomes a lowercase letter, `\d` a digit
 *  9. unescaped `.` becomes a printable ASCII character
 * 10. remaining backslashes are removed
 *
 * Because repetition copies the text of the atom before classes and groups
 * are resolved, each copy is resolved on its own: `[0-9]{3}` yields three
 * independent digits.
 *
 * This is not a regex engine. There is no nesting of groups (an inner `(`
 * acts as a branch separator), no backreferences, no lookaround and no
 * Unicode classes. Malformed input never fails; unrecognised fragments are
 * copied to the output.
 */

pub mod ast;
pub mod scan;
pub mod stage;
mod expander;

pub use expander::{expand, Expander, PatternGenerator};
pub use stage::{Pipeline, Stage};
