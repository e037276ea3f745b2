/**
 * The rewrite stages of the expander, and the fixed order they run in.
 *
 * Every stage takes the whole pattern text and returns it with one kind of
 * construct eliminated. Later stages rely on earlier ones having run, e.g.
 * `[0-9]{3}` has to be repeated before the class is resolved, or the
 * quantifier would never be seen.
 */

use tracing::trace;
use vg_random::{sample, RandomSource};
use crate::ast::{AtomKind, Marker, Quantifier};
use crate::scan;

pub trait Stage : Send + Sync {
    fn name(&self) -> &'static str;
    fn rewrite(&self, input: &str, rng: &dyn RandomSource) -> String;
}

/// Removes the `^` / `/^` prefix and the `$` / `$/` suffix.
#[derive(Debug, Clone, Copy, Default)]
pub struct StripDelimiters;

impl Stage for StripDelimiters {
    fn name(&self) -> &'static str { "strip-delimiters" }

    fn rewrite(&self, input: &str, _rng: &dyn RandomSource) -> String {
        let s = input.strip_prefix('/').unwrap_or(input);
        let s = s.strip_prefix('^').unwrap_or(s);
        let s = s.strip_suffix('/').unwrap_or(s);
        let s = s.strip_suffix('$').unwrap_or(s);
        s.to_string()
    }
}

/// `{n}` becomes `{n,n}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeFixedCounts;

impl Stage for NormalizeFixedCounts {
    fn name(&self) -> &'static str { "normalize-fixed-counts" }

    fn rewrite(&self, input: &str, _rng: &dyn RandomSource) -> String {
        scan::replace_all(input, |it| {
            scan::fixed_count(it).map(|(n, it)| (Quantifier::exactly(n).to_string(), it))
        })
    }
}

/// Unescaped `?`, `*` and `+` become explicit bounds, one marker at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpandMarkers;

impl Stage for ExpandMarkers {
    fn name(&self) -> &'static str { "expand-markers" }

    fn rewrite(&self, input: &str, rng: &dyn RandomSource) -> String {
        let mut text = input.to_string();
        for marker in Marker::ALL.iter().copied() {
            text = scan::replace_unescaped(&text, marker.symbol(), || {
                marker.quantifier(rng).to_string()
            });
        }
        text
    }
}

/// Replaces every quantified atom with its text repeated a random number of
/// times. Groups go first, then classes, then single characters, so that the
/// closing delimiter of a group or class is never taken for a single atom.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepeatQuantified;

impl RepeatQuantified {
    pub const ORDER: [AtomKind; 3] = [AtomKind::Group, AtomKind::Class, AtomKind::Single];

    pub fn pass(input: &str, kind: AtomKind, rng: &dyn RandomSource) -> String {
        let mut stops = scan::NextStop::for_kind(input, kind);
        scan::replace_all(input, |it| {
            scan::quantified(it, kind, &mut stops).map(|(q, it)| {
                (q.atom.text().repeat(q.quantifier.pick(rng)), it)
            })
        })
    }
}

impl Stage for RepeatQuantified {
    fn name(&self) -> &'static str { "repeat-quantified" }

    fn rewrite(&self, input: &str, rng: &dyn RandomSource) -> String {
        let mut text = input.to_string();
        for kind in Self::ORDER.iter().copied() {
            text = Self::pass(&text, kind, rng);
        }
        text
    }
}

/// Each `(x|y|z)` becomes one of its branches. An inner `(` is read as `)`
/// and nested groups are not resolved on their own, so `(a(b|c))` has the
/// branches `a)b` and `c`, followed by a literal `)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveAlternation;

impl Stage for ResolveAlternation {
    fn name(&self) -> &'static str { "resolve-alternation" }

    fn rewrite(&self, input: &str, rng: &dyn RandomSource) -> String {
        let mut stops = scan::NextStop::alternations(input);
        scan::replace_all(input, |it| {
            scan::alternation(it, &mut stops).map(|(inner, it)| {
                let flattened = inner.replace('(', ")");
                let branches: Vec<&str> = flattened.split('|').collect();
                let chosen = sample(rng, &branches).map(|b| b.to_string()).unwrap_or_default();
                (chosen, it)
            })
        })
    }
}

/// Spells out every `x-y` range inside `[...]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpandClassRanges;

impl Stage for ExpandClassRanges {
    fn name(&self) -> &'static str { "expand-class-ranges" }

    fn rewrite(&self, input: &str, _rng: &dyn RandomSource) -> String {
        let mut stops = scan::NextStop::classes(input);
        scan::replace_all(input, |it| {
            scan::class_body(it, &mut stops).map(|(body, it)| {
                let mut expanded = String::with_capacity(body.len() + 2);
                expanded.push('[');
                for element in scan::class_elements(body) {
                    element.expand_into(&mut expanded);
                }
                expanded.push(']');
                (expanded, it)
            })
        })
    }
}

/// Each `[...]` becomes one of its members.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveClasses;

impl Stage for ResolveClasses {
    fn name(&self) -> &'static str { "resolve-classes" }

    fn rewrite(&self, input: &str, rng: &dyn RandomSource) -> String {
        let mut stops = scan::NextStop::classes(input);
        scan::replace_all(input, |it| {
            scan::class_body(it, &mut stops).map(|(body, it)| {
                let members: Vec<char> = body.chars().collect();
                let chosen = sample(rng, &members).map(|c| c.to_string()).unwrap_or_default();
                (chosen, it)
            })
        })
    }
}

/// `\w` becomes a lowercase letter, then `\d` becomes a digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveShorthands;

impl ResolveShorthands {
    fn pass(input: &str, letter: char, alphabet: &'static str, rng: &dyn RandomSource) -> String {
        let members = alphabet.as_bytes();
        scan::replace_all(input, |it| {
            scan::shorthand(it, letter).map(|((), it)| {
                ((members[rng.index(members.len())] as char).to_string(), it)
            })
        })
    }
}

impl Stage for ResolveShorthands {
    fn name(&self) -> &'static str { "resolve-shorthands" }

    fn rewrite(&self, input: &str, rng: &dyn RandomSource) -> String {
        let text = Self::pass(input, 'w', vg_alphabet::LOWERCASE, rng);
        Self::pass(&text, 'd', vg_alphabet::DIGITS, rng)
    }
}

/// Each unescaped `.` becomes a printable ASCII character from `!` (33) to
/// `~` (126), except `\`: the next stage deletes every backslash, so a drawn
/// one would silently shorten the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveWildcards;

impl ResolveWildcards {
    const FIRST: u8 = b'!';
    const LAST: u8 = b'~';

    pub fn draw(rng: &dyn RandomSource) -> char {
        let choices = (Self::LAST - Self::FIRST) as usize;
        let mut code = Self::FIRST + rng.index(choices) as u8;
        if code >= b'\\' {
            code += 1;
        }
        code as char
    }
}

impl Stage for ResolveWildcards {
    fn name(&self) -> &'static str { "resolve-wildcards" }

    fn rewrite(&self, input: &str, rng: &dyn RandomSource) -> String {
        scan::replace_unescaped(input, '.', || Self::draw(rng).to_string())
    }
}

/// Drops every remaining backslash.
#[derive(Debug, Clone, Copy, Default)]
pub struct StripEscapes;

impl Stage for StripEscapes {
    fn name(&self) -> &'static str { "strip-escapes" }

    fn rewrite(&self, input: &str, _rng: &dyn RandomSource) -> String {
        input.replace('\\', "")
    }
}

/**
 * The ordered stage list.
 */

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self{ stages: vec![
            Box::new(StripDelimiters),
            Box::new(NormalizeFixedCounts),
            Box::new(ExpandMarkers),
            Box::new(RepeatQuantified),
            Box::new(ResolveAlternation),
            Box::new(ExpandClassRanges),
            Box::new(ResolveClasses),
            Box::new(ResolveShorthands),
            Box::new(ResolveWildcards),
            Box::new(StripEscapes),
        ] }
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|s| s.name())
    }

    pub fn run(&self, pattern: &str, rng: &dyn RandomSource) -> String {
        let mut text = pattern.to_string();
        for stage in &self.stages {
            text = stage.rewrite(&text, rng);
            trace!(stage = stage.name(), output = %text, "stage done");
        }
        text
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.stage_names()).finish()
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
