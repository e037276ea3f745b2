/**
 * The constructs the rewrite stages recognise in a pattern.
 */

use vg_random::RandomSource;

/// Repetition counts above this are clamped.
pub const MAX_REPEAT: usize = 1000;

/// `*` and `+` draw their upper bound from `1..=UNBOUNDED_MAX`, afresh for
/// every occurrence.
pub const UNBOUNDED_MAX: usize = 9;

/// Something a `{min,max}` can be attached to. Every variant borrows the
/// exact text it was recognised from, delimiters and escapes included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Atom<'a> {
    /// `(...)`
    Group(&'a str),
    /// `[...]`
    Class(&'a str),
    /// One character, optionally preceded by a backslash
    Single(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomKind {
    Group,
    Class,
    Single,
}

impl <'a> Atom<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Atom::Group(t) | Atom::Class(t) | Atom::Single(t) => t,
        }
    }
}

/// An inclusive `(min, max)` repetition bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantifier {
    pub min: usize,
    pub max: usize,
}

impl Quantifier {
    /// `None` for reversed bounds, which are left in the text as literals.
    pub fn between(min: usize, max: usize) -> Option<Self> {
        if min > max {
            None
        }
        else {
            Some(Self{ min: min.min(MAX_REPEAT), max: max.min(MAX_REPEAT) })
        }
    }

    pub fn exactly(n: usize) -> Self {
        let n = n.min(MAX_REPEAT);
        Self{ min: n, max: n }
    }

    pub fn pick(&self, rng: &dyn RandomSource) -> usize {
        rng.between(self.min, self.max)
    }
}

impl std::fmt::Display for Quantifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{},{}}}", self.min, self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantified<'a> {
    pub atom: Atom<'a>,
    pub quantifier: Quantifier,
}

/// The shorthand quantifier characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// `?`
    Optional,
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
}

impl Marker {
    pub const ALL: [Marker; 3] = [Marker::Optional, Marker::ZeroOrMore, Marker::OneOrMore];

    pub fn symbol(self) -> char {
        match self {
            Marker::Optional => '?',
            Marker::ZeroOrMore => '*',
            Marker::OneOrMore => '+',
        }
    }

    /// The explicit bound this marker stands for. Unbounded markers get a
    /// random upper bound on every call.
    pub fn quantifier(self, rng: &dyn RandomSource) -> Quantifier {
        match self {
            Marker::Optional => Quantifier{ min: 0, max: 1 },
            Marker::ZeroOrMore => Quantifier{ min: 0, max: rng.between(1, UNBOUNDED_MAX) },
            Marker::OneOrMore => Quantifier{ min: 1, max: rng.between(1, UNBOUNDED_MAX) },
        }
    }
}

/// One member entry inside `[...]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassElement {
    Literal(char),
    Range(char, char),
}

impl ClassElement {
    /// Appends every member, a reversed range contributes nothing.
    pub fn expand_into(&self, out: &mut String) {
        match *self {
            ClassElement::Literal(c) => out.push(c),
            ClassElement::Range(lo, hi) => out.extend(lo..=hi),
        }
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
