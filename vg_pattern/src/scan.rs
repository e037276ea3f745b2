/**
 * Recognisers for the constructs each rewrite stage looks for.
 */

use crate::ast::{Atom, AtomKind, ClassElement, Quantified, Quantifier};

/*
 * Reference grammar for the recognisers. Each stage only ever looks for one
 * of these at a time, so they are not mutually recursive:
 *
 * fixed_count ::= '{' DIGIT+ '}' ;
 *
 * quantifier  ::= '{' DIGIT+ ',' DIGIT+ '}' ;
 *
 * quantified  ::=
 *               | '(' NOT_RPAREN+ ')' quantifier
 *               | '[' NOT_RBRACKET+ ']' quantifier
 *               | '\' NOT_NEWLINE quantifier
 *               | NOT_NEWLINE quantifier
 *               ;
 *
 * alternation ::= '(' NOT_NEWLINE*? ')' ;        (shortest run)
 *
 * class       ::= '[' NOT_RBRACKET+ ']' ;
 *
 * class_elem  ::=
 *               | WORD '-' WORD
 *               | ANY
 *               ;
 *
 * shorthand   ::= '\' LETTER ;
 *
 * Recognition is leftmost-first: a stage tries the recogniser at every
 * position, and on a miss copies one character and moves on. Replacement
 * text is never scanned again by the same stage.
 */

/// A small helper to ease the Chars interface a bit
#[derive(Clone)]
pub struct Chars<'a>(std::str::Chars<'a>);

impl <'a> Chars<'a> {
    pub fn new(source: &'a str) -> Self {
        Self(source.chars())
    }

    pub fn next(&self) -> Option<(char, Chars<'a>)> {
        let mut clone = self.clone();
        clone.0.next().map(|c| (c, clone))
    }

    pub fn as_str(&self) -> &'a str {
        self.0.as_str()
    }

    /// The text between this cursor and a cursor further along the same input.
    pub fn until(&self, end: &Chars<'a>) -> &'a str {
        let s = self.as_str();
        &s[..s.len() - end.as_str().len()]
    }
}

pub type Scan<'a, T> = Option<(T, Chars<'a>)>;

fn expect(it: Chars<'_>, c: char) -> Scan<'_, ()> {
    match it.next() {
        Some((x, it)) if x == c => Some(((), it)),
        _ => None,
    }
}

fn digits(it: Chars<'_>) -> Scan<'_, &str> {
    let start = it.clone();
    let mut it = it;
    while let Some((c, next)) = it.next() {
        if !c.is_ascii_digit() {
            break;
        }
        it = next;
    }
    let text = start.until(&it);
    if text.is_empty() {
        None
    }
    else {
        Some((text, it))
    }
}

fn number(it: Chars<'_>) -> Scan<'_, usize> {
    let (text, it) = digits(it)?;
    // Overflowing counts saturate, the quantifier clamps them anyway
    let n = text.parse::<usize>().unwrap_or(usize::MAX);
    Some((n, it))
}

/// `{n}`.
pub fn fixed_count(it: Chars<'_>) -> Scan<'_, usize> {
    let ((), it) = expect(it, '{')?;
    let (n, it) = number(it)?;
    let ((), it) = expect(it, '}')?;
    Some((n, it))
}

/// `{min,max}` with `min <= max`.
pub fn quantifier(it: Chars<'_>) -> Scan<'_, Quantifier> {
    let ((), it) = expect(it, '{')?;
    let (min, it) = number(it)?;
    let ((), it) = expect(it, ',')?;
    let (max, it) = number(it)?;
    let ((), it) = expect(it, '}')?;
    Some((Quantifier::between(min, max)?, it))
}

/// Finds the next stop character for a cursor that only moves forward over
/// one input. A stop is reused until the cursor passes it and a miss is
/// final, so trying a recogniser at every position of a pass stays linear.
pub struct NextStop<'a> {
    input: &'a str,
    stops: &'static [char],
    searched_from: Option<usize>,
    at: Option<usize>,
}

impl <'a> NextStop<'a> {
    pub fn new(input: &'a str, stops: &'static [char]) -> Self {
        Self{ input, stops, searched_from: None, at: None }
    }

    pub fn groups(input: &'a str) -> Self {
        Self::new(input, &[')'])
    }

    pub fn classes(input: &'a str) -> Self {
        Self::new(input, &[']'])
    }

    /// An alternation may not span lines.
    pub fn alternations(input: &'a str) -> Self {
        Self::new(input, &[')', '\n'])
    }

    pub fn for_kind(input: &'a str, kind: AtomKind) -> Self {
        match kind {
            AtomKind::Group => Self::groups(input),
            AtomKind::Class => Self::classes(input),
            AtomKind::Single => Self::new(input, &[]),
        }
    }

    /// The first stop at or after `it`, and a cursor just past it. `it` has
    /// to be a cursor over the same input.
    pub fn find(&mut self, it: &Chars<'a>) -> Scan<'a, char> {
        let pos = self.input.len().checked_sub(it.as_str().len())?;
        let cached = match self.searched_from {
            Some(from) => from <= pos && self.at.map_or(true, |at| pos <= at),
            None => false,
        };
        if !cached {
            self.searched_from = Some(pos);
            self.at = self.input.get(pos..)?.find(self.stops).map(|i| pos + i);
        }
        let rest = self.input.get(self.at?..)?;
        let c = rest.chars().next()?;
        Some((c, Chars::new(&rest[c.len_utf8()..])))
    }
}

/// `open`, at least one character, then the first stop after it. Yields the
/// whole span, delimiters included.
fn delimited<'a>(it: Chars<'a>, open: char, stops: &mut NextStop<'a>) -> Scan<'a, &'a str> {
    let start = it.clone();
    let ((), body) = expect(it, open)?;
    let (close, next) = stops.find(&body)?;
    if body.until(&next).len() == close.len_utf8() {
        return None;
    }
    Some((start.until(&next), next))
}

pub fn group<'a>(it: Chars<'a>, stops: &mut NextStop<'a>) -> Scan<'a, &'a str> {
    delimited(it, '(', stops)
}

pub fn class<'a>(it: Chars<'a>, stops: &mut NextStop<'a>) -> Scan<'a, &'a str> {
    delimited(it, '[', stops)
}

/// The body of a `[...]` span, without the brackets.
pub fn class_body<'a>(it: Chars<'a>, stops: &mut NextStop<'a>) -> Scan<'a, &'a str> {
    let (span, it) = class(it, stops)?;
    Some((&span[1..span.len() - 1], it))
}

/// One character with a quantifier right after it. The escaped two-character
/// form is tried first, so `\d{2,2}` repeats `\d` and not `\`.
fn quantified_single(it: Chars<'_>) -> Scan<'_, Quantified<'_>> {
    let start = it.clone();
    let (c, after) = it.next()?;

    if c == '\\' {
        if let Some((escaped, after_escaped)) = after.next() {
            if escaped != '\n' {
                if let Some((quantifier, rest)) = quantifier(after_escaped.clone()) {
                    let atom = Atom::Single(start.until(&after_escaped));
                    return Some((Quantified{ atom, quantifier }, rest));
                }
            }
        }
    }

    if c == '\n' {
        return None;
    }
    let (quantifier, rest) = quantifier(after.clone())?;
    Some((Quantified{ atom: Atom::Single(start.until(&after)), quantifier }, rest))
}

/// An atom of the given kind immediately followed by `{min,max}`. `stops`
/// should come from [`NextStop::for_kind`].
pub fn quantified<'a>(it: Chars<'a>, kind: AtomKind, stops: &mut NextStop<'a>) -> Scan<'a, Quantified<'a>> {
    let (atom, it) = match kind {
        AtomKind::Group => {
            let (text, it) = group(it, stops)?;
            (Atom::Group(text), it)
        },
        AtomKind::Class => {
            let (text, it) = class(it, stops)?;
            (Atom::Class(text), it)
        },
        AtomKind::Single => return quantified_single(it),
    };
    let (quantifier, it) = quantifier(it)?;
    Some((Quantified{ atom, quantifier }, it))
}

/// `(` up to the nearest `)` on the same line. Yields the text in between,
/// which may be empty. `stops` should come from [`NextStop::alternations`].
pub fn alternation<'a>(it: Chars<'a>, stops: &mut NextStop<'a>) -> Scan<'a, &'a str> {
    let ((), start) = expect(it, '(')?;
    let (c, next) = stops.find(&start)?;
    if c != ')' {
        return None;
    }
    let inner = start.until(&next);
    Some((&inner[..inner.len() - 1], next))
}

pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A `x-y` range between word characters, or else a single character.
pub fn class_element(it: Chars<'_>) -> Scan<'_, ClassElement> {
    let (lo, after) = it.next()?;
    if is_word_char(lo) {
        if let Some(((), after_dash)) = expect(after.clone(), '-') {
            if let Some((hi, rest)) = after_dash.next() {
                if is_word_char(hi) {
                    return Some((ClassElement::Range(lo, hi), rest));
                }
            }
        }
    }
    Some((ClassElement::Literal(lo), after))
}

pub fn class_elements(body: &str) -> Vec<ClassElement> {
    let mut result = Vec::new();
    let mut it = Chars::new(body);
    while let Some((element, next)) = class_element(it.clone()) {
        result.push(element);
        it = next;
    }
    result
}

/// A backslash followed by `letter`.
pub fn shorthand(it: Chars<'_>, letter: char) -> Scan<'_, ()> {
    let ((), it) = expect(it, '\\')?;
    expect(it, letter)
}

/**
 * Driving the recognisers over a whole string.
 */

/// Replaces every leftmost, non-overlapping match of `recognise`.
pub fn replace_all<'a, F>(input: &'a str, mut recognise: F) -> String
    where F : FnMut(Chars<'a>) -> Scan<'a, String> {

    let mut result = String::with_capacity(input.len());
    let mut it = Chars::new(input);
    loop {
        if let Some((replacement, next)) = recognise(it.clone()) {
            result.push_str(&replacement);
            it = next;
            continue;
        }
        match it.next() {
            Some((c, next)) => {
                result.push(c);
                it = next;
            },
            None => break,
        }
    }
    result
}

/// Replaces every `marker` not preceded by an odd run of backslashes.
pub fn replace_unescaped<F>(input: &str, marker: char, mut replacement: F) -> String
    where F : FnMut() -> String {

    let mut result = String::with_capacity(input.len());
    let mut escaped = false;
    for c in input.chars() {
        if c == marker && !escaped {
            result.push_str(&replacement());
        }
        else {
            escaped = c == '\\' && !escaped;
            result.push(c);
        }
    }
    result
}

// Tests ///////////////////////////////////////////////////////////////////////
