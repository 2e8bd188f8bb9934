//! Terminal character classes of the RFC 1808 grammar.
//!
//! The `char`-level classifiers back the grammar's `satisfy` matchers; the
//! public `&str` predicates wrap the same classifiers so the two views
//! cannot drift apart. Each `&str` predicate is trivially true for the
//! empty string and false for anything longer than one character.

pub(crate) fn hex(c: char) -> bool {
    c.is_ascii_hexdigit()
}

pub(crate) fn safe(c: char) -> bool {
    "$-_.+".contains(c)
}

pub(crate) fn extra(c: char) -> bool {
    "!*'(),".contains(c)
}

pub(crate) fn national(c: char) -> bool {
    "{}|\\^~[]`".contains(c)
}

pub(crate) fn reserved(c: char) -> bool {
    ";/?:@&=".contains(c)
}

pub(crate) fn punctuation(c: char) -> bool {
    "<>#%\"".contains(c)
}

fn at_most_one(text: &str, class: fn(char) -> bool) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        None => true,
        Some(c) => chars.next().is_none() && class(c),
    }
}

/// Is `text` empty or a single hexadecimal digit?
pub fn is_hex(text: &str) -> bool {
    at_most_one(text, hex)
}

/// Is `text` empty or a single "safe" character (`$ - _ . +`)?
pub fn is_safe(text: &str) -> bool {
    at_most_one(text, safe)
}

/// Is `text` empty or a single "extra" character (`! * ' ( ) ,`)?
pub fn is_extra(text: &str) -> bool {
    at_most_one(text, extra)
}

/// Is `text` empty or a single "national" character?
pub fn is_national(text: &str) -> bool {
    at_most_one(text, national)
}

/// Is `text` empty or a single "reserved" character (`; / ? : @ & =`)?
pub fn is_reserved(text: &str) -> bool {
    at_most_one(text, reserved)
}

/// Is `text` empty or a single "punctuation" character (`< > # % "`)?
pub fn is_punctuation(text: &str) -> bool {
    at_most_one(text, punctuation)
}
