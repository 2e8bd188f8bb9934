//! The matching engine: cursor, outcome types and the top-level driver.

mod combinators;
pub mod grammar;

pub use combinators::*;

use std::rc::Rc;

use thiserror::Error;

/// An immutable position into the input text.
///
/// Advancing never mutates: it hands back a new `Cursor` over the same
/// shared text. Ordered choice and optional matching rely on this to retry
/// alternatives from a common starting point with no cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    text: Rc<str>,
    offset: usize,
}

impl Cursor {
    /// A cursor at the start of `text`.
    pub fn new(text: &str) -> Self {
        Self {
            text: Rc::from(text),
            offset: 0,
        }
    }

    /// The complete input text, regardless of the current position.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset of the current position. Always on a char boundary.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The input remaining from the current position.
    pub fn rest(&self) -> &str {
        &self.text[self.offset..]
    }

    pub fn at_end(&self) -> bool {
        self.offset == self.text.len()
    }

    /// The character at the current position, or `None` at end of input.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// A cursor one character further along.
    ///
    /// Advancing past the end is a programming error, not a match failure;
    /// callers check with [`peek`](Self::peek) or [`at_end`](Self::at_end)
    /// first.
    pub fn advance(&self) -> Cursor {
        let skipped = self.peek().expect("cursor advanced past end of input");
        self.advance_by(skipped.len_utf8())
    }

    pub(crate) fn advance_by(&self, bytes: usize) -> Cursor {
        debug_assert!(self.text.is_char_boundary(self.offset + bytes));
        Cursor {
            text: Rc::clone(&self.text),
            offset: self.offset + bytes,
        }
    }
}

/// The input does not conform to the grammar at the attempted position.
///
/// Carries the position reached and what was expected there, purely for
/// diagnostics. A rejection is an ordinary outcome, never a program fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected} at offset {offset}")]
pub struct SyntaxRejection {
    pub offset: usize,
    pub expected: String,
}

impl SyntaxRejection {
    pub fn new(offset: usize, expected: impl Into<String>) -> Self {
        Self {
            offset,
            expected: expected.into(),
        }
    }
}

/// A successful match: the value produced and the cursor just past it.
///
/// How much input was consumed is carried implicitly by `next`; for grammar
/// productions `value` is exactly the consumed slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matched<T> {
    pub value: T,
    pub next: Cursor,
}

/// Result of applying a matcher at a cursor.
pub type Outcome<T> = Result<Matched<T>, SyntaxRejection>;

/// Anything that can be applied to a cursor to produce an [`Outcome`].
pub trait Match<T> {
    fn apply(&self, cursor: &Cursor) -> Outcome<T>;
}

impl<T, F: Fn(&Cursor) -> Outcome<T>> Match<T> for F {
    fn apply(&self, cursor: &Cursor) -> Outcome<T> {
        self(cursor)
    }
}

/// Recognize `input` as an RFC 1808 URL-reference.
///
/// Returns the input verbatim when the whole string matches the `URL`
/// production, `None` otherwise. The empty string is a valid (empty)
/// relative URL and is accepted.
///
/// ```
/// assert_eq!(urlref::parse("g:h").as_deref(), Some("g:h"));
/// assert_eq!(urlref::parse("http://a b"), None);
/// ```
pub fn parse(input: &str) -> Option<String> {
    let url = grammar::Grammar::new().url;
    match full_match(url).apply(&Cursor::new(input)) {
        Ok(matched) => Some(matched.value),
        Err(_) => None,
    }
}
