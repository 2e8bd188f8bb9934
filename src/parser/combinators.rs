use std::ops::{Add, BitOr};
use std::rc::Rc;

use super::{Cursor, Match, Matched, Outcome, SyntaxRejection};

type MatcherFn<T> = Rc<dyn Fn(&Cursor) -> Outcome<T>>;

// === Type-erased matcher ===

/// A pure function from cursor to outcome, behind `Rc` for cheap cloning.
///
/// Matchers hold no mutable state, so the same matcher may be applied
/// repeatedly against the same or different cursors - which is exactly the
/// invocation pattern backtracking choice and repetition require.
pub struct Matcher<T> {
    matcher: MatcherFn<T>,
}

impl<T> Clone for Matcher<T> {
    fn clone(&self) -> Self {
        Matcher {
            matcher: Rc::clone(&self.matcher),
        }
    }
}

impl<T: 'static> Matcher<T> {
    pub fn new<M: Match<T> + 'static>(matcher: M) -> Self {
        Matcher {
            matcher: Rc::new(move |cursor| matcher.apply(cursor)),
        }
    }

    pub fn apply(&self, cursor: &Cursor) -> Outcome<T> {
        (self.matcher)(cursor)
    }

    /// Do `self` and `other` share the same underlying matcher?
    ///
    /// Clones of one matcher compare equal; independently built matchers
    /// never do, even when they accept the same language.
    pub fn same_matcher(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.matcher, &other.matcher)
    }
}

impl<T> Match<T> for Matcher<T> {
    fn apply(&self, cursor: &Cursor) -> Outcome<T> {
        (self.matcher)(cursor)
    }
}

// === Combinators as methods ===

impl<T: 'static> Matcher<T> {
    /// Sequence: apply self, then `next` from where self stopped.
    ///
    /// The first failure propagates unchanged; `next` is never attempted
    /// after self fails.
    pub fn then<U: 'static>(self, next: Matcher<U>) -> Matcher<(T, U)> {
        Matcher::new(move |cursor: &Cursor| {
            let first = self.apply(cursor)?;
            let second = next.apply(&first.next)?;
            Ok(Matched {
                value: (first.value, second.value),
                next: second.next,
            })
        })
    }

    /// Map: transform the matched value.
    pub fn map<U: 'static, F: Fn(T) -> U + 'static>(self, f: F) -> Matcher<U> {
        Matcher::new(move |cursor: &Cursor| {
            let matched = self.apply(cursor)?;
            Ok(Matched {
                value: f(matched.value),
                next: matched.next,
            })
        })
    }

    /// Ordered choice: try self; if it fails, retry `other` from the same
    /// original cursor. First success wins; `other`'s failure is the one
    /// reported when both fail.
    pub fn or(self, other: Matcher<T>) -> Matcher<T> {
        Matcher::new(move |cursor: &Cursor| match self.apply(cursor) {
            Ok(matched) => Ok(matched),
            Err(_) => other.apply(cursor),
        })
    }

    /// Relabel this matcher's rejection for better diagnostics.
    pub fn describe(self, expected: &'static str) -> Matcher<T> {
        Matcher::new(move |cursor: &Cursor| {
            self.apply(cursor)
                .map_err(|rejection| SyntaxRejection::new(rejection.offset, expected))
        })
    }
}

// === Operator Overloading ===

/// `+` for sequence over text matchers, concatenating the matched slices.
impl Add for Matcher<String> {
    type Output = Matcher<String>;

    fn add(self, rhs: Matcher<String>) -> Self::Output {
        self.then(rhs).map(|(left, right)| left + &right)
    }
}

/// `|` for ordered choice: A | B -> A or B.
impl<T: 'static> BitOr for Matcher<T> {
    type Output = Matcher<T>;

    fn bitor(self, rhs: Matcher<T>) -> Self::Output {
        self.or(rhs)
    }
}

// === Primitive Matchers ===

/// Consume exactly one character satisfying `predicate`.
///
/// Fails without consuming on a non-matching character or at end of input.
pub fn satisfy<P: Fn(char) -> bool + 'static>(
    predicate: P,
    expected: &'static str,
) -> Matcher<String> {
    Matcher::new(move |cursor: &Cursor| match cursor.peek() {
        Some(c) if predicate(c) => Ok(Matched {
            value: c.to_string(),
            next: cursor.advance(),
        }),
        _ => Err(SyntaxRejection::new(cursor.offset(), expected)),
    })
}

/// A single ASCII letter.
pub fn letter() -> Matcher<String> {
    satisfy(|c| c.is_ascii_alphabetic(), "letter")
}

/// A single decimal digit.
pub fn digit() -> Matcher<String> {
    satisfy(|c| c.is_ascii_digit(), "digit")
}

/// Exactly the character `expected`; fails without consuming otherwise.
pub fn literal_char(expected: char) -> Matcher<String> {
    Matcher::new(move |cursor: &Cursor| match cursor.peek() {
        Some(c) if c == expected => Ok(Matched {
            value: c.to_string(),
            next: cursor.advance(),
        }),
        _ => Err(SyntaxRejection::new(cursor.offset(), format!("'{expected}'"))),
    })
}

/// Exactly the string `expected` at the current position.
///
/// A partial match is no match: the cursor is not advanced at all.
pub fn literal_str(expected: &'static str) -> Matcher<String> {
    Matcher::new(move |cursor: &Cursor| {
        if cursor.rest().starts_with(expected) {
            Ok(Matched {
                value: expected.to_string(),
                next: cursor.advance_by(expected.len()),
            })
        } else {
            Err(SyntaxRejection::new(
                cursor.offset(),
                format!("\"{expected}\""),
            ))
        }
    })
}

/// Succeeds, consuming nothing, only at end of input.
pub fn end_of_input() -> Matcher<String> {
    Matcher::new(|cursor: &Cursor| {
        if cursor.at_end() {
            Ok(Matched {
                value: String::new(),
                next: cursor.clone(),
            })
        } else {
            Err(SyntaxRejection::new(cursor.offset(), "end of input"))
        }
    })
}

// === Composition Operators ===

/// Ordered choice over a list of alternatives.
///
/// Each alternative is tried from the original cursor; the first success
/// wins and the last failure is the one reported when all of them fail.
/// Ordering is load-bearing: an alternative that is a valid prefix of a
/// later one must come after it.
pub fn choice<T: 'static>(alternatives: Vec<Matcher<T>>) -> Matcher<T> {
    Matcher::new(move |cursor: &Cursor| {
        let mut last = SyntaxRejection::new(cursor.offset(), "one of the alternatives");
        for alternative in &alternatives {
            match alternative.apply(cursor) {
                Ok(matched) => return Ok(matched),
                Err(rejection) => last = rejection,
            }
        }
        Err(last)
    })
}

/// Greedy zero-or-more repetition, concatenating the matched slices.
///
/// Never fails and never gives back a repetition to satisfy a later step:
/// if an enclosing sequence would only succeed with fewer repetitions, the
/// whole parse fails instead. Stops early if an iteration succeeds without
/// advancing, so a zero-width item cannot loop forever.
pub fn many(item: Matcher<String>) -> Matcher<String> {
    Matcher::new(move |cursor: &Cursor| {
        let mut acc = String::new();
        let mut at = cursor.clone();
        while let Ok(matched) = item.apply(&at) {
            let stalled = matched.next.offset() == at.offset();
            acc.push_str(&matched.value);
            at = matched.next;
            if stalled {
                break;
            }
        }
        Ok(Matched {
            value: acc,
            next: at,
        })
    })
}

/// Greedy one-or-more repetition.
///
/// Fails without consuming if the first application fails; from there on it
/// behaves exactly like [`many`].
pub fn many1(item: Matcher<String>) -> Matcher<String> {
    let rest = many(item.clone());
    Matcher::new(move |cursor: &Cursor| {
        let first = item.apply(cursor)?;
        let tail = rest.apply(&first.next)?;
        Ok(Matched {
            value: first.value + &tail.value,
            next: tail.next,
        })
    })
}

/// Optional: on failure, succeed with the empty string and the original
/// cursor unchanged.
pub fn maybe(item: Matcher<String>) -> Matcher<String> {
    Matcher::new(move |cursor: &Cursor| match item.apply(cursor) {
        Ok(matched) => Ok(matched),
        Err(_) => Ok(Matched {
            value: String::new(),
            next: cursor.clone(),
        }),
    })
}

/// Require `inner` to consume the entire input, returning `inner`'s value.
pub fn full_match(inner: Matcher<String>) -> Matcher<String> {
    inner.then(end_of_input()).map(|(value, _)| value)
}
