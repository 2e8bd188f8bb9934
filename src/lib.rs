//! # urlref - An RFC 1808 URL-Reference Recognizer
//!
//! This crate decides whether a string conforms to the URL-reference grammar
//! of [RFC 1808](http://www.ietf.org/rfc/rfc1808.txt). It is a recognizer,
//! not a URL object model: an accepted input is returned verbatim, a
//! non-conforming input is rejected, and nothing is ever decomposed into
//! scheme/host/path fields, decoded, or resolved against a base.
//!
//! ## Architecture Overview
//!
//! The crate is a small parser-combinator engine plus a grammar built from it:
//!
//! 1. **Character classes** (`chars`) - Pure classifiers for the RFC 1808
//!    terminal character classes (hex, safe, extra, national, reserved,
//!    punctuation)
//! 2. **Combinators** (`parser`) - An immutable [`Cursor`](parser::Cursor)
//!    over the input, primitive matchers (`satisfy`, literals, end-of-input)
//!    and composition operators (sequence, ordered choice, greedy repetition,
//!    optionality) over type-erased [`Matcher`](parser::Matcher) values
//! 3. **Grammar** (`parser::grammar`) - The ~25 RFC 1808 productions, each a
//!    `Matcher<String>` wired bottom-up from the combinators, production for
//!    production after the RFC's BNF
//!
//! ## Matching Model
//!
//! ```text
//! Input (&str)
//!     ↓
//! [Cursor] → immutable position into the input
//!     ↓
//! [Grammar] → recursive descent driven by the combinators
//!     ↓
//! [Outcome] → Matched { value, next } or SyntaxRejection
//!     ↓
//! [parse] → Some(input) or None
//! ```
//!
//! Three properties of the engine determine which strings are accepted:
//!
//! - **Ordered choice**: alternation is first-match-wins, not longest-match.
//!   Alternatives sharing a prefix must be listed longest first.
//! - **Greedy repetition**: `many`/`many1` consume as much as they can and
//!   never give any of it back to satisfy a later step. If a later step then
//!   fails, the whole parse fails.
//! - **Identity**: every production's success value is exactly the slice of
//!   input it consumed, so an accepted input round-trips unchanged.
//!
//! ## Example
//!
//! ```
//! let url = "http://a/b/c/d;p?q#s";
//! assert_eq!(urlref::parse(url).as_deref(), Some(url));
//!
//! // net_loc greedily swallows "foo"; the second "//" fits no production
//! // and the engine never backtracks into a shorter net_loc.
//! assert_eq!(urlref::parse("//foo//bar"), None);
//! ```

pub mod chars;
pub mod parser;

pub use parser::{parse, Cursor, Match, Matched, Outcome, SyntaxRejection};
