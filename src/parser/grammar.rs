//! The RFC 1808 URL-reference grammar, production for production.
//!
//! ```text
//! URL         = ( absoluteURL | relativeURL ) [ "#" fragment ]
//!
//! absoluteURL = generic-RL | ( scheme ":" *( uchar | reserved ) )
//! generic-RL  = scheme ":" relativeURL
//! relativeURL = net_path | abs_path | rel_path
//!
//! net_path    = "//" net_loc [ abs_path ]
//! abs_path    = "/"  rel_path
//! rel_path    = [ path ] [ ";" params ] [ "?" query ]
//!
//! path        = fsegment *( "/" segment )
//! fsegment    = 1*pchar
//! segment     =  *pchar
//!
//! params      = param *( ";" param )
//! param       = *( pchar | "/" )
//!
//! scheme      = 1*( alpha | digit | "+" | "-" | "." )
//! net_loc     =  *( pchar | ";" | "?" )
//! query       =  *( uchar | reserved )
//! fragment    =  *( uchar | reserved )
//!
//! pchar       = uchar | ":" | "@" | "&" | "="
//! uchar       = unreserved | escape
//! unreserved  = alpha | digit | safe | extra
//! escape      = "%" hex hex
//! ```
//!
//! Every production is a `Matcher<String>` whose success value is exactly
//! the slice of input it consumed, built by concatenating its sub-matches.
//! The grammar is a directed acyclic graph, so [`Grammar::new`] wires it
//! bottom-up in one pass; the fields share structure through cheap matcher
//! clones, which is also what makes `fragment` *the same matcher* as
//! `query` rather than an equivalent one.

use crate::chars;

use super::{
    choice, digit, letter, literal_char, literal_str, many, many1, maybe, satisfy, Matcher,
};

/// The named productions of RFC 1808, each independently applicable.
pub struct Grammar {
    /// hex = digit | "A".."F" | "a".."f"
    pub hex: Matcher<String>,
    /// safe = "$" | "-" | "_" | "." | "+"
    pub safe: Matcher<String>,
    /// extra = "!" | "*" | "'" | "(" | ")" | ","
    pub extra: Matcher<String>,
    /// national = "{" | "}" | "|" | "\" | "^" | "~" | "[" | "]" | "`"
    ///
    /// Defined by the RFC but referenced by no other production.
    pub national: Matcher<String>,
    /// reserved = ";" | "/" | "?" | ":" | "@" | "&" | "="
    pub reserved: Matcher<String>,
    /// punctuation = "<" | ">" | "#" | "%" | <">
    ///
    /// Defined by the RFC but referenced by no other production.
    pub punctuation: Matcher<String>,
    /// escape = "%" hex hex
    pub escape: Matcher<String>,
    /// unreserved = alpha | digit | safe | extra
    pub unreserved: Matcher<String>,
    /// uchar = unreserved | escape
    pub uchar: Matcher<String>,
    /// pchar = uchar | ":" | "@" | "&" | "="
    pub pchar: Matcher<String>,
    /// scheme = 1*( alpha | digit | "+" | "-" | "." )
    pub scheme: Matcher<String>,
    /// net_loc = *( pchar | ";" | "?" )
    pub net_loc: Matcher<String>,
    /// query = *( uchar | reserved )
    pub query: Matcher<String>,
    /// fragment = *( uchar | reserved )
    ///
    /// The same matcher value as [`query`](Self::query), not merely an
    /// equivalent one.
    pub fragment: Matcher<String>,
    /// param = *( pchar | "/" )
    pub param: Matcher<String>,
    /// params = param *( ";" param )
    pub params: Matcher<String>,
    /// segment = *pchar
    pub segment: Matcher<String>,
    /// fsegment = 1*pchar
    pub fsegment: Matcher<String>,
    /// path = fsegment *( "/" segment )
    pub path: Matcher<String>,
    /// rel_path = [ path ] [ ";" params ] [ "?" query ]
    ///
    /// All three parts are independently optional; the empty string is a
    /// valid rel_path.
    pub rel_path: Matcher<String>,
    /// abs_path = "/" rel_path
    pub abs_path: Matcher<String>,
    /// net_path = "//" net_loc [ abs_path ]
    pub net_path: Matcher<String>,
    /// relativeURL = net_path | abs_path | rel_path
    pub relative_url: Matcher<String>,
    /// generic-RL = scheme ":" relativeURL
    pub generic_rl: Matcher<String>,
    /// absoluteURL = generic-RL | ( scheme ":" *( uchar | reserved ) )
    ///
    /// The second alternative is the opaque form for scheme bodies that are
    /// not relative-URL-shaped; it is tried only after generic-RL fails.
    pub absolute_url: Matcher<String>,
    /// URL = ( absoluteURL | relativeURL ) [ "#" fragment ]
    pub url: Matcher<String>,
}

impl Grammar {
    pub fn new() -> Self {
        let hex = satisfy(chars::hex, "hex digit");
        let safe = satisfy(chars::safe, "safe character");
        let extra = satisfy(chars::extra, "extra character");
        let national = satisfy(chars::national, "national character");
        let reserved = satisfy(chars::reserved, "reserved character");
        let punctuation = satisfy(chars::punctuation, "punctuation character");

        let escape = (literal_char('%') + hex.clone() + hex.clone()).describe("escape sequence");
        let unreserved = choice(vec![letter(), digit(), safe.clone(), extra.clone()]);
        let uchar = unreserved.clone() | escape.clone();
        let pchar = choice(vec![
            uchar.clone(),
            literal_char(':'),
            literal_char('@'),
            literal_char('&'),
            literal_char('='),
        ]);

        let scheme = many1(choice(vec![
            letter(),
            digit(),
            literal_char('+'),
            literal_char('-'),
            literal_char('.'),
        ]))
        .describe("scheme");
        let net_loc = many(choice(vec![
            pchar.clone(),
            literal_char(';'),
            literal_char('?'),
        ]));
        let query = many(uchar.clone() | reserved.clone());
        let fragment = query.clone();

        let param = many(pchar.clone() | literal_char('/'));
        let params = param.clone() + many(literal_char(';') + param.clone());

        let segment = many(pchar.clone());
        let fsegment = many1(pchar.clone());
        let path = fsegment.clone() + many(literal_char('/') + segment.clone());

        let rel_path = maybe(path.clone())
            + maybe(literal_char(';') + params.clone())
            + maybe(literal_char('?') + query.clone());
        let abs_path = literal_char('/') + rel_path.clone();
        let net_path = literal_str("//") + net_loc.clone() + maybe(abs_path.clone());

        // net_path and abs_path must be tried before rel_path: rel_path
        // matches the empty string and would otherwise win against any
        // input, leaving the leading slashes dangling.
        let relative_url = choice(vec![net_path.clone(), abs_path.clone(), rel_path.clone()]);

        let generic_rl = scheme.clone() + literal_char(':') + relative_url.clone();
        let opaque = scheme.clone() + literal_char(':') + many(uchar.clone() | reserved.clone());
        let absolute_url = generic_rl.clone() | opaque;

        let url =
            (absolute_url.clone() | relative_url.clone()) + maybe(literal_char('#') + fragment.clone());

        Grammar {
            hex,
            safe,
            extra,
            national,
            reserved,
            punctuation,
            escape,
            unreserved,
            uchar,
            pchar,
            scheme,
            net_loc,
            query,
            fragment,
            param,
            params,
            segment,
            fsegment,
            path,
            rel_path,
            abs_path,
            net_path,
            relative_url,
            generic_rl,
            absolute_url,
            url,
        }
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}
