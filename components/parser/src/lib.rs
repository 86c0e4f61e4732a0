//! Parser for flat string maps
//!
//! A document is a sequence of `key=value;` pairs:
//!
//! ```text
//! document   ::= (pair ";")*
//! pair       ::= identifier "=" identifier
//! identifier ::= letter*
//! ```
//!
//! Letters are ASCII letters and non-ASCII characters with the Unicode
//! `Alphabetic` property. Identifiers may be empty. Every pair has to be
//! terminated by `;` and keys must be unique.
//!
//! ```
//! let map = strmap_parser::parse("foo=bar;baz=something;").unwrap();
//! assert_eq!(map["foo"], "bar");
//! assert_eq!(map["baz"], "something");
//! ```

use std::collections::HashMap;
use std::fmt;

pub use error::{ErrorKind, ParseError};
use parser::cursor::Cursor;
pub use reader::Reader;

#[cfg(feature = "encoding")]
pub mod encoding;
mod error;
pub mod parser;
mod reader;

/// Result of [`parse`]
pub type StringMap = HashMap<String, String>;

/// Single `key=value` pair borrowed from the input
#[derive(Clone, PartialEq, Eq)]
pub struct Pair<'a> {
    key: &'a str,
    value: &'a str,
    offset: usize,
}

impl<'a> Pair<'a> {
    pub fn new(key: &'a str, value: &'a str, offset: usize) -> Self {
        Self { key, value, offset }
    }

    pub fn key(&self) -> &'a str {
        self.key
    }

    pub fn value(&self) -> &'a str {
        self.value
    }

    /// Byte offset of the key in the input.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<'a> fmt::Debug for Pair<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pair")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("offset", &self.offset)
            .finish()
    }
}

/// Parse a whole document into a map.
///
/// Fails on the first error; no partial map is returned.
pub fn parse(raw: &str) -> Result<StringMap, ParseError> {
    let result = parse_document(Reader::new(raw));
    match &result {
        Ok(map) => log::debug!("parsed {} pairs", map.len()),
        Err(err) => log::debug!("failed to parse string map: {}", err),
    }
    result
}

fn parse_document(mut reader: Reader<'_>) -> Result<StringMap, ParseError> {
    let mut result = StringMap::new();

    while let Some(pair) = reader.next()? {
        if result.contains_key(pair.key()) {
            return Err(ParseError::new(
                pair.offset(),
                ErrorKind::DuplicateKey {
                    key: pair.key().to_string(),
                },
            ));
        }

        result.insert(pair.key().to_string(), pair.value().to_string());
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn map(pairs: &[(&str, &str)]) -> StringMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn parse_err(raw: &str) -> ParseError {
        match parse(raw) {
            Ok(map) => panic!("expected error for {:?}, got {:?}", raw, map),
            Err(err) => err,
        }
    }

    #[test]
    fn two_pairs() {
        assert_eq!(
            parse("foo=bar;baz=something;"),
            Ok(map(&[("foo", "bar"), ("baz", "something")]))
        );
    }

    #[test]
    fn empty_document() {
        assert_eq!(parse(""), Ok(StringMap::new()));
    }

    #[test]
    fn duplicate_key() {
        let err = parse_err("foo=bar;foo=baz;");
        assert_eq!(err.offset(), 8);
        assert_eq!(
            err.into_kind(),
            ErrorKind::DuplicateKey {
                key: "foo".to_string()
            }
        );
    }

    #[test]
    fn duplicate_key_reported_before_missing_terminator() {
        let err = parse_err("foo=bar;foo=baz");
        assert_matches!(err.kind(), ErrorKind::DuplicateKey { key } if key == "foo");
    }

    #[test]
    fn duplicate_key_anywhere() {
        let err = parse_err("a=x;b=y;c=z;b=w;d=v;");
        assert_eq!(err.offset(), 12);
        assert_matches!(err.kind(), ErrorKind::DuplicateKey { key } if key == "b");
    }

    #[test]
    fn duplicate_empty_key() {
        let err = parse_err("=a;=b;");
        assert_matches!(err.kind(), ErrorKind::DuplicateKey { key } if key.is_empty());
    }

    #[test]
    fn missing_terminator() {
        let err = parse_err("foo=bar");
        assert_eq!(err.offset(), 7);
        assert_matches!(err.kind(), ErrorKind::UnexpectedEndOfInput { expected: ';' });
    }

    #[test]
    fn missing_equals_at_end() {
        let err = parse_err("foo=bar;baz");
        assert_eq!(err.offset(), 11);
        assert_matches!(err.kind(), ErrorKind::UnexpectedEndOfInput { expected: '=' });
    }

    #[test]
    fn key_starting_with_digit() {
        let err = parse_err("1oo=bar;");
        assert_eq!(err.offset(), 0);
        assert_matches!(
            err.kind(),
            ErrorKind::UnexpectedCharacter {
                expected: '=',
                found: '1'
            }
        );
    }

    #[test]
    fn substituted_delimiter() {
        let err = parse_err("foo-bar;");
        assert_eq!(err.offset(), 3);
        assert_matches!(
            err.kind(),
            ErrorKind::UnexpectedCharacter {
                expected: '=',
                found: '-'
            }
        );
    }

    #[test]
    fn digit_in_value() {
        let err = parse_err("foo=bar1;");
        assert_eq!(err.offset(), 7);
        assert_matches!(
            err.kind(),
            ErrorKind::UnexpectedCharacter {
                expected: ';',
                found: '1'
            }
        );
    }

    #[test]
    fn whitespace_is_not_skipped() {
        assert_matches!(
            parse_err("foo = bar;").kind(),
            ErrorKind::UnexpectedCharacter {
                expected: '=',
                found: ' '
            }
        );
        assert_matches!(
            parse_err("foo=bar; ").kind(),
            ErrorKind::UnexpectedCharacter {
                expected: '=',
                found: ' '
            }
        );
    }

    #[test]
    fn empty_key_and_value() {
        assert_eq!(parse("=foo;"), Ok(map(&[("", "foo")])));
        assert_eq!(parse("foo=;"), Ok(map(&[("foo", "")])));
        assert_eq!(parse("=;"), Ok(map(&[("", "")])));
    }

    #[test]
    fn unicode_letters() {
        assert_eq!(
            parse("schlüssel=wert;ключ=значение;"),
            Ok(map(&[("schlüssel", "wert"), ("ключ", "значение")]))
        );
    }

    #[test]
    fn unicode_offsets_are_bytes() {
        let err = parse_err("ä=ö");
        assert_eq!(err.offset(), "ä=ö".len());
    }

    #[test]
    fn no_state_between_calls() {
        assert!(parse("foo=bar;").is_ok());
        assert_eq!(parse("foo=baz;"), Ok(map(&[("foo", "baz")])));
    }

    #[test]
    fn round_trip_any_order() {
        let expected = map(&[
            ("alpha", "one"),
            ("beta", ""),
            ("gamma", "three"),
            ("", "empty"),
            ("Delta", "Four"),
        ]);

        let mut pairs: Vec<_> = expected.iter().collect();
        for rotation in 0..pairs.len() {
            pairs.rotate_left(1);
            let mut raw = String::new();
            for (k, v) in &pairs {
                raw.push_str(&format!("{}={};", k, v));
            }
            assert_eq!(parse(&raw).as_ref(), Ok(&expected), "rotation {}", rotation);
        }

        pairs.reverse();
        let raw: String = pairs.iter().map(|(k, v)| format!("{}={};", k, v)).collect();
        assert_eq!(parse(&raw), Ok(expected));
    }
}
