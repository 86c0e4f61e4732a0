//! Pull reader over `key=value;` pairs

use std::convert::Infallible;

use strmap_chars::KeyChar;

use crate::error::{ErrorKind, ParseError};
use crate::parser::core::{kleene, raw};
use crate::parser::helper::map_error;
use crate::parser::string::char_;
use crate::parser::Parser;
use crate::{Cursor, Pair};

/// Identifier
///
/// ```text
/// identifier ::= letter*
/// ```
/// Never fails; stops in front of the first non-letter.
pub(crate) struct IdentifierToken;

impl<'a> Parser<'a> for IdentifierToken {
    type Attribute = &'a str;
    type Error = ParseError;

    fn parse(&self, cursor: Cursor<'a>) -> Result<(Self::Attribute, Cursor<'a>), Self::Error> {
        map_error(
            raw(kleene(char_(|c: char| c.is_key_letter()))),
            |never: Infallible| -> ParseError { match never {} },
        )
        .parse(cursor)
    }
}

/// Single required delimiter character, `=` or `;`
pub(crate) struct DelimiterToken(pub char);

impl<'a> Parser<'a> for DelimiterToken {
    type Attribute = ();
    type Error = ParseError;

    fn parse(&self, cursor: Cursor<'a>) -> Result<(Self::Attribute, Cursor<'a>), Self::Error> {
        match cursor.next_char() {
            None => Err(ParseError::new(
                cursor.offset(),
                ErrorKind::UnexpectedEndOfInput { expected: self.0 },
            )),
            Some(c) if c == self.0 => Ok(((), cursor.advance(c.len_utf8()))),
            Some(found) => Err(ParseError::new(
                cursor.offset(),
                ErrorKind::UnexpectedCharacter {
                    expected: self.0,
                    found,
                },
            )),
        }
    }
}

/// Pair
///
/// ```text
/// pair ::= identifier "=" identifier
/// ```
pub(crate) struct PairToken;

impl<'a> Parser<'a> for PairToken {
    type Attribute = Pair<'a>;
    type Error = ParseError;

    fn parse(&self, cursor: Cursor<'a>) -> Result<(Self::Attribute, Cursor<'a>), Self::Error> {
        let ((key, (), value), end) =
            (IdentifierToken, DelimiterToken('='), IdentifierToken).parse(cursor)?;
        Ok((Pair::new(key, value, cursor.offset()), end))
    }
}

/// Pull reader
///
/// Yields the pairs of a document in input order. The `;` terminating a pair
/// is consumed at the start of the following call, so a pair is handed out
/// before its terminator has been checked. Duplicate keys are not detected
/// here; see [`crate::parse`].
///
/// A failing call does not move the reader: calling [`Reader::next`] again
/// reports the same error.
pub struct Reader<'a> {
    cursor: Cursor<'a>,
    pending_delimiter: bool,
}

impl<'a> Reader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            pending_delimiter: false,
        }
    }

    /// Byte offset of the next unread character.
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    pub fn next(&mut self) -> Result<Option<Pair<'a>>, ParseError> {
        let mut cursor = self.cursor;
        if self.pending_delimiter {
            cursor = DelimiterToken(';').parse(cursor)?.1;
        }

        if cursor.is_at_end() {
            self.cursor = cursor;
            self.pending_delimiter = false;
            return Ok(None);
        }

        let (pair, cursor) = PairToken.parse(cursor)?;
        self.cursor = cursor;
        self.pending_delimiter = true;
        Ok(Some(pair))
    }
}
