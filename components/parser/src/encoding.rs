//! Parsing of byte input in other encodings than UTF-8

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};

use crate::{parse, ErrorKind, ParseError, StringMap};

/// Encoding of `input` from its byte order mark, UTF-8 otherwise.
pub fn guess_encoding(input: &[u8]) -> &'static Encoding {
    match Encoding::for_bom(input) {
        Some((enc, _)) => enc,
        None => UTF_8,
    }
}

/// Decode `input` to text.
///
/// Uses `known_encoding` if given, else guesses from the byte order mark. A
/// byte order mark is stripped and takes precedence over `known_encoding`.
/// Returns the text, the name of the encoding used and whether malformed
/// sequences were replaced.
pub fn decode<'a>(
    input: &'a [u8],
    known_encoding: Option<&str>,
) -> Result<(Cow<'a, str>, &'static str, bool), ParseError> {
    let encoding = match known_encoding {
        Some(enc) => Encoding::for_label(enc.as_bytes()).ok_or_else(|| {
            ParseError::new(0, ErrorKind::UnsupportedEncoding(enc.to_string()))
        })?,
        None => guess_encoding(input),
    };

    let (res, enc, errors) = encoding.decode(input);
    Ok((res, enc.name(), errors))
}

/// Decode and [`parse`] `input`.
///
/// Offsets of parse errors refer to the decoded text.
pub fn parse_bytes(input: &[u8], known_encoding: Option<&str>) -> Result<StringMap, ParseError> {
    let (text, encoding, errors) = decode(input, known_encoding)?;
    if errors {
        log::debug!("input is not valid {}", encoding);
        return Err(ParseError::new(0, ErrorKind::MalformedInput { encoding }));
    }

    parse(&text)
}
