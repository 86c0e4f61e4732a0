use std::fmt;
use std::fmt::Formatter;

/// Fatal parsing error
#[derive(Clone, PartialEq, Eq)]
pub struct ParseError {
    offset: usize,
    kind: ErrorKind,
}

impl ParseError {
    pub fn new(offset: usize, kind: ErrorKind) -> Self {
        Self { offset, kind }
    }

    /// Byte offset in the input where the error was detected.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input ended where a delimiter was required
    UnexpectedEndOfInput { expected: char },
    /// Other character found where a delimiter was required
    UnexpectedCharacter { expected: char, found: char },
    /// Key was already seen earlier in the same input
    DuplicateKey { key: String },
    /// Unknown encoding label
    #[cfg(feature = "encoding")]
    UnsupportedEncoding(String),
    /// Input contained byte sequences not valid in its encoding
    #[cfg(feature = "encoding")]
    MalformedInput { encoding: &'static str },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UnexpectedEndOfInput { expected } => {
                write!(f, "unexpected end of input, expected `{}`", expected)
            }
            ErrorKind::UnexpectedCharacter { expected, found } => {
                write!(f, "expected `{}` but found {:?}", expected, found)
            }
            ErrorKind::DuplicateKey { key } => write!(f, "key {:?} already present", key),
            #[cfg(feature = "encoding")]
            ErrorKind::UnsupportedEncoding(label) => write!(f, "unsupported encoding {:?}", label),
            #[cfg(feature = "encoding")]
            ErrorKind::MalformedInput { encoding } => {
                write!(f, "malformed {} input", encoding)
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.kind, self.offset)
    }
}

impl fmt::Debug for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseError")
            .field("offset", &self.offset)
            .field("message", &self.kind.to_string())
            .finish()
    }
}

impl std::error::Error for ParseError {}
