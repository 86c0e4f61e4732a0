use crate::parser::Parser;
use crate::Cursor;

/// Single character matching `predicate`.
pub fn char_<P: Fn(char) -> bool>(predicate: P) -> Char<P> {
    Char { predicate }
}

pub struct Char<P: Fn(char) -> bool> {
    predicate: P,
}

impl<'a, P: Fn(char) -> bool> Parser<'a> for Char<P> {
    type Attribute = char;
    type Error = ();

    fn parse(&self, cur: Cursor<'a>) -> Result<(Self::Attribute, Cursor<'a>), Self::Error> {
        if let Some(c) = cur.next_char() {
            if (self.predicate)(c) {
                return Ok((c, cur.advance(c.len_utf8())));
            }
        }
        Err(())
    }
}
