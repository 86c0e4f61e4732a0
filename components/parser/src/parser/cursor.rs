/// Read position in the input.
///
/// Cursors are cheap to copy. Parsers take a cursor by value and hand back an
/// advanced one on success, so a failed parser never moves the caller's
/// position.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Cursor<'a> {
    rest: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            rest: input,
            offset: 0,
        }
    }

    pub fn next_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Byte offset from the start of the input.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn rest(&self) -> &'a str {
        self.rest
    }

    pub fn is_at_end(&self) -> bool {
        self.rest.is_empty()
    }

    /// Skip `bytes` bytes. Panics if `bytes` is not on a char boundary.
    pub fn advance(&self, bytes: usize) -> Self {
        self.advance2(bytes).1
    }

    /// Like [`Cursor::advance`] but also returns the skipped text.
    pub fn advance2(&self, bytes: usize) -> (&'a str, Self) {
        let (diff, rest) = self.rest.split_at(bytes);
        log::trace!("advance {} at {}: {:?}", bytes, self.offset, diff);
        (
            diff,
            Self {
                rest,
                offset: self.offset + bytes,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;

    #[test]
    fn starts_at_zero() {
        let cursor = Cursor::new("foo=bar;");
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.next_char(), Some('f'));
        assert!(!cursor.is_at_end());
    }

    #[test]
    fn empty_input_is_at_end() {
        let cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.next_char(), None);
    }

    #[test]
    fn advance_moves_offset() {
        let cursor = Cursor::new("foo=bar;");
        let (skipped, next) = cursor.advance2(3);
        assert_eq!(skipped, "foo");
        assert_eq!(next.offset(), 3);
        assert_eq!(next.rest(), "=bar;");
        assert_eq!(next.next_char(), Some('='));

        // the original cursor is untouched
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn advance_counts_bytes() {
        let cursor = Cursor::new("äb");
        let next = cursor.advance('ä'.len_utf8());
        assert_eq!(next.offset(), 2);
        assert_eq!(next.next_char(), Some('b'));
    }

    #[test]
    fn advance_to_end() {
        let cursor = Cursor::new("ab").advance(2);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.offset(), 2);
    }
}
