//! Byte cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which holds the scanning state of
//! the lexer: the byte under the cursor, the index of that byte, the index of
//! the next byte to read, and line/column information for diagnostics.
//!
//! End of input is signalled by [`Cursor::current`] returning `None`. There
//! is no in-band sentinel byte, so a NUL byte in the source is an ordinary
//! character. The cursor works on raw bytes and never decodes UTF-8.

use crate::ascii::is_whitespace;

/// A cursor over the bytes of a source string.
///
/// The cursor only ever moves forward. After construction the first byte is
/// already loaded, and `read_position() == position() + 1` holds from then
/// on, including once the input is exhausted.
///
/// # Example
///
/// ```
/// use monkey_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let");
/// assert_eq!(cursor.current(), Some(b'l'));
/// cursor.advance();
/// assert_eq!(cursor.current(), Some(b'e'));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source bytes being traversed.
    source: &'a [u8],

    /// Index of the byte under the cursor.
    position: usize,

    /// Index of the next byte to read.
    read_position: usize,

    /// The byte at `position`, or `None` once the input is exhausted.
    current: Option<u8>,

    /// Line of the byte under the cursor (1-based).
    line: u32,

    /// Column of the byte under the cursor (1-based, in bytes).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor with the first byte of `source` already loaded.
    ///
    /// Any byte sequence is accepted; `&str`, `String` and `[u8]` all work.
    pub fn new<S>(source: &'a S) -> Self
    where
        S: AsRef<[u8]> + ?Sized,
    {
        let source = source.as_ref();
        Self {
            source,
            position: 0,
            read_position: 1,
            current: source.first().copied(),
            line: 1,
            column: 1,
        }
    }

    /// Returns the byte under the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.current
    }

    /// Returns the byte after the one under the cursor without consuming
    /// anything.
    ///
    /// # Example
    ///
    /// ```
    /// use monkey_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("ab");
    /// assert_eq!(cursor.peek(), Some(b'b'));
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.source.get(self.read_position).copied()
    }

    /// Advances past one byte.
    ///
    /// Does nothing once the input is exhausted.
    ///
    /// # Example
    ///
    /// ```
    /// use monkey_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a");
    /// cursor.advance();
    /// assert!(cursor.is_at_end());
    /// cursor.advance();
    /// assert_eq!(cursor.position(), 1);
    /// ```
    #[inline]
    pub fn advance(&mut self) {
        let Some(leaving) = self.current else {
            return;
        };

        if leaving == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        self.position = self.read_position;
        self.read_position += 1;
        self.current = self.source.get(self.position).copied();
    }

    /// Returns true if the cursor has passed the last byte.
    ///
    /// # Example
    ///
    /// ```
    /// use monkey_lex::cursor::Cursor;
    ///
    /// assert!(Cursor::new("").is_at_end());
    /// assert!(!Cursor::new("x").is_at_end());
    /// ```
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Advances while `predicate` holds for the byte under the cursor.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(u8) -> bool) {
        while let Some(byte) = self.current {
            if !predicate(byte) {
                break;
            }
            self.advance();
        }
    }

    /// Skips space, tab, newline and carriage return.
    ///
    /// # Example
    ///
    /// ```
    /// use monkey_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(" \t\r\nlet");
    /// cursor.skip_whitespace();
    /// assert_eq!(cursor.current(), Some(b'l'));
    /// ```
    pub fn skip_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }

    /// Index of the byte under the cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Index of the next byte to read.
    pub fn read_position(&self) -> usize {
        self.read_position
    }

    /// Line of the byte under the cursor (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the byte under the cursor (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the source between `start` and the cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use monkey_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("let x");
    /// let start = cursor.position();
    /// cursor.eat_while(|b| b.is_ascii_alphabetic());
    /// assert_eq!(cursor.slice_from(start), b"let");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.source[start..self.position]
    }

    /// Returns the source from the cursor to the end.
    pub fn remaining(&self) -> &'a [u8] {
        &self.source[self.position.min(self.source.len())..]
    }

    /// Returns the full source.
    pub fn source(&self) -> &'a [u8] {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor_preloads_first_byte() {
        let cursor = Cursor::new("let x = 42;");
        assert_eq!(cursor.current(), Some(b'l'));
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.read_position(), 1);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current(), None);
        cursor.advance();
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.read_position(), 1);
    }

    #[test]
    fn test_advance() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.current(), Some(b'a'));
        cursor.advance();
        assert_eq!(cursor.current(), Some(b'b'));
        cursor.advance();
        assert_eq!(cursor.current(), Some(b'c'));
        cursor.advance();
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_read_position_tracks_position() {
        let mut cursor = Cursor::new("abc");
        for _ in 0..10 {
            assert_eq!(cursor.read_position(), cursor.position() + 1);
            assert!(cursor.read_position() <= cursor.source().len() + 1);
            cursor.advance();
        }
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_nul_byte_is_not_end_of_input() {
        let mut cursor = Cursor::new("\0a");
        assert_eq!(cursor.current(), Some(0));
        assert!(!cursor.is_at_end());
        cursor.advance();
        assert_eq!(cursor.current(), Some(b'a'));
    }

    #[test]
    fn test_peek() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.peek(), Some(b'b'));
        cursor.advance();
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_advance_steps_through_multibyte_sequence() {
        let mut cursor = Cursor::new("éx");
        assert_eq!(cursor.current(), Some(0xC3));
        cursor.advance();
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.current(), Some(0xA9));
        cursor.advance();
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.current(), Some(b'x'));
        assert_eq!(cursor.column(), 3);
    }

    #[test]
    fn test_accepts_invalid_utf8() {
        let mut cursor = Cursor::new(&[0xFF, b'a'][..]);
        assert_eq!(cursor.current(), Some(0xFF));
        cursor.advance();
        assert_eq!(cursor.current(), Some(b'a'));
    }

    #[test]
    fn test_skip_whitespace_only() {
        let mut cursor = Cursor::new(" \t\r\n ");
        cursor.skip_whitespace();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_line_column_tracking() {
        let mut cursor = Cursor::new("ab\ncd");
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (1, 2));
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (1, 3));
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (2, 2));
    }

    #[test]
    fn test_slice_and_remaining() {
        let mut cursor = Cursor::new("let x");
        let start = cursor.position();
        cursor.eat_while(|b| b.is_ascii_alphabetic());
        assert_eq!(cursor.slice_from(start), b"let");
        assert_eq!(cursor.remaining(), b" x");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.remaining(), b"");
    }
}
