//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use std::iter::FusedIterator;

use tracing::trace;

use crate::ascii::{is_digit, is_ident_start};
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for the Monkey programming language.
///
/// The lexer walks the source once, left to right, and hands out one token
/// per call to [`Lexer::next_token`]. It never fails: input it cannot
/// classify comes back as a [`TokenKind::Illegal`] token, and once the input
/// is exhausted every call returns [`TokenKind::Eof`].
///
/// # Example
///
/// ```
/// use monkey_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("let five = 5;");
/// assert_eq!(lexer.next_token().kind, TokenKind::Let);
/// assert_eq!(lexer.next_token().text, "five");
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    /// Byte cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Starting byte offset of the current token.
    pub(crate) token_start: usize,

    /// Line where the current token starts (1-based).
    token_start_line: u32,

    /// Column where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    ///
    /// The source is read as raw bytes, so it need not be valid UTF-8.
    pub fn new<S>(source: &'a S) -> Self
    where
        S: AsRef<[u8]> + ?Sized,
    {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace, then dispatches on the byte under the cursor. After
    /// the call the cursor sits just past the returned token.
    pub fn next_token(&mut self) -> Token<'a> {
        self.cursor.skip_whitespace();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let Some(byte) = self.cursor.current() else {
            return Token::eof();
        };

        let token = match byte {
            b if is_ident_start(b) => self.lex_identifier(),
            b if is_digit(b) => self.lex_number(),
            b => match TokenKind::from_single_byte(b) {
                Some(kind) => self.lex_single(kind),
                None => self.lex_illegal(),
            }
        };

        trace!(
            kind = %token.kind,
            text = %token.text,
            line = self.token_start_line,
            column = self.token_start_column,
            "token"
        );
        token
    }

    /// Builds a token of `kind` spanning from the token start to the cursor.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token<'a> {
        Token::new(kind, self.cursor.slice_from(self.token_start))
    }

    /// Returns the current line number (1-based).
    ///
    /// This is the line of the next byte to be lexed.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the byte offset of the next byte to be lexed.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the byte offset where the most recent token began.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Returns the line where the most recent token began.
    pub fn token_line(&self) -> u32 {
        self.token_start_line
    }

    /// Returns the column where the most recent token began.
    pub fn token_column(&self) -> u32 {
        self.token_start_column
    }

    /// Returns true once the input is exhausted.
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// Lexes `source` to completion.
///
/// The returned tokens always end with exactly one [`TokenKind::Eof`].
///
/// # Example
///
/// ```
/// use monkey_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("x1");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, [TokenKind::Ident, TokenKind::Int, TokenKind::Eof]);
/// ```
pub fn tokenize<S>(source: &S) -> Vec<Token<'_>>
where
    S: AsRef<[u8]> + ?Sized,
{
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
