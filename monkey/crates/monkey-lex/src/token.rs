//! Token definitions for the Monkey language.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact slice of source text it
//! was scanned from. The set of kinds is closed: anything the lexer cannot
//! classify becomes [`TokenKind::Illegal`].

use std::fmt;

/// The kind of a lexical token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// A character that matches no lexical rule.
    Illegal,
    /// End of input. Zero-width, repeated forever once reached.
    Eof,

    // Identifiers and literals
    /// Identifier: `add`, `foo`, `x`
    Ident,
    /// Decimal integer literal: `1`, `42`
    Int,

    // Operators
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,

    // Delimiters
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,

    // Keywords
    /// `fn`
    Function,
    /// `let`
    Let,
}

impl TokenKind {
    /// Every token kind, in declaration order.
    pub const ALL: [TokenKind; 20] = [
        TokenKind::Illegal,
        TokenKind::Eof,
        TokenKind::Ident,
        TokenKind::Int,
        TokenKind::Assign,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Bang,
        TokenKind::Asterisk,
        TokenKind::Slash,
        TokenKind::Lt,
        TokenKind::Gt,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Function,
        TokenKind::Let,
    ];

    /// Returns the canonical name of this kind.
    ///
    /// Operators and delimiters are named by their lexeme, everything else
    /// by an upper-case tag.
    ///
    /// # Example
    ///
    /// ```
    /// use monkey_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::Let.as_str(), "LET");
    /// assert_eq!(TokenKind::Assign.as_str(), "=");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
        }
    }

    /// Returns the kind for a single-character operator or delimiter.
    ///
    /// Returns `None` for any byte that does not form a token on its own.
    pub const fn from_single_byte(byte: u8) -> Option<TokenKind> {
        let kind = match byte {
            b'=' => TokenKind::Assign,
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'!' => TokenKind::Bang,
            b'*' => TokenKind::Asterisk,
            b'/' => TokenKind::Slash,
            b'<' => TokenKind::Lt,
            b'>' => TokenKind::Gt,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns true for `fn` and `let`.
    pub const fn is_keyword(self) -> bool {
        matches!(self, TokenKind::Function | TokenKind::Let)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The raw bytes of a token.
///
/// Every lexeme is a slice of the source. Apart from illegal input all
/// lexemes are ASCII; an illegal lexeme is a single byte, which may be one
/// byte of a multi-byte UTF-8 sequence. `Display` renders each byte as the
/// character with the same code point (Latin-1), so no byte is ever lost.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lexeme<'a>(&'a [u8]);

impl<'a> Lexeme<'a> {
    /// Wraps a byte slice.
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    /// Returns the lexeme as `&str` if it is valid UTF-8.
    ///
    /// # Example
    ///
    /// ```
    /// use monkey_lex::token::Lexeme;
    ///
    /// assert_eq!(Lexeme::new(b"let").as_str(), Some("let"));
    /// assert_eq!(Lexeme::new(b"\xC3").as_str(), None);
    /// ```
    pub fn as_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.0).ok()
    }

    /// Length in bytes.
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the empty lexeme of the end-of-input token.
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Lexeme<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &byte in self.0 {
            fmt::Write::write_char(f, char::from(byte))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Lexeme<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.0.escape_ascii())
    }
}

impl<'a> From<&'a str> for Lexeme<'a> {
    fn from(text: &'a str) -> Self {
        Self(text.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Lexeme<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self(bytes)
    }
}

impl PartialEq<str> for Lexeme<'_> {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for Lexeme<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<[u8]> for Lexeme<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == other
    }
}

impl PartialEq<&[u8]> for Lexeme<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.0 == *other
    }
}

/// A classified fragment of source text.
///
/// `text` borrows from the source the token was scanned from. The only token
/// whose text is not a source slice is [`TokenKind::Eof`], whose text is
/// always empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    /// What this token is.
    pub kind: TokenKind,
    /// The exact lexeme.
    pub text: Lexeme<'a>,
}

impl<'a> Token<'a> {
    /// Creates a token from anything that views as bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use monkey_lex::{Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Illegal, b"\xC3");
    /// assert_eq!(token.text.len(), 1);
    /// assert_eq!(Token::new(TokenKind::Let, "let").text, "let");
    /// ```
    pub fn new<T>(kind: TokenKind, text: &'a T) -> Self
    where
        T: AsRef<[u8]> + ?Sized,
    {
        Self {
            kind,
            text: Lexeme(text.as_ref()),
        }
    }

    /// The end-of-input token.
    pub const fn eof() -> Self {
        Self {
            kind: TokenKind::Eof,
            text: Lexeme(b""),
        }
    }

    /// Returns true if this is the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}

/// Looks up a reserved word.
///
/// Only called once an identifier-shaped run has been scanned in full, so
/// `letx` never matches `let`.
///
/// # Example
///
/// ```
/// use monkey_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("fn"), Some(TokenKind::Function));
/// assert_eq!(keyword_from_ident("letx"), None);
/// ```
pub fn keyword_from_ident<S>(ident: &S) -> Option<TokenKind>
where
    S: AsRef<[u8]> + ?Sized,
{
    match ident.as_ref() {
        b"fn" => Some(TokenKind::Function),
        b"let" => Some(TokenKind::Let),
        _ => None,
    }
}

/// Classifies scanned identifier text as a keyword or [`TokenKind::Ident`].
pub fn lookup_ident<S>(ident: &S) -> TokenKind
where
    S: AsRef<[u8]> + ?Sized,
{
    keyword_from_ident(ident).unwrap_or(TokenKind::Ident)
}
