//! monkey-lex - Lexical Analyzer for the Monkey Programming Language
//!
//! This crate turns Monkey source text into a stream of tokens for the
//! parser. The lexer is pull-based: each call to [`Lexer::next_token`]
//! scans exactly one token.
//!
//! # Example Usage
//!
//! ```
//! use monkey_lex::{Lexer, Token, TokenKind};
//!
//! let source = "let five = 5;";
//! let mut lexer = Lexer::new(source);
//!
//! assert_eq!(lexer.next_token(), Token::new(TokenKind::Let, "let"));
//! assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "five"));
//!
//! // Or iterate over everything before end of input
//! for token in Lexer::new(source) {
//!     println!("{}", token);
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds and the keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Byte cursor for source traversal
//! - [`ascii`] - ASCII character classes
//!
//! # Token Categories
//!
//! **Keywords**: `fn`, `let`
//!
//! **Identifiers**: `[a-zA-Z_]+`. Digits are not part of identifiers.
//!
//! **Integers**: `[0-9]+`, kept as raw text
//!
//! **Operators**: `=`, `+`, `-`, `!`, `*`, `/`, `<`, `>`
//!
//! **Delimiters**: `,`, `;`, `(`, `)`, `{`, `}`
//!
//! **Special**: `EOF` at end of input, `ILLEGAL` for anything else
//!
//! Whitespace (space, tab, newline, carriage return) separates tokens and is
//! otherwise ignored. Scanning is byte-oriented and ASCII-only: every byte
//! outside those classes, including each byte of a multi-byte UTF-8 sequence,
//! becomes its own `ILLEGAL` token.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ascii;
pub mod cursor;
pub mod lexer;
pub mod token;

mod edge_cases;

pub use cursor::Cursor;
pub use lexer::{tokenize, Lexer};
pub use token::{keyword_from_ident, lookup_ident, Lexeme, Token, TokenKind};
