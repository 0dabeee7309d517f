//! Lexer module.
//!
//! The lexer implementation is split into focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Integer literal lexing
//! - `operator` - Single-character operators, delimiters and illegal input

mod core;
mod identifier;
mod number;
mod operator;

pub use self::core::{tokenize, Lexer};
