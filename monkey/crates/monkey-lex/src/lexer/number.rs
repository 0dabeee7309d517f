//! Integer literal lexing.

use crate::ascii::is_digit;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a decimal integer literal.
    ///
    /// The token keeps the raw digit run. There are no signs, bases, fractions
    /// or overflow checks here; turning the text into a value is left to the
    /// consumer.
    pub(crate) fn lex_number(&mut self) -> Token<'a> {
        self.cursor.eat_while(is_digit);
        self.make_token(TokenKind::Int)
    }
}
