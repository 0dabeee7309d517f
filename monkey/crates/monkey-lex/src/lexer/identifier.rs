//! Identifier and keyword lexing.

use crate::ascii::is_ident_continue;
use crate::token::{lookup_ident, Token};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes the longest run of letters and underscores, then consults the
    /// keyword table. The run is classified only after it ends, so `letx` is
    /// an identifier rather than `let` followed by `x`.
    ///
    /// # Returns
    ///
    /// Either a keyword token (`Function`, `Let`) or an `Ident` token
    pub(crate) fn lex_identifier(&mut self) -> Token<'a> {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(self.token_start);
        Token::new(lookup_ident(text), text)
    }
}
