//! Operator, delimiter and illegal character lexing.

use tracing::debug;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a one-character operator or delimiter of the given kind.
    ///
    /// Handles: `=`, `+`, `-`, `!`, `*`, `/`, `<`, `>`, `,`, `;`, `(`, `)`,
    /// `{`, `}`
    pub(crate) fn lex_single(&mut self, kind: TokenKind) -> Token<'a> {
        self.cursor.advance();
        self.make_token(kind)
    }

    /// Lexes a byte that matches no rule.
    ///
    /// Exactly one byte is consumed, so each byte of a multi-byte UTF-8
    /// sequence comes back as its own illegal token.
    pub(crate) fn lex_illegal(&mut self) -> Token<'a> {
        self.cursor.advance();
        let token = self.make_token(TokenKind::Illegal);
        debug!(
            text = %token.text,
            line = self.token_line(),
            column = self.token_column(),
            "illegal character"
        );
        token
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};
    use crate::Lexer;

    fn lex_op(source: &str) -> Token<'_> {
        Lexer::new(source).next_token()
    }

    #[test]
    fn test_assign() {
        assert_eq!(lex_op("="), Token::new(TokenKind::Assign, "="));
    }

    #[test]
    fn test_no_two_character_operators() {
        let mut lexer = Lexer::new("==");
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Assign, "="));
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Assign, "="));
        assert!(lexer.next_token().is_eof());
    }

    #[test]
    fn test_bang() {
        assert_eq!(lex_op("!"), Token::new(TokenKind::Bang, "!"));
    }

    #[test]
    fn test_slash_is_not_a_comment() {
        let mut lexer = Lexer::new("//");
        assert_eq!(lexer.next_token().kind, TokenKind::Slash);
        assert_eq!(lexer.next_token().kind, TokenKind::Slash);
    }

    #[test]
    fn test_comparison() {
        assert_eq!(lex_op("<"), Token::new(TokenKind::Lt, "<"));
        assert_eq!(lex_op(">"), Token::new(TokenKind::Gt, ">"));
    }

    #[test]
    fn test_illegal_ascii() {
        for source in ["@", "#", "$", "%", "[", "]", "\"", ".", ":", "\0"] {
            assert_eq!(lex_op(source), Token::new(TokenKind::Illegal, source));
        }
    }

    #[test]
    fn test_illegal_non_ascii_is_one_token_per_byte() {
        let mut lexer = Lexer::new("é=");
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Illegal, b"\xC3"));
        assert_eq!(lexer.position(), 1);
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Illegal, b"\xA9"));
        assert_eq!(lexer.position(), 2);
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Assign, "="));
        assert!(lexer.next_token().is_eof());
    }

    #[test]
    fn test_form_feed_is_illegal() {
        assert_eq!(lex_op("\x0C"), Token::new(TokenKind::Illegal, "\x0C"));
    }
}
