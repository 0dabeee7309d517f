//! Common types and utilities for monkey commands.
//!
//! Token rendering lives here so the REPL and `tokenize` print tokens the
//! same way.

use std::io::Write;

use clap::ValueEnum;
use monkey_lex::Token;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How tokens are written to the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `{Type:LET Literal:let}`, one per line
    #[default]
    Text,
    /// `{"type":"LET","literal":"let"}`, one JSON object per line
    Json,
}

/// Serialized form of a token.
///
/// Each lexeme byte maps to the code point of the same value, which keeps
/// the record valid JSON for illegal bytes that are not UTF-8 on their own.
#[derive(Debug, Serialize)]
struct TokenRecord {
    #[serde(rename = "type")]
    kind: &'static str,
    literal: String,
}

/// Writes a single token followed by a newline.
pub fn write_token<W: Write>(out: &mut W, token: &Token<'_>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{{Type:{} Literal:{}}}", token.kind, token.text)?;
        }
        OutputFormat::Json => {
            let record = TokenRecord {
                kind: token.kind.as_str(),
                literal: token.text.to_string(),
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use monkey_lex::TokenKind;

    fn render(token: Token<'_>, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_token(&mut buf, &token, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_format() {
        let token = Token::new(TokenKind::Let, "let");
        assert_eq!(render(token, OutputFormat::Text), "{Type:LET Literal:let}\n");
    }

    #[test]
    fn test_text_format_eof() {
        assert_eq!(render(Token::eof(), OutputFormat::Text), "{Type:EOF Literal:}\n");
    }

    #[test]
    fn test_json_format() {
        let token = Token::new(TokenKind::Assign, "=");
        assert_eq!(
            render(token, OutputFormat::Json),
            "{\"type\":\"=\",\"literal\":\"=\"}\n"
        );
    }

    #[test]
    fn test_json_format_escapes() {
        let token = Token::new(TokenKind::Illegal, "\"");
        let line = render(token, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["type"], "ILLEGAL");
        assert_eq!(value["literal"], "\"");
    }

    #[test]
    fn test_illegal_byte_renders_as_one_character() {
        let token = Token::new(TokenKind::Illegal, b"\xC3");
        assert_eq!(
            render(token, OutputFormat::Text),
            "{Type:ILLEGAL Literal:\u{C3}}\n"
        );
        let line = render(token, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["literal"], "\u{C3}");
    }
}
