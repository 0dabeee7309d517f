//! Token dump command.
//!
//! Lexes a whole file (or stdin) and prints every token, including the final
//! end-of-input token.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use monkey_lex::{Lexer, TokenKind};
use tracing::{debug, info};

use super::common::{write_token, OutputFormat};
use crate::error::{ReplError, Result};

/// Arguments for the tokenize command.
#[derive(Debug, Clone)]
pub struct TokenizeArgs {
    /// Source file; stdin when `None` or `-`.
    pub input: Option<PathBuf>,
    /// Token rendering.
    pub format: OutputFormat,
    /// Fail if any illegal character is found.
    pub deny_illegal: bool,
}

/// Counts gathered while dumping tokens.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TokenSummary {
    /// Tokens written, including end of input.
    pub tokens: usize,
    /// Illegal tokens among them.
    pub illegal: usize,
}

/// Runs the tokenize command.
pub fn run_tokenize(args: TokenizeArgs) -> Result<()> {
    let source = read_source(args.input.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_tokens(&source, &mut out, args.format, args.deny_illegal)?;
    out.flush()?;
    Ok(())
}

/// Reads the whole source as raw bytes, from stdin for `None` or `-`.
///
/// The source is not required to be UTF-8; bytes the lexer does not know
/// come out as illegal tokens.
fn read_source(input: Option<&Path>) -> Result<Vec<u8>> {
    match input {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "reading source");
            std::fs::read(path)
                .map_err(|e| ReplError::FileOperation(format!("{}: {}", path.display(), e)))
        }
        _ => {
            let mut source = Vec::new();
            io::stdin().read_to_end(&mut source)?;
            Ok(source)
        }
    }
}

/// Lexes `source` and writes every token to `out`.
///
/// All tokens are written even when `deny_illegal` is set; the first
/// illegal character is then reported as an error afterwards.
pub fn write_tokens<W: Write>(
    source: &[u8],
    out: &mut W,
    format: OutputFormat,
    deny_illegal: bool,
) -> Result<TokenSummary> {
    let mut lexer = Lexer::new(source);
    let mut summary = TokenSummary::default();
    let mut first_illegal = None;

    loop {
        let token = lexer.next_token();
        write_token(out, &token, format)?;
        summary.tokens += 1;

        match token.kind {
            TokenKind::Eof => break,
            TokenKind::Illegal => {
                summary.illegal += 1;
                if first_illegal.is_none() {
                    first_illegal = Some((token.text, lexer.token_line(), lexer.token_column()));
                }
            }
            _ => {}
        }
    }

    info!(
        tokens = summary.tokens,
        illegal = summary.illegal,
        "tokenized source"
    );

    match first_illegal {
        Some((text, line, column)) if deny_illegal => Err(ReplError::IllegalToken {
            text: text.to_string(),
            line,
            column,
        }),
        _ => Ok(summary),
    }
}
