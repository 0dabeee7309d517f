//! Interactive read-lex-print loop.
//!
//! Each input line is handed to a fresh lexer and every token before end of
//! input is printed. Line framing and the prompt belong here; the lexer only
//! ever sees one line at a time.

use std::io::{self, BufRead, Write};

use monkey_lex::{Lexer, TokenKind};
use tracing::debug;

use super::common::{write_token, OutputFormat};
use crate::error::Result;

/// Name used in the greeting when the user cannot be determined.
const FALLBACK_USER: &str = "there";

/// Arguments for the repl command.
#[derive(Debug, Clone)]
pub struct ReplArgs {
    /// Prompt printed before each line.
    pub prompt: String,
    /// Print the welcome banner.
    pub greeting: bool,
    /// Token rendering.
    pub format: OutputFormat,
}

/// Runs the REPL on stdin/stdout until end of input.
pub fn run_repl(args: ReplArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    start(stdin.lock(), stdout.lock(), &args)
}

/// Runs the REPL over arbitrary input and output streams.
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W, args: &ReplArgs) -> Result<()> {
    if args.greeting {
        writeln!(
            output,
            "Hello {}! This is the Monkey programming language!",
            current_user()
        )?;
        writeln!(output, "Feel free to type in commands")?;
    }

    let mut line = Vec::new();
    let mut lines = 0usize;
    loop {
        write!(output, "{}", args.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            writeln!(output)?;
            debug!(lines, "end of input");
            return Ok(());
        }
        lines += 1;

        let mut lexer = Lexer::new(&line);
        loop {
            let token = lexer.next_token();
            if token.is_eof() {
                break;
            }
            if token.kind == TokenKind::Illegal {
                debug!(
                    line = lines,
                    column = lexer.token_column(),
                    text = %token.text,
                    "illegal input"
                );
            }
            write_token(&mut output, &token, args.format)?;
        }
    }
}

/// Returns the login name from the environment.
fn current_user() -> String {
    ["USER", "USERNAME"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|name| !name.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_USER.to_string())
}
