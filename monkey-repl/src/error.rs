//! Error handling module for the monkey CLI.
//!
//! The lexer itself never fails; everything here comes from the driver:
//! reading input, loading configuration, writing output, or a caller asking
//! for illegal input to be treated as fatal.

use thiserror::Error;

/// Main error type for the monkey CLI application.
#[derive(Error, Debug)]
pub enum ReplError {
    /// Error when configuration cannot be loaded or saved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when a source file cannot be read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Source contained a character the lexer does not recognize and the
    /// caller asked for that to be fatal.
    #[error("illegal character {text:?} at line {line}, column {column}")]
    IllegalToken {
        /// The offending lexeme.
        text: String,
        /// Line of the first illegal character (1-based).
        line: u32,
        /// Column of the first illegal character (1-based).
        column: u32,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using ReplError.
pub type Result<T> = std::result::Result<T, ReplError>;
