//! Command implementations for the monkey CLI.
//!
//! This module contains all the subcommands available in the CLI.

pub mod common;
pub mod repl;
pub mod tokenize;
