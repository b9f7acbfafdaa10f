//! CLI module for the Lox front end
//!
//! This module provides the command-line interface and the REPL.
//!
//! ## Usage
//!
//! - `loxlang` - interactive prompt, one expression per line
//! - `loxlang <file>` - parse the file and print its AST
//! - `loxlang --lex <file>` / `--parse <file>` - debug views
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//! - `fancy` - miette rendering for `--fancy`
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod fancy;

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use commands::{Options, ParseMode};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Lox lexer and parser
#[derive(Parser, Debug)]
#[command(name = "loxlang")]
#[command(version = VERSION)]
#[command(about = "Lox lexer and Pratt parser with source diagnostics", long_about = None)]
pub struct Cli {
    /// File to parse (starts the REPL when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with_all = ["file", "parse_file"])]
    pub lex_file: Option<PathBuf>,

    /// Parse only and print the AST without a header (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "file")]
    pub parse_file: Option<PathBuf>,

    /// Parse declarations and statements instead of a single expression
    #[arg(long)]
    pub program: bool,

    /// Render diagnostics with miette
    #[arg(long)]
    pub fancy: bool,
}

impl Cli {
    pub fn options(&self) -> Options {
        Options {
            mode: if self.program {
                ParseMode::Program
            } else {
                ParseMode::Expression
            },
            fancy: self.fancy,
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let options = cli.options();
    let mut out = io::stdout().lock();

    // Handle debug flags first
    if let Some(file) = &cli.lex_file {
        return commands::lex_file(file, options, &mut out);
    }
    if let Some(file) = &cli.parse_file {
        return commands::parse_file(file, options, &mut out);
    }

    match &cli.file {
        Some(file) => commands::run_file(file, options, &mut out),
        None => commands::repl(io::stdin().lock(), options, &mut out),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_file() {
        let cli = Cli::try_parse_from(["loxlang", "test.lox"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("test.lox")));
        assert_eq!(cli.options(), Options::default());
    }

    #[test]
    fn test_cli_no_arguments_means_repl() {
        let cli = Cli::try_parse_from(["loxlang"]).unwrap();
        assert!(cli.file.is_none());
        assert!(cli.lex_file.is_none());
        assert!(cli.parse_file.is_none());
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["loxlang", "--lex", "test.lox"]).unwrap();
        assert!(cli.lex_file.is_some());

        let cli = Cli::try_parse_from(["loxlang", "--parse", "test.lox", "--program"]).unwrap();
        assert!(cli.parse_file.is_some());
        assert_eq!(cli.options().mode, ParseMode::Program);
    }

    #[test]
    fn test_cli_fancy_flag() {
        let cli = Cli::try_parse_from(["loxlang", "--fancy", "test.lox"]).unwrap();
        assert!(cli.options().fancy);
    }

    #[test]
    fn test_cli_debug_flags_conflict_with_file() {
        assert!(Cli::try_parse_from(["loxlang", "--lex", "a.lox", "b.lox"]).is_err());
        assert!(Cli::try_parse_from(["loxlang", "--lex", "a.lox", "--parse", "b.lox"]).is_err());
    }

    #[test]
    fn test_cli_error_display() {
        let err = CliError::failure("Cannot access file 'x.lox'");
        assert_eq!(err.to_string(), "Cannot access file 'x.lox'");
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }
}
