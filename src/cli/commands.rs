//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//! Output goes to a caller-supplied writer so the commands can be driven from tests.

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use loxlang_syntax::source::SourceText;
use loxlang_syntax::{lexer, parser, printer};

use super::fancy::MietteEmitter;
use super::{CliError, CliResult, ExitCode};

/// Name given to every line read by the REPL.
pub const REPL_NAME: &str = "REPL";

/// Prompt printed before each REPL line.
pub const PROMPT: &str = "lox> ";

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Which grammar a source is parsed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// A single expression.
    #[default]
    Expression,
    /// A sequence of declarations.
    Program,
}

/// Options shared by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub mode: ParseMode,
    /// Render diagnostics with miette instead of the caret renderer.
    pub fancy: bool,
}

impl Options {
    /// Wrap `text` in a [`SourceText`] that reports the way these options ask for.
    pub fn source(&self, name: &str, text: String) -> SourceText {
        if self.fancy {
            SourceText::with_emitter(name, text, MietteEmitter)
        } else {
            SourceText::new(name, text)
        }
    }
}

/// Read source file contents with size validation.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be accessed (doesn't exist, permission denied, etc.)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let shown = file_path.display();
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{shown}': {e}")))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            shown,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{shown}': {e}")))
}

fn load(file_path: &Path, options: Options) -> CliResult<SourceText> {
    let text = read_source(file_path)?;
    Ok(options.source(&file_path.to_string_lossy(), text))
}

fn write_err(e: std::io::Error) -> CliError {
    CliError::failure(format!("Error writing output: {e}"))
}

/// Parse `source` and print the AST, or nothing when the parse produced diagnostics.
///
/// Returns `ExitCode::FAILURE` when any diagnostic was reported or no tree was produced.
pub fn run_source(source: &SourceText, mode: ParseMode, header: bool, out: &mut impl Write) -> CliResult<ExitCode> {
    let printed = match mode {
        ParseMode::Expression => parser::parse(source).map(|expr| printer::print_expr(&expr)),
        ParseMode::Program => parser::parse_program(source).map(|stmts| printer::print_program(&stmts)),
    };

    match printed {
        Some(ast) if !source.had_error() => {
            if header {
                writeln!(out, "AST:").map_err(write_err)?;
            }
            writeln!(out, "{ast}").map_err(write_err)?;
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            tracing::debug!(errors = source.error_count(), "no AST printed");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Parse a file and print `AST:` followed by the tree.
pub fn run_file(file_path: &Path, options: Options, out: &mut impl Write) -> CliResult<ExitCode> {
    let source = load(file_path, options)?;
    run_source(&source, options.mode, true, out)
}

/// Parse a file and print only the tree.
pub fn parse_file(file_path: &Path, options: Options, out: &mut impl Write) -> CliResult<ExitCode> {
    let source = load(file_path, options)?;
    run_source(&source, options.mode, false, out)
}

/// Tokenize and print one token per line.
pub fn lex_file(file_path: &Path, options: Options, out: &mut impl Write) -> CliResult<ExitCode> {
    let source = load(file_path, options)?;
    for token in lexer::lex(&source) {
        writeln!(out, "{token}").map_err(write_err)?;
    }

    if source.had_error() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Read-parse-print loop.
///
/// Every line is parsed on its own as a source named [`REPL_NAME`]. An empty line or end of input ends the
/// session. Diagnostics in one line do not end the session.
pub fn repl(input: impl BufRead, options: Options, out: &mut impl Write) -> CliResult<ExitCode> {
    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}").map_err(write_err)?;
        out.flush().map_err(write_err)?;

        let Some(line) = lines.next() else {
            writeln!(out).map_err(write_err)?;
            break;
        };
        let line = line.map_err(|e| CliError::failure(format!("Error reading input: {e}")))?;
        if line.is_empty() {
            break;
        }

        let source = options.source(REPL_NAME, line);
        run_source(&source, options.mode, true, out)?;
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use loxlang_syntax::diagnostics::CollectingEmitter;

    fn run(text: &str, mode: ParseMode) -> (ExitCode, String, CollectingEmitter) {
        let emitter = CollectingEmitter::new();
        let source = SourceText::with_emitter("t.lox", text, emitter.clone());
        let mut out = Vec::new();
        let code = run_source(&source, mode, true, &mut out).unwrap();
        (code, String::from_utf8(out).unwrap(), emitter)
    }

    #[test]
    fn test_run_source_prints_ast_header() {
        let (code, out, _) = run("(5 - (3 - 1)) + -1", ParseMode::Expression);
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(out, "AST:\n(+ (grouping (- 5 (grouping (- 3 1)))) (- 1))\n");
    }

    #[test]
    fn test_recovered_errors_fail_without_output() {
        let (code, out, emitter) = run("(1 + 2", ParseMode::Expression);
        assert_eq!(code, ExitCode::FAILURE);
        assert_eq!(out, "");
        assert_eq!(emitter.len(), 1);
    }

    #[test]
    fn test_empty_source_fails_silently() {
        let (code, out, emitter) = run("", ParseMode::Expression);
        assert_eq!(code, ExitCode::FAILURE);
        assert_eq!(out, "");
        assert!(emitter.is_empty());
    }

    #[test]
    fn test_program_mode() {
        let (code, out, _) = run("var a = 1; print a;", ParseMode::Program);
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(out, "AST:\n(var a 1)\n(print a)\n");
    }

    #[test]
    fn test_repl_stops_at_empty_line() {
        let input = b"1 + 2\n\nnever parsed\n";
        let mut out = Vec::new();
        let code = repl(&input[..], Options::default(), &mut out).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(String::from_utf8(out).unwrap(), "lox> AST:\n(+ 1 2)\nlox> ");
    }

    #[test]
    fn test_repl_stops_at_end_of_input() {
        let mut out = Vec::new();
        repl(&b"a = 1\n"[..], Options::default(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "lox> AST:\n(= a 1)\nlox> \n");
    }

    #[test]
    fn test_missing_file_is_a_cli_error() {
        let err = run_file(Path::new("does/not/exist.lox"), Options::default(), &mut Vec::<u8>::new()).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.starts_with("Cannot access file 'does/not/exist.lox'"), "{}", err.message);
    }
}
