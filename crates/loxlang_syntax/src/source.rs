//! Source text ownership and offset-to-location mapping.
//!
//! [`SourceText`] is the root owner of a compilation unit: every token borrows its lexeme from it and every span
//! points into it. It also owns the [`Reporter`] through which the lexer and parser report, so "did anything go
//! wrong" is a property of the source being compiled.
//!
//! ## Notes
//! - The line index is built once, on the first lookup (typically the first diagnostic), and reused afterwards.
//! - Lines and columns are 1-based; columns count bytes.
//!
//! ## Examples
//! ```rust
//! use loxlang_syntax::source::{Location, SourceText};
//!
//! let source = SourceText::new("demo.lox", "var a;\nprint a;");
//! assert_eq!(source.locate(13), Location { line: 2, column: 7 });
//! assert_eq!(source.line_text(2), "print a;");
//! assert_eq!(source.part(4, 1), "a");
//! ```

use std::cell::OnceCell;
use std::fmt;

use crate::ast::Span;
use crate::diagnostics::{Diagnostic, Emitter, Reporter, StderrEmitter};

/// Placeholder shown for a line past the end of the text.
pub const END_OF_FILE_LINE: &str = "End Of File";

/// A 1-based line/column position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Immutable program text plus its filename, line index and diagnostic reporter.
#[derive(Debug)]
pub struct SourceText {
    filename: String,
    text: String,
    line_starts: OnceCell<Vec<usize>>,
    reporter: Reporter,
}

impl SourceText {
    /// Create a source whose diagnostics go to stderr.
    pub fn new(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_emitter(filename, text, StderrEmitter)
    }

    pub fn with_emitter(filename: impl Into<String>, text: impl Into<String>, emitter: impl Emitter + 'static) -> Self {
        Self {
            filename: filename.into(),
            text: text.into(),
            line_starts: OnceCell::new(),
            reporter: Reporter::new(emitter),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Return `length` bytes starting at `start`.
    ///
    /// ## Notes
    /// - Never panics: the range is clamped to the text, and a range that does not fall on `char` boundaries
    ///   yields `""`.
    pub fn part(&self, start: usize, length: usize) -> &str {
        let end = start.saturating_add(length).min(self.text.len());
        self.text.get(start.min(end)..end).unwrap_or("")
    }

    /// The text covered by `span`.
    pub fn slice(&self, span: Span) -> &str {
        self.part(span.start, span.len())
    }

    /// Sorted line-start offsets: `0`, every offset following a `\n`, and a sentinel at `len + 1`.
    pub fn line_starts(&self) -> &[usize] {
        self.line_starts.get_or_init(|| {
            let starts: Vec<usize> = std::iter::once(0)
                .chain(self.text.match_indices('\n').map(|(i, _)| i + 1))
                .chain(std::iter::once(self.text.len() + 1))
                .collect();
            tracing::trace!(file = %self.filename, lines = starts.len() - 1, "built line index");
            starts
        })
    }

    /// Number of lines, counting the (possibly empty) line after a trailing newline.
    pub fn line_count(&self) -> usize {
        self.line_starts().len() - 1
    }

    /// Resolve a byte offset to its line and column.
    ///
    /// Offsets past the end are clamped to the end of the text.
    pub fn locate(&self, offset: usize) -> Location {
        let offset = offset.min(self.text.len());
        let starts = self.line_starts();
        // The sentinel is greater than any clamped offset, so the insertion point is at least 1.
        let index = starts.partition_point(|&start| start <= offset) - 1;
        Location {
            line: index + 1,
            column: offset - starts[index] + 1,
        }
    }

    /// Text of a 1-based line without its terminator, or [`END_OF_FILE_LINE`] past the end.
    pub fn line_text(&self, line: usize) -> &str {
        let starts = self.line_starts();
        if line == 0 || line >= starts.len() {
            return END_OF_FILE_LINE;
        }
        let start = starts[line - 1];
        if start >= self.text.len() {
            return END_OF_FILE_LINE;
        }
        // The next start is one past this line's `\n`, or the sentinel one past the end.
        let end = starts[line] - 1;
        let text = self.part(start, end - start);
        text.strip_suffix('\r').unwrap_or(text)
    }

    // ========================================================================
    // Reporting
    // ========================================================================

    /// Report a syntax error covering `span`.
    pub fn error(&self, message: impl Into<String>, span: Span) {
        self.report(Diagnostic::syntax(message, span));
    }

    /// Report a syntax error at a single byte.
    pub fn error_at(&self, message: impl Into<String>, offset: usize) {
        self.error(message, Span::new(offset, offset + 1));
    }

    pub fn report(&self, diagnostic: Diagnostic) {
        self.reporter.report(self, &diagnostic);
    }

    pub fn had_error(&self) -> bool {
        self.reporter.had_error()
    }

    pub fn error_count(&self) -> usize {
        self.reporter.error_count()
    }
}

// ============================================================================
// TESTS
// ============================================================================
