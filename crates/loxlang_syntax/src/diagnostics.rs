//! Diagnostics and error reporting for Lox
//!
//! A [`Diagnostic`] is rendered and emitted the moment it is reported; nothing but a counter is retained. Rendering
//! is plain text with a caret line under the offending columns:
//!
//! ```text
//! demo.lox:1:5: Expected expression start
//! l. 1 | 1 + )
//!            ^
//! ```
//!
//! Spans that cross a line break get two excerpts marked `^-- starts here` and `^-- ends here`. Carets are
//! suppressed past column 255 in favour of a textual note.
//!
//! ## Notes
//! - [`Emitter`] is the seam between reporting and output: stderr by default, a collecting emitter in tests, and a
//!   miette-backed graphical emitter in the CLI.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use std::cell::{Cell, RefCell};
use std::fmt;
use std::io::IsTerminal;
use std::rc::Rc;

use crate::ast::Span;
use crate::source::SourceText;

/// Columns (and caret widths) above this are described in words instead of underlined.
pub const MAX_CARET_COLUMN: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Raised by the lexer; scanning continues.
    Lexical,
    /// Raised by the parser.
    Syntax,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Lexical => write!(f, "lexical error"),
            DiagnosticKind::Syntax => write!(f, "syntax error"),
        }
    }
}

/// A located error message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
#[error("{message}")]
#[diagnostic()]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    #[label("here")]
    pub span: Span,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
        }
    }

    pub fn lexical(message: impl Into<String>, span: Span) -> Self {
        Self::new(DiagnosticKind::Lexical, message, span)
    }

    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        Self::new(DiagnosticKind::Syntax, message, span)
    }

    /// Render the report against the text the span points into.
    ///
    /// The result always ends with a newline. The end of the span is located at its last included byte, so a token
    /// that ends right before a line break is reported on its own line.
    pub fn render(&self, source: &SourceText) -> String {
        let last = if self.span.is_empty() {
            self.span.start
        } else {
            self.span.end - 1
        };
        let start = source.locate(self.span.start);
        let end = source.locate(last);

        let mut out = format!(
            "{}:{}:{}: {}\n",
            source.filename(),
            start.line,
            start.column,
            self.message
        );

        if start.line == end.line {
            let gutter = push_excerpt(&mut out, source, start.line);
            let width = end.column.saturating_sub(start.column) + 1;
            if start.column > MAX_CARET_COLUMN || end.column > MAX_CARET_COLUMN || width > MAX_CARET_COLUMN {
                out.push_str(&format!("   at columns {}–{}\n", start.column, end.column));
            } else {
                push_marker(&mut out, gutter + start.column - 1, &"^".repeat(width));
            }
        } else {
            let gutter = push_excerpt(&mut out, source, start.line);
            if start.column > MAX_CARET_COLUMN {
                out.push_str(&format!("   starting at column {}\n", start.column));
            } else {
                push_marker(&mut out, gutter + start.column - 1, "^-- starts here");
            }

            let gutter = push_excerpt(&mut out, source, end.line);
            if end.column > MAX_CARET_COLUMN {
                out.push_str(&format!("   ending at column {}\n", end.column));
            } else {
                push_marker(&mut out, gutter + end.column - 1, "^-- ends here");
            }
        }

        out
    }
}

/// Append `l. <n> | <text>` and return the width of the gutter before the text.
fn push_excerpt(out: &mut String, source: &SourceText, line: usize) -> usize {
    let gutter = format!("l. {line} | ");
    out.push_str(&gutter);
    out.push_str(source.line_text(line));
    out.push('\n');
    gutter.len()
}

fn push_marker(out: &mut String, indent: usize, marker: &str) {
    out.push_str(&" ".repeat(indent));
    out.push_str(marker);
    out.push('\n');
}

// ============================================================================
// Emitters
// ============================================================================

/// Destination for reported diagnostics.
pub trait Emitter {
    fn emit(&self, source: &SourceText, diagnostic: &Diagnostic);
}

/// Writes rendered diagnostics to stderr, with a bold header when stderr is a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrEmitter;

impl Emitter for StderrEmitter {
    fn emit(&self, source: &SourceText, diagnostic: &Diagnostic) {
        let rendered = diagnostic.render(source);
        match rendered.split_once('\n') {
            Some((header, rest)) if std::io::stderr().is_terminal() => {
                eprint!("\x1b[1m{header}\x1b[0m\n{rest}");
            }
            _ => eprint!("{rendered}"),
        }
    }
}

/// A diagnostic together with its rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collected {
    pub diagnostic: Diagnostic,
    pub rendered: String,
}

/// Keeps every diagnostic in memory.
///
/// Clones share the same buffer, so a test can hand one clone to a [`SourceText`] and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct CollectingEmitter {
    collected: Rc<RefCell<Vec<Collected>>>,
}

impl CollectingEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.collected.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.collected.borrow().iter().map(|c| c.diagnostic.clone()).collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.collected
            .borrow()
            .iter()
            .map(|c| c.diagnostic.message.clone())
            .collect()
    }

    /// All rendered reports, concatenated in emission order.
    pub fn rendered(&self) -> String {
        self.collected.borrow().iter().map(|c| c.rendered.as_str()).collect()
    }
}

impl Emitter for CollectingEmitter {
    fn emit(&self, source: &SourceText, diagnostic: &Diagnostic) {
        self.collected.borrow_mut().push(Collected {
            diagnostic: diagnostic.clone(),
            rendered: diagnostic.render(source),
        });
    }
}

// ============================================================================
// Reporter
// ============================================================================

/// Counts diagnostics and forwards them to an [`Emitter`].
pub struct Reporter {
    emitter: Box<dyn Emitter>,
    error_count: Cell<usize>,
}

impl Reporter {
    pub fn new(emitter: impl Emitter + 'static) -> Self {
        Self {
            emitter: Box::new(emitter),
            error_count: Cell::new(0),
        }
    }

    pub fn report(&self, source: &SourceText, diagnostic: &Diagnostic) {
        self.error_count.set(self.error_count.get() + 1);
        tracing::trace!(kind = %diagnostic.kind, message = %diagnostic.message, "diagnostic");
        self.emitter.emit(source, diagnostic);
    }

    pub fn had_error(&self) -> bool {
        self.error_count.get() > 0
    }

    pub fn error_count(&self) -> usize {
        self.error_count.get()
    }
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter")
            .field("error_count", &self.error_count.get())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str, span: Span) -> String {
        let source = SourceText::with_emitter("demo.lox", text, CollectingEmitter::new());
        Diagnostic::syntax("boom", span).render(&source)
    }

    #[test]
    fn single_line_carets_sit_under_the_span() {
        let out = render("var answer = 42;\n", Span::new(4, 10));
        insta::assert_snapshot!(out.trim_end(), @r"
demo.lox:1:5: boom
l. 1 | var answer = 42;
           ^^^^^^
");
    }

    #[test]
    fn empty_span_gets_one_caret() {
        let out = render("1 +", Span::new(3, 3));
        insta::assert_snapshot!(out.trim_end(), @r"
demo.lox:1:4: boom
l. 1 | 1 +
          ^
");
    }

    #[test]
    fn gutter_width_follows_line_number() {
        let text = "\n".repeat(9) + "x = ;";
        let out = render(&text, Span::new(13, 14));
        insta::assert_snapshot!(out.trim_end(), @r"
demo.lox:10:5: boom
l. 10 | x = ;
            ^
");
    }

    #[test]
    fn multi_line_span_gets_two_excerpts() {
        let out = render("print \"abc\ndef\";", Span::new(6, 15));
        insta::assert_snapshot!(out.trim_end(), @r#"
demo.lox:1:7: boom
l. 1 | print "abc
             ^-- starts here
l. 2 | def";
          ^-- ends here
"#);
    }

    #[test]
    fn wide_columns_are_described_in_words() {
        let text = format!("{}x", " ".repeat(300));
        let out = render(&text, Span::new(300, 301));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "demo.lox:1:301: boom");
        assert_eq!(lines[2], "   at columns 301–301");
    }

    #[test]
    fn wide_multi_line_span_describes_start_column() {
        let text = format!("{}\"a\nb\"", " ".repeat(260));
        let out = render(&text, Span::new(260, 265));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[2], "   starting at column 261");
        assert_eq!(lines[4], format!("{}^-- ends here", " ".repeat(8)));
    }

    #[test]
    fn span_at_end_of_input_renders_end_of_file() {
        let out = render("1 +\n", Span::new(4, 4));
        assert_eq!(out.lines().nth(1), Some("l. 2 | End Of File"));
    }

    #[test]
    fn reporter_counts_and_forwards() {
        let emitter = CollectingEmitter::new();
        let source = SourceText::with_emitter("t.lox", "abc", emitter.clone());
        assert!(!source.had_error());
        source.error("first", Span::new(0, 1));
        source.error_at("second", 2);
        assert!(source.had_error());
        assert_eq!(source.error_count(), 2);
        assert_eq!(emitter.messages(), vec!["first".to_string(), "second".to_string()]);
        assert!(emitter.rendered().starts_with("t.lox:1:1: first\n"));
    }

    #[test]
    fn diagnostic_display_is_the_message() {
        let diagnostic = Diagnostic::lexical("unknown character", Span::new(0, 1));
        assert_eq!(diagnostic.to_string(), "unknown character");
        assert_eq!(diagnostic.kind.to_string(), "lexical error");
    }
}
