//! Graphical diagnostics using miette.
//!
//! Used by `--fancy`: each diagnostic is converted into a [`FancyDiagnostic`] carrying the whole source as context
//! and printed through miette's report handler instead of the plain caret renderer.

// Suppress unused_assignments for struct fields used by derive macros
#![allow(unused_assignments)]

use loxlang_syntax::diagnostics::{Diagnostic, Emitter};
use loxlang_syntax::source::SourceText;
use miette::SourceSpan;

/// A front-end diagnostic with its source attached.
#[derive(Debug, miette::Diagnostic, thiserror::Error)]
#[error("{message}")]
#[diagnostic(code(loxlang::syntax))]
pub struct FancyDiagnostic {
    pub message: String,
    #[source_code]
    pub src: miette::NamedSource<String>,
    /// Location of the error
    #[label("{label}")]
    pub span: SourceSpan,
    /// Label for the error span (interpolated by miette derive macro)
    pub label: String,
}

impl FancyDiagnostic {
    pub fn from_diagnostic(diagnostic: &Diagnostic, source: &SourceText) -> Self {
        // Spans reported at end of input may point one byte past the text.
        let start = diagnostic.span.start.min(source.len());
        let end = diagnostic.span.end.clamp(start, source.len());

        Self {
            message: diagnostic.message.clone(),
            src: miette::NamedSource::new(source.filename(), source.text().to_string()),
            span: (start, end - start).into(),
            label: diagnostic.kind.to_string(),
        }
    }
}

/// Prints every diagnostic as a miette report on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct MietteEmitter;

impl Emitter for MietteEmitter {
    fn emit(&self, source: &SourceText, diagnostic: &Diagnostic) {
        let report = miette::Report::new(FancyDiagnostic::from_diagnostic(diagnostic, source));
        eprintln!("{report:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loxlang_syntax::ast::Span;

    #[test]
    fn test_from_diagnostic_keeps_message_and_span() {
        let source = SourceText::new("test.lox", "1 + )");
        let diagnostic = Diagnostic::syntax("Expected expression start", Span::new(4, 5));
        let diag = FancyDiagnostic::from_diagnostic(&diagnostic, &source);

        assert_eq!(diag.message, "Expected expression start");
        assert_eq!(diag.span.offset(), 4);
        assert_eq!(diag.span.len(), 1);
        assert_eq!(diag.label, "syntax error");
    }

    #[test]
    fn test_span_past_end_is_clamped() {
        let source = SourceText::new("test.lox", "(1");
        let diagnostic = Diagnostic::lexical("unterminated comment", Span::new(2, 3));
        let diag = FancyDiagnostic::from_diagnostic(&diagnostic, &source);

        assert_eq!(diag.span.offset(), 2);
        assert_eq!(diag.span.len(), 0);
        assert_eq!(diag.label, "lexical error");
    }
}
