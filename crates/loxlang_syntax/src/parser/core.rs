// Parser core types: the [`Parser`] state and the [`ParsePanic`] signal.
//
// This file is `include!`'d into `crate::parser` to keep all parser methods in a
// single module while avoiding a single “god file”.

/// A fatal parse condition: no prefix rule applies to the current token, or the input nests too deeply.
///
/// It has already been reported through the source's reporter by the time it is returned; the entry points only
/// need to turn it into "no AST".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParsePanic {
    pub message: String,
    pub span: Span,
}

/// Result of a parsing step that may hit the panic boundary.
type PResult<T> = Result<T, ParsePanic>;

/// Parser state.
///
/// ## Notes
/// - Three token slots (previous / current / next) are filled lazily from the lexer, so looking ahead never
///   re-scans.
/// - `depth` counts the recursive productions currently open; it bounds stack use on pathological input.
/// - Most parsing helpers are implemented on `Parser` but split across multiple files.
pub struct Parser<'src> {
    source: &'src SourceText,
    lexer: Lexer<'src>,
    previous: Option<Token<'src>>,
    current: Option<Token<'src>>,
    next: Option<Token<'src>>,
    depth: usize,
}

impl<'src> Parser<'src> {
    /// Create a new parser over `source`. Nothing is scanned until the first lookup.
    pub fn new(source: &'src SourceText) -> Self {
        Self {
            source,
            lexer: Lexer::new(source),
            previous: None,
            current: None,
            next: None,
            depth: 0,
        }
    }
}
