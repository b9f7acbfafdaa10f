//! Lexer for the Lox programming language
//!
//! A pull scanner: [`Lexer::next_token`] produces one token per call, on demand. Handles:
//! - Single-character punctuation and one- or two-character operators (`!=`, `==`, `<=`, `>=`)
//! - `//` line comments and nesting-aware `/* ... */` block comments
//! - String literals (which may span lines) and decimal number literals
//! - Identifiers and the 16 reserved words
//!
//! ## Notes
//! - Lexical errors never stop scanning. Each one is reported through the source's reporter and produces an
//!   [`TokenKind::Error`] token so the parser still sees a well-formed stream.
//! - Once input is exhausted every call returns [`TokenKind::Eof`].
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token) and the keyword classifier

pub mod tokens;

pub use tokens::{Token, TokenKind, keyword};

use loxlang_core::errors::{UNKNOWN_CHARACTER_MSG, UNTERMINATED_COMMENT_MSG, UNTERMINATED_STRING_MSG};

use crate::ast::Span;
use crate::diagnostics::Diagnostic;
use crate::source::SourceText;

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// Every emitted token spans [token_start, cursor). token_start is reset at the
// top of the scan loop, so discarded whitespace and comments never leak into
// the next token's span.
// ============================================================================

/// Lexer for Lox source code.
pub struct Lexer<'src> {
    source: &'src SourceText,
    bytes: &'src [u8],
    token_start: usize,
    cursor: usize,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer positioned at the start of `source`.
    pub fn new(source: &'src SourceText) -> Self {
        Self {
            source,
            bytes: source.text().as_bytes(),
            token_start: 0,
            cursor: 0,
        }
    }

    /// Scan and return the next token.
    pub fn next_token(&mut self) -> Token<'src> {
        loop {
            self.token_start = self.cursor;

            let Some(c) = self.advance() else {
                return self.make(TokenKind::Eof);
            };

            let kind = match c {
                b'(' => TokenKind::LPar,
                b')' => TokenKind::RPar,
                b'{' => TokenKind::LBrace,
                b'}' => TokenKind::RBrace,
                b',' => TokenKind::Comma,
                b'.' => TokenKind::Dot,
                b'-' => TokenKind::Minus,
                b'+' => TokenKind::Plus,
                b';' => TokenKind::SemiColon,
                b'*' => TokenKind::Star,

                b'!' => self.operator(TokenKind::Bang, TokenKind::BangEq),
                b'=' => self.operator(TokenKind::Eq, TokenKind::EqEq),
                b'<' => self.operator(TokenKind::Less, TokenKind::LessEq),
                b'>' => self.operator(TokenKind::Greater, TokenKind::GreaterEq),

                b'/' => {
                    if self.match_byte(b'/') {
                        self.skip_line_comment();
                        continue;
                    }
                    if self.match_byte(b'*') {
                        if self.skip_block_comment() {
                            continue;
                        }
                        TokenKind::Error
                    } else {
                        TokenKind::Slash
                    }
                }

                b'"' => self.scan_string(),
                b'0'..=b'9' => self.scan_number(),
                _ if is_ident_start(c) => self.scan_identifier(),
                _ if is_blank(c) => continue,
                _ => self.scan_unknown(),
            };

            return self.make(kind);
        }
    }

    /// Scan up to and including the first [`TokenKind::Eof`].
    pub fn tokenize(mut self) -> Vec<Token<'src>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            tokens.push(token);
            if token.kind == TokenKind::Eof {
                return tokens;
            }
        }
    }

    // ========================================================================
    // Core byte handling
    // ========================================================================

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.cursor).copied()
    }

    fn peek_next(&self) -> Option<u8> {
        self.bytes.get(self.cursor + 1).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let c = self.peek()?;
        self.cursor += 1;
        Some(c)
    }

    fn match_byte(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    fn current_span(&self) -> Span {
        Span::new(self.token_start, self.cursor)
    }

    fn make(&self, kind: TokenKind) -> Token<'src> {
        let span = self.current_span();
        Token::new(kind, span, self.source.slice(span))
    }

    fn error(&self, message: &str) -> TokenKind {
        self.source.report(Diagnostic::lexical(message, self.current_span()));
        TokenKind::Error
    }

    // ========================================================================
    // Scanners
    // ========================================================================

    /// Try the `=`-suffixed form, fall back to the single-character one.
    fn operator(&mut self, simple: TokenKind, with_eq: TokenKind) -> TokenKind {
        if self.match_byte(b'=') { with_eq } else { simple }
    }

    fn skip_line_comment(&mut self) {
        while self.peek().is_some_and(|c| c != b'\n') {
            self.cursor += 1;
        }
    }

    /// Skip a block comment whose opening `/*` was consumed. Returns `false` if input ended first.
    fn skip_block_comment(&mut self) -> bool {
        let mut depth = 1usize;
        while depth > 0 {
            match (self.peek(), self.peek_next()) {
                (None, _) => {
                    self.error(UNTERMINATED_COMMENT_MSG);
                    return false;
                }
                (Some(b'/'), Some(b'*')) => {
                    self.cursor += 2;
                    depth += 1;
                }
                (Some(b'*'), Some(b'/')) => {
                    self.cursor += 2;
                    depth -= 1;
                }
                _ => self.cursor += 1,
            }
        }
        true
    }

    fn scan_string(&mut self) -> TokenKind {
        loop {
            match self.advance() {
                Some(b'"') => return TokenKind::String,
                Some(_) => {}
                None => return self.error(UNTERMINATED_STRING_MSG),
            }
        }
    }

    fn scan_number(&mut self) -> TokenKind {
        self.skip_digits();
        // A trailing `.` stays behind so `1.method` remains a property access.
        if self.peek() == Some(b'.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.cursor += 1;
            self.skip_digits();
        }
        TokenKind::Number
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.cursor += 1;
        }
    }

    fn scan_identifier(&mut self) -> TokenKind {
        while self.peek().is_some_and(is_ident_continue) {
            self.cursor += 1;
        }
        keyword(self.source.slice(self.current_span())).unwrap_or(TokenKind::Ident)
    }

    /// Consume a run of bytes no token can start with and report it once.
    fn scan_unknown(&mut self) -> TokenKind {
        while self.peek().is_some_and(|c| !is_safe(c)) {
            self.cursor += 1;
        }
        self.error(UNKNOWN_CHARACTER_MSG)
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a byte can start an identifier (ASCII-only).
fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

/// Check if a byte can continue an identifier (ASCII-only).
fn is_ident_continue(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

fn is_blank(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\r' | b'\n')
}

/// Bytes that end a run of unknown characters.
fn is_safe(c: u8) -> bool {
    matches!(
        c,
        b'(' | b')' | b'{' | b'}' | b',' | b'.' | b'-' | b'+' | b';' | b'*' | b'!' | b'=' | b'<' | b'>' | b'/' | b'"'
    ) || is_blank(c)
        || is_ident_continue(c)
}

/// Convenience function to lex a whole source.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(file = %source.filename(), source_len = source.len()))]
pub fn lex(source: &SourceText) -> Vec<Token<'_>> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
