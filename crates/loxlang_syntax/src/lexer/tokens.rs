//! Token types for the Lox lexer.
//!
//! [`TokenKind`] is a closed, `Copy` enumeration. Each kind carries its own display name ([`TokenKind::name`]) and,
//! for punctuation, operators and keywords, its fixed spelling ([`TokenKind::spelling`]).
//!
//! ## Notes
//! - Tokens borrow their lexeme from the [`SourceText`](crate::source::SourceText) they were scanned from; copying a
//!   token copies a kind tag, a span and a view.
//! - Use `crate::token_helpers` to map kinds to `loxlang_core::lang` registry IDs.

use std::fmt;

use crate::ast::Span;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Punctuation and single-character operators ==========
    LPar,
    RPar,
    LBrace,
    RBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    SemiColon,
    Slash,
    Star,

    // ========== One- or two-character operators ==========
    Bang,
    BangEq,
    Eq,
    EqEq,
    Greater,
    GreaterEq,
    Less,
    LessEq,

    // ========== Literals ==========
    Ident,
    String,
    Number,

    // ========== Keywords ==========
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    // ========== Special ==========
    Eof,
    Error,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 40] = [
        TokenKind::LPar,
        TokenKind::RPar,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Comma,
        TokenKind::Dot,
        TokenKind::Minus,
        TokenKind::Plus,
        TokenKind::SemiColon,
        TokenKind::Slash,
        TokenKind::Star,
        TokenKind::Bang,
        TokenKind::BangEq,
        TokenKind::Eq,
        TokenKind::EqEq,
        TokenKind::Greater,
        TokenKind::GreaterEq,
        TokenKind::Less,
        TokenKind::LessEq,
        TokenKind::Ident,
        TokenKind::String,
        TokenKind::Number,
        TokenKind::And,
        TokenKind::Class,
        TokenKind::Else,
        TokenKind::False,
        TokenKind::Fun,
        TokenKind::For,
        TokenKind::If,
        TokenKind::Nil,
        TokenKind::Or,
        TokenKind::Print,
        TokenKind::Return,
        TokenKind::Super,
        TokenKind::This,
        TokenKind::True,
        TokenKind::Var,
        TokenKind::While,
        TokenKind::Eof,
        TokenKind::Error,
    ];

    /// Display name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LPar => "LPar",
            TokenKind::RPar => "RPar",
            TokenKind::LBrace => "LBrace",
            TokenKind::RBrace => "RBrace",
            TokenKind::Comma => "Comma",
            TokenKind::Dot => "Dot",
            TokenKind::Minus => "Minus",
            TokenKind::Plus => "Plus",
            TokenKind::SemiColon => "SemiColon",
            TokenKind::Slash => "Slash",
            TokenKind::Star => "Star",
            TokenKind::Bang => "Bang",
            TokenKind::BangEq => "BangEq",
            TokenKind::Eq => "Eq",
            TokenKind::EqEq => "EqEq",
            TokenKind::Greater => "Greater",
            TokenKind::GreaterEq => "GreaterEq",
            TokenKind::Less => "Less",
            TokenKind::LessEq => "LessEq",
            TokenKind::Ident => "Ident",
            TokenKind::String => "String",
            TokenKind::Number => "Number",
            TokenKind::And => "And",
            TokenKind::Class => "Class",
            TokenKind::Else => "Else",
            TokenKind::False => "False",
            TokenKind::Fun => "Fun",
            TokenKind::For => "For",
            TokenKind::If => "If",
            TokenKind::Nil => "Nil",
            TokenKind::Or => "Or",
            TokenKind::Print => "Print",
            TokenKind::Return => "Return",
            TokenKind::Super => "Super",
            TokenKind::This => "This",
            TokenKind::True => "True",
            TokenKind::Var => "Var",
            TokenKind::While => "While",
            TokenKind::Eof => "Eof",
            TokenKind::Error => "Error",
        }
    }

    /// Fixed source spelling, if the kind has one.
    pub fn spelling(self) -> Option<&'static str> {
        let spelling = match self {
            TokenKind::LPar => "(",
            TokenKind::RPar => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Minus => "-",
            TokenKind::Plus => "+",
            TokenKind::SemiColon => ";",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Bang => "!",
            TokenKind::BangEq => "!=",
            TokenKind::Eq => "=",
            TokenKind::EqEq => "==",
            TokenKind::Greater => ">",
            TokenKind::GreaterEq => ">=",
            TokenKind::Less => "<",
            TokenKind::LessEq => "<=",
            TokenKind::And => "and",
            TokenKind::Class => "class",
            TokenKind::Else => "else",
            TokenKind::False => "false",
            TokenKind::Fun => "fun",
            TokenKind::For => "for",
            TokenKind::If => "if",
            TokenKind::Nil => "nil",
            TokenKind::Or => "or",
            TokenKind::Print => "print",
            TokenKind::Return => "return",
            TokenKind::Super => "super",
            TokenKind::This => "this",
            TokenKind::True => "true",
            TokenKind::Var => "var",
            TokenKind::While => "while",
            TokenKind::Ident | TokenKind::String | TokenKind::Number | TokenKind::Eof | TokenKind::Error => {
                return None;
            }
        };
        Some(spelling)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token with its kind, source span and the text it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub span: Span,
    pub lexeme: &'src str,
}

impl<'src> Token<'src> {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span, lexeme: &'src str) -> Self {
        Self { kind, span, lexeme }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}..{} {}", self.kind, self.span.start, self.span.end, self.lexeme)
    }
}

/// Classify an identifier spelling as a keyword, if reserved.
///
/// Dispatches on the length and then on the second byte, which is distinct among the reserved words of each
/// length, and confirms with a single comparison.
pub fn keyword(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    if !(2..=6).contains(&bytes.len()) {
        return None;
    }
    let (spelling, kind) = match (bytes.len(), bytes[1]) {
        (2, b'f') => ("if", TokenKind::If),
        (2, b'r') => ("or", TokenKind::Or),
        (3, b'n') => ("and", TokenKind::And),
        (3, b'u') => ("fun", TokenKind::Fun),
        (3, b'o') => ("for", TokenKind::For),
        (3, b'i') => ("nil", TokenKind::Nil),
        (3, b'a') => ("var", TokenKind::Var),
        (4, b'l') => ("else", TokenKind::Else),
        (4, b'h') => ("this", TokenKind::This),
        (4, b'r') => ("true", TokenKind::True),
        (5, b'l') => ("class", TokenKind::Class),
        (5, b'a') => ("false", TokenKind::False),
        (5, b'r') => ("print", TokenKind::Print),
        (5, b'u') => ("super", TokenKind::Super),
        (5, b'h') => ("while", TokenKind::While),
        (6, b'e') => ("return", TokenKind::Return),
        _ => return None,
    };
    (text == spelling).then_some(kind)
}
