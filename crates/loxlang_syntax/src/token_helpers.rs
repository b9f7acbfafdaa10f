//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers map the lexer's flat token kinds onto the `loxlang_core::lang` registry IDs, so tooling and
//! guardrail tests can reason about vocabulary without string comparisons.

use crate::lexer::{Token, TokenKind};
use loxlang_core::lang::keywords::KeywordId;
use loxlang_core::lang::operators::OperatorId;
use loxlang_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(self) -> Option<KeywordId> {
        let id = match self {
            TokenKind::And => KeywordId::And,
            TokenKind::Class => KeywordId::Class,
            TokenKind::Else => KeywordId::Else,
            TokenKind::False => KeywordId::False,
            TokenKind::Fun => KeywordId::Fun,
            TokenKind::For => KeywordId::For,
            TokenKind::If => KeywordId::If,
            TokenKind::Nil => KeywordId::Nil,
            TokenKind::Or => KeywordId::Or,
            TokenKind::Print => KeywordId::Print,
            TokenKind::Return => KeywordId::Return,
            TokenKind::Super => KeywordId::Super,
            TokenKind::This => KeywordId::This,
            TokenKind::True => KeywordId::True,
            TokenKind::Var => KeywordId::Var,
            TokenKind::While => KeywordId::While,
            _ => return None,
        };
        Some(id)
    }

    /// The token kind the lexer produces for a reserved word.
    pub fn from_keyword(id: KeywordId) -> TokenKind {
        match id {
            KeywordId::And => TokenKind::And,
            KeywordId::Class => TokenKind::Class,
            KeywordId::Else => TokenKind::Else,
            KeywordId::False => TokenKind::False,
            KeywordId::Fun => TokenKind::Fun,
            KeywordId::For => TokenKind::For,
            KeywordId::If => TokenKind::If,
            KeywordId::Nil => TokenKind::Nil,
            KeywordId::Or => TokenKind::Or,
            KeywordId::Print => TokenKind::Print,
            KeywordId::Return => TokenKind::Return,
            KeywordId::Super => TokenKind::Super,
            KeywordId::This => TokenKind::This,
            KeywordId::True => TokenKind::True,
            KeywordId::Var => TokenKind::Var,
            KeywordId::While => TokenKind::While,
        }
    }

    /// Return the operator id, if this token is (or spells) an operator.
    pub fn operator_id(self) -> Option<OperatorId> {
        let id = match self {
            TokenKind::Plus => OperatorId::Plus,
            TokenKind::Minus => OperatorId::Minus,
            TokenKind::Star => OperatorId::Star,
            TokenKind::Slash => OperatorId::Slash,
            TokenKind::Bang => OperatorId::Bang,
            TokenKind::BangEq => OperatorId::BangEq,
            TokenKind::Eq => OperatorId::Eq,
            TokenKind::EqEq => OperatorId::EqEq,
            TokenKind::Greater => OperatorId::Greater,
            TokenKind::GreaterEq => OperatorId::GreaterEq,
            TokenKind::Less => OperatorId::Less,
            TokenKind::LessEq => OperatorId::LessEq,
            TokenKind::And => OperatorId::And,
            TokenKind::Or => OperatorId::Or,
            _ => return None,
        };
        Some(id)
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punctuation_id(self) -> Option<PunctuationId> {
        let id = match self {
            TokenKind::LPar => PunctuationId::LPar,
            TokenKind::RPar => PunctuationId::RPar,
            TokenKind::LBrace => PunctuationId::LBrace,
            TokenKind::RBrace => PunctuationId::RBrace,
            TokenKind::Comma => PunctuationId::Comma,
            TokenKind::Dot => PunctuationId::Dot,
            TokenKind::SemiColon => PunctuationId::SemiColon,
            _ => return None,
        };
        Some(id)
    }

    pub fn is_keyword(self) -> bool {
        self.keyword_id().is_some()
    }

    /// Return `true` for identifier, string and number tokens.
    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::Ident | TokenKind::String | TokenKind::Number)
    }
}

impl Token<'_> {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    /// Convenience wrapper for `self.kind.punctuation_id()`.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        self.kind.punctuation_id()
    }
}
