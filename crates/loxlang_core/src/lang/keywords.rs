//! Define the reserved keyword vocabulary for the Lox language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings, categories and usage hints.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**. Lox has no keyword aliases.
//! - The lexer classifies identifiers with a hand-written first-letter dispatch; the guardrail tests keep that
//!   dispatch and this table in agreement.
//! - `and` and `or` are also "word operators". If you need their binding strength, use [`crate::lang::operators`].
//!
//! ## Examples
//! ```rust
//! use loxlang_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("fun"), Some(KeywordId::Fun));
//! assert_eq!(keywords::as_str(KeywordId::Nil), "nil");
//! assert_eq!(keywords::from_str("Fun"), None);
//! ```
//!
//! ## See also
//! - [`crate::lang::operators`] for operator precedence/fixity metadata.

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Control flow / statements
    If,
    Else,
    For,
    While,
    Return,
    Print,

    // Definitions / declarations
    Class,
    Fun,
    Var,

    // Receivers
    This,
    Super,

    // Literals
    True,
    False,
    Nil,

    // Word operators
    And,
    Or,
}

/// High-level grouping for documentation and tooling.
///
/// ## Notes
/// - Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    ControlFlow,
    Definition,
    Receiver,
    Literal,
    Operator,
}

/// Usage context hints (not enforced here; the parser owns context).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordUsage {
    Statement,
    Expression,
    Operator,
    /// Only meaningful inside a class body.
    ReceiverOnly,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub usage: &'static [KeywordUsage],
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Control flow / statements
    info(KeywordId::If, "if", KeywordCategory::ControlFlow, &[KeywordUsage::Statement]),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow, &[KeywordUsage::Statement]),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow, &[KeywordUsage::Statement]),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow, &[KeywordUsage::Statement]),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow, &[KeywordUsage::Statement]),
    info(KeywordId::Print, "print", KeywordCategory::ControlFlow, &[KeywordUsage::Statement]),
    // Definitions / declarations
    info(KeywordId::Class, "class", KeywordCategory::Definition, &[KeywordUsage::Statement]),
    info(KeywordId::Fun, "fun", KeywordCategory::Definition, &[KeywordUsage::Statement]),
    info(KeywordId::Var, "var", KeywordCategory::Definition, &[KeywordUsage::Statement]),
    // Receivers
    info(
        KeywordId::This,
        "this",
        KeywordCategory::Receiver,
        &[KeywordUsage::Expression, KeywordUsage::ReceiverOnly],
    ),
    info(
        KeywordId::Super,
        "super",
        KeywordCategory::Receiver,
        &[KeywordUsage::Expression, KeywordUsage::ReceiverOnly],
    ),
    // Literals
    info(KeywordId::True, "true", KeywordCategory::Literal, &[KeywordUsage::Expression]),
    info(KeywordId::False, "false", KeywordCategory::Literal, &[KeywordUsage::Expression]),
    info(KeywordId::Nil, "nil", KeywordCategory::Literal, &[KeywordUsage::Expression]),
    // Word operators
    info(KeywordId::And, "and", KeywordCategory::Operator, &[KeywordUsage::Operator]),
    info(KeywordId::Or, "or", KeywordCategory::Operator, &[KeywordUsage::Operator]),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling for `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Usage hints.
pub fn usage(id: KeywordId) -> &'static [KeywordUsage] {
    info_for(id).usage
}

/// Full metadata.
///
/// ## Returns
/// - The associated [`KeywordInfo`] from [`KEYWORDS`].
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: every KeywordId has a registry entry")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling matches this registry.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    usage: &'static [KeywordUsage],
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        usage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_keyword_round_trips_through_its_spelling() {
        for k in KEYWORDS {
            assert_eq!(from_str(k.canonical), Some(k.id));
            assert_eq!(as_str(k.id), k.canonical);
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(from_str("CLASS"), None);
        assert_eq!(from_str("Nil"), None);
        assert_eq!(from_str("retrun"), None);
    }

    #[test]
    fn receivers_are_flagged_receiver_only() {
        assert!(usage(KeywordId::This).contains(&KeywordUsage::ReceiverOnly));
        assert_eq!(category(KeywordId::Super), KeywordCategory::Receiver);
    }
}
