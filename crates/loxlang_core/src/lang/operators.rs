//! Operator vocabulary.
//!
//! This module defines the canonical operator set (symbol operators like `+` and the word operators `and`/`or`)
//! along with precedence, associativity, and fixity.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - `-` is both a prefix (negation) and an infix (subtraction) operator; its entry uses [`Fixity::PrefixOrInfix`]
//!   and its infix precedence.
//! - `precedence` mirrors the parser's binding-power ladder. The parser keeps its own table; the registry is used
//!   for tooling and guardrail tests.
//!
//! ## Examples
//! ```rust
//! use loxlang_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("<="), Some(OperatorId::LessEq));
//! assert!(operators::info_for(OperatorId::Star).precedence > operators::info_for(OperatorId::Plus).precedence);
//! ```

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// Define whether an operator is infix (binary), prefix (unary), or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
    PrefixOrInfix,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,

    // Logical
    Bang,
    And,
    Or,

    // Comparison
    EqEq,
    BangEq,
    Greater,
    GreaterEq,
    Less,
    LessEq,

    // Assignment
    Eq,
}

/// Precedence levels, higher binds tighter.
pub mod precedence {
    pub const ASSIGNMENT: u8 = 10;
    pub const OR: u8 = 20;
    pub const AND: u8 = 30;
    pub const EQUALITY: u8 = 40;
    pub const COMPARISON: u8 = 50;
    pub const TERM: u8 = 60;
    pub const FACTOR: u8 = 70;
    pub const UNARY: u8 = 80;
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub precedence: u8,
    pub associativity: Associativity,
    pub fixity: Fixity,
    pub is_keyword_spelling: bool,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Plus, "+", precedence::TERM, Associativity::Left, Fixity::Infix, false),
    op(
        OperatorId::Minus,
        "-",
        precedence::TERM,
        Associativity::Left,
        Fixity::PrefixOrInfix,
        false,
    ),
    op(OperatorId::Star, "*", precedence::FACTOR, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::Slash, "/", precedence::FACTOR, Associativity::Left, Fixity::Infix, false),
    // Logical
    op(OperatorId::Bang, "!", precedence::UNARY, Associativity::Right, Fixity::Prefix, false),
    op(OperatorId::And, "and", precedence::AND, Associativity::Left, Fixity::Infix, true),
    op(OperatorId::Or, "or", precedence::OR, Associativity::Left, Fixity::Infix, true),
    // Comparison
    op(OperatorId::EqEq, "==", precedence::EQUALITY, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::BangEq, "!=", precedence::EQUALITY, Associativity::Left, Fixity::Infix, false),
    op(
        OperatorId::Greater,
        ">",
        precedence::COMPARISON,
        Associativity::Left,
        Fixity::Infix,
        false,
    ),
    op(
        OperatorId::GreaterEq,
        ">=",
        precedence::COMPARISON,
        Associativity::Left,
        Fixity::Infix,
        false,
    ),
    op(OperatorId::Less, "<", precedence::COMPARISON, Associativity::Left, Fixity::Infix, false),
    op(
        OperatorId::LessEq,
        "<=",
        precedence::COMPARISON,
        Associativity::Left,
        Fixity::Infix,
        false,
    ),
    // Assignment
    op(OperatorId::Eq, "=", precedence::ASSIGNMENT, Associativity::Right, Fixity::Infix, false),
];

/// Full metadata.
///
/// ## Returns
/// - The associated [`OperatorInfo`] from [`OPERATORS`].
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .expect("INVARIANT: every OperatorId has a registry entry")
}

/// Canonical spelling.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Resolve an operator spelling to its identifier.
///
/// ## Parameters
/// - `spelling`: Candidate operator token (symbol or word operator).
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spelling: &'static str,
    precedence: u8,
    associativity: Associativity,
    fixity: Fixity,
    is_keyword_spelling: bool,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence,
        associativity,
        fixity,
        is_keyword_spelling,
    }
}
