/// Binding power of a token, weakest first.
///
/// ## Notes
/// - Every level has a left and a right sub-level. A left-associative operator recurses with a right power one
///   step above its left power, so an equal operator to its right stops the recursion; assignment does the
///   opposite and is right-associative.
/// - The derived `Ord` is the precedence order; the variant order is load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BindingPower {
    None,
    AssignRight,
    AssignLeft,
    OrLeft,
    OrRight,
    AndLeft,
    AndRight,
    EqualityLeft,
    EqualityRight,
    ComparisonLeft,
    ComparisonRight,
    AddLeft,
    AddRight,
    MulLeft,
    MulRight,
    Unary,
    Call,
    Primary,
}

/// Handler run when a token starts an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    Literal,
    Number,
    String,
    Variable,
    This,
    Super,
    Unary,
    Grouping,
}

/// Handler run when a token continues an expression after a left operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Infix {
    Binary,
    Logical,
    Assign,
    Call,
    Get,
}

/// Parsing behaviour of one token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseRule {
    pub prefix: Option<Prefix>,
    pub infix: Option<Infix>,
    pub left: BindingPower,
    pub right: BindingPower,
}

impl ParseRule {
    const NONE: ParseRule = ParseRule {
        prefix: None,
        infix: None,
        left: BindingPower::None,
        right: BindingPower::None,
    };

    const fn prefix(prefix: Prefix) -> Self {
        Self {
            prefix: Some(prefix),
            ..Self::NONE
        }
    }

    const fn infix(infix: Infix, left: BindingPower, right: BindingPower) -> Self {
        Self {
            prefix: None,
            infix: Some(infix),
            left,
            right,
        }
    }
}

/// The rule table.
///
/// Exhaustive over [`TokenKind`]: a new token kind does not compile until it is given a rule.
pub const fn rule_for(kind: TokenKind) -> ParseRule {
    use BindingPower as Bp;

    match kind {
        TokenKind::Nil | TokenKind::True | TokenKind::False => ParseRule::prefix(Prefix::Literal),
        TokenKind::Number => ParseRule::prefix(Prefix::Number),
        TokenKind::String => ParseRule::prefix(Prefix::String),
        TokenKind::Ident => ParseRule::prefix(Prefix::Variable),
        TokenKind::This => ParseRule::prefix(Prefix::This),
        TokenKind::Super => ParseRule::prefix(Prefix::Super),
        TokenKind::Bang => ParseRule::prefix(Prefix::Unary),

        TokenKind::Minus => ParseRule {
            prefix: Some(Prefix::Unary),
            ..ParseRule::infix(Infix::Binary, Bp::AddLeft, Bp::AddRight)
        },
        TokenKind::LPar => ParseRule {
            prefix: Some(Prefix::Grouping),
            ..ParseRule::infix(Infix::Call, Bp::Call, Bp::Primary)
        },

        TokenKind::Plus => ParseRule::infix(Infix::Binary, Bp::AddLeft, Bp::AddRight),
        TokenKind::Star | TokenKind::Slash => ParseRule::infix(Infix::Binary, Bp::MulLeft, Bp::MulRight),
        TokenKind::EqEq | TokenKind::BangEq => ParseRule::infix(Infix::Binary, Bp::EqualityLeft, Bp::EqualityRight),
        TokenKind::Greater | TokenKind::GreaterEq | TokenKind::Less | TokenKind::LessEq => {
            ParseRule::infix(Infix::Binary, Bp::ComparisonLeft, Bp::ComparisonRight)
        }
        TokenKind::And => ParseRule::infix(Infix::Logical, Bp::AndLeft, Bp::AndRight),
        TokenKind::Or => ParseRule::infix(Infix::Logical, Bp::OrLeft, Bp::OrRight),
        TokenKind::Eq => ParseRule::infix(Infix::Assign, Bp::AssignLeft, Bp::AssignRight),
        TokenKind::Dot => ParseRule::infix(Infix::Get, Bp::Call, Bp::Primary),

        TokenKind::RPar
        | TokenKind::LBrace
        | TokenKind::RBrace
        | TokenKind::Comma
        | TokenKind::SemiColon
        | TokenKind::Class
        | TokenKind::Else
        | TokenKind::Fun
        | TokenKind::For
        | TokenKind::If
        | TokenKind::Print
        | TokenKind::Return
        | TokenKind::Var
        | TokenKind::While
        | TokenKind::Eof
        | TokenKind::Error => ParseRule::NONE,
    }
}
