//! Abstract Syntax Tree definitions for Lox
//!
//! The tree is a pair of closed sum types, [`Expr`] (12 kinds) and [`Stmt`] (9 kinds). Every node is wrapped in
//! [`Spanned`] and owns its children; there is no sharing and no mutation after the parser hands the tree back.
//!
//! ## Notes
//! - Consumers match exhaustively, so adding a node kind is a compile error until every consumer handles it.
//! - [`NodeKind`] gives each of the 21 kinds a stable display name without relying on declaration order.

use std::fmt;

use loxlang_core::Value;
use loxlang_core::lang::operators::{self, OperatorId};

/// Source location span (half-open byte offsets `[start, end)`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

pub type Ident = String;

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `{ decl* }`
    Block(Vec<Spanned<Stmt>>),
    /// `class Name < Super { methods }`
    Class(ClassDecl),
    /// `expr ;`
    Expression(Spanned<Expr>),
    /// `fun name(params) { body }`
    Function(FunctionDecl),
    /// `if (cond) then else other`
    If(IfStmt),
    /// `print expr ;`
    Print(Spanned<Expr>),
    /// `return expr? ;`
    Return(Option<Spanned<Expr>>),
    /// `var name = init? ;`
    Var(VarDecl),
    /// `while (cond) body`; `for` loops are desugared into this
    While(WhileStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub name: Spanned<Ident>,
    pub superclass: Option<Spanned<Ident>>,
    pub methods: Vec<Spanned<FunctionDecl>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: Spanned<Ident>,
    pub params: Vec<Spanned<Ident>>,
    pub body: Vec<Spanned<Stmt>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Spanned<Expr>,
    pub then_branch: Box<Spanned<Stmt>>,
    pub else_branch: Option<Box<Spanned<Stmt>>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: Spanned<Ident>,
    pub initializer: Option<Spanned<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Spanned<Expr>,
    pub body: Box<Spanned<Stmt>>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `name = value`
    Assign(Spanned<Ident>, Box<Spanned<Expr>>),
    /// Binary operation: `a + b`
    Binary(Box<Spanned<Expr>>, BinaryOp, Box<Spanned<Expr>>),
    /// `callee(args)`
    Call(CallExpr),
    /// Property access: `object.name`
    Get(Box<Spanned<Expr>>, Spanned<Ident>),
    /// `( expr )`
    Grouping(Box<Spanned<Expr>>),
    /// `nil`, `true`, `false`, numbers and strings
    Literal(Value),
    /// Short-circuit `and` / `or`
    Logical(Box<Spanned<Expr>>, LogicalOp, Box<Spanned<Expr>>),
    /// Property assignment: `object.name = value`
    Set(Box<Spanned<Expr>>, Spanned<Ident>, Box<Spanned<Expr>>),
    /// `super.method`
    Super(Spanned<Ident>),
    /// `this`
    This,
    /// Unary operation: `-x`, `!x`
    Unary(UnaryOp, Box<Spanned<Expr>>),
    /// Variable reference
    Variable(Ident),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Spanned<Expr>>,
    /// Span of the closing `)`, used to locate arity errors.
    pub paren: Span,
    pub arguments: Vec<Spanned<Expr>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl BinaryOp {
    pub fn operator_id(self) -> OperatorId {
        match self {
            BinaryOp::Add => OperatorId::Plus,
            BinaryOp::Sub => OperatorId::Minus,
            BinaryOp::Mul => OperatorId::Star,
            BinaryOp::Div => OperatorId::Slash,
            BinaryOp::Eq => OperatorId::EqEq,
            BinaryOp::NotEq => OperatorId::BangEq,
            BinaryOp::Lt => OperatorId::Less,
            BinaryOp::LtEq => OperatorId::LessEq,
            BinaryOp::Gt => OperatorId::Greater,
            BinaryOp::GtEq => OperatorId::GreaterEq,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(operators::as_str(self.operator_id()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            LogicalOp::And => OperatorId::And,
            LogicalOp::Or => OperatorId::Or,
        };
        f.write_str(operators::as_str(id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Not,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            UnaryOp::Neg => OperatorId::Minus,
            UnaryOp::Not => OperatorId::Bang,
        };
        f.write_str(operators::as_str(id))
    }
}

// ============================================================================
// Node kinds
// ============================================================================

/// Tag for every node kind in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    AssignExpr,
    BinaryExpr,
    CallExpr,
    GetExpr,
    GroupingExpr,
    LiteralExpr,
    LogicalExpr,
    SetExpr,
    SuperExpr,
    ThisExpr,
    UnaryExpr,
    VariableExpr,
    BlockStmt,
    ClassStmt,
    ExpressionStmt,
    FunctionStmt,
    IfStmt,
    PrintStmt,
    ReturnStmt,
    VarStmt,
    WhileStmt,
}

impl NodeKind {
    pub const ALL: [NodeKind; 21] = [
        NodeKind::AssignExpr,
        NodeKind::BinaryExpr,
        NodeKind::CallExpr,
        NodeKind::GetExpr,
        NodeKind::GroupingExpr,
        NodeKind::LiteralExpr,
        NodeKind::LogicalExpr,
        NodeKind::SetExpr,
        NodeKind::SuperExpr,
        NodeKind::ThisExpr,
        NodeKind::UnaryExpr,
        NodeKind::VariableExpr,
        NodeKind::BlockStmt,
        NodeKind::ClassStmt,
        NodeKind::ExpressionStmt,
        NodeKind::FunctionStmt,
        NodeKind::IfStmt,
        NodeKind::PrintStmt,
        NodeKind::ReturnStmt,
        NodeKind::VarStmt,
        NodeKind::WhileStmt,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NodeKind::AssignExpr => "AssignExpr",
            NodeKind::BinaryExpr => "BinaryExpr",
            NodeKind::CallExpr => "CallExpr",
            NodeKind::GetExpr => "GetExpr",
            NodeKind::GroupingExpr => "GroupingExpr",
            NodeKind::LiteralExpr => "LiteralExpr",
            NodeKind::LogicalExpr => "LogicalExpr",
            NodeKind::SetExpr => "SetExpr",
            NodeKind::SuperExpr => "SuperExpr",
            NodeKind::ThisExpr => "ThisExpr",
            NodeKind::UnaryExpr => "UnaryExpr",
            NodeKind::VariableExpr => "VariableExpr",
            NodeKind::BlockStmt => "BlockStmt",
            NodeKind::ClassStmt => "ClassStmt",
            NodeKind::ExpressionStmt => "ExpressionStmt",
            NodeKind::FunctionStmt => "FunctionStmt",
            NodeKind::IfStmt => "IfStmt",
            NodeKind::PrintStmt => "PrintStmt",
            NodeKind::ReturnStmt => "ReturnStmt",
            NodeKind::VarStmt => "VarStmt",
            NodeKind::WhileStmt => "WhileStmt",
        }
    }

    pub fn is_expression(self) -> bool {
        self.name().ends_with("Expr")
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Expr {
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Assign(..) => NodeKind::AssignExpr,
            Expr::Binary(..) => NodeKind::BinaryExpr,
            Expr::Call(_) => NodeKind::CallExpr,
            Expr::Get(..) => NodeKind::GetExpr,
            Expr::Grouping(_) => NodeKind::GroupingExpr,
            Expr::Literal(_) => NodeKind::LiteralExpr,
            Expr::Logical(..) => NodeKind::LogicalExpr,
            Expr::Set(..) => NodeKind::SetExpr,
            Expr::Super(_) => NodeKind::SuperExpr,
            Expr::This => NodeKind::ThisExpr,
            Expr::Unary(..) => NodeKind::UnaryExpr,
            Expr::Variable(_) => NodeKind::VariableExpr,
        }
    }
}

impl Stmt {
    pub fn kind(&self) -> NodeKind {
        match self {
            Stmt::Block(_) => NodeKind::BlockStmt,
            Stmt::Class(_) => NodeKind::ClassStmt,
            Stmt::Expression(_) => NodeKind::ExpressionStmt,
            Stmt::Function(_) => NodeKind::FunctionStmt,
            Stmt::If(_) => NodeKind::IfStmt,
            Stmt::Print(_) => NodeKind::PrintStmt,
            Stmt::Return(_) => NodeKind::ReturnStmt,
            Stmt::Var(_) => NodeKind::VarStmt,
            Stmt::While(_) => NodeKind::WhileStmt,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
