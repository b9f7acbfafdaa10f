//! Parser for the Lox programming language
//!
//! A precedence-climbing (Pratt) parser: every token kind maps to a [`ParseRule`] naming an optional prefix
//! handler, an optional infix handler and a pair of binding powers. Expressions are driven entirely by that table;
//! statements dispatch on their leading keyword and reuse the expression engine.
//!
//! ## Notes
//! - Ordinary syntax errors (a missing `)`, an invalid assignment target, an out-of-range number) are reported and
//!   parsing continues.
//! - A token that cannot start an expression is fatal, as is nesting deeper than `MAX_NESTING_DEPTH`. Both unwind
//!   as [`ParsePanic`] to the entry point, which returns `None`.
//! - When an AST comes back, diagnostics may still have been reported; check
//!   [`SourceText::had_error`](crate::source::SourceText::had_error).
//!
//! ## Examples
//!
//! ```rust
//! use loxlang_syntax::{parser, printer, source::SourceText};
//!
//! let source = SourceText::new("demo.lox", "1 + 2 * 3");
//! let ast = parser::parse(&source).unwrap();
//! assert_eq!(printer::print_expr(&ast), "(+ 1 (* 2 3))");
//! ```

use loxlang_core::Value;
use loxlang_core::errors::{
    EXPECTED_END_OF_EXPRESSION_MSG, EXPECTED_EXPRESSION_START_MSG, INVALID_ASSIGNMENT_TARGET_MSG, MAX_ARITY,
    MAX_NESTING_DEPTH, NESTING_TOO_DEEP_MSG, NUMBER_OUT_OF_RANGE_MSG, UNPARSABLE_NUMBER_MSG,
};

use crate::ast::*;
use crate::lexer::{Lexer, Token, TokenKind};
use crate::source::SourceText;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/rules.rs");
include!("parser/helpers.rs");
include!("parser/expr.rs");
include!("parser/stmts.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
