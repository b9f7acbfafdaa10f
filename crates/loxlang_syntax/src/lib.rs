//! Syntax front end for the Lox language: source text, lexer, parser, AST, diagnostics.
//!
//! This crate is dependency-light and intended for reuse by the CLI, a future evaluator, and tooling.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it does not do name resolution or evaluation.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `loxlang_core::lang` registries.
//! - Diagnostics are reported through the [`source::SourceText`] being compiled; check
//!   [`source::SourceText::had_error`] alongside the returned AST.
//!
//! ## Examples
//! ```rust
//! use loxlang_syntax::{diagnostics::CollectingEmitter, parser, printer, source::SourceText};
//!
//! let source = SourceText::with_emitter("demo.lox", "a = b = 1", CollectingEmitter::new());
//! let ast = parser::parse(&source).unwrap();
//! assert_eq!(printer::print_expr(&ast), "(= a (= b 1))");
//! assert!(!source.had_error());
//! ```
//!
//! ## See also
//! - `loxlang_core::lang` for registry-backed language vocabulary (keywords/operators/punctuation).

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod source;
pub mod token_helpers;
