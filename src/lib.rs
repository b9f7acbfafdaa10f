#![forbid(unsafe_code)]
//! Lox front end
//!
//! Turns Lox source text into an AST: a pull lexer, a table-driven Pratt parser and diagnostics that quote the
//! offending source line. The language pieces live in the workspace crates; this crate adds the command line.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Parse errors** are never panics. Recoverable ones are reported and parsing continues; unrecoverable ones unwind
//!   to the parser entry point, which returns `None`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a front-end bug (logic error), use `.expect("INVARIANT: reason")` with
//!   a clear explanation.

pub mod cli;

pub use loxlang_core::{Object, Value};
pub use loxlang_syntax::{ast, diagnostics, lexer, parser, printer, source};
