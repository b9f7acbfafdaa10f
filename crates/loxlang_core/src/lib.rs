//! Provide the canonical Lox vocabulary, shared diagnostic messages and literal values.
//!
//! This crate is intentionally small and dependency-free. It contains the data that both the syntax front end and
//! any later stage (evaluator, tooling) must agree on:
//! - reserved words, operators and punctuation with their spellings and metadata ([`lang`]),
//! - the user-facing message catalog for lexical and syntax errors ([`errors`]),
//! - the literal payload type carried by the AST ([`value`]).
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no AST types.

pub mod errors;
pub mod lang;
pub mod value;

pub use value::{Object, Value};
