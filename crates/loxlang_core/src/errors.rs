//! Shared user-facing diagnostic messages.
//!
//! The lexer and parser report through these constants so tests, tooling and any later stage can match on the
//! same text.

/// A string literal reached the end of input before its closing `"`.
pub const UNTERMINATED_STRING_MSG: &str = "unterminated string literal";

/// A `/* ... */` block comment (possibly nested) reached the end of input.
pub const UNTERMINATED_COMMENT_MSG: &str = "unterminated comment";

/// A run of bytes that cannot start any token.
pub const UNKNOWN_CHARACTER_MSG: &str = "unknown character";

/// No prefix rule applies to the current token. Aborts the parse.
pub const EXPECTED_EXPRESSION_START_MSG: &str = "Expected expression start";

/// A complete expression was parsed but more tokens follow it.
pub const EXPECTED_END_OF_EXPRESSION_MSG: &str = "Expected end of expression";

/// Number text that the float conversion rejects.
pub const UNPARSABLE_NUMBER_MSG: &str = "Could not parse this number";

/// Number text whose value does not fit a double.
pub const NUMBER_OUT_OF_RANGE_MSG: &str =
    "Number literal is out of range for Lox number (IEEE 754 double precision floating point)";

/// The left side of `=` is neither a variable nor a property access.
pub const INVALID_ASSIGNMENT_TARGET_MSG: &str = "Invalid assignment target";

/// Upper bound on parameters of a function and arguments of a call.
pub const MAX_ARITY: usize = 255;

/// Expressions and statements may nest at most this deep before the parse is abandoned.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Reported once when [`MAX_NESTING_DEPTH`] is exceeded. Like a missing expression start, it aborts the parse.
pub const NESTING_TOO_DEEP_MSG: &str = "Expression nests too deeply";
