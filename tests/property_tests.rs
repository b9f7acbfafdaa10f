//! Property-based tests for the Lox front end
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use loxlang::diagnostics::CollectingEmitter;
use loxlang::source::SourceText;
use loxlang::{parser, printer};
use proptest::prelude::*;

fn quiet(text: &str) -> SourceText {
    SourceText::with_emitter("prop.lox", text, CollectingEmitter::new())
}

fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}".prop_filter("keywords are not identifiers", |s| {
        loxlang_core::lang::keywords::from_str(s).is_none()
    })
}

fn same_level_operator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("+"), Just("-")]
}

// =============================================================================
// Parser Properties
// =============================================================================

proptest! {
    /// Property: operators of one precedence level fold to the left.
    #[test]
    fn same_level_operators_fold_left(
        operands in prop::collection::vec(ident_strategy(), 2..6),
        ops in prop::collection::vec(same_level_operator(), 5),
    ) {
        let mut text = operands[0].clone();
        let mut expected = operands[0].clone();
        for (operand, op) in operands[1..].iter().zip(&ops) {
            text = format!("{text} {op} {operand}");
            expected = format!("({op} {expected} {operand})");
        }

        let source = quiet(&text);
        let ast = parser::parse(&source);
        prop_assert!(!source.had_error());
        prop_assert_eq!(ast.map(|e| printer::print_expr(&e)), Some(expected));
    }

    /// Property: assignment chains nest to the right.
    #[test]
    fn assignment_nests_right(names in prop::collection::vec(ident_strategy(), 1..5)) {
        let text = format!("{} = 0", names.join(" = "));
        let expected = names.iter().rev().fold("0".to_string(), |acc, name| format!("(= {name} {acc})"));

        let source = quiet(&text);
        let printed = parser::parse(&source).map(|e| printer::print_expr(&e));
        prop_assert_eq!(printed, Some(expected));
    }

    /// Property: the parser never panics, whatever the input.
    #[test]
    fn parser_is_total(text in "[a-z0-9 +*/()!=<>.,;\"-]{0,40}") {
        let source = quiet(&text);
        let _ = parser::parse(&source);
        let program = quiet(&text);
        let _ = parser::parse_program(&program);
    }

    /// Property: a bare identifier parses to a variable that prints as itself.
    #[test]
    fn printed_identifiers_survive_reparse(ident in ident_strategy()) {
        let source = quiet(&ident);
        let printed = parser::parse(&source).map(|e| printer::print_expr(&e));
        prop_assert_eq!(printed, Some(ident));
    }
}

// =============================================================================
// Source Location Properties
// =============================================================================

proptest! {
    /// Property: a line start is located at column 1 of its line, and lines never go backwards.
    #[test]
    fn locate_is_monotonic(text in "[a-z \n]{0,60}") {
        let source = quiet(&text);
        let mut last = (1, 0);
        for offset in 0..=text.len() {
            let location = source.locate(offset);
            prop_assert!(location.line >= 1 && location.column >= 1);
            prop_assert!((location.line, location.column) > last || offset == 0);
            last = (location.line, location.column);

            if offset > 0 && text.as_bytes()[offset - 1] == b'\n' {
                prop_assert_eq!(location.column, 1);
            }
        }
    }

    /// Property: locating twice gives the same answer (the line index is built once).
    #[test]
    fn locate_is_stable(text in "[a-z\n]{0,40}", offset in 0usize..48) {
        let source = quiet(&text);
        prop_assert_eq!(source.locate(offset), source.locate(offset));
        prop_assert_eq!(source.line_starts().first().copied(), Some(0));
    }
}
