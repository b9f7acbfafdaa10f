#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on precedence and associativity, on which errors are recoverable, and on the single panic
/// boundary.
mod tests {
    use super::*;
    use crate::diagnostics::CollectingEmitter;
    use crate::printer::{print_expr, print_program};

    fn source(text: &str) -> (SourceText, CollectingEmitter) {
        let emitter = CollectingEmitter::new();
        (SourceText::with_emitter("test.lox", text, emitter.clone()), emitter)
    }

    /// Parse an expression that must produce no diagnostics and print it.
    fn sexpr(text: &str) -> String {
        let (src, emitter) = source(text);
        let ast = parse(&src).unwrap_or_else(|| panic!("no AST for {text:?}: {:?}", emitter.messages()));
        assert!(emitter.is_empty(), "diagnostics for {text:?}: {:?}", emitter.messages());
        print_expr(&ast)
    }

    #[test]
    fn test_grouping_and_unary_precedence() {
        assert_eq!(
            sexpr("(5 - (3 - 1)) + -1"),
            "(+ (grouping (- 5 (grouping (- 3 1)))) (- 1))"
        );
    }

    #[test]
    fn test_same_level_operators_associate_left() {
        assert_eq!(sexpr("1 - 2 + 3"), "(+ (- 1 2) 3)");
        assert_eq!(sexpr("8 / 4 * 2"), "(* (/ 8 4) 2)");
        assert_eq!(sexpr("a == b != c"), "(!= (== a b) c)");
        assert_eq!(sexpr("a < b >= c"), "(>= (< a b) c)");
        assert_eq!(sexpr("a or b or c"), "(or (or a b) c)");
    }

    #[test]
    fn test_assignment_associates_right() {
        assert_eq!(sexpr("a = b = c"), "(= a (= b c))");
        assert_eq!(sexpr("a = b or c"), "(= a (or b c))");
    }

    #[test]
    fn test_precedence_ladder() {
        assert_eq!(sexpr("1 + 2 * 3"), "(+ 1 (* 2 3))");
        assert_eq!(sexpr("1 * 2 + 3"), "(+ (* 1 2) 3)");
        assert_eq!(sexpr("a < b == c > d"), "(== (< a b) (> c d))");
        assert_eq!(sexpr("a and b == c"), "(and a (== b c))");
        assert_eq!(sexpr("-a.b(c)"), "(- (call (. a b) c))");
        assert_eq!(sexpr("!!true"), "(! (! true))");
        assert_eq!(sexpr("f(1)(2)"), "(call (call f 1) 2)");
    }

    #[test]
    fn test_literals() {
        assert_eq!(sexpr("nil"), "nil");
        assert_eq!(sexpr("false"), "false");
        assert_eq!(sexpr("\"two words\""), "\"two words\"");
        assert_eq!(sexpr("007"), "7");
    }

    #[test]
    fn test_rule_table_binding_powers() {
        assert!(BindingPower::AssignRight < BindingPower::AssignLeft);
        assert!(rule_for(TokenKind::Star).left > rule_for(TokenKind::Plus).left);
        assert_eq!(rule_for(TokenKind::LPar).right, BindingPower::Primary);
        assert_eq!(rule_for(TokenKind::Minus).prefix, Some(Prefix::Unary));
        assert_eq!(rule_for(TokenKind::Error), ParseRule::NONE);
        for kind in TokenKind::ALL {
            let rule = rule_for(kind);
            assert_eq!(rule.infix.is_some(), rule.left != BindingPower::None, "{kind}");
        }
    }

    #[test]
    fn test_spans_cover_the_expression() {
        let (src, _) = source("  (1 + 2) * x");
        let ast = parse(&src).unwrap();
        assert_eq!(ast.span, Span::new(2, 13));
        let Expr::Binary(left, BinaryOp::Mul, _) = &ast.node else {
            panic!("expected multiplication, got {:?}", ast.node);
        };
        assert_eq!(left.span, Span::new(2, 9));
    }

    #[test]
    fn test_empty_input_is_silent() {
        let (src, emitter) = source("");
        assert_eq!(parse(&src), None);
        assert_eq!(parse_program(&src), None);
        assert!(emitter.is_empty());
        assert!(!src.had_error());
    }

    #[test]
    fn test_missing_expression_start_panics() {
        let (src, emitter) = source(")");
        assert_eq!(parse(&src), None);
        assert_eq!(emitter.messages(), vec![EXPECTED_EXPRESSION_START_MSG.to_string()]);
    }

    #[test]
    fn test_panic_inside_nested_expression_yields_nothing() {
        let (src, emitter) = source("1 + (2 * )");
        assert_eq!(parse(&src), None);
        assert_eq!(emitter.len(), 1);
        assert_eq!(emitter.diagnostics()[0].span, Span::new(9, 10));
    }

    #[test]
    fn test_whitespace_only_input_reports() {
        let (src, emitter) = source("   ");
        assert_eq!(parse(&src), None);
        assert_eq!(emitter.messages(), vec![EXPECTED_EXPRESSION_START_MSG.to_string()]);
    }

    #[test]
    fn test_missing_close_paren_is_recoverable() {
        let (src, emitter) = source("(1 + 2");
        let ast = parse(&src).expect("a missing ')' must not abort the parse");
        assert_eq!(print_expr(&ast), "(grouping (+ 1 2))");
        assert_eq!(emitter.messages(), vec!["expected closing ')'".to_string()]);
        assert!(src.had_error());
    }

    #[test]
    fn test_trailing_tokens_are_reported_once() {
        let (src, emitter) = source("1 2 3");
        let ast = parse(&src).unwrap();
        assert_eq!(print_expr(&ast), "1");
        assert_eq!(emitter.messages(), vec![EXPECTED_END_OF_EXPRESSION_MSG.to_string()]);
        assert_eq!(emitter.diagnostics()[0].span, Span::new(2, 3));
    }

    #[test]
    fn test_invalid_assignment_target_keeps_left_operand() {
        let (src, emitter) = source("a + b = c");
        let ast = parse(&src).unwrap();
        assert_eq!(print_expr(&ast), "(+ a b)");
        assert_eq!(emitter.messages(), vec![INVALID_ASSIGNMENT_TARGET_MSG.to_string()]);
    }

    #[test]
    fn test_out_of_range_number_becomes_zero() {
        let text = "9".repeat(400);
        let (src, emitter) = source(&format!("{text} + 1"));
        let ast = parse(&src).unwrap();
        assert_eq!(print_expr(&ast), "(+ 0 1)");
        assert_eq!(emitter.messages(), vec![NUMBER_OUT_OF_RANGE_MSG.to_string()]);
    }

    #[test]
    fn test_lexical_error_token_has_no_prefix_rule() {
        let (src, emitter) = source("1 + @");
        assert_eq!(parse(&src), None);
        assert_eq!(
            emitter.messages(),
            vec![
                loxlang_core::errors::UNKNOWN_CHARACTER_MSG.to_string(),
                EXPECTED_EXPRESSION_START_MSG.to_string(),
            ]
        );
    }

    #[test]
    fn test_too_many_arguments_is_recoverable() {
        let args = vec!["1"; MAX_ARITY + 1].join(", ");
        let (src, emitter) = source(&format!("f({args})"));
        let ast = parse(&src).unwrap();
        let Expr::Call(call) = &ast.node else {
            panic!("expected call");
        };
        assert_eq!(call.arguments.len(), MAX_ARITY + 1);
        assert_eq!(emitter.messages(), vec![format!("Can't have more than {MAX_ARITY} arguments")]);
    }

    #[test]
    fn test_arity_overflow_is_reported_once() {
        let args = vec!["1"; 300].join(", ");
        let (src, emitter) = source(&format!("f({args})"));
        assert!(parse(&src).is_some());
        assert_eq!(emitter.messages(), vec![format!("Can't have more than {MAX_ARITY} arguments")]);

        let params: Vec<String> = (0..300).map(|i| format!("p{i}")).collect();
        let (src, emitter) = source(&format!("fun f({}) {{}}", params.join(", ")));
        let stmts = parse_program(&src).unwrap();
        let Stmt::Function(function) = &stmts[0].node else {
            panic!("expected function");
        };
        assert_eq!(function.params.len(), 300);
        assert_eq!(emitter.messages(), vec![format!("Can't have more than {MAX_ARITY} parameters")]);
    }

    #[test]
    fn test_deep_nesting_is_fatal_not_an_overflow() {
        for text in ["-".repeat(100_000) + "1", "(".repeat(100_000)] {
            let (src, emitter) = source(&text);
            assert_eq!(parse(&src), None);
            assert_eq!(emitter.messages(), vec![NESTING_TOO_DEEP_MSG.to_string()]);
            assert_eq!(emitter.diagnostics()[0].span, Span::new(MAX_NESTING_DEPTH, MAX_NESTING_DEPTH + 1));
        }

        let (src, emitter) = source(&"{".repeat(100_000));
        assert_eq!(parse_program(&src), None);
        assert_eq!(emitter.messages(), vec![NESTING_TOO_DEEP_MSG.to_string()]);
    }

    #[test]
    fn test_nesting_below_the_limit_parses() {
        let depth = MAX_NESTING_DEPTH / 2;
        let text = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
        let (src, emitter) = source(&text);
        assert!(parse(&src).is_some());
        assert!(emitter.is_empty(), "{:?}", emitter.messages());
    }

    #[test]
    fn test_rule_table_agrees_with_operator_registry() {
        use loxlang_core::lang::operators::{self, Associativity, OperatorId};

        let infix: Vec<_> = TokenKind::ALL
            .into_iter()
            .filter_map(|kind| {
                let id = kind.operator_id()?;
                let rule = rule_for(kind);
                rule.infix.map(|_| (kind, rule, operators::info_for(id)))
            })
            .collect();
        assert_eq!(infix.len(), operators::OPERATORS.len() - 1, "every operator but `!` is infix");

        for (kind, rule, info) in &infix {
            let right_associative = rule.right < rule.left;
            assert_eq!(right_associative, info.associativity == Associativity::Right, "{kind}");
            for (other, other_rule, other_info) in &infix {
                assert_eq!(
                    rule.left.cmp(&other_rule.left),
                    info.precedence.cmp(&other_info.precedence),
                    "{kind} vs {other}"
                );
            }
        }

        let bang = operators::info_for(OperatorId::Bang);
        for (kind, rule, info) in &infix {
            assert!(bang.precedence > info.precedence, "{kind}");
            assert!(BindingPower::Unary > rule.left, "{kind}");
        }
    }

    #[test]
    fn test_lookahead_slots_do_not_rescan() {
        let (src, _) = source("a + b");
        let mut parser = Parser::new(&src);
        assert_eq!(parser.peek_next().kind, TokenKind::Plus);
        assert_eq!(parser.peek().kind, TokenKind::Ident);
        assert_eq!(parser.advance().lexeme, "a");
        assert_eq!(parser.previous().lexeme, "a");
        assert_eq!(parser.advance().kind, TokenKind::Plus);
        assert_eq!(parser.advance().lexeme, "b");
        assert_eq!(parser.advance().kind, TokenKind::Eof);
        assert_eq!(parser.advance().kind, TokenKind::Eof);
    }

    #[test]
    #[should_panic(expected = "INVARIANT")]
    fn test_previous_before_advance_is_an_invariant_violation() {
        let (src, _) = source("a");
        Parser::new(&src).previous();
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn program(text: &str) -> (Option<String>, CollectingEmitter) {
        let (src, emitter) = source(text);
        let printed = parse_program(&src).map(|stmts| print_program(&stmts));
        (printed, emitter)
    }

    #[test]
    fn test_program_statements() {
        let (printed, emitter) = program("var x = 1;\nwhile (x < 10) { x = x * 2; }\nprint x;");
        assert!(emitter.is_empty(), "{:?}", emitter.messages());
        assert_eq!(
            printed.as_deref(),
            Some("(var x 1)\n(while (< x 10) (block (expr (= x (* x 2)))))\n(print x)")
        );
    }

    #[test]
    fn test_missing_semicolon_is_recoverable() {
        // `expect` consumes the mismatched token, so the second `print` is swallowed.
        let (printed, emitter) = program("print 1 print 2;");
        assert_eq!(printed.as_deref(), Some("(print 1)\n(expr 2)"));
        assert_eq!(emitter.messages(), vec!["Expect ';' after value".to_string()]);
    }

    #[test]
    fn test_program_panic_yields_nothing() {
        let (printed, emitter) = program("var a = 1; print ;");
        assert_eq!(printed, None);
        assert_eq!(emitter.messages(), vec![EXPECTED_EXPRESSION_START_MSG.to_string()]);
    }

    #[test]
    fn test_unclosed_block_stops_at_eof() {
        let (printed, emitter) = program("{ print 1;");
        assert_eq!(printed.as_deref(), Some("(block (print 1))"));
        assert_eq!(emitter.messages(), vec!["Expect '}' after block".to_string()]);
    }

    #[test]
    fn test_function_declaration_spans() {
        let (src, _) = source("fun f(a) { return a; }");
        let stmts = parse_program(&src).unwrap();
        assert_eq!(stmts[0].span, Span::new(0, 22));
        let Stmt::Function(function) = &stmts[0].node else {
            panic!("expected function");
        };
        assert_eq!(function.name.span, Span::new(4, 5));
        assert_eq!(function.params[0].node, "a");
    }

    #[test]
    fn test_for_without_initializer_or_increment() {
        let (printed, _) = program("for (; i < 3;) i = i + 1;");
        assert_eq!(printed.as_deref(), Some("(while (< i 3) (expr (= i (+ i 1))))"));
    }
}
