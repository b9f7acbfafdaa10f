//! Property tests for the lexer and the keyword classifier.

use loxlang_core::lang::keywords;
use loxlang_syntax::diagnostics::CollectingEmitter;
use loxlang_syntax::lexer::{self, TokenKind};
use loxlang_syntax::source::SourceText;
use proptest::prelude::*;

proptest! {
    #[test]
    fn keyword_classifier_agrees_with_registry(ident in "[a-z_][a-z_0-9]{0,7}") {
        let fast = lexer::keyword(&ident).and_then(TokenKind::keyword_id);
        prop_assert_eq!(fast, keywords::from_str(&ident));
    }

    #[test]
    fn lexing_terminates_with_one_eof_and_ordered_spans(text in "\\PC{0,64}") {
        let source = SourceText::with_emitter("prop.lox", text.as_str(), CollectingEmitter::new());
        let tokens = lexer::lex(&source);

        prop_assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));

        let mut cursor = 0;
        for token in &tokens {
            prop_assert!(token.span.start >= cursor);
            prop_assert!(token.span.end >= token.span.start);
            prop_assert_eq!(token.lexeme, source.slice(token.span));
            cursor = token.span.end;
        }
    }

    #[test]
    fn each_lexical_error_token_has_one_diagnostic(text in "[a-z0-9 @#?\"/*]{0,32}") {
        let emitter = CollectingEmitter::new();
        let source = SourceText::with_emitter("prop.lox", text.as_str(), emitter.clone());
        let errors = lexer::lex(&source).iter().filter(|t| t.kind == TokenKind::Error).count();
        prop_assert_eq!(errors, emitter.len());
    }
}
