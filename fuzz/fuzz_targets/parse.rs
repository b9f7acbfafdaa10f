#![no_main]

use libfuzzer_sys::fuzz_target;
use loxlang::diagnostics::CollectingEmitter;
use loxlang::source::SourceText;
use loxlang::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let emitter = CollectingEmitter::new();

        // Fuzz the lexer, then both parser entry points on fresh sources
        let source = SourceText::with_emitter("fuzz.lox", s, emitter.clone());
        let _ = lexer::lex(&source);
        let _ = parser::parse(&SourceText::with_emitter("fuzz.lox", s, emitter.clone()));
        let _ = parser::parse_program(&SourceText::with_emitter("fuzz.lox", s, emitter.clone()));

        // Rendering must cope with every span the front end produces
        for diagnostic in emitter.diagnostics() {
            let _ = diagnostic.render(&source);
        }
    }
});
