/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `peek_next`, `advance`, `previous`)
/// - Matching / expecting token kinds
/// - Span bookkeeping
///
/// Most functions in this file are internal (`fn`) and are documented primarily
/// to aid maintenance and onboarding.
impl<'src> Parser<'src> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return the current token without consuming it.
    fn peek(&mut self) -> Token<'src> {
        *self.current.get_or_insert_with(|| self.lexer.next_token())
    }

    /// Return the token after the current token without consuming either.
    fn peek_next(&mut self) -> Token<'src> {
        self.peek();
        *self.next.get_or_insert_with(|| self.lexer.next_token())
    }

    /// Advance to the next token and return the token we just consumed.
    ///
    /// At end of input this keeps returning the `Eof` token.
    fn advance(&mut self) -> Token<'src> {
        let token = self.peek();
        self.previous = Some(token);
        self.current = self.next.take();
        token
    }

    /// The most recently consumed token.
    ///
    /// ## Panics
    /// - If nothing has been consumed yet (this indicates a programming error).
    fn previous(&self) -> Token<'src> {
        self.previous
            .expect("INVARIANT: previous() is only called after advance()")
    }

    fn is_at_end(&mut self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Return `true` if the current token is of `kind`.
    fn check(&mut self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// If the current token is of `kind`, consume it and return `true`.
    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the current token and report `msg` if it is not of `kind`.
    ///
    /// The token is consumed either way and returned, so the caller can keep building with it as a placeholder.
    fn expect(&mut self, kind: TokenKind, msg: &str) -> Token<'src> {
        let token = self.advance();
        if token.kind != kind {
            self.source.error(msg, token.span);
        }
        token
    }

    /// Consume an identifier (reporting `msg` otherwise) and return its name.
    fn expect_ident(&mut self, msg: &str) -> Spanned<Ident> {
        let token = self.expect(TokenKind::Ident, msg);
        Spanned::new(token.lexeme.to_string(), token.span)
    }

    /// Run `production` one nesting level deeper.
    ///
    /// Past [`MAX_NESTING_DEPTH`] levels this reports at the current token and panics instead of recursing.
    fn nested<T>(&mut self, production: impl FnOnce(&mut Self) -> PResult<T>) -> PResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            let span = self.peek().span;
            self.source.error(NESTING_TOO_DEEP_MSG, span);
            return Err(ParsePanic {
                message: NESTING_TOO_DEEP_MSG.to_string(),
                span,
            });
        }
        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    /// Span from `start` through the most recently consumed token.
    fn span_from(&self, start: Span) -> Span {
        start.merge(self.previous().span)
    }
}
