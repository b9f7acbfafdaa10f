impl<'src> Parser<'src> {
    /// Parse a single expression followed by end of input.
    ///
    /// Tokens left over after a complete expression are reported once as a recoverable error.
    pub fn parse(mut self) -> Option<Spanned<Expr>> {
        match self.expression() {
            Ok(expr) => {
                let trailing = self.peek();
                if trailing.kind != TokenKind::Eof {
                    self.source.error(EXPECTED_END_OF_EXPRESSION_MSG, trailing.span);
                }
                Some(expr)
            }
            Err(panic) => {
                tracing::debug!(span = ?panic.span, "parser panicked, cannot produce an AST: {panic}");
                None
            }
        }
    }

    /// Parse declarations until end of input.
    pub fn parse_program(mut self) -> Option<Vec<Spanned<Stmt>>> {
        let mut statements = Vec::new();
        while !self.is_at_end() {
            match self.declaration() {
                Ok(stmt) => statements.push(stmt),
                Err(panic) => {
                    tracing::debug!(span = ?panic.span, "parser panicked, cannot produce an AST: {panic}");
                    return None;
                }
            }
        }
        Some(statements)
    }
}

/// Parse the text of `source` as one expression.
///
/// This is the main public entrypoint for parsing.
///
/// ## Returns
/// - `None` for empty text (nothing is reported) or when no expression could be started (reported).
/// - `Some(ast)` otherwise. Recoverable errors may have been reported along the way; check
///   [`SourceText::had_error`].
#[tracing::instrument(skip_all, fields(file = %source.filename(), source_len = source.len()))]
pub fn parse(source: &SourceText) -> Option<Spanned<Expr>> {
    if source.is_empty() {
        return None;
    }
    Parser::new(source).parse()
}

/// Parse the text of `source` as a program: a sequence of declarations and statements.
///
/// Same contract as [`parse`].
#[tracing::instrument(skip_all, fields(file = %source.filename(), source_len = source.len()))]
pub fn parse_program(source: &SourceText) -> Option<Vec<Spanned<Stmt>>> {
    if source.is_empty() {
        return None;
    }
    Parser::new(source).parse_program()
}
