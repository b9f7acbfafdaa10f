/// Declaration and statement parsing.
///
/// Statements dispatch on their leading token and hand every expression position to the Pratt engine, so they
/// share its panic boundary and `expect` behaviour.
///
/// ## Notes
/// - `for` has no node of its own; it is desugared into `while` (wrapped in blocks for the initializer and the
///   increment).
impl<'src> Parser<'src> {
    fn declaration(&mut self) -> PResult<Spanned<Stmt>> {
        match self.peek().kind {
            TokenKind::Class => self.class_declaration(),
            TokenKind::Fun if self.peek_next().kind == TokenKind::Ident => {
                let start = self.advance().span;
                let function = self.function("function")?;
                Ok(Spanned::new(Stmt::Function(function), self.span_from(start)))
            }
            TokenKind::Var => self.var_declaration(),
            _ => self.statement(),
        }
    }

    fn class_declaration(&mut self) -> PResult<Spanned<Stmt>> {
        let start = self.advance().span;
        let name = self.expect_ident("Expect class name");
        let superclass = if self.match_token(TokenKind::Less) {
            Some(self.expect_ident("Expect superclass name"))
        } else {
            None
        };
        self.expect(TokenKind::LBrace, "Expect '{' before class body");

        let mut methods = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            let method_start = self.peek().span;
            let method = self.function("method")?;
            methods.push(Spanned::new(method, self.span_from(method_start)));
        }
        self.expect(TokenKind::RBrace, "Expect '}' after class body");

        let class = ClassDecl {
            name,
            superclass,
            methods,
        };
        Ok(Spanned::new(Stmt::Class(class), self.span_from(start)))
    }

    /// Parse `name(params) { body }`; `kind` names the construct in diagnostics.
    fn function(&mut self, kind: &str) -> PResult<FunctionDecl> {
        let name = self.expect_ident(&format!("Expect {kind} name"));
        self.expect(TokenKind::LPar, &format!("Expect '(' after {kind} name"));

        let mut params = Vec::new();
        if !self.check(TokenKind::RPar) {
            loop {
                if params.len() == MAX_ARITY {
                    let span = self.peek().span;
                    self.source
                        .error(format!("Can't have more than {MAX_ARITY} parameters"), span);
                }
                params.push(self.expect_ident("Expect parameter name"));
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RPar, "Expect ')' after parameters");
        self.expect(TokenKind::LBrace, &format!("Expect '{{' before {kind} body"));
        let body = self.block()?;

        Ok(FunctionDecl { name, params, body })
    }

    fn var_declaration(&mut self) -> PResult<Spanned<Stmt>> {
        let start = self.advance().span;
        let name = self.expect_ident("Expect variable name");
        let initializer = if self.match_token(TokenKind::Eq) {
            Some(self.expression()?)
        } else {
            None
        };
        self.expect(TokenKind::SemiColon, "Expect ';' after variable declaration");
        Ok(Spanned::new(
            Stmt::Var(VarDecl { name, initializer }),
            self.span_from(start),
        ))
    }

    fn statement(&mut self) -> PResult<Spanned<Stmt>> {
        self.nested(Self::statement_inner)
    }

    fn statement_inner(&mut self) -> PResult<Spanned<Stmt>> {
        let start = self.peek().span;
        let stmt = match self.peek().kind {
            TokenKind::Print => {
                self.advance();
                let value = self.expression()?;
                self.expect(TokenKind::SemiColon, "Expect ';' after value");
                Stmt::Print(value)
            }
            TokenKind::Return => {
                self.advance();
                let value = if self.check(TokenKind::SemiColon) {
                    None
                } else {
                    Some(self.expression()?)
                };
                self.expect(TokenKind::SemiColon, "Expect ';' after return value");
                Stmt::Return(value)
            }
            TokenKind::While => {
                self.advance();
                self.expect(TokenKind::LPar, "Expect '(' after 'while'");
                let condition = self.expression()?;
                self.expect(TokenKind::RPar, "Expect ')' after condition");
                let body = Box::new(self.statement()?);
                Stmt::While(WhileStmt { condition, body })
            }
            TokenKind::If => {
                self.advance();
                self.expect(TokenKind::LPar, "Expect '(' after 'if'");
                let condition = self.expression()?;
                self.expect(TokenKind::RPar, "Expect ')' after if condition");
                let then_branch = Box::new(self.statement()?);
                let else_branch = if self.match_token(TokenKind::Else) {
                    Some(Box::new(self.statement()?))
                } else {
                    None
                };
                Stmt::If(IfStmt {
                    condition,
                    then_branch,
                    else_branch,
                })
            }
            TokenKind::LBrace => {
                self.advance();
                Stmt::Block(self.block()?)
            }
            TokenKind::For => return self.for_statement(),
            _ => {
                let expr = self.expression()?;
                self.expect(TokenKind::SemiColon, "Expect ';' after expression");
                Stmt::Expression(expr)
            }
        };
        Ok(Spanned::new(stmt, self.span_from(start)))
    }

    /// Parse the declarations of a block whose `{` was consumed, through the closing `}`.
    fn block(&mut self) -> PResult<Vec<Spanned<Stmt>>> {
        self.nested(Self::block_inner)
    }

    fn block_inner(&mut self) -> PResult<Vec<Spanned<Stmt>>> {
        let mut statements = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            statements.push(self.declaration()?);
        }
        self.expect(TokenKind::RBrace, "Expect '}' after block");
        Ok(statements)
    }

    /// `for (init; cond; incr) body` becomes `{ init; while (cond) { body; incr; } }`.
    fn for_statement(&mut self) -> PResult<Spanned<Stmt>> {
        let start = self.advance().span;
        self.expect(TokenKind::LPar, "Expect '(' after 'for'");

        let initializer = match self.peek().kind {
            TokenKind::SemiColon => {
                self.advance();
                None
            }
            TokenKind::Var => Some(self.var_declaration()?),
            _ => {
                let expr = self.expression()?;
                self.expect(TokenKind::SemiColon, "Expect ';' after expression");
                let span = expr.span;
                Some(Spanned::new(Stmt::Expression(expr), span))
            }
        };

        let condition = if self.check(TokenKind::SemiColon) {
            Spanned::new(Expr::Literal(Value::Bool(true)), start)
        } else {
            self.expression()?
        };
        self.expect(TokenKind::SemiColon, "Expect ';' after loop condition");

        let increment = if self.check(TokenKind::RPar) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect(TokenKind::RPar, "Expect ')' after for clauses");

        let mut body = self.statement()?;
        if let Some(increment) = increment {
            let span = body.span.merge(increment.span);
            let increment_span = increment.span;
            let increment = Spanned::new(Stmt::Expression(increment), increment_span);
            body = Spanned::new(Stmt::Block(vec![body, increment]), span);
        }

        let span = self.span_from(start);
        let mut lowered = Spanned::new(
            Stmt::While(WhileStmt {
                condition,
                body: Box::new(body),
            }),
            span,
        );
        if let Some(initializer) = initializer {
            lowered = Spanned::new(Stmt::Block(vec![initializer, lowered]), span);
        }
        Ok(lowered)
    }
}
