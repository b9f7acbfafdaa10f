/// Expression parsing.
///
/// This chunk contains the precedence-climbing engine and the prefix/infix handlers named by the rule table.
///
/// ## Notes
/// - The engine consumes the token a handler is dispatched on; handlers read it back with `previous()`.
/// - `parse_expression(min)` stops at the first infix operator whose left power is below `min`, so equal powers
///   keep looping and same-level operators associate to the left.
impl<'src> Parser<'src> {
    /// Parse a full expression, assignment included.
    fn expression(&mut self) -> PResult<Spanned<Expr>> {
        self.parse_expression(BindingPower::None)
    }

    fn parse_expression(&mut self, min: BindingPower) -> PResult<Spanned<Expr>> {
        self.nested(|parser| parser.climb(min))
    }

    fn climb(&mut self, min: BindingPower) -> PResult<Spanned<Expr>> {
        let token = self.peek();
        let Some(prefix) = rule_for(token.kind).prefix else {
            self.source.error(EXPECTED_EXPRESSION_START_MSG, token.span);
            return Err(ParsePanic {
                message: EXPECTED_EXPRESSION_START_MSG.to_string(),
                span: token.span,
            });
        };
        self.advance();
        let mut left = self.prefix(prefix)?;

        loop {
            let rule = rule_for(self.peek().kind);
            let Some(infix) = rule.infix else { break };
            if rule.left < min {
                break;
            }
            self.advance();
            left = self.infix(infix, left, rule.right)?;
        }

        Ok(left)
    }

    // ========================================================================
    // Prefix handlers
    // ========================================================================

    fn prefix(&mut self, prefix: Prefix) -> PResult<Spanned<Expr>> {
        let token = self.previous();
        let expr = match prefix {
            Prefix::Literal => Expr::Literal(match token.kind {
                TokenKind::True => Value::Bool(true),
                TokenKind::False => Value::Bool(false),
                _ => Value::Nil,
            }),
            Prefix::Number => Expr::Literal(Value::Number(self.number(token))),
            Prefix::String => {
                let text = token.lexeme.strip_prefix('"').unwrap_or(token.lexeme);
                let text = text.strip_suffix('"').unwrap_or(text);
                Expr::Literal(Value::String(text.to_string()))
            }
            Prefix::Variable => Expr::Variable(token.lexeme.to_string()),
            Prefix::This => Expr::This,
            Prefix::Super => {
                self.expect(TokenKind::Dot, "Expect '.' after 'super'");
                Expr::Super(self.expect_ident("Expect superclass method name"))
            }
            Prefix::Unary => {
                let op = match token.kind {
                    TokenKind::Bang => UnaryOp::Not,
                    _ => UnaryOp::Neg,
                };
                let operand = self.parse_expression(BindingPower::Unary)?;
                Expr::Unary(op, Box::new(operand))
            }
            Prefix::Grouping => {
                let inner = self.expression()?;
                self.expect(TokenKind::RPar, "expected closing ')'");
                Expr::Grouping(Box::new(inner))
            }
        };
        Ok(Spanned::new(expr, self.span_from(token.span)))
    }

    /// Convert number text to a double, reporting (and substituting `0`) when it does not fit.
    fn number(&self, token: Token<'src>) -> f64 {
        match token.lexeme.parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            Ok(_) => {
                self.source.error(NUMBER_OUT_OF_RANGE_MSG, token.span);
                0.0
            }
            Err(_) => {
                self.source.error(UNPARSABLE_NUMBER_MSG, token.span);
                0.0
            }
        }
    }

    // ========================================================================
    // Infix handlers
    // ========================================================================

    fn infix(&mut self, infix: Infix, left: Spanned<Expr>, right_power: BindingPower) -> PResult<Spanned<Expr>> {
        let operator = self.previous();
        match infix {
            Infix::Binary => {
                let right = self.parse_expression(right_power)?;
                let span = left.span.merge(right.span);
                let op = binary_op(operator.kind);
                Ok(Spanned::new(Expr::Binary(Box::new(left), op, Box::new(right)), span))
            }
            Infix::Logical => {
                let right = self.parse_expression(right_power)?;
                let span = left.span.merge(right.span);
                let op = if operator.kind == TokenKind::And {
                    LogicalOp::And
                } else {
                    LogicalOp::Or
                };
                Ok(Spanned::new(Expr::Logical(Box::new(left), op, Box::new(right)), span))
            }
            Infix::Assign => {
                let value = self.parse_expression(right_power)?;
                let span = left.span.merge(value.span);
                match left.node {
                    Expr::Variable(name) => {
                        let name = Spanned::new(name, left.span);
                        Ok(Spanned::new(Expr::Assign(name, Box::new(value)), span))
                    }
                    Expr::Get(object, name) => Ok(Spanned::new(Expr::Set(object, name, Box::new(value)), span)),
                    node => {
                        self.source.error(INVALID_ASSIGNMENT_TARGET_MSG, left.span);
                        Ok(Spanned::new(node, left.span))
                    }
                }
            }
            Infix::Call => self.finish_call(left),
            Infix::Get => {
                let name = self.expect_ident("Expect property name after '.'");
                let span = left.span.merge(name.span);
                Ok(Spanned::new(Expr::Get(Box::new(left), name), span))
            }
        }
    }

    /// Parse the argument list of a call whose `(` was consumed.
    fn finish_call(&mut self, callee: Spanned<Expr>) -> PResult<Spanned<Expr>> {
        let mut arguments = Vec::new();
        if !self.check(TokenKind::RPar) {
            loop {
                if arguments.len() == MAX_ARITY {
                    let span = self.peek().span;
                    self.source
                        .error(format!("Can't have more than {MAX_ARITY} arguments"), span);
                }
                arguments.push(self.expression()?);
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }
        let paren = self.expect(TokenKind::RPar, "Expect ')' after arguments").span;
        let span = callee.span.merge(paren);
        Ok(Spanned::new(
            Expr::Call(CallExpr {
                callee: Box::new(callee),
                paren,
                arguments,
            }),
            span,
        ))
    }
}

/// Binary operator for a token whose rule names [`Infix::Binary`].
fn binary_op(kind: TokenKind) -> BinaryOp {
    match kind {
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Sub,
        TokenKind::Star => BinaryOp::Mul,
        TokenKind::Slash => BinaryOp::Div,
        TokenKind::EqEq => BinaryOp::Eq,
        TokenKind::BangEq => BinaryOp::NotEq,
        TokenKind::Less => BinaryOp::Lt,
        TokenKind::LessEq => BinaryOp::LtEq,
        TokenKind::Greater => BinaryOp::Gt,
        TokenKind::GreaterEq => BinaryOp::GtEq,
        other => unreachable!("INVARIANT: {other} has no binary rule"),
    }
}
