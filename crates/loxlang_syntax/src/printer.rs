//! S-expression rendering of the AST, for debugging and tests.
//!
//! ## Examples
//! ```rust
//! use loxlang_syntax::{parser, printer, source::SourceText};
//!
//! let source = SourceText::new("demo.lox", "(5 - (3 - 1)) + -1");
//! let ast = parser::parse(&source).unwrap();
//! assert_eq!(printer::print_expr(&ast), "(+ (grouping (- 5 (grouping (- 3 1)))) (- 1))");
//! ```

use crate::ast::{Expr, FunctionDecl, Spanned, Stmt};

/// Render an expression.
pub fn print_expr(expr: &Spanned<Expr>) -> String {
    match &expr.node {
        Expr::Assign(name, value) => parenthesize("=", [name.node.clone(), print_expr(value)]),
        Expr::Binary(left, op, right) => parenthesize(&op.to_string(), [print_expr(left), print_expr(right)]),
        Expr::Call(call) => parenthesize(
            "call",
            std::iter::once(print_expr(&call.callee)).chain(call.arguments.iter().map(print_expr)),
        ),
        Expr::Get(object, name) => parenthesize(".", [print_expr(object), name.node.clone()]),
        Expr::Grouping(inner) => parenthesize("grouping", [print_expr(inner)]),
        Expr::Literal(value) => value.to_string(),
        Expr::Logical(left, op, right) => parenthesize(&op.to_string(), [print_expr(left), print_expr(right)]),
        Expr::Set(object, name, value) => {
            let target = parenthesize(".", [print_expr(object), name.node.clone()]);
            parenthesize("=", [target, print_expr(value)])
        }
        Expr::Super(method) => parenthesize("super", [method.node.clone()]),
        Expr::This => "this".to_string(),
        Expr::Unary(op, operand) => parenthesize(&op.to_string(), [print_expr(operand)]),
        Expr::Variable(name) => name.clone(),
    }
}

/// Render a statement.
pub fn print_stmt(stmt: &Spanned<Stmt>) -> String {
    match &stmt.node {
        Stmt::Block(statements) => parenthesize("block", statements.iter().map(print_stmt)),
        Stmt::Class(class) => {
            let mut parts = vec![class.name.node.clone()];
            if let Some(superclass) = &class.superclass {
                parts.push("<".to_string());
                parts.push(superclass.node.clone());
            }
            parts.extend(class.methods.iter().map(|m| print_function(&m.node)));
            parenthesize("class", parts)
        }
        Stmt::Expression(expr) => parenthesize("expr", [print_expr(expr)]),
        Stmt::Function(function) => print_function(function),
        Stmt::If(stmt) => {
            let mut parts = vec![print_expr(&stmt.condition), print_stmt(&stmt.then_branch)];
            if let Some(else_branch) = &stmt.else_branch {
                parts.push(print_stmt(else_branch));
            }
            parenthesize("if", parts)
        }
        Stmt::Print(expr) => parenthesize("print", [print_expr(expr)]),
        Stmt::Return(value) => parenthesize("return", value.iter().map(print_expr)),
        Stmt::Var(var) => {
            let init = var.initializer.iter().map(print_expr);
            parenthesize("var", std::iter::once(var.name.node.clone()).chain(init))
        }
        Stmt::While(stmt) => parenthesize("while", [print_expr(&stmt.condition), print_stmt(&stmt.body)]),
    }
}

/// Render a program, one top-level statement per line.
pub fn print_program(statements: &[Spanned<Stmt>]) -> String {
    statements.iter().map(print_stmt).collect::<Vec<_>>().join("\n")
}

fn print_function(function: &FunctionDecl) -> String {
    let params: Vec<&str> = function.params.iter().map(|p| p.node.as_str()).collect();
    let header = [function.name.node.clone(), format!("({})", params.join(" "))];
    parenthesize("fun", header.into_iter().chain(function.body.iter().map(print_stmt)))
}

fn parenthesize(head: &str, parts: impl IntoIterator<Item = String>) -> String {
    let mut out = format!("({head}");
    for part in parts {
        out.push(' ');
        out.push_str(&part);
    }
    out.push(')');
    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingEmitter;
    use crate::parser;
    use crate::source::SourceText;

    fn program(text: &str) -> String {
        let source = SourceText::with_emitter("t.lox", text, CollectingEmitter::new());
        let statements = parser::parse_program(&source).unwrap();
        assert!(!source.had_error(), "unexpected diagnostics for {text:?}");
        print_program(&statements)
    }

    fn expr(text: &str) -> String {
        let source = SourceText::with_emitter("t.lox", text, CollectingEmitter::new());
        print_expr(&parser::parse(&source).unwrap())
    }

    #[test]
    fn prints_every_expression_kind() {
        assert_eq!(expr("a = 1"), "(= a 1)");
        assert_eq!(expr("f(1, \"two\", nil)"), "(call f 1 \"two\" nil)");
        assert_eq!(expr("f()"), "(call f)");
        assert_eq!(expr("a.b.c"), "(. (. a b) c)");
        assert_eq!(expr("a.b = true"), "(= (. a b) true)");
        assert_eq!(expr("super.init"), "(super init)");
        assert_eq!(expr("this"), "this");
        assert_eq!(expr("!x or y and z"), "(or (! x) (and y z))");
        assert_eq!(expr("33.7 >= 5"), "(>= 33.7 5)");
    }

    #[test]
    fn prints_statements() {
        let text = "var a = 1; var b; print a; { a; } if (a) print 1; else print 2; while (b) return; \
                    fun add(x, y) { return x + y; }";
        insta::assert_snapshot!(program(text), @r"
(var a 1)
(var b)
(print a)
(block (expr a))
(if a (print 1) (print 2))
(while b (return))
(fun add (x y) (return (+ x y)))
");
    }

    #[test]
    fn prints_classes() {
        let text = "class B < A { init(n) { this.n = n; } get() { return super.get(); } } class C {}";
        insta::assert_snapshot!(program(text), @r"
(class B < A (fun init (n) (expr (= (. this n) n))) (fun get () (return (call (super get)))))
(class C)
");
    }

    #[test]
    fn for_loops_print_as_while() {
        assert_eq!(
            program("for (var i = 0; i < 3; i = i + 1) print i;"),
            "(block (var i 0) (while (< i 3) (block (print i) (expr (= i (+ i 1))))))"
        );
        assert_eq!(program("for (;;) print 1;"), "(while true (print 1))");
    }
}
