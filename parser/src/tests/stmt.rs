use ast::{Expression, Statement};

use super::parse;

#[test]
fn parses_let_statements() {
    let program = parse("let x = 5; let y = true; let foobar = y;");
    assert_eq!(program.statements.len(), 3);

    let names: Vec<&str> = program
        .statements
        .iter()
        .map(|statement| match statement {
            Statement::Let { name, .. } => name.name.as_str(),
            other => panic!("expected Let statement, got {other:?}"),
        })
        .collect();
    assert_eq!(names, vec!["x", "y", "foobar"]);
}

#[test]
fn parses_return_statements() {
    let program = parse("return 5; return true; return foobar;");
    assert_eq!(program.statements.len(), 3);
    for statement in &program.statements {
        assert!(matches!(statement, Statement::Return { .. }));
    }
}

#[test]
fn parses_bare_expression_statement() {
    let program = parse("foobar;");
    assert_eq!(program.statements.len(), 1);
    match &program.statements[0] {
        Statement::ExpressionStatement {
            expression: Expression::Identifier(identifier),
            ..
        } => assert_eq!(identifier.name, "foobar"),
        other => panic!("expected identifier expression statement, got {other:?}"),
    }
}

#[test]
fn parses_if_else_expression() {
    let program = parse("if (x < y) { x } else { y }");
    match &program.statements[0] {
        Statement::ExpressionStatement {
            expression: Expression::If { alternative, .. },
            ..
        } => assert!(alternative.is_some()),
        other => panic!("expected if expression, got {other:?}"),
    }
}

#[test]
fn parses_function_literal_parameters() {
    let program = parse("func(x, y) { x + y; }");
    match &program.statements[0] {
        Statement::ExpressionStatement {
            expression: Expression::FunctionLiteral { parameters, .. },
            ..
        } => {
            let names: Vec<&str> = parameters.iter().map(|p| p.name.as_str()).collect();
            assert_eq!(names, vec!["x", "y"]);
        }
        other => panic!("expected function literal, got {other:?}"),
    }
}

#[test]
fn parses_call_expression_arguments() {
    let program = parse("add(1, 2 * 3, 4 + 5);");
    match &program.statements[0] {
        Statement::ExpressionStatement {
            expression: Expression::Call { arguments, .. },
            ..
        } => assert_eq!(arguments.len(), 3),
        other => panic!("expected call expression, got {other:?}"),
    }
}

#[test]
fn block_statements_skip_stray_semicolons() {
    let program = parse("if (true) { ;; let x = 1; ;; x }");
    match &program.statements[0] {
        Statement::ExpressionStatement {
            expression: Expression::If { consequence, .. },
            ..
        } => assert_eq!(consequence.statements.len(), 2),
        other => panic!("expected if expression, got {other:?}"),
    }
}
