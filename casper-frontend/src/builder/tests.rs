use super::*;
use crate::ast::*;
use crate::parser::parse_tree;
use crate::types::Type;
use casper_preprocessor::Preprocessor;
use indoc::indoc;
use pretty_assertions::assert_eq;

fn build(source: &str) -> Program {
    let _ = env_logger::builder().is_test(true).try_init();
    let preprocessed = Preprocessor::new().process(source, "test.casper").unwrap();
    let tree = parse_tree(&preprocessed).unwrap();
    AstBuilder::new(&preprocessed).build_program(tree).unwrap()
}

fn single_statement(source: &str) -> StatementKind {
    let mut program = build(source);
    assert_eq!(program.statements.len(), 1, "expected exactly one statement");
    program.statements.remove(0).kind
}

fn identifier_name(expr: &Expression) -> &str {
    match &expr.kind {
        ExpressionKind::Identifier { name, symbol_id } => {
            assert!(symbol_id.is_none());
            name
        }
        other => panic!("Expected identifier, got {:?}", other),
    }
}

#[test]
fn test_empty_program() {
    assert!(build("").statements.is_empty());
}

#[test]
fn test_variable_declaration() {
    match single_statement("int x, y = 1, 2.5\n") {
        StatementKind::VariableDeclaration(decl) => {
            assert_eq!(decl.var_type, Type::Int);
            assert_eq!(decl.names, vec!["x", "y"]);
            assert_eq!(decl.initializers.len(), 2);
            assert_eq!(decl.initializers[1].as_number(), Some(2.5));
            assert!(decl.variables.is_none());
        }
        other => panic!("Expected variable declaration, got {:?}", other),
    }
}

#[test]
fn test_assignment_with_subscript_target() {
    match single_statement("a[i][j], b = 1, c\n") {
        StatementKind::Assignment { targets, values } => {
            assert_eq!(targets.len(), 2);
            assert_eq!(values.len(), 2);
            match &targets[0].kind {
                ExpressionKind::Subscripted { target, index } => {
                    assert_eq!(identifier_name(index), "j");
                    assert!(matches!(target.kind, ExpressionKind::Subscripted { .. }));
                }
                other => panic!("Expected subscript, got {:?}", other),
            }
            assert_eq!(identifier_name(&targets[1]), "b");
        }
        other => panic!("Expected assignment, got {:?}", other),
    }
}

#[test]
fn test_binary_operators_are_left_associative() {
    let StatementKind::Return(Some(value)) = single_statement("return a - b - c\n") else {
        panic!("Expected return with a value");
    };
    match value.kind {
        ExpressionKind::Binary { op, left, right } => {
            assert_eq!(op, BinaryOp::Sub);
            assert_eq!(identifier_name(&right), "c");
            assert!(matches!(
                left.kind,
                ExpressionKind::Binary { op: BinaryOp::Sub, .. }
            ));
        }
        other => panic!("Expected binary expression, got {:?}", other),
    }
}

#[test]
fn test_precedence_tiers() {
    let StatementKind::Return(Some(value)) = single_statement("return a or b and c < 1 + 2 * 3\n") else {
        panic!("Expected return with a value");
    };
    let ExpressionKind::Binary { op: BinaryOp::Or, right, .. } = value.kind else {
        panic!("Expected `or` at the root");
    };
    let ExpressionKind::Binary { op: BinaryOp::And, right, .. } = right.kind else {
        panic!("Expected `and` below `or`");
    };
    let ExpressionKind::Binary { op: BinaryOp::Less, right, .. } = right.kind else {
        panic!("Expected `<` below `and`");
    };
    let ExpressionKind::Binary { op: BinaryOp::Add, right, .. } = right.kind else {
        panic!("Expected `+` below `<`");
    };
    assert!(matches!(
        right.kind,
        ExpressionKind::Binary { op: BinaryOp::Mul, .. }
    ));
}

#[test]
fn test_unary_and_ternary() {
    let StatementKind::Return(Some(value)) = single_statement("return not done ? -x : count++\n") else {
        panic!("Expected return with a value");
    };
    match value.kind {
        ExpressionKind::Ternary { condition, then_expr, else_expr } => {
            assert!(matches!(condition.kind, ExpressionKind::Unary { op: UnaryOp::Not, .. }));
            assert!(matches!(then_expr.kind, ExpressionKind::Unary { op: UnaryOp::Negate, .. }));
            assert!(matches!(
                else_expr.kind,
                ExpressionKind::Unary { op: UnaryOp::Increment, .. }
            ));
        }
        other => panic!("Expected ternary, got {:?}", other),
    }
}

#[test]
fn test_literals_and_lists() {
    let StatementKind::Return(Some(value)) = single_statement(
        "return [1, true, false, \"hi\", [], 1e3, 1.5E-2, 2e+1]\n",
    ) else {
        panic!("Expected return with a value");
    };
    let ExpressionKind::List(items) = value.kind else {
        panic!("Expected list literal");
    };
    assert_eq!(items[0].kind, ExpressionKind::NumericLiteral(1.0));
    assert_eq!(items[1].kind, ExpressionKind::BooleanLiteral(true));
    assert_eq!(items[2].kind, ExpressionKind::BooleanLiteral(false));
    assert_eq!(items[3].kind, ExpressionKind::StringLiteral("\"hi\"".to_string()));
    assert_eq!(items[4].kind, ExpressionKind::List(vec![]));
    assert_eq!(items[5].kind, ExpressionKind::NumericLiteral(1000.0));
    assert_eq!(items[6].kind, ExpressionKind::NumericLiteral(0.015));
    assert_eq!(items[7].kind, ExpressionKind::NumericLiteral(20.0));
}

#[test]
fn test_return_without_value() {
    assert_eq!(single_statement("return\n"), StatementKind::Return(None));
}

#[test]
fn test_call_statement_and_arguments() {
    match single_statement("print(x, f(1))\n") {
        StatementKind::Call(call) => {
            assert_eq!(identifier_name(&call.callee), "print");
            assert_eq!(call.arguments.len(), 2);
            assert!(matches!(
                call.arguments[1].expression.kind,
                ExpressionKind::Call(_)
            ));
        }
        other => panic!("Expected call statement, got {:?}", other),
    }
}

#[test]
fn test_if_chain() {
    let source = indoc! {"
        if a:
            x = 1
        elif b: x = 2
        elif c: x = 3
        else:
            x = 4
            y = 5
    "};
    match single_statement(source) {
        StatementKind::If { cases, else_body } => {
            assert_eq!(cases.len(), 3);
            assert_eq!(identifier_name(&cases[2].condition), "c");
            assert_eq!(else_body.map(|body| body.len()), Some(2));
        }
        other => panic!("Expected if statement, got {:?}", other),
    }
}

#[test]
fn test_if_without_else() {
    match single_statement("if a: break\n") {
        StatementKind::If { cases, else_body } => {
            assert_eq!(cases.len(), 1);
            assert_eq!(cases[0].body[0].kind, StatementKind::Break);
            assert!(else_body.is_none());
        }
        other => panic!("Expected if statement, got {:?}", other),
    }
}

#[test]
fn test_from_loop_with_and_without_step() {
    match single_statement("from 1 to n by 2: x = x + 1\n") {
        StatementKind::From { start, end, step, body } => {
            assert_eq!(start.as_number(), Some(1.0));
            assert_eq!(identifier_name(&end), "n");
            assert_eq!(step.and_then(|s| s.as_number()), Some(2.0));
            assert_eq!(body.len(), 1);
        }
        other => panic!("Expected from loop, got {:?}", other),
    }

    match single_statement("from 0 to 10:\n    break\n") {
        StatementKind::From { step, .. } => assert!(step.is_none()),
        other => panic!("Expected from loop, got {:?}", other),
    }
}

#[test]
fn test_function_declaration_parameters() {
    let source = indoc! {"
        int apply(int f(int, int), int a, int b = 2):
            return f(a, b)
    "};
    match single_statement(source) {
        StatementKind::FunctionDeclaration(func) => {
            assert_eq!(func.name, "apply");
            assert_eq!(func.return_type, Type::Int);
            assert_eq!(func.parameters.len(), 3);

            let callback = &func.parameters[0];
            assert_eq!(callback.name, "f");
            assert_eq!(
                callback.function_type.as_ref().map(|ft| ft.parameters.clone()),
                Some(vec![Type::Int, Type::Int])
            );
            assert!(callback.default.is_none());

            let b = &func.parameters[2];
            assert!(b.function_type.is_none());
            assert_eq!(b.default.as_ref().and_then(|d| d.as_number()), Some(2.0));

            assert_eq!(func.body.len(), 1);
            assert!(func.symbol_id.is_none());
        }
        other => panic!("Expected function declaration, got {:?}", other),
    }
}

#[test]
fn test_nested_blocks() {
    let source = indoc! {"
        while a:
            while b:
                break
            x = 1
        y = 2
    "};
    let program = build(source);
    assert_eq!(program.statements.len(), 2);
    let StatementKind::While { body, .. } = &program.statements[0].kind else {
        panic!("Expected while loop");
    };
    assert_eq!(body.len(), 2);
    assert!(matches!(body[0].kind, StatementKind::While { .. }));
}

#[test]
fn test_spans_refer_to_original_columns() {
    let source = indoc! {"
        while a:
            x = 1
    "};
    let program = build(source);
    let StatementKind::While { body, .. } = &program.statements[0].kind else {
        panic!("Expected while loop");
    };
    assert_eq!(body[0].span.start.line, 2);
    assert_eq!(body[0].span.start.column, 5);
    assert_eq!(body[0].span.start.filename, "test.casper");
}

#[test]
fn test_malformed_tree_is_internal_error() {
    let preprocessed = Preprocessor::new().process("x = 1\n", "test.casper").unwrap();
    let program = parse_tree(&preprocessed).unwrap().next().unwrap();

    // Hand the builder a tree that does not start at `program`
    let statements = program.into_inner();
    let err = AstBuilder::new(&preprocessed)
        .build_program(statements)
        .unwrap_err();
    assert_eq!(err.kind(), casper_common::ErrorKind::Internal);
}
