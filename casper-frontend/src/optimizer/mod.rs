//! AST optimizer
//!
//! A bottom-up rewrite of the analyzed tree: constant folding of operators
//! on literals, collapsing of ternaries and `if` chains whose guards are
//! boolean literals, and removal of `while false` loops. A statement is
//! always replaced by exactly one statement, so statement lists keep their
//! length. A construct removed or collapsed together with its branch
//! scoping becomes a `Block`. Running the optimizer on its own output
//! changes nothing.

mod fold;

use crate::ast::*;
use log::{debug, trace};

/// Optimizer entry point
pub struct Optimizer;

impl Optimizer {
    /// Optimize every statement of a program
    pub fn optimize_program(program: Program) -> Program {
        let statements = Self::optimize_body(program.statements);
        debug!("Optimized {} top-level statements", statements.len());

        Program {
            statements,
            span: program.span,
        }
    }

    pub fn optimize_statement(stmt: Statement) -> Statement {
        let Statement { kind, span } = stmt;

        let kind = match kind {
            StatementKind::VariableDeclaration(mut decl) => {
                decl.initializers = Self::optimize_all(decl.initializers);
                StatementKind::VariableDeclaration(decl)
            }

            StatementKind::FunctionDeclaration(mut func) => {
                for param in func.parameters.iter_mut() {
                    param.default = param.default.take().map(Self::optimize_expression);
                }
                func.body = Self::optimize_body(func.body);
                StatementKind::FunctionDeclaration(func)
            }

            StatementKind::Assignment { targets, values } => StatementKind::Assignment {
                targets: Self::optimize_all(targets),
                values: Self::optimize_all(values),
            },

            StatementKind::If { cases, else_body } => Self::optimize_if(cases, else_body),

            StatementKind::While { condition, body } => {
                let condition = Self::optimize_expression(condition);
                if condition.as_boolean() == Some(false) {
                    trace!("removing `while false` at {}", span);
                    StatementKind::Block(Vec::new())
                } else {
                    StatementKind::While {
                        condition,
                        body: Self::optimize_body(body),
                    }
                }
            }

            StatementKind::From { start, end, step, body } => StatementKind::From {
                start: Self::optimize_expression(start),
                end: Self::optimize_expression(end),
                step: step.map(Self::optimize_expression),
                body: Self::optimize_body(body),
            },

            StatementKind::Break => StatementKind::Break,

            StatementKind::Return(value) => StatementKind::Return(value.map(Self::optimize_expression)),

            StatementKind::Call(call) => StatementKind::Call(Self::optimize_call(call)),

            StatementKind::Block(statements) => StatementKind::Block(Self::optimize_body(statements)),
        };

        Statement::new(kind, span)
    }

    /// Drop arms whose guard is `false`; the first arm whose guard is `true`
    /// becomes the else branch and ends the chain. With no guarded arm left
    /// the statement becomes a block holding whichever branch is taken.
    fn optimize_if(cases: Vec<Case>, else_body: Option<Vec<Statement>>) -> StatementKind {
        let mut kept = Vec::with_capacity(cases.len());
        let mut taken = None;

        for case in cases {
            let condition = Self::optimize_expression(case.condition);
            match condition.as_boolean() {
                Some(false) => trace!("dropping `if` arm with constant false guard"),
                Some(true) => {
                    taken = Some(Self::optimize_body(case.body));
                    break;
                }
                None => kept.push(Case {
                    condition,
                    body: Self::optimize_body(case.body),
                }),
            }
        }

        let else_body = match taken {
            Some(body) => Some(body),
            None => else_body.map(Self::optimize_body),
        };

        if kept.is_empty() {
            StatementKind::Block(else_body.unwrap_or_default())
        } else {
            StatementKind::If {
                cases: kept,
                else_body,
            }
        }
    }

    pub fn optimize_expression(expr: Expression) -> Expression {
        let Expression { kind, span } = expr;

        let kind = match kind {
            ExpressionKind::Binary { op, left, right } => {
                let left = Self::optimize_expression(*left);
                let right = Self::optimize_expression(*right);
                match fold::fold_binary(op, &left.kind, &right.kind) {
                    Some(folded) => {
                        trace!("folded `{}` at {}", op, span);
                        folded
                    }
                    None => ExpressionKind::Binary {
                        op,
                        left: Box::new(left),
                        right: Box::new(right),
                    },
                }
            }

            ExpressionKind::Unary { op, operand } => {
                let operand = Self::optimize_expression(*operand);
                match fold::fold_unary(op, &operand.kind) {
                    Some(folded) => folded,
                    None => ExpressionKind::Unary {
                        op,
                        operand: Box::new(operand),
                    },
                }
            }

            ExpressionKind::Ternary { condition, then_expr, else_expr } => {
                let condition = Self::optimize_expression(*condition);
                match condition.as_boolean() {
                    Some(true) => return Self::optimize_expression(*then_expr),
                    Some(false) => return Self::optimize_expression(*else_expr),
                    None => ExpressionKind::Ternary {
                        condition: Box::new(condition),
                        then_expr: Box::new(Self::optimize_expression(*then_expr)),
                        else_expr: Box::new(Self::optimize_expression(*else_expr)),
                    },
                }
            }

            ExpressionKind::Subscripted { target, index } => ExpressionKind::Subscripted {
                target: Box::new(Self::optimize_expression(*target)),
                index: Box::new(Self::optimize_expression(*index)),
            },

            ExpressionKind::Call(call) => ExpressionKind::Call(Self::optimize_call(call)),

            ExpressionKind::List(items) => ExpressionKind::List(Self::optimize_all(items)),

            leaf @ (ExpressionKind::BooleanLiteral(_)
            | ExpressionKind::NumericLiteral(_)
            | ExpressionKind::StringLiteral(_)
            | ExpressionKind::Identifier { .. }) => leaf,
        };

        Expression::new(kind, span)
    }

    fn optimize_call(call: Call) -> Call {
        Call {
            callee: Box::new(Self::optimize_expression(*call.callee)),
            arguments: call
                .arguments
                .into_iter()
                .map(|arg| Argument {
                    expression: Self::optimize_expression(arg.expression),
                })
                .collect(),
        }
    }

    fn optimize_body(statements: Vec<Statement>) -> Vec<Statement> {
        statements.into_iter().map(Self::optimize_statement).collect()
    }

    fn optimize_all(exprs: Vec<Expression>) -> Vec<Expression> {
        exprs.into_iter().map(Self::optimize_expression).collect()
    }
}
