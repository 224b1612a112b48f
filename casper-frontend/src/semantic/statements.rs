//! Statement semantic analysis
//!
//! This module handles scoping, declarations, loop legality and
//! assignment arity.

use crate::ast::*;
use crate::semantic::context::AnalysisContext;
use crate::semantic::errors::SemanticError;
use crate::semantic::expressions::ExpressionAnalyzer;
use crate::types::Type;
use casper_common::{CompilerError, SourceSpan};

pub struct StatementAnalyzer {
    expressions: ExpressionAnalyzer,
}

impl StatementAnalyzer {
    pub fn new() -> Self {
        Self {
            expressions: ExpressionAnalyzer,
        }
    }

    /// Analyze a statement
    pub fn analyze_statement(
        &self,
        stmt: &mut Statement,
        context: &mut AnalysisContext,
    ) -> Result<(), CompilerError> {
        let span = &stmt.span;

        match &mut stmt.kind {
            StatementKind::VariableDeclaration(decl) => {
                self.analyze_variable_declaration(decl, span, context)?;
            }

            StatementKind::FunctionDeclaration(func) => {
                self.analyze_function_declaration(func, span, context)?;
            }

            StatementKind::Assignment { targets, values } => {
                self.analyze_assignment(targets, values, span, context)?;
            }

            StatementKind::If { cases, else_body } => {
                // Each arm gets its own scope, guard included
                for case in cases.iter_mut() {
                    context.with_scope(|ctx| {
                        self.expressions.analyze(&mut case.condition, ctx)?;
                        self.analyze_body(&mut case.body, ctx)
                    })?;
                }

                if let Some(body) = else_body {
                    context.with_scope(|ctx| self.analyze_body(body, ctx))?;
                }
            }

            StatementKind::While { condition, body } => {
                self.expressions.analyze(condition, context)?;
                self.analyze_loop_body(body, context)?;
            }

            StatementKind::From { start, end, step, body } => {
                self.expressions.analyze(start, context)?;
                self.expressions.analyze(end, context)?;
                if let Some(step) = step {
                    self.expressions.analyze(step, context)?;
                }
                self.analyze_loop_body(body, context)?;
            }

            StatementKind::Break => {
                if !context.in_loop() {
                    return Err(SemanticError::BreakOutsideLoop {
                        location: span.start.clone(),
                    }
                    .into());
                }
            }

            StatementKind::Return(value) => {
                if let Some(value) = value {
                    self.expressions.analyze(value, context)?;
                }
            }

            StatementKind::Call(call) => {
                self.expressions.analyze_call(call, context)?;
            }

            StatementKind::Block(statements) => {
                context.with_scope(|ctx| self.analyze_body(statements, ctx))?;
            }
        }

        Ok(())
    }

    /// Statements of a body, in order, within the current scope
    pub fn analyze_body(
        &self,
        statements: &mut [Statement],
        context: &mut AnalysisContext,
    ) -> Result<(), CompilerError> {
        statements
            .iter_mut()
            .try_for_each(|stmt| self.analyze_statement(stmt, context))
    }

    fn analyze_loop_body(
        &self,
        body: &mut [Statement],
        context: &mut AnalysisContext,
    ) -> Result<(), CompilerError> {
        context.with_scope(|ctx| ctx.with_loop(true, |ctx| self.analyze_body(body, ctx)))
    }

    /// Names are bound before the initializers are analyzed, then the
    /// declaration is checked as the assignment `names = initializers`.
    fn analyze_variable_declaration(
        &self,
        decl: &mut VariableDeclaration,
        span: &SourceSpan,
        context: &mut AnalysisContext,
    ) -> Result<(), CompilerError> {
        let mut variables = Vec::with_capacity(decl.names.len());
        for name in &decl.names {
            variables.push(context.declare(name, decl.var_type.clone(), &span.start)?);
        }

        let mut targets: Vec<Expression> = decl
            .names
            .iter()
            .map(|name| Expression::identifier(name, span.clone()))
            .collect();
        self.analyze_assignment(&mut targets, &mut decl.initializers, span, context)?;

        decl.variables = Some(variables);
        Ok(())
    }

    fn analyze_function_declaration(
        &self,
        func: &mut FunctionDeclaration,
        span: &SourceSpan,
        context: &mut AnalysisContext,
    ) -> Result<(), CompilerError> {
        // Bound in the enclosing scope first so the body can recurse
        let function = context.declare(&func.name, Type::Function(func.signature()), &span.start)?;
        func.symbol_id = Some(function.symbol_id);

        for param in func.parameters.iter_mut() {
            if let Some(default) = &mut param.default {
                self.expressions.analyze(default, context)?;
            }
        }

        let parameters = &mut func.parameters;
        let body = &mut func.body;
        context.with_scope(|ctx| {
            ctx.with_loop(false, |ctx| {
                for param in parameters.iter_mut() {
                    let variable = ctx.declare(&param.name, param.binding_type(), &param.span.start)?;
                    param.symbol_id = Some(variable.symbol_id);
                }
                self.analyze_body(body, ctx)
            })
        })
    }

    /// Targets and values must pair up one to one
    fn analyze_assignment(
        &self,
        targets: &mut [Expression],
        values: &mut [Expression],
        span: &SourceSpan,
        context: &mut AnalysisContext,
    ) -> Result<(), CompilerError> {
        if targets.len() != values.len() {
            return Err(SemanticError::ArityMismatch {
                targets: targets.len(),
                values: values.len(),
                location: span.start.clone(),
            }
            .into());
        }

        self.expressions.analyze_all(targets, context)?;
        self.expressions.analyze_all(values, context)
    }
}

impl Default for StatementAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
