//! Expression semantic analysis
//!
//! Resolves every identifier reference to the variable it names and
//! records the symbol on the node.

use crate::ast::*;
use crate::semantic::context::AnalysisContext;
use crate::semantic::errors::SemanticError;
use casper_common::CompilerError;
use log::trace;

pub struct ExpressionAnalyzer;

impl ExpressionAnalyzer {
    /// Analyze an expression and all of its subexpressions
    pub fn analyze(
        &self,
        expr: &mut Expression,
        context: &mut AnalysisContext,
    ) -> Result<(), CompilerError> {
        match &mut expr.kind {
            ExpressionKind::BooleanLiteral(_)
            | ExpressionKind::NumericLiteral(_)
            | ExpressionKind::StringLiteral(_) => Ok(()),

            ExpressionKind::Identifier { name, symbol_id } => {
                let variable = context.lookup(name).ok_or_else(|| SemanticError::UndefinedVariable {
                    name: name.clone(),
                    location: expr.span.start.clone(),
                })?;
                trace!("resolved {} to symbol {}", name, variable.symbol_id);
                *symbol_id = Some(variable.symbol_id);
                Ok(())
            }

            ExpressionKind::Subscripted { target, index } => {
                self.analyze(target, context)?;
                self.analyze(index, context)
            }

            ExpressionKind::Call(call) => self.analyze_call(call, context),

            ExpressionKind::List(items) => self.analyze_all(items, context),

            ExpressionKind::Binary { left, right, .. } => {
                self.analyze(left, context)?;
                self.analyze(right, context)
            }

            ExpressionKind::Unary { operand, .. } => self.analyze(operand, context),

            ExpressionKind::Ternary { condition, then_expr, else_expr } => {
                self.analyze(condition, context)?;
                self.analyze(then_expr, context)?;
                self.analyze(else_expr, context)
            }
        }
    }

    /// Analyze expressions left to right, stopping at the first error
    pub fn analyze_all(
        &self,
        exprs: &mut [Expression],
        context: &mut AnalysisContext,
    ) -> Result<(), CompilerError> {
        exprs.iter_mut().try_for_each(|expr| self.analyze(expr, context))
    }

    /// Callee first, then each argument in order
    pub fn analyze_call(&self, call: &mut Call, context: &mut AnalysisContext) -> Result<(), CompilerError> {
        self.analyze(&mut call.callee, context)?;
        call.arguments
            .iter_mut()
            .try_for_each(|arg| self.analyze(&mut arg.expression, context))
    }
}
