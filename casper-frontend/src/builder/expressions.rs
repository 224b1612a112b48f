//! Expression productions
//!
//! Each precedence tier of the grammar produces a flat sequence of operands
//! and operators; the builder folds those left to right so that `a - b - c`
//! becomes `(a - b) - c`. A tier with a single operand passes it through.

use super::{children, expect_child, unexpected, AstBuilder};
use crate::ast::*;
use crate::parser::{ParseError, Rule};
use pest::iterators::Pair;

impl AstBuilder<'_> {
    /// Dispatch on the expression production
    pub(super) fn build_expression(&self, pair: Pair<'_, Rule>) -> Result<Expression, ParseError> {
        match pair.as_rule() {
            Rule::ternary_exp => self.build_ternary(pair),
            Rule::or_exp | Rule::and_exp | Rule::rel_exp | Rule::add_exp | Rule::mul_exp => {
                self.build_binary_chain(pair)
            }
            Rule::prefix_exp => self.build_prefix(pair),
            Rule::postfix_exp => self.build_postfix(pair),
            Rule::call => {
                let span = self.span(&pair);
                Ok(Expression::new(ExpressionKind::Call(self.build_call(pair)?), span))
            }
            Rule::var_exp => self.build_var_exp(pair),
            Rule::list_lit => self.build_list(pair),
            Rule::bool_lit | Rule::num_lit | Rule::str_lit => self.build_literal(pair),
            other => Err(unexpected(other, "expression")),
        }
    }

    /// Comma-separated `exp_list` or `var_exp_list`
    pub(super) fn build_expression_list(&self, pair: Pair<'_, Rule>) -> Result<Vec<Expression>, ParseError> {
        pair.into_inner()
            .map(|exp| self.build_expression(exp))
            .collect()
    }

    fn build_ternary(&self, pair: Pair<'_, Rule>) -> Result<Expression, ParseError> {
        let rule = pair.as_rule();
        let span = self.span(&pair);
        let mut inner = pair.into_inner();

        let condition = self.build_expression(expect_child(&mut inner, rule, "condition")?)?;
        let Some(then_pair) = inner.next() else {
            return Ok(condition);
        };
        let then_expr = self.build_expression(then_pair)?;
        let else_expr = self.build_expression(expect_child(&mut inner, rule, "else branch")?)?;

        Ok(Expression::new(
            ExpressionKind::Ternary {
                condition: Box::new(condition),
                then_expr: Box::new(then_expr),
                else_expr: Box::new(else_expr),
            },
            span,
        ))
    }

    /// `operand (op operand)*`, folded left-associatively
    fn build_binary_chain(&self, pair: Pair<'_, Rule>) -> Result<Expression, ParseError> {
        let rule = pair.as_rule();
        let mut inner = pair.into_inner();

        let mut left = self.build_expression(expect_child(&mut inner, rule, "operand")?)?;
        while let Some(op_pair) = inner.next() {
            let op = BinaryOp::from_lexeme(op_pair.as_str())
                .ok_or_else(|| unexpected(op_pair.as_rule(), "binary operator"))?;
            let right = self.build_expression(expect_child(&mut inner, rule, "right operand")?)?;

            let span = left.span.extend(&right.span);
            left = Expression::new(
                ExpressionKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(left)
    }

    fn build_prefix(&self, pair: Pair<'_, Rule>) -> Result<Expression, ParseError> {
        let rule = pair.as_rule();
        let span = self.span(&pair);
        let mut inner = pair.into_inner();

        let first = expect_child(&mut inner, rule, "operand")?;
        if first.as_rule() != Rule::prefix_op {
            return self.build_expression(first);
        }

        let op = UnaryOp::from_prefix_lexeme(first.as_str())
            .ok_or_else(|| unexpected(first.as_rule(), "prefix operator"))?;
        let operand = self.build_expression(expect_child(&mut inner, rule, "operand")?)?;

        Ok(Expression::new(
            ExpressionKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    fn build_postfix(&self, pair: Pair<'_, Rule>) -> Result<Expression, ParseError> {
        let rule = pair.as_rule();
        let span = self.span(&pair);
        let mut inner = pair.into_inner();

        let operand = self.build_expression(expect_child(&mut inner, rule, "operand")?)?;
        let Some(op_pair) = inner.next() else {
            return Ok(operand);
        };
        let op = UnaryOp::from_postfix_lexeme(op_pair.as_str())
            .ok_or_else(|| unexpected(op_pair.as_rule(), "postfix operator"))?;

        Ok(Expression::new(
            ExpressionKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    /// Identifier followed by any number of subscripts
    fn build_var_exp(&self, pair: Pair<'_, Rule>) -> Result<Expression, ParseError> {
        let rule = pair.as_rule();
        let mut inner = pair.into_inner();

        let ident = expect_child(&mut inner, rule, "identifier")?;
        let mut target = Expression::identifier(ident.as_str(), self.span(&ident));

        for subscript in inner {
            let end = self.span(&subscript);
            let sub_rule = subscript.as_rule();
            let index = expect_child(&mut children(subscript), sub_rule, "index")?;
            let index = self.build_expression(index)?;

            let span = target.span.extend(&end);
            target = Expression::new(
                ExpressionKind::Subscripted {
                    target: Box::new(target),
                    index: Box::new(index),
                },
                span,
            );
        }

        Ok(target)
    }

    pub(super) fn build_call(&self, pair: Pair<'_, Rule>) -> Result<Call, ParseError> {
        let rule = pair.as_rule();
        let mut inner = pair.into_inner();

        let callee = self.build_var_exp(expect_child(&mut inner, rule, "callee")?)?;
        let arguments = expect_child(&mut inner, rule, "arguments")?
            .into_inner()
            .map(|arg| self.build_argument(arg))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Call {
            callee: Box::new(callee),
            arguments,
        })
    }

    fn build_argument(&self, pair: Pair<'_, Rule>) -> Result<Argument, ParseError> {
        let rule = pair.as_rule();
        let exp = expect_child(&mut pair.into_inner(), rule, "argument")?;
        Ok(Argument {
            expression: self.build_expression(exp)?,
        })
    }

    fn build_list(&self, pair: Pair<'_, Rule>) -> Result<Expression, ParseError> {
        let span = self.span(&pair);
        let items = pair
            .into_inner()
            .map(|item| self.build_expression(item))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Expression::new(ExpressionKind::List(items), span))
    }

    fn build_literal(&self, pair: Pair<'_, Rule>) -> Result<Expression, ParseError> {
        let span = self.span(&pair);
        let text = pair.as_str();

        let kind = match pair.as_rule() {
            Rule::bool_lit => ExpressionKind::BooleanLiteral(text == "true"),
            Rule::num_lit => {
                let value = text.parse::<f64>().map_err(|e| {
                    ParseError::malformed("num_lit", format!("invalid number `{}`: {}", text, e))
                })?;
                ExpressionKind::NumericLiteral(value)
            }
            Rule::str_lit => ExpressionKind::StringLiteral(text.to_string()),
            other => return Err(unexpected(other, "literal")),
        };

        Ok(Expression::new(kind, span))
    }
}
