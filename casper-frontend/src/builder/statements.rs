//! Statement productions

use super::{children, expect_child, unexpected, AstBuilder};
use crate::ast::*;
use crate::parser::{ParseError, Rule};
use crate::types::{FunctionType, Type};
use pest::iterators::Pair;

impl AstBuilder<'_> {
    /// Dispatch on the statement production
    pub(super) fn build_statement(&self, pair: Pair<'_, Rule>) -> Result<Statement, ParseError> {
        let span = self.span(&pair);

        let kind = match pair.as_rule() {
            Rule::while_stmt => self.build_while(pair)?,
            Rule::from_stmt => self.build_from(pair)?,
            Rule::if_stmt => self.build_if(pair)?,
            Rule::function_decl => self.build_function_declaration(pair)?,
            Rule::var_decl => self.build_variable_declaration(pair)?,
            Rule::assignment => self.build_assignment(pair)?,
            Rule::break_stmt => StatementKind::Break,
            Rule::return_stmt => self.build_return(pair)?,
            Rule::call_stmt => {
                let rule = pair.as_rule();
                let call = expect_child(&mut children(pair), rule, "call")?;
                StatementKind::Call(self.build_call(call)?)
            }
            other => return Err(unexpected(other, "statement")),
        };

        Ok(Statement::new(kind, span))
    }

    fn build_while(&self, pair: Pair<'_, Rule>) -> Result<StatementKind, ParseError> {
        let rule = pair.as_rule();
        let mut inner = children(pair);

        let condition = self.build_expression(expect_child(&mut inner, rule, "condition")?)?;
        let body = self.build_block(expect_child(&mut inner, rule, "body")?)?;

        Ok(StatementKind::While { condition, body })
    }

    fn build_from(&self, pair: Pair<'_, Rule>) -> Result<StatementKind, ParseError> {
        let rule = pair.as_rule();
        let mut inner = children(pair);

        let start = self.build_expression(expect_child(&mut inner, rule, "start bound")?)?;
        let end = self.build_expression(expect_child(&mut inner, rule, "end bound")?)?;

        let mut next = expect_child(&mut inner, rule, "body")?;
        let step = if next.as_rule() == Rule::step {
            let step = self.build_step(next)?;
            next = expect_child(&mut inner, rule, "body")?;
            Some(step)
        } else {
            None
        };
        let body = self.build_block(next)?;

        Ok(StatementKind::From { start, end, step, body })
    }

    fn build_step(&self, pair: Pair<'_, Rule>) -> Result<Expression, ParseError> {
        let rule = pair.as_rule();
        self.build_expression(expect_child(&mut children(pair), rule, "step")?)
    }

    fn build_if(&self, pair: Pair<'_, Rule>) -> Result<StatementKind, ParseError> {
        let rule = pair.as_rule();
        let mut inner = children(pair);

        let condition = self.build_expression(expect_child(&mut inner, rule, "condition")?)?;
        let body = self.build_block(expect_child(&mut inner, rule, "body")?)?;
        let mut cases = vec![Case { condition, body }];
        let mut else_body = None;

        for clause in inner {
            match clause.as_rule() {
                Rule::elif_clause => cases.push(self.build_elif(clause)?),
                Rule::else_clause => {
                    let rule = clause.as_rule();
                    let block = expect_child(&mut children(clause), rule, "body")?;
                    else_body = Some(self.build_block(block)?);
                }
                other => return Err(unexpected(other, "`elif` or `else`")),
            }
        }

        Ok(StatementKind::If { cases, else_body })
    }

    fn build_elif(&self, pair: Pair<'_, Rule>) -> Result<Case, ParseError> {
        let rule = pair.as_rule();
        let mut inner = children(pair);

        let condition = self.build_expression(expect_child(&mut inner, rule, "condition")?)?;
        let body = self.build_block(expect_child(&mut inner, rule, "body")?)?;

        Ok(Case { condition, body })
    }

    fn build_function_declaration(&self, pair: Pair<'_, Rule>) -> Result<StatementKind, ParseError> {
        let rule = pair.as_rule();
        let mut inner = children(pair);

        let return_type = self.build_type(expect_child(&mut inner, rule, "return type")?)?;
        let name = expect_child(&mut inner, rule, "name")?.as_str().to_string();
        let parameters = expect_child(&mut inner, rule, "parameters")?
            .into_inner()
            .map(|param| self.build_parameter(param))
            .collect::<Result<Vec<_>, _>>()?;
        let body = self.build_block(expect_child(&mut inner, rule, "body")?)?;

        Ok(StatementKind::FunctionDeclaration(FunctionDeclaration {
            return_type,
            name,
            parameters,
            body,
            symbol_id: None,
        }))
    }

    fn build_parameter(&self, pair: Pair<'_, Rule>) -> Result<Parameter, ParseError> {
        let rule = pair.as_rule();
        let span = self.span(&pair);
        let mut inner = children(pair);

        let param_type = self.build_type(expect_child(&mut inner, rule, "type")?)?;
        let name = expect_child(&mut inner, rule, "name")?.as_str().to_string();

        let mut function_type = None;
        let mut default = None;
        for part in inner {
            match part.as_rule() {
                Rule::fn_type => {
                    let parameters = part
                        .into_inner()
                        .map(|ty| self.build_type(ty))
                        .collect::<Result<Vec<_>, _>>()?;
                    function_type = Some(FunctionType::new(param_type.clone(), parameters));
                }
                Rule::default_value => {
                    let rule = part.as_rule();
                    let value = expect_child(&mut children(part), rule, "default value")?;
                    default = Some(self.build_expression(value)?);
                }
                other => return Err(unexpected(other, "parameter type or default")),
            }
        }

        Ok(Parameter {
            param_type,
            name,
            function_type,
            default,
            span,
            symbol_id: None,
        })
    }

    fn build_variable_declaration(&self, pair: Pair<'_, Rule>) -> Result<StatementKind, ParseError> {
        let rule = pair.as_rule();
        let mut inner = children(pair);

        let var_type = self.build_type(expect_child(&mut inner, rule, "type")?)?;
        let names = expect_child(&mut inner, rule, "names")?
            .into_inner()
            .map(|ident| ident.as_str().to_string())
            .collect();
        let initializers = self.build_expression_list(expect_child(&mut inner, rule, "initializers")?)?;

        Ok(StatementKind::VariableDeclaration(VariableDeclaration {
            var_type,
            names,
            initializers,
            variables: None,
        }))
    }

    fn build_assignment(&self, pair: Pair<'_, Rule>) -> Result<StatementKind, ParseError> {
        let rule = pair.as_rule();
        let mut inner = children(pair);

        let targets = self.build_expression_list(expect_child(&mut inner, rule, "targets")?)?;
        let values = self.build_expression_list(expect_child(&mut inner, rule, "values")?)?;

        Ok(StatementKind::Assignment { targets, values })
    }

    fn build_return(&self, pair: Pair<'_, Rule>) -> Result<StatementKind, ParseError> {
        let value = children(pair)
            .next()
            .map(|exp| self.build_expression(exp))
            .transpose()?;

        Ok(StatementKind::Return(value))
    }

    fn build_type(&self, pair: Pair<'_, Rule>) -> Result<Type, ParseError> {
        Type::from_keyword(pair.as_str())
            .ok_or_else(|| ParseError::malformed("type_name", format!("unknown type `{}`", pair.as_str())))
    }
}
