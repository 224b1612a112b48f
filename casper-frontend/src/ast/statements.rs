//! Statement AST nodes for Casper
//!
//! This module defines statement nodes, declarations and the program root.

use super::expressions::{Call, Expression};
use crate::types::{FunctionType, Type};
use casper_common::{SourceSpan, SymbolId};
use serde::{Deserialize, Serialize};

/// Root of a compilation unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub statements: Vec<Statement>,
    pub span: SourceSpan,
}

/// AST Statement nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub kind: StatementKind,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatementKind {
    /// `type a, b = x, y`
    VariableDeclaration(VariableDeclaration),

    /// `type name(params): body`
    FunctionDeclaration(FunctionDeclaration),

    /// `a, b[i] = x, y`
    Assignment {
        targets: Vec<Expression>,
        values: Vec<Expression>,
    },

    /// `if`/`elif` chain; one case per guard, in source order
    If {
        cases: Vec<Case>,
        else_body: Option<Vec<Statement>>,
    },

    /// While loop
    While {
        condition: Expression,
        body: Vec<Statement>,
    },

    /// Counted loop `from start to end by step`
    From {
        start: Expression,
        end: Expression,
        step: Option<Expression>,
        body: Vec<Statement>,
    },

    Break,

    Return(Option<Expression>),

    /// Call evaluated for its effect
    Call(Call),

    /// Scoped statement list; only produced by the optimizer
    Block(Vec<Statement>),
}

/// Variable declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub var_type: Type,
    pub names: Vec<String>,
    pub initializers: Vec<Expression>,
    /// One entry per name, filled during semantic analysis
    pub variables: Option<Vec<Variable>>,
}

/// Function declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub return_type: Type,
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub body: Vec<Statement>,
    pub symbol_id: Option<SymbolId>, // Filled during semantic analysis
}

/// Function parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub param_type: Type,
    pub name: String,
    /// Present when the parameter is itself a function, e.g. `int f(int, int)`
    pub function_type: Option<FunctionType>,
    pub default: Option<Expression>,
    pub span: SourceSpan,
    pub symbol_id: Option<SymbolId>, // Filled during semantic analysis
}

/// One guarded arm of an `if`/`elif` chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub condition: Expression,
    pub body: Vec<Statement>,
}

/// A declared name, created by semantic analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub symbol_id: SymbolId,
    pub name: String,
    pub var_type: Type,
}

impl Statement {
    pub fn new(kind: StatementKind, span: SourceSpan) -> Self {
        Self { kind, span }
    }

    /// An empty scoped block
    pub fn empty_block(span: SourceSpan) -> Self {
        Self::new(StatementKind::Block(Vec::new()), span)
    }
}

impl Parameter {
    /// Type the parameter is bound with inside the function body
    pub fn binding_type(&self) -> Type {
        match &self.function_type {
            Some(function) => Type::Function(function.clone()),
            None => self.param_type.clone(),
        }
    }
}

impl FunctionDeclaration {
    /// Signature of the function as seen by callers
    pub fn signature(&self) -> FunctionType {
        FunctionType::new(
            self.return_type.clone(),
            self.parameters.iter().map(Parameter::binding_type).collect(),
        )
    }
}
