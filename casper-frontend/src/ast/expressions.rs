//! Expression AST nodes for Casper
//!
//! This module defines expression nodes in the abstract syntax tree.

use super::ops::{BinaryOp, UnaryOp};
use casper_common::{SourceSpan, SymbolId};
use serde::{Deserialize, Serialize};

/// AST Expression nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    pub kind: ExpressionKind,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExpressionKind {
    /// `true` or `false`
    BooleanLiteral(bool),

    /// Numeric literal; Casper has a single number representation in the tree.
    /// Literals too large for `f64` hold an infinity.
    NumericLiteral(#[serde(with = "numeric_repr")] f64),

    /// String literal, kept with its surrounding quotes
    StringLiteral(String),

    /// Identifier reference
    Identifier {
        name: String,
        symbol_id: Option<SymbolId>, // Filled during semantic analysis
    },

    /// Indexed access `target[index]`
    Subscripted {
        target: Box<Expression>,
        index: Box<Expression>,
    },

    /// Function call used as a value
    Call(Call),

    /// List literal `[a, b, c]`
    List(Vec<Expression>),

    /// Binary operation
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// Prefix or postfix unary operation
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },

    /// Ternary conditional operator (condition ? then_expr : else_expr)
    Ternary {
        condition: Box<Expression>,
        then_expr: Box<Expression>,
        else_expr: Box<Expression>,
    },
}

/// A call, shared by call statements and call expressions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub callee: Box<Expression>,
    pub arguments: Vec<Argument>,
}

/// A single call argument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    pub expression: Expression,
}

impl Expression {
    pub fn new(kind: ExpressionKind, span: SourceSpan) -> Self {
        Self { kind, span }
    }

    /// An unresolved reference to `name`
    pub fn identifier(name: &str, span: SourceSpan) -> Self {
        Self::new(
            ExpressionKind::Identifier {
                name: name.to_string(),
                symbol_id: None,
            },
            span,
        )
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self.kind,
            ExpressionKind::BooleanLiteral(_)
                | ExpressionKind::NumericLiteral(_)
                | ExpressionKind::StringLiteral(_)
        )
    }

    /// The value of a boolean literal, if this is one
    pub fn as_boolean(&self) -> Option<bool> {
        match self.kind {
            ExpressionKind::BooleanLiteral(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self.kind {
            ExpressionKind::NumericLiteral(value) => Some(value),
            _ => None,
        }
    }

    /// Resolved symbol of an identifier reference
    pub fn symbol_id(&self) -> Option<SymbolId> {
        match &self.kind {
            ExpressionKind::Identifier { symbol_id, .. } => *symbol_id,
            _ => None,
        }
    }
}

/// JSON has no spelling for non-finite numbers, so those are written as
/// the strings `"inf"`, `"-inf"` and `"NaN"`.
mod numeric_repr {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_sign_positive() {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_str("-inf")
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                "NaN" => Ok(f64::NAN),
                other => Err(D::Error::custom(format!("invalid numeric literal `{}`", other))),
            },
        }
    }
}
