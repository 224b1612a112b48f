//! Operator definitions for Casper
//!
//! This module defines binary and unary operators used in expressions.
//! Several operators have two spellings (`&&`/`and`, `||`/`or`, `!`/`not`);
//! both map to the same variant.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    // Logical
    Or, And,

    // Relational
    Less, LessEqual, Equal, NotEqual, GreaterEqual, Greater,

    // Arithmetic
    Add, Sub, Mul, Div, Mod,
}

impl BinaryOp {
    /// Map an operator lexeme to its variant
    pub fn from_lexeme(lexeme: &str) -> Option<BinaryOp> {
        let op = match lexeme {
            "||" | "or" => BinaryOp::Or,
            "&&" | "and" => BinaryOp::And,
            "<" => BinaryOp::Less,
            "<=" => BinaryOp::LessEqual,
            "==" => BinaryOp::Equal,
            "!=" => BinaryOp::NotEqual,
            ">=" => BinaryOp::GreaterEqual,
            ">" => BinaryOp::Greater,
            "+" => BinaryOp::Add,
            "-" => BinaryOp::Sub,
            "*" => BinaryOp::Mul,
            "/" => BinaryOp::Div,
            "%" => BinaryOp::Mod,
            _ => return None,
        };
        Some(op)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op_str = match self {
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::Less => "<",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::Greater => ">",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
        };
        write!(f, "{}", op_str)
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    // Prefix
    Negate, Not,

    // Postfix
    Increment, Decrement,
}

impl UnaryOp {
    pub fn from_prefix_lexeme(lexeme: &str) -> Option<UnaryOp> {
        match lexeme {
            "-" => Some(UnaryOp::Negate),
            "!" | "not" => Some(UnaryOp::Not),
            _ => None,
        }
    }

    pub fn from_postfix_lexeme(lexeme: &str) -> Option<UnaryOp> {
        match lexeme {
            "++" => Some(UnaryOp::Increment),
            "--" => Some(UnaryOp::Decrement),
            _ => None,
        }
    }

    /// Whether the operator is written after its operand
    pub fn is_postfix(&self) -> bool {
        matches!(self, UnaryOp::Increment | UnaryOp::Decrement)
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op_str = match self {
            UnaryOp::Negate => "-",
            UnaryOp::Not => "!",
            UnaryOp::Increment => "++",
            UnaryOp::Decrement => "--",
        };
        write!(f, "{}", op_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_op_display() {
        assert_eq!(format!("{}", BinaryOp::Add), "+");
        assert_eq!(format!("{}", BinaryOp::Equal), "==");
        assert_eq!(format!("{}", BinaryOp::And), "&&");
        assert_eq!(format!("{}", BinaryOp::Mod), "%");
    }

    #[test]
    fn test_word_operators_share_variants() {
        assert_eq!(BinaryOp::from_lexeme("and"), BinaryOp::from_lexeme("&&"));
        assert_eq!(BinaryOp::from_lexeme("or"), Some(BinaryOp::Or));
        assert_eq!(UnaryOp::from_prefix_lexeme("not"), Some(UnaryOp::Not));
        assert_eq!(BinaryOp::from_lexeme("<<"), None);
    }

    #[test]
    fn test_unary_op_fixity() {
        assert!(!UnaryOp::Negate.is_postfix());
        assert!(UnaryOp::Increment.is_postfix());
        assert_eq!(UnaryOp::from_postfix_lexeme("--"), Some(UnaryOp::Decrement));
        assert_eq!(UnaryOp::from_prefix_lexeme("++"), None);
    }
}
