//! Constant folding of operators applied to literals
//!
//! Folding only happens when every operand is a literal of a kind the
//! operator is defined on. Anything else, including division by zero and
//! results that no literal can spell, is left for run time.

use crate::ast::{BinaryOp, ExpressionKind, UnaryOp};

/// Fold `left op right` when both sides are literals
pub(crate) fn fold_binary(op: BinaryOp, left: &ExpressionKind, right: &ExpressionKind) -> Option<ExpressionKind> {
    match (left, right) {
        (ExpressionKind::NumericLiteral(a), ExpressionKind::NumericLiteral(b)) => fold_numeric(op, *a, *b),
        (ExpressionKind::BooleanLiteral(a), ExpressionKind::BooleanLiteral(b)) => fold_boolean(op, *a, *b),
        (ExpressionKind::StringLiteral(a), ExpressionKind::StringLiteral(b)) => match op {
            BinaryOp::Equal => Some(ExpressionKind::BooleanLiteral(a == b)),
            BinaryOp::NotEqual => Some(ExpressionKind::BooleanLiteral(a != b)),
            _ => None,
        },
        _ => None,
    }
}

/// Fold a prefix operator applied to a literal. Postfix operators update
/// their operand and never fold.
pub(crate) fn fold_unary(op: UnaryOp, operand: &ExpressionKind) -> Option<ExpressionKind> {
    match (op, operand) {
        (UnaryOp::Negate, ExpressionKind::NumericLiteral(value)) if value.is_finite() => {
            Some(ExpressionKind::NumericLiteral(-value))
        }
        (UnaryOp::Not, ExpressionKind::BooleanLiteral(value)) => Some(ExpressionKind::BooleanLiteral(!value)),
        _ => None,
    }
}

fn fold_numeric(op: BinaryOp, a: f64, b: f64) -> Option<ExpressionKind> {
    let value = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div if b != 0.0 => a / b,
        BinaryOp::Mod if b != 0.0 => a % b,
        BinaryOp::Less => return Some(ExpressionKind::BooleanLiteral(a < b)),
        BinaryOp::LessEqual => return Some(ExpressionKind::BooleanLiteral(a <= b)),
        BinaryOp::Equal => return Some(ExpressionKind::BooleanLiteral(a == b)),
        BinaryOp::NotEqual => return Some(ExpressionKind::BooleanLiteral(a != b)),
        BinaryOp::GreaterEqual => return Some(ExpressionKind::BooleanLiteral(a >= b)),
        BinaryOp::Greater => return Some(ExpressionKind::BooleanLiteral(a > b)),
        _ => return None,
    };

    value.is_finite().then_some(ExpressionKind::NumericLiteral(value))
}

fn fold_boolean(op: BinaryOp, a: bool, b: bool) -> Option<ExpressionKind> {
    let value = match op {
        BinaryOp::And => a && b,
        BinaryOp::Or => a || b,
        BinaryOp::Equal => a == b,
        BinaryOp::NotEqual => a != b,
        _ => return None,
    };
    Some(ExpressionKind::BooleanLiteral(value))
}
