//! Semantic analysis error definitions
//!
//! This module defines all error types that can occur during semantic analysis.

use casper_common::{CompilerError, SourceLocation};

/// Semantic analysis errors
#[derive(Debug, Clone, PartialEq)]
pub enum SemanticError {
    UndefinedVariable {
        name: String,
        location: SourceLocation,
    },
    RedefinedSymbol {
        name: String,
        original_location: SourceLocation,
        redefinition_location: SourceLocation,
    },
    BreakOutsideLoop {
        location: SourceLocation,
    },
    ArityMismatch {
        targets: usize,
        values: usize,
        location: SourceLocation,
    },
}

impl From<SemanticError> for CompilerError {
    fn from(err: SemanticError) -> Self {
        match err {
            SemanticError::UndefinedVariable { name, location } => {
                CompilerError::semantic_error(
                    format!("Undefined variable: {name}"),
                    location,
                )
            }
            SemanticError::RedefinedSymbol { name, original_location, redefinition_location } => {
                CompilerError::semantic_error(
                    format!("Redefinition of '{name}' (previously declared at {original_location})"),
                    redefinition_location,
                )
            }
            SemanticError::BreakOutsideLoop { location } => {
                CompilerError::semantic_error(
                    "Break statement outside of a loop".to_string(),
                    location,
                )
            }
            SemanticError::ArityMismatch { targets, values, location } => {
                CompilerError::semantic_error(
                    format!("Assignment arity mismatch: {targets} targets but {values} values"),
                    location,
                )
            }
        }
    }
}
