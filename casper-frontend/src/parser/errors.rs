//! Parse error types for the Casper parser
//!
//! This module defines all error types that can occur while matching the
//! grammar and while reading the resulting parse tree.

use casper_common::{CompilerError, SourceLocation};
use thiserror::Error;

/// Parse error types specific to the parser
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The marker-annotated text does not match the grammar
    #[error("{message}")]
    Syntax {
        message: String,
        location: SourceLocation,
    },

    /// The parse tree does not have the shape a production promises.
    /// Only reachable if the grammar and the AST builder disagree.
    #[error("malformed parse tree at `{rule}`: {message}")]
    MalformedTree { rule: String, message: String },
}

impl ParseError {
    pub fn malformed(rule: impl Into<String>, message: impl Into<String>) -> Self {
        ParseError::MalformedTree {
            rule: rule.into(),
            message: message.into(),
        }
    }
}

impl From<ParseError> for CompilerError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Syntax { message, location } => {
                CompilerError::parse_error(message, location)
            }
            malformed @ ParseError::MalformedTree { .. } => {
                CompilerError::internal_error(malformed.to_string())
            }
        }
    }
}
