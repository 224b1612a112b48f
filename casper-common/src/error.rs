//! Error handling for the Casper compiler
//!
//! Every stage of the front end reports failures through `CompilerError`.
//! Stages keep their own typed error enums and convert into this one at
//! the stage boundary, so callers see a single terminal error.

use crate::source_loc::SourceLocation;
use thiserror::Error;

/// Main compiler error type that encompasses all phases of compilation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompilerError {
    #[error("Indentation error at {location}: {message}")]
    IndentationError {
        location: SourceLocation,
        message: String,
    },

    #[error("Syntax error at {location}: {message}")]
    ParseError {
        location: SourceLocation,
        message: String,
    },

    #[error("Semantic error at {location}: {message}")]
    Semantic {
        location: SourceLocation,
        message: String,
    },

    #[error("Internal compiler error: {message}")]
    InternalError { message: String },
}

/// Broad classification of a `CompilerError`, useful for callers that
/// only care which stage rejected the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Indentation,
    Syntax,
    Semantic,
    Internal,
}

impl CompilerError {
    /// Create an indentation error
    pub fn indentation_error(message: String, location: SourceLocation) -> Self {
        CompilerError::IndentationError { location, message }
    }

    /// Create a parse error
    pub fn parse_error(message: String, location: SourceLocation) -> Self {
        CompilerError::ParseError { location, message }
    }

    /// Create a semantic error
    pub fn semantic_error(message: String, location: SourceLocation) -> Self {
        CompilerError::Semantic { location, message }
    }

    /// Create an internal error
    pub fn internal_error(message: String) -> Self {
        CompilerError::InternalError { message }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CompilerError::IndentationError { .. } => ErrorKind::Indentation,
            CompilerError::ParseError { .. } => ErrorKind::Syntax,
            CompilerError::Semantic { .. } => ErrorKind::Semantic,
            CompilerError::InternalError { .. } => ErrorKind::Internal,
        }
    }

    /// Location the error points at, if the stage that raised it had one
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            CompilerError::IndentationError { location, .. }
            | CompilerError::ParseError { location, .. }
            | CompilerError::Semantic { location, .. } => Some(location),
            CompilerError::InternalError { .. } => None,
        }
    }

    /// Human-readable description without the location prefix
    pub fn message(&self) -> &str {
        match self {
            CompilerError::IndentationError { message, .. }
            | CompilerError::ParseError { message, .. }
            | CompilerError::Semantic { message, .. }
            | CompilerError::InternalError { message } => message,
        }
    }
}
