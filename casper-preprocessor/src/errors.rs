//! Indentation error definitions

use casper_common::{CompilerError, SourceLocation};
use thiserror::Error;

/// Errors raised while turning indentation into block markers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndentationError {
    #[error("dedent to depth {depth} does not match any enclosing indentation level (open levels: {open_levels:?})")]
    InconsistentDedent {
        location: SourceLocation,
        depth: usize,
        open_levels: Vec<usize>,
    },

    #[error("tab character in indentation")]
    TabInIndentation { location: SourceLocation },
}

impl IndentationError {
    pub fn location(&self) -> &SourceLocation {
        match self {
            IndentationError::InconsistentDedent { location, .. }
            | IndentationError::TabInIndentation { location } => location,
        }
    }
}

impl From<IndentationError> for CompilerError {
    fn from(err: IndentationError) -> Self {
        let location = err.location().clone();
        CompilerError::indentation_error(err.to_string(), location)
    }
}
