//! Source locations for error reporting
//!
//! Locations always refer to the user's original source text, never to the
//! marker-annotated text the indentation preprocessor hands to the parser.
//! Lines and columns are 1-based and counted in characters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in a source file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub filename: String,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub fn new(filename: &str, line: u32, column: u32) -> Self {
        Self {
            filename: filename.to_string(),
            line,
            column,
        }
    }

    /// Build a location from the `usize` positions the preprocessor and pest
    /// work with. Values past `u32::MAX` saturate.
    pub fn from_line_col(filename: &str, line: usize, column: usize) -> Self {
        Self::new(
            filename,
            u32::try_from(line).unwrap_or(u32::MAX),
            u32::try_from(column).unwrap_or(u32::MAX),
        )
    }

    /// Placeholder for nodes built outside of any source text
    pub fn dummy() -> Self {
        Self::new("<unknown>", 0, 0)
    }

    fn position(&self) -> (u32, u32) {
        (self.line, self.column)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.line, self.column)
    }
}

/// Start and end of a syntax node; `end` is exclusive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    pub start: SourceLocation,
    pub end: SourceLocation,
}

impl SourceSpan {
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        Self { start, end }
    }

    pub fn from_location(location: SourceLocation) -> Self {
        Self {
            end: location.clone(),
            start: location,
        }
    }

    pub fn dummy() -> Self {
        Self::from_location(SourceLocation::dummy())
    }

    /// Smallest span covering both `self` and `other`. Spans from different
    /// files cannot be joined and leave `self` unchanged.
    pub fn extend(&self, other: &SourceSpan) -> SourceSpan {
        if self.start.filename != other.start.filename {
            return self.clone();
        }

        let start = if self.start.position() <= other.start.position() {
            &self.start
        } else {
            &other.start
        };
        let end = if self.end.position() >= other.end.position() {
            &self.end
        } else {
            &other.end
        };

        SourceSpan::new(start.clone(), end.clone())
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(
                f,
                "{}:{}:{}-{}",
                self.start.filename, self.start.line, self.start.column, self.end.column
            )
        } else {
            write!(
                f,
                "{}:{}:{}-{}:{}",
                self.start.filename, self.start.line, self.start.column, self.end.line, self.end.column
            )
        }
    }
}
