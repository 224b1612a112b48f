//! Preprocessed text together with the mapping back to the original source

use crate::{DEDENT_MARKER, INDENT_MARKER};
use casper_common::SourceLocation;

/// Output of the indentation preprocessor.
///
/// Line numbers are identical to the original source. Only the start of a
/// line can differ, by the number of markers that were prepended to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreprocessedSource {
    text: String,
    filename: String,
    /// Number of marker characters prepended to each line, indexed by line - 1
    line_shifts: Vec<usize>,
}

impl PreprocessedSource {
    pub fn new(text: String, filename: String, line_shifts: Vec<usize>) -> Self {
        Self {
            text,
            filename,
            line_shifts,
        }
    }

    /// Marker-annotated text for the parser
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Number of markers prepended to a 1-based line
    pub fn markers_on_line(&self, line: usize) -> usize {
        line.checked_sub(1)
            .and_then(|index| self.line_shifts.get(index))
            .copied()
            .unwrap_or(0)
    }

    /// Map a 1-based (line, column) in the preprocessed text back to the
    /// user's source. Columns that fall on a marker map to column 1.
    pub fn original_location(&self, line: usize, column: usize) -> SourceLocation {
        let shift = self.markers_on_line(line);
        let column = if column > shift { column - shift } else { 1 };

        SourceLocation::from_line_col(&self.filename, line, column)
    }

    /// Total count of INDENT and DEDENT markers, in that order
    pub fn marker_counts(&self) -> (usize, usize) {
        self.text.chars().fold((0, 0), |(indents, dedents), ch| match ch {
            INDENT_MARKER => (indents + 1, dedents),
            DEDENT_MARKER => (indents, dedents + 1),
            _ => (indents, dedents),
        })
    }
}
