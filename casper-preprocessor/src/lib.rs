//! Indentation preprocessor for the Casper compiler
//!
//! Casper delimits blocks with indentation, but the grammar the parser is
//! generated from knows nothing about whitespace depth. This pass rewrites
//! every change in indentation into explicit marker characters:
//! one `INDENT_MARKER` where a block opens, and one `DEDENT_MARKER` per
//! level that closes. The result keeps every source line on its original
//! line number, and records how many markers were prepended to each line
//! so later stages can report columns in terms of the user's text.

pub mod errors;
pub mod source_map;

use log::{debug, trace};

pub use errors::IndentationError;
pub use source_map::PreprocessedSource;

use casper_common::SourceLocation;

/// Marker inserted where a new, deeper block begins
pub const INDENT_MARKER: char = '⇨';

/// Marker inserted once for every block that ends
pub const DEDENT_MARKER: char = '⇦';

/// Line comment prefix; comment-only lines never affect indentation
pub const COMMENT_PREFIX: &str = "//";

/// Main preprocessor struct
#[derive(Debug, Clone, Default)]
pub struct Preprocessor {
    /// Column width of a tab in indentation. `None` rejects tabs outright.
    tab_width: Option<usize>,
}

impl Preprocessor {
    /// Create a new preprocessor that rejects tabs in indentation
    pub fn new() -> Self {
        Self { tab_width: None }
    }

    /// Allow tabs in indentation, advancing to the next multiple of `width`
    pub fn set_tab_width(&mut self, width: Option<usize>) {
        self.tab_width = width.map(|w| w.max(1));
    }

    pub fn tab_width(&self) -> Option<usize> {
        self.tab_width
    }

    /// Rewrite indentation in `input` into block markers
    pub fn process(&self, input: &str, filename: &str) -> Result<PreprocessedSource, IndentationError> {
        // Depths of the enclosing blocks; the bottom entry is the top level.
        let mut levels: Vec<usize> = vec![0];
        let mut text = String::with_capacity(input.len() + 16);
        let mut line_shifts = Vec::new();

        for (index, line) in input.lines().enumerate() {
            let line_number = index + 1;

            if is_blank_or_comment(line) {
                text.push_str(line);
                text.push('\n');
                line_shifts.push(0);
                continue;
            }

            let indent = self.measure_indent(line, line_number, filename)?;
            let depth = indent.depth;
            let current = levels.last().copied().unwrap_or(0);
            let mut markers = 0;

            if depth > current {
                trace!("line {}: indent {} -> {}", line_number, current, depth);
                levels.push(depth);
                text.push(INDENT_MARKER);
                markers = 1;
            } else if depth < current {
                while levels.len() > 1 && levels.last().is_some_and(|&top| top > depth) {
                    levels.pop();
                    text.push(DEDENT_MARKER);
                    markers += 1;
                }
                trace!("line {}: dedent to {} ({} levels)", line_number, depth, markers);

                if levels.last().copied() != Some(depth) {
                    return Err(IndentationError::InconsistentDedent {
                        location: SourceLocation::from_line_col(filename, line_number, indent.chars + 1),
                        depth,
                        open_levels: levels,
                    });
                }
            }

            text.push_str(line);
            text.push('\n');
            line_shifts.push(markers);
        }

        let still_open = levels.len() - 1;
        if still_open > 0 {
            trace!("end of input: closing {} open blocks", still_open);
            for _ in 0..still_open {
                text.push(DEDENT_MARKER);
            }
            line_shifts.push(still_open);
        }

        debug!(
            "Preprocessed {} lines of {} ({} bytes out)",
            line_shifts.len(),
            filename,
            text.len()
        );

        Ok(PreprocessedSource::new(text, filename.to_string(), line_shifts))
    }

    /// Measure the leading whitespace of a line
    fn measure_indent(&self, line: &str, line_number: usize, filename: &str) -> Result<Indent, IndentationError> {
        let mut indent = Indent::default();

        for ch in line.chars() {
            match ch {
                ' ' => indent.depth += 1,
                '\t' => match self.tab_width {
                    Some(width) => indent.depth = (indent.depth / width + 1) * width,
                    None => {
                        return Err(IndentationError::TabInIndentation {
                            location: SourceLocation::from_line_col(filename, line_number, indent.chars + 1),
                        });
                    }
                },
                _ => break,
            }
            indent.chars += 1;
        }

        Ok(indent)
    }
}

fn is_blank_or_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX)
}

/// Leading whitespace of one line
#[derive(Debug, Default, Clone, Copy)]
struct Indent {
    /// Width in columns, with tabs expanded
    depth: usize,
    /// Number of whitespace characters
    chars: usize,
}
