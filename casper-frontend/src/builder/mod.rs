//! AST construction from the parse tree
//!
//! The builder walks the pest parse tree with one method per grammar
//! production and produces owned AST nodes. Keyword markers are dropped,
//! optional elements become `Option`s and repeated elements become `Vec`s.
//! Every node's span is mapped back through the preprocessor's source map,
//! so locations refer to the user's text rather than the marker-annotated
//! text the parser saw.

mod expressions;
mod statements;

use crate::ast::{Program, Statement};
use crate::parser::{is_keyword, ParseError, Rule};
use casper_common::{CompilerError, SourceSpan};
use casper_preprocessor::PreprocessedSource;
use log::debug;
use pest::iterators::{Pair, Pairs};

/// Builds a `Program` from the parse tree of one source file
pub struct AstBuilder<'s> {
    source: &'s PreprocessedSource,
}

impl<'s> AstBuilder<'s> {
    pub fn new(source: &'s PreprocessedSource) -> Self {
        Self { source }
    }

    /// Build the AST for the `program` pair returned by the parser
    pub fn build_program(&self, mut pairs: Pairs<'_, Rule>) -> Result<Program, CompilerError> {
        let program = pairs
            .next()
            .ok_or_else(|| ParseError::malformed("program", "empty parse tree"))?;
        expect_rule(&program, Rule::program)?;

        let span = self.span(&program);
        let statements = program
            .into_inner()
            .filter(|pair| pair.as_rule() != Rule::EOI)
            .map(|pair| self.build_statement(pair))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Built AST for {} with {} top-level statements",
            self.source.filename(),
            statements.len()
        );
        Ok(Program { statements, span })
    }

    /// Statements of an indented or single-line block
    fn build_block(&self, pair: Pair<'_, Rule>) -> Result<Vec<Statement>, ParseError> {
        match pair.as_rule() {
            Rule::large_block | Rule::small_block => children(pair)
                .map(|stmt| self.build_statement(stmt))
                .collect(),
            other => Err(unexpected(other, "block")),
        }
    }

    /// Span of a pair in terms of the original source
    fn span(&self, pair: &Pair<'_, Rule>) -> SourceSpan {
        let span = pair.as_span();
        let (start_line, start_column) = span.start_pos().line_col();
        let (end_line, end_column) = span.end_pos().line_col();

        SourceSpan::new(
            self.source.original_location(start_line, start_column),
            self.source.original_location(end_line, end_column),
        )
    }
}

/// Content-bearing children of a pair, with keyword markers dropped
fn children<'i>(pair: Pair<'i, Rule>) -> impl Iterator<Item = Pair<'i, Rule>> {
    pair.into_inner().filter(|child| !is_keyword(child.as_rule()))
}

/// Next child of a production whose shape guarantees it exists
fn expect_child<'i>(
    children: &mut impl Iterator<Item = Pair<'i, Rule>>,
    parent: Rule,
    what: &str,
) -> Result<Pair<'i, Rule>, ParseError> {
    children
        .next()
        .ok_or_else(|| ParseError::malformed(format!("{:?}", parent), format!("missing {}", what)))
}

fn expect_rule(pair: &Pair<'_, Rule>, rule: Rule) -> Result<(), ParseError> {
    if pair.as_rule() == rule {
        Ok(())
    } else {
        Err(unexpected(pair.as_rule(), &format!("{:?}", rule)))
    }
}

fn unexpected(found: Rule, expected: &str) -> ParseError {
    ParseError::malformed(
        format!("{:?}", found),
        format!("unexpected node where {} was expected", expected),
    )
}

#[cfg(test)]
mod tests;
