//! Semantic Analysis for Casper
//!
//! Resolves every identifier to the variable it names, enforces lexical
//! scoping, rejects `break` outside loops and checks that assignments pair
//! targets with values one to one. Results are written back into the AST:
//! identifier `symbol_id`s, declaration `variables`, function and parameter
//! symbols. There is no type checking beyond that.

pub mod context;
pub mod errors;
pub mod expressions;
pub mod statements;

use crate::ast::*;
use casper_common::CompilerError;
use log::debug;

pub use context::AnalysisContext;
pub use errors::SemanticError;
use statements::StatementAnalyzer;

/// Semantic analyzer entry point
pub struct SemanticAnalyzer {
    statements: StatementAnalyzer,
}

impl SemanticAnalyzer {
    /// Create a new semantic analyzer
    pub fn new() -> Self {
        Self {
            statements: StatementAnalyzer::new(),
        }
    }

    /// Analyze a program in place, starting from an empty root context.
    /// Stops at the first violation in source order.
    pub fn analyze(&self, program: &mut Program) -> Result<(), CompilerError> {
        let mut context = AnalysisContext::new();
        self.statements.analyze_body(&mut program.statements, &mut context)?;

        debug!(
            "Semantic analysis complete: {} top-level statements",
            program.statements.len()
        );
        Ok(())
    }
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
