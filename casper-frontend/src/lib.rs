//! Casper Compiler - Frontend
//!
//! This crate provides the frontend components for the Casper compiler:
//! - Parser: matches preprocessed source against the Casper grammar
//! - Builder: turns the parse tree into the AST
//! - AST: abstract syntax tree definitions
//! - Semantic analysis: scoping, symbol resolution, loop and arity checks
//! - Optimizer: constant folding and dead branch removal
//!
//! Indentation is handled before parsing by `casper-preprocessor`.

pub mod ast;
pub mod builder;
pub mod optimizer;
pub mod parser;
pub mod semantic;
pub mod types;

pub use ast::{
    BinaryOp, Expression, ExpressionKind, Program, Statement, StatementKind, UnaryOp,
};
pub use builder::AstBuilder;
pub use optimizer::Optimizer;
pub use parser::{CasperParser, ParseError, Rule};
pub use semantic::{AnalysisContext, SemanticAnalyzer, SemanticError};
pub use types::{FunctionType, Type};

use casper_common::CompilerError;
use casper_preprocessor::{PreprocessedSource, Preprocessor};

/// Settings for one run of the front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Name used in every reported location
    pub filename: String,
    /// Column width of a tab in indentation; `None` rejects tabs
    pub tab_width: Option<usize>,
    /// Run the optimizer after analysis
    pub optimize: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            filename: "<input>".to_string(),
            tab_width: None,
            optimize: true,
        }
    }
}

impl CompileOptions {
    pub fn with_filename(mut self, filename: &str) -> Self {
        self.filename = filename.to_string();
        self
    }

    pub fn with_tab_width(mut self, width: usize) -> Self {
        self.tab_width = Some(width);
        self
    }

    pub fn without_optimization(mut self) -> Self {
        self.optimize = false;
        self
    }
}

/// High-level frontend interface
pub struct Frontend;

impl Frontend {
    /// Run only the indentation preprocessor
    pub fn preprocess_source(source: &str) -> Result<PreprocessedSource, CompilerError> {
        Self::preprocess(source, &CompileOptions::default())
    }

    /// Parse Casper source code into an AST
    pub fn parse_source(source: &str) -> Result<Program, CompilerError> {
        Self::parse(source, &CompileOptions::default())
    }

    /// Parse and analyze Casper source code
    pub fn analyze_source(source: &str) -> Result<Program, CompilerError> {
        Self::analyze(source, &CompileOptions::default())
    }

    /// Parse, analyze and optimize Casper source code
    pub fn compile_source(source: &str) -> Result<Program, CompilerError> {
        Self::compile_with_options(source, &CompileOptions::default())
    }

    /// Full pipeline with explicit settings
    pub fn compile_with_options(source: &str, options: &CompileOptions) -> Result<Program, CompilerError> {
        let ast = Self::analyze(source, options)?;

        if options.optimize {
            Ok(Optimizer::optimize_program(ast))
        } else {
            Ok(ast)
        }
    }

    fn preprocess(source: &str, options: &CompileOptions) -> Result<PreprocessedSource, CompilerError> {
        let mut preprocessor = Preprocessor::new();
        preprocessor.set_tab_width(options.tab_width);
        Ok(preprocessor.process(source, &options.filename)?)
    }

    fn parse(source: &str, options: &CompileOptions) -> Result<Program, CompilerError> {
        let preprocessed = Self::preprocess(source, options)?;
        let tree = parser::parse_tree(&preprocessed)?;
        AstBuilder::new(&preprocessed).build_program(tree)
    }

    fn analyze(source: &str, options: &CompileOptions) -> Result<Program, CompilerError> {
        let mut ast = Self::parse(source, options)?;

        let analyzer = SemanticAnalyzer::new();
        analyzer.analyze(&mut ast)?;

        Ok(ast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casper_common::ErrorKind;

    #[test]
    fn test_frontend_parse_simple_function() {
        let source = "int main():\n    return 42\n";

        let ast = Frontend::parse_source(source).unwrap();
        assert_eq!(ast.statements.len(), 1);

        match &ast.statements[0].kind {
            StatementKind::FunctionDeclaration(func) => {
                assert_eq!(func.name, "main");
                assert_eq!(func.return_type, Type::Int);
            }
            _ => panic!("Expected function declaration"),
        }
    }

    #[test]
    fn test_frontend_preprocess() {
        let preprocessed = Frontend::preprocess_source("while x:\n  x = 1\n").unwrap();
        assert_eq!(preprocessed.marker_counts(), (1, 1));
        assert_eq!(preprocessed.filename(), "<input>");
    }

    #[test]
    fn test_each_stage_reports_its_own_error_kind() {
        let indentation = Frontend::compile_source("if a:\n    x = 1\n  y = 2\n").unwrap_err();
        assert_eq!(indentation.kind(), ErrorKind::Indentation);

        let syntax = Frontend::compile_source("int = 3\n").unwrap_err();
        assert_eq!(syntax.kind(), ErrorKind::Syntax);

        let semantic = Frontend::compile_source("y = 3\n").unwrap_err();
        assert_eq!(semantic.kind(), ErrorKind::Semantic);
    }

    #[test]
    fn test_compile_options() {
        let options = CompileOptions::default()
            .with_filename("main.casper")
            .with_tab_width(4)
            .without_optimization();

        let program = Frontend::compile_with_options("if true:\n\tint x = 1 + 1\n", &options).unwrap();
        assert!(matches!(program.statements[0].kind, StatementKind::If { .. }));
        assert_eq!(program.span.start.filename, "main.casper");

        let err = Frontend::compile_with_options("x = 1\n", &options).unwrap_err();
        assert_eq!(err.location().map(|l| l.filename.as_str()), Some("main.casper"));
    }

    #[test]
    fn test_parse_does_not_resolve_symbols() {
        // Parsing alone accepts undefined names
        let ast = Frontend::parse_source("y = z\n").unwrap();
        let StatementKind::Assignment { values, .. } = &ast.statements[0].kind else {
            panic!("Expected assignment");
        };
        assert_eq!(values[0].symbol_id(), None);
    }
}
