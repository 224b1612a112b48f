//! Abstract Syntax Tree definitions for Casper
//!
//! This module defines the AST nodes that represent Casper language constructs.
//! The AST is built from the parse tree, annotated in place by semantic
//! analysis and rewritten by the optimizer.

pub mod ops;
pub mod expressions;
pub mod statements;

// Re-export commonly used types at module level
pub use ops::{BinaryOp, UnaryOp};
pub use expressions::{Argument, Call, Expression, ExpressionKind};
pub use statements::{
    Case, FunctionDeclaration, Parameter, Program, Statement, StatementKind,
    Variable, VariableDeclaration,
};

use casper_common::CompilerError;

impl Program {
    /// Serialize the tree, including any resolved symbols, as pretty JSON
    pub fn to_json(&self) -> Result<String, CompilerError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CompilerError::internal_error(format!("failed to serialize AST: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Type;
    use casper_common::SourceSpan;

    #[test]
    fn test_program_to_json() {
        let declaration = VariableDeclaration {
            var_type: Type::Int,
            names: vec!["x".to_string()],
            initializers: vec![Expression::new(
                ExpressionKind::NumericLiteral(1.0),
                SourceSpan::dummy(),
            )],
            variables: None,
        };
        let program = Program {
            statements: vec![Statement::new(
                StatementKind::VariableDeclaration(declaration),
                SourceSpan::dummy(),
            )],
            span: SourceSpan::dummy(),
        };

        let json = program.to_json().unwrap();
        assert!(json.contains("VariableDeclaration"));
        assert!(json.contains("\"names\""));

        let decoded: Program = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, program);
    }

    #[test]
    fn test_parameter_binding_type() {
        let plain = Parameter {
            param_type: Type::Int,
            name: "n".to_string(),
            function_type: None,
            default: None,
            span: SourceSpan::dummy(),
            symbol_id: None,
        };
        assert_eq!(plain.binding_type(), Type::Int);

        let callback = Parameter {
            function_type: Some(crate::types::FunctionType::new(Type::Bool, vec![Type::Int])),
            ..plain
        };
        assert!(callback.binding_type().is_function());
    }
}
