//! Casper type tags
//!
//! Types are carried through the tree as written in declarations. The front
//! end performs no type checking, so these are tags rather than a full type
//! system.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a variable, parameter or function result
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Int,
    Float,
    Bool,
    String,
    Void,
    List,

    /// A callable value, either a declared function or a function-typed parameter
    Function(FunctionType),
}

impl Type {
    /// Map a type keyword to its tag
    pub fn from_keyword(keyword: &str) -> Option<Type> {
        match keyword {
            "int" => Some(Type::Int),
            "float" => Some(Type::Float),
            "bool" => Some(Type::Bool),
            "string" => Some(Type::String),
            "void" => Some(Type::Void),
            "list" => Some(Type::List),
            _ => None,
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Type::Function(_))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::Float => write!(f, "float"),
            Type::Bool => write!(f, "bool"),
            Type::String => write!(f, "string"),
            Type::Void => write!(f, "void"),
            Type::List => write!(f, "list"),
            Type::Function(function) => write!(f, "{}", function),
        }
    }
}

/// Signature of a callable: result type plus parameter types in order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionType {
    pub return_type: Box<Type>,
    pub parameters: Vec<Type>,
}

impl FunctionType {
    pub fn new(return_type: Type, parameters: Vec<Type>) -> Self {
        Self {
            return_type: Box::new(return_type),
            parameters,
        }
    }
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.return_type)?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param)?;
        }
        write!(f, ")")
    }
}
