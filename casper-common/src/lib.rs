//! Casper Compiler - Common Types and Utilities
//!
//! This crate contains the error taxonomy and source location types
//! shared by every stage of the Casper front end.

pub mod error;
pub mod source_loc;

pub use error::{CompilerError, ErrorKind};
pub use source_loc::{SourceLocation, SourceSpan};

/// Symbol identifier assigned to every variable bound during analysis
pub type SymbolId = u32;
