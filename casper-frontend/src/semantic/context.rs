//! Scope and loop state threaded through analysis

use crate::ast::Variable;
use crate::semantic::errors::SemanticError;
use crate::types::Type;
use casper_common::{SourceLocation, SymbolId};
use log::trace;
use std::collections::HashMap;

/// Lexical scopes plus the "inside a loop" flag.
///
/// The outermost scope is never popped. Lookups walk from the innermost
/// scope outwards, so inner declarations shadow outer ones.
#[derive(Debug)]
pub struct AnalysisContext {
    scopes: Vec<HashMap<String, Variable>>,
    in_loop: bool,
    next_symbol_id: SymbolId,
    symbol_locations: HashMap<SymbolId, SourceLocation>, // For error reporting
}

impl AnalysisContext {
    /// Root context: a single empty scope, outside any loop
    pub fn new() -> Self {
        Self {
            scopes: vec![HashMap::new()],
            in_loop: false,
            next_symbol_id: 0,
            symbol_locations: HashMap::new(),
        }
    }

    /// Bind `name` in the innermost scope
    pub fn declare(
        &mut self,
        name: &str,
        var_type: Type,
        location: &SourceLocation,
    ) -> Result<Variable, SemanticError> {
        if let Some(existing) = self.lookup_in_current_scope(name) {
            let original_location = self
                .symbol_locations
                .get(&existing.symbol_id)
                .cloned()
                .unwrap_or_else(SourceLocation::dummy);
            return Err(SemanticError::RedefinedSymbol {
                name: name.to_string(),
                original_location,
                redefinition_location: location.clone(),
            });
        }

        let variable = Variable {
            symbol_id: self.next_symbol_id,
            name: name.to_string(),
            var_type,
        };
        self.next_symbol_id += 1;
        trace!(
            "declare {} as symbol {} at depth {}",
            name,
            variable.symbol_id,
            self.depth()
        );

        self.symbol_locations.insert(variable.symbol_id, location.clone());
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), variable.clone());
        }
        Ok(variable)
    }

    /// Resolve `name` through the scope chain, innermost first
    pub fn lookup(&self, name: &str) -> Option<&Variable> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    pub fn lookup_in_current_scope(&self, name: &str) -> Option<&Variable> {
        self.scopes.last().and_then(|scope| scope.get(name))
    }

    pub fn in_loop(&self) -> bool {
        self.in_loop
    }

    /// Number of open scopes, including the root
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Run `f` inside a fresh child scope. The scope is closed again on every
    /// exit path, including errors.
    pub fn with_scope<T, E>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, E>) -> Result<T, E> {
        self.scopes.push(HashMap::new());
        let result = f(self);
        self.scopes.pop();
        result
    }

    /// Run `f` with the loop flag set to `in_loop`, restoring it afterwards
    pub fn with_loop<T, E>(
        &mut self,
        in_loop: bool,
        f: impl FnOnce(&mut Self) -> Result<T, E>,
    ) -> Result<T, E> {
        let previous = std::mem::replace(&mut self.in_loop, in_loop);
        let result = f(self);
        self.in_loop = previous;
        result
    }
}

impl Default for AnalysisContext {
    fn default() -> Self {
        Self::new()
    }
}
