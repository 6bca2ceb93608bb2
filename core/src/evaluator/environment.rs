//! The flat name→value table for one interpretation run.

use ecow::EcoString;
use hashbrown::HashMap;

use crate::evaluator::RuntimeError;
use crate::values::Value;

/// A single, unnested symbol table. Names are unique for the lifetime of
/// the run: `define` of an existing name is an error, never a shadow or an
/// overwrite, and `assign` requires a prior `define`.
#[derive(Debug, Default)]
pub struct Environment {
    symbols: HashMap<EcoString, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a new name. Fails with [`RuntimeError::Redefinition`] if the
    /// name already exists.
    pub fn define(&mut self, name: &EcoString, value: Value) -> Result<(), RuntimeError> {
        match self.symbols.entry(name.clone()) {
            hashbrown::hash_map::Entry::Occupied(_) => Err(RuntimeError::Redefinition {
                name: name.clone(),
            }),
            hashbrown::hash_map::Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(())
            }
        }
    }

    /// Overwrite an existing binding. Fails with
    /// [`RuntimeError::UndefinedIdentifier`] if the name was never defined.
    pub fn assign(&mut self, name: &EcoString, value: Value) -> Result<(), RuntimeError> {
        match self.symbols.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(RuntimeError::UndefinedIdentifier {
                name: name.clone(),
            }),
        }
    }

    /// Look up a binding.
    pub fn get(&self, name: &EcoString) -> Result<Value, RuntimeError> {
        self.symbols
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedIdentifier {
                name: name.clone(),
            })
    }
}
